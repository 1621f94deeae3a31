//! Simulated status checks
//!
//! Nothing is probed here. A status body supplied by the client is recorded
//! as given; an empty body gets a random status, uptime and response time.

use rand::Rng;

use crate::models::{EntityKind, Status, StatusReport, StatusWrite};

/// Upper bound (exclusive) for generated response times, in milliseconds
pub fn max_response_ms(kind: EntityKind) -> u32 {
    match kind {
        EntityKind::Host | EntityKind::Server => 200,
        EntityKind::Website => 500,
    }
}

pub fn resolve(kind: EntityKind, report: StatusReport) -> StatusWrite {
    resolve_with(kind, report, &mut rand::rng())
}

pub fn resolve_with<R: Rng + ?Sized>(
    kind: EntityKind,
    report: StatusReport,
    rng: &mut R,
) -> StatusWrite {
    match report.status {
        Some(status) => StatusWrite {
            status,
            uptime: report.uptime,
            response_time: report.response_time,
        },
        None => StatusWrite {
            status: Status::random_with(rng),
            uptime: report.uptime.or_else(|| Some(random_uptime(rng))),
            response_time: report
                .response_time
                .or_else(|| Some(random_response_time(kind, rng))),
        },
    }
}

fn random_uptime<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{:.1}%", rng.random_range(0.0..=100.0_f64))
}

fn random_response_time<R: Rng + ?Sized>(kind: EntityKind, rng: &mut R) -> String {
    format!("{}ms", rng.random_range(0..max_response_ms(kind)))
}
