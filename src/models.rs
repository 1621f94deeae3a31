pub mod host;
pub mod server;
pub mod stats;
pub mod status;
pub mod validation;
pub mod website;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use host::{Host, HostFilter, HostUpdate, NewHost};
pub use server::{NewServer, Server, ServerFilter, ServerUpdate};
pub use stats::{DashboardStats, StatusCounts};
pub use status::Status;
pub use website::{NewWebsite, Website, WebsiteFilter, WebsiteUpdate};

/// The three kinds of inventory entity, parent first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Host,
    Server,
    Website,
}

impl EntityKind {
    pub fn title(self) -> &'static str {
        match self {
            EntityKind::Host => "Host",
            EntityKind::Server => "Server",
            EntityKind::Website => "Website",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            EntityKind::Host => "hosts",
            EntityKind::Server => "servers",
            EntityKind::Website => "websites",
        }
    }

    /// The kind whose rows reference this one
    pub fn child(self) -> Option<EntityKind> {
        match self {
            EntityKind::Host => Some(EntityKind::Server),
            EntityKind::Server => Some(EntityKind::Website),
            EntityKind::Website => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Host => write!(f, "host"),
            EntityKind::Server => write!(f, "server"),
            EntityKind::Website => write!(f, "website"),
        }
    }
}

/// Query filter value where `all` or an empty string matches everything
pub(crate) fn filter_value(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}

/// Status body accepted by the status endpoints; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub status: Option<Status>,
    pub uptime: Option<String>,
    pub response_time: Option<String>,
}

/// A resolved status write, ready to be recorded on an entity
#[derive(Debug, Clone, PartialEq)]
pub struct StatusWrite {
    pub status: Status,
    pub uptime: Option<String>,
    pub response_time: Option<String>,
}

/// Entities that carry the status, uptime and last-check fields
pub trait Monitored {
    fn status(&self) -> Status;

    /// Uptime and response time are only overwritten when non-empty
    fn record_status(&mut self, write: &StatusWrite, now: DateTime<Utc>);
}

macro_rules! impl_monitored {
    ($($entity:ty),+) => {
        $(
            impl Monitored for $entity {
                fn status(&self) -> Status {
                    self.status
                }

                fn record_status(&mut self, write: &StatusWrite, now: DateTime<Utc>) {
                    self.status = write.status;
                    if let Some(uptime) = write.uptime.as_deref().filter(|u| !u.trim().is_empty()) {
                        self.uptime = uptime.to_string();
                    }
                    if let Some(response_time) =
                        write.response_time.as_deref().filter(|r| !r.trim().is_empty())
                    {
                        self.response_time = Some(response_time.to_string());
                    }
                    self.last_check = now;
                }
            }
        )+
    };
}

impl_monitored!(Host, Server, Website);
