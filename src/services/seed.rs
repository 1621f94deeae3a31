//! Sample inventory loaded on a fresh start

use chrono::Utc;

use crate::errors::Result;
use crate::models::{NewHost, NewServer, NewWebsite, Status, StatusWrite};
use crate::services::inventory::Inventory;

struct Sample<T> {
    payload: T,
    status: Status,
    uptime: &'static str,
    response_time: Option<&'static str>,
}

fn sample<T>(
    payload: T,
    status: Status,
    uptime: &'static str,
    response_time: Option<&'static str>,
) -> Sample<T> {
    Sample {
        payload,
        status,
        uptime,
        response_time,
    }
}

fn write_for<T>(sample: &Sample<T>) -> StatusWrite {
    StatusWrite {
        status: sample.status,
        uptime: Some(sample.uptime.to_string()),
        response_time: sample.response_time.map(str::to_string),
    }
}

fn host(hostname: &str, ip_address: &str, location: &str, description: &str) -> NewHost {
    NewHost {
        hostname: hostname.to_string(),
        ip_address: ip_address.to_string(),
        location: location.to_string(),
        description: Some(description.to_string()),
    }
}

fn server(name: &str, host_id: u32, port: i64, protocol: &str, description: &str) -> NewServer {
    NewServer {
        name: name.to_string(),
        host_id,
        port,
        protocol: Some(protocol.to_string()),
        description: Some(description.to_string()),
    }
}

fn website(name: &str, url: &str, server_id: u32, description: &str) -> NewWebsite {
    NewWebsite {
        name: name.to_string(),
        url: url.to_string(),
        server_id,
        description: Some(description.to_string()),
    }
}

/// Three hosts, three servers and three websites wired parent to child
pub fn sample_inventory() -> Result<Inventory> {
    let now = Utc::now();
    let mut inventory = Inventory::default();

    let hosts = [
        sample(
            host("web-host-01", "192.168.1.10", "us-east", "Primary web hosting server"),
            Status::Online,
            "99.9%",
            Some("45ms"),
        ),
        sample(
            host("app-host-02", "192.168.1.20", "us-west", "Application hosting server"),
            Status::Offline,
            "95.2%",
            None,
        ),
        sample(
            host("db-host-03", "192.168.1.30", "eu-west", "Database hosting server"),
            Status::Warning,
            "98.7%",
            Some("120ms"),
        ),
    ];
    for entry in hosts {
        let write = write_for(&entry);
        let created = inventory.create_host(entry.payload, now)?;
        inventory.record_host_status(created.id, &write, now)?;
    }

    let servers = [
        sample(
            server("Nginx Web Server", 1, 80, "http", "Main web server"),
            Status::Online,
            "99.8%",
            Some("25ms"),
        ),
        sample(
            server("Node.js API Server", 2, 3000, "http", "API backend server"),
            Status::Offline,
            "94.5%",
            None,
        ),
        sample(
            server("PostgreSQL Database", 3, 5432, "tcp", "Primary database"),
            Status::Warning,
            "97.2%",
            Some("150ms"),
        ),
    ];
    for entry in servers {
        let write = write_for(&entry);
        let created = inventory.create_server(entry.payload, now)?;
        inventory.record_server_status(created.id, &write, now)?;
    }

    let websites = [
        sample(
            website("Company Website", "https://company.com", 1, "Main company website"),
            Status::Online,
            "99.7%",
            Some("180ms"),
        ),
        sample(
            website("Admin Dashboard", "https://admin.company.com", 1, "Admin control panel"),
            Status::Offline,
            "92.1%",
            None,
        ),
        sample(
            website("API Documentation", "https://api.company.com/docs", 2, "API documentation site"),
            Status::Warning,
            "96.8%",
            Some("320ms"),
        ),
    ];
    for entry in websites {
        let write = write_for(&entry);
        let created = inventory.create_website(entry.payload, now)?;
        inventory.record_website_status(created.id, &write, now)?;
    }

    Ok(inventory)
}
