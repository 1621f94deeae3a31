use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{require_ipv4, require_text};
use super::{EntityKind, Status, filter_value};
use crate::errors::{InventoryError, Result};

/// A physical or virtual machine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Host {
    pub id: u32,
    pub hostname: String,
    pub ip_address: String,
    pub location: String,
    pub description: Option<String>,
    pub status: Status,
    pub uptime: String,
    pub response_time: Option<String>,
    pub last_check: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHost {
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub ip_address: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostUpdate {
    pub hostname: Option<String>,
    pub ip_address: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub status: Option<Status>,
    pub uptime: Option<String>,
    pub response_time: Option<String>,
}

/// List filters offered by the dashboard's search box and selects
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HostFilter {
    pub search: Option<String>,
    pub status: Option<String>,
    pub location: Option<String>,
}

impl Host {
    pub fn new(id: u32, new: NewHost, now: DateTime<Utc>) -> Self {
        Self {
            id,
            hostname: new.hostname.trim().to_string(),
            ip_address: new.ip_address.trim().to_string(),
            location: new.location.trim().to_string(),
            description: non_empty(new.description),
            status: Status::default(),
            uptime: "0%".to_string(),
            response_time: None,
            last_check: now,
        }
    }

    pub fn apply(&mut self, update: HostUpdate, now: DateTime<Utc>) {
        if let Some(hostname) = update.hostname {
            self.hostname = hostname.trim().to_string();
        }
        if let Some(ip_address) = update.ip_address {
            self.ip_address = ip_address.trim().to_string();
        }
        if let Some(location) = update.location {
            self.location = location.trim().to_string();
        }
        if let Some(description) = update.description {
            self.description = non_empty(Some(description));
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(uptime) = update.uptime {
            self.uptime = uptime;
        }
        if let Some(response_time) = update.response_time {
            self.response_time = non_empty(Some(response_time));
        }
        self.last_check = now;
    }
}

impl NewHost {
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        require_text(&mut errors, "hostname", &self.hostname, "Hostname is required");
        require_ipv4(&mut errors, "ipAddress", &self.ip_address);
        require_text(&mut errors, "location", &self.location, "Location is required");

        if errors.is_empty() {
            Ok(())
        } else {
            Err(InventoryError::Validation(EntityKind::Host, errors))
        }
    }
}

impl HostUpdate {
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        if let Some(hostname) = &self.hostname {
            require_text(&mut errors, "hostname", hostname, "Hostname is required");
        }
        if let Some(ip_address) = &self.ip_address {
            require_ipv4(&mut errors, "ipAddress", ip_address);
        }
        if let Some(location) = &self.location {
            require_text(&mut errors, "location", location, "Location is required");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(InventoryError::Validation(EntityKind::Host, errors))
        }
    }
}

impl HostFilter {
    pub fn matches(&self, host: &Host) -> bool {
        let matches_search = filter_value(&self.search).is_none_or(|term| {
            host.hostname.to_lowercase().contains(&term.to_lowercase())
                || host.ip_address.contains(term)
        });
        let matches_status =
            filter_value(&self.status).is_none_or(|s| host.status.as_str().eq_ignore_ascii_case(s));
        let matches_location =
            filter_value(&self.location).is_none_or(|l| host.location.eq_ignore_ascii_case(l));

        matches_search && matches_status && matches_location
    }
}

pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
