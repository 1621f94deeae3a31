use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::host::non_empty;
use super::validation::{port_number, require_id, require_port, require_text};
use super::{EntityKind, Status, filter_value};
use crate::errors::{InventoryError, Result};

pub const DEFAULT_PROTOCOL: &str = "http";

/// A service bound to a host and port
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    pub id: u32,
    pub name: String,
    pub host_id: u32,
    pub port: u16,
    pub protocol: String,
    pub description: Option<String>,
    pub status: Status,
    pub uptime: String,
    pub response_time: Option<String>,
    pub last_check: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewServer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub host_id: u32,
    /// Kept wide so out-of-range ports reach validation
    #[serde(default)]
    pub port: i64,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerUpdate {
    pub name: Option<String>,
    pub host_id: Option<u32>,
    pub port: Option<i64>,
    pub protocol: Option<String>,
    pub description: Option<String>,
    pub status: Option<Status>,
    pub uptime: Option<String>,
    pub response_time: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerFilter {
    pub search: Option<String>,
    pub status: Option<String>,
    pub host_id: Option<String>,
    pub protocol: Option<String>,
}

impl Server {
    /// Build a record from a payload that has passed `NewServer::validate`
    pub fn new(id: u32, new: NewServer, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name.trim().to_string(),
            host_id: new.host_id,
            port: port_number(new.port).unwrap_or_default(),
            protocol: non_empty(new.protocol)
                .map(|p| p.trim().to_lowercase())
                .unwrap_or_else(|| DEFAULT_PROTOCOL.to_string()),
            description: non_empty(new.description),
            status: Status::default(),
            uptime: "0%".to_string(),
            response_time: None,
            last_check: now,
        }
    }

    pub fn apply(&mut self, update: ServerUpdate, now: DateTime<Utc>) {
        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(host_id) = update.host_id {
            self.host_id = host_id;
        }
        if let Some(port) = update.port.and_then(port_number) {
            self.port = port;
        }
        if let Some(protocol) = update.protocol {
            self.protocol = protocol.trim().to_lowercase();
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

impl NewServer {
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        require_text(&mut errors, "name", &self.name, "Name is required");
        require_id(&mut errors, "hostId", self.host_id, "Host is required");
        require_port(&mut errors, "port", self.port);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(InventoryError::Validation(EntityKind::Server, errors))
        }
    }
}

impl ServerUpdate {
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        if let Some(name) = &self.name {
            require_text(&mut errors, "name", name, "Name is required");
        }
        if let Some(host_id) = self.host_id {
            require_id(&mut errors, "hostId", host_id, "Host is required");
        }
        if let Some(port) = self.port {
            require_port(&mut errors, "port", port);
        }
        if let Some(protocol) = &self.protocol {
            require_text(&mut errors, "protocol", protocol, "Protocol is required");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(InventoryError::Validation(EntityKind::Server, errors))
        }
    }
}

impl ServerFilter {
    pub fn matches(&self, server: &Server) -> bool {
        let matches_search = filter_value(&self.search)
            .is_none_or(|term| server.name.to_lowercase().contains(&term.to_lowercase()));
        let matches_status = filter_value(&self.status)
            .is_none_or(|s| server.status.as_str().eq_ignore_ascii_case(s));
        let matches_host = filter_value(&self.host_id)
            .is_none_or(|id| id.parse::<u32>().is_ok_and(|id| id == server.host_id));
        let matches_protocol = filter_value(&self.protocol)
            .is_none_or(|p| server.protocol.eq_ignore_ascii_case(p));

        matches_search && matches_status && matches_host && matches_protocol
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FieldError;

    fn new_server() -> NewServer {
        NewServer {
            name: "Nginx Web Server".to_string(),
            host_id: 1,
            port: 80,
            protocol: None,
            description: Some("Main web server".to_string()),
        }
    }

    #[test]
    fn test_protocol_defaults_to_http() {
        let server = Server::new(1, new_server(), Utc::now());
        assert_eq!(server.protocol, "http");
        assert_eq!(server.description.as_deref(), Some("Main web server"));
    }

    #[test]
    fn test_validate_port_and_host() {
        let new = NewServer {
            port: 0,
            host_id: 0,
            ..new_server()
        };
        match new.validate() {
            Err(InventoryError::Validation(_, errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_port_reaches_validation() {
        let new: NewServer =
            serde_json::from_str(r#"{"name":"x","hostId":1,"port":70000}"#).unwrap();
        match new.validate() {
            Err(InventoryError::Validation(_, errors)) => {
                assert_eq!(
                    errors,
                    vec![FieldError::new("port", "Port must be between 1 and 65535")]
                );
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let new: NewServer = serde_json::from_str("{}").unwrap();
        match new.validate() {
            Err(InventoryError::Validation(_, errors)) => {
                let paths: Vec<&str> = errors.iter().map(|e| e.path.as_str()).collect();
                assert_eq!(paths, vec!["name", "hostId", "port"]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_filter_by_host_id() {
        let server = Server::new(3, new_server(), Utc::now());
        let filter = ServerFilter {
            host_id: Some("1".to_string()),
            ..ServerFilter::default()
        };
        assert!(filter.matches(&server));

        let filter = ServerFilter {
            host_id: Some("two".to_string()),
            ..ServerFilter::default()
        };
        assert!(!filter.matches(&server));
    }
}
