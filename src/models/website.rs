use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::host::non_empty;
use super::validation::{require_id, require_text, require_url};
use super::{EntityKind, Status, filter_value};
use crate::errors::{InventoryError, Result};

/// A front-end served by a server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Website {
    pub id: u32,
    pub name: String,
    pub url: String,
    pub server_id: u32,
    pub description: Option<String>,
    pub status: Status,
    pub uptime: String,
    pub response_time: Option<String>,
    pub last_check: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWebsite {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub server_id: u32,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteUpdate {
    pub name: Option<String>,
    pub url: Option<String>,
    pub server_id: Option<u32>,
    pub description: Option<String>,
    pub status: Option<Status>,
    pub uptime: Option<String>,
    pub response_time: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteFilter {
    pub search: Option<String>,
    pub status: Option<String>,
    pub server_id: Option<String>,
}

impl Website {
    pub fn new(id: u32, new: NewWebsite, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name.trim().to_string(),
            url: new.url.trim().to_string(),
            server_id: new.server_id,
            description: non_empty(new.description),
            status: Status::default(),
            uptime: "0%".to_string(),
            response_time: None,
            last_check: now,
        }
    }

    pub fn apply(&mut self, update: WebsiteUpdate, now: DateTime<Utc>) {
        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(url) = update.url {
            self.url = url.trim().to_string();
        }
        if let Some(server_id) = update.server_id {
            self.server_id = server_id;
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

impl NewWebsite {
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        require_text(&mut errors, "name", &self.name, "Name is required");
        require_url(&mut errors, "url", &self.url);
        require_id(&mut errors, "serverId", self.server_id, "Server is required");

        if errors.is_empty() {
            Ok(())
        } else {
            Err(InventoryError::Validation(EntityKind::Website, errors))
        }
    }
}

impl WebsiteUpdate {
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        if let Some(name) = &self.name {
            require_text(&mut errors, "name", name, "Name is required");
        }
        if let Some(url) = &self.url {
            require_url(&mut errors, "url", url);
        }
        if let Some(server_id) = self.server_id {
            require_id(&mut errors, "serverId", server_id, "Server is required");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(InventoryError::Validation(EntityKind::Website, errors))
        }
    }
}

impl WebsiteFilter {
    pub fn matches(&self, website: &Website) -> bool {
        let matches_search = filter_value(&self.search).is_none_or(|term| {
            let term = term.to_lowercase();
            website.name.to_lowercase().contains(&term) || website.url.to_lowercase().contains(&term)
        });
        let matches_status = filter_value(&self.status)
            .is_none_or(|s| website.status.as_str().eq_ignore_ascii_case(s));
        let matches_server = filter_value(&self.server_id)
            .is_none_or(|id| id.parse::<u32>().is_ok_and(|id| id == website.server_id));

        matches_search && matches_status && matches_server
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_is_reported() {
        let new = NewWebsite {
            name: "Docs".to_string(),
            url: "not a url".to_string(),
            server_id: 2,
            description: None,
        };
        match new.validate() {
            Err(InventoryError::Validation(EntityKind::Website, errors)) => {
                assert_eq!(errors[0].path, "url");
                assert_eq!(errors[0].message, "Invalid URL format");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_search_matches_url() {
        let website = Website::new(
            1,
            NewWebsite {
                name: "API Documentation".to_string(),
                url: "https://api.company.com/docs".to_string(),
                server_id: 2,
                description: None,
            },
            Utc::now(),
        );

        let filter = WebsiteFilter {
            search: Some("Company.com".to_string()),
            ..WebsiteFilter::default()
        };
        assert!(filter.matches(&website));

        let filter = WebsiteFilter {
            server_id: Some("1".to_string()),
            ..WebsiteFilter::default()
        };
        assert!(!filter.matches(&website));
    }
}
