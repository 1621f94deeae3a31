use serde::{Deserialize, Serialize};

use super::Status;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub total_count: usize,
    pub online_count: usize,
    pub offline_count: usize,
    pub warning_count: usize,
}

impl StatusCounts {
    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = Status>,
    {
        statuses
            .into_iter()
            .fold(StatusCounts::default(), |mut counts, status| {
                counts.total_count += 1;
                match status {
                    Status::Online => counts.online_count += 1,
                    Status::Offline => counts.offline_count += 1,
                    Status::Warning => counts.warning_count += 1,
                }
                counts
            })
    }
}

/// Counts shown on the dashboard's stats panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub hosts: StatusCounts,
    pub servers: StatusCounts,
    pub websites: StatusCounts,
    /// Website counts repeated at the top level for older dashboards
    #[serde(flatten)]
    pub legacy: StatusCounts,
}

impl DashboardStats {
    pub fn new(hosts: StatusCounts, servers: StatusCounts, websites: StatusCounts) -> Self {
        Self {
            hosts,
            servers,
            websites,
            legacy: websites,
        }
    }
}
