use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reported state of a host, server or website
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Online,
    #[default]
    Offline,
    Warning,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Online, Status::Offline, Status::Warning];

    /// Pick one of the three states uniformly
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Online => "online",
            Status::Offline => "offline",
            Status::Warning => "warning",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "online" => Ok(Status::Online),
            "offline" => Ok(Status::Offline),
            "warning" => Ok(Status::Warning),
            other => Err(format!("unknown status: {}", other)),
        }
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse::<Status>().map_err(serde::de::Error::custom)
    }
}
