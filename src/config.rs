//! Configuration management for the inventory service

use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "infra-inventory", version, about)]
pub struct Config {
    /// Address the HTTP server binds to
    #[arg(long, env = "BIND_HOST", default_value = "0.0.0.0")]
    pub bind_host: String,

    /// Port the HTTP server listens on
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Number of actix worker threads (0 uses the number of CPUs)
    #[arg(long, env = "WORKERS", default_value_t = 0)]
    pub workers: usize,

    /// Load the sample hosts, servers and websites at startup
    #[arg(long, env = "SEED_SAMPLE_DATA", default_value_t = true, action = ArgAction::Set)]
    pub seed_sample_data: bool,

    /// JSON snapshot file the inventory is loaded from and saved to
    #[arg(long, env = "DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Json)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_host: "0.0.0.0".to_string(),
            port: 5000,
            workers: 0,
            seed_sample_data: true,
            data_file: None,
            log_level: "info".to_string(),
            log_format: LogFormat::Json,
        }
    }
}

impl Config {
    /// Load configuration from `.env`, the environment and the command line
    pub fn load() -> Self {
        // a missing .env file is fine
        dotenv::dotenv().ok();
        Config::parse()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.bind_host.trim().is_empty() {
            return Err("bind_host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("port must be greater than 0".to_string());
        }

        if self.log_level.trim().is_empty() {
            return Err("log_level cannot be empty".to_string());
        }

        if let Some(path) = &self.data_file {
            if path.as_os_str().is_empty() {
                return Err("data_file cannot be an empty path".to_string());
            }
            if path.is_dir() {
                return Err(format!("data_file {} is a directory", path.display()));
            }
        }

        Ok(())
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.bind_host.clone(), self.port)
    }
}
