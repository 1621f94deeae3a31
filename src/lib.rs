//! Infrastructure Inventory API
//!
//! Tracks hosts, the servers bound to them and the websites those servers
//! deliver, each with a simulated status, and serves them as JSON over HTTP.

pub mod config;
pub mod controllers;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;

pub use config::{Config, LogFormat};
pub use errors::{FieldError, InventoryError, Result};
pub use services::inventory::{Inventory, InventoryStore, MemoryStore};
pub use state::AppState;
