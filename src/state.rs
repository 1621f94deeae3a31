use std::sync::Arc;

use crate::config::Config;
use crate::errors::{InventoryError, Result};
use crate::services::inventory::{InventoryStore, MemoryStore};

// App state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn InventoryStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn InventoryStore>) -> Self {
        Self { store }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate().map_err(InventoryError::Config)?;

        let store = MemoryStore::open(config)?;
        Ok(Self::new(Arc::new(store)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HostFilter;

    #[tokio::test]
    async fn test_from_config_without_seed_is_empty() {
        let config = Config {
            seed_sample_data: false,
            ..Config::default()
        };
        let state = AppState::from_config(&config).unwrap();

        let hosts = state.store.list_hosts(&HostFilter::default()).await.unwrap();
        assert!(hosts.is_empty());
    }

    #[test]
    fn test_from_config_rejects_invalid_config() {
        let config = Config {
            bind_host: String::new(),
            ..Config::default()
        };
        assert!(matches!(
            AppState::from_config(&config),
            Err(InventoryError::Config(_))
        ));
    }
}
