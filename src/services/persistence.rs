//! JSON snapshot file for the in-memory inventory

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::errors::Result;
use crate::services::inventory::Inventory;

#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot, or `None` when the file does not exist yet
    pub fn load(&self) -> Result<Option<Inventory>> {
        if !self.path.exists() {
            debug!("No snapshot at {}", self.path.display());
            return Ok(None);
        }

        let bytes = std::fs::read(&self.path)?;
        let inventory: Inventory = serde_json::from_slice(&bytes)?;
        info!(
            "Loaded snapshot {} ({} hosts, {} servers, {} websites)",
            self.path.display(),
            inventory.hosts.len(),
            inventory.servers.len(),
            inventory.websites.len()
        );

        Ok(Some(inventory))
    }

    /// Write the snapshot next to the target and rename it into place
    pub async fn save(&self, inventory: &Inventory) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(inventory)?;
        let tmp = self.path.with_extension("json.tmp");

        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        debug!("Saved snapshot {} ({} bytes)", self.path.display(), bytes.len());
        Ok(())
    }
}
