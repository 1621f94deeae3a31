//! Inventory storage
//!
//! `Inventory` holds the three collections and enforces the parent/child
//! rules: a server must point at an existing host, a website at an existing
//! server, and a parent cannot be deleted while children reference it.
//! `MemoryStore` wraps it behind an async lock and, when configured, commits
//! every mutation to a snapshot file before it becomes visible.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::config::Config;
use crate::errors::{FieldError, InventoryError, Result};
use crate::models::{
    DashboardStats, EntityKind, Host, HostFilter, HostUpdate, Monitored, NewHost, NewServer,
    NewWebsite, Server, ServerFilter, ServerUpdate, StatusCounts, StatusWrite, Website,
    WebsiteFilter, WebsiteUpdate,
};
use crate::services::persistence::SnapshotFile;
use crate::services::seed;

/// Next id per kind; wider than an id so a stored `u32::MAX` still has a
/// successor to record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct NextIds {
    host: u64,
    server: u64,
    website: u64,
}

impl Default for NextIds {
    fn default() -> Self {
        Self {
            host: 1,
            server: 1,
            website: 1,
        }
    }
}

fn allocate(counter: &mut u64, kind: EntityKind) -> Result<u32> {
    let id = u32::try_from((*counter).max(1))
        .map_err(|_| InventoryError::IdsExhausted(kind))?;
    *counter = u64::from(id) + 1;
    Ok(id)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    pub hosts: BTreeMap<u32, Host>,
    pub servers: BTreeMap<u32, Server>,
    pub websites: BTreeMap<u32, Website>,
    #[serde(default)]
    next_ids: NextIds,
}

impl Inventory {
    /// Move the id counters past every stored id so ids are never reused
    pub fn normalize(&mut self) {
        fn past<T>(map: &BTreeMap<u32, T>, counter: &mut u64) {
            let floor = map.keys().next_back().map_or(1, |id| u64::from(*id) + 1);
            *counter = (*counter).max(floor);
        }

        past(&self.hosts, &mut self.next_ids.host);
        past(&self.servers, &mut self.next_ids.server);
        past(&self.websites, &mut self.next_ids.website);
    }

    pub fn host(&self, id: u32) -> Result<&Host> {
        self.hosts
            .get(&id)
            .ok_or(InventoryError::NotFound(EntityKind::Host, id))
    }

    pub fn server(&self, id: u32) -> Result<&Server> {
        self.servers
            .get(&id)
            .ok_or(InventoryError::NotFound(EntityKind::Server, id))
    }

    pub fn website(&self, id: u32) -> Result<&Website> {
        self.websites
            .get(&id)
            .ok_or(InventoryError::NotFound(EntityKind::Website, id))
    }

    fn require_host(&self, kind: EntityKind, host_id: u32) -> Result<()> {
        if self.hosts.contains_key(&host_id) {
            Ok(())
        } else {
            Err(InventoryError::Validation(
                kind,
                vec![FieldError::new("hostId", "Host not found")],
            ))
        }
    }

    fn require_server(&self, kind: EntityKind, server_id: u32) -> Result<()> {
        if self.servers.contains_key(&server_id) {
            Ok(())
        } else {
            Err(InventoryError::Validation(
                kind,
                vec![FieldError::new("serverId", "Server not found")],
            ))
        }
    }

    // Hosts

    pub fn create_host(&mut self, new: NewHost, now: DateTime<Utc>) -> Result<Host> {
        new.validate()?;

        let id = allocate(&mut self.next_ids.host, EntityKind::Host)?;
        let host = Host::new(id, new, now);
        self.hosts.insert(host.id, host.clone());
        Ok(host)
    }

    pub fn update_host(&mut self, id: u32, update: HostUpdate, now: DateTime<Utc>) -> Result<Host> {
        update.validate()?;

        let host = self
            .hosts
            .get_mut(&id)
            .ok_or(InventoryError::NotFound(EntityKind::Host, id))?;
        host.apply(update, now);
        Ok(host.clone())
    }

    pub fn delete_host(&mut self, id: u32) -> Result<()> {
        self.host(id)?;
        if self.servers.values().any(|s| s.host_id == id) {
            return Err(InventoryError::HasDependents(EntityKind::Host));
        }

        self.hosts.remove(&id);
        Ok(())
    }

    pub fn record_host_status(
        &mut self,
        id: u32,
        write: &StatusWrite,
        now: DateTime<Utc>,
    ) -> Result<Host> {
        record(&mut self.hosts, EntityKind::Host, id, write, now)
    }

    // Servers

    pub fn create_server(&mut self, new: NewServer, now: DateTime<Utc>) -> Result<Server> {
        new.validate()?;
        self.require_host(EntityKind::Server, new.host_id)?;

        let id = allocate(&mut self.next_ids.server, EntityKind::Server)?;
        let server = Server::new(id, new, now);
        self.servers.insert(server.id, server.clone());
        Ok(server)
    }

    pub fn update_server(
        &mut self,
        id: u32,
        update: ServerUpdate,
        now: DateTime<Utc>,
    ) -> Result<Server> {
        update.validate()?;
        self.server(id)?;
        if let Some(host_id) = update.host_id {
            self.require_host(EntityKind::Server, host_id)?;
        }

        let server = self
            .servers
            .get_mut(&id)
            .ok_or(InventoryError::NotFound(EntityKind::Server, id))?;
        server.apply(update, now);
        Ok(server.clone())
    }

    pub fn delete_server(&mut self, id: u32) -> Result<()> {
        self.server(id)?;
        if self.websites.values().any(|w| w.server_id == id) {
            return Err(InventoryError::HasDependents(EntityKind::Server));
        }

        self.servers.remove(&id);
        Ok(())
    }

    pub fn record_server_status(
        &mut self,
        id: u32,
        write: &StatusWrite,
        now: DateTime<Utc>,
    ) -> Result<Server> {
        record(&mut self.servers, EntityKind::Server, id, write, now)
    }

    pub fn servers_by_host(&self, host_id: u32) -> Result<Vec<Server>> {
        self.host(host_id)?;
        Ok(self
            .servers
            .values()
            .filter(|s| s.host_id == host_id)
            .cloned()
            .collect())
    }

    // Websites

    pub fn create_website(&mut self, new: NewWebsite, now: DateTime<Utc>) -> Result<Website> {
        new.validate()?;
        self.require_server(EntityKind::Website, new.server_id)?;

        let id = allocate(&mut self.next_ids.website, EntityKind::Website)?;
        let website = Website::new(id, new, now);
        self.websites.insert(website.id, website.clone());
        Ok(website)
    }

    pub fn update_website(
        &mut self,
        id: u32,
        update: WebsiteUpdate,
        now: DateTime<Utc>,
    ) -> Result<Website> {
        update.validate()?;
        self.website(id)?;
        if let Some(server_id) = update.server_id {
            self.require_server(EntityKind::Website, server_id)?;
        }

        let website = self
            .websites
            .get_mut(&id)
            .ok_or(InventoryError::NotFound(EntityKind::Website, id))?;
        website.apply(update, now);
        Ok(website.clone())
    }

    pub fn delete_website(&mut self, id: u32) -> Result<()> {
        self.websites
            .remove(&id)
            .map(|_| ())
            .ok_or(InventoryError::NotFound(EntityKind::Website, id))
    }

    pub fn record_website_status(
        &mut self,
        id: u32,
        write: &StatusWrite,
        now: DateTime<Utc>,
    ) -> Result<Website> {
        record(&mut self.websites, EntityKind::Website, id, write, now)
    }

    pub fn websites_by_server(&self, server_id: u32) -> Result<Vec<Website>> {
        self.server(server_id)?;
        Ok(self
            .websites
            .values()
            .filter(|w| w.server_id == server_id)
            .cloned()
            .collect())
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::new(
            counts(self.hosts.values()),
            counts(self.servers.values()),
            counts(self.websites.values()),
        )
    }
}

fn record<T: Monitored + Clone>(
    map: &mut BTreeMap<u32, T>,
    kind: EntityKind,
    id: u32,
    write: &StatusWrite,
    now: DateTime<Utc>,
) -> Result<T> {
    let entity = map.get_mut(&id).ok_or(InventoryError::NotFound(kind, id))?;
    entity.record_status(write, now);
    Ok(entity.clone())
}

fn counts<'a, T: Monitored + 'a>(entities: impl Iterator<Item = &'a T>) -> StatusCounts {
    StatusCounts::from_statuses(entities.map(Monitored::status))
}

/// Storage operations behind the HTTP handlers
#[async_trait]
pub trait InventoryStore: Send + Sync {
    async fn list_hosts(&self, filter: &HostFilter) -> Result<Vec<Host>>;
    async fn get_host(&self, id: u32) -> Result<Host>;
    async fn create_host(&self, new: NewHost) -> Result<Host>;
    async fn update_host(&self, id: u32, update: HostUpdate) -> Result<Host>;
    async fn delete_host(&self, id: u32) -> Result<()>;
    async fn record_host_status(&self, id: u32, write: StatusWrite) -> Result<Host>;
    async fn servers_by_host(&self, host_id: u32) -> Result<Vec<Server>>;

    async fn list_servers(&self, filter: &ServerFilter) -> Result<Vec<Server>>;
    async fn get_server(&self, id: u32) -> Result<Server>;
    async fn create_server(&self, new: NewServer) -> Result<Server>;
    async fn update_server(&self, id: u32, update: ServerUpdate) -> Result<Server>;
    async fn delete_server(&self, id: u32) -> Result<()>;
    async fn record_server_status(&self, id: u32, write: StatusWrite) -> Result<Server>;
    async fn websites_by_server(&self, server_id: u32) -> Result<Vec<Website>>;

    async fn list_websites(&self, filter: &WebsiteFilter) -> Result<Vec<Website>>;
    async fn get_website(&self, id: u32) -> Result<Website>;
    async fn create_website(&self, new: NewWebsite) -> Result<Website>;
    async fn update_website(&self, id: u32, update: WebsiteUpdate) -> Result<Website>;
    async fn delete_website(&self, id: u32) -> Result<()>;
    async fn record_website_status(&self, id: u32, write: StatusWrite) -> Result<Website>;

    async fn stats(&self) -> Result<DashboardStats>;
}

/// In-memory store with an optional snapshot file
#[derive(Debug)]
pub struct MemoryStore {
    inventory: RwLock<Inventory>,
    snapshot: Option<SnapshotFile>,
}

impl MemoryStore {
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inventory: RwLock::new(inventory),
            snapshot: None,
        }
    }

    pub fn with_snapshot(inventory: Inventory, snapshot: SnapshotFile) -> Self {
        Self {
            inventory: RwLock::new(inventory),
            snapshot: Some(snapshot),
        }
    }

    /// Build the store from configuration: an existing snapshot wins over
    /// the sample data
    pub fn open(config: &Config) -> Result<Self> {
        let snapshot = config.data_file.as_ref().map(SnapshotFile::new);

        let loaded = match &snapshot {
            Some(file) => {
                info!("Persisting inventory to {}", file.path().display());
                file.load()?
            }
            None => None,
        };

        let mut inventory = match loaded {
            Some(inventory) => inventory,
            None if config.seed_sample_data => {
                info!("Seeding sample inventory");
                seed::sample_inventory()?
            }
            None => Inventory::default(),
        };
        inventory.normalize();

        Ok(Self {
            inventory: RwLock::new(inventory),
            snapshot,
        })
    }

    async fn read<T>(&self, f: impl FnOnce(&Inventory) -> Result<T>) -> Result<T> {
        let inventory = self.inventory.read().await;
        f(&inventory)
    }

    /// Apply a mutation; with a snapshot configured the change is only
    /// committed once the file has been written
    async fn mutate<T>(&self, f: impl FnOnce(&mut Inventory) -> Result<T>) -> Result<T> {
        let mut inventory = self.inventory.write().await;

        match &self.snapshot {
            None => f(&mut inventory),
            Some(snapshot) => {
                let mut next = inventory.clone();
                let out = f(&mut next)?;
                snapshot.save(&next).await?;
                *inventory = next;
                Ok(out)
            }
        }
    }
}

#[async_trait]
impl InventoryStore for MemoryStore {
    async fn list_hosts(&self, filter: &HostFilter) -> Result<Vec<Host>> {
        self.read(|inv| Ok(inv.hosts.values().filter(|h| filter.matches(h)).cloned().collect()))
            .await
    }

    async fn get_host(&self, id: u32) -> Result<Host> {
        self.read(|inv| inv.host(id).cloned()).await
    }

    async fn create_host(&self, new: NewHost) -> Result<Host> {
        let host = self.mutate(|inv| inv.create_host(new, Utc::now())).await?;
        debug!("Created host {} ({})", host.id, host.hostname);
        Ok(host)
    }

    async fn update_host(&self, id: u32, update: HostUpdate) -> Result<Host> {
        self.mutate(|inv| inv.update_host(id, update, Utc::now())).await
    }

    async fn delete_host(&self, id: u32) -> Result<()> {
        self.mutate(|inv| inv.delete_host(id)).await
    }

    async fn record_host_status(&self, id: u32, write: StatusWrite) -> Result<Host> {
        self.mutate(|inv| inv.record_host_status(id, &write, Utc::now()))
            .await
    }

    async fn servers_by_host(&self, host_id: u32) -> Result<Vec<Server>> {
        self.read(|inv| inv.servers_by_host(host_id)).await
    }

    async fn list_servers(&self, filter: &ServerFilter) -> Result<Vec<Server>> {
        self.read(|inv| {
            Ok(inv
                .servers
                .values()
                .filter(|s| filter.matches(s))
                .cloned()
                .collect())
        })
        .await
    }

    async fn get_server(&self, id: u32) -> Result<Server> {
        self.read(|inv| inv.server(id).cloned()).await
    }

    async fn create_server(&self, new: NewServer) -> Result<Server> {
        let server = self.mutate(|inv| inv.create_server(new, Utc::now())).await?;
        debug!("Created server {} ({}:{})", server.id, server.host_id, server.port);
        Ok(server)
    }

    async fn update_server(&self, id: u32, update: ServerUpdate) -> Result<Server> {
        self.mutate(|inv| inv.update_server(id, update, Utc::now()))
            .await
    }

    async fn delete_server(&self, id: u32) -> Result<()> {
        self.mutate(|inv| inv.delete_server(id)).await
    }

    async fn record_server_status(&self, id: u32, write: StatusWrite) -> Result<Server> {
        self.mutate(|inv| inv.record_server_status(id, &write, Utc::now()))
            .await
    }

    async fn websites_by_server(&self, server_id: u32) -> Result<Vec<Website>> {
        self.read(|inv| inv.websites_by_server(server_id)).await
    }

    async fn list_websites(&self, filter: &WebsiteFilter) -> Result<Vec<Website>> {
        self.read(|inv| {
            Ok(inv
                .websites
                .values()
                .filter(|w| filter.matches(w))
                .cloned()
                .collect())
        })
        .await
    }

    async fn get_website(&self, id: u32) -> Result<Website> {
        self.read(|inv| inv.website(id).cloned()).await
    }

    async fn create_website(&self, new: NewWebsite) -> Result<Website> {
        let website = self.mutate(|inv| inv.create_website(new, Utc::now())).await?;
        debug!("Created website {} ({})", website.id, website.url);
        Ok(website)
    }

    async fn update_website(&self, id: u32, update: WebsiteUpdate) -> Result<Website> {
        self.mutate(|inv| inv.update_website(id, update, Utc::now()))
            .await
    }

    async fn delete_website(&self, id: u32) -> Result<()> {
        self.mutate(|inv| inv.delete_website(id)).await
    }

    async fn record_website_status(&self, id: u32, write: StatusWrite) -> Result<Website> {
        self.mutate(|inv| inv.record_website_status(id, &write, Utc::now()))
            .await
    }

    async fn stats(&self) -> Result<DashboardStats> {
        self.read(|inv| Ok(inv.stats())).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Status;

    fn new_host(hostname: &str) -> NewHost {
        NewHost {
            hostname: hostname.to_string(),
            ip_address: "10.0.0.1".to_string(),
            location: "us-east".to_string(),
            description: None,
        }
    }

    fn new_server(host_id: u32) -> NewServer {
        NewServer {
            name: "api".to_string(),
            host_id,
            port: 8080,
            protocol: None,
            description: None,
        }
    }

    fn new_website(server_id: u32) -> NewWebsite {
        NewWebsite {
            name: "site".to_string(),
            url: "https://example.com".to_string(),
            server_id,
            description: None,
        }
    }

    #[test]
    fn test_ids_are_sequential_and_not_reused() {
        let mut inv = Inventory::default();
        let now = Utc::now();

        let a = inv.create_host(new_host("a"), now).unwrap();
        let b = inv.create_host(new_host("b"), now).unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        inv.delete_host(b.id).unwrap();
        let c = inv.create_host(new_host("c"), now).unwrap();
        assert_eq!(c.id, 3);
    }

    #[test]
    fn test_normalize_moves_counters_past_loaded_ids() {
        let mut inv = Inventory::default();
        let now = Utc::now();
        let host = inv.create_host(new_host("a"), now).unwrap();

        let mut json = serde_json::to_value(&inv).unwrap();
        json.as_object_mut().unwrap().remove("nextIds");
        let mut loaded: Inventory = serde_json::from_value(json).unwrap();
        loaded.normalize();

        let next = loaded.create_host(new_host("b"), now).unwrap();
        assert_eq!(next.id, host.id + 1);
    }

    #[test]
    fn test_last_id_is_allocated_once() {
        let mut inv = Inventory::default();
        let now = Utc::now();
        inv.hosts
            .insert(u32::MAX, Host::new(u32::MAX, new_host("edge"), now));
        inv.normalize();

        assert!(matches!(
            inv.create_host(new_host("next"), now),
            Err(InventoryError::IdsExhausted(EntityKind::Host))
        ));
        assert_eq!(inv.hosts.len(), 1);

        let server = inv.create_server(new_server(u32::MAX), now).unwrap();
        assert_eq!(server.id, 1);
    }

    #[test]
    fn test_open_accepts_snapshot_with_largest_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        let mut inv = Inventory::default();
        inv.create_host(new_host("edge"), Utc::now()).unwrap();
        let mut json = serde_json::to_value(&inv).unwrap();
        let object = json.as_object_mut().unwrap();
        object.remove("nextIds");
        let mut host = object["hosts"]["1"].clone();
        host["id"] = serde_json::json!(u32::MAX);
        let mut hosts = serde_json::Map::new();
        hosts.insert(u32::MAX.to_string(), host);
        object.insert("hosts".to_string(), serde_json::Value::Object(hosts));
        std::fs::write(&path, serde_json::to_vec(&json).unwrap()).unwrap();

        let config = Config {
            data_file: Some(path),
            seed_sample_data: false,
            ..Config::default()
        };
        let store = MemoryStore::open(&config).unwrap();
        let inventory = store.inventory.try_read().unwrap();
        assert_eq!(inventory.next_ids.host, u64::from(u32::MAX) + 1);
    }

    #[test]
    fn test_delete_rejected_while_children_exist() {
        let mut inv = Inventory::default();
        let now = Utc::now();
        let host = inv.create_host(new_host("a"), now).unwrap();
        let server = inv.create_server(new_server(host.id), now).unwrap();
        let website = inv.create_website(new_website(server.id), now).unwrap();

        assert!(matches!(
            inv.delete_host(host.id),
            Err(InventoryError::HasDependents(EntityKind::Host))
        ));
        assert!(matches!(
            inv.delete_server(server.id),
            Err(InventoryError::HasDependents(EntityKind::Server))
        ));

        inv.delete_website(website.id).unwrap();
        inv.delete_server(server.id).unwrap();
        inv.delete_host(host.id).unwrap();
        assert!(inv.hosts.is_empty());
    }

    #[test]
    fn test_delete_unknown_is_not_found() {
        let mut inv = Inventory::default();
        assert!(matches!(
            inv.delete_host(7),
            Err(InventoryError::NotFound(EntityKind::Host, 7))
        ));
        assert!(matches!(
            inv.delete_website(7),
            Err(InventoryError::NotFound(EntityKind::Website, 7))
        ));
    }

    #[test]
    fn test_children_need_existing_parent() {
        let mut inv = Inventory::default();
        let now = Utc::now();

        match inv.create_server(new_server(42), now) {
            Err(InventoryError::Validation(EntityKind::Server, errors)) => {
                assert_eq!(errors[0].path, "hostId");
            }
            other => panic!("expected validation error, got {:?}", other),
        }

        let host = inv.create_host(new_host("a"), now).unwrap();
        let server = inv.create_server(new_server(host.id), now).unwrap();
        let moved = inv.update_server(
            server.id,
            ServerUpdate {
                host_id: Some(99),
                ..ServerUpdate::default()
            },
            now,
        );
        assert!(matches!(moved, Err(InventoryError::Validation(..))));
        assert_eq!(inv.servers[&server.id].host_id, host.id);
    }

    #[test]
    fn test_status_write_keeps_uptime_when_absent() {
        let mut inv = Inventory::default();
        let now = Utc::now();
        let host = inv.create_host(new_host("a"), now).unwrap();

        let write = StatusWrite {
            status: Status::Online,
            uptime: Some("99.1%".to_string()),
            response_time: Some("12ms".to_string()),
        };
        inv.record_host_status(host.id, &write, now).unwrap();

        let write = StatusWrite {
            status: Status::Warning,
            uptime: None,
            response_time: Some(String::new()),
        };
        let updated = inv.record_host_status(host.id, &write, now).unwrap();

        assert_eq!(updated.status, Status::Warning);
        assert_eq!(updated.uptime, "99.1%");
        assert_eq!(updated.response_time.as_deref(), Some("12ms"));
    }

    #[test]
    fn test_stats_counts_by_status() {
        let inv = seed::sample_inventory().unwrap();
        let stats = inv.stats();

        assert_eq!(stats.hosts.total_count, 3);
        assert_eq!(stats.hosts.online_count, 1);
        assert_eq!(stats.servers.warning_count, 1);
        assert_eq!(stats.websites.offline_count, 1);
        assert_eq!(stats.legacy, stats.websites);
    }

    #[tokio::test]
    async fn test_store_children_and_filters() {
        let store = MemoryStore::new(seed::sample_inventory().unwrap());

        let servers = store.servers_by_host(1).await.unwrap();
        assert_eq!(servers.len(), 1);
        assert_eq!(servers[0].name, "Nginx Web Server");

        let websites = store.websites_by_server(1).await.unwrap();
        assert_eq!(websites.len(), 2);

        assert!(matches!(
            store.websites_by_server(99).await,
            Err(InventoryError::NotFound(EntityKind::Server, 99))
        ));

        let online = store
            .list_hosts(&HostFilter {
                status: Some("online".to_string()),
                ..HostFilter::default()
            })
            .await
            .unwrap();
        assert_eq!(online.len(), 1);
        assert_eq!(online[0].hostname, "web-host-01");
    }

    #[tokio::test]
    async fn test_snapshot_written_on_mutation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        let store = MemoryStore::with_snapshot(Inventory::default(), SnapshotFile::new(&path));

        store.create_host(new_host("persisted")).await.unwrap();

        let loaded = SnapshotFile::new(&path).load().unwrap().unwrap();
        assert_eq!(loaded.hosts[&1].hostname, "persisted");
    }

    #[tokio::test]
    async fn test_failed_mutation_leaves_state_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        let store = MemoryStore::with_snapshot(
            seed::sample_inventory().unwrap(),
            SnapshotFile::new(&path),
        );

        assert!(store.delete_host(1).await.is_err());
        assert!(!path.exists());
        assert!(store.get_host(1).await.is_ok());
    }

    #[test]
    fn test_open_prefers_snapshot_over_seed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        let mut inv = Inventory::default();
        inv.create_host(new_host("from-disk"), Utc::now()).unwrap();
        std::fs::write(&path, serde_json::to_vec(&inv).unwrap()).unwrap();

        let config = Config {
            data_file: Some(path),
            ..Config::default()
        };
        let store = MemoryStore::open(&config).unwrap();
        let inventory = store.inventory.try_read().unwrap();
        assert_eq!(inventory.hosts.len(), 1);
        assert_eq!(inventory.hosts[&1].hostname, "from-disk");
    }
}
