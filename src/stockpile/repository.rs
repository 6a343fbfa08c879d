//! # Repository
//!
//! CRUD and join operations over the items and groups tables.
//!
//! Nothing is cached: every call loads the owning table from its backend, and
//! every mutation writes the whole table back after the in-memory copy has been
//! rebuilt. If anything fails before the write, the table is left as it was.
//!
//! Mutations report an [`Outcome`] instead of returning `Result`. Callers check
//! it (or turn it back into a `Result` with [`Outcome::into_result`]) before
//! assuming anything was persisted. Reads return `Result`, with absence as
//! `Ok(None)` rather than an error.

use crate::config::StockConfig;
use crate::error::{Result, StockError};
use crate::model::{Group, Item, ItemView, Record, NO_GROUP_LABEL};
use crate::store::fs::FileBackend;
use crate::store::memory::MemBackend;
use crate::store::{RecordStore, TableBackend};
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};
use uuid::Uuid;

/// Result status of a mutating repository operation.
#[must_use]
#[derive(Debug)]
pub enum Outcome {
    Success,
    Failure(StockError),
}

impl Outcome {
    /// 0 on success, 1 on failure.
    pub fn code(&self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::Failure(_) => 1,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    pub fn into_result(self) -> Result<()> {
        match self {
            Outcome::Success => Ok(()),
            Outcome::Failure(e) => Err(e),
        }
    }

    fn from_result(op: &str, result: Result<()>) -> Self {
        match result {
            Ok(()) => Outcome::Success,
            Err(e) => {
                match &e {
                    StockError::ItemNotFound(_) | StockError::GroupNotFound(_) => {
                        warn!(op, error = %e, "nothing to change")
                    }
                    _ => error!(op, error = %e, "operation failed"),
                }
                Outcome::Failure(e)
            }
        }
    }
}

pub struct StockRepository<B: TableBackend> {
    items: RecordStore<Item, B>,
    groups: RecordStore<Group, B>,
    missing_group_label: String,
}

impl StockRepository<FileBackend> {
    /// Open the file-backed tables configured for `data_dir`.
    pub fn open(data_dir: &Path, config: &StockConfig) -> Self {
        Self::new(
            FileBackend::new(config.items_path(data_dir)),
            FileBackend::new(config.groups_path(data_dir)),
        )
        .with_missing_group_label(&config.missing_group_label)
    }
}

impl StockRepository<MemBackend> {
    pub fn in_memory() -> Self {
        Self::new(MemBackend::new("items.csv"), MemBackend::new("groups.csv"))
    }
}

impl<B: TableBackend> StockRepository<B> {
    pub fn new(items: B, groups: B) -> Self {
        Self {
            items: RecordStore::new(items),
            groups: RecordStore::new(groups),
            missing_group_label: NO_GROUP_LABEL.to_string(),
        }
    }

    pub fn with_missing_group_label(mut self, label: &str) -> Self {
        self.missing_group_label = label.to_string();
        self
    }

    pub fn items_location(&self) -> PathBuf {
        self.items.location()
    }

    pub fn groups_location(&self) -> PathBuf {
        self.groups.location()
    }

    pub fn items_backend(&self) -> &B {
        self.items.backend()
    }

    pub fn groups_backend(&self) -> &B {
        self.groups.backend()
    }

    // --- Items ---

    pub fn add_item(&mut self, item: Item) -> Outcome {
        Outcome::from_result("add_item", append(&self.items, item))
    }

    pub fn remove_item(&mut self, id: Uuid) -> Outcome {
        Outcome::from_result(
            "remove_item",
            remove(&self.items, id, || StockError::ItemNotFound(id)),
        )
    }

    pub fn update_item(&mut self, item: Item) -> Outcome {
        let id = item.id;
        Outcome::from_result(
            "update_item",
            replace(&self.items, item, || StockError::ItemNotFound(id)),
        )
    }

    pub fn get_item(&self, id: Uuid) -> Result<Option<Item>> {
        Ok(self.list_items()?.into_iter().find(|i| i.id == id))
    }

    pub fn list_items(&self) -> Result<Vec<Item>> {
        let items = self.items.load()?;
        debug!(count = items.len(), "loaded items");
        Ok(items)
    }

    pub fn clear_items(&mut self) -> Outcome {
        Outcome::from_result("clear_items", self.items.clear())
    }

    // --- Groups ---

    pub fn add_group(&mut self, group: Group) -> Outcome {
        Outcome::from_result("add_group", append(&self.groups, group))
    }

    pub fn remove_group(&mut self, id: Uuid) -> Outcome {
        Outcome::from_result(
            "remove_group",
            remove(&self.groups, id, || StockError::GroupNotFound(id.to_string())),
        )
    }

    pub fn update_group(&mut self, group: Group) -> Outcome {
        let id = group.id;
        Outcome::from_result(
            "update_group",
            replace(&self.groups, group, || {
                StockError::GroupNotFound(id.to_string())
            }),
        )
    }

    pub fn get_group(&self, id: Uuid) -> Result<Option<Group>> {
        Ok(self.list_groups()?.into_iter().find(|g| g.id == id))
    }

    /// First group with exactly this name. Names are unique only by convention.
    pub fn find_group_by_name(&self, name: &str) -> Result<Option<Group>> {
        Ok(self.list_groups()?.into_iter().find(|g| g.name == name))
    }

    pub fn list_groups(&self) -> Result<Vec<Group>> {
        let groups = self.groups.load()?;
        debug!(count = groups.len(), "loaded groups");
        Ok(groups)
    }

    pub fn clear_groups(&mut self) -> Outcome {
        Outcome::from_result("clear_groups", self.groups.clear())
    }

    // --- Joined views ---

    pub fn get_item_view(&self, id: Uuid) -> Result<Option<ItemView>> {
        match self.get_item(id)? {
            Some(item) => self.join_item(&item).map(Some),
            None => Ok(None),
        }
    }

    /// Resolve the group name for an item, whether or not it is still stored.
    pub fn join_item(&self, item: &Item) -> Result<ItemView> {
        let groups = self.list_groups()?;
        Ok(ItemView::join(item, &groups, &self.missing_group_label))
    }

    /// Every item joined to its group name, optionally only those in `group_filter`.
    pub fn list_item_views(&self, group_filter: Option<Uuid>) -> Result<Vec<ItemView>> {
        let items = self.list_items()?;
        let groups = self.list_groups()?;
        Ok(items
            .iter()
            .filter(|i| group_filter.is_none() || i.group_id == group_filter)
            .map(|i| ItemView::join(i, &groups, &self.missing_group_label))
            .collect())
    }
}

fn append<T: Record, B: TableBackend>(store: &RecordStore<T, B>, record: T) -> Result<()> {
    let mut records = store.load()?;
    records.push(record);
    store.store(&records)
}

fn remove<T: Record, B: TableBackend>(
    store: &RecordStore<T, B>,
    id: Uuid,
    not_found: impl FnOnce() -> StockError,
) -> Result<()> {
    let mut records = store.load()?;
    let index = records
        .iter()
        .position(|r| r.id() == id)
        .ok_or_else(not_found)?;
    records.remove(index);
    store.store(&records)
}

fn replace<T: Record, B: TableBackend>(
    store: &RecordStore<T, B>,
    record: T,
    not_found: impl FnOnce() -> StockError,
) -> Result<()> {
    let mut records = store.load()?;
    let index = records
        .iter()
        .position(|r| r.id() == record.id())
        .ok_or_else(not_found)?;
    records[index] = record;
    store.store(&records)
}
