//! Persistence for the bag.
//!
//! [`Inventory`] owns the CRUD rules and talks to disk only through the
//! [`Storage`] trait. Every operation reloads the full list; nothing is cached
//! between calls.

mod json;
mod memory;

use std::path::PathBuf;

use thiserror::Error;

use crate::models::*;

pub use json::{JsonFileStorage, LoadPolicy};
pub use memory::MemoryStorage;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Item file {} is not a valid item list: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize items: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("No item ids left after {0}")]
    IdsExhausted(u64),

    #[error("Storage lock poisoned")]
    Poisoned,
}

pub type Result<T, E = StoreError> = std::result::Result<T, E>;

/// Loads and saves the whole item list at once.
pub trait Storage {
    fn load(&self) -> Result<Vec<Item>>;
    fn save(&self, items: &[Item]) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn load(&self) -> Result<Vec<Item>> {
        (**self).load()
    }

    fn save(&self, items: &[Item]) -> Result<()> {
        (**self).save(items)
    }
}

pub struct Inventory<S> {
    storage: S,
}

impl<S: Storage> Inventory<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    // ============================================================
    // Item operations
    // ============================================================

    pub fn list(&self) -> Result<Vec<Item>> {
        self.storage.load()
    }

    pub fn get(&self, id: u64) -> Result<Option<Item>> {
        let items = self.storage.load()?;
        Ok(items.into_iter().find(|item| item.id == id))
    }

    pub fn create(&self, input: CreateItemInput) -> Result<Item> {
        let mut items = self.storage.load()?;
        let item = Item {
            id: next_id(&items)?,
            name: input.name,
            kind: input.kind,
        };

        items.push(item.clone());
        self.storage.save(&items)?;

        tracing::info!(id = item.id, name = %item.name, "Item added");
        Ok(item)
    }

    /// Remove the first item with `id`.
    ///
    /// Returns `None` without touching storage when no item matches.
    pub fn delete(&self, id: u64) -> Result<Option<Item>> {
        let mut items = self.storage.load()?;
        let Some(index) = items.iter().position(|item| item.id == id) else {
            tracing::debug!(id, "Delete requested for unknown item");
            return Ok(None);
        };

        let removed = items.remove(index);
        self.storage.save(&items)?;

        tracing::info!(id, name = %removed.name, "Item removed");
        Ok(Some(removed))
    }
}

/// `max(existing) + 1`, or 1 for an empty bag.
fn next_id(items: &[Item]) -> Result<u64> {
    match items.iter().map(|item| item.id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or(StoreError::IdsExhausted(max)),
    }
}
