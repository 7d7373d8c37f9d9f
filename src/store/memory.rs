use std::sync::Mutex;

use super::{Result, Storage, StoreError};
use crate::models::Item;

/// In-process storage, used in place of a file in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<Vec<Item>>,
    saves: Mutex<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(items: Vec<Item>) -> Self {
        Self {
            items: Mutex::new(items),
            saves: Mutex::new(0),
        }
    }

    /// Snapshot of what a fresh `load` would return.
    pub fn items(&self) -> Result<Vec<Item>> {
        self.load()
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> Result<usize> {
        let saves = self.saves.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(*saves)
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Vec<Item>> {
        let items = self.items.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(items.clone())
    }

    fn save(&self, items: &[Item]) -> Result<()> {
        let mut stored = self.items.lock().map_err(|_| StoreError::Poisoned)?;
        *stored = items.to_vec();
        *self.saves.lock().map_err(|_| StoreError::Poisoned)? += 1;
        Ok(())
    }
}
