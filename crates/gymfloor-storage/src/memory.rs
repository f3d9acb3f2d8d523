//! Process-local layout store.

use crate::error::{StorageError, StorageResult};
use crate::traits::LayoutStore;
use async_trait::async_trait;
use gymfloor_core::Layout;
use parking_lot::RwLock;

/// Layouts kept in memory in creation order.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    layouts: RwLock<Vec<Layout>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layouts(layouts: Vec<Layout>) -> Self {
        Self {
            layouts: RwLock::new(layouts),
        }
    }

    pub fn len(&self) -> usize {
        self.layouts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.read().is_empty()
    }

    pub fn get(&self, id: &str) -> Option<Layout> {
        self.layouts.read().iter().find(|l| l.id == id).cloned()
    }
}

#[async_trait]
impl LayoutStore for InMemoryStore {
    async fn list_layouts(&self) -> StorageResult<Vec<Layout>> {
        Ok(self.layouts.read().clone())
    }

    async fn create_layout(&self, layout: &Layout) -> StorageResult<()> {
        let mut layouts = self.layouts.write();
        if layouts.iter().any(|l| l.id == layout.id) {
            return Err(StorageError::AlreadyExists(layout.id.clone()));
        }
        layouts.push(layout.clone());
        Ok(())
    }

    async fn save_layout(&self, layout: &Layout) -> StorageResult<()> {
        let mut layouts = self.layouts.write();
        let slot = layouts
            .iter_mut()
            .find(|l| l.id == layout.id)
            .ok_or_else(|| StorageError::NotFound(layout.id.clone()))?;
        *slot = layout.clone();
        Ok(())
    }

    async fn delete_layout(&self, id: &str) -> StorageResult<()> {
        let mut layouts = self.layouts.write();
        let before = layouts.len();
        layouts.retain(|l| l.id != id);
        if layouts.len() == before {
            return Err(StorageError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
