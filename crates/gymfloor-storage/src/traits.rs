//! Storage collaborator interface.

use crate::error::StorageResult;
use async_trait::async_trait;
use gymfloor_core::Layout;

/// Persistence for layout documents keyed by their id.
///
/// `save_layout` replaces the stored document wholesale; zones and annexes
/// are never patched individually.
#[async_trait]
pub trait LayoutStore: Send + Sync {
    /// Every stored layout, oldest first.
    async fn list_layouts(&self) -> StorageResult<Vec<Layout>>;

    /// Store a new layout. Fails with `AlreadyExists` if the id is taken.
    async fn create_layout(&self, layout: &Layout) -> StorageResult<()>;

    /// Replace an existing layout. Fails with `NotFound` if the id is unknown.
    async fn save_layout(&self, layout: &Layout) -> StorageResult<()>;

    async fn delete_layout(&self, id: &str) -> StorageResult<()>;
}
