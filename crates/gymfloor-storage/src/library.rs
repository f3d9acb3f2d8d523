//! Non-fatal access to the layout store.
//!
//! Every store failure is logged with `warn!` and swallowed: the editing
//! session keeps working on its in-memory documents. Listing falls back to the
//! built-in default layout when the store is empty or unreachable.

use crate::error::StorageError;
use crate::traits::LayoutStore;
use gymfloor_core::{default_layout, Layout};
use std::sync::Arc;

/// Layout delete awaiting confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a layout is only deleted once confirmed with LayoutLibrary::confirm_delete"]
pub struct PendingLayoutDelete {
    id: String,
    name: String,
}

impl PendingLayoutDelete {
    pub fn new(layout: &Layout) -> Self {
        Self {
            id: layout.id.clone(),
            name: layout.name.clone(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name for the confirmation prompt
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Shared handle to a [`LayoutStore`] with fallback and logging.
#[derive(Clone)]
pub struct LayoutLibrary {
    store: Arc<dyn LayoutStore>,
}

impl std::fmt::Debug for LayoutLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutLibrary").finish_non_exhaustive()
    }
}

impl LayoutLibrary {
    pub fn new(store: Arc<dyn LayoutStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn LayoutStore> {
        &self.store
    }

    /// All stored layouts, or the default layout alone if there are none.
    pub async fn load_all(&self) -> Vec<Layout> {
        match self.store.list_layouts().await {
            Ok(layouts) if !layouts.is_empty() => {
                tracing::debug!("Loaded {} layouts", layouts.len());
                layouts
            }
            Ok(_) => {
                tracing::info!("No stored layouts, using the default layout");
                vec![default_layout()]
            }
            Err(e) => {
                tracing::warn!("Layout store unavailable, using the default layout: {}", e);
                vec![default_layout()]
            }
        }
    }

    /// Create a fresh "New Location" layout and store it.
    ///
    /// The layout is returned even when the store rejects it.
    pub async fn new_layout(&self) -> Layout {
        let layout = Layout::new_location();
        self.create(&layout).await;
        layout
    }

    pub async fn create(&self, layout: &Layout) -> bool {
        match self.store.create_layout(layout).await {
            Ok(()) => {
                tracing::info!("Created layout {} ({})", layout.id, layout.name);
                true
            }
            Err(e) => {
                tracing::warn!("Layout {} not persisted: {}", layout.id, e);
                false
            }
        }
    }

    /// Replace the stored copy of `layout`.
    ///
    /// A layout the store has never seen (such as the built-in default) is
    /// created instead.
    pub async fn save(&self, layout: &Layout) -> bool {
        let result = match self.store.save_layout(layout).await {
            Err(StorageError::NotFound(_)) => {
                tracing::debug!("Layout {} not stored yet, creating it", layout.id);
                self.store.create_layout(layout).await
            }
            other => other,
        };
        match result {
            Ok(()) => {
                tracing::info!("Saved layout {} ({} zones)", layout.id, layout.zones.len());
                true
            }
            Err(e) => {
                tracing::warn!("Layout {} not saved: {}", layout.id, e);
                false
            }
        }
    }

    /// First half of a layout delete; nothing changes until confirmed.
    pub fn request_delete(&self, layout: &Layout) -> PendingLayoutDelete {
        PendingLayoutDelete::new(layout)
    }

    pub async fn confirm_delete(&self, pending: PendingLayoutDelete) -> bool {
        match self.store.delete_layout(&pending.id).await {
            Ok(()) => {
                tracing::info!("Deleted layout {} ({})", pending.id, pending.name);
                true
            }
            Err(e) => {
                tracing::warn!("Layout {} not deleted from store: {}", pending.id, e);
                false
            }
        }
    }
}
