//! Layout event system
//!
//! Provides:
//! - Event types emitted by an editing session
//! - Event dispatcher for publishing events to subscribers (renderers, panels)

use serde::{Deserialize, Serialize};
use std::fmt;
use tokio::sync::broadcast;

/// Tri-state save indicator shown next to the save control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveState {
    /// Nothing in flight
    #[default]
    Idle,
    /// A save is in flight; the save control is disabled
    Saving,
    /// The last save completed; reverts to idle after a timeout
    Saved,
}

impl fmt::Display for SaveState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Saving => write!(f, "Saving"),
            Self::Saved => write!(f, "Saved"),
        }
    }
}

/// Layout editing event types
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutEvent {
    /// The present document was replaced (edit, undo, redo, load)
    DocumentReplaced {
        /// Id of the layout now present.
        layout_id: String,
    },
    /// Zone/machine selection changed
    SelectionChanged {
        /// Selected zone id, if any.
        zone_id: Option<String>,
        /// Selected machine id, if any.
        machine_id: Option<String>,
        /// Selected annex id, if any.
        annex_id: Option<String>,
    },
    /// Edit mode changed (layout, room, machine)
    ModeChanged(String),
    /// A pointer drag started on the named target
    DragStarted {
        /// Drag kind label.
        kind: String,
        /// Id of the dragged entity ("room" for the room).
        target_id: String,
    },
    /// The active pointer drag ended
    DragEnded,
    /// Save indicator changed
    SaveStateChanged(SaveState),
}

impl fmt::Display for LayoutEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutEvent::DocumentReplaced { layout_id } => {
                write!(f, "Document replaced: {}", layout_id)
            }
            LayoutEvent::SelectionChanged {
                zone_id,
                machine_id,
                annex_id,
            } => write!(
                f,
                "Selection: zone={} machine={} annex={}",
                zone_id.as_deref().unwrap_or("-"),
                machine_id.as_deref().unwrap_or("-"),
                annex_id.as_deref().unwrap_or("-")
            ),
            LayoutEvent::ModeChanged(mode) => write!(f, "Mode: {}", mode),
            LayoutEvent::DragStarted { kind, target_id } => {
                write!(f, "Drag started: {} on {}", kind, target_id)
            }
            LayoutEvent::DragEnded => write!(f, "Drag ended"),
            LayoutEvent::SaveStateChanged(state) => write!(f, "Save state: {}", state),
        }
    }
}

/// Event dispatcher for publishing events to subscribers
#[derive(Clone)]
pub struct EventDispatcher {
    /// Broadcast sender channel for layout events.
    tx: broadcast::Sender<LayoutEvent>,
}

impl EventDispatcher {
    /// Create a new event dispatcher
    ///
    /// # Arguments
    /// * `buffer_size` - Size of the broadcast buffer (default 100)
    pub fn new(buffer_size: usize) -> Self {
        let (tx, _) = broadcast::channel(buffer_size);
        Self { tx }
    }

    /// Subscribe to events
    pub fn subscribe(&self) -> broadcast::Receiver<LayoutEvent> {
        self.tx.subscribe()
    }

    /// Publish an event to all subscribers.
    ///
    /// Returns the number of receivers reached; zero when nobody listens.
    pub fn publish(&self, event: LayoutEvent) -> usize {
        match self.tx.send(event) {
            Ok(n) => n,
            Err(err) => {
                tracing::trace!("No subscribers for layout event: {}", err.0);
                0
            }
        }
    }

    /// Get number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new(100)
    }
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
