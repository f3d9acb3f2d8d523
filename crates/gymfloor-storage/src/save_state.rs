//! Save indicator: idle → saving → saved → idle.
//!
//! Only one save may be in flight: [`SaveIndicator::begin`] refuses while the
//! state is `Saving`, which is what disables the save control. After a
//! successful save the indicator shows `Saved` for a fixed time and then
//! returns to `Idle`. A failed save goes straight back to `Idle`.

use gymfloor_core::{EventDispatcher, LayoutEvent, SaveState};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug)]
struct Inner {
    state: SaveState,
    /// Bumped on every `begin`; stale timers compare against it
    generation: u64,
    saved_at: Option<Instant>,
}

/// Proof that a save is in flight; hand it back to [`SaveIndicator::finish`].
#[derive(Debug)]
#[must_use = "an unfinished save leaves the indicator stuck in Saving"]
pub struct SaveTicket {
    generation: u64,
}

/// Shared tri-state save indicator.
#[derive(Debug, Clone)]
pub struct SaveIndicator {
    inner: Arc<Mutex<Inner>>,
    saved_for: Duration,
    events: EventDispatcher,
}

impl SaveIndicator {
    pub fn new(saved_for: Duration, events: EventDispatcher) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: SaveState::Idle,
                generation: 0,
                saved_at: None,
            })),
            saved_for,
            events,
        }
    }

    pub fn saved_for(&self) -> Duration {
        self.saved_for
    }

    /// Current state. `Saved` reads as `Idle` once its display time is over.
    pub fn state(&self) -> SaveState {
        let inner = self.inner.lock();
        Self::visible_state(&inner, self.saved_for)
    }

    fn visible_state(inner: &Inner, saved_for: Duration) -> SaveState {
        match (inner.state, inner.saved_at) {
            (SaveState::Saved, Some(at)) if at.elapsed() >= saved_for => SaveState::Idle,
            (state, _) => state,
        }
    }

    /// Whether the save control is enabled.
    pub fn can_save(&self) -> bool {
        self.state() != SaveState::Saving
    }

    /// Enter `Saving`. Returns `None` while another save is in flight.
    pub fn begin(&self) -> Option<SaveTicket> {
        let generation = {
            let mut inner = self.inner.lock();
            if inner.state == SaveState::Saving {
                tracing::debug!("Save already in flight");
                return None;
            }
            inner.generation += 1;
            inner.state = SaveState::Saving;
            inner.saved_at = None;
            inner.generation
        };
        self.events
            .publish(LayoutEvent::SaveStateChanged(SaveState::Saving));
        Some(SaveTicket { generation })
    }

    /// Leave `Saving`: `Saved` on success, `Idle` on failure.
    pub fn finish(&self, ticket: SaveTicket, ok: bool) {
        let next = if ok { SaveState::Saved } else { SaveState::Idle };
        {
            let mut inner = self.inner.lock();
            if inner.generation != ticket.generation {
                return;
            }
            inner.state = next;
            inner.saved_at = ok.then(Instant::now);
        }
        self.events.publish(LayoutEvent::SaveStateChanged(next));

        if ok {
            self.schedule_reset(ticket.generation);
        }
    }

    fn schedule_reset(&self, generation: u64) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            return;
        };
        let indicator = self.clone();
        handle.spawn(async move {
            tokio::time::sleep(indicator.saved_for).await;
            indicator.expire(generation);
        });
    }

    fn expire(&self, generation: u64) {
        {
            let mut inner = self.inner.lock();
            if inner.generation != generation || inner.state != SaveState::Saved {
                return;
            }
            inner.state = SaveState::Idle;
            inner.saved_at = None;
        }
        self.events
            .publish(LayoutEvent::SaveStateChanged(SaveState::Idle));
    }
}
