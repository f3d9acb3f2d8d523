use gymfloor_core::Layout;

/// Tracks the selected zone, machine and annex.
///
/// Selection is independent of the interaction state and of history. Ids can
/// go stale after undo/redo or a delete, so callers prune against the present
/// document with [`SelectionManager::prune`] and every lookup returns `Option`.
///
/// # Selection Model
///
/// - At most one zone, and within it at most one machine
/// - Selecting a different zone clears the machine selection
/// - An annex selection is kept separately (room mode)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionManager {
    zone_id: Option<String>,
    machine_id: Option<String>,
    annex_id: Option<String>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use gymfloor_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert_eq!(manager.zone_id(), None);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zone_id(&self) -> Option<&str> {
        self.zone_id.as_deref()
    }

    pub fn machine_id(&self) -> Option<&str> {
        self.machine_id.as_deref()
    }

    pub fn annex_id(&self) -> Option<&str> {
        self.annex_id.as_deref()
    }

    /// Selects a zone. A machine selection from another zone is dropped.
    pub fn select_zone(&mut self, zone_id: &str) {
        if self.zone_id.as_deref() != Some(zone_id) {
            self.machine_id = None;
        }
        self.zone_id = Some(zone_id.to_string());
    }

    /// Selects a machine together with its owning zone.
    pub fn select_machine(&mut self, zone_id: &str, machine_id: &str) {
        self.zone_id = Some(zone_id.to_string());
        self.machine_id = Some(machine_id.to_string());
    }

    pub fn select_annex(&mut self, annex_id: &str) {
        self.annex_id = Some(annex_id.to_string());
    }

    pub fn clear_machine(&mut self) {
        self.machine_id = None;
    }

    pub fn clear(&mut self) {
        self.zone_id = None;
        self.machine_id = None;
        self.annex_id = None;
    }

    /// Drops ids that no longer exist in `layout`.
    ///
    /// # Returns
    ///
    /// `true` if anything was deselected.
    pub fn prune(&mut self, layout: &Layout) -> bool {
        let before = self.clone();
        if let Some(zone_id) = self.zone_id.as_deref() {
            match layout.zone(zone_id) {
                None => {
                    self.zone_id = None;
                    self.machine_id = None;
                }
                Some(zone) => {
                    if let Some(machine_id) = self.machine_id.as_deref() {
                        if !zone.has_machine(machine_id) {
                            self.machine_id = None;
                        }
                    }
                }
            }
        } else {
            self.machine_id = None;
        }
        if let Some(annex_id) = self.annex_id.as_deref() {
            if !layout.has_annex(annex_id) {
                self.annex_id = None;
            }
        }
        *self != before
    }
}
