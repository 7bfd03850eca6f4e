//! Card-scan source adapter
//!
//! Image tracking raises "found" and "lost" events for physical cards. The gate
//! only forwards a found card while scan mode is active, and holds on to it
//! until the tracker reports it lost, so a card sitting in view is submitted once.

/// Filters raw tracker events down to scan submissions
#[derive(Debug, Clone, Default)]
pub struct ScanGate {
    active: bool,
    held: Option<String>,
}

impl ScanGate {
    /// Start accepting cards
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Stop accepting cards and forget any held card
    pub fn disable(&mut self) {
        self.active = false;
        self.held = None;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Card currently in view, if one was accepted
    pub fn held(&self) -> Option<&str> {
        self.held.as_deref()
    }

    /// Tracker found a card; returns the label to submit, if any
    pub fn card_found(&mut self, label: &str) -> Option<String> {
        if !self.active || self.held.is_some() {
            tracing::debug!("Ignoring scanned card '{}'", label);
            return None;
        }
        self.held = Some(label.to_string());
        Some(label.to_string())
    }

    /// Tracker lost the card
    pub fn card_lost(&mut self) {
        self.held = None;
    }
}
