// src/select.rs
//! Single-slot selection state driven by pointer interaction.

use crate::graph::NodePayload;

/// The currently selected node's payload, if any. Tapping a node fills the
/// slot, tapping empty canvas clears it, and a data-transition rebuild
/// resets it (the tapped object no longer exists in the new graph).
#[derive(Debug, Clone, Default)]
pub struct Selection {
    selected: Option<NodePayload>,
}

impl Selection {
    pub fn select(&mut self, payload: NodePayload) {
        self.selected = Some(payload);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn selected(&self) -> Option<&NodePayload> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }
}
