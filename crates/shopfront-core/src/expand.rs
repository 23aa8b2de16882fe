//! Expansion state for the order history view.
//!
//! At most one order shows its detail at a time. The state is a small
//! explicit machine over `Option<OrderId>` so the rules can be tested
//! without rendering anything: toggling the expanded order collapses it,
//! toggling any other order replaces the expansion.
//!
//! The tracked id is a weak reference. Nothing guarantees a matching order
//! still exists in the rendered list; an id without a match simply renders
//! no detail.

use crate::model::OrderId;

/// Tracks which order, if any, is currently expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpansionState {
    expanded: Option<OrderId>,
}

impl ExpansionState {
    /// Fresh state with every order collapsed.
    #[must_use]
    pub const fn new() -> Self {
        Self { expanded: None }
    }

    /// Flip the expansion of `id`.
    ///
    /// If `id` is currently expanded it collapses; otherwise `id` becomes
    /// the expanded order, replacing any previous one. Defined for every
    /// id in every state.
    pub fn toggle(&mut self, id: OrderId) {
        self.expanded = if self.expanded == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    /// Whether `id` is the expanded order.
    #[must_use]
    pub const fn is_expanded(&self, id: OrderId) -> bool {
        match self.expanded {
            Some(current) => current == id,
            None => false,
        }
    }

    /// The expanded order id, if any.
    #[must_use]
    pub const fn expanded(&self) -> Option<OrderId> {
        self.expanded
    }

    /// Collapse whatever is expanded.
    pub fn collapse(&mut self) {
        self.expanded = None;
    }
}
