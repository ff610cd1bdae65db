//! Immutable snapshot of a clicking session.

use std::sync::Arc;

use crate::catalog::{Catalog, CatalogItem};
use crate::ui::mvi::UiState;

/// Totals so far plus the dessert on display.
///
/// Snapshots are never mutated; each sale produces a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    revenue: u64,
    sold_count: u64,
    active: usize,
    catalog: Arc<Catalog>,
}

impl SessionState {
    /// Startup state: nothing sold, first catalog item active.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            revenue: 0,
            sold_count: 0,
            active: 0,
            catalog,
        }
    }

    pub(crate) fn from_parts(
        revenue: u64,
        sold_count: u64,
        active: usize,
        catalog: Arc<Catalog>,
    ) -> Self {
        Self {
            revenue,
            sold_count,
            active,
            catalog,
        }
    }

    pub fn revenue(&self) -> u64 {
        self.revenue
    }

    pub fn sold_count(&self) -> u64 {
        self.sold_count
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_item(&self) -> &CatalogItem {
        self.catalog.get(self.active).unwrap_or_else(|| self.catalog.first())
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Arc::new(Catalog::default()))
    }
}

impl UiState for SessionState {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_starts_empty_on_first_item() {
        let state = SessionState::default();
        assert_eq!(state.revenue(), 0);
        assert_eq!(state.sold_count(), 0);
        assert_eq!(state.active_index(), 0);
        assert_eq!(state.active_item().name, "cupcake");
    }
}
