//! Comparison session
//!
//! The UI controller's state for one browsing session: the active category
//! filter and the selection, over a borrowed catalog. This is client-local
//! state with a single owner; it is not meant to be shared between threads.

use crate::catalog::CatalogStore;
use crate::category::{filter_by_category, Category, CategoryFilter};
use crate::comparison::{derive_view, ComparisonView};
use crate::product::Product;
use crate::selection::{Selection, ToggleOutcome};
use tracing::{debug, warn};

/// Category filter plus bounded selection over one catalog
///
/// # Examples
///
/// ```rust
/// use solar_compare::{CatalogStore, CategoryFilter, ComparisonSession, ToggleOutcome};
///
/// let catalog = CatalogStore::embedded().unwrap();
/// let mut session = ComparisonSession::new(&catalog);
///
/// session.set_filter(CategoryFilter::only("battery"));
/// let first = session.visible_products()[0].id.clone();
/// assert_eq!(session.toggle(first.as_str()), ToggleOutcome::Added);
/// assert_eq!(session.toggle("not-in-catalog"), ToggleOutcome::UnknownProduct);
///
/// let view = session.view();
/// assert_eq!(view.products.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ComparisonSession<'a> {
    catalog: &'a CatalogStore,
    filter: CategoryFilter,
    selection: Selection,
}

impl<'a> ComparisonSession<'a> {
    /// Start a session showing every product with nothing selected
    pub fn new(catalog: &'a CatalogStore) -> Self {
        Self {
            catalog,
            filter: CategoryFilter::All,
            selection: Selection::new(),
        }
    }

    /// Resume a session from a saved selection
    ///
    /// Ids that are no longer in the catalog are dropped.
    pub fn with_selection(catalog: &'a CatalogStore, mut selection: Selection) -> Self {
        selection.retain(|id| {
            let known = catalog.contains(id.as_str());
            if !known {
                warn!(product_id = %id, "dropping saved selection entry missing from catalog");
            }
            known
        });
        Self {
            catalog,
            filter: CategoryFilter::All,
            selection,
        }
    }

    /// The catalog this session browses
    pub fn catalog(&self) -> &'a CatalogStore {
        self.catalog
    }

    /// The active category filter
    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Change the category filter; the selection is kept
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        debug!(from = %self.filter, to = %filter, "category filter changed");
        self.filter = filter;
    }

    /// Category tabs with product counts
    pub fn categories(&self) -> Vec<(Category, usize)> {
        self.catalog.categories()
    }

    /// Products passing the active filter, in catalog order
    pub fn visible_products(&self) -> Vec<&'a Product> {
        filter_by_category(self.catalog.get_all(), &self.filter)
    }

    /// The current selection
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Toggle a catalog product in or out of the selection
    pub fn toggle(&mut self, id: &str) -> ToggleOutcome {
        if !self.catalog.contains(id) {
            debug!(product_id = id, "ignoring toggle of unknown product");
            return ToggleOutcome::UnknownProduct;
        }
        self.selection.toggle(id)
    }

    /// Drop every selected product
    pub fn clear(&mut self) {
        self.selection.clear();
    }

    /// Whether the product's compare control should be grayed out
    pub fn is_disabled(&self, id: &str) -> bool {
        self.selection.is_disabled(id)
    }

    /// Whether the product is currently selected
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    /// Comparison table for the current selection
    pub fn view(&self) -> ComparisonView<'a> {
        derive_view(self.catalog, &self.selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{BATTERY, SOLAR_PANEL};
    use crate::selection::SelectionPhase;

    fn catalog() -> CatalogStore {
        CatalogStore::new(vec![
            Product::builder("p1", "Panel 1", SOLAR_PANEL).build(),
            Product::builder("p2", "Panel 2", SOLAR_PANEL).build(),
            Product::builder("b1", "Battery 1", BATTERY).build(),
            Product::builder("b2", "Battery 2", BATTERY).build(),
        ])
        .unwrap()
    }

    #[test]
    fn test_filter_change_keeps_selection() {
        let catalog = catalog();
        let mut session = ComparisonSession::new(&catalog);
        session.toggle("p1");
        session.set_filter(CategoryFilter::only(BATTERY));

        let visible: Vec<&str> = session.visible_products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(visible, vec!["b1", "b2"]);
        assert!(session.is_selected("p1"));
        assert_eq!(session.view().products.len(), 1);
    }

    #[test]
    fn test_unknown_product_never_enters_selection() {
        let catalog = catalog();
        let mut session = ComparisonSession::new(&catalog);
        assert_eq!(session.toggle("ghost"), ToggleOutcome::UnknownProduct);
        assert!(session.selection().is_empty());
    }

    #[test]
    fn test_capacity_and_disabled_hint() {
        let catalog = catalog();
        let mut session = ComparisonSession::new(&catalog);
        for id in ["p1", "p2", "b1"] {
            assert_eq!(session.toggle(id), ToggleOutcome::Added);
        }
        assert_eq!(session.selection().phase(), SelectionPhase::Full);
        assert!(session.is_disabled("b2"));
        assert!(!session.is_disabled("p2"));
        assert_eq!(session.toggle("b2"), ToggleOutcome::AtCapacity);

        session.clear();
        assert!(session.view().is_empty());
        assert!(!session.is_disabled("b2"));
    }

    #[test]
    fn test_resume_drops_missing_ids() {
        let catalog = catalog();
        let saved: Selection = serde_json::from_str(r#"["b2","gone","p1"]"#).unwrap();
        let session = ComparisonSession::with_selection(&catalog, saved);
        assert_eq!(session.selection().ids(), ["b2", "p1"]);
    }

    #[test]
    fn test_categories_for_tabs() {
        let catalog = catalog();
        let session = ComparisonSession::new(&catalog);
        let tabs: Vec<(String, usize)> = session
            .categories()
            .into_iter()
            .map(|(category, count)| (category.label(), count))
            .collect();
        assert_eq!(
            tabs,
            vec![("Solar Panel".to_string(), 2), ("Battery Storage".to_string(), 2)]
        );
    }
}
