//! Bounded product selection
//!
//! The selection is the only mutable state of a comparison session: an
//! ordered set of at most [`MAX_SELECTION`] product ids. Its whole state is
//! that list; the only transitions are toggle and clear.
//!
//! ```text
//!            toggle(new)           toggle(new)
//!   Empty ───────────────▶ Partial ───────────▶ Full
//!     ▲   toggle(member)     │  ▲  toggle(member) │
//!     └──────────────────────┘  └─────────────────┘
//!   clear from any phase returns to Empty; toggle(new) while Full is a no-op
//! ```

use crate::errors::{CatalogError, CatalogResult};
use crate::identifiers::ProductId;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Maximum number of products that can be compared at once
pub const MAX_SELECTION: usize = 3;

/// What a toggle did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToggleOutcome {
    /// The id was appended at the end
    Added,
    /// The id was a member and has been removed
    Removed,
    /// The selection is full and the id was not a member; nothing changed
    AtCapacity,
    /// The id is not in the catalog; nothing changed
    UnknownProduct,
}

impl ToggleOutcome {
    /// Whether the selection was modified
    pub fn changed(&self) -> bool {
        matches!(self, ToggleOutcome::Added | ToggleOutcome::Removed)
    }
}

/// Derived label for how full the selection is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionPhase {
    /// Nothing selected
    Empty,
    /// Between one and `MAX_SELECTION - 1` products
    Partial,
    /// `MAX_SELECTION` products; further additions are disabled
    Full,
}

impl SelectionPhase {
    /// Name of this phase for logging
    pub fn name(&self) -> &'static str {
        match self {
            SelectionPhase::Empty => "Empty",
            SelectionPhase::Partial => "Partial",
            SelectionPhase::Full => "Full",
        }
    }
}

/// Ordered set of at most [`MAX_SELECTION`] product ids
///
/// # Examples
///
/// ```rust
/// use solar_compare::{Selection, ToggleOutcome};
///
/// let mut selection = Selection::new();
/// assert_eq!(selection.toggle("a"), ToggleOutcome::Added);
/// assert_eq!(selection.toggle("b"), ToggleOutcome::Added);
/// assert_eq!(selection.toggle("c"), ToggleOutcome::Added);
/// assert_eq!(selection.toggle("d"), ToggleOutcome::AtCapacity);
/// assert!(selection.is_disabled("d"));
///
/// assert_eq!(selection.toggle("b"), ToggleOutcome::Removed);
/// assert_eq!(selection.toggle("b"), ToggleOutcome::Added);
/// assert_eq!(selection.ids(), ["a", "c", "b"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<ProductId>", into = "Vec<ProductId>")]
pub struct Selection {
    ids: Vec<ProductId>,
}

impl Selection {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected ids, in selection order
    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    /// Iterate over selected ids in selection order
    pub fn iter(&self) -> impl Iterator<Item = &ProductId> {
        self.ids.iter()
    }

    /// Number of selected products
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether the selection has reached [`MAX_SELECTION`]
    pub fn is_full(&self) -> bool {
        self.ids.len() >= MAX_SELECTION
    }

    /// Whether `id` is selected
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    /// Whether `id` cannot currently be toggled on
    ///
    /// True exactly when a toggle of `id` would be the capacity no-op.
    pub fn is_disabled(&self, id: &str) -> bool {
        !self.contains(id) && self.is_full()
    }

    /// Current phase
    pub fn phase(&self) -> SelectionPhase {
        match self.ids.len() {
            0 => SelectionPhase::Empty,
            n if n >= MAX_SELECTION => SelectionPhase::Full,
            _ => SelectionPhase::Partial,
        }
    }

    /// Toggle `id` in place
    ///
    /// Members are removed, keeping the order of the rest. Non-members are
    /// appended at the end while there is room; a re-added id therefore lands
    /// last, not at its former position.
    pub fn toggle(&mut self, id: impl AsRef<str>) -> ToggleOutcome {
        let id = id.as_ref();
        let outcome = if let Some(position) = self.ids.iter().position(|selected| selected == id) {
            self.ids.remove(position);
            ToggleOutcome::Removed
        } else if self.is_full() {
            ToggleOutcome::AtCapacity
        } else {
            self.ids.push(ProductId::from(id));
            ToggleOutcome::Added
        };
        debug!(
            product_id = id,
            outcome = ?outcome,
            selected = self.ids.len(),
            phase = self.phase().name(),
            "selection toggled"
        );
        outcome
    }

    /// Return a copy with `id` toggled, leaving `self` untouched
    pub fn toggled(&self, id: impl AsRef<str>) -> Selection {
        let mut next = self.clone();
        next.toggle(id);
        next
    }

    /// Remove every id
    pub fn clear(&mut self) {
        debug!(selected = self.ids.len(), "selection cleared");
        self.ids.clear();
    }

    /// Return an empty selection
    pub fn cleared(&self) -> Selection {
        Selection::new()
    }

    /// Keep only the ids accepted by `keep`, preserving order
    pub fn retain(&mut self, mut keep: impl FnMut(&ProductId) -> bool) {
        self.ids.retain(|id| keep(id));
    }
}

impl TryFrom<Vec<ProductId>> for Selection {
    type Error = CatalogError;

    fn try_from(ids: Vec<ProductId>) -> CatalogResult<Self> {
        if ids.len() > MAX_SELECTION {
            return Err(CatalogError::InvalidSelection(format!(
                "{} products selected, at most {MAX_SELECTION} allowed",
                ids.len()
            )));
        }
        for (position, id) in ids.iter().enumerate() {
            if ids[..position].contains(id) {
                return Err(CatalogError::InvalidSelection(format!("{id} selected twice")));
            }
        }
        Ok(Self { ids })
    }
}

impl From<Selection> for Vec<ProductId> {
    fn from(selection: Selection) -> Self {
        selection.ids
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a ProductId;
    type IntoIter = std::slice::Iter<'a, ProductId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection_of(ids: &[&str]) -> Selection {
        let mut selection = Selection::new();
        for id in ids {
            selection.toggle(id);
        }
        selection
    }

    #[test]
    fn test_toggle_adds_in_order_until_full() {
        let mut selection = Selection::new();
        assert_eq!(selection.phase(), SelectionPhase::Empty);
        assert_eq!(selection.toggle("A"), ToggleOutcome::Added);
        assert_eq!(selection.phase(), SelectionPhase::Partial);
        assert_eq!(selection.toggle("B"), ToggleOutcome::Added);
        assert_eq!(selection.toggle("C"), ToggleOutcome::Added);
        assert_eq!(selection.phase(), SelectionPhase::Full);
        assert_eq!(selection.ids(), ["A", "B", "C"]);

        assert_eq!(selection.toggle("D"), ToggleOutcome::AtCapacity);
        assert_eq!(selection.ids(), ["A", "B", "C"]);
    }

    #[test]
    fn test_toggle_member_removes_and_keeps_order() {
        let mut selection = selection_of(&["A", "B", "C"]);
        assert_eq!(selection.toggle("B"), ToggleOutcome::Removed);
        assert_eq!(selection.ids(), ["A", "C"]);
    }

    #[test]
    fn test_readded_id_goes_last() {
        let mut selection = selection_of(&["A", "B", "C"]);
        selection.toggle("B");
        selection.toggle("B");
        assert_eq!(selection.ids(), ["A", "C", "B"]);
    }

    #[test]
    fn test_is_disabled_only_for_non_members_when_full() {
        let partial = selection_of(&["A", "B"]);
        assert!(!partial.is_disabled("C"));
        assert!(!partial.is_disabled("A"));

        let full = selection_of(&["A", "B", "C"]);
        assert!(full.is_disabled("D"));
        assert!(!full.is_disabled("A"));
    }

    #[test]
    fn test_toggled_is_pure() {
        let original = selection_of(&["A"]);
        let next = original.toggled("B");
        assert_eq!(original.ids(), ["A"]);
        assert_eq!(next.ids(), ["A", "B"]);
    }

    #[test]
    fn test_clear() {
        let mut selection = selection_of(&["A", "B", "C"]);
        selection.clear();
        assert!(selection.is_empty());
        assert_eq!(selection.phase(), SelectionPhase::Empty);
        assert!(selection_of(&["A"]).cleared().is_empty());
    }

    #[test]
    fn test_outcome_changed() {
        assert!(ToggleOutcome::Added.changed());
        assert!(ToggleOutcome::Removed.changed());
        assert!(!ToggleOutcome::AtCapacity.changed());
        assert!(!ToggleOutcome::UnknownProduct.changed());
    }

    #[test]
    fn test_serde_rejects_oversized_or_duplicate() {
        let selection: Selection = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(selection.ids(), ["a", "b"]);
        assert_eq!(serde_json::to_string(&selection).unwrap(), r#"["a","b"]"#);

        assert!(serde_json::from_str::<Selection>(r#"["a","b","c","d"]"#).is_err());
        assert!(serde_json::from_str::<Selection>(r#"["a","a"]"#).is_err());
    }
}
