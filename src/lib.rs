//! # Solar Compare
//!
//! Product comparison engine for a solar-energy contractor's catalog.
//!
//! This crate provides the pieces behind the "compare products" page:
//! - **Catalog**: an immutable, id-indexed set of products loaded once
//! - **Category Filter**: narrows the visible catalog to one category tag
//! - **Selection**: a bounded, ordered set of at most three product ids
//! - **Comparison View**: the derived table of selected products × specifications
//! - **Session**: the UI controller state tying the above together
//!
//! ## Design Principles
//!
//! 1. **Pure derivation**: filtering and comparison are functions of their inputs
//! 2. **Explicit state**: the selection is a value passed in and out, never global
//! 3. **Graceful degradation**: edge cases become no-ops or placeholders, not errors
//! 4. **Open categories**: category tags are data, so new ones need no code change
//!
//! ## Example
//!
//! ```rust
//! use solar_compare::{derive_view, CatalogStore, Product, Selection, SpecCell};
//!
//! let catalog = CatalogStore::new(vec![
//!     Product::builder("A", "Inverter A", "hybrid-inverter").spec("Warranty", "10 years").build(),
//!     Product::builder("B", "Panel B", "solar-panel").spec("Efficiency", "97%").build(),
//! ])
//! .unwrap();
//!
//! let selection = Selection::new().toggled("A").toggled("B");
//! let view = derive_view(&catalog, &selection);
//!
//! assert_eq!(view.specification_keys, vec!["Warranty", "Efficiency"]);
//! assert_eq!(view.cell(0, "Efficiency"), SpecCell::NotApplicable);
//! ```

#![warn(missing_docs)]

mod catalog;
pub mod category;
mod comparison;
mod errors;
mod identifiers;
mod product;
mod selection;
mod session;

// Re-export core types
pub use catalog::{catalog_schema, CatalogStore};
pub use category::{category_counts, filter_by_category, Category, CategoryFilter};
pub use comparison::{derive_view, ComparisonRow, ComparisonView, SpecCell, NOT_APPLICABLE};
pub use errors::{CatalogError, CatalogResult};
pub use identifiers::ProductId;
pub use product::{Feature, Price, Product, ProductBuilder, SpecValue, MAX_RATING};
pub use selection::{Selection, SelectionPhase, ToggleOutcome, MAX_SELECTION};
pub use session::ComparisonSession;
