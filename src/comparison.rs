// Copyright 2025 Cowboy AI, LLC.

//! Comparison table derivation
//!
//! A [`ComparisonView`] is recomputed from the catalog and the selection
//! whenever the selection changes; it is never stored on its own. Columns are
//! the selected products in selection order, rows are the union of their
//! specification names in first-seen order.

use crate::catalog::CatalogStore;
use crate::product::{Product, SpecValue};
use crate::selection::Selection;
use indexmap::IndexSet;
use serde::Serialize;
use std::fmt;
use tracing::warn;

/// Marker rendered for a specification a product does not have
pub const NOT_APPLICABLE: &str = "N/A";

/// One cell of the comparison table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SpecCell<'a> {
    /// The product defines this specification
    Value(&'a SpecValue),
    /// Another selected product contributes the key, this one lacks it
    NotApplicable,
}

impl<'a> SpecCell<'a> {
    /// The value, if present
    pub fn value(&self) -> Option<&'a SpecValue> {
        match *self {
            SpecCell::Value(value) => Some(value),
            SpecCell::NotApplicable => None,
        }
    }

    /// Whether this is the not-applicable marker
    pub fn is_not_applicable(&self) -> bool {
        matches!(self, SpecCell::NotApplicable)
    }
}

impl fmt::Display for SpecCell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecCell::Value(value) => fmt::Display::fmt(value, f),
            SpecCell::NotApplicable => f.write_str(NOT_APPLICABLE),
        }
    }
}

/// One table row: a specification name and a cell per selected product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow<'a> {
    /// Specification name
    pub key: &'a str,
    /// Cells in column order
    pub cells: Vec<SpecCell<'a>>,
}

/// Derived comparison table
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonView<'a> {
    /// Selected products, in selection order
    pub products: Vec<&'a Product>,
    /// Distinct specification names, in first-seen order
    pub specification_keys: Vec<&'a str>,
}

impl<'a> ComparisonView<'a> {
    /// Whether there is nothing to compare
    ///
    /// Renderers show an empty-state placeholder instead of a table.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Cell for the product in column `column` and specification `key`
    ///
    /// Out-of-range columns yield [`SpecCell::NotApplicable`].
    pub fn cell(&self, column: usize, key: &str) -> SpecCell<'a> {
        self.products
            .get(column)
            .and_then(|&product| product.spec(key))
            .map_or(SpecCell::NotApplicable, SpecCell::Value)
    }

    /// All rows of the table, one per specification key
    pub fn rows(&self) -> Vec<ComparisonRow<'a>> {
        self.specification_keys
            .iter()
            .map(|&key| ComparisonRow {
                key,
                cells: (0..self.products.len())
                    .map(|column| self.cell(column, key))
                    .collect(),
            })
            .collect()
    }
}

/// Resolve the selection against the catalog and build the comparison table
///
/// Ids missing from the catalog are dropped with a warning rather than
/// failing the whole view.
pub fn derive_view<'a>(catalog: &'a CatalogStore, selection: &Selection) -> ComparisonView<'a> {
    let products: Vec<&Product> = selection
        .iter()
        .filter_map(|id| {
            let product = catalog.get_by_id(id.as_str());
            if product.is_none() {
                warn!(product_id = %id, "selected product missing from catalog, excluded from comparison");
            }
            product
        })
        .collect();

    let mut keys: IndexSet<&str> = IndexSet::new();
    for &product in &products {
        keys.extend(product.specifications.keys().map(String::as_str));
    }

    ComparisonView {
        products,
        specification_keys: keys.into_iter().collect(),
    }
}
