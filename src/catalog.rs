// Copyright 2025 Cowboy AI, LLC.

//! Catalog store
//!
//! Holds the fixed product list for a session. A catalog is validated once
//! when it is built and is read-only afterwards.

use crate::category::{category_counts, Category};
use crate::errors::{CatalogError, CatalogResult};
use crate::identifiers::ProductId;
use crate::product::Product;
use schemars::schema::RootSchema;
use std::collections::HashMap;
use std::io::Read;
use tracing::info;

const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

/// Immutable, id-indexed collection of products
///
/// # Examples
///
/// ```rust
/// use solar_compare::{CatalogStore, Product};
///
/// let catalog = CatalogStore::new(vec![
///     Product::builder("a", "Hybrid A", "hybrid-inverter").build(),
///     Product::builder("b", "Panel B", "solar-panel").build(),
/// ])
/// .unwrap();
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.get_by_id("b").unwrap().name, "Panel B");
/// assert!(catalog.get_by_id("z").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl CatalogStore {
    /// Build a catalog, validating every product and id uniqueness
    pub fn new(products: Vec<Product>) -> CatalogResult<Self> {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            product.validate()?;
            if index.insert(product.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateProductId(product.id.to_string()));
            }
        }
        info!(products = products.len(), "catalog loaded");
        Ok(Self { products, index })
    }

    /// Parse a catalog from a JSON array of products
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Parse a catalog from a reader yielding a JSON array of products
    pub fn from_reader<R: Read>(reader: R) -> CatalogResult<Self> {
        let products: Vec<Product> = serde_json::from_reader(reader)?;
        Self::new(products)
    }

    /// The solar catalog shipped with the crate
    pub fn embedded() -> CatalogResult<Self> {
        Self::from_json_str(EMBEDDED_CATALOG)
    }

    /// Every product, in catalog order
    pub fn get_all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id
    pub fn get_by_id(&self, id: &str) -> Option<&Product> {
        self.index.get(id).map(|&position| &self.products[position])
    }

    /// Look up a product by id, failing when it is absent
    pub fn require(&self, id: &str) -> CatalogResult<&Product> {
        self.get_by_id(id)
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))
    }

    /// Whether a product with this id exists
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Number of products
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Per-category product counts, in first-seen order
    pub fn categories(&self) -> Vec<(Category, usize)> {
        category_counts(&self.products)
    }

    /// Serialize the catalog back to its JSON form
    pub fn to_json(&self) -> CatalogResult<String> {
        Ok(serde_json::to_string_pretty(&self.products)?)
    }
}

/// JSON Schema describing the catalog document accepted by [`CatalogStore::from_json_str`]
pub fn catalog_schema() -> RootSchema {
    schemars::schema_for!(Vec<Product>)
}
