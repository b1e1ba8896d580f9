// Copyright 2025 Cowboy AI, LLC.

//! Catalog products and their value objects
//!
//! Products are immutable once loaded. Specifications have no fixed schema:
//! each product carries its own ordered set of named values, and a value is
//! either text or a number.

use crate::category::Category;
use crate::errors::{CatalogError, CatalogResult};
use crate::identifiers::ProductId;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest allowed rating
pub const MAX_RATING: f64 = 5.0;

/// A named selling point shown on a product card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Feature {
    /// Short title
    pub name: String,
    /// One or two sentences of copy
    pub description: String,
}

impl Feature {
    /// Create a feature
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Value of a single specification
///
/// Serialized untagged, so catalog JSON writes plain `"97%"` or `10`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum SpecValue {
    /// Numeric value (capacity, cycles, weight...)
    Number(f64),
    /// Free-form text value
    Text(String),
}

impl SpecValue {
    /// Text content, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SpecValue::Text(text) => Some(text),
            SpecValue::Number(_) => None,
        }
    }

    /// Numeric content, if this is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            SpecValue::Number(n) => Some(*n),
            SpecValue::Text(_) => None,
        }
    }
}

impl fmt::Display for SpecValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecValue::Number(n) => write!(f, "{n}"),
            SpecValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for SpecValue {
    fn from(text: &str) -> Self {
        SpecValue::Text(text.to_string())
    }
}

impl From<String> for SpecValue {
    fn from(text: String) -> Self {
        SpecValue::Text(text)
    }
}

impl From<f64> for SpecValue {
    fn from(n: f64) -> Self {
        SpecValue::Number(n)
    }
}

impl From<i64> for SpecValue {
    fn from(n: i64) -> Self {
        SpecValue::Number(n as f64)
    }
}

/// Price as shown on the card: amount plus a free-form unit
///
/// The unit is display copy (`"EUR"`, `"EUR/kWh"`, `"per panel"`), not a
/// currency code, so no arithmetic is offered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Price {
    /// Amount
    pub value: f64,
    /// Unit label
    pub unit: String,
}

impl Price {
    /// Create a price
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::new(0.0, "EUR")
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// A sellable catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique, stable identifier
    pub id: ProductId,
    /// Display name
    pub name: String,
    /// Marketing description
    #[serde(default)]
    pub description: String,
    /// Category tag
    pub category: Category,
    /// Selling points, in display order
    #[serde(default)]
    pub features: Vec<Feature>,
    /// Technical attributes, in data order
    #[serde(default)]
    pub specifications: IndexMap<String, SpecValue>,
    /// Where the product is typically installed
    #[serde(default)]
    pub application_areas: Vec<String>,
    /// Price
    #[serde(default)]
    pub price: Price,
    /// Customer rating in `0.0..=5.0`
    #[serde(default)]
    pub rating: f64,
    /// Card image
    #[serde(default)]
    pub image_url: String,
}

impl Product {
    /// Start building a product with its required fields
    pub fn builder(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<Category>,
    ) -> ProductBuilder {
        ProductBuilder::new(id, name, category)
    }

    /// Look up a specification by name
    pub fn spec(&self, key: &str) -> Option<&SpecValue> {
        self.specifications.get(key)
    }

    /// Check the per-product rules enforced at catalog load
    pub fn validate(&self) -> CatalogResult<()> {
        if self.id.is_empty() {
            return Err(self.empty_field("id"));
        }
        if self.name.trim().is_empty() {
            return Err(self.empty_field("name"));
        }
        if self.category.as_str().is_empty() {
            return Err(self.empty_field("category"));
        }
        if !self.rating.is_finite() || !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(CatalogError::InvalidRating {
                id: self.id.to_string(),
                rating: self.rating,
            });
        }
        Ok(())
    }

    fn empty_field(&self, field: &'static str) -> CatalogError {
        CatalogError::EmptyField {
            id: self.id.to_string(),
            field,
        }
    }
}

/// Builder for [`Product`]
#[derive(Debug, Clone)]
pub struct ProductBuilder {
    product: Product,
}

impl ProductBuilder {
    fn new(id: impl Into<ProductId>, name: impl Into<String>, category: impl Into<Category>) -> Self {
        Self {
            product: Product {
                id: id.into(),
                name: name.into(),
                description: String::new(),
                category: category.into(),
                features: Vec::new(),
                specifications: IndexMap::new(),
                application_areas: Vec::new(),
                price: Price::default(),
                rating: 0.0,
                image_url: String::new(),
            },
        }
    }

    /// Set the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.product.description = description.into();
        self
    }

    /// Append a feature
    pub fn feature(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.product.features.push(Feature::new(name, description));
        self
    }

    /// Append a specification; a repeated key keeps its first position
    pub fn spec(mut self, key: impl Into<String>, value: impl Into<SpecValue>) -> Self {
        self.product.specifications.insert(key.into(), value.into());
        self
    }

    /// Append an application area
    pub fn application_area(mut self, area: impl Into<String>) -> Self {
        self.product.application_areas.push(area.into());
        self
    }

    /// Set the price
    pub fn price(mut self, value: f64, unit: impl Into<String>) -> Self {
        self.product.price = Price::new(value, unit);
        self
    }

    /// Set the rating
    pub fn rating(mut self, rating: f64) -> Self {
        self.product.rating = rating;
        self
    }

    /// Set the image URL
    pub fn image_url(mut self, url: impl Into<String>) -> Self {
        self.product.image_url = url.into();
        self
    }

    /// Finish without validation; [`crate::CatalogStore::new`] validates
    pub fn build(self) -> Product {
        self.product
    }
}
