// Copyright 2025 Cowboy AI, LLC.

//! Product categories and the category filter
//!
//! Categories are opaque string tags. The well-known tags below are the ones
//! the shipped catalog uses, but data may introduce new tags at any time and
//! they flow through filtering and faceting untouched.

use crate::product::Product;
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Tag for hybrid inverters
pub const HYBRID_INVERTER: &str = "hybrid-inverter";
/// Tag for microinverters
pub const MICROINVERTER: &str = "microinverter";
/// Tag for string inverters
pub const STRING_INVERTER: &str = "string-inverter";
/// Tag for solar panels
pub const SOLAR_PANEL: &str = "solar-panel";
/// Tag for battery storage
pub const BATTERY: &str = "battery";

/// Sentinel accepted by [`CategoryFilter::from_str`] meaning "no filtering"
pub const ALL: &str = "all";

/// A product category tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Create a category from its tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The raw tag
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human readable label for filter tabs
    ///
    /// Known tags map to their marketing names; anything else is title-cased
    /// from its kebab-case form (`"heat-pump"` becomes `"Heat Pump"`).
    pub fn label(&self) -> String {
        match self.0.as_str() {
            HYBRID_INVERTER => "Hybrid Inverter".to_string(),
            MICROINVERTER => "Microinverter".to_string(),
            STRING_INVERTER => "String Inverter".to_string(),
            SOLAR_PANEL => "Solar Panel".to_string(),
            BATTERY => "Battery Storage".to_string(),
            other => title_case(other),
        }
    }
}

fn title_case(tag: &str) -> String {
    tag.split(|c: char| c == '-' || c == '_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(tag: &str) -> Self {
        Self(tag.to_string())
    }
}

impl From<String> for Category {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

impl PartialEq<str> for Category {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Category {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Which part of the catalog is visible
///
/// On the wire this is a single string: `"all"` or a category tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// Every product
    #[default]
    All,
    /// Only products carrying this tag
    Only(Category),
}

impl CategoryFilter {
    /// Filter down to a single category
    pub fn only(category: impl Into<Category>) -> Self {
        CategoryFilter::Only(category.into())
    }

    /// Whether a product passes this filter
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
        }
    }

    /// The tag form of this filter
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL,
            CategoryFilter::Only(category) => category.as_str(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CategoryFilter::from(s.to_string()))
    }
}

impl From<String> for CategoryFilter {
    fn from(tag: String) -> Self {
        if tag == ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(Category(tag))
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => ALL.to_string(),
            CategoryFilter::Only(category) => category.0,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

/// Narrow a catalog to the products passing `filter`, keeping catalog order
pub fn filter_by_category<'a>(catalog: &'a [Product], filter: &CategoryFilter) -> Vec<&'a Product> {
    let visible: Vec<&Product> = catalog.iter().filter(|p| filter.matches(p)).collect();
    debug!(category = %filter, visible = visible.len(), "applied category filter");
    visible
}

/// Count products per category, in the order categories first appear
pub fn category_counts(catalog: &[Product]) -> Vec<(Category, usize)> {
    let mut counts: IndexMap<&Category, usize> = IndexMap::new();
    for product in catalog {
        *counts.entry(&product.category).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(category, count)| (category.clone(), count))
        .collect()
}
