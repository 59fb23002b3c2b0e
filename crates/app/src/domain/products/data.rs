//! Products Data

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Validated, client-owned product fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub quantity: u32,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_date: Option<Date>,
    pub category: String,
}

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub input: ProductInput,
    pub image_path: Option<String>,
}

/// Product search criteria. A product matches when it satisfies any supplied
/// criterion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductSearch {
    /// Exact name.
    pub name: Option<String>,
    /// Any of these categories.
    pub categories: Vec<String>,
    /// Price at or below this value.
    pub max_price: Option<f64>,
    /// Any of these discounts.
    pub discounts: Vec<String>,
}

impl ProductSearch {
    /// Whether no criterion was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.categories.is_empty()
            && self.max_price.is_none()
            && self.discounts.is_empty()
    }
}
