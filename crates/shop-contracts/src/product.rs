use super::ProductId;
use serde::{Deserialize, Serialize};

/// Immutable catalog record. Identity is `id`; every other field is a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    /// Pre-discount price. Producers keep this `>= price`; it is not enforced here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    pub rating: f64,
    pub review_count: u32,
    pub in_stock: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl Product {
    pub fn is_featured(&self) -> bool {
        self.featured == Some(true)
    }

    /// Whole-number percentage off `original_price`, rounded to nearest.
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if original <= 0.0 || original < self.price {
            return None;
        }
        Some(((original - self.price) / original * 100.0).round() as u32)
    }
}
