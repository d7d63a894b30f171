//! Catalog product snapshot and its lenient deserialization.
//!
//! The remote catalog is schema-loose: numeric fields may arrive as
//! strings or be absent entirely, and `images` may be anything. The
//! deserializers here coerce rather than reject — a malformed field
//! degrades to its zero value instead of failing the whole listing.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A snapshot of a remote product record, captured at fetch time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog document identifier.
    #[serde(default)]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Current catalog unit price. Non-numeric or absent values coerce to 0.
    #[serde(default, deserialize_with = "lenient_number")]
    pub price: f64,
    /// Category label.
    #[serde(default)]
    pub category: String,
    /// Primary image URL.
    #[serde(default)]
    pub image: String,
    /// Additional image URLs. `None` when the source field is absent or
    /// not an array; non-string elements are dropped.
    #[serde(default, deserialize_with = "lenient_images")]
    pub images: Option<Vec<String>>,
    /// Long-form description.
    #[serde(default)]
    pub description: String,
    /// Average rating. Non-numeric or absent values coerce to 0.
    #[serde(default, deserialize_with = "lenient_number")]
    pub rating: f64,
    /// Review count. Non-numeric or absent values coerce to 0.
    #[serde(default, deserialize_with = "lenient_number")]
    pub reviews: f64,
}

impl Product {
    /// Create a product with the required display fields; everything
    /// else defaults to empty.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category: String::new(),
            image: String::new(),
            images: None,
            description: String::new(),
            rating: 0.0,
            reviews: 0.0,
        }
    }

    /// Best-effort identifier match, after normalizing both sides.
    ///
    /// Catalog ids and cart `product_id`s come from different code paths
    /// and may carry stray whitespace; comparison trims both.
    pub fn matches_id(&self, id: &str) -> bool {
        self.id.trim() == id.trim()
    }

    /// The image to show for this product: the first gallery image when
    /// present, else the primary image, else nothing.
    pub fn display_image(&self) -> Option<&str> {
        self.images
            .as_deref()
            .and_then(|imgs| imgs.first())
            .map(String::as_str)
            .or_else(|| (!self.image.is_empty()).then_some(self.image.as_str()))
    }
}

/// Coerce a loose JSON value to a number, treating anything non-numeric
/// as 0.
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        Value::Bool(b) => {
            if b {
                1.0
            } else {
                0.0
            }
        }
        _ => 0.0,
    })
}

/// Keep `images` only when it is an array, and only its string elements.
fn lenient_images<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}
