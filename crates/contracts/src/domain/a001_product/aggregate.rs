use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of stars on the rating scale
pub const MAX_STARS: u8 = 5;

// ============================================================================
// ID Type
// ============================================================================

/// Catalog identifier of a product, unique within one catalog response
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl ProductId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Rating
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    /// Average score on the 0..=5 scale
    pub rate: f64,
    /// Number of reviews behind `rate`
    pub count: u32,
}

impl Rating {
    /// Stars to draw filled: the rate rounded to the nearest whole star.
    pub fn filled_stars(&self) -> u8 {
        if !self.rate.is_finite() {
            return 0;
        }
        self.rate.round().clamp(0.0, f64::from(MAX_STARS)) as u8
    }
}

// ============================================================================
// Product
// ============================================================================

/// A catalog record as served by the remote catalog endpoint.
///
/// Records are immutable once fetched; the frontend only reorders and
/// slices them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub category: String,
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub rating: Rating,
}
