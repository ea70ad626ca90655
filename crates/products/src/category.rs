use core::str::FromStr;
use serde::{Deserialize, Serialize};

use entrygrid_core::ValueObject;

/// Product category (fixed label set shown in the category picker).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    Books,
    #[serde(rename = "Home & Garden")]
    HomeAndGarden,
    Sports,
    Toys,
    Automotive,
    #[serde(rename = "Health & Beauty")]
    HealthAndBeauty,
    #[serde(rename = "Food & Beverages")]
    FoodAndBeverages,
    Other,
}

impl Category {
    /// All categories in picker order.
    pub const ALL: [Category; 10] = [
        Category::Electronics,
        Category::Clothing,
        Category::Books,
        Category::HomeAndGarden,
        Category::Sports,
        Category::Toys,
        Category::Automotive,
        Category::HealthAndBeauty,
        Category::FoodAndBeverages,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Books => "Books",
            Category::HomeAndGarden => "Home & Garden",
            Category::Sports => "Sports",
            Category::Toys => "Toys",
            Category::Automotive => "Automotive",
            Category::HealthAndBeauty => "Health & Beauty",
            Category::FoodAndBeverages => "Food & Beverages",
            Category::Other => "Other",
        }
    }
}

impl ValueObject for Category {}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string is not one of the category labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Labels match exactly (they come from a fixed picker, not free text).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
