use serde::{Deserialize, Serialize};

use super::domain::VehicleSnapshot;

/// Attribute categories scored by the comparison rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Price,
    Mileage,
    Year,
    Rating,
    FuelType,
    Transmission,
    Location,
}

impl Category {
    pub const fn label(self) -> &'static str {
        match self {
            Category::Price => "price",
            Category::Mileage => "mileage",
            Category::Year => "year",
            Category::Rating => "rating",
            Category::FuelType => "fuel type",
            Category::Transmission => "transmission",
            Category::Location => "location",
        }
    }
}

/// Whether a larger raw value ranks better within a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

/// One row of the rubric: a category, its relative weight, and its direction.
#[derive(Debug, Clone, Copy)]
pub struct CategoryWeight {
    pub category: Category,
    pub weight: f64,
    pub direction: Direction,
}

/// The standard rubric. Weights sum to 1.0 and do not change at runtime;
/// fuel type, transmission, and location are textual and always score a
/// neutral half-weight regardless of value.
pub const STANDARD_RUBRIC: [CategoryWeight; 7] = [
    CategoryWeight {
        category: Category::Price,
        weight: 0.25,
        direction: Direction::LowerIsBetter,
    },
    CategoryWeight {
        category: Category::Mileage,
        weight: 0.20,
        direction: Direction::LowerIsBetter,
    },
    CategoryWeight {
        category: Category::Year,
        weight: 0.20,
        direction: Direction::HigherIsBetter,
    },
    CategoryWeight {
        category: Category::Rating,
        weight: 0.15,
        direction: Direction::HigherIsBetter,
    },
    CategoryWeight {
        category: Category::FuelType,
        weight: 0.10,
        direction: Direction::HigherIsBetter,
    },
    CategoryWeight {
        category: Category::Transmission,
        weight: 0.05,
        direction: Direction::HigherIsBetter,
    },
    CategoryWeight {
        category: Category::Location,
        weight: 0.05,
        direction: Direction::HigherIsBetter,
    },
];

/// Raw value pulled out of a snapshot for one category.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CategoryValue {
    Numeric(f64),
    Text(String),
}

impl Category {
    /// Extract the raw value for this category. Non-finite numerics are
    /// coerced to 0 so malformed listing data cannot poison the normalizer.
    pub(crate) fn extract(self, vehicle: &VehicleSnapshot) -> CategoryValue {
        let numeric = |value: f64| {
            if value.is_finite() {
                CategoryValue::Numeric(value)
            } else {
                CategoryValue::Numeric(0.0)
            }
        };

        match self {
            Category::Price => numeric(vehicle.price),
            Category::Mileage => numeric(vehicle.mileage),
            Category::Year => numeric(f64::from(vehicle.year)),
            Category::Rating => numeric(vehicle.rating),
            Category::FuelType => CategoryValue::Text(vehicle.fuel_type.label().to_string()),
            Category::Transmission => {
                CategoryValue::Text(vehicle.transmission.label().to_string())
            }
            Category::Location => CategoryValue::Text(vehicle.location_label().to_string()),
        }
    }
}
