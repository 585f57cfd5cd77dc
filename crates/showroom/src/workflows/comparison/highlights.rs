use serde::{Deserialize, Serialize};

use super::domain::VehicleSnapshot;

/// Qualitative pros and cons attached alongside the weighted score.
///
/// Thresholds are fixed product constants, deliberately independent of the
/// comparison set, so the same vehicle reads the same way in any line-up.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Highlights {
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

pub(crate) const RECENT_MODEL_YEAR: i32 = 2023;
pub(crate) const OLDER_MODEL_YEAR: i32 = 2022;
pub(crate) const LOW_MILEAGE_CEILING: f64 = 10_000.0;
pub(crate) const HIGH_MILEAGE_FLOOR: f64 = 20_000.0;
pub(crate) const HIGH_PRICE_FLOOR: f64 = 30_000.0;
pub(crate) const HIGH_RATING_FLOOR: f64 = 4.5;
pub(crate) const LOW_STOCK_CEILING: u32 = 2;

pub(crate) fn highlights_for(vehicle: &VehicleSnapshot) -> Highlights {
    let mut pros = Vec::new();
    let mut cons = Vec::new();

    if vehicle.year >= RECENT_MODEL_YEAR {
        pros.push("recent model".to_string());
    }
    if vehicle.mileage < LOW_MILEAGE_CEILING {
        pros.push("low mileage".to_string());
    }
    if vehicle.fuel_type.is_eco() {
        pros.push("eco-friendly".to_string());
    }
    if vehicle.rating >= HIGH_RATING_FLOOR {
        pros.push("high rating".to_string());
    }
    if vehicle.transmission == super::domain::Transmission::Automatic {
        pros.push("automatic transmission".to_string());
    }

    if vehicle.price > HIGH_PRICE_FLOOR {
        cons.push("high price".to_string());
    }
    if vehicle.mileage > HIGH_MILEAGE_FLOOR {
        cons.push("high mileage".to_string());
    }
    if vehicle.year < OLDER_MODEL_YEAR {
        cons.push("older model".to_string());
    }
    if matches!(vehicle.stock, Some(stock) if stock < LOW_STOCK_CEILING) {
        cons.push("low stock".to_string());
    }

    Highlights { pros, cons }
}
