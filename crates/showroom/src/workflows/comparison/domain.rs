use serde::{Deserialize, Serialize};

/// Identifier wrapper for vehicles referenced in a comparison request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VehicleId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelType {
    Gasoline,
    Diesel,
    Hybrid,
    Electric,
}

impl FuelType {
    pub const fn label(self) -> &'static str {
        match self {
            FuelType::Gasoline => "gasoline",
            FuelType::Diesel => "diesel",
            FuelType::Hybrid => "hybrid",
            FuelType::Electric => "electric",
        }
    }

    pub const fn is_eco(self) -> bool {
        matches!(self, FuelType::Hybrid | FuelType::Electric)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transmission {
    Manual,
    Automatic,
    Cvt,
}

impl Transmission {
    pub const fn label(self) -> &'static str {
        match self {
            Transmission::Manual => "manual",
            Transmission::Automatic => "automatic",
            Transmission::Cvt => "cvt",
        }
    }
}

/// Catalog snapshot of a vehicle captured at comparison time.
///
/// Constructed fresh from externally supplied listing data for each request
/// and never mutated. Missing numeric fields deserialize to the defaults the
/// scorer expects (mileage 0, rating 4.0); `engine` and `location` render as
/// "N/A" when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSnapshot {
    pub id: VehicleId,
    /// Display name shown in comparison output, e.g. "2024 Aurora GT".
    pub label: String,
    pub price: f64,
    #[serde(default)]
    pub mileage: f64,
    pub year: i32,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    #[serde(default)]
    pub engine: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default = "default_rating")]
    pub rating: f64,
    /// Units on the lot, when the listing reports it.
    #[serde(default)]
    pub stock: Option<u32>,
}

fn default_rating() -> f64 {
    4.0
}

impl VehicleSnapshot {
    pub fn engine_label(&self) -> &str {
        self.engine.as_deref().unwrap_or("N/A")
    }

    pub fn location_label(&self) -> &str {
        self.location.as_deref().unwrap_or("N/A")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_deserializes_with_scoring_defaults() {
        let raw = r#"{
            "id": "veh-001",
            "label": "2024 Aurora GT",
            "price": 27500,
            "year": 2024,
            "fuel_type": "hybrid",
            "transmission": "automatic"
        }"#;

        let snapshot: VehicleSnapshot = serde_json::from_str(raw).expect("snapshot parses");
        assert_eq!(snapshot.mileage, 0.0);
        assert_eq!(snapshot.rating, 4.0);
        assert_eq!(snapshot.stock, None);
        assert_eq!(snapshot.engine_label(), "N/A");
        assert_eq!(snapshot.location_label(), "N/A");
        assert!(snapshot.fuel_type.is_eco());
    }
}
