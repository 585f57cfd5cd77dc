use crate::config::ComparisonLimits;

use super::{ComparisonEngine, ComparisonReport, VehicleSnapshot};

/// Service pairing the scoring engine with the storefront's request limits.
///
/// The engine itself tolerates any vehicle count; the limits mirror what the
/// storefront UI enforces (compare 2 to 4 vehicles) so the HTTP boundary and
/// the UI reject the same requests.
pub struct ComparisonService {
    engine: ComparisonEngine,
    limits: ComparisonLimits,
}

impl ComparisonService {
    pub fn new(engine: ComparisonEngine, limits: ComparisonLimits) -> Self {
        Self { engine, limits }
    }

    pub fn standard(limits: ComparisonLimits) -> Self {
        Self::new(ComparisonEngine::standard(), limits)
    }

    pub fn compare(
        &self,
        vehicles: Vec<VehicleSnapshot>,
    ) -> Result<ComparisonReport, ComparisonRequestError> {
        if vehicles.len() < self.limits.min_vehicles {
            return Err(ComparisonRequestError::NotEnoughVehicles {
                minimum: self.limits.min_vehicles,
                actual: vehicles.len(),
            });
        }
        if vehicles.len() > self.limits.max_vehicles {
            return Err(ComparisonRequestError::TooManyVehicles {
                maximum: self.limits.max_vehicles,
                actual: vehicles.len(),
            });
        }

        Ok(self.engine.compare(vehicles))
    }
}

/// Request-shape violations surfaced at the service boundary.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ComparisonRequestError {
    #[error("comparison requires at least {minimum} vehicles, got {actual}")]
    NotEnoughVehicles { minimum: usize, actual: usize },
    #[error("comparison accepts at most {maximum} vehicles, got {actual}")]
    TooManyVehicles { maximum: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::comparison::domain::{FuelType, Transmission, VehicleId};

    fn vehicle(id: &str, price: f64) -> VehicleSnapshot {
        VehicleSnapshot {
            id: VehicleId(id.to_string()),
            label: id.to_string(),
            price,
            mileage: 12_000.0,
            year: 2023,
            fuel_type: FuelType::Gasoline,
            transmission: Transmission::Automatic,
            engine: None,
            location: None,
            rating: 4.0,
            stock: Some(3),
        }
    }

    #[test]
    fn rejects_single_vehicle_requests() {
        let service = ComparisonService::standard(ComparisonLimits::default());
        let result = service.compare(vec![vehicle("a", 20_000.0)]);
        assert_eq!(
            result.unwrap_err(),
            ComparisonRequestError::NotEnoughVehicles {
                minimum: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn rejects_oversized_requests() {
        let service = ComparisonService::standard(ComparisonLimits::default());
        let vehicles: Vec<_> = (0..5)
            .map(|n| vehicle(&format!("veh-{n}"), 20_000.0 + f64::from(n)))
            .collect();
        let result = service.compare(vehicles);
        assert_eq!(
            result.unwrap_err(),
            ComparisonRequestError::TooManyVehicles {
                maximum: 4,
                actual: 5
            }
        );
    }

    #[test]
    fn accepts_requests_within_limits() {
        let service = ComparisonService::standard(ComparisonLimits::default());
        let report = service
            .compare(vec![vehicle("a", 18_000.0), vehicle("b", 24_000.0)])
            .expect("pair compares");
        assert_eq!(report.entries.len(), 2);
        assert_eq!(report.winner().map(|entry| entry.vehicle.id.0.as_str()), Some("a"));
    }
}
