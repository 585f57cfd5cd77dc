use metrics_exporter_prometheus::PrometheusHandle;
use showroom::workflows::comparison::{
    FuelType, Transmission, VehicleId, VehicleSnapshot,
};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Fixed line-up used by the CLI demo so output is reproducible.
pub(crate) fn sample_inventory() -> Vec<VehicleSnapshot> {
    vec![
        VehicleSnapshot {
            id: VehicleId("veh-aurora".to_string()),
            label: "2024 Aurora GT Hybrid".to_string(),
            price: 27_500.0,
            mileage: 6_200.0,
            year: 2024,
            fuel_type: FuelType::Hybrid,
            transmission: Transmission::Automatic,
            engine: Some("1.8L hybrid".to_string()),
            location: Some("Des Moines".to_string()),
            rating: 4.6,
            stock: Some(3),
        },
        VehicleSnapshot {
            id: VehicleId("veh-meridian".to_string()),
            label: "2022 Meridian LX".to_string(),
            price: 21_900.0,
            mileage: 28_400.0,
            year: 2022,
            fuel_type: FuelType::Gasoline,
            transmission: Transmission::Cvt,
            engine: Some("2.0L I4".to_string()),
            location: Some("Cedar Rapids".to_string()),
            rating: 4.1,
            stock: Some(1),
        },
        VehicleSnapshot {
            id: VehicleId("veh-ridgeline".to_string()),
            label: "2023 Ridgeline Sport".to_string(),
            price: 33_800.0,
            mileage: 11_000.0,
            year: 2023,
            fuel_type: FuelType::Diesel,
            transmission: Transmission::Automatic,
            engine: Some("3.0L V6 turbodiesel".to_string()),
            location: Some("Iowa City".to_string()),
            rating: 4.4,
            stock: Some(6),
        },
    ]
}
