pub mod domain;
mod highlights;
pub mod router;
mod scoring;
mod service;
pub mod weights;

pub use domain::{FuelType, Transmission, VehicleId, VehicleSnapshot};
pub use highlights::Highlights;
pub use router::comparison_router;
pub use service::{ComparisonRequestError, ComparisonService};
pub use weights::{Category, CategoryWeight, Direction, STANDARD_RUBRIC};

use serde::Serialize;

/// Stateless engine that applies a weight rubric to a set of vehicles.
///
/// Pure over its input: no I/O, no interior state, and two calls with the
/// same set produce identical reports.
pub struct ComparisonEngine {
    rubric: Vec<CategoryWeight>,
}

impl ComparisonEngine {
    /// Engine using [`STANDARD_RUBRIC`].
    pub fn standard() -> Self {
        Self::with_rubric(STANDARD_RUBRIC.to_vec())
    }

    pub fn with_rubric(rubric: Vec<CategoryWeight>) -> Self {
        Self { rubric }
    }

    /// Score and rank the given vehicles.
    ///
    /// Tolerates any count: an empty set yields an empty report, and a
    /// single vehicle yields one trivially neutral entry. Ties in total
    /// score keep request order (the sort is stable); no secondary key is
    /// applied.
    pub fn compare(&self, vehicles: Vec<VehicleSnapshot>) -> ComparisonReport {
        let scored = scoring::score_set(&vehicles, &self.rubric);

        let mut entries: Vec<ComparisonEntry> = vehicles
            .into_iter()
            .zip(scored)
            .map(|(vehicle, scored)| {
                let highlights = highlights::highlights_for(&vehicle);
                ComparisonEntry {
                    vehicle,
                    score: scored.score,
                    best_categories: scored.best_categories,
                    highlights,
                }
            })
            .collect();

        entries.sort_by(|a, b| b.score.total_cmp(&a.score));

        ComparisonReport { entries }
    }
}

/// One ranked line of a comparison report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonEntry {
    pub vehicle: VehicleSnapshot,
    /// Aggregate weighted score in [0, 1].
    pub score: f64,
    /// Categories this vehicle alone (or tied) leads across the set.
    pub best_categories: Vec<Category>,
    pub highlights: Highlights,
}

/// Ranked comparison output, descending by score. Built fresh per request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub entries: Vec<ComparisonEntry>,
}

impl ComparisonReport {
    /// The top-ranked vehicle, when the set was non-empty.
    pub fn winner(&self) -> Option<&ComparisonEntry> {
        self.entries.first()
    }
}
