use super::domain::VehicleSnapshot;
use super::weights::{Category, CategoryValue, CategoryWeight, Direction};

/// Per-vehicle accumulator produced by the rubric pass, still in input order.
pub(crate) struct ScoredVehicle {
    pub score: f64,
    pub best_categories: Vec<Category>,
}

const NEUTRAL_SHARE: f64 = 0.5;
const VALUE_EPSILON: f64 = 1e-9;

/// Run every rubric row over the set and accumulate weighted scores.
///
/// Numeric categories are min-max normalized across the set; a category with
/// no spread (or a non-positive maximum) contributes a flat half-weight to
/// everyone and names no best vehicle. Textual categories always contribute
/// the flat half-weight. Final scores are clamped to [0, 1].
pub(crate) fn score_set(
    vehicles: &[VehicleSnapshot],
    rubric: &[CategoryWeight],
) -> Vec<ScoredVehicle> {
    let mut totals = vec![0.0_f64; vehicles.len()];
    let mut best_categories: Vec<Vec<Category>> = vec![Vec::new(); vehicles.len()];

    for row in rubric {
        let values: Vec<CategoryValue> = vehicles
            .iter()
            .map(|vehicle| row.category.extract(vehicle))
            .collect();

        match numeric_values(&values) {
            Some(numbers) => {
                score_numeric_category(row, &numbers, &mut totals, &mut best_categories);
            }
            None => {
                // Textual attributes do not discriminate between vehicles.
                for total in totals.iter_mut() {
                    *total += row.weight * NEUTRAL_SHARE;
                }
            }
        }
    }

    totals
        .into_iter()
        .zip(best_categories)
        .map(|(score, best)| ScoredVehicle {
            score: score.clamp(0.0, 1.0),
            best_categories: best,
        })
        .collect()
}

fn numeric_values(values: &[CategoryValue]) -> Option<Vec<f64>> {
    values
        .iter()
        .map(|value| match value {
            CategoryValue::Numeric(number) => Some(*number),
            CategoryValue::Text(_) => None,
        })
        .collect()
}

fn score_numeric_category(
    row: &CategoryWeight,
    numbers: &[f64],
    totals: &mut [f64],
    best_categories: &mut [Vec<Category>],
) {
    let min = numbers.iter().copied().fold(f64::INFINITY, f64::min);
    let max = numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let spread = max - min;

    if spread.abs() < VALUE_EPSILON || max <= 0.0 {
        for total in totals.iter_mut() {
            *total += row.weight * NEUTRAL_SHARE;
        }
        return;
    }

    let best_value = match row.direction {
        Direction::HigherIsBetter => max,
        Direction::LowerIsBetter => min,
    };

    for (index, value) in numbers.iter().enumerate() {
        let norm = match row.direction {
            Direction::HigherIsBetter => (value - min) / spread,
            Direction::LowerIsBetter => (max - value) / spread,
        };
        totals[index] += norm * row.weight;

        // Ties at the extreme are all marked best; a single-vehicle set
        // never reaches here because it has no spread.
        if numbers.len() > 1 && (value - best_value).abs() < VALUE_EPSILON {
            best_categories[index].push(row.category);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::comparison::domain::{FuelType, Transmission, VehicleId};
    use crate::workflows::comparison::weights::STANDARD_RUBRIC;

    fn vehicle(id: &str, price: f64, mileage: f64, year: i32, rating: f64) -> VehicleSnapshot {
        VehicleSnapshot {
            id: VehicleId(id.to_string()),
            label: id.to_string(),
            price,
            mileage,
            year,
            fuel_type: FuelType::Gasoline,
            transmission: Transmission::Automatic,
            engine: Some("2.0L I4".to_string()),
            location: Some("Des Moines".to_string()),
            rating,
            stock: Some(3),
        }
    }

    #[test]
    fn identical_vehicles_score_neutral_with_no_best_categories() {
        let twin = vehicle("a", 24_000.0, 12_000.0, 2023, 4.3);
        let scored = score_set(&[twin.clone(), twin], &STANDARD_RUBRIC);

        for entry in &scored {
            // Every category has zero spread, so each contributes weight/2.
            assert!((entry.score - 0.5).abs() < 1e-9);
            assert!(entry.best_categories.is_empty());
        }
    }

    #[test]
    fn extremes_earn_full_and_zero_category_share() {
        let cheap = vehicle("cheap", 18_000.0, 10_000.0, 2023, 4.3);
        let pricey = vehicle("pricey", 28_000.0, 10_000.0, 2023, 4.3);
        let rubric = [CategoryWeight {
            category: Category::Price,
            weight: 1.0,
            direction: Direction::LowerIsBetter,
        }];

        let scored = score_set(&[cheap, pricey], &rubric);
        assert!((scored[0].score - 1.0).abs() < 1e-9);
        assert!(scored[1].score.abs() < 1e-9);
        assert_eq!(scored[0].best_categories, vec![Category::Price]);
        assert!(scored[1].best_categories.is_empty());
    }

    #[test]
    fn ties_at_the_extreme_are_all_marked_best() {
        let a = vehicle("a", 20_000.0, 5_000.0, 2024, 4.0);
        let b = vehicle("b", 20_000.0, 9_000.0, 2024, 4.0);
        let c = vehicle("c", 26_000.0, 15_000.0, 2022, 4.0);

        let scored = score_set(&[a, b, c], &STANDARD_RUBRIC);
        assert!(scored[0].best_categories.contains(&Category::Price));
        assert!(scored[1].best_categories.contains(&Category::Price));
        assert!(!scored[2].best_categories.contains(&Category::Price));
        assert!(scored[0].best_categories.contains(&Category::Mileage));
        assert!(!scored[1].best_categories.contains(&Category::Mileage));
    }

    #[test]
    fn all_zero_category_scores_neutral() {
        // Fresh inventory with no recorded mileage: max == 0 for the
        // mileage column, which must not divide by zero or reward anyone.
        let a = vehicle("a", 20_000.0, 0.0, 2024, 4.0);
        let b = vehicle("b", 25_000.0, 0.0, 2023, 4.0);
        let rubric = [CategoryWeight {
            category: Category::Mileage,
            weight: 1.0,
            direction: Direction::LowerIsBetter,
        }];

        let scored = score_set(&[a, b], &rubric);
        for entry in &scored {
            assert!((entry.score - 0.5).abs() < 1e-9);
            assert!(entry.best_categories.is_empty());
        }
    }

    #[test]
    fn single_vehicle_scores_trivially_neutral() {
        let only = vehicle("solo", 22_000.0, 8_000.0, 2024, 4.6);
        let scored = score_set(&[only], &STANDARD_RUBRIC);
        assert_eq!(scored.len(), 1);
        assert!((scored[0].score - 0.5).abs() < 1e-9);
        assert!(scored[0].best_categories.is_empty());
    }

    #[test]
    fn scores_stay_within_unit_interval() {
        let a = vehicle("a", 5_000.0, 90_000.0, 2015, 3.1);
        let b = vehicle("b", 95_000.0, 100.0, 2025, 5.0);
        let c = vehicle("c", 41_000.0, 30_000.0, 2021, 4.4);
        let scored = score_set(&[a, b, c], &STANDARD_RUBRIC);
        for entry in scored {
            assert!(entry.score >= 0.0);
            assert!(entry.score <= 1.0);
        }
    }
}
