use super::inflow::{calculate_inflow, DAYS_PER_MONTH};
use crate::domain::model::TankRecommendation;

/// Canonical tank capacities in liters, ascending.
pub const STANDARD_TANK_SIZES: [f64; 7] = [500.0, 1000.0, 2000.0, 3000.0, 5000.0, 7500.0, 10000.0];
/// Step used above the largest standard size.
pub const OVERSIZE_STEP: f64 = 5000.0;
/// Months of storage the recommendation buffers.
pub const BUFFER_MONTHS: f64 = 2.0;

pub fn recommend_tank_size(
    average_rainfall: f64,
    roof_area: f64,
    daily_consumption: f64,
) -> TankRecommendation {
    let monthly_inflow = calculate_inflow(average_rainfall * DAYS_PER_MONTH, roof_area);
    let monthly_consumption = daily_consumption * DAYS_PER_MONTH;
    let base = monthly_inflow.max(monthly_consumption) * BUFFER_MONTHS;

    TankRecommendation {
        recommended_size: round_to_standard_size(base),
        monthly_inflow,
        monthly_consumption,
    }
}

/// Smallest standard size holding `required` liters, or the next multiple
/// of 5000 past the ladder.
pub fn round_to_standard_size(required: f64) -> f64 {
    STANDARD_TANK_SIZES
        .iter()
        .copied()
        .find(|size| *size >= required)
        .unwrap_or_else(|| (required / OVERSIZE_STEP).ceil() * OVERSIZE_STEP)
}
