use super::inflow::DAYS_PER_YEAR;
use crate::domain::model::RoiResult;

/// Return on investment of a harvesting system over one year.
///
/// `water_saved` is an **annual** volume in liters; the payback period
/// spreads the resulting savings across 365 days to get a daily rate.
///
/// When there are no costs the payback period is 0. When there are costs
/// but no savings it is `f64::INFINITY`.
pub fn calculate_roi(
    water_saved: f64,
    water_cost_per_liter: f64,
    setup_cost: f64,
    maintenance_cost: f64,
) -> RoiResult {
    let savings = water_saved * water_cost_per_liter;
    let costs = setup_cost + maintenance_cost;

    let payback_period = if costs == 0.0 {
        0.0
    } else if savings == 0.0 {
        f64::INFINITY
    } else {
        costs / (savings / DAYS_PER_YEAR)
    };

    RoiResult {
        savings,
        costs,
        roi: savings - costs,
        payback_period,
    }
}
