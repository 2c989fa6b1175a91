use crate::domain::model::InflowResult;

/// Fraction of rainfall on the roof that reaches the tank.
pub const COLLECTION_EFFICIENCY: f64 = 0.9;
pub const DAYS_PER_MONTH: f64 = 30.0;
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Liters collected from `rainfall_mm` falling on `roof_area_m2`.
///
/// 1 mm over 1 m² is 1 liter, so no unit conversion is needed.
pub fn calculate_inflow(rainfall_mm: f64, roof_area_m2: f64) -> f64 {
    rainfall_mm * roof_area_m2 * COLLECTION_EFFICIENCY
}

impl InflowResult {
    pub fn from_daily(daily_inflow: f64) -> Self {
        Self {
            daily_inflow,
            monthly_inflow: daily_inflow * DAYS_PER_MONTH,
            yearly_inflow: daily_inflow * DAYS_PER_YEAR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_inflow_applies_efficiency() {
        assert_relative_eq!(calculate_inflow(10.0, 100.0), 900.0);
        assert_eq!(calculate_inflow(0.0, 250.0), 0.0);
        assert_eq!(calculate_inflow(12.0, 0.0), 0.0);
    }

    #[test]
    fn test_inflow_is_linear_in_rainfall() {
        for (rainfall, area) in [(0.5, 40.0), (3.2, 120.0), (48.0, 75.5)] {
            assert_relative_eq!(
                calculate_inflow(2.0 * rainfall, area),
                2.0 * calculate_inflow(rainfall, area),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_from_daily() {
        let result = InflowResult::from_daily(90.0);
        assert_eq!(result.monthly_inflow, 2700.0);
        assert_eq!(result.yearly_inflow, 32850.0);
    }
}
