use super::{
    inflow::calculate_inflow, leak::detect_leak, maintenance::generate_maintenance_schedule,
    roi::calculate_roi, tank::recommend_tank_size, usage::optimize_water_usage,
};
use crate::domain::model::{
    average_rainfall, CalculationContext, HarvestResults, InflowResult, SystemInputs, WeatherData,
};
use crate::utils::error::{HarvestError, Result};
use crate::utils::validation::{validate_non_negative, Validate};

/// Share of capacity assumed stored when the caller gives no tank level.
pub const ASSUMED_FILL_FRACTION: f64 = 0.5;

impl Validate for SystemInputs {
    fn validate(&self) -> Result<()> {
        validate_non_negative("roofArea", self.roof_area)?;
        validate_non_negative("outflow", self.outflow)?;
        validate_non_negative("tankCapacity", self.tank_capacity)?;
        validate_non_negative("waterCostPerLiter", self.water_cost_per_liter)?;
        validate_non_negative("setupCost", self.setup_cost)?;
        validate_non_negative("maintenanceCost", self.maintenance_cost)?;
        if self.location.trim().is_empty() {
            return Err(HarvestError::invalid_input(
                "location",
                "\"\"",
                "Location cannot be empty",
            ));
        }
        Ok(())
    }
}

impl Validate for WeatherData {
    fn validate(&self) -> Result<()> {
        if self.forecast.is_empty() {
            return Err(HarvestError::EmptyForecast);
        }
        for day in &self.forecast {
            validate_non_negative(&format!("forecast[{}].rainfall", day.date), day.rainfall)?;
        }
        // strictly increasing: chronological with no repeated dates
        for pair in self.forecast.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(HarvestError::invalid_input(
                    "forecast.date",
                    pair[1].date,
                    "Forecast days must be in chronological order without duplicates",
                ));
            }
        }
        Ok(())
    }
}

/// Runs every calculator over one input bundle and forecast.
///
/// The average rainfall is recomputed from the forecast days rather than
/// trusted from `weather.average_rainfall`.
pub fn aggregate(
    inputs: &SystemInputs,
    weather: &WeatherData,
    context: &CalculationContext,
) -> Result<HarvestResults> {
    inputs.validate()?;
    weather.validate()?;
    validate_non_negative("leakThreshold", context.leak_threshold)?;
    if let Some(level) = context.current_level {
        validate_non_negative("currentLevel", level)?;
    }

    let rainfall = average_rainfall(&weather.forecast);

    let inflow = InflowResult::from_daily(calculate_inflow(rainfall, inputs.roof_area));
    let leak_detection = detect_leak(inflow.daily_inflow, inputs.outflow, context.leak_threshold);

    let current_level = context
        .current_level
        .unwrap_or(inputs.tank_capacity * ASSUMED_FILL_FRACTION);
    let water_usage = optimize_water_usage(rainfall, inputs.tank_capacity, current_level);

    let tank_recommendation = recommend_tank_size(rainfall, inputs.roof_area, inputs.outflow);

    // all collected water counts as saved mains water
    let roi = calculate_roi(
        inflow.yearly_inflow,
        inputs.water_cost_per_liter,
        inputs.setup_cost,
        inputs.maintenance_cost,
    );

    let maintenance_schedule = generate_maintenance_schedule(context.today)?;

    Ok(HarvestResults {
        inputs: inputs.clone(),
        timestamp: context.timestamp,
        inflow,
        leak_detection,
        roi,
        water_usage,
        tank_recommendation,
        maintenance_schedule,
        weather_data: WeatherData {
            forecast: weather.forecast.clone(),
            average_rainfall: rainfall,
            note: weather.note.clone(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ForecastDay, LeakSeverity};
    use approx::assert_relative_eq;
    use chrono::{Days, NaiveDate, TimeZone, Utc};

    fn weather(rainfall: &[f64]) -> WeatherData {
        let start = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        let forecast = rainfall
            .iter()
            .enumerate()
            .map(|(i, rainfall)| ForecastDay {
                date: start + Days::new(i as u64),
                rainfall: *rainfall,
            })
            .collect();
        WeatherData::from_forecast(forecast)
    }

    fn context() -> CalculationContext {
        CalculationContext::at(Utc.with_ymd_and_hms(2026, 6, 1, 8, 0, 0).unwrap())
    }

    #[test]
    fn test_aggregate_composes_calculators() {
        let inputs = SystemInputs::new(100.0, 200.0, "Delhi", 5000.0);
        let results = aggregate(&inputs, &weather(&[1.0, 3.0, 2.0, 2.0, 4.0, 0.0, 2.0]), &context()).unwrap();

        assert_relative_eq!(results.weather_data.average_rainfall, 2.0);
        assert_relative_eq!(results.inflow.daily_inflow, 180.0, max_relative = 1e-12);
        assert_relative_eq!(results.inflow.yearly_inflow, 65700.0, max_relative = 1e-12);

        // outflow 200 vs inflow 180 is an 11% excess
        assert!(!results.leak_detection.is_leaking);
        assert_eq!(results.leak_detection.severity, LeakSeverity::Low);

        assert_eq!(results.tank_recommendation.recommended_size, 15000.0);
        assert_eq!(results.water_usage.total(), 100);
        assert_eq!(results.maintenance_schedule.len(), 10);
        assert_relative_eq!(results.roi.savings, 131.4, max_relative = 1e-9);
        assert_relative_eq!(results.roi.costs, 5500.0);
        assert_eq!(results.timestamp, context().timestamp);
    }

    #[test]
    fn test_assumes_half_full_tank() {
        let inputs = SystemInputs::new(50.0, 10.0, "Mumbai", 1000.0);
        let half = aggregate(&inputs, &weather(&[60.0]), &context()).unwrap();
        let full = aggregate(
            &inputs,
            &weather(&[60.0]),
            &context().with_current_level(Some(950.0)),
        )
        .unwrap();

        assert_eq!(half.water_usage.gardening, 50);
        assert_eq!(full.water_usage.gardening, 60);
    }

    #[test]
    fn test_custom_leak_threshold() {
        let inputs = SystemInputs::new(100.0, 200.0, "Delhi", 5000.0);
        let results = aggregate(
            &inputs,
            &weather(&[2.0]),
            &context().with_leak_threshold(0.05),
        )
        .unwrap();
        assert!(results.leak_detection.is_leaking);
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        let mut inputs = SystemInputs::new(100.0, 200.0, "Delhi", 5000.0);
        inputs.roof_area = -4.0;
        assert!(matches!(
            aggregate(&inputs, &weather(&[2.0]), &context()),
            Err(HarvestError::InvalidInput { ref field, .. }) if field == "roofArea"
        ));

        let inputs = SystemInputs::new(100.0, f64::NAN, "Delhi", 5000.0);
        assert!(aggregate(&inputs, &weather(&[2.0]), &context()).is_err());

        let inputs = SystemInputs::new(100.0, 200.0, "  ", 5000.0);
        assert!(aggregate(&inputs, &weather(&[2.0]), &context()).is_err());
    }

    #[test]
    fn test_rejects_empty_or_negative_forecast() {
        let inputs = SystemInputs::new(100.0, 200.0, "Delhi", 5000.0);
        assert!(matches!(
            aggregate(&inputs, &weather(&[]), &context()),
            Err(HarvestError::EmptyForecast)
        ));
        assert!(aggregate(&inputs, &weather(&[1.0, -2.0]), &context()).is_err());
        assert!(aggregate(&inputs, &weather(&[f64::NAN]), &context()).is_err());
        assert!(aggregate(&inputs, &weather(&[3.0, f64::INFINITY]), &context()).is_err());
    }

    #[test]
    fn test_rejects_unordered_or_duplicate_forecast_days() {
        let inputs = SystemInputs::new(100.0, 200.0, "Delhi", 5000.0);

        let mut reversed = weather(&[1.0, 2.0, 3.0]);
        reversed.forecast.reverse();
        assert!(matches!(
            aggregate(&inputs, &reversed, &context()),
            Err(HarvestError::InvalidInput { ref field, .. }) if field == "forecast.date"
        ));

        let mut repeated = weather(&[1.0, 2.0]);
        repeated.forecast[1].date = repeated.forecast[0].date;
        assert!(aggregate(&inputs, &repeated, &context()).is_err());
    }

    #[test]
    fn test_zero_capacity_tank_counts_as_empty() {
        let inputs = SystemInputs::new(100.0, 200.0, "Delhi", 0.0);
        let results = aggregate(&inputs, &weather(&[2.0]), &context()).unwrap();
        assert_eq!(results.water_usage.drinking, 60);
        assert_eq!(results.water_usage.total(), 100);
    }

    #[test]
    fn test_aggregate_is_deterministic() {
        let inputs = SystemInputs::new(75.0, 120.0, "Chennai", 3000.0);
        let forecast = weather(&[4.0, 4.5, 3.5]);
        assert_eq!(
            aggregate(&inputs, &forecast, &context()).unwrap(),
            aggregate(&inputs, &forecast, &context()).unwrap()
        );
    }
}
