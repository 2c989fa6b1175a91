use super::forecast::DefaultForecast;
use crate::core::aggregate;
use crate::domain::model::{CalculationContext, HarvestResults, SystemInputs, WeatherData};
use crate::domain::ports::ForecastProvider;
use crate::utils::error::Result;

/// Fetches a forecast and runs the calculators over it.
///
/// When the provider fails the engine substitutes [`DefaultForecast`] so a
/// run still produces results; the substitution is recorded in the
/// weather note.
pub struct HarvestEngine<F: ForecastProvider> {
    provider: F,
    fallback: DefaultForecast,
}

impl<F: ForecastProvider> HarvestEngine<F> {
    pub fn new(provider: F) -> Self {
        Self {
            provider,
            fallback: DefaultForecast,
        }
    }

    pub fn forecast(&self, inputs: &SystemInputs, context: &CalculationContext) -> Result<WeatherData> {
        match self.provider.forecast(&inputs.location, context.today) {
            Ok(weather) => Ok(weather),
            Err(e) => {
                tracing::warn!(
                    "Forecast provider failed for '{}': {}; using default rainfall",
                    inputs.location,
                    e
                );
                self.fallback.forecast(&inputs.location, context.today)
            }
        }
    }

    pub fn run(&self, inputs: &SystemInputs, context: &CalculationContext) -> Result<HarvestResults> {
        tracing::info!("Starting harvest calculation for {}", inputs.location);
        tracing::debug!("System inputs: {:?}", inputs);

        let weather = self.forecast(inputs, context)?;
        tracing::info!(
            "Forecast covers {} days, average rainfall {:.2} mm",
            weather.forecast.len(),
            weather.average_rainfall
        );
        if let Some(note) = &weather.note {
            tracing::info!("Forecast note: {}", note);
        }

        let results = aggregate(inputs, &weather, context)?;

        tracing::info!(
            "Daily inflow {:.1} L, recommended tank {} L",
            results.inflow.daily_inflow,
            results.tank_recommendation.recommended_size
        );
        if results.leak_detection.is_leaking {
            tracing::warn!(
                "Possible leak: outflow exceeds inflow by {:.1} L/day (severity {})",
                results.leak_detection.difference,
                results.leak_detection.severity
            );
        }
        if results.roi.payback_period.is_infinite() {
            tracing::warn!("System never pays back: no water savings");
        } else {
            tracing::debug!("Payback period {:.0} days", results.roi.payback_period);
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::forecast::ConfiguredForecast;
    use crate::domain::model::ForecastDay;
    use crate::utils::error::HarvestError;
    use approx::assert_relative_eq;
    use chrono::{NaiveDate, TimeZone, Utc};

    struct Unavailable;

    impl ForecastProvider for Unavailable {
        fn forecast(&self, _location: &str, _today: NaiveDate) -> Result<WeatherData> {
            Err(HarvestError::ForecastUnavailable {
                message: "service down".to_string(),
            })
        }
    }

    fn context() -> CalculationContext {
        CalculationContext::at(Utc.with_ymd_and_hms(2026, 2, 10, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_falls_back_to_default_forecast() {
        let engine = HarvestEngine::new(Unavailable);
        let inputs = SystemInputs::new(100.0, 100.0, "Chennai", 2000.0);

        let results = engine.run(&inputs, &context()).unwrap();

        assert_eq!(results.weather_data.average_rainfall, 4.0);
        assert_eq!(results.weather_data.forecast.len(), 7);
        assert!(results.weather_data.note.is_some());
    }

    #[test]
    fn test_uses_configured_forecast() {
        let days = vec![ForecastDay {
            date: context().today,
            rainfall: 10.0,
        }];
        let engine = HarvestEngine::new(ConfiguredForecast::new(days));
        let inputs = SystemInputs::new(10.0, 0.0, "Anywhere", 2000.0);

        let results = engine.run(&inputs, &context()).unwrap();

        // single day padded to a week at its own average
        assert_eq!(results.weather_data.average_rainfall, 10.0);
        assert_relative_eq!(results.inflow.daily_inflow, 90.0, max_relative = 1e-12);
    }

    #[test]
    fn test_invalid_inputs_are_not_masked_by_fallback() {
        let engine = HarvestEngine::new(Unavailable);
        let inputs = SystemInputs::new(-1.0, 100.0, "Chennai", 2000.0);
        assert!(engine.run(&inputs, &context()).is_err());
    }
}
