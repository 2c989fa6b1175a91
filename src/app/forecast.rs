use crate::domain::model::{average_rainfall, Forecast, ForecastDay, WeatherData};
use crate::domain::ports::ForecastProvider;
use crate::utils::error::{HarvestError, Result};
use chrono::{Days, NaiveDate};

pub const FORECAST_DAYS: usize = 7;
pub const DEFAULT_RAINFALL_MM: f64 = 2.0;

/// Mean daily rainfall (mm) assumed for known locations when no forecast is
/// available. Matched case-insensitively as a substring.
const LOCATION_RAINFALL_MM: [(&str, f64); 4] = [
    ("coimbatore", 3.0),
    ("chennai", 4.0),
    ("delhi", 2.5),
    ("mumbai", 5.0),
];

/// Forecast days supplied up front, e.g. from a config file.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredForecast {
    days: Forecast,
}

impl ConfiguredForecast {
    pub fn new(days: Forecast) -> Self {
        Self { days }
    }
}

impl ForecastProvider for ConfiguredForecast {
    /// Sorts the configured days and pads a short forecast to a week using
    /// the average rainfall for dates from `today` not already covered.
    fn forecast(&self, _location: &str, today: NaiveDate) -> Result<WeatherData> {
        if self.days.is_empty() {
            return Err(HarvestError::EmptyForecast);
        }

        let mut days = self.days.clone();
        days.sort_by_key(|day| day.date);
        let average = average_rainfall(&days);

        let mut padded = false;
        for offset in 0..FORECAST_DAYS as u64 {
            if days.len() >= FORECAST_DAYS {
                break;
            }
            let Some(date) = today.checked_add_days(Days::new(offset)) else {
                break;
            };
            if days.iter().all(|day| day.date != date) {
                days.push(ForecastDay {
                    date,
                    rainfall: average,
                });
                padded = true;
            }
        }

        days.sort_by_key(|day| day.date);
        days.truncate(FORECAST_DAYS);

        let weather = WeatherData::from_forecast(days);
        Ok(if padded {
            weather.with_note("Missing forecast days filled with average rainfall")
        } else {
            weather
        })
    }
}

/// Simulated week of rainfall used when no real forecast can be obtained.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultForecast;

impl DefaultForecast {
    pub fn rainfall_for(location: &str) -> f64 {
        let location = location.to_lowercase();
        LOCATION_RAINFALL_MM
            .iter()
            .find(|(name, _)| location.contains(name))
            .map(|(_, rainfall)| *rainfall)
            .unwrap_or(DEFAULT_RAINFALL_MM)
    }
}

impl ForecastProvider for DefaultForecast {
    fn forecast(&self, location: &str, today: NaiveDate) -> Result<WeatherData> {
        let rainfall = Self::rainfall_for(location);
        let days = (0..FORECAST_DAYS as u64)
            .map(|offset| {
                today
                    .checked_add_days(Days::new(offset))
                    .map(|date| ForecastDay { date, rainfall })
                    .ok_or_else(|| HarvestError::ForecastUnavailable {
                        message: format!("cannot build a forecast starting {}", today),
                    })
            })
            .collect::<Result<Forecast>>()?;

        Ok(WeatherData::from_forecast(days).with_note("Using simulated rainfall data"))
    }
}
