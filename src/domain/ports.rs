use crate::domain::model::{SystemInputs, WeatherData};
use crate::utils::error::Result;
use chrono::NaiveDate;

/// Source of rainfall forecasts for a location.
pub trait ForecastProvider: Send + Sync {
    fn forecast(&self, location: &str, today: NaiveDate) -> Result<WeatherData>;
}

pub trait Storage: Send + Sync {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn system_inputs(&self) -> SystemInputs;
    fn current_level(&self) -> Option<f64>;
    fn leak_threshold(&self) -> f64;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    /// Provider for this configuration's forecast; `today` dates any
    /// undated rainfall values.
    fn forecast_provider(&self, today: NaiveDate) -> Box<dyn ForecastProvider>;
}

impl<T: ForecastProvider + ?Sized> ForecastProvider for Box<T> {
    fn forecast(&self, location: &str, today: NaiveDate) -> Result<WeatherData> {
        (**self).forecast(location, today)
    }
}
