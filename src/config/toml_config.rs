use crate::app::forecast::{ConfiguredForecast, DefaultForecast};
use crate::app::report::SUPPORTED_FORMATS;
use crate::core::{ConfigProvider, Forecast, ForecastProvider, SystemInputs};
use crate::domain::model::{
    DEFAULT_LEAK_THRESHOLD, DEFAULT_MAINTENANCE_COST, DEFAULT_SETUP_COST,
    DEFAULT_WATER_COST_PER_LITER,
};
use crate::utils::error::{HarvestError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_non_negative, validate_output_formats, validate_path,
    Validate,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub system: SystemConfig,
    pub tank: Option<TankConfig>,
    pub analysis: Option<AnalysisConfig>,
    pub forecast: Option<ForecastConfig>,
    pub output: OutputConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    pub roof_area: f64,
    pub outflow: f64,
    pub location: String,
    pub tank_capacity: f64,
    pub water_cost_per_liter: Option<f64>,
    pub setup_cost: Option<f64>,
    pub maintenance_cost: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TankConfig {
    pub current_level: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub leak_threshold: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastSource {
    /// Use `forecast.days`.
    Configured,
    /// Simulated rainfall for the location.
    Default,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    pub source: Option<ForecastSource>,
    pub days: Option<Forecast>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub output_path: String,
    pub output_formats: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub verbose: Option<bool>,
    pub json_logs: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HarvestError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| HarvestError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HARVEST_LOCATION})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| HarvestError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Effective forecast source: explicit `source`, otherwise configured
    /// when any days are listed.
    pub fn forecast_source(&self) -> ForecastSource {
        let forecast = self.forecast.as_ref();
        match forecast.and_then(|f| f.source) {
            Some(source) => source,
            None if forecast
                .and_then(|f| f.days.as_ref())
                .is_some_and(|days| !days.is_empty()) =>
            {
                ForecastSource::Configured
            }
            None => ForecastSource::Default,
        }
    }

    fn forecast_days(&self) -> Option<&Forecast> {
        self.forecast.as_ref().and_then(|f| f.days.as_ref())
    }

    pub fn verbose(&self) -> bool {
        self.monitoring
            .as_ref()
            .and_then(|m| m.verbose)
            .unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.monitoring
            .as_ref()
            .and_then(|m| m.json_logs)
            .unwrap_or(false)
    }

    pub fn validate_config(&self) -> Result<()> {
        self.system_inputs().validate()?;
        validate_non_empty_string("system.location", &self.system.location)?;

        if let Some(level) = self.current_level() {
            validate_non_negative("tank.current_level", level)?;
        }
        validate_non_negative("analysis.leak_threshold", self.leak_threshold())?;

        if self.forecast_source() == ForecastSource::Configured {
            let days = self.forecast_days().ok_or_else(|| HarvestError::MissingConfigError {
                field: "forecast.days".to_string(),
            })?;
            if days.is_empty() {
                return Err(HarvestError::EmptyForecast);
            }
            for day in days {
                validate_non_negative(&format!("forecast.days[{}].rainfall", day.date), day.rainfall)?;
            }
        }

        validate_path("output.output_path", &self.output.output_path)?;
        validate_output_formats(
            "output.output_formats",
            &self.output.output_formats,
            &SUPPORTED_FORMATS,
        )
    }
}

impl ConfigProvider for TomlConfig {
    fn system_inputs(&self) -> SystemInputs {
        let system = &self.system;
        SystemInputs {
            roof_area: system.roof_area,
            outflow: system.outflow,
            location: system.location.clone(),
            tank_capacity: system.tank_capacity,
            water_cost_per_liter: system
                .water_cost_per_liter
                .unwrap_or(DEFAULT_WATER_COST_PER_LITER),
            setup_cost: system.setup_cost.unwrap_or(DEFAULT_SETUP_COST),
            maintenance_cost: system.maintenance_cost.unwrap_or(DEFAULT_MAINTENANCE_COST),
        }
    }

    fn current_level(&self) -> Option<f64> {
        self.tank.as_ref().and_then(|t| t.current_level)
    }

    fn leak_threshold(&self) -> f64 {
        self.analysis
            .as_ref()
            .and_then(|a| a.leak_threshold)
            .unwrap_or(DEFAULT_LEAK_THRESHOLD)
    }

    fn output_path(&self) -> &str {
        &self.output.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.output.output_formats
    }

    fn forecast_provider(&self, _today: NaiveDate) -> Box<dyn ForecastProvider> {
        match (self.forecast_source(), self.forecast_days()) {
            (ForecastSource::Configured, Some(days)) => {
                Box::new(ConfiguredForecast::new(days.clone()))
            }
            _ => Box::new(DefaultForecast),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
