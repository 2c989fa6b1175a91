pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use flags::CliConfig;

#[cfg(feature = "cli")]
mod flags {
    use crate::app::forecast::{ConfiguredForecast, DefaultForecast};
    use crate::app::report::SUPPORTED_FORMATS;
    use crate::core::{ConfigProvider, ForecastDay, ForecastProvider, SystemInputs};
    use crate::domain::model::{
        DEFAULT_LEAK_THRESHOLD, DEFAULT_MAINTENANCE_COST, DEFAULT_SETUP_COST,
        DEFAULT_WATER_COST_PER_LITER,
    };
    use crate::utils::error::Result;
    use crate::utils::validation::{
        validate_non_empty_string, validate_non_negative, validate_output_formats, validate_path,
        Validate,
    };
    use chrono::{Days, NaiveDate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "rainwater")]
    #[command(about = "Estimate rainwater harvesting performance for a roof and tank")]
    pub struct CliConfig {
        /// Collecting roof area in m²
        #[arg(long)]
        pub roof_area: f64,

        /// Daily water drawn from the tank in liters
        #[arg(long)]
        pub outflow: f64,

        #[arg(long)]
        pub location: String,

        /// Tank capacity in liters
        #[arg(long)]
        pub tank_capacity: f64,

        #[arg(long, default_value_t = DEFAULT_WATER_COST_PER_LITER)]
        pub water_cost_per_liter: f64,

        #[arg(long, default_value_t = DEFAULT_SETUP_COST)]
        pub setup_cost: f64,

        #[arg(long, default_value_t = DEFAULT_MAINTENANCE_COST)]
        pub maintenance_cost: f64,

        /// Liters currently stored; defaults to half the capacity
        #[arg(long)]
        pub current_level: Option<f64>,

        #[arg(long, default_value_t = DEFAULT_LEAK_THRESHOLD)]
        pub leak_threshold: f64,

        /// Daily rainfall forecast in mm starting today; simulated when empty
        #[arg(long, value_delimiter = ',')]
        pub rainfall: Vec<f64>,

        #[arg(long, default_value = "./output")]
        pub output_path: String,

        #[arg(long, value_delimiter = ',', default_value = "json")]
        pub formats: Vec<String>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON lines")]
        pub json_logs: bool,
    }

    impl ConfigProvider for CliConfig {
        fn system_inputs(&self) -> SystemInputs {
            SystemInputs {
                roof_area: self.roof_area,
                outflow: self.outflow,
                location: self.location.clone(),
                tank_capacity: self.tank_capacity,
                water_cost_per_liter: self.water_cost_per_liter,
                setup_cost: self.setup_cost,
                maintenance_cost: self.maintenance_cost,
            }
        }

        fn current_level(&self) -> Option<f64> {
            self.current_level
        }

        fn leak_threshold(&self) -> f64 {
            self.leak_threshold
        }

        fn output_path(&self) -> &str {
            &self.output_path
        }

        fn output_formats(&self) -> &[String] {
            &self.formats
        }

        fn forecast_provider(&self, today: NaiveDate) -> Box<dyn ForecastProvider> {
            if self.rainfall.is_empty() {
                return Box::new(DefaultForecast);
            }
            let days = self
                .rainfall
                .iter()
                .enumerate()
                .filter_map(|(offset, rainfall)| {
                    today
                        .checked_add_days(Days::new(offset as u64))
                        .map(|date| ForecastDay {
                            date,
                            rainfall: *rainfall,
                        })
                })
                .collect();
            Box::new(ConfiguredForecast::new(days))
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            self.system_inputs().validate()?;
            validate_non_empty_string("location", &self.location)?;
            if let Some(level) = self.current_level {
                validate_non_negative("current_level", level)?;
            }
            validate_non_negative("leak_threshold", self.leak_threshold)?;
            for rainfall in &self.rainfall {
                validate_non_negative("rainfall", *rainfall)?;
            }
            validate_path("output_path", &self.output_path)?;
            validate_output_formats("formats", &self.formats, &SUPPORTED_FORMATS)
        }
    }

}
