pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{HarvestEngine, ReportWriter};
pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use crate::core::aggregate;
pub use domain::model::{CalculationContext, HarvestResults, SystemInputs};
pub use utils::error::{HarvestError, Result};
