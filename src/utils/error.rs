use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid input '{field}' = {value}: {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Forecast contains no days")]
    EmptyForecast,

    #[error("Date {date} plus {months} months is out of range")]
    DateOutOfRange { date: String, months: u32 },

    #[error("Forecast unavailable: {message}")]
    ForecastUnavailable { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Forecast,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl HarvestError {
    pub fn invalid_input(field: &str, value: impl ToString, reason: &str) -> Self {
        HarvestError::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            HarvestError::ConfigError { .. }
            | HarvestError::ConfigValidationError { .. }
            | HarvestError::InvalidConfigValueError { .. }
            | HarvestError::MissingConfigError { .. } => ErrorCategory::Configuration,
            HarvestError::InvalidInput { .. } | HarvestError::DateOutOfRange { .. } => {
                ErrorCategory::Input
            }
            HarvestError::EmptyForecast | HarvestError::ForecastUnavailable { .. } => {
                ErrorCategory::Forecast
            }
            HarvestError::IoError(_)
            | HarvestError::SerializationError(_)
            | HarvestError::CsvError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Forecast => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HarvestError::IoError(_) => "Check that the output directory exists and is writable",
            HarvestError::SerializationError(_) | HarvestError::CsvError(_) => {
                "Report this issue; result serialization should not fail for valid inputs"
            }
            HarvestError::ConfigError { .. } | HarvestError::ConfigValidationError { .. } => {
                "Check the TOML syntax and section names of the configuration file"
            }
            HarvestError::InvalidConfigValueError { .. } => {
                "Correct the highlighted configuration value and retry"
            }
            HarvestError::MissingConfigError { .. } => {
                "Add the missing field to the configuration file or pass it as a flag"
            }
            HarvestError::InvalidInput { .. } => {
                "All areas, volumes and costs must be finite and non-negative"
            }
            HarvestError::EmptyForecast => "Provide at least one forecast day",
            HarvestError::DateOutOfRange { .. } => "Use a start date within the supported calendar range",
            HarvestError::ForecastUnavailable { .. } => {
                "Retry later or supply forecast days in the configuration"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Input => format!("Invalid system parameters: {}", self),
            ErrorCategory::Forecast => format!("Weather forecast problem: {}", self),
            ErrorCategory::Output => format!("Could not write results: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, HarvestError>;
