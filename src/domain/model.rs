use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_WATER_COST_PER_LITER: f64 = 0.002;
pub const DEFAULT_SETUP_COST: f64 = 5000.0;
pub const DEFAULT_MAINTENANCE_COST: f64 = 500.0;
pub const DEFAULT_LEAK_THRESHOLD: f64 = 0.2;

fn default_water_cost_per_liter() -> f64 {
    DEFAULT_WATER_COST_PER_LITER
}

fn default_setup_cost() -> f64 {
    DEFAULT_SETUP_COST
}

fn default_maintenance_cost() -> f64 {
    DEFAULT_MAINTENANCE_COST
}

/// User supplied description of a harvesting installation.
///
/// Areas are m², volumes liters, flows liters/day and costs in the local
/// currency per liter or in absolute terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInputs {
    pub roof_area: f64,
    pub outflow: f64,
    pub location: String,
    pub tank_capacity: f64,
    #[serde(default = "default_water_cost_per_liter")]
    pub water_cost_per_liter: f64,
    #[serde(default = "default_setup_cost")]
    pub setup_cost: f64,
    #[serde(default = "default_maintenance_cost")]
    pub maintenance_cost: f64,
}

impl SystemInputs {
    pub fn new(roof_area: f64, outflow: f64, location: impl Into<String>, tank_capacity: f64) -> Self {
        Self {
            roof_area,
            outflow,
            location: location.into(),
            tank_capacity,
            water_cost_per_liter: DEFAULT_WATER_COST_PER_LITER,
            setup_cost: DEFAULT_SETUP_COST,
            maintenance_cost: DEFAULT_MAINTENANCE_COST,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    /// mm
    pub rainfall: f64,
}

pub type Forecast = Vec<ForecastDay>;

/// A forecast together with its mean daily rainfall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherData {
    pub forecast: Forecast,
    pub average_rainfall: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl WeatherData {
    /// Builds weather data from raw days, computing the mean. An empty
    /// forecast averages to 0.
    pub fn from_forecast(forecast: Forecast) -> Self {
        let average_rainfall = average_rainfall(&forecast);
        Self {
            forecast,
            average_rainfall,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

pub fn average_rainfall(forecast: &[ForecastDay]) -> f64 {
    if forecast.is_empty() {
        return 0.0;
    }
    forecast.iter().map(|day| day.rainfall).sum::<f64>() / forecast.len() as f64
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InflowResult {
    pub daily_inflow: f64,
    pub monthly_inflow: f64,
    pub yearly_inflow: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeakSeverity {
    Low,
    Medium,
    High,
}

impl fmt::Display for LeakSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LeakSeverity::Low => "low",
            LeakSeverity::Medium => "medium",
            LeakSeverity::High => "high",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeakResult {
    pub is_leaking: bool,
    pub difference: f64,
    pub severity: LeakSeverity,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiResult {
    pub savings: f64,
    pub costs: f64,
    pub roi: f64,
    /// Days. `f64::INFINITY` when costs can never be recovered; serialized
    /// to JSON as `null`.
    pub payback_period: f64,
}

/// Percentage split of stored water. Always sums to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationResult {
    pub drinking: u32,
    pub cleaning: u32,
    pub gardening: u32,
}

impl AllocationResult {
    pub fn total(&self) -> u32 {
        self.drinking + self.cleaning + self.gardening
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TankRecommendation {
    pub recommended_size: f64,
    pub monthly_inflow: f64,
    pub monthly_consumption: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceKind {
    Cleaning,
    Inspection,
}

impl MaintenanceKind {
    pub fn description(&self) -> &'static str {
        match self {
            MaintenanceKind::Cleaning => "Regular tank cleaning",
            MaintenanceKind::Inspection => "Leak inspection and system check",
        }
    }
}

impl fmt::Display for MaintenanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaintenanceKind::Cleaning => f.write_str("cleaning"),
            MaintenanceKind::Inspection => f.write_str("inspection"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceTask {
    #[serde(rename = "type")]
    pub kind: MaintenanceKind,
    pub date: NaiveDate,
    pub description: String,
}

pub type MaintenanceSchedule = Vec<MaintenanceTask>;

/// Clock and tank state supplied by the caller for one calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationContext {
    pub today: NaiveDate,
    pub timestamp: DateTime<Utc>,
    /// Liters currently stored; `None` assumes a half-full tank.
    pub current_level: Option<f64>,
    pub leak_threshold: f64,
}

impl CalculationContext {
    pub fn at(timestamp: DateTime<Utc>) -> Self {
        Self {
            today: timestamp.date_naive(),
            timestamp,
            current_level: None,
            leak_threshold: DEFAULT_LEAK_THRESHOLD,
        }
    }

    /// Current instant, with `today` taken from the local calendar date.
    pub fn now() -> Self {
        Self {
            today: Local::now().date_naive(),
            ..Self::at(Utc::now())
        }
    }

    pub fn with_current_level(mut self, current_level: Option<f64>) -> Self {
        self.current_level = current_level;
        self
    }

    pub fn with_leak_threshold(mut self, leak_threshold: f64) -> Self {
        self.leak_threshold = leak_threshold;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarvestResults {
    pub inputs: SystemInputs,
    pub timestamp: DateTime<Utc>,
    pub inflow: InflowResult,
    pub leak_detection: LeakResult,
    pub roi: RoiResult,
    pub water_usage: AllocationResult,
    pub tank_recommendation: TankRecommendation,
    pub maintenance_schedule: MaintenanceSchedule,
    pub weather_data: WeatherData,
}
