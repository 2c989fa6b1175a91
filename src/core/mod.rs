pub mod aggregator;
pub mod inflow;
pub mod leak;
pub mod maintenance;
pub mod roi;
pub mod tank;
pub mod usage;

pub use crate::domain::model::{
    AllocationResult, CalculationContext, Forecast, ForecastDay, HarvestResults, InflowResult,
    LeakResult, LeakSeverity, MaintenanceKind, MaintenanceSchedule, MaintenanceTask, RoiResult,
    SystemInputs, TankRecommendation, WeatherData,
};
pub use crate::domain::ports::{ConfigProvider, ForecastProvider, Storage};
pub use crate::utils::error::Result;
pub use aggregator::aggregate;
pub use inflow::calculate_inflow;
pub use leak::detect_leak;
pub use maintenance::generate_maintenance_schedule;
pub use roi::calculate_roi;
pub use tank::recommend_tank_size;
pub use usage::optimize_water_usage;
