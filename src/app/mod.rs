// Application layer: collaborators around the pure calculators (forecasts, reports, the runner).

pub mod engine;
pub mod forecast;
pub mod report;

pub use engine::HarvestEngine;
pub use forecast::{ConfiguredForecast, DefaultForecast};
pub use report::ReportWriter;
