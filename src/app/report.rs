use crate::domain::model::HarvestResults;
use crate::domain::ports::Storage;
use crate::utils::error::{HarvestError, Result};
use serde::Serialize;

pub const SUPPORTED_FORMATS: [&str; 2] = ["json", "csv"];
pub const RESULTS_FILENAME: &str = "harvest_results.json";
pub const SCHEDULE_FILENAME: &str = "maintenance_schedule.csv";
pub const FORECAST_FILENAME: &str = "forecast.csv";

/// Writes a calculation's results in each configured format.
pub struct ReportWriter<S: Storage> {
    storage: S,
    formats: Vec<String>,
}

impl<S: Storage> ReportWriter<S> {
    pub fn new(storage: S, formats: Vec<String>) -> Self {
        Self { storage, formats }
    }

    /// Returns the names of the files written, in format order.
    pub fn write(&self, results: &HarvestResults) -> Result<Vec<String>> {
        let mut written = Vec::new();

        for format in &self.formats {
            match format.as_str() {
                "json" => {
                    let json = serde_json::to_vec_pretty(results)?;
                    self.storage.write_file(RESULTS_FILENAME, &json)?;
                    written.push(RESULTS_FILENAME.to_string());
                }
                "csv" => {
                    let schedule = to_csv(&results.maintenance_schedule)?;
                    self.storage.write_file(SCHEDULE_FILENAME, &schedule)?;
                    written.push(SCHEDULE_FILENAME.to_string());

                    let forecast = to_csv(&results.weather_data.forecast)?;
                    self.storage.write_file(FORECAST_FILENAME, &forecast)?;
                    written.push(FORECAST_FILENAME.to_string());
                }
                other => {
                    return Err(HarvestError::InvalidConfigValueError {
                        field: "output.formats".to_string(),
                        value: other.to_string(),
                        reason: format!(
                            "Unsupported format. Valid formats: {}",
                            SUPPORTED_FORMATS.join(", ")
                        ),
                    })
                }
            }
            tracing::debug!("Wrote {} output", format);
        }

        Ok(written)
    }
}

fn to_csv<T: Serialize>(rows: &[T]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    writer
        .into_inner()
        .map_err(|e| HarvestError::IoError(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ForecastDay, MaintenanceKind, MaintenanceTask};
    use chrono::NaiveDate;

    #[test]
    fn test_schedule_csv_layout() {
        let tasks = vec![MaintenanceTask {
            kind: MaintenanceKind::Cleaning,
            date: NaiveDate::from_ymd_opt(2026, 4, 15).unwrap(),
            description: MaintenanceKind::Cleaning.description().to_string(),
        }];
        let csv = String::from_utf8(to_csv(&tasks).unwrap()).unwrap();

        assert_eq!(
            csv,
            "type,date,description\ncleaning,2026-04-15,Regular tank cleaning\n"
        );
    }

    #[test]
    fn test_forecast_csv_layout() {
        let days = vec![ForecastDay {
            date: NaiveDate::from_ymd_opt(2026, 4, 15).unwrap(),
            rainfall: 3.5,
        }];
        let csv = String::from_utf8(to_csv(&days).unwrap()).unwrap();
        assert_eq!(csv, "date,rainfall\n2026-04-15,3.5\n");
    }
}
