use crate::domain::model::{MaintenanceKind, MaintenanceSchedule, MaintenanceTask};
use crate::utils::error::{HarvestError, Result};
use chrono::{Months, NaiveDate};

const CLEANING_OFFSETS: [u32; 4] = [3, 6, 9, 12];
const INSPECTION_OFFSETS: [u32; 6] = [2, 4, 6, 8, 10, 12];

/// One year of cleaning and inspection reminders starting after
/// `current_date`.
///
/// Offsets are calendar months; a day past the end of the target month is
/// clamped to its last day (Jan 31 + 1 month = Feb 28). On shared dates
/// cleaning comes first.
pub fn generate_maintenance_schedule(current_date: NaiveDate) -> Result<MaintenanceSchedule> {
    let mut schedule = Vec::with_capacity(CLEANING_OFFSETS.len() + INSPECTION_OFFSETS.len());

    for months in CLEANING_OFFSETS {
        schedule.push(task(MaintenanceKind::Cleaning, current_date, months)?);
    }
    for months in INSPECTION_OFFSETS {
        schedule.push(task(MaintenanceKind::Inspection, current_date, months)?);
    }

    // stable: keeps cleaning ahead of inspection on equal dates
    schedule.sort_by_key(|task| task.date);
    Ok(schedule)
}

fn task(kind: MaintenanceKind, from: NaiveDate, months: u32) -> Result<MaintenanceTask> {
    let date = from
        .checked_add_months(Months::new(months))
        .ok_or_else(|| HarvestError::DateOutOfRange {
            date: from.to_string(),
            months,
        })?;

    Ok(MaintenanceTask {
        kind,
        date,
        description: kind.description().to_string(),
    })
}
