use crate::domain::model::{LeakResult, LeakSeverity};

pub const HIGH_SEVERITY_RATIO: f64 = 0.5;
pub const MEDIUM_SEVERITY_RATIO: f64 = 0.3;

/// Compares daily outflow against inflow and flags excess draw as a leak.
///
/// The leak ratio is `(outflow - inflow) / inflow`. A ratio strictly above
/// `threshold` is a leak; severity is graded on the same ratio regardless of
/// the flag. With zero inflow any positive outflow is a high severity leak.
pub fn detect_leak(inflow: f64, outflow: f64, threshold: f64) -> LeakResult {
    let difference = outflow - inflow;
    let reported = difference.max(0.0);

    if inflow == 0.0 {
        return if outflow > 0.0 {
            LeakResult {
                is_leaking: true,
                difference: reported,
                severity: LeakSeverity::High,
            }
        } else {
            LeakResult {
                is_leaking: false,
                difference: 0.0,
                severity: LeakSeverity::Low,
            }
        };
    }

    let ratio = difference / inflow;
    LeakResult {
        is_leaking: ratio > threshold,
        difference: reported,
        severity: severity_for(ratio),
    }
}

fn severity_for(ratio: f64) -> LeakSeverity {
    if ratio > HIGH_SEVERITY_RATIO {
        LeakSeverity::High
    } else if ratio > MEDIUM_SEVERITY_RATIO {
        LeakSeverity::Medium
    } else {
        LeakSeverity::Low
    }
}
