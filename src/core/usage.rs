use crate::domain::model::AllocationResult;

const HIGH_RAINFALL_MM: f64 = 50.0;
const LOW_RAINFALL_MM: f64 = 20.0;
const NEAR_FULL_PERCENT: f64 = 80.0;
const NEAR_EMPTY_PERCENT: f64 = 20.0;

/// Shares before normalization, in drinking/cleaning/gardening order.
type Shares = [i32; 3];

const FALLBACK: AllocationResult = AllocationResult {
    drinking: 33,
    cleaning: 33,
    gardening: 34,
};

/// Recommends how stored water should be split between uses.
///
/// The rainfall prediction selects a base split, the tank fill level then
/// shifts water towards gardening when nearly full or towards drinking when
/// nearly empty. A zero capacity tank counts as empty.
pub fn optimize_water_usage(
    rainfall_prediction: f64,
    tank_capacity: f64,
    current_level: f64,
) -> AllocationResult {
    let mut shares = base_allocation(rainfall_prediction);

    let fill_percentage = if tank_capacity > 0.0 {
        current_level * 100.0 / tank_capacity
    } else {
        0.0
    };
    apply_fill_adjustment(&mut shares, fill_percentage);

    normalize(shares)
}

fn base_allocation(rainfall_prediction: f64) -> Shares {
    if rainfall_prediction > HIGH_RAINFALL_MM {
        [20, 30, 50]
    } else if rainfall_prediction < LOW_RAINFALL_MM {
        [40, 40, 20]
    } else {
        [30, 40, 30]
    }
}

fn apply_fill_adjustment(shares: &mut Shares, fill_percentage: f64) {
    let delta: Shares = if fill_percentage > NEAR_FULL_PERCENT {
        [-15, 5, 10]
    } else if fill_percentage < NEAR_EMPTY_PERCENT {
        [20, -5, -15]
    } else {
        return;
    };

    for (share, change) in shares.iter_mut().zip(delta) {
        *share += change;
    }
}

/// Clamps negatives, rescales to 100 and hands the rounding remainder to
/// the largest share so the total is exact.
fn normalize(shares: Shares) -> AllocationResult {
    let clamped = shares.map(|share| share.max(0));
    let total: i32 = clamped.iter().sum();
    if total == 0 {
        return FALLBACK;
    }

    let mut rounded =
        clamped.map(|share| (f64::from(share) / f64::from(total) * 100.0).round() as i32);
    let remainder = 100 - rounded.iter().sum::<i32>();

    if remainder != 0 {
        let mut largest = 0;
        for (index, share) in rounded.iter().enumerate() {
            if *share > rounded[largest] {
                largest = index;
            }
        }
        rounded[largest] += remainder;
    }

    let [drinking, cleaning, gardening] = rounded.map(|share| share.max(0) as u32);
    AllocationResult {
        drinking,
        cleaning,
        gardening,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allocation(drinking: u32, cleaning: u32, gardening: u32) -> AllocationResult {
        AllocationResult {
            drinking,
            cleaning,
            gardening,
        }
    }

    #[test]
    fn test_high_rainfall_half_full_tank() {
        assert_eq!(optimize_water_usage(60.0, 1000.0, 500.0), allocation(20, 30, 50));
    }

    #[test]
    fn test_low_rainfall_nearly_full_tank() {
        assert_eq!(optimize_water_usage(10.0, 1000.0, 900.0), allocation(25, 45, 30));
    }

    #[test]
    fn test_moderate_band_is_inclusive() {
        assert_eq!(optimize_water_usage(20.0, 1000.0, 500.0), allocation(30, 40, 30));
        assert_eq!(optimize_water_usage(50.0, 1000.0, 500.0), allocation(30, 40, 30));
    }

    #[test]
    fn test_nearly_empty_tank_favours_drinking() {
        assert_eq!(optimize_water_usage(10.0, 1000.0, 100.0), allocation(60, 35, 5));
        assert_eq!(optimize_water_usage(60.0, 1000.0, 0.0), allocation(40, 25, 35));
    }

    #[test]
    fn test_fill_boundaries_are_exclusive() {
        assert_eq!(optimize_water_usage(30.0, 1000.0, 800.0), allocation(30, 40, 30));
        assert_eq!(optimize_water_usage(30.0, 1000.0, 200.0), allocation(30, 40, 30));
    }

    #[test]
    fn test_zero_capacity_is_treated_as_empty() {
        assert_eq!(optimize_water_usage(10.0, 0.0, 0.0), allocation(60, 35, 5));
        assert_eq!(optimize_water_usage(60.0, 0.0, 0.0), allocation(40, 25, 35));
        assert_eq!(
            optimize_water_usage(10.0, 0.0, 0.0),
            optimize_water_usage(10.0, 1000.0, 0.0)
        );
    }

    #[test]
    fn test_normalize_corrects_rounding_drift() {
        // 1/3 each rounds to 33 three times; the remainder goes to the first largest share
        assert_eq!(normalize([10, 10, 10]), allocation(34, 33, 33));
        assert_eq!(normalize([1, 1, 4]), allocation(17, 17, 66));
        assert_eq!(normalize([-5, 0, 0]), FALLBACK);
        assert_eq!(normalize([-10, 30, 30]), allocation(0, 50, 50));
    }

    #[test]
    fn test_allocation_always_sums_to_100() {
        let rainfalls = [0.0, 5.0, 19.99, 20.0, 35.0, 50.0, 50.01, 120.0];
        let capacities = [1.0, 250.0, 1000.0, 7500.0];
        let fills = [0.0, 0.1, 0.2, 0.5, 0.8, 0.81, 1.0, 1.5];

        for rainfall in rainfalls {
            for capacity in capacities {
                for fill in fills {
                    let result = optimize_water_usage(rainfall, capacity, capacity * fill);
                    assert_eq!(result.total(), 100, "rainfall={rainfall} capacity={capacity} fill={fill}");
                }
            }
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        assert_eq!(
            optimize_water_usage(42.0, 3000.0, 2900.0),
            optimize_water_usage(42.0, 3000.0, 2900.0)
        );
    }
}
