//! Depreciation schedules mapping a month index to a monthly rate.

use super::types::VehicleCondition;

/// Annual depreciation applied to new vehicles during their first year
/// on the road (15%).
pub const NEW_FIRST_YEAR_ANNUAL_RATE: f64 = 0.15;

/// Steady-state annual depreciation for used vehicles and for any
/// vehicle from month 12 onward (10%).
pub const STEADY_ANNUAL_RATE: f64 = 0.10;

/// Months of accelerated depreciation for a new vehicle.
const FIRST_YEAR_MONTHS: u32 = 12;

/// A two-phase depreciation curve: one annual rate for months before the
/// first-year cutoff, another from then on. Both phases are expressed as
/// annual rates and applied at `rate / 12` per month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepreciationSchedule {
    first_year_annual_rate: f64,
    steady_annual_rate: f64,
}

impl DepreciationSchedule {
    /// The standard curve for a vehicle's condition: new vehicles lose
    /// value faster during their first year, used vehicles depreciate at
    /// the steady rate from the start.
    pub fn for_vehicle(condition: VehicleCondition) -> Self {
        match condition {
            VehicleCondition::New => Self {
                first_year_annual_rate: NEW_FIRST_YEAR_ANNUAL_RATE,
                steady_annual_rate: STEADY_ANNUAL_RATE,
            },
            VehicleCondition::Used => Self::flat(STEADY_ANNUAL_RATE),
        }
    }

    /// A single annual rate for every month.
    pub fn flat(annual_rate: f64) -> Self {
        Self {
            first_year_annual_rate: annual_rate,
            steady_annual_rate: annual_rate,
        }
    }

    /// Custom first-year and steady-state annual rates.
    pub fn with_rates(first_year_annual_rate: f64, steady_annual_rate: f64) -> Self {
        Self {
            first_year_annual_rate,
            steady_annual_rate,
        }
    }

    /// Monthly depreciation rate applied in month `month`.
    pub fn monthly_rate(&self, month: u32) -> f64 {
        let annual = if month < FIRST_YEAR_MONTHS {
            self.first_year_annual_rate
        } else {
            self.steady_annual_rate
        };
        annual / 12.0
    }

    pub fn is_finite(&self) -> bool {
        self.first_year_annual_rate.is_finite() && self.steady_annual_rate.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn new_vehicle_uses_accelerated_rate_for_first_year_only() {
        let schedule = DepreciationSchedule::for_vehicle(VehicleCondition::New);

        assert!((schedule.monthly_rate(0) - 0.15 / 12.0).abs() <= EPS);
        assert!((schedule.monthly_rate(11) - 0.15 / 12.0).abs() <= EPS);
        assert!((schedule.monthly_rate(12) - 0.10 / 12.0).abs() <= EPS);
        assert!((schedule.monthly_rate(59) - 0.10 / 12.0).abs() <= EPS);
    }

    #[test]
    fn used_vehicle_rate_is_constant() {
        let schedule = DepreciationSchedule::for_vehicle(VehicleCondition::Used);

        for month in [0, 5, 11, 12, 36, 120] {
            assert!((schedule.monthly_rate(month) - 0.10 / 12.0).abs() <= EPS);
        }
    }

    #[test]
    fn custom_schedules_override_the_defaults() {
        let flat = DepreciationSchedule::flat(0.24);
        assert!((flat.monthly_rate(0) - 0.02).abs() <= EPS);
        assert!((flat.monthly_rate(30) - 0.02).abs() <= EPS);

        let custom = DepreciationSchedule::with_rates(0.30, 0.06);
        assert!((custom.monthly_rate(11) - 0.025).abs() <= EPS);
        assert!((custom.monthly_rate(12) - 0.005).abs() <= EPS);
    }
}
