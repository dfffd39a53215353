use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{calculator, error::AppError};

/// Charging speed tier
///
/// Serialized as `"level1"` / `"level2"`. Any other value fails to
/// deserialize, so an invalid tier never reaches the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargingSpeed {
    Level1,
    Level2,
}

impl ChargingSpeed {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChargingSpeed::Level1 => "level1",
            ChargingSpeed::Level2 => "level2",
        }
    }

    /// Representative hours to charge from empty
    pub fn duration_hours(&self) -> f64 {
        match self {
            ChargingSpeed::Level1 => 50.0,
            ChargingSpeed::Level2 => 10.0,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ChargingSpeed::Level1 => "Level 1 (120V outlet, 40-50 hours from empty)",
            ChargingSpeed::Level2 => "Level 2 (220V outlet, 4-10 hours from empty)",
        }
    }
}

impl FromStr for ChargingSpeed {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "level1" => Ok(ChargingSpeed::Level1),
            "level2" => Ok(ChargingSpeed::Level2),
            _ => Err(AppError::InvalidChargingSpeed(s.to_string())),
        }
    }
}

impl fmt::Display for ChargingSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Body of `POST /calculate`
///
/// Rates are in cents per kWh.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChargingCostRequest {
    pub battery_capacity: f64,
    pub on_peak_cost_per_kwh: f64,
    pub off_peak_cost_per_kwh: f64,
    pub charging_speed: ChargingSpeed,
}

impl ChargingCostRequest {
    /// Reject negative and non-finite inputs, and rates whose total cost
    /// overflows an f64. Zero is allowed.
    pub fn validate(&self) -> Result<(), AppError> {
        let fields = [
            ("battery_capacity", self.battery_capacity),
            ("on_peak_cost_per_kwh", self.on_peak_cost_per_kwh),
            ("off_peak_cost_per_kwh", self.off_peak_cost_per_kwh),
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                return Err(AppError::invalid_field(name, "must be a finite number"));
            }
            if value < 0.0 {
                return Err(AppError::invalid_field(name, "must not be negative"));
            }
        }

        let rates = [
            ("on_peak_cost_per_kwh", self.on_peak_cost_per_kwh),
            ("off_peak_cost_per_kwh", self.off_peak_cost_per_kwh),
        ];

        for (name, rate) in rates {
            if !calculator::total_cost(self.battery_capacity, rate).is_finite() {
                return Err(AppError::invalid_field(
                    name,
                    "total cost for this battery capacity is too large to represent",
                ));
            }
        }

        Ok(())
    }
}

/// Costs in dollars, rounded to cents
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChargingCostResult {
    pub on_peak_cost: f64,
    pub off_peak_cost: f64,
    pub on_peak_cost_per_hour: f64,
    pub off_peak_cost_per_hour: f64,
    pub summary: String,
}
