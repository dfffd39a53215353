//! Charging cost calculation
//!
//! Pure arithmetic over a validated [`ChargingCostRequest`]. No I/O and no
//! shared state, so it is safe to call from any number of handlers at once.

use crate::models::{ChargingCostRequest, ChargingCostResult};

const CENTS_PER_DOLLAR: f64 = 100.0;

/// Compute on-peak/off-peak totals, per-hour costs and the summary text
///
/// Per-hour figures are derived from the unrounded totals; only the
/// returned numbers are rounded to cents.
pub fn calculate(request: &ChargingCostRequest) -> ChargingCostResult {
    let hours = request.charging_speed.duration_hours();

    let on_peak_cost = total_cost(request.battery_capacity, request.on_peak_cost_per_kwh);
    let off_peak_cost = total_cost(request.battery_capacity, request.off_peak_cost_per_kwh);

    let on_peak_cost_per_hour = on_peak_cost / hours;
    let off_peak_cost_per_hour = off_peak_cost / hours;

    let summary = format!(
        "Charging your vehicle using {} will cost:\n\
         - ${:.2} during on-peak hours (${:.2} per hour)\n\
         - ${:.2} during off-peak hours (${:.2} per hour)\n\
         You should schedule your charging between off-peak hours for the cheapest costs.",
        request.charging_speed.description(),
        on_peak_cost,
        on_peak_cost_per_hour,
        off_peak_cost,
        off_peak_cost_per_hour,
    );

    ChargingCostResult {
        on_peak_cost: round_cents(on_peak_cost),
        off_peak_cost: round_cents(off_peak_cost),
        on_peak_cost_per_hour: round_cents(on_peak_cost_per_hour),
        off_peak_cost_per_hour: round_cents(off_peak_cost_per_hour),
        summary,
    }
}

/// Dollars to fill `battery_capacity` kWh at `cents_per_kwh`
pub fn total_cost(battery_capacity: f64, cents_per_kwh: f64) -> f64 {
    battery_capacity * (cents_per_kwh / CENTS_PER_DOLLAR)
}

/// Above this magnitude an f64 has no fractional cents left to round
const ROUNDING_LIMIT: f64 = 1e15;

/// Round to 2 decimal places, ties away from zero
pub fn round_cents(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= ROUNDING_LIMIT {
        return value;
    }
    (value * 100.0).round() / 100.0
}
