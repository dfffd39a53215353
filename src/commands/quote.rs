use anyhow::Result;
use colored::Colorize;
use ev_charge_cost::{
    calculator,
    models::{ChargingCostRequest, ChargingCostResult, ChargingSpeed},
};

/// Execute the quote command
///
/// Runs the same validation and calculation as `POST /calculate`.
pub fn execute(
    battery_capacity: f64,
    on_peak: f64,
    off_peak: f64,
    speed: &str,
    json: bool,
) -> Result<()> {
    let result = quote(battery_capacity, on_peak, off_peak, speed)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{}", result.summary);
    println!();
    println!(
        "  {}: ${:.2} total, ${:.2}/h",
        "On-peak".yellow(),
        result.on_peak_cost,
        result.on_peak_cost_per_hour
    );
    println!(
        "  {}: ${:.2} total, ${:.2}/h",
        "Off-peak".green(),
        result.off_peak_cost,
        result.off_peak_cost_per_hour
    );

    Ok(())
}

fn quote(
    battery_capacity: f64,
    on_peak: f64,
    off_peak: f64,
    speed: &str,
) -> Result<ChargingCostResult> {
    let charging_speed: ChargingSpeed = speed.parse()?;

    let request = ChargingCostRequest {
        battery_capacity,
        on_peak_cost_per_kwh: on_peak,
        off_peak_cost_per_kwh: off_peak,
        charging_speed,
    };
    request.validate()?;

    Ok(calculator::calculate(&request))
}
