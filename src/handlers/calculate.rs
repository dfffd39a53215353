use crate::{
    calculator,
    error::AppError,
    metrics,
    models::{ChargingCostRequest, ChargingCostResult},
};
use axum::{extract::rejection::JsonRejection, Json};
use std::time::Instant;

/// 处理 POST /calculate
///
/// Unknown charging speeds, missing fields and wrong types are rejected by
/// the JSON extractor before any arithmetic runs.
pub async fn handle_calculate(
    payload: Result<Json<ChargingCostRequest>, JsonRejection>,
) -> Result<Json<ChargingCostResult>, AppError> {
    let start = Instant::now();

    let Json(request) = payload.map_err(|rejection| reject(AppError::from(rejection)))?;
    request.validate().map_err(reject)?;

    let speed = request.charging_speed.as_str();

    tracing::info!(
        speed = %speed,
        battery_capacity = request.battery_capacity,
        "Calculating charging cost"
    );

    let result = calculator::calculate(&request);

    metrics::record_calculation(speed);
    metrics::record_duration(speed, start.elapsed());

    tracing::debug!(
        on_peak_cost = result.on_peak_cost,
        off_peak_cost = result.off_peak_cost,
        "Charging cost calculated"
    );

    Ok(Json(result))
}

fn reject(error: AppError) -> AppError {
    tracing::warn!(
        error_type = error.type_name(),
        status = %error.status(),
        "Rejected calculation request: {}",
        error
    );
    metrics::record_error(error.type_name());
    error
}
