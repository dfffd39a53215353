use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

/// Install the global Prometheus recorder
///
/// Fails if a recorder is already installed.
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    init_metric_descriptions();

    Ok(handle)
}

/// Initialize metric descriptions (can be called multiple times safely)
fn init_metric_descriptions() {
    describe_counter!(
        "ev_charge_calculations_total",
        "Total number of charging cost calculations"
    );
    describe_counter!(
        "ev_charge_errors_total",
        "Total number of rejected calculation requests"
    );
    describe_histogram!(
        "ev_charge_calculation_duration_seconds",
        "Calculation duration in seconds"
    );
    describe_gauge!(
        "ev_charge_info",
        "Service version information"
    );

    gauge!("ev_charge_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

/// Record a successful calculation
pub fn record_calculation(speed: &str) {
    counter!(
        "ev_charge_calculations_total",
        "speed" => speed.to_string(),
    )
    .increment(1);
}

/// Record calculation duration
pub fn record_duration(speed: &str, duration: Duration) {
    histogram!(
        "ev_charge_calculation_duration_seconds",
        "speed" => speed.to_string(),
    )
    .record(duration.as_secs_f64());
}

/// Record a rejected request
pub fn record_error(error_type: &str) {
    counter!(
        "ev_charge_errors_total",
        "error_type" => error_type.to_string(),
    )
    .increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_metrics() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            init_metric_descriptions();
            record_calculation("level1");
            record_duration("level1", Duration::from_millis(1));
            record_error("validation_error");
        });

        let rendered = handle.render();
        assert!(rendered.contains("ev_charge_calculations_total{speed=\"level1\"} 1"));
        assert!(rendered.contains("ev_charge_errors_total{error_type=\"validation_error\"} 1"));
        assert!(rendered.contains("ev_charge_info"));
    }
}
