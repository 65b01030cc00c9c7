use lazy_static::lazy_static;
use prometheus::{
    register_counter_vec, register_histogram_vec, CounterVec, Encoder, HistogramVec, TextEncoder,
};

lazy_static! {
    // Coordinator operation metrics
    pub static ref OPERATION_COUNTER: CounterVec = register_counter_vec!(
        "employees_operations_total",
        "Total number of employee operations processed",
        &["operation", "status"]
    )
    .expect("metric cannot be created");

    pub static ref OPERATION_DURATION: HistogramVec = register_histogram_vec!(
        "employees_operation_duration_seconds",
        "Employee operation duration in seconds",
        &["operation"],
        vec![0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]
    )
    .expect("metric cannot be created");

    // Cache metrics
    pub static ref CACHE_HIT_COUNTER: CounterVec = register_counter_vec!(
        "employees_cache_requests_total",
        "Total number of cache lookups",
        &["cache_type", "status"]
    )
    .expect("metric cannot be created");
}

/// Get all metrics in Prometheus text format
pub fn gather_metrics() -> Result<String, Box<dyn std::error::Error>> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Helper function to record a coordinator operation
pub fn record_operation(operation: &str, success: bool, duration_secs: f64) {
    let status = if success { "success" } else { "error" };
    OPERATION_COUNTER
        .with_label_values(&[operation, status])
        .inc();
    OPERATION_DURATION
        .with_label_values(&[operation])
        .observe(duration_secs);
}

/// Helper function to record a cache lookup outcome
pub fn record_cache_request(cache_type: &str, outcome: CacheOutcome) {
    CACHE_HIT_COUNTER
        .with_label_values(&[cache_type, outcome.as_str()])
        .inc();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOutcome {
    Hit,
    Miss,
    Error,
}

impl CacheOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheOutcome::Hit => "hit",
            CacheOutcome::Miss => "miss",
            CacheOutcome::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_operation() {
        record_operation("get_by_id", true, 0.002);
        let metrics = gather_metrics().unwrap();
        assert!(metrics.contains("employees_operations_total"));
        assert!(metrics.contains("employees_operation_duration_seconds"));
    }

    #[test]
    fn test_record_cache_request() {
        record_cache_request("employee", CacheOutcome::Miss);
        let metrics = gather_metrics().unwrap();
        assert!(metrics.contains("employees_cache_requests_total"));
        assert!(metrics.contains("status=\"miss\""));
    }
}
