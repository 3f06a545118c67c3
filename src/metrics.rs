use lazy_static::lazy_static;
use prometheus::{Counter, Gauge, Histogram, register_counter, register_gauge, register_histogram};

lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("tutor_requests_total", "Total number of explain requests").unwrap();
    pub static ref CACHE_HITS: Counter =
        register_counter!("tutor_cache_hits_total", "Total cache hits").unwrap();
    pub static ref CACHE_MISSES: Counter =
        register_counter!("tutor_cache_misses_total", "Total cache misses").unwrap();
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "tutor_request_latency_seconds",
        "Request latency in seconds"
    )
    .unwrap();
    pub static ref CACHE_SIZE: Gauge =
        register_gauge!("tutor_cache_size", "Current number of items in cache").unwrap();
    pub static ref COMPLETION_CALLS: Counter =
        register_counter!("tutor_completion_calls_total", "Calls made to the completion API").unwrap();
    pub static ref COMPLETION_FAILURES: Counter =
        register_counter!("tutor_completion_failures_total", "Failed completion API calls").unwrap();
    pub static ref OCR_FAILURES: Counter =
        register_counter!("tutor_ocr_failures_total", "Images that could not be read").unwrap();
}

// Render every registered metric in the text exposition format
pub fn render() -> Result<String, prometheus::Error> {
    use prometheus::{Encoder, TextEncoder};

    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}
