mod health;
mod metrics;
mod explain;

pub use health::health_handler;
pub use metrics::metrics_handler;
pub use explain::explain_handler;
