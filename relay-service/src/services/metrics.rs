//! Provider-call metrics for relay-service.
//!
//! Recorded through the `metrics` facade and exported by the Prometheus
//! recorder installed in `service_core::observability::init_metrics`.

use metrics::{counter, histogram};
use std::time::Duration;

/// Provider operation label values.
pub const OP_CHAT: &str = "chat";
pub const OP_IMAGE: &str = "image";

/// Label for any model other than the configured one.
pub const CUSTOM_MODEL_LABEL: &str = "custom";

/// Model label for a call. Client-chosen names collapse to
/// [`CUSTOM_MODEL_LABEL`] so the series count stays bounded.
pub fn model_label<'a>(model: &str, configured: &'a str) -> &'a str {
    if model == configured {
        configured
    } else {
        CUSTOM_MODEL_LABEL
    }
}

/// Record one downstream call.
pub fn record_provider_call(
    operation: &'static str,
    model_label: &str,
    success: bool,
    elapsed: Duration,
) {
    let outcome = if success { "success" } else { "error" };
    let labels = [
        ("operation", operation.to_string()),
        ("model", model_label.to_string()),
        ("outcome", outcome.to_string()),
    ];

    counter!("relay_provider_requests_total", &labels).increment(1);
    histogram!("relay_provider_latency_seconds", &labels).record(elapsed.as_secs_f64());
}

/// Record token accounting when the provider reported a numeric total.
pub fn record_token_usage(model_label: &str, usage: Option<&serde_json::Value>) {
    if let Some(total) = usage
        .and_then(|u| u.get("total_tokens"))
        .and_then(|t| t.as_u64())
    {
        counter!("relay_tokens_total", "model" => model_label.to_string()).increment(total);
    }
}
