//! Request and response bodies of the relay endpoints.

pub mod chat;
pub mod image;

pub use chat::{ChatRequest, ChatResponse};
pub use image::{ImageRequest, ImageResponse};

use serde_json::Value;

/// Read a request field the way a falsy check would: absent, `null`, `false`,
/// zero and `""` are "not provided". Other strings pass through unchanged and
/// any other value is used as its JSON text.
pub(crate) fn provided(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}
