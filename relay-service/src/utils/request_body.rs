use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use service_core::error::AppError;

/// JSON body extractor for the relay endpoints.
///
/// A request without a JSON content type, or with a blank body, yields
/// `T::default()` so the handler's own field checks decide the response.
/// Malformed JSON is a 400 with the usual `{error}` body.
pub struct RelayJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for RelayJson<T>
where
    T: DeserializeOwned + Default + 'static,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(&req);

        // Oversized bodies keep the framework's 413.
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(RelayJson(T::default()));
        }

        serde_json::from_slice(&bytes).map(RelayJson).map_err(|e| {
            AppError::BadRequest(anyhow::anyhow!("Invalid JSON body: {}", e)).into_response()
        })
    }
}

fn has_json_content_type(req: &Request) -> bool {
    let Some(content_type) = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request(content_type: Option<&str>) -> Request {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(value) = content_type {
            builder = builder.header(CONTENT_TYPE, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn recognises_json_media_types() {
        assert!(has_json_content_type(&request(Some("application/json"))));
        assert!(has_json_content_type(&request(Some(
            "Application/JSON; charset=utf-8"
        ))));
        assert!(has_json_content_type(&request(Some("application/merge-patch+json"))));
    }

    #[test]
    fn rejects_other_or_missing_media_types() {
        assert!(!has_json_content_type(&request(None)));
        assert!(!has_json_content_type(&request(Some("text/plain"))));
        assert!(!has_json_content_type(&request(Some(
            "application/x-www-form-urlencoded"
        ))));
    }
}
