//! Image generation relay.

use axum::{extract::State, Json};
use service_core::error::AppError;
use std::time::Instant;

use crate::models::{provided, ImageRequest, ImageResponse};
use crate::services::metrics::{record_provider_call, OP_IMAGE};
use crate::services::providers::ImageGenerationParams;
use crate::startup::AppState;
use crate::utils::RelayJson;

/// Exactly one image is requested per call.
const IMAGES_PER_REQUEST: u32 = 1;

/// Generate one image for the prompt and return its URL.
pub async fn image(
    State(state): State<AppState>,
    RelayJson(payload): RelayJson<ImageRequest>,
) -> Result<Json<ImageResponse>, AppError> {
    let Some(prompt) = provided(payload.prompt) else {
        return Err(AppError::BadRequest(anyhow::anyhow!("No prompt provided")));
    };

    let params = ImageGenerationParams {
        model: state.config.models.image_model.clone(),
        prompt,
        size: provided(payload.size).unwrap_or_else(|| state.config.models.image_size.clone()),
        n: IMAGES_PER_REQUEST,
    };

    tracing::info!(
        model = %params.model,
        size = %params.size,
        prompt_len = params.prompt.len(),
        "Relaying image generation"
    );

    let started = Instant::now();
    let result = state
        .provider
        .generate_image(&params)
        .await
        .and_then(|generation| generation.first_url());
    record_provider_call(OP_IMAGE, &params.model, result.is_ok(), started.elapsed());

    let image_url = result.map_err(|e| {
        tracing::error!(error = %e, model = %params.model, "Image generation failed");
        AppError::Upstream(e.to_string())
    })?;

    Ok(Json(ImageResponse { image_url }))
}
