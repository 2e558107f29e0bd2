//! Chat completion relay.

use axum::{extract::State, Json};
use service_core::error::AppError;
use std::time::Instant;

use crate::models::{provided, ChatRequest, ChatResponse};
use crate::services::metrics::{model_label, record_provider_call, record_token_usage, OP_CHAT};
use crate::services::providers::{ChatCompletionParams, ChatMessage};
use crate::startup::AppState;
use crate::utils::RelayJson;

/// Forward a single user message to the provider and return the first reply.
pub async fn chat(
    State(state): State<AppState>,
    RelayJson(payload): RelayJson<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let Some(message) = provided(payload.message) else {
        return Err(AppError::BadRequest(anyhow::anyhow!("No message provided")));
    };

    let model =
        provided(payload.model).unwrap_or_else(|| state.config.models.chat_model.clone());

    tracing::info!(
        model = %model,
        message_len = message.len(),
        "Relaying chat completion"
    );

    let params = ChatCompletionParams {
        model,
        messages: vec![ChatMessage::user(message)],
    };

    let label = model_label(&params.model, &state.config.models.chat_model);

    let started = Instant::now();
    let result = state
        .provider
        .chat_completion(&params)
        .await
        .and_then(|completion| {
            let reply = completion.first_reply()?;
            Ok((reply, completion.usage))
        });
    record_provider_call(OP_CHAT, label, result.is_ok(), started.elapsed());

    let (reply, usage) = result.map_err(|e| {
        tracing::error!(error = %e, model = %params.model, "Chat completion failed");
        AppError::Upstream(e.to_string())
    })?;

    record_token_usage(label, usage.as_ref());

    Ok(Json(ChatResponse { reply, usage }))
}
