use crate::error::{ApiError, ErrorResponse};
use crate::models::ProverbPayload;
use crate::state::AppState;
use crate::store::Proverb;
use axum::{extract::Path, extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;

/// PUT /proverbs/:id handler - Replace a proverb's text
///
/// The id and the record's position in the collection are preserved.
#[utoipa::path(
    put,
    path = "/proverbs/{id}",
    params(
        ("id" = u64, Path, description = "Store-assigned proverb id")
    ),
    request_body = ProverbPayload,
    responses(
        (status = 200, description = "Proverb updated", body = Proverb),
        (status = 400, description = "Non-integer id or malformed body", body = ErrorResponse),
        (status = 404, description = "Proverb not found", body = ErrorResponse)
    ),
    tag = "proverbs"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(body): Json<JsonValue>,
) -> Result<(StatusCode, Json<Proverb>), ApiError> {
    let id = id_str
        .parse::<u64>()
        .map_err(|_| ApiError::InvalidId(id_str.clone()))?;

    let payload: ProverbPayload = serde_json::from_value(body)?;

    match state.store.update(id, payload.text).await {
        Some(proverb) => {
            tracing::info!("Updated proverb with id: {}", id);
            Ok((StatusCode::OK, Json(proverb)))
        }
        None => {
            tracing::info!("Proverb not found with id: {}", id);
            Err(ApiError::ProverbNotFound(id))
        }
    }
}
