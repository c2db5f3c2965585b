use crate::error::{ApiError, ErrorResponse};
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode};

/// DELETE /proverbs/:id handler - Remove a proverb
#[utoipa::path(
    delete,
    path = "/proverbs/{id}",
    params(
        ("id" = u64, Path, description = "Store-assigned proverb id")
    ),
    responses(
        (status = 204, description = "Proverb deleted"),
        (status = 400, description = "Non-integer id", body = ErrorResponse),
        (status = 404, description = "Proverb not found", body = ErrorResponse)
    ),
    tag = "proverbs"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = id_str
        .parse::<u64>()
        .map_err(|_| ApiError::InvalidId(id_str.clone()))?;

    if state.store.delete(id).await {
        tracing::info!("Deleted proverb with id: {}", id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        tracing::info!("Proverb not found with id: {}", id);
        Err(ApiError::ProverbNotFound(id))
    }
}
