use crate::error::{ApiError, ErrorResponse};
use crate::state::AppState;
use crate::store::Proverb;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /proverbs/:id handler - Retrieve a single proverb
#[utoipa::path(
    get,
    path = "/proverbs/{id}",
    params(
        ("id" = u64, Path, description = "Store-assigned proverb id")
    ),
    responses(
        (status = 200, description = "Proverb found", body = Proverb),
        (status = 400, description = "Non-integer id", body = ErrorResponse),
        (status = 404, description = "Proverb not found", body = ErrorResponse)
    ),
    tag = "proverbs"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<Proverb>), ApiError> {
    let id = id_str
        .parse::<u64>()
        .map_err(|_| ApiError::InvalidId(id_str.clone()))?;

    match state.store.get(id).await {
        Some(proverb) => {
            tracing::info!("Retrieved proverb with id: {}", id);
            Ok((StatusCode::OK, Json(proverb)))
        }
        None => {
            tracing::info!("Proverb not found with id: {}", id);
            Err(ApiError::ProverbNotFound(id))
        }
    }
}
