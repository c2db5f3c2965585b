use crate::state::AppState;
use crate::store::Proverb;
use axum::{extract::State, http::StatusCode, Json};

/// GET /proverbs handler - List all proverbs
///
/// Returns the full collection as a JSON array in insertion order; an
/// empty store yields an empty array, not an error.
#[utoipa::path(
    get,
    path = "/proverbs",
    responses(
        (status = 200, description = "All proverbs in insertion order", body = [Proverb])
    ),
    tag = "proverbs"
)]
pub async fn list_handler(State(state): State<AppState>) -> (StatusCode, Json<Vec<Proverb>>) {
    let proverbs = state.store.list().await;

    tracing::info!("Listed {} proverbs", proverbs.len());
    (StatusCode::OK, Json(proverbs))
}
