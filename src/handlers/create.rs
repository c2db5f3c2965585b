use crate::error::{ApiError, ErrorResponse};
use crate::models::ProverbPayload;
use crate::state::AppState;
use crate::store::Proverb;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;

/// POST /proverbs handler - Create a new proverb
///
/// The id is assigned by the store; any id in the request body is ignored.
#[utoipa::path(
    post,
    path = "/proverbs",
    request_body = ProverbPayload,
    responses(
        (status = 201, description = "Proverb created", body = Proverb),
        (status = 400, description = "Malformed request body", body = ErrorResponse)
    ),
    tag = "proverbs"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    Json(body): Json<JsonValue>,
) -> Result<(StatusCode, Json<Proverb>), ApiError> {
    let payload: ProverbPayload = serde_json::from_value(body)?;

    let proverb = state.store.create(payload.text).await;

    tracing::info!("Created proverb with id: {}", proverb.id);
    Ok((StatusCode::CREATED, Json(proverb)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::ErrorResponse;
    use crate::store::ProverbStore;
    use axum::{body::Body, http::Request, routing::post, Router};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn setup_test_app(store: ProverbStore) -> Router {
        let config = Config {
            host_address: "127.0.0.1".to_string(),
            host_port: 0,
            data_file: "data/proverbs.json".into(),
        };

        let state = AppState {
            store,
            config: Arc::new(config),
        };

        Router::new()
            .route(crate::routes::PROVERBS, post(create_handler))
            .with_state(state)
    }

    #[tokio::test]
    async fn test_create_endpoint_success() {
        let app = setup_test_app(ProverbStore::new(vec![]));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/proverbs")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"text":"Less is more"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let created: Proverb = serde_json::from_slice(&body).unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.text, "Less is more");
    }

    #[tokio::test]
    async fn test_create_endpoint_ignores_client_supplied_id() {
        let app = setup_test_app(ProverbStore::new(vec![Proverb {
            id: 7,
            text: "existing".to_string(),
        }]));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/proverbs")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"id":999,"text":"new"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let created: Proverb = serde_json::from_slice(&body).unwrap();
        assert_eq!(created.id, 8, "id must come from the store, not the client");
        assert_eq!(created.text, "new");
    }

    #[tokio::test]
    async fn test_create_endpoint_missing_text() {
        let app = setup_test_app(ProverbStore::new(vec![]));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/proverbs")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"wisdom":"wrong field"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error_response.error.contains("JSON parse error"));
    }

    #[tokio::test]
    async fn test_create_endpoint_invalid_json() {
        let app = setup_test_app(ProverbStore::new(vec![]));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/proverbs")
                    .header("content-type", "application/json")
                    .body(Body::from("this is not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
