use serde::{Deserialize, Serialize};

/// Request payload for create and update operations
///
/// Deserialized from the request body; any other fields (including a
/// client-supplied `id`) are ignored.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProverbPayload {
    pub text: String,
}
