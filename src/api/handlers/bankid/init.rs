use super::{BankIdRequest, BankIdResponse, MOCK_SESSION_ID};
use crate::api::extract::JsonBody;
use axum::Json;
use tracing::{debug, instrument};

#[utoipa::path(
    post,
    path = "/api/bankid/init",
    request_body = BankIdRequest,
    responses (
        (status = 200, description = "Session initiated", body = BankIdResponse),
        (status = 400, description = "Body is not valid JSON", body = String, content_type = "text/plain"),
        (status = 405, description = "Method not allowed", body = String, content_type = "text/plain"),
    ),
    tag = "bankid",
)]
/// Open a session for the described auth method. Always hands out the same id.
#[instrument(skip_all)]
pub async fn init(JsonBody(request): JsonBody<BankIdRequest>) -> Json<BankIdResponse> {
    debug!(auth_method = ?request.auth_method, "session init requested");

    Json(
        BankIdResponse::ok("BankID session initiated")
            .with_session_id(Some(MOCK_SESSION_ID.to_string())),
    )
}
