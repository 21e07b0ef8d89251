use super::{BankIdRequest, BankIdResponse, MOCK_ORDER_REF};
use crate::api::extract::JsonBody;
use axum::Json;
use tracing::{debug, instrument};

#[utoipa::path(
    post,
    path = "/api/bankid/auth",
    request_body = BankIdRequest,
    responses (
        (status = 200, description = "Authentication order accepted", body = BankIdResponse),
        (status = 400, description = "Body is not valid JSON", body = String, content_type = "text/plain"),
        (status = 405, description = "Method not allowed", body = String, content_type = "text/plain"),
    ),
    tag = "bankid",
)]
/// Start an authentication order. The request `sessionId` is echoed back.
#[instrument(skip_all)]
pub async fn auth(JsonBody(request): JsonBody<BankIdRequest>) -> Json<BankIdResponse> {
    debug!(session_id = ?request.session_id, "auth order requested");

    Json(
        BankIdResponse::ok("Auth initiated")
            .with_order_ref(MOCK_ORDER_REF)
            .with_session_id(request.session_id),
    )
}
