use super::{BankIdRequest, BankIdResponse, MOCK_SIGN_ORDER_REF};
use crate::api::extract::JsonBody;
use axum::Json;
use tracing::instrument;

#[utoipa::path(
    post,
    path = "/api/bankid/sign",
    request_body = BankIdRequest,
    responses (
        (status = 200, description = "Sign order accepted", body = BankIdResponse),
        (status = 400, description = "Body is not valid JSON", body = String, content_type = "text/plain"),
        (status = 405, description = "Method not allowed", body = String, content_type = "text/plain"),
    ),
    tag = "bankid",
)]
#[instrument(skip_all)]
pub async fn sign(JsonBody(_request): JsonBody<BankIdRequest>) -> Json<BankIdResponse> {
    Json(BankIdResponse::ok("Sign initiated").with_order_ref(MOCK_SIGN_ORDER_REF))
}
