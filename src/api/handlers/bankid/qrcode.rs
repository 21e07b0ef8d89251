use super::{BankIdRequest, BankIdResponse, MOCK_QR_CODE};
use crate::api::extract::JsonBody;
use axum::Json;
use tracing::instrument;

#[utoipa::path(
    post,
    path = "/api/bankid/qrcode",
    request_body = BankIdRequest,
    responses (
        (status = 200, description = "QR payload for the order", body = BankIdResponse),
        (status = 400, description = "Body is not valid JSON", body = String, content_type = "text/plain"),
        (status = 405, description = "Method not allowed", body = String, content_type = "text/plain"),
    ),
    tag = "bankid",
)]
/// Return the QR payload. The value is opaque and the same on every call.
#[instrument(skip_all)]
pub async fn qrcode(JsonBody(_request): JsonBody<BankIdRequest>) -> Json<BankIdResponse> {
    Json(BankIdResponse::ok("QR code generated").with_qr_code(MOCK_QR_CODE))
}
