use super::{BankIdRequest, BankIdResponse, OrderStatus};
use crate::api::extract::JsonBody;
use axum::Json;
use tracing::instrument;

#[utoipa::path(
    post,
    path = "/api/bankid/collect",
    request_body = BankIdRequest,
    responses (
        (status = 200, description = "Order outcome, always complete", body = BankIdResponse),
        (status = 400, description = "Body is not valid JSON", body = String, content_type = "text/plain"),
        (status = 405, description = "Method not allowed", body = String, content_type = "text/plain"),
    ),
    tag = "bankid",
)]
#[instrument(skip_all)]
pub async fn collect(JsonBody(_request): JsonBody<BankIdRequest>) -> Json<BankIdResponse> {
    Json(BankIdResponse::ok("Collection completed").with_status(OrderStatus::Complete))
}
