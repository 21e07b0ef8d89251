use super::{BankIdResponse, OrderStatus};
use axum::{http::Uri, Json};
use tracing::{debug, instrument};

/// Everything below this prefix reports the same status.
pub const STATUS_PREFIX: &str = "/api/bankid/status/";

#[utoipa::path(
    get,
    path = "/api/bankid/status/{id}",
    params (
        ("id" = String, Path, description = "Session or order id, not looked up; any suffix matches")
    ),
    responses (
        (status = 200, description = "Order status, always pending", body = BankIdResponse),
        (status = 405, description = "Method not allowed", body = String, content_type = "text/plain"),
    ),
    tag = "bankid",
)]
#[instrument(skip_all)]
pub async fn status(uri: Uri) -> Json<BankIdResponse> {
    let id = uri.path().strip_prefix(STATUS_PREFIX).unwrap_or_default();
    debug!(id = %id, "status requested");

    Json(BankIdResponse::ok("Pending").with_status(OrderStatus::Pending))
}
