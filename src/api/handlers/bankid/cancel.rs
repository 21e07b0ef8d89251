use super::{BankIdRequest, BankIdResponse};
use crate::api::extract::JsonBody;
use axum::Json;
use tracing::{debug, instrument};

#[utoipa::path(
    post,
    path = "/api/bankid/cancel",
    request_body = BankIdRequest,
    responses (
        (status = 200, description = "Order cancelled", body = BankIdResponse),
        (status = 400, description = "Body is not valid JSON", body = String, content_type = "text/plain"),
        (status = 405, description = "Method not allowed", body = String, content_type = "text/plain"),
    ),
    tag = "bankid",
)]
/// Acknowledge a cancellation. No order is looked up.
#[instrument(skip_all)]
pub async fn cancel(JsonBody(request): JsonBody<BankIdRequest>) -> Json<BankIdResponse> {
    debug!(order_ref = ?request.order_ref, "cancel requested");

    Json(BankIdResponse::ok("Session cancelled"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[tokio::test]
    async fn carries_only_message() -> Result<()> {
        let request = BankIdRequest {
            order_ref: Some("unknown-order".to_string()),
            ..BankIdRequest::default()
        };
        let Json(response) = cancel(JsonBody(request)).await;

        assert_eq!(
            serde_json::to_value(response)?,
            serde_json::json!({"success": true, "message": "Session cancelled"})
        );
        Ok(())
    }
}
