use crate::api::error::ApiError;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;

/// JSON request body.
///
/// Unlike `axum::Json` this does not look at `Content-Type`: any body is fed
/// to the decoder, and a decode failure (including an empty body) becomes
/// [`ApiError::BadRequest`] carrying the decoder message. A body over the
/// router's size limit is [`ApiError::PayloadTooLarge`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| {
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    ApiError::PayloadTooLarge(rejection.body_text())
                } else {
                    ApiError::BadRequest(rejection.body_text())
                }
            })?;

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|err| ApiError::BadRequest(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use axum::{body::Body, http::header::CONTENT_TYPE};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Probe {
        name: Option<String>,
    }

    async fn extract(body: &'static str) -> Result<Probe, ApiError> {
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(body))
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;
        JsonBody::<Probe>::from_request(req, &()).await.map(|b| b.0)
    }

    #[tokio::test]
    async fn decodes_without_content_type() {
        let probe = extract(r#"{"name":"x"}"#).await;
        assert_eq!(
            probe,
            Ok(Probe {
                name: Some("x".to_string())
            })
        );
    }

    #[tokio::test]
    async fn decodes_with_json_content_type() -> Result<()> {
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))?;
        let JsonBody(probe) = JsonBody::<Probe>::from_request(req, &())
            .await
            .map_err(|e| anyhow::anyhow!(e))?;
        assert_eq!(probe, Probe { name: None });
        Ok(())
    }

    #[tokio::test]
    async fn empty_body_is_bad_request() {
        match extract("").await {
            Err(ApiError::BadRequest(message)) => {
                assert!(message.contains("EOF"), "unexpected message: {message}");
            }
            other => panic!("expected bad request, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        match extract("{not json").await {
            Err(ApiError::BadRequest(message)) => assert!(!message.is_empty()),
            other => panic!("expected bad request, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn wrong_shape_is_bad_request() {
        assert!(matches!(
            extract(r#"{"name": 42}"#).await,
            Err(ApiError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn oversized_body_is_payload_too_large() -> Result<()> {
        let huge = format!(r#"{{"name":"{}"}}"#, "x".repeat(3 * 1024 * 1024));
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(huge))?;

        match JsonBody::<Probe>::from_request(req, &()).await {
            Err(ApiError::PayloadTooLarge(message)) => {
                assert!(message.contains("length limit"), "unexpected message: {message}");
            }
            other => panic!("expected payload too large, got {other:?}"),
        }
        Ok(())
    }
}
