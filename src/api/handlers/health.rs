use crate::GIT_COMMIT_HASH;
use axum::{
    body::Body,
    http::{HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct Health {
    commit: String,
    name: String,
    version: String,
}

#[utoipa::path(
    get,
    path= "/health",
    responses (
        (status = 200, description = "Service is up", body = Health)
    ),
    tag = "health",
)]
/// Report build metadata. `OPTIONS` gets the `X-App` header only.
pub async fn health(method: Method) -> impl IntoResponse {
    let health = Health {
        commit: GIT_COMMIT_HASH.to_string(),
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let headers = x_app_header(&health);

    let body = if method == Method::GET {
        Json(&health).into_response()
    } else {
        Body::empty().into_response()
    };

    (StatusCode::OK, headers, body)
}

fn x_app_header(health: &Health) -> HeaderMap {
    let short_hash = if health.commit.len() > 7 {
        &health.commit[0..7]
    } else {
        ""
    };

    format!("{}:{}:{}", health.name, health.version, short_hash)
        .parse::<HeaderValue>()
        .map(|value| {
            let mut headers = HeaderMap::new();
            headers.insert("X-App", value);
            headers
        })
        .unwrap_or_else(|err| {
            debug!("Failed to parse X-App header: {}", err);
            HeaderMap::new()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn get_returns_build_metadata() -> Result<()> {
        let response = health(Method::GET).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let x_app = response
            .headers()
            .get("x-app")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        assert!(x_app.is_some_and(|v| v.starts_with(concat!(
            env!("CARGO_PKG_NAME"),
            ":",
            env!("CARGO_PKG_VERSION"),
            ":"
        ))));

        let body = to_bytes(response.into_body(), usize::MAX).await?;
        let value: serde_json::Value = serde_json::from_slice(&body)?;
        assert_eq!(value["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(value["commit"], GIT_COMMIT_HASH);
        Ok(())
    }

    #[tokio::test]
    async fn options_has_empty_body() -> Result<()> {
        let response = health(Method::OPTIONS).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-app"));

        let body = to_bytes(response.into_body(), usize::MAX).await?;
        assert!(body.is_empty());
        Ok(())
    }

    #[test]
    fn short_hash_is_empty_for_unknown_commit() {
        let health = Health {
            commit: "unknown".to_string(),
            name: "bankid-mock".to_string(),
            version: "0.1.0".to_string(),
        };
        let headers = x_app_header(&health);
        assert_eq!(
            headers.get("x-app").and_then(|v| v.to_str().ok()),
            Some("bankid-mock:0.1.0:")
        );
    }
}
