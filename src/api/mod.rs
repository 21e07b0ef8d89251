use crate::api::{error::ApiError, handlers::health};
use anyhow::{Context, Result};
use axum::{
    body::Body,
    extract::MatchedPath,
    http::{header::CONTENT_LENGTH, HeaderName, HeaderValue, Method, Request, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::options,
    Router,
};
use std::{future::Future, path::PathBuf};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::PropagateRequestIdLayer,
    services::ServeDir,
    set_header::SetRequestHeaderLayer,
    trace::TraceLayer,
};
use tracing::{info, info_span, Span};
use ulid::Ulid;

pub mod error;
pub mod extract;
pub mod handlers;
mod openapi;

pub use openapi::openapi;

const X_REQUEST_ID: &str = "x-request-id";

/// Build the full application: documented routes, middleware, and the
/// optional static fallback.
#[must_use]
pub fn app(static_dir: Option<PathBuf>) -> Router {
    let (mut router, _openapi) = openapi::api_router().split_for_parts();

    // Must be set before `layer` so the middleware also wraps it.
    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .allow_origin(Any);

    router
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestHeaderLayer::if_not_present(
                    HeaderName::from_static(X_REQUEST_ID),
                    |_req: &_| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
                ))
                .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                    X_REQUEST_ID,
                )))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(cors),
        )
        .route("/health", options(health::health))
        .layer(middleware::map_response(plain_text_method_not_allowed))
}

/// Bind the port and serve until Ctrl-C.
/// # Errors
/// Returns an error if the port cannot be bound or the server fails.
pub async fn new(port: u16, static_dir: Option<PathBuf>) -> Result<()> {
    let listener = TcpListener::bind(format!("[::]:{port}"))
        .await
        .with_context(|| format!("Failed to bind [::]:{port}"))?;

    info!("Listening on [::]:{}", port);

    serve(listener, app(static_dir), shutdown_signal()).await
}

/// Serve `app` on an already bound listener until `shutdown` resolves.
/// # Errors
/// Returns an error if the server fails.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Gracefully shutdown");
    }
}

// axum answers a method mismatch with an empty 405; give it a text body and
// keep the `Allow` header.
async fn plain_text_method_not_allowed(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let (mut parts, _) = response.into_parts();
    let (text_parts, body) = ApiError::MethodNotAllowed.into_response().into_parts();

    parts.headers.remove(CONTENT_LENGTH);
    parts.headers.extend(text_parts.headers);

    Response::from_parts(parts, body)
}

fn make_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");
    let matched_path = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| request.uri().path(), MatchedPath::as_str);

    info_span!(
        "http.request",
        http.method = %request.method(),
        http.route = matched_path,
        request_id
    )
}
