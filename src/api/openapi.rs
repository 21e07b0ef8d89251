use super::handlers::{bankid, health};
use axum::routing::get;
use utoipa::{
    openapi::{InfoBuilder, License, OpenApiBuilder, Tag},
    OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};

/// Status answers any suffix under its prefix, so it is routed by hand and
/// only documented here.
#[derive(OpenApi)]
#[openapi(paths(bankid::status::status))]
struct StatusDoc;

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    let (_router, openapi) = api_router().split_for_parts();
    openapi
}

/// Router that also drives the `OpenAPI` document.
///
/// Routes registered here are both served and documented. `OPTIONS /health`
/// and the static fallback are wired in `api::app` and stay undocumented.
pub(crate) fn api_router() -> OpenApiRouter {
    let mut doc = cargo_openapi();
    doc.merge(StatusDoc::openapi());

    OpenApiRouter::with_openapi(doc)
        .routes(routes!(health::health))
        .routes(routes!(bankid::auth::auth))
        .routes(routes!(bankid::sign::sign))
        .routes(routes!(bankid::cancel::cancel))
        .routes(routes!(bankid::qrcode::qrcode))
        .routes(routes!(bankid::init::init))
        .routes(routes!(bankid::collect::collect))
        .route(bankid::status::STATUS_PREFIX, get(bankid::status::status))
        .route(
            &format!("{}*rest", bankid::status::STATUS_PREFIX),
            get(bankid::status::status),
        )
}

fn cargo_openapi() -> utoipa::openapi::OpenApi {
    let mut info = InfoBuilder::new()
        .title(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .description(Some(env!("CARGO_PKG_DESCRIPTION")))
        .build();

    let license = env!("CARGO_PKG_LICENSE");
    if !license.is_empty() {
        let mut spdx = License::new(license);
        spdx.identifier = Some(license.to_string());
        info.license = Some(spdx);
    }

    let mut bankid_tag = Tag::new("bankid");
    bankid_tag.description = Some("Canned BankID relying-party endpoints".to_string());

    let mut health_tag = Tag::new("health");
    health_tag.description = Some("Build metadata".to_string());

    OpenApiBuilder::new()
        .info(info)
        .tags(Some([bankid_tag, health_tag]))
        .build()
}
