use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        server::{self, SERVER_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "djchat", description = "Chat server directory API"),
    tags(
        (name = SERVER_TAG, description = "Server directory"),
        (name = AUTH_TAG, description = "Session user")
    )
)]
struct ApiDoc;

/// Builds the API router and serves its OpenAPI document at `/api/docs/openapi.json`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(server::list_servers))
        .routes(routes!(auth::get_user))
        .routes(routes!(auth::logout))
        .split_for_parts();

    router.route(
        "/api/docs/openapi.json",
        get(move || {
            let api = api.clone();
            async move { Json(api) }
        }),
    )
}
