use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, server::ServerListDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, model::server::ServerListParams,
        service::server::ServerService, state::AppState,
    },
};

pub static SERVER_TAG: &str = "server";

/// Raw query string of the server list endpoint.
///
/// Every field is optional text. Flags accept `true`, `1`, `yes` or `on` in any
/// case; empty values count as absent.
#[derive(Deserialize, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ServerListQuery {
    /// Exact category name to filter by.
    pub category: Option<String>,
    /// Keep only the first N servers, ordered by ID.
    pub qty: Option<String>,
    /// Keep only servers the caller is a member of. Requires a logged in user.
    pub by_user: Option<String>,
    /// Return only the server with this ID. Requires a logged in user.
    pub by_serverid: Option<String>,
    /// Include `num_members` on every server.
    pub with_num_members: Option<String>,
}

impl From<ServerListQuery> for ServerListParams {
    fn from(query: ServerListQuery) -> Self {
        ServerListParams::from_query(
            query.category,
            query.qty,
            query.by_user,
            query.by_serverid,
            query.with_num_members,
        )
    }
}

/// GET /api/server/select - List servers in the directory
///
/// Servers are returned in ascending ID order. `by_user` and `by_serverid` are
/// only available to logged in users.
#[utoipa::path(
    get,
    path = "/api/server/select",
    tag = SERVER_TAG,
    params(ServerListQuery),
    responses(
        (status = 200, description = "Servers matching the filters", body = ServerListDto),
        (status = 400, description = "Invalid qty or server ID, or server not found", body = ErrorDto),
        (status = 401, description = "Filter requires a logged in user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_servers(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ServerListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).caller().await?;

    let params = ServerListParams::from(query);
    let listing = ServerService::new(&state.db).list(&params, caller).await?;

    Ok((StatusCode::OK, Json(listing.into_dto())))
}
