use sea_orm::DatabaseConnection;

use crate::server::{
    data::server::ServerRepository,
    error::{auth::AuthError, server::ServerError, AppError},
    model::{
        server::{ServerFilter, ServerListParams, ServerListing, ServerWithMemberCount},
        user::Caller,
    },
    util::parse::{parse_quantity, parse_server_id},
};

pub struct ServerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists servers for the directory.
    ///
    /// Checks run in a fixed order: authentication for caller-scoped filters,
    /// then `qty`, then `by_serverid`. The store is only queried once all of them
    /// pass.
    ///
    /// # Arguments
    /// - `params` - Normalized query parameters
    /// - `caller` - Identity of the requesting user
    ///
    /// # Returns
    /// - `Ok(ServerListing)` - Matching servers, with member counts when requested
    /// - `Err(AppError::AuthErr(AuthenticationRequired))` - `by_user` or `by_serverid`
    ///   used by an anonymous caller
    /// - `Err(AppError::ServerErr(InvalidQuantity))` - `qty` is not a non-negative integer
    /// - `Err(AppError::ServerErr(InvalidId))` - `by_serverid` is not a server ID
    /// - `Err(AppError::ServerErr(NotFound))` - No server with that ID in the filtered set
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn list(
        &self,
        params: &ServerListParams,
        caller: Caller,
    ) -> Result<ServerListing, AppError> {
        let filter = Self::resolve_filter(params, caller)?;

        let repo = ServerRepository::new(self.db);
        let servers = repo.list(&filter).await?;

        if let Some(ref raw_id) = params.by_server_id {
            if servers.is_empty() {
                return Err(ServerError::NotFound(raw_id.clone()).into());
            }
        }

        tracing::debug!("Listing {} servers for {:?}", servers.len(), filter);

        if !params.with_num_members {
            return Ok(ServerListing::Plain(servers));
        }

        let ids: Vec<i32> = servers.iter().map(|s| s.id).collect();
        let counts = repo.member_counts(&ids).await?;

        let servers = servers
            .into_iter()
            .map(|server| ServerWithMemberCount {
                num_members: counts.get(&server.id).copied().unwrap_or(0),
                server,
            })
            .collect();

        Ok(ServerListing::WithMemberCount(servers))
    }

    /// Validates parameters against the caller and builds the repository filter.
    fn resolve_filter(params: &ServerListParams, caller: Caller) -> Result<ServerFilter, AppError> {
        if let Some(filter_name) = params.caller_scoped_filter() {
            if !caller.is_authenticated() {
                return Err(AuthError::AuthenticationRequired(filter_name).into());
            }
        }

        let limit = params.qty.as_deref().map(parse_quantity).transpose()?;
        let server_id = params
            .by_server_id
            .as_deref()
            .map(parse_server_id)
            .transpose()?;

        let member_id = if params.by_user {
            caller.user_id()
        } else {
            None
        };

        Ok(ServerFilter {
            category: params.category.clone(),
            member_id,
            limit,
            server_id,
        })
    }
}
