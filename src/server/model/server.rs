//! Server directory domain models and list query parameters.
//!
//! A list request goes through three shapes: the raw query string is normalized into
//! `ServerListParams`, the service validates it against the caller into a
//! `ServerFilter` for the repository, and the result comes back as a
//! `ServerListing` whose variant decides whether member counts are serialized.

use sea_orm::DbErr;

use crate::{
    model::server::{ServerDto, ServerListDto, ServerWithMembersDto},
    server::util::parse::{non_empty, parse_flag},
};

/// Server record joined with its category name.
#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    /// Store identifier of the server.
    pub id: i32,
    /// Display name of the server.
    pub name: String,
    /// Name of the category the server is filed under.
    pub category: String,
    /// ID of the owning user.
    pub owner_id: i32,
    /// Optional free-form description.
    pub description: Option<String>,
}

impl Server {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `server` - The server entity from the database
    /// - `category` - The related category, loaded by the same query
    ///
    /// # Returns
    /// - `Ok(Server)` - Server with its category name
    /// - `Err(DbErr::RecordNotFound)` - The category row referenced by the server is missing
    pub fn from_entity(
        server: entity::server::Model,
        category: Option<entity::category::Model>,
    ) -> Result<Self, DbErr> {
        let category = category.ok_or_else(|| {
            DbErr::RecordNotFound(format!(
                "Category {} referenced by server {} not found",
                server.category_id, server.id
            ))
        })?;

        Ok(Self {
            id: server.id,
            name: server.name,
            category: category.name,
            owner_id: server.owner_id,
            description: server.description,
        })
    }

    /// Converts the server domain model to a DTO for API responses.
    pub fn into_dto(self) -> ServerDto {
        ServerDto {
            id: self.id,
            name: self.name,
            category: self.category,
            owner: self.owner_id,
            description: self.description,
        }
    }
}

/// Server annotated with the size of its member set at query time.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerWithMemberCount {
    pub server: Server,
    pub num_members: u64,
}

impl ServerWithMemberCount {
    pub fn into_dto(self) -> ServerWithMembersDto {
        ServerWithMembersDto {
            server: self.server.into_dto(),
            num_members: self.num_members,
        }
    }
}

/// Result of a server list query.
///
/// The variant is chosen by the `with_num_members` flag, so a listing without
/// counts can never serialize a `num_members` field.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerListing {
    Plain(Vec<Server>),
    WithMemberCount(Vec<ServerWithMemberCount>),
}

impl ServerListing {
    /// Converts the listing to a DTO for API responses.
    pub fn into_dto(self) -> ServerListDto {
        match self {
            Self::Plain(servers) => {
                ServerListDto::Plain(servers.into_iter().map(Server::into_dto).collect())
            }
            Self::WithMemberCount(servers) => ServerListDto::WithMemberCount(
                servers
                    .into_iter()
                    .map(ServerWithMemberCount::into_dto)
                    .collect(),
            ),
        }
    }
}

/// Normalized server list query parameters.
///
/// Blank values are treated as absent and flags are already interpreted.
/// `qty` and `by_server_id` keep their raw text: they are validated only after
/// the authentication check, and error messages echo the value as sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerListParams {
    /// Exact category name to keep.
    pub category: Option<String>,
    /// Raw number of leading servers to keep.
    pub qty: Option<String>,
    /// Keep only servers the caller is a member of.
    pub by_user: bool,
    /// Raw server ID to look up within the filtered set.
    pub by_server_id: Option<String>,
    /// Annotate each server with its member count.
    pub with_num_members: bool,
}

impl ServerListParams {
    /// Builds parameters from raw query string values.
    pub fn from_query(
        category: Option<String>,
        qty: Option<String>,
        by_user: Option<String>,
        by_server_id: Option<String>,
        with_num_members: Option<String>,
    ) -> Self {
        Self {
            category: non_empty(category),
            qty: non_empty(qty),
            by_user: parse_flag(by_user.as_deref()),
            by_server_id: non_empty(by_server_id),
            with_num_members: parse_flag(with_num_members.as_deref()),
        }
    }

    /// Name of the first caller-scoped filter in use, if any.
    ///
    /// Both `by_user` and `by_serverid` require a logged in caller.
    pub fn caller_scoped_filter(&self) -> Option<&'static str> {
        if self.by_user {
            Some("by_user")
        } else if self.by_server_id.is_some() {
            Some("by_serverid")
        } else {
            None
        }
    }
}

/// Validated query specification handed to the server repository.
///
/// Filters are applied in a fixed order: category, membership, slice to
/// `limit`, then the ID lookup within that slice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerFilter {
    /// Exact category name.
    pub category: Option<String>,
    /// Keep only servers this user is a member of.
    pub member_id: Option<i32>,
    /// Keep only the first `limit` servers in ID order.
    pub limit: Option<u64>,
    /// Keep only the server with this ID.
    pub server_id: Option<i32>,
}
