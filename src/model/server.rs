use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A server as listed by the directory.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ServerDto {
    pub id: i32,
    pub name: String,
    /// Name of the category the server belongs to.
    pub category: String,
    /// Id of the owning user.
    pub owner: i32,
    pub description: Option<String>,
}

/// A listed server annotated with the size of its member set.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ServerWithMembersDto {
    #[serde(flatten)]
    pub server: ServerDto,
    pub num_members: u64,
}

/// Response body of the server list endpoint.
///
/// Both variants serialize to a plain JSON array; only `WithMemberCount`
/// elements carry `num_members`.
#[derive(Serialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(untagged)]
pub enum ServerListDto {
    Plain(Vec<ServerDto>),
    WithMemberCount(Vec<ServerWithMembersDto>),
}
