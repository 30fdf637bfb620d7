//! Server data repository for the directory listing.
//!
//! Builds the list query from a `ServerFilter`. Category and membership filters are
//! expressed as `IN (subquery)` conditions on `server` so the same scoping can be
//! reused both for the outer select and for the sliced window the ID lookup runs in.

use sea_orm::{
    sea_query::{Expr, Func},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    QueryTrait, Select,
};
use std::collections::HashMap;

use crate::server::{
    model::server::{Server, ServerFilter},
    util::parse::MAX_QUANTITY,
};

/// Repository providing read access to server records.
pub struct ServerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerRepository<'a> {
    /// Creates a new ServerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists servers matching the filter, ordered by ID.
    ///
    /// When both `limit` and `server_id` are set, the ID lookup is applied to the
    /// first `limit` servers of the filtered set, so an ID outside that window
    /// matches nothing. A `limit` above `MAX_QUANTITY` is bound as `MAX_QUANTITY`.
    ///
    /// # Arguments
    /// - `filter` - Category, membership, slice and ID criteria
    ///
    /// # Returns
    /// - `Ok(Vec<Server>)` - Matching servers with their category names
    /// - `Err(DbErr)` - Database error during query
    pub async fn list(&self, filter: &ServerFilter) -> Result<Vec<Server>, DbErr> {
        let limit = filter.limit.map(|limit| limit.min(MAX_QUANTITY));

        let query = match (limit, filter.server_id) {
            (limit, None) => Self::ordered(filter).limit(limit),
            (None, Some(server_id)) => {
                Self::ordered(filter).filter(entity::server::Column::Id.eq(server_id))
            }
            (Some(limit), Some(server_id)) => {
                let window = Self::ordered(filter)
                    .select_only()
                    .column(entity::server::Column::Id)
                    .limit(limit)
                    .into_query();

                entity::prelude::Server::find()
                    .filter(entity::server::Column::Id.eq(server_id))
                    .filter(entity::server::Column::Id.in_subquery(window))
            }
        };

        let rows = query
            .find_also_related(entity::prelude::Category)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(server, category)| Server::from_entity(server, category))
            .collect()
    }

    /// Counts the members of each of the given servers.
    ///
    /// Runs a single grouped query over `server_member`. Servers without members
    /// have no row in the result and are reported as `0`.
    ///
    /// # Arguments
    /// - `server_ids` - IDs of the servers to count members for
    ///
    /// # Returns
    /// - `Ok(HashMap<i32, u64>)` - Member count keyed by server ID, one entry per requested ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn member_counts(&self, server_ids: &[i32]) -> Result<HashMap<i32, u64>, DbErr> {
        let mut counts: HashMap<i32, u64> = server_ids.iter().map(|id| (*id, 0)).collect();

        if server_ids.is_empty() {
            return Ok(counts);
        }

        let rows: Vec<(i32, i64)> = entity::prelude::ServerMember::find()
            .select_only()
            .column(entity::server_member::Column::ServerId)
            .expr_as(
                Func::count(Expr::col(entity::server_member::Column::Id)),
                "num_members",
            )
            .filter(entity::server_member::Column::ServerId.is_in(server_ids.iter().copied()))
            .group_by(entity::server_member::Column::ServerId)
            .into_tuple()
            .all(self.db)
            .await?;

        for (server_id, count) in rows {
            counts.insert(server_id, count.max(0) as u64);
        }

        Ok(counts)
    }

    /// Servers scoped by the category and membership filters, in ID order.
    fn ordered(filter: &ServerFilter) -> Select<entity::prelude::Server> {
        let mut query = entity::prelude::Server::find();

        if let Some(ref category) = filter.category {
            let category_ids = entity::prelude::Category::find()
                .select_only()
                .column(entity::category::Column::Id)
                .filter(entity::category::Column::Name.eq(category.as_str()))
                .into_query();

            query = query.filter(entity::server::Column::CategoryId.in_subquery(category_ids));
        }

        if let Some(member_id) = filter.member_id {
            let member_of = entity::prelude::ServerMember::find()
                .select_only()
                .column(entity::server_member::Column::ServerId)
                .filter(entity::server_member::Column::UserId.eq(member_id))
                .into_query();

            query = query.filter(entity::server::Column::Id.in_subquery(member_of));
        }

        query.order_by_asc(entity::server::Column::Id)
    }
}
