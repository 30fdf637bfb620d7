//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a server together with its owner and category.
///
/// All entities use default values. Use the individual factories to
/// customize the category name or owner.
///
/// # Returns
/// - `Ok((owner, category, server))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_server_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::category::Model,
        entity::server::Model,
    ),
    DbErr,
> {
    let owner = crate::factory::user::create_user(db).await?;
    let category = crate::factory::category::create_category(db).await?;
    let server = crate::factory::server::create_server(db, owner.id, category.id).await?;

    Ok((owner, category, server))
}

/// Creates `count` fresh users and adds each of them as a member of the server.
///
/// # Returns
/// - `Ok(Vec<entity::user::Model>)` - The users that joined, in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn add_members(
    db: &DatabaseConnection,
    server_id: i32,
    count: usize,
) -> Result<Vec<entity::user::Model>, DbErr> {
    let mut members = Vec::with_capacity(count);

    for _ in 0..count {
        let user = crate::factory::user::create_user(db).await?;
        crate::factory::server_member::create_server_member(db, server_id, user.id).await?;
        members.push(user);
    }

    Ok(members)
}
