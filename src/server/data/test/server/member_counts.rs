use super::*;

/// Tests counting members for several servers at once.
///
/// Verifies that each server reports the size of its full member set and
/// that servers without members report zero.
///
/// Expected: Ok with one count per requested server
#[tokio::test]
async fn counts_members_per_server() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, category, busy) = factory::create_server_with_dependencies(db).await?;
    let quiet = factory::create_server(db, owner.id, category.id).await?;
    let empty = factory::create_server(db, owner.id, category.id).await?;

    factory::add_members(db, busy.id, 5).await?;
    factory::add_members(db, quiet.id, 3).await?;

    let repo = ServerRepository::new(db);
    let counts = repo.member_counts(&[busy.id, quiet.id, empty.id]).await?;

    assert_eq!(counts.len(), 3);
    assert_eq!(counts[&busy.id], 5);
    assert_eq!(counts[&quiet.id], 3);
    assert_eq!(counts[&empty.id], 0);

    Ok(())
}

/// Tests only the requested servers are counted.
///
/// Expected: Ok without entries for other servers
#[tokio::test]
async fn ignores_servers_not_requested() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, category, requested) = factory::create_server_with_dependencies(db).await?;
    let other = factory::create_server(db, owner.id, category.id).await?;

    factory::add_members(db, requested.id, 1).await?;
    factory::add_members(db, other.id, 2).await?;

    let repo = ServerRepository::new(db);
    let counts = repo.member_counts(&[requested.id]).await?;

    assert_eq!(counts.len(), 1);
    assert_eq!(counts[&requested.id], 1);
    assert!(!counts.contains_key(&other.id));

    Ok(())
}

/// Tests counting with no servers.
///
/// Expected: Ok with an empty map
#[tokio::test]
async fn returns_empty_map_for_no_servers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerRepository::new(db);
    let counts = repo.member_counts(&[]).await?;

    assert!(counts.is_empty());

    Ok(())
}
