use super::*;
use test_utils::factory::category::create_category_named;

/// Tests listing with no parameters.
///
/// Verifies that every server is returned without member counts.
///
/// Expected: Ok(ServerListing::Plain) with all servers
#[tokio::test]
async fn lists_everything_without_parameters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, category, server) = factory::create_server_with_dependencies(db).await?;
    factory::create_server(db, owner.id, category.id).await?;
    factory::add_members(db, server.id, 2).await?;

    let service = ServerService::new(db);
    let listing = service
        .list(&ServerListParams::default(), Caller::Anonymous)
        .await?;

    match listing {
        ServerListing::Plain(servers) => assert_eq!(servers.len(), 2),
        other => panic!("expected plain listing, got {:?}", other),
    }

    Ok(())
}

/// Tests member counts for a category.
///
/// Two gaming servers with 3 and 5 members are listed with their counts while
/// a server in another category is left out.
///
/// Expected: Ok(ServerListing::WithMemberCount) with counts 3 and 5
#[tokio::test]
async fn annotates_member_counts_within_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let gaming = create_category_named(db, "gaming").await?;
    let music = create_category_named(db, "music").await?;
    let small = factory::create_server(db, owner.id, gaming.id).await?;
    let large = factory::create_server(db, owner.id, gaming.id).await?;
    let other = factory::create_server(db, owner.id, music.id).await?;

    factory::add_members(db, small.id, 3).await?;
    factory::add_members(db, large.id, 5).await?;
    factory::add_members(db, other.id, 1).await?;

    let params = ServerListParams {
        category: Some("gaming".to_string()),
        with_num_members: true,
        ..Default::default()
    };

    let service = ServerService::new(db);
    let listing = service.list(&params, Caller::Anonymous).await?;

    let ServerListing::WithMemberCount(servers) = listing else {
        panic!("expected listing with member counts");
    };

    assert_eq!(servers.len(), 2);
    assert_eq!(servers[0].server.id, small.id);
    assert_eq!(servers[0].server.category, "gaming");
    assert_eq!(servers[0].num_members, 3);
    assert_eq!(servers[1].server.id, large.id);
    assert_eq!(servers[1].num_members, 5);

    Ok(())
}

/// Tests the membership filter for a logged in caller.
///
/// Verifies that only joined servers are returned and that the member count
/// reflects the whole member set, not just the caller.
///
/// Expected: Ok with the joined server and its full member count
#[tokio::test]
async fn lists_servers_joined_by_caller() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, category, joined) = factory::create_server_with_dependencies(db).await?;
    factory::create_server(db, owner.id, category.id).await?;
    let caller = factory::create_user(db).await?;

    factory::create_server_member(db, joined.id, caller.id).await?;
    factory::add_members(db, joined.id, 2).await?;

    let params = ServerListParams {
        by_user: true,
        with_num_members: true,
        ..Default::default()
    };

    let service = ServerService::new(db);
    let listing = service
        .list(&params, Caller::Authenticated { user_id: caller.id })
        .await?;

    let ServerListing::WithMemberCount(servers) = listing else {
        panic!("expected listing with member counts");
    };

    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].server.id, joined.id);
    assert_eq!(servers[0].num_members, 3);

    Ok(())
}

/// Tests `by_user` from an anonymous caller.
///
/// Expected: Err(AuthError::AuthenticationRequired)
#[tokio::test]
async fn rejects_membership_filter_for_anonymous_caller() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let params = ServerListParams {
        by_user: true,
        ..Default::default()
    };

    let result = ServerService::new(db).list(&params, Caller::Anonymous).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AuthenticationRequired("by_user")))
    ));

    Ok(())
}

/// Tests `by_serverid` from an anonymous caller.
///
/// Verifies the authentication check runs before the ID is validated.
///
/// Expected: Err(AuthError::AuthenticationRequired)
#[tokio::test]
async fn rejects_id_lookup_for_anonymous_caller() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let params = ServerListParams {
        by_server_id: Some("abc".to_string()),
        ..Default::default()
    };

    let result = ServerService::new(db).list(&params, Caller::Anonymous).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AuthenticationRequired(
            "by_serverid"
        )))
    ));

    Ok(())
}

/// Tests the authentication check precedes `qty` validation.
///
/// Expected: Err(AuthError::AuthenticationRequired) rather than a quantity error
#[tokio::test]
async fn checks_authentication_before_quantity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let params = ServerListParams {
        by_user: true,
        qty: Some("many".to_string()),
        ..Default::default()
    };

    let result = ServerService::new(db).list(&params, Caller::Anonymous).await;

    assert!(matches!(result, Err(AppError::AuthErr(_))));

    Ok(())
}

/// Tests `qty` keeps a prefix of the listing.
///
/// Expected: Ok with the first two servers
#[tokio::test]
async fn slices_to_quantity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, category, first) = factory::create_server_with_dependencies(db).await?;
    let second = factory::create_server(db, owner.id, category.id).await?;
    factory::create_server(db, owner.id, category.id).await?;

    let params = ServerListParams {
        qty: Some("2".to_string()),
        ..Default::default()
    };

    let listing = ServerService::new(db)
        .list(&params, Caller::Anonymous)
        .await?;

    let ServerListing::Plain(servers) = listing else {
        panic!("expected plain listing");
    };
    let ids: Vec<i32> = servers.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests a non-numeric `qty`.
///
/// Expected: Err(ServerError::InvalidQuantity)
#[tokio::test]
async fn rejects_invalid_quantity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let params = ServerListParams {
        qty: Some("ten".to_string()),
        ..Default::default()
    };

    let result = ServerService::new(db).list(&params, Caller::Anonymous).await;

    assert!(matches!(
        result,
        Err(AppError::ServerErr(ServerError::InvalidQuantity(_)))
    ));

    Ok(())
}

/// Tests looking up a single server as a logged in caller.
///
/// Expected: Ok with exactly one server
#[tokio::test]
async fn finds_single_server_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, category, _) = factory::create_server_with_dependencies(db).await?;
    let wanted = factory::create_server(db, owner.id, category.id).await?;

    let params = ServerListParams {
        by_server_id: Some(wanted.id.to_string()),
        ..Default::default()
    };

    let listing = ServerService::new(db)
        .list(&params, Caller::Authenticated { user_id: owner.id })
        .await?;

    let ServerListing::Plain(servers) = listing else {
        panic!("expected plain listing");
    };
    assert_eq!(servers.len(), 1);
    assert_eq!(servers[0].id, wanted.id);

    Ok(())
}

/// Tests an ID that matches no server.
///
/// Expected: Err(ServerError::NotFound) with "Server with id 999 not found"
#[tokio::test]
async fn reports_missing_server_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, _) = factory::create_server_with_dependencies(db).await?;

    let params = ServerListParams {
        by_server_id: Some("999".to_string()),
        ..Default::default()
    };

    let err = ServerService::new(db)
        .list(&params, Caller::Authenticated { user_id: owner.id })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AppError::ServerErr(ServerError::NotFound(ref id)) if id == "999"
    ));
    assert_eq!(err.to_string(), "Server with id 999 not found");

    Ok(())
}

/// Tests an ID that is not a valid identifier.
///
/// Expected: Err(ServerError::InvalidId) with "Server value error"
#[tokio::test]
async fn reports_malformed_server_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let params = ServerListParams {
        by_server_id: Some("abc".to_string()),
        ..Default::default()
    };

    let err = ServerService::new(db)
        .list(&params, Caller::Authenticated { user_id: owner.id })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::ServerErr(ServerError::InvalidId(_))));
    assert_eq!(err.to_string(), "Server value error");

    Ok(())
}

/// Tests an existing ID excluded by the category filter.
///
/// Expected: Err(ServerError::NotFound)
#[tokio::test]
async fn reports_id_excluded_by_category_as_missing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    create_category_named(db, "gaming").await?;
    let music = create_category_named(db, "music").await?;
    let server = factory::create_server(db, owner.id, music.id).await?;

    let params = ServerListParams {
        category: Some("gaming".to_string()),
        by_server_id: Some(server.id.to_string()),
        ..Default::default()
    };

    let result = ServerService::new(db)
        .list(&params, Caller::Authenticated { user_id: owner.id })
        .await;

    assert!(matches!(
        result,
        Err(AppError::ServerErr(ServerError::NotFound(_)))
    ));

    Ok(())
}
