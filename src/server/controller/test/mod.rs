use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;
use tower_sessions::{Session, SessionManagerLayer};

use crate::server::{middleware::session::AuthSession, router::router, state::AppState};


/// Builds the application router on top of the test database and session store.
async fn app(test: &mut TestContext) -> Router {
    let store = test.session_store().await.unwrap();
    let db = test.database().await.unwrap().clone();

    router()
        .with_state(AppState::new(db))
        .layer(SessionManagerLayer::new(store))
}

/// Stores a logged in session for the user and returns the matching cookie header.
async fn login(test: &mut TestContext, user_id: i32) -> String {
    let store = test.session_store().await.unwrap();
    let session = Session::new(None, Arc::new(store), None);

    AuthSession::new(&session)
        .set_user_id(user_id)
        .await
        .unwrap();
    session.save().await.unwrap();

    format!("id={}", session.id().unwrap())
}

/// Sends a GET request and returns the status with the decoded JSON body.
///
/// Empty bodies decode to `Value::Null`.
async fn get(app: Router, uri: &str, cookie: Option<&str>) -> (StatusCode, Value) {
    let mut request = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        request = request.header(header::COOKIE, cookie);
    }

    let response = app
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}
