use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{auth::AuthGuard, session::AuthSession},
    model::user::Caller,
};
use test_utils::{builder::TestBuilder, factory};
