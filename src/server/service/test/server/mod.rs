use crate::server::{
    error::{auth::AuthError, server::ServerError, AppError},
    model::{
        server::{ServerListParams, ServerListing},
        user::Caller,
    },
    service::server::ServerService,
};
use test_utils::{builder::TestBuilder, factory};

mod list;
