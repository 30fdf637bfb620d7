use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::{Caller, User},
};

/// Resolves the caller of a request from its session.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Identifies the caller without rejecting anonymous requests.
    ///
    /// A session pointing at a user that no longer exists is treated as anonymous.
    ///
    /// # Returns
    /// - `Ok(Caller::Authenticated { .. })` - Session holds an existing user
    /// - `Ok(Caller::Anonymous)` - No user in session, or the user was removed
    /// - `Err(AppError)` - Session or database failure
    pub async fn caller(&self) -> Result<Caller, AppError> {
        Ok(match self.user().await? {
            Some(user) => Caller::Authenticated { user_id: user.id },
            None => Caller::Anonymous,
        })
    }

    /// Requires a logged in user.
    ///
    /// # Returns
    /// - `Ok(User)` - The session user
    /// - `Err(AppError::AuthErr(UserNotInSession))` - Anonymous caller
    /// - `Err(AppError)` - Session or database failure
    pub async fn require(&self) -> Result<User, AppError> {
        self.user()
            .await?
            .ok_or_else(|| AuthError::UserNotInSession.into())
    }

    async fn user(&self) -> Result<Option<User>, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Ok(None);
        };

        let user = UserRepository::new(self.db).find_by_id(user_id).await?;

        if user.is_none() {
            tracing::debug!("Session references missing user {}", user_id);
        }

        Ok(user)
    }
}
