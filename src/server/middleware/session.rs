//! Type-safe session management wrappers.
//!
//! Wraps the raw tower-sessions `Session` so that the session keys and value
//! types used for authentication live in one place.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
///
/// Handles the authenticated user's ID and session lifecycle operations. The
/// user ID is written by the login flow of the authentication subsystem that
/// shares this session store.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's ID in the session.
    ///
    /// This is the write side of the `auth:user` key. Logging in is handled by the
    /// authentication subsystem sharing this session store, so nothing in the
    /// directory's request path calls it; tests use it to seed a logged in session.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user to log in on this session
    ///
    /// # Returns
    /// - `Ok(())` - User ID successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    #[cfg_attr(not(test), allow(dead_code))]
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the user's ID from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - A user is logged in on this session
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        let user_id = self.session.get::<i32>(SESSION_AUTH_USER_ID).await?;
        Ok(user_id)
    }

    /// Deletes the session from the store and clears its data.
    ///
    /// # Returns
    /// - `Ok(())` - Session removed
    /// - `Err(AppError::SessionErr(_))` - Failed to delete from the store
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
