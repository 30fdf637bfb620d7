use thiserror::Error;

/// Errors raised while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Connecting to the in-memory database or creating tables failed.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Creating the session table or saving a session failed.
    #[error("Session store error: {0}")]
    Session(String),

    /// A context resource was requested before it was initialized.
    #[error("Test context resource not initialized: {0}")]
    Uninitialized(&'static str),
}
