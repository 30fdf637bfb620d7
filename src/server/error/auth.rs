use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// A query parameter that is scoped to the caller was used without a logged in user.
    ///
    /// Raised for `by_user` and `by_serverid` list queries from anonymous callers.
    #[error("Authentication required to use the {0} filter")]
    AuthenticationRequired(&'static str),

    /// No user ID is stored in the session, or the stored ID no longer exists.
    #[error("No authenticated user in session")]
    UserNotInSession,
}

/// Converts authentication errors into HTTP responses.
///
/// Both variants map to 401 Unauthorized with a generic message; the specific
/// reason is only logged at debug level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::AuthenticationRequired(_) => "Incorrect authentication credentials.",
            Self::UserNotInSession => "Authentication credentials were not provided.",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
