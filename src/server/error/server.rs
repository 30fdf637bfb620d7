use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rejections of a server list query.
///
/// Every variant is a caller error and maps to 400 Bad Request with the
/// display message as the response body.
#[derive(Error, Debug, PartialEq)]
pub enum ServerError {
    /// `by_serverid` is not a valid server identifier.
    #[error("Server value error")]
    InvalidId(String),

    /// `by_serverid` is well formed but matched nothing in the filtered set.
    #[error("Server with id {0} not found")]
    NotFound(String),

    /// `qty` is not a non-negative integer.
    #[error("Invalid qty value '{0}'")]
    InvalidQuantity(String),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
