//! User domain models and caller identity.

use crate::model::user::UserDto;

/// Registered user of the directory.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Store identifier of the user.
    pub id: i32,
    /// Unique login name.
    pub username: String,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
        }
    }
}

/// Identity of whoever issued the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caller {
    /// No user is logged in on the session.
    Anonymous,
    /// The session belongs to an existing user.
    Authenticated { user_id: i32 },
}

impl Caller {
    /// Returns the caller's user ID, or `None` for anonymous callers.
    pub fn user_id(&self) -> Option<i32> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { user_id } => Some(*user_id),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id().is_some()
    }
}
