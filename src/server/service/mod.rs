//! Business logic between controllers and repositories.

pub mod server;
