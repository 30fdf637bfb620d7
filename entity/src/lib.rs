//! SeaORM entity models for the server directory schema.

pub mod prelude;

pub mod category;
pub mod server;
pub mod server_member;
pub mod user;
