//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models from
//! `server::model`, keeping database-specific structures out of the service and
//! controller layers. All reads of the directory go through these repositories; none
//! of them write.

pub mod server;
pub mod user;
