//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Factories insert
//! rows directly, so dependencies (owner, category) must exist first or be created
//! through the helpers.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let owner = factory::user::create_user(&db).await?;
//! let category = factory::category::create_category(&db).await?;
//! let server = factory::server::create_server(&db, owner.id, category.id).await?;
//!
//! // Or with all dependencies in one go
//! let (owner, category, server) =
//!     factory::helpers::create_server_with_dependencies(&db).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `category` - Create category entities
//! - `server` - Create server entities
//! - `server_member` - Create server membership entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod category;
pub mod helpers;
pub mod server;
pub mod server_member;
pub mod user;

pub use category::create_category;
pub use helpers::{add_members, create_server_with_dependencies};
pub use server::create_server;
pub use server_member::create_server_member;
pub use user::create_user;
