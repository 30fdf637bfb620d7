//! HTTP request handlers.
//!
//! Controllers resolve the caller through `AuthGuard`, hand normalized parameters to
//! a service and convert the returned domain models into DTOs.

pub mod auth;
pub mod server;

#[cfg(test)]
mod test;
