//! Request guards resolving the caller from the session.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
