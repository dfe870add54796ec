//! Shared application domain and persistence modules.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;

mod columns;
mod uuids;

pub use uuids::TypedUuid;

#[cfg(test)]
mod test;
