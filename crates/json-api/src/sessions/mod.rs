//! Sessions
//!
//! Login exchanges credentials for a bearer token; logout revokes it.

mod handlers;

pub(crate) use handlers::*;
