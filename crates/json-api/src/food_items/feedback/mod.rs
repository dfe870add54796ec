//! Food Item Feedback

mod errors;
mod handlers;

pub(crate) use handlers::*;
