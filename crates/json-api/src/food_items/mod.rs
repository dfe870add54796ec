//! Food Items

mod errors;
pub(crate) mod feedback;
mod handlers;

pub(crate) use handlers::*;
