//! Order Handlers

pub(crate) mod delete;
pub(crate) mod history;
pub(crate) mod index;
