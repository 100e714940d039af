//! Property listing browser: fetches the full collection from the property
//! store once per session, then filters, sorts, and paginates it in memory.

pub mod fetch;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod users;
