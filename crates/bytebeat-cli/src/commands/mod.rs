//! CLI command implementations

pub mod list;
pub mod render;
pub mod render_all;
