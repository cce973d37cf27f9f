//! Fleet dashboard CLI internals.

pub mod cache;
pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
