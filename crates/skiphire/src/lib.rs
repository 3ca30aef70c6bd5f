//! Application logic for the heavy waste skip selector.

pub mod app;
pub mod config;
pub mod errors;
pub mod presenter;
