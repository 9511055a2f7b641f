//! CLI library for testing purposes

pub mod config;
pub mod logging;
pub mod validation;

pub use config::{Overrides, apply_overrides, load_options};
