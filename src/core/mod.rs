//! Core module - Contains the report model and the pure formatting pieces
//!
//! This module provides:
//! - Run configuration, match records and errors (model)
//! - Extension and path helpers
//! - Line cleaning for report entries
//! - Markdown report rendering

pub mod model;
pub mod paths;
pub mod render;
pub mod util;
