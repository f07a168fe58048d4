//! Backends module - File system access
//!
//! Provides:
//! - scan: Extension-filtered file discovery with walkdir
//! - markers: Line-by-line TODO marker scanning

pub mod markers;
pub mod scan;
