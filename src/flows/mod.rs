//! Flows module - End-to-end workflows
//!
//! Provides:
//! - report: discover, scan and write the TODO report

pub mod report;
