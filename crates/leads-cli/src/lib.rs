//! CLI library components for the buyer lead importer.

pub mod batch_file;
pub mod config;
pub mod logging;
pub mod store;
