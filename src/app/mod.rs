//! Main application modules.
//!
//! This module provides utilities for logging setup, crawl input
//! loading, and console summaries used by the main application.

pub mod input;
pub mod logging;
pub mod summary;

// Re-export public API
pub use input::load_pages;
pub use logging::init_logger_with;
pub use summary::print_summary;
