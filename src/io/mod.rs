//! Input/output, configuration and error types

/// Command-line parsing and batch file processing
pub mod cli;
/// Engine defaults and runtime constants
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Grayscale PNG load and export
pub mod image;
/// Progress display for batch runs
pub mod progress;
