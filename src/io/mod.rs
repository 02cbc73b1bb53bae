/// Command-line interface and batch processing
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// JSON grid persistence
pub mod export;
/// Image decoding and preview rendering
pub mod image;
/// Progress bars for batch runs
pub mod progress;
/// JSON settings documents and sanitization
pub mod settings;
