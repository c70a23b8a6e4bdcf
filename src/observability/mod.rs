//! File-based logging for the plugin.
//!
//! The plugin has no terminal of its own to log to, so `tracing` output is
//! written to a size-rotated file in the plugin data directory.
//!
//! # Configuration
//!
//! Log level is controlled via the `trace_level` option in the plugin
//! configuration; default `"info"`.
//!
//! # Usage
//!
//! Initialize early in the plugin lifecycle:
//!
//! ```rust
//! use forkful::observability::init_tracing;
//! use forkful::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("plugin initialized");
//! ```
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use init::init_tracing;
