//! Helioscope - live solar observations as terminal ASCII art
//!
//! The application layer over the fetch and render crates:
//! - [`config`]: all tunables as compile-time defaults
//! - [`display`]: ANSI clear plus the observation screen layout
//! - [`telescope`]: the fetch, render, display, sleep loop with
//!   differentiated backoff and graceful interrupt handling
//!
//! # Example
//!
//! ```rust,no_run
//! use helioscope::{Telescope, TelescopeConfig};
//!
//! # async fn example() {
//! let mut telescope = Telescope::new(TelescopeConfig::default()).unwrap();
//! telescope.run().await;
//! # }
//! ```

// Core modules
pub mod config;
pub mod display;
pub mod telescope;

// Re-exports for convenience
pub use config::{
    ArchiveConfig, TelescopeConfig, ERROR_BACKOFF, EXHAUSTED_BACKOFF, REFRESH_INTERVAL,
};
pub use telescope::{Telescope, TelescopeError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
