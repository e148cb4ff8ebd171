//! Helioscope Fetch - ordered-fallback retrieval of solar imagery
//!
//! The fetching side of the telescope:
//! - [`SourceDescriptor`]: a static, ordered table of image endpoints,
//!   consulted top to bottom each cycle
//! - [`Fetcher`]: tries each source in order, first one that yields a valid
//!   grayscale grid wins; every per-source failure is classified and the loop
//!   advances
//! - [`PhotoArchive`]: optional timestamped persistence of the undownsampled
//!   original photo
//!
//! # Example
//!
//! ```rust,no_run
//! use helioscope_fetch::{Fetcher, FetcherConfig, soho_sources};
//!
//! # async fn example() -> Result<(), helioscope_fetch::FetchError> {
//! let fetcher = Fetcher::new(FetcherConfig::default(), soho_sources())?;
//! let observation = fetcher.fetch_latest().await?;
//! println!("loaded from {}", observation.source);
//! # Ok(())
//! # }
//! ```

// Core modules
pub mod archive;
pub mod error;
pub mod fetcher;
pub mod source;

// Re-exports for convenience
pub use archive::{PhotoArchive, DEFAULT_PHOTOS_DIR};
pub use error::{ArchiveError, FetchError, SourceFailure};
pub use fetcher::{Fetcher, FetcherConfig, Observation, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use source::{sdo_sources, soho_sources, PayloadFormat, SourceDescriptor};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
