//! Telescope configuration
//!
//! Every tunable has a compile-time default; nothing is read from flags or
//! the environment. The source table is a plain value, so callers swapping
//! in a different endpoint set (or a deserialized one) just build a config
//! with [`TelescopeConfig::with_sources`].

use helioscope_fetch::{soho_sources, FetcherConfig, SourceDescriptor, DEFAULT_PHOTOS_DIR};
use helioscope_render::RenderConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Delay between successful refreshes
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(300);

/// Backoff after a cycle in which every source failed
pub const EXHAUSTED_BACKOFF: Duration = Duration::from_secs(60);

/// Backoff after any other cycle error
pub const ERROR_BACKOFF: Duration = Duration::from_secs(30);

/// Photo persistence settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveConfig {
    /// Whether originals are saved at all
    pub enabled: bool,
    /// Directory the photos land in
    pub dir: PathBuf,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: PathBuf::from(DEFAULT_PHOTOS_DIR),
        }
    }
}

/// Full telescope configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelescopeConfig {
    /// Delay between successful refreshes
    pub refresh_interval: Duration,
    /// Backoff when every source failed
    pub exhausted_backoff: Duration,
    /// Backoff on any other cycle error
    pub error_backoff: Duration,
    /// Frame dimensions and ramp
    pub render: RenderConfig,
    /// HTTP client settings
    pub fetch: FetcherConfig,
    /// Ordered source table
    pub sources: Vec<SourceDescriptor>,
    /// Photo persistence
    pub archive: ArchiveConfig,
}

impl TelescopeConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With refresh interval
    #[inline]
    #[must_use]
    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    /// With a swapped source table
    #[inline]
    #[must_use]
    pub fn with_sources(mut self, sources: Vec<SourceDescriptor>) -> Self {
        self.sources = sources;
        self
    }

    /// With render settings
    #[inline]
    #[must_use]
    pub fn with_render(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }

    /// With archive settings
    #[inline]
    #[must_use]
    pub fn with_archive(mut self, archive: ArchiveConfig) -> Self {
        self.archive = archive;
        self
    }
}

impl Default for TelescopeConfig {
    fn default() -> Self {
        Self {
            refresh_interval: REFRESH_INTERVAL,
            exhausted_backoff: EXHAUSTED_BACKOFF,
            error_backoff: ERROR_BACKOFF,
            render: RenderConfig::default(),
            fetch: FetcherConfig::default(),
            sources: soho_sources(),
            archive: ArchiveConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helioscope_fetch::sdo_sources;

    #[test]
    fn defaults_match_the_constants() {
        let config = TelescopeConfig::default();
        assert_eq!(config.refresh_interval, Duration::from_secs(300));
        assert_eq!(config.exhausted_backoff, Duration::from_secs(60));
        assert_eq!(config.error_backoff, Duration::from_secs(30));
        assert_eq!(config.render.width, 80);
        assert_eq!(config.render.height, 24);
        assert_eq!(config.render.ramp.len(), 10);
        assert_eq!(config.sources, soho_sources());
        assert!(config.archive.enabled);
        assert_eq!(config.archive.dir, PathBuf::from("solar_photos"));
    }

    #[test]
    fn source_table_is_swappable() {
        let config = TelescopeConfig::new().with_sources(sdo_sources());
        assert_eq!(config.sources.len(), 3);
        assert_eq!(config.sources[0].name, "NASA SDO HMI Continuum");
    }

    #[test]
    fn builders_override_defaults() {
        let config = TelescopeConfig::new()
            .with_refresh_interval(Duration::from_secs(10))
            .with_archive(ArchiveConfig {
                enabled: false,
                dir: PathBuf::from("elsewhere"),
            });
        assert_eq!(config.refresh_interval, Duration::from_secs(10));
        assert!(!config.archive.enabled);
    }
}
