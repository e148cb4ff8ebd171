//! Ordered-fallback image fetching
//!
//! The fetcher walks the source table top to bottom each cycle. Per-source
//! work is: GET with a browser User-Agent, status gate, payload sniff,
//! decode, empty gate, NaN scrub, centered square crop. The first source to
//! pass every gate wins and later sources are not contacted. Any per-source
//! failure is classified, logged and swallowed by advancing to the next
//! source; only total exhaustion is returned to the caller.

use crate::archive::PhotoArchive;
use crate::error::{FetchError, SourceFailure};
use crate::source::SourceDescriptor;
use helioscope_render::PixelGrid;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Browser-spoofing User-Agent, sent to avoid basic bot blocking
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// Per-request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl FetcherConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With request timeout
    #[inline]
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// With User-Agent header
    #[inline]
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// A successful fetch: cropped grayscale grid plus provenance
#[derive(Debug, Clone)]
pub struct Observation {
    /// Centered-square grayscale intensity grid
    pub grid: PixelGrid,
    /// Name of the source that won this cycle
    pub source: String,
    /// Where the original photo was archived, when archiving is on
    pub saved_path: Option<PathBuf>,
}

/// Walks the source table until one source yields valid pixel data
#[derive(Debug)]
pub struct Fetcher {
    client: reqwest::Client,
    sources: Vec<SourceDescriptor>,
    archive: Option<PhotoArchive>,
}

impl Fetcher {
    /// Build a fetcher over an ordered source table
    ///
    /// The HTTP client is constructed once, with the configured timeout and
    /// User-Agent.
    ///
    /// # Errors
    /// Returns [`FetchError::Client`] when client construction fails; this is
    /// a startup error, not a per-cycle one.
    pub fn new(
        config: FetcherConfig,
        sources: Vec<SourceDescriptor>,
    ) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self {
            client,
            sources,
            archive: None,
        })
    }

    /// Enable archiving of original photos
    #[inline]
    #[must_use]
    pub fn with_archive(mut self, archive: PhotoArchive) -> Self {
        self.archive = Some(archive);
        self
    }

    /// The source table, in fallback order
    #[inline]
    #[must_use]
    pub fn sources(&self) -> &[SourceDescriptor] {
        &self.sources
    }

    /// Fetch the latest solar image from the first available source
    ///
    /// # Errors
    /// Returns [`FetchError::Exhausted`] when every source failed, carrying
    /// one classified failure per source.
    pub async fn fetch_latest(&self) -> Result<Observation, FetchError> {
        let mut failures = Vec::with_capacity(self.sources.len());

        for source in &self.sources {
            tracing::info!(source = %source.name, url = %source.url, "trying source");
            match self.try_source(source).await {
                Ok(observation) => {
                    tracing::info!(source = %source.name, "successfully loaded");
                    return Ok(observation);
                }
                Err(reason) => {
                    tracing::warn!(source = %source.name, %reason, "source failed, trying next");
                    failures.push(SourceFailure {
                        source: source.name.clone(),
                        reason,
                    });
                }
            }
        }

        tracing::warn!("all sources failed");
        Err(FetchError::Exhausted { failures })
    }

    /// Fetch, validate and crop one source
    async fn try_source(
        &self,
        source: &SourceDescriptor,
    ) -> Result<Observation, FetchError> {
        let response = self.client.get(&source.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http { status });
        }
        let bytes = response.bytes().await?;

        let sniffed = image::guess_format(&bytes)?;
        if !matches!(
            sniffed,
            image::ImageFormat::Jpeg | image::ImageFormat::Png
        ) {
            return Err(FetchError::UnsupportedPayload(format!("{sniffed:?}")));
        }
        if sniffed != source.format.as_image_format() {
            tracing::debug!(
                source = %source.name,
                expected = source.format.as_tag(),
                sniffed = ?sniffed,
                "payload format differs from descriptor tag"
            );
        }

        let decoded = image::load_from_memory(&bytes)?;
        let mut grid = PixelGrid::from_image(&decoded);
        if grid.is_empty() {
            return Err(FetchError::EmptyImage);
        }
        grid.scrub_nan();
        let grid = grid.center_crop();

        // Best effort: a failed write is logged, never a failed fetch
        let saved_path = self.archive.as_ref().and_then(|archive| {
            match archive.save(&decoded, &source.name) {
                Ok(path) => Some(path),
                Err(error) => {
                    tracing::warn!(%error, "failed to save photo");
                    None
                }
            }
        });

        Ok(Observation {
            grid,
            source: source.name.clone(),
            saved_path,
        })
    }
}
