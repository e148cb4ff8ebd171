//! The observation loop
//!
//! FETCHING -> RENDERING -> DISPLAYING -> SLEEPING, forever. Failure never
//! ends the loop: exhaustion of the source table backs off 60 seconds, any
//! other cycle error backs off 30 seconds, a render failure substitutes a
//! placeholder frame. The only exit is the user interrupt, honored both
//! while a cycle is in flight and during every sleep.

use crate::config::TelescopeConfig;
use crate::display;
use helioscope_fetch::{FetchError, Fetcher, PhotoArchive};
use helioscope_render::AsciiRenderer;
use std::path::Path;
use std::time::Duration;

/// Application-level errors
#[derive(Debug, thiserror::Error)]
pub enum TelescopeError {
    /// Fetch-side failure (startup client construction or a fetch cycle)
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl TelescopeError {
    /// Whether this is the all-sources-exhausted signal
    #[inline]
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Fetch(err) if err.is_exhausted())
    }

    /// Backoff applied before the loop restarts after this error
    #[must_use]
    pub fn backoff(&self, config: &TelescopeConfig) -> Duration {
        if self.is_exhausted() {
            config.exhausted_backoff
        } else {
            config.error_backoff
        }
    }
}

/// The telescope: fetcher, renderer and the loop around them
#[derive(Debug)]
pub struct Telescope {
    config: TelescopeConfig,
    fetcher: Fetcher,
    renderer: AsciiRenderer,
    current_source: String,
}

impl Telescope {
    /// Build a telescope from configuration
    ///
    /// # Errors
    /// Returns [`TelescopeError`] when the HTTP client cannot be
    /// constructed; nothing past this point is fatal.
    pub fn new(config: TelescopeConfig) -> Result<Self, TelescopeError> {
        let mut fetcher = Fetcher::new(config.fetch.clone(), config.sources.clone())?;
        if config.archive.enabled {
            fetcher = fetcher.with_archive(PhotoArchive::new(&config.archive.dir));
        }
        let renderer = AsciiRenderer::new(config.render.clone());
        Ok(Self {
            config,
            fetcher,
            renderer,
            current_source: "Unknown".to_string(),
        })
    }

    /// Name of the last source that produced a frame
    #[inline]
    #[must_use]
    pub fn current_source(&self) -> &str {
        &self.current_source
    }

    /// Run the stream until interrupted
    pub async fn run(&mut self) {
        print!("{}", display::format_banner(self.archive_dir()));

        if self.config.archive.enabled {
            let archive = PhotoArchive::new(&self.config.archive.dir);
            match archive.ensure_dir() {
                Ok(true) => {
                    println!(
                        "Created photos directory: {}",
                        self.config.archive.dir.display()
                    );
                }
                Ok(false) => {}
                Err(error) => {
                    tracing::warn!(%error, "could not create photos directory");
                }
            }
        }

        loop {
            let outcome = tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    self.print_shutdown();
                    return;
                }
                outcome = self.cycle() => outcome,
            };

            let pause = match outcome {
                Ok(()) => self.config.refresh_interval,
                Err(error) if error.is_exhausted() => {
                    println!(
                        "Failed to fetch image from all sources, retrying in {} seconds...",
                        self.config.exhausted_backoff.as_secs()
                    );
                    error.backoff(&self.config)
                }
                Err(error) => {
                    println!("Unexpected error: {error}");
                    println!(
                        "Retrying in {} seconds...",
                        self.config.error_backoff.as_secs()
                    );
                    error.backoff(&self.config)
                }
            };

            if !sleep_until_interrupt(pause).await {
                self.print_shutdown();
                return;
            }
        }
    }

    /// Fetch, render and display a single frame, then return
    ///
    /// # Errors
    /// Unlike [`Telescope::run`], cycle errors propagate to the caller.
    pub async fn run_once(&mut self) -> Result<(), TelescopeError> {
        self.cycle().await
    }

    /// One fetch-render-display pass
    async fn cycle(&mut self) -> Result<(), TelescopeError> {
        let observation = self.fetcher.fetch_latest().await?;
        self.current_source = observation.source.clone();

        // A failed conversion shows the placeholder; the cycle still counts
        let frame = self.renderer.render_or_placeholder(&observation.grid);

        display::show_observation(
            &self.current_source,
            observation.saved_path.as_deref(),
            &frame,
            self.config.refresh_interval,
            self.archive_dir(),
        );
        Ok(())
    }

    fn archive_dir(&self) -> Option<&Path> {
        self.config
            .archive
            .enabled
            .then_some(self.config.archive.dir.as_path())
    }

    fn print_shutdown(&self) {
        print!("{}", display::format_shutdown(self.archive_dir()));
    }
}

/// Sleep for `duration`, returning `false` when interrupted instead
async fn sleep_until_interrupt(duration: Duration) -> bool {
    tokio::select! {
        _ = tokio::signal::ctrl_c() => false,
        () = tokio::time::sleep(duration) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helioscope_fetch::SourceFailure;

    fn exhausted() -> TelescopeError {
        TelescopeError::Fetch(FetchError::Exhausted {
            failures: vec![SourceFailure {
                source: "x".to_string(),
                reason: FetchError::EmptyImage,
            }],
        })
    }

    #[test]
    fn exhaustion_backs_off_longer_than_other_errors() {
        let config = TelescopeConfig::default();

        let err = exhausted();
        assert!(err.is_exhausted());
        assert_eq!(err.backoff(&config), Duration::from_secs(60));

        let err = TelescopeError::Fetch(FetchError::EmptyImage);
        assert!(!err.is_exhausted());
        assert_eq!(err.backoff(&config), Duration::from_secs(30));
    }

    #[test]
    fn telescope_starts_with_unknown_source() {
        let telescope = Telescope::new(TelescopeConfig::default()).unwrap();
        assert_eq!(telescope.current_source(), "Unknown");
    }
}
