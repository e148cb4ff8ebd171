//! Timestamped persistence of original solar photos
//!
//! Saves the undownsampled original under a fixed directory, one JPEG per
//! successful fetch. No cleanup, no rotation, no size cap.

use crate::error::ArchiveError;
use chrono::Local;
use image::DynamicImage;
use std::fs;
use std::path::{Path, PathBuf};

/// Default archive directory name
pub const DEFAULT_PHOTOS_DIR: &str = "solar_photos";

/// Photo archive rooted at a fixed directory
#[derive(Debug, Clone)]
pub struct PhotoArchive {
    dir: PathBuf,
}

impl PhotoArchive {
    /// Create an archive rooted at `dir`
    #[inline]
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Archive directory
    #[inline]
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the archive directory if absent
    ///
    /// Returns `true` when the directory was created by this call.
    ///
    /// # Errors
    /// Returns [`ArchiveError::Io`] when creation fails.
    pub fn ensure_dir(&self) -> Result<bool, ArchiveError> {
        if self.dir.exists() {
            return Ok(false);
        }
        fs::create_dir_all(&self.dir)?;
        Ok(true)
    }

    /// Save an original photo, returning the path written
    ///
    /// Filename is `solar_{YYYYMMDD_HHMMSS}_{sanitized_source_name}.jpg`.
    /// The image is re-encoded as JPEG whatever the source format was.
    ///
    /// # Errors
    /// Returns [`ArchiveError`] when the encode or write fails.
    pub fn save(
        &self,
        image: &DynamicImage,
        source_name: &str,
    ) -> Result<PathBuf, ArchiveError> {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let filename = format!("solar_{timestamp}_{}.jpg", sanitize_source_name(source_name));
        let path = self.dir.join(filename);

        // JPEG carries no alpha channel
        image
            .to_rgb8()
            .save_with_format(&path, image::ImageFormat::Jpeg)?;
        Ok(path)
    }
}

/// Make a source name filesystem-safe
fn sanitize_source_name(name: &str) -> String {
    name.replace([' ', '/'], "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_image() -> DynamicImage {
        let mut img = image::GrayImage::new(8, 8);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = image::Luma([(x * 16 + y) as u8]);
        }
        DynamicImage::ImageLuma8(img)
    }

    #[test]
    fn sanitizes_spaces_and_slashes() {
        assert_eq!(
            sanitize_source_name("NASA SDO/HMI Continuum"),
            "NASA_SDO_HMI_Continuum"
        );
        assert_eq!(sanitize_source_name("SOHO_EIT_195"), "SOHO_EIT_195");
    }

    #[test]
    fn ensure_dir_creates_once() {
        let root = tempfile::tempdir().unwrap();
        let archive = PhotoArchive::new(root.path().join("photos"));

        assert!(archive.ensure_dir().unwrap());
        assert!(archive.dir().is_dir());
        assert!(!archive.ensure_dir().unwrap());
    }

    #[test]
    fn save_writes_timestamped_jpeg() {
        let root = tempfile::tempdir().unwrap();
        let archive = PhotoArchive::new(root.path());

        let path = archive.save(&sample_image(), "SOHO EIT/195").unwrap();
        assert!(path.is_file());

        let filename = path.file_name().unwrap().to_str().unwrap();
        assert!(filename.starts_with("solar_"));
        assert!(filename.ends_with("_SOHO_EIT_195.jpg"));

        // Round-trips through the codec as a JPEG
        let bytes = fs::read(&path).unwrap();
        assert_eq!(
            image::guess_format(&bytes).unwrap(),
            image::ImageFormat::Jpeg
        );
    }

    #[test]
    fn save_into_missing_dir_errors() {
        let root = tempfile::tempdir().unwrap();
        let archive = PhotoArchive::new(root.path().join("never_created"));

        let err = archive.save(&sample_image(), "x").unwrap_err();
        assert!(matches!(
            err,
            ArchiveError::Io(_) | ArchiveError::Encode(_)
        ));
    }
}
