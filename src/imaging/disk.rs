//! Disk-backed image source — pure Rust, zero external dependencies.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::image_dimensions` |
//! | Decode (JPEG, PNG, TIFF, WebP) | `image` crate (pure Rust decoders) |
//! | `fill` | `image::DynamicImage::resize_to_fill` (Lanczos3) |
//! | `fit` / `scale-width` / `scale-height` | `image::DynamicImage::resize_exact` (Lanczos3) |
//! | Encode → AVIF | `image::codecs::avif::AvifEncoder` (rav1e, speed 6) |
//!
//! Output files land in the configured output directory, named
//! `{stem}-{method}-{width}x{height}.avif`; the returned handle's url is
//! that file name, relative to the output directory.

use super::calculations::{fit_within, scale_to_height, scale_to_width};
use super::methods::{Quality, ResizeMethod};
use super::source::{ImageHandle, ImageSource, SourceError};
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use std::path::{Path, PathBuf};

/// Image source backed by a file on disk.
///
/// The source image is identified once at open time; each resize call
/// decodes, resizes, and encodes one output file.
pub struct DiskSource {
    source: PathBuf,
    output_dir: PathBuf,
    stem: String,
    dimensions: (u32, u32),
    quality: Quality,
}

impl DiskSource {
    /// Open a source image, reading its dimensions from the file header.
    pub fn open(source: &Path, output_dir: &Path, quality: Quality) -> Result<Self, SourceError> {
        let dimensions = image::image_dimensions(source).map_err(|e| {
            SourceError::ProcessingFailed(format!(
                "Failed to read dimensions of {}: {}",
                source.display(),
                e
            ))
        })?;
        let stem = source
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("image")
            .to_string();
        Ok(Self {
            source: source.to_path_buf(),
            output_dir: output_dir.to_path_buf(),
            stem,
            dimensions,
            quality,
        })
    }

    /// Dimensions of the source image, as read at open time.
    pub fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }

    fn load(&self) -> Result<DynamicImage, SourceError> {
        ImageReader::open(&self.source)
            .map_err(SourceError::Io)?
            .decode()
            .map_err(|e| {
                SourceError::ProcessingFailed(format!(
                    "Failed to decode {}: {}",
                    self.source.display(),
                    e
                ))
            })
    }

    fn save_avif(&self, img: &DynamicImage, path: &Path) -> Result<(), SourceError> {
        let file = std::fs::File::create(path).map_err(SourceError::Io)?;
        let writer = std::io::BufWriter::new(file);
        let encoder = image::codecs::avif::AvifEncoder::new_with_speed_quality(
            writer,
            6,
            self.quality.value() as u8,
        );
        img.write_with_encoder(encoder)
            .map_err(|e| SourceError::ProcessingFailed(format!("AVIF encode failed: {}", e)))
    }
}

impl ImageSource for DiskSource {
    fn supports(&self, _method: ResizeMethod) -> bool {
        // Every registered method has a disk implementation.
        true
    }

    fn resize(&self, method: ResizeMethod, args: &[u32]) -> Result<ImageHandle, SourceError> {
        if args.iter().any(|&a| a == 0) {
            return Err(SourceError::ProcessingFailed(format!(
                "{} called with a zero dimension: {:?}",
                method.name(),
                args
            )));
        }

        let img = self.load()?;
        let resized = match (method, args) {
            (ResizeMethod::Fill, [w, h]) => img.resize_to_fill(*w, *h, FilterType::Lanczos3),
            (ResizeMethod::Fit, [w, h]) => {
                let (out_w, out_h) = fit_within(self.dimensions, (*w, *h));
                img.resize_exact(out_w, out_h, FilterType::Lanczos3)
            }
            (ResizeMethod::ScaleWidth, [w]) => {
                let (out_w, out_h) = scale_to_width(self.dimensions, *w);
                img.resize_exact(out_w, out_h, FilterType::Lanczos3)
            }
            (ResizeMethod::ScaleHeight, [h]) => {
                let (out_w, out_h) = scale_to_height(self.dimensions, *h);
                img.resize_exact(out_w, out_h, FilterType::Lanczos3)
            }
            _ => {
                return Err(SourceError::ProcessingFailed(format!(
                    "{} takes {} argument(s), got {:?}",
                    method.name(),
                    method.arity(),
                    args
                )));
            }
        };

        let (width, height) = (resized.width(), resized.height());
        let name = format!("{}-{}-{}x{}.avif", self.stem, method.name(), width, height);
        std::fs::create_dir_all(&self.output_dir).map_err(SourceError::Io)?;
        self.save_avif(&resized, &self.output_dir.join(&name))?;

        Ok(ImageHandle {
            url: name,
            width,
            height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageEncoder, RgbImage};

    /// Create a small valid JPEG file with the given dimensions.
    fn create_test_jpeg(path: &Path, width: u32, height: u32) {
        let img = RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        let file = std::fs::File::create(path).unwrap();
        let writer = std::io::BufWriter::new(file);
        image::codecs::jpeg::JpegEncoder::new(writer)
            .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
            .unwrap();
    }

    #[test]
    fn open_reads_dimensions() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("photo.jpg");
        create_test_jpeg(&source, 400, 300);

        let disk = DiskSource::open(&source, tmp.path(), Quality::default()).unwrap();
        assert_eq!(disk.dimensions(), (400, 300));
    }

    #[test]
    fn open_nonexistent_file_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let result = DiskSource::open(
            Path::new("/nonexistent/image.jpg"),
            tmp.path(),
            Quality::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn fill_produces_exact_dimensions() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("photo.jpg");
        create_test_jpeg(&source, 800, 600);
        let out = tmp.path().join("out");

        let disk = DiskSource::open(&source, &out, Quality::new(85)).unwrap();
        let handle = disk.resize(ResizeMethod::Fill, &[200, 100]).unwrap();

        assert_eq!(handle.width, 200);
        assert_eq!(handle.height, 100);
        assert_eq!(handle.url, "photo-fill-200x100.avif");
        assert!(out.join(&handle.url).exists());
        assert!(std::fs::metadata(out.join(&handle.url)).unwrap().len() > 0);
    }

    #[test]
    fn fit_stays_within_box() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("photo.jpg");
        create_test_jpeg(&source, 800, 600);

        let disk = DiskSource::open(&source, tmp.path(), Quality::new(85)).unwrap();
        let handle = disk.resize(ResizeMethod::Fit, &[200, 200]).unwrap();

        // 4:3 into a square: width matches, height follows aspect
        assert_eq!((handle.width, handle.height), (200, 150));
    }

    #[test]
    fn scale_width_preserves_aspect() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("photo.jpg");
        create_test_jpeg(&source, 800, 600);

        let disk = DiskSource::open(&source, tmp.path(), Quality::new(85)).unwrap();
        let handle = disk.resize(ResizeMethod::ScaleWidth, &[400]).unwrap();
        assert_eq!((handle.width, handle.height), (400, 300));

        let handle = disk.resize(ResizeMethod::ScaleHeight, &[300]).unwrap();
        assert_eq!((handle.width, handle.height), (400, 300));
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("photo.jpg");
        create_test_jpeg(&source, 100, 100);

        let disk = DiskSource::open(&source, tmp.path(), Quality::default()).unwrap();
        let result = disk.resize(ResizeMethod::Fill, &[0, 100]);
        assert!(result.is_err());
    }

    #[test]
    fn wrong_arity_is_rejected() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("photo.jpg");
        create_test_jpeg(&source, 100, 100);

        let disk = DiskSource::open(&source, tmp.path(), Quality::default()).unwrap();
        let result = disk.resize(ResizeMethod::ScaleWidth, &[400, 300]);
        assert!(result.is_err());
    }

    #[test]
    fn supports_all_registered_methods() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = tmp.path().join("photo.jpg");
        create_test_jpeg(&source, 100, 100);

        let disk = DiskSource::open(&source, tmp.path(), Quality::default()).unwrap();
        for &method in ResizeMethod::ALL {
            assert!(disk.supports(method));
        }
    }
}
