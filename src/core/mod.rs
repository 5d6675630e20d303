// img-squeeze/src/core/mod.rs
pub mod processor;

use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_OUTPUT_DIR: &str = "./processed_images";
pub const DEFAULT_MAX_DIM: u32 = 1024;
pub const DEFAULT_JPEG_QUALITY: u8 = 85;
pub const DEFAULT_PNG_COMPRESSION: u8 = 6;

pub const JPEG_QUALITY_RANGE: std::ops::RangeInclusive<u8> = 1..=95;
pub const PNG_COMPRESSION_RANGE: std::ops::RangeInclusive<u8> = 0..=9;

/// Resampling filter used when an image has to be downscaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeAlgorithm {
    Nearest,
    Bilinear,
    Bicubic,
    #[default]
    Lanczos3,
}

/// Codec selected from the input file's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputCodec {
    Jpeg,
    Png,
}

impl OutputCodec {
    /// Case-insensitive extension lookup. Content is never sniffed here.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProcessConfig {
    pub output_dir: PathBuf,
    pub max_dim: u32,
    pub jpeg_quality: u8,
    pub png_compression: u8,
    pub algorithm: ResizeAlgorithm,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            max_dim: DEFAULT_MAX_DIM,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            png_compression: DEFAULT_PNG_COMPRESSION,
            algorithm: ResizeAlgorithm::default(),
        }
    }
}

impl ProcessConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_dim == 0 {
            return Err(SqueezeError::InvalidParameter(
                "Maximum dimension must be a positive integer".to_string(),
            ));
        }

        if !JPEG_QUALITY_RANGE.contains(&self.jpeg_quality) {
            return Err(SqueezeError::InvalidParameter(format!(
                "JPEG quality must be between 1 and 95, got {}",
                self.jpeg_quality
            )));
        }

        if !PNG_COMPRESSION_RANGE.contains(&self.png_compression) {
            return Err(SqueezeError::InvalidParameter(format!(
                "PNG compression must be between 0 and 9, got {}",
                self.png_compression
            )));
        }

        Ok(())
    }
}

/// Everything needed to process one input file. Built once per input and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingRequest {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub max_dim: u32,
    pub jpeg_quality: u8,
    pub png_compression: u8,
    pub algorithm: ResizeAlgorithm,
}

impl ProcessingRequest {
    pub fn new(input_path: impl Into<PathBuf>, config: &ProcessConfig) -> Self {
        Self {
            input_path: input_path.into(),
            output_dir: config.output_dir.clone(),
            max_dim: config.max_dim,
            jpeg_quality: config.jpeg_quality,
            png_compression: config.png_compression,
            algorithm: config.algorithm,
        }
    }

    /// `output_dir/<input file name>`. Same name and extension, later inputs overwrite.
    pub fn output_path(&self) -> Result<PathBuf> {
        crate::utils::output_path_for(&self.input_path, &self.output_dir)
    }
}

/// A successfully written output file.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedImage {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub original_dimensions: (u32, u32),
    pub output_dimensions: (u32, u32),
    pub codec: OutputCodec,
    /// JPEG quality or PNG compression level, depending on `codec`.
    pub setting: u8,
    pub input_size: u64,
    pub output_size: u64,
}

impl ProcessedImage {
    pub fn was_resized(&self) -> bool {
        self.original_dimensions != self.output_dimensions
    }
}

#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub processed_count: usize,
    pub total_size_before: u64,
    pub total_size_after: u64,
    pub skipped: Vec<(PathBuf, SqueezeError)>,
}

impl ProcessingStats {
    pub fn record_success(&mut self, image: &ProcessedImage) {
        self.processed_count += 1;
        self.total_size_before += image.input_size;
        self.total_size_after += image.output_size;
    }

    pub fn record_skip(&mut self, path: &Path, error: SqueezeError) {
        self.skipped.push((path.to_path_buf(), error));
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

#[derive(Error, Debug)]
pub enum SqueezeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("{} is not a file", .0.display())]
    NotAFile(PathBuf),

    #[error("Could not open {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Unsupported format '{extension}' for {}", crate::utils::display_name(path))]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("Could not encode {}: {message}", path.display())]
    Encode { path: PathBuf, message: String },

    #[error("Could not save {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SqueezeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ProcessConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.output_dir, PathBuf::from("./processed_images"));
        assert_eq!(config.max_dim, 1024);
        assert_eq!(config.jpeg_quality, 85);
        assert_eq!(config.png_compression, 6);
        assert_eq!(config.algorithm, ResizeAlgorithm::Lanczos3);
    }

    #[test]
    fn test_validate_rejects_out_of_range_values() {
        let zero_dim = ProcessConfig { max_dim: 0, ..Default::default() };
        assert!(matches!(zero_dim.validate(), Err(SqueezeError::InvalidParameter(_))));

        let quality_low = ProcessConfig { jpeg_quality: 0, ..Default::default() };
        assert!(quality_low.validate().is_err());

        let quality_high = ProcessConfig { jpeg_quality: 96, ..Default::default() };
        assert!(quality_high.validate().is_err());

        let compression_high = ProcessConfig { png_compression: 10, ..Default::default() };
        assert!(compression_high.validate().is_err());

        let edges = ProcessConfig {
            jpeg_quality: 95,
            png_compression: 0,
            max_dim: 1,
            ..Default::default()
        };
        assert!(edges.validate().is_ok());
    }

    #[test]
    fn test_codec_from_extension_is_case_insensitive() {
        assert_eq!(OutputCodec::from_extension("jpg"), Some(OutputCodec::Jpeg));
        assert_eq!(OutputCodec::from_extension("JPEG"), Some(OutputCodec::Jpeg));
        assert_eq!(OutputCodec::from_extension("Png"), Some(OutputCodec::Png));
        assert_eq!(OutputCodec::from_extension("gif"), None);
        assert_eq!(OutputCodec::from_extension(""), None);
    }

    #[test]
    fn test_request_copies_config() {
        let config = ProcessConfig {
            output_dir: PathBuf::from("out"),
            max_dim: 512,
            ..Default::default()
        };
        let request = ProcessingRequest::new("photos/a.png", &config);
        assert_eq!(request.max_dim, 512);
        assert_eq!(request.output_path().unwrap(), PathBuf::from("out").join("a.png"));
    }
}
