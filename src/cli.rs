// img-squeeze/src/cli.rs
use crate::core::{
    ProcessConfig, ResizeAlgorithm, DEFAULT_JPEG_QUALITY, DEFAULT_MAX_DIM, DEFAULT_OUTPUT_DIR,
    DEFAULT_PNG_COMPRESSION,
};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// A CLI tool to resize and compress JPEG/PNG images.
#[derive(Debug, Parser)]
#[command(name = "img-squeeze", version, about)]
pub struct Cli {
    /// One or more image files to process
    #[arg(value_name = "FILE", required = true, num_args = 1..)]
    pub input_files: Vec<PathBuf>,

    /// Directory to save processed images
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Maximum width or height for resized images
    #[arg(long, default_value_t = DEFAULT_MAX_DIM, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_dim: u32,

    /// JPEG quality for compression (1-95)
    #[arg(long, default_value_t = DEFAULT_JPEG_QUALITY, value_parser = clap::value_parser!(u8).range(1..=95))]
    pub jpeg_quality: u8,

    /// PNG compression level (0=none, 9=max)
    #[arg(long, default_value_t = DEFAULT_PNG_COMPRESSION, value_parser = clap::value_parser!(u8).range(0..=9))]
    pub png_compression: u8,

    /// Resampling filter used when downscaling
    #[arg(long, value_enum, default_value_t = Algorithm::Lanczos3)]
    pub filter: Algorithm,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    Nearest,
    Bilinear,
    Bicubic,
    Lanczos3,
}

impl From<Algorithm> for ResizeAlgorithm {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Nearest => ResizeAlgorithm::Nearest,
            Algorithm::Bilinear => ResizeAlgorithm::Bilinear,
            Algorithm::Bicubic => ResizeAlgorithm::Bicubic,
            Algorithm::Lanczos3 => ResizeAlgorithm::Lanczos3,
        }
    }
}

impl Cli {
    pub fn process_config(&self) -> ProcessConfig {
        ProcessConfig {
            output_dir: self.output_dir.clone(),
            max_dim: self.max_dim,
            jpeg_quality: self.jpeg_quality,
            png_compression: self.png_compression,
            algorithm: self.filter.into(),
        }
    }
}
