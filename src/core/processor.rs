// img-squeeze/src/core/processor.rs
use super::{OutputCodec, ProcessedImage, ProcessingRequest, Result, SqueezeError};
use crate::processors::{Compressor, Loader, Resizer};
use crate::utils::{display_name, dotted_extension};
use image::GenericImageView;

/// Runs one request through decode, optional downscale and extension-selected encoding.
pub struct ImageProcessor {
    request: ProcessingRequest,
    loader: Loader,
    resizer: Resizer,
    compressor: Compressor,
}

impl ImageProcessor {
    pub fn new(request: ProcessingRequest) -> Self {
        let resizer = Resizer::new(request.algorithm, request.max_dim);
        let compressor = Compressor::new(request.jpeg_quality, request.png_compression);

        Self {
            request,
            loader: Loader::new(),
            resizer,
            compressor,
        }
    }

    pub fn process(&self) -> Result<ProcessedImage> {
        let input_path = self.request.input_path.as_path();
        let output_path = self.request.output_path()?;
        let input_size = std::fs::metadata(input_path).map(|m| m.len()).unwrap_or(0);

        let image = self.loader.load(input_path)?;
        let original_dimensions = image.dimensions();

        let (width, height) = original_dimensions;
        if self.resizer.target_dimensions(width, height).is_some() {
            println!("Resizing {}...", display_name(input_path));
        }
        let image = self.resizer.resize(&image).unwrap_or(image);
        let output_dimensions = image.dimensions();

        // Dispatch happens after decoding, so a decodable .gif is still rejected here.
        let extension = dotted_extension(input_path);
        let codec = OutputCodec::from_extension(extension.trim_start_matches('.')).ok_or_else(
            || SqueezeError::UnsupportedFormat {
                path: input_path.to_path_buf(),
                extension: extension.clone(),
            },
        )?;

        let output_size = self.compressor.save(&image, &output_path, codec)?;

        Ok(ProcessedImage {
            input_path: input_path.to_path_buf(),
            output_path,
            original_dimensions,
            output_dimensions,
            codec,
            setting: self.compressor.setting_for(codec),
            input_size,
            output_size,
        })
    }
}
