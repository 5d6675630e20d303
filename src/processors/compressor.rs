// img-squeeze/src/processors/compressor.rs
use crate::core::{OutputCodec, Result, SqueezeError};
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::{ColorType, DynamicImage};
use jpeg_encoder::{ColorType as JpegColorType, Encoder as JpegEncoder};
use oxipng::{optimize_from_memory, Deflaters, Options};
use std::borrow::Cow;
use std::path::Path;

/// Encodes images in memory and writes them out only once encoding succeeded.
pub struct Compressor {
    jpeg_quality: u8,
    png_compression: u8,
}

impl Compressor {
    pub fn new(jpeg_quality: u8, png_compression: u8) -> Self {
        Self {
            jpeg_quality: jpeg_quality.clamp(1, 95),
            png_compression: png_compression.min(9),
        }
    }

    /// Encodes and writes `image`, returning the number of bytes written.
    pub fn save(&self, image: &DynamicImage, path: &Path, codec: OutputCodec) -> Result<u64> {
        log::debug!("Saving image to {} as {:?}", path.display(), codec);

        let bytes = self.compress_to_bytes(image, codec).map_err(|message| {
            SqueezeError::Encode {
                path: path.to_path_buf(),
                message,
            }
        })?;

        std::fs::write(path, &bytes).map_err(|source| SqueezeError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(bytes.len() as u64)
    }

    pub fn setting_for(&self, codec: OutputCodec) -> u8 {
        match codec {
            OutputCodec::Jpeg => self.jpeg_quality,
            OutputCodec::Png => self.png_compression,
        }
    }

    pub fn compress_to_bytes(
        &self,
        image: &DynamicImage,
        codec: OutputCodec,
    ) -> std::result::Result<Vec<u8>, String> {
        match codec {
            OutputCodec::Jpeg => self.encode_jpeg(image),
            OutputCodec::Png => self.encode_png(image),
        }
    }

    fn encode_jpeg(&self, image: &DynamicImage) -> std::result::Result<Vec<u8>, String> {
        let width = u16::try_from(image.width())
            .map_err(|_| format!("width {} exceeds the JPEG limit of 65535", image.width()))?;
        let height = u16::try_from(image.height())
            .map_err(|_| format!("height {} exceeds the JPEG limit of 65535", image.height()))?;

        // JPEG carries neither alpha nor high bit depth; grayscale stays grayscale.
        let (pixels, color_type): (Cow<'_, [u8]>, _) = match image {
            DynamicImage::ImageLuma8(gray) => (Cow::Borrowed(gray.as_raw()), JpegColorType::Luma),
            DynamicImage::ImageLuma16(_) => {
                (Cow::Owned(image.to_luma8().into_raw()), JpegColorType::Luma)
            }
            DynamicImage::ImageRgb8(rgb) => (Cow::Borrowed(rgb.as_raw()), JpegColorType::Rgb),
            other => {
                log::debug!("Converting {:?} to RGB for JPEG output", other.color());
                (Cow::Owned(other.to_rgb8().into_raw()), JpegColorType::Rgb)
            }
        };

        let mut buffer = Vec::new();
        let mut encoder = JpegEncoder::new(&mut buffer, self.jpeg_quality);
        encoder.set_progressive(true);
        encoder.set_optimized_huffman_tables(true);
        encoder
            .encode(&pixels, width, height, color_type)
            .map_err(|e| e.to_string())?;

        Ok(buffer)
    }

    fn encode_png(&self, image: &DynamicImage) -> std::result::Result<Vec<u8>, String> {
        let mut buffer = Vec::new();
        let encoder =
            PngEncoder::new_with_quality(&mut buffer, CompressionType::Fast, PngFilterType::Adaptive);

        // PNG has no float samples.
        let written = match image.color() {
            ColorType::Rgb32F => DynamicImage::ImageRgb16(image.to_rgb16()).write_with_encoder(encoder),
            ColorType::Rgba32F => {
                DynamicImage::ImageRgba16(image.to_rgba16()).write_with_encoder(encoder)
            }
            _ => image.write_with_encoder(encoder),
        };
        written.map_err(|e| e.to_string())?;

        self.optimize_png_bytes(&buffer)
    }

    /// Lossless recompression at the requested zlib-style level (0 stores, 9 squeezes hardest).
    fn optimize_png_bytes(&self, data: &[u8]) -> std::result::Result<Vec<u8>, String> {
        let mut options = Options::from_preset(png_preset(self.png_compression));
        options.deflate = Deflaters::Libdeflater {
            compression: self.png_compression,
        };
        options.force = true;
        // Recompress only; the color type, bit depth and palette stay as encoded.
        options.bit_depth_reduction = false;
        options.color_type_reduction = false;
        options.palette_reduction = false;
        options.grayscale_reduction = false;

        optimize_from_memory(data, &options).map_err(|e| format!("PNG optimization failed: {}", e))
    }
}

/// Maps the 0-9 compression level onto oxipng's 0-6 optimization presets.
fn png_preset(level: u8) -> u8 {
    match level {
        0..=1 => 0,
        2..=3 => 1,
        4..=6 => 2,
        7..=8 => 3,
        _ => 4,
    }
}
