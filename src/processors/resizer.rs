// img-squeeze/src/processors/resizer.rs
use crate::core::ResizeAlgorithm;
use image::{imageops::FilterType, DynamicImage};

/// Caps the long edge of an image at `max_dim`, preserving aspect ratio.
pub struct Resizer {
    algorithm: ResizeAlgorithm,
    max_dim: u32,
}

impl Resizer {
    pub fn new(algorithm: ResizeAlgorithm, max_dim: u32) -> Self {
        Self { algorithm, max_dim }
    }

    /// Returns `None` when the image already fits and is left untouched.
    pub fn resize(&self, image: &DynamicImage) -> Option<DynamicImage> {
        let (width, height) = (image.width(), image.height());
        let (new_width, new_height) = self.target_dimensions(width, height)?;

        log::debug!(
            "Resizing image from {}x{} to {}x{} ({:?})",
            width,
            height,
            new_width,
            new_height,
            self.algorithm
        );

        Some(image.resize_exact(new_width, new_height, self.filter_type()))
    }

    pub fn target_dimensions(&self, width: u32, height: u32) -> Option<(u32, u32)> {
        fit_long_edge(width, height, self.max_dim)
    }

    fn filter_type(&self) -> FilterType {
        match self.algorithm {
            ResizeAlgorithm::Nearest => FilterType::Nearest,
            ResizeAlgorithm::Bilinear => FilterType::Triangle,
            ResizeAlgorithm::Bicubic => FilterType::CatmullRom,
            ResizeAlgorithm::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Long edge becomes exactly `max_dim`, the short edge is floored. Never returns a zero edge.
pub fn fit_long_edge(width: u32, height: u32, max_dim: u32) -> Option<(u32, u32)> {
    if width.max(height) <= max_dim || width == 0 || height == 0 {
        return None;
    }

    let (w, h, max) = (width as u64, height as u64, max_dim as u64);
    let dims = if width >= height {
        (max_dim, (max * h / w).max(1) as u32)
    } else {
        ((max * w / h).max(1) as u32, max_dim)
    };

    Some(dims)
}
