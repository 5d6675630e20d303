// img-squeeze/src/processors/batch.rs
use crate::core::processor::ImageProcessor;
use crate::core::{OutputCodec, ProcessConfig, ProcessedImage, ProcessingRequest, ProcessingStats};
use crate::core::{Result, SqueezeError};
use std::path::{Path, PathBuf};

/// Processes inputs one at a time, in order. Per-file failures are logged and skipped.
pub struct BatchProcessor {
    config: ProcessConfig,
}

impl BatchProcessor {
    pub fn new(config: ProcessConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ProcessConfig {
        &self.config
    }

    /// Creates the output directory tree. Already existing is fine.
    pub fn prepare_output_dir(&self) -> Result<()> {
        let output_dir = &self.config.output_dir;

        if output_dir.exists() && !output_dir.is_dir() {
            return Err(SqueezeError::InvalidParameter(format!(
                "Output path exists but is not a directory: {}",
                output_dir.display()
            )));
        }

        std::fs::create_dir_all(output_dir)?;
        Ok(())
    }

    pub fn run<P: AsRef<Path>>(&self, inputs: &[P]) -> Result<ProcessingStats> {
        self.prepare_output_dir()?;

        log::debug!(
            "Processing {} inputs into {}",
            inputs.len(),
            self.config.output_dir.display()
        );

        let mut stats = ProcessingStats::default();
        for input in inputs {
            let input = input.as_ref();
            match self.process_one(input) {
                Ok(processed) => {
                    report_success(&processed);
                    stats.record_success(&processed);
                }
                Err(error) => {
                    report_skip(&error);
                    stats.record_skip(input, error);
                }
            }
        }

        Ok(stats)
    }

    pub fn process_one(&self, input: &Path) -> Result<ProcessedImage> {
        if !input.is_file() {
            return Err(SqueezeError::NotAFile(PathBuf::from(input)));
        }

        let request = ProcessingRequest::new(input, &self.config);
        ImageProcessor::new(request).process()
    }
}

fn report_success(processed: &ProcessedImage) {
    let label = match processed.codec {
        OutputCodec::Jpeg => "JPEG quality",
        OutputCodec::Png => "PNG compression",
    };
    println!(
        "Saved {} ({}: {})",
        processed.output_path.display(),
        label,
        processed.setting
    );
}

fn report_skip(error: &SqueezeError) {
    match error {
        SqueezeError::NotAFile(_) | SqueezeError::UnsupportedFormat { .. } => {
            log::warn!("{}. Skipping.", error)
        }
        _ => log::error!("{}. Skipping.", error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ResizeAlgorithm;

    fn batch_into(output_dir: &Path) -> BatchProcessor {
        BatchProcessor::new(ProcessConfig {
            output_dir: output_dir.to_path_buf(),
            max_dim: 64,
            algorithm: ResizeAlgorithm::Nearest,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = ProcessConfig { jpeg_quality: 0, ..Default::default() };
        assert!(BatchProcessor::new(config).is_err());
    }

    #[test]
    fn test_prepare_output_dir_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let batch = batch_into(&dir.path().join("a").join("b"));

        batch.prepare_output_dir().unwrap();
        batch.prepare_output_dir().unwrap();
        assert!(dir.path().join("a/b").is_dir());
    }

    #[test]
    fn test_prepare_output_dir_rejects_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("taken");
        std::fs::write(&file, b"x").unwrap();

        assert!(batch_into(&file).prepare_output_dir().is_err());
    }

    #[test]
    fn test_run_skips_and_continues() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.png");
        image::RgbImage::new(128, 32).save(&good).unwrap();
        let missing = dir.path().join("missing.png");
        let folder = dir.path().join("folder.png");
        std::fs::create_dir(&folder).unwrap();
        let out_dir = dir.path().join("out");

        let stats = batch_into(&out_dir).run(&[&missing, &folder, &good]).unwrap();

        assert_eq!(stats.processed_count, 1);
        assert_eq!(stats.skipped_count(), 2);
        assert!(stats
            .skipped
            .iter()
            .all(|(_, e)| matches!(e, SqueezeError::NotAFile(_))));
        assert_eq!(image::image_dimensions(out_dir.join("good.png")).unwrap(), (64, 16));
    }
}
