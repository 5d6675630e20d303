pub mod cli;
pub mod core;
mod processors;
mod utils;

pub use cli::{Algorithm, Cli};
pub use crate::core::processor::ImageProcessor;
pub use crate::core::{
    OutputCodec, ProcessConfig, ProcessedImage, ProcessingRequest,
    ProcessingStats, ResizeAlgorithm, Result, SqueezeError,
};
pub use processors::{fit_long_edge, BatchProcessor, Compressor, Loader, Resizer};
pub use utils::{calculate_savings, format_file_size, output_path_for};

/// Runs a whole invocation: validates, prepares the output directory, processes every input.
///
/// Only setup failures are returned as errors. Per-file problems end up in
/// [`ProcessingStats::skipped`].
pub fn run(cli: &Cli) -> anyhow::Result<ProcessingStats> {
    use anyhow::Context;

    let config = cli.process_config();
    let batch = BatchProcessor::new(config).context("Invalid configuration")?;
    let stats = batch.run(&cli.input_files).with_context(|| {
        format!(
            "Failed to prepare output directory {}",
            batch.config().output_dir.display()
        )
    })?;

    Ok(stats)
}
