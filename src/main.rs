use clap::Parser;
use img_squeeze::{calculate_savings, format_file_size, Cli};
use log::{Level, LevelFilter};
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .format(|buf, record| {
            let label = match record.level() {
                Level::Error => "Error",
                Level::Warn => "Warning",
                Level::Info => "Info",
                Level::Debug | Level::Trace => "Debug",
            };
            writeln!(buf, "{}: {}", label, record.args())
        })
        .init();

    let stats = match img_squeeze::run(&cli) {
        Ok(stats) => stats,
        Err(e) => {
            log::error!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };

    println!(
        "\nProcessing complete. Output is in '{}'.",
        cli.output_dir.display()
    );
    println!(
        "{} saved, {} skipped ({} -> {}, {:.1}% smaller)",
        stats.processed_count,
        stats.skipped_count(),
        format_file_size(stats.total_size_before),
        format_file_size(stats.total_size_after),
        calculate_savings(stats.total_size_before, stats.total_size_after)
    );

    ExitCode::SUCCESS
}
