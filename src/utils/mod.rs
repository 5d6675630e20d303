// img-squeeze/src/utils/mod.rs
use crate::core::{Result, SqueezeError};
use std::path::{Path, PathBuf};

/// Output lands in `output_dir` under the input's own file name. No renaming or deduplication.
pub fn output_path_for(input_path: &Path, output_dir: &Path) -> Result<PathBuf> {
    let file_name = input_path.file_name().ok_or_else(|| {
        SqueezeError::InvalidParameter(format!("Invalid file name: {}", input_path.display()))
    })?;

    Ok(output_dir.join(file_name))
}

/// Lowercased extension including the leading dot, or an empty string when there is none.
pub fn dotted_extension(path: &Path) -> String {
    get_file_extension(path)
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default()
}

pub fn get_file_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
}

pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let base = 1024_f64;
    let bytes_f64 = bytes as f64;
    let exponent = ((bytes_f64.log10() / base.log10()).floor() as usize).min(UNITS.len() - 1);
    let size = bytes_f64 / base.powi(exponent as i32);

    format!("{:.2} {}", size, UNITS[exponent])
}

pub fn calculate_savings(size_before: u64, size_after: u64) -> f64 {
    if size_before == 0 {
        return 0.0;
    }

    let savings = (size_before as f64 - size_after as f64) / size_before as f64 * 100.0;
    savings.clamp(0.0, 100.0)
}
