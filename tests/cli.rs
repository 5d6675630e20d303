use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

fn img_squeeze() -> Command {
    Command::cargo_bin("img-squeeze").unwrap()
}

#[test]
fn test_missing_input_is_usage_error() {
    img_squeeze()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("FILE"));
}

#[test]
fn test_out_of_range_quality_fails_before_processing() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.child("out");

    img_squeeze()
        .arg("--jpeg-quality")
        .arg("96")
        .arg("-o")
        .arg(output_dir.path())
        .arg("photo.jpg")
        .assert()
        .failure()
        .code(2);

    img_squeeze()
        .args(["--png-compression", "10", "icon.png"])
        .arg("-o")
        .arg(output_dir.path())
        .assert()
        .failure();

    output_dir.assert(predicate::path::missing());
}

#[test]
fn test_missing_file_warns_and_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.child("nested/out");

    img_squeeze()
        .arg("-o")
        .arg(output_dir.path())
        .arg(temp_dir.child("nope.jpg").path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning:").and(predicate::str::contains("is not a file")))
        .stdout(predicate::str::contains("Processing complete. Output is in"));

    output_dir.assert(predicate::path::is_dir());
}

#[test]
fn test_processes_files_and_reports() {
    let temp_dir = TempDir::new().unwrap();
    let photo = temp_dir.child("photo.jpg");
    image::RgbImage::new(400, 300).save(photo.path()).unwrap();
    let icon = temp_dir.child("icon.png");
    image::RgbaImage::new(50, 50).save(icon.path()).unwrap();
    let corrupt = temp_dir.child("broken.png");
    corrupt.write_str("garbage").unwrap();
    let output_dir = temp_dir.child("out");

    img_squeeze()
        .args(["--max-dim", "200", "--filter", "nearest", "--jpeg-quality", "70"])
        .arg("--output-dir")
        .arg(output_dir.path())
        .arg(photo.path())
        .arg(corrupt.path())
        .arg(icon.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("(JPEG quality: 70)"))
        .stdout(predicate::str::contains("(PNG compression: 6)"))
        .stdout(predicate::str::contains("2 saved, 1 skipped"))
        .stderr(predicate::str::contains("Error: Could not open"));

    assert_eq!(image::image_dimensions(output_dir.child("photo.jpg").path()).unwrap(), (200, 150));
    assert_eq!(image::image_dimensions(output_dir.child("icon.png").path()).unwrap(), (50, 50));
    output_dir.child("broken.png").assert(predicate::path::missing());
}

#[test]
fn test_unsupported_extension_warning() {
    let temp_dir = TempDir::new().unwrap();
    let gif = temp_dir.child("anim.gif");
    image::RgbaImage::new(4, 4).save(gif.path()).unwrap();
    let output_dir = temp_dir.child("out");

    img_squeeze()
        .arg("-o")
        .arg(output_dir.path())
        .arg(gif.path())
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Warning: Unsupported format '.gif' for anim.gif. Skipping.",
        ));

    output_dir.child("anim.gif").assert(predicate::path::missing());
}

#[test]
fn test_resize_is_reported_before_a_failed_save() {
    let temp_dir = TempDir::new().unwrap();
    let photo = temp_dir.child("photo.jpg");
    image::RgbImage::new(300, 100).save(photo.path()).unwrap();
    let output_dir = temp_dir.child("out");
    // A directory squatting on the output name makes the write fail.
    output_dir.child("photo.jpg").create_dir_all().unwrap();

    img_squeeze()
        .args(["--max-dim", "150", "--filter", "nearest"])
        .arg("-o")
        .arg(output_dir.path())
        .arg(photo.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Resizing photo.jpg..."))
        .stdout(predicate::str::contains("Saved").not())
        .stderr(predicate::str::contains("Error: Could not save"));
}
