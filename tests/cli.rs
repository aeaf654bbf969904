use clap::Parser;
use pixelpad::cli::CliArgs;
use pixelpad::io::SaveFormat;

#[test]
fn defaults_match_the_classic_canvas() {
    let args = CliArgs::parse_from(["pixelpad"]);
    assert_eq!(args.width, 800);
    assert_eq!(args.height, 600);
    assert_eq!(args.history, 32);
    assert_eq!(args.save_format(), SaveFormat::Png);
    assert!(args.validate().is_ok());
}

#[test]
fn explicit_arguments_are_honored() {
    let args = CliArgs::parse_from([
        "pixelpad",
        "--width",
        "320",
        "--height",
        "240",
        "--history",
        "8",
        "--export-dir",
        "shots",
        "--format",
        "bmp",
    ]);
    assert_eq!(args.width, 320);
    assert_eq!(args.height, 240);
    assert_eq!(args.history, 8);
    assert_eq!(args.export_dir, std::path::PathBuf::from("shots"));
    assert_eq!(args.save_format(), SaveFormat::Bmp);
    assert!(args.validate().is_ok());
}

#[test]
fn zero_dimensions_fail_validation() {
    let args = CliArgs::parse_from(["pixelpad", "--width", "0"]);
    assert!(args.validate().is_err());
}

#[test]
fn zero_history_capacity_fails_validation() {
    let args = CliArgs::parse_from(["pixelpad", "--history", "0"]);
    assert!(args.validate().is_err());
}

#[test]
fn unknown_export_format_fails_validation() {
    let args = CliArgs::parse_from(["pixelpad", "--format", "tiff"]);
    assert!(args.validate().is_err());
}
