// ffkit-cli/tests/cli_parsing.rs

use std::path::PathBuf;

use clap::Parser;
use ffkit_cli::cli::{Cli, Commands};
use ffkit_core::RotateDirection;

#[test]
fn parse_convert_basic_args() {
    let cli = Cli::parse_from(["ffkit", "convert", "-i", "in.avi", "-o", "out.mp4"]);
    assert!(!cli.overwrite);
    match cli.command {
        Commands::Convert(io) => {
            assert_eq!(io.input, PathBuf::from("in.avi"));
            assert_eq!(io.output, PathBuf::from("out.mp4"));
        }
        other => panic!("expected convert, got {other:?}"),
    }
}

#[test]
fn parse_compress_quality_is_optional() {
    let cli = Cli::parse_from(["ffkit", "compress", "-i", "in.mp4", "-o", "out.mp4"]);
    match cli.command {
        Commands::Compress(args) => assert!(args.quality.is_none()),
        other => panic!("expected compress, got {other:?}"),
    }

    let cli = Cli::parse_from([
        "ffkit", "compress", "-i", "in.mp4", "-o", "out.mp4", "--quality", "42",
    ]);
    match cli.command {
        Commands::Compress(args) => assert_eq!(args.quality, Some(42)),
        other => panic!("expected compress, got {other:?}"),
    }
}

#[test]
fn parse_rotate_direction() {
    let cli = Cli::parse_from([
        "ffkit",
        "rotate",
        "-i",
        "in.mp4",
        "-o",
        "out.mp4",
        "--direction",
        "flip-vertical",
    ]);
    match cli.command {
        Commands::Rotate(args) => assert_eq!(args.direction, RotateDirection::FlipVertical),
        other => panic!("expected rotate, got {other:?}"),
    }
}

#[test]
fn rotate_rejects_unknown_directions() {
    let result = Cli::try_parse_from([
        "ffkit",
        "rotate",
        "-i",
        "in.mp4",
        "-o",
        "out.mp4",
        "--direction",
        "diagonal",
    ]);
    assert!(result.is_err());
}

#[test]
fn parse_trim_passes_timestamps_through() {
    // Timestamp validation lives in the core builder, not in clap.
    let cli = Cli::parse_from([
        "ffkit", "trim", "-i", "in.mp4", "-o", "out.mp4", "--begin", "not-a-time", "--end",
        "00:01:00",
    ]);
    match cli.command {
        Commands::Trim(args) => {
            assert_eq!(args.begin, "not-a-time");
            assert_eq!(args.end, "00:01:00");
        }
        other => panic!("expected trim, got {other:?}"),
    }
}

#[test]
fn parse_crop_defaults_position_to_origin() {
    let cli = Cli::parse_from([
        "ffkit", "crop", "-i", "in.mp4", "-o", "out.mp4", "--width", "1280", "--height", "720",
    ]);
    match cli.command {
        Commands::Crop(args) => {
            assert_eq!(args.width, "1280");
            assert_eq!(args.height, "720");
            assert_eq!(args.x, "0");
            assert_eq!(args.y, "0");
        }
        other => panic!("expected crop, got {other:?}"),
    }
}

#[test]
fn parse_concat_images_defaults_framerate() {
    let cli = Cli::parse_from([
        "ffkit",
        "concat-images",
        "-i",
        "image%01d.gif",
        "-o",
        "out.mp4",
        "--quality",
        "18",
    ]);
    match cli.command {
        Commands::ConcatImages(args) => {
            assert_eq!(args.framerate, "30");
            assert_eq!(args.quality, "18");
        }
        other => panic!("expected concat-images, got {other:?}"),
    }
}

#[test]
fn overwrite_flag_is_global() {
    let cli = Cli::parse_from(["ffkit", "convert", "-i", "in.avi", "-o", "out.mp4", "-y"]);
    assert!(cli.overwrite);
}

#[test]
fn missing_required_io_args_fail_to_parse() {
    assert!(Cli::try_parse_from(["ffkit", "convert", "-i", "in.avi"]).is_err());
    assert!(Cli::try_parse_from(["ffkit", "trim", "-i", "a.mp4", "-o", "b.mp4"]).is_err());
}
