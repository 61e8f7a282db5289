// ffkit-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};
use ffkit_core::RotateDirection;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "ffkit: front-end for common ffmpeg transformations",
    long_about = "Assembles the ffmpeg invocation for a chosen media operation, checks the \
                  input and output extensions against the supported-format tables, and runs \
                  the tool."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pass -y to ffmpeg so an existing output file is overwritten
    #[arg(short = 'y', long = "overwrite", global = true, default_value_t = false)]
    pub overwrite: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Re-encode a media file with ffmpeg's default settings
    Compress(CompressArgs),
    /// Repackage streams into a new container without re-encoding
    Convert(IoArgs),
    /// Keep the audio stream, dropping video
    ExtractAudio(IoArgs),
    /// Keep the video stream, dropping audio
    ExtractImage(IoArgs),
    /// Rotate or mirror the video stream
    Rotate(RotateArgs),
    /// Keep the span between two timestamps, stream-copied
    Trim(TrimArgs),
    /// Crop the video to an explicit rectangle
    Crop(CropArgs),
    /// Build a video from a numbered image sequence
    ConcatImages(ConcatImagesArgs),
    /// Concatenate the media files listed in a manifest
    ConcatVideos(ConcatVideosArgs),
}

/// Input and output paths shared by every operation.
#[derive(Args, Debug)]
pub struct IoArgs {
    /// Input media file
    #[arg(short = 'i', long = "input", required = true, value_name = "INPUT")]
    pub input: PathBuf,

    /// Output media file
    #[arg(short = 'o', long = "output", required = true, value_name = "OUTPUT")]
    pub output: PathBuf,
}

#[derive(Args, Debug)]
pub struct CompressArgs {
    #[command(flatten)]
    pub io: IoArgs,

    /// Quality level (0-100). Accepted for forward compatibility but not yet
    /// applied to the generated command; a warning is logged when set.
    #[arg(long, value_name = "LEVEL")]
    pub quality: Option<u8>,
}

#[derive(Args, Debug)]
pub struct RotateArgs {
    #[command(flatten)]
    pub io: IoArgs,

    /// One of: right, left, 180, flip-vertical, flip-horizontal
    #[arg(long, value_name = "DIRECTION", value_parser = RotateDirection::from_str)]
    pub direction: RotateDirection,
}

#[derive(Args, Debug)]
pub struct TrimArgs {
    #[command(flatten)]
    pub io: IoArgs,

    /// Start of the span to keep, as HH:MM:SS
    #[arg(long, value_name = "HH:MM:SS")]
    pub begin: String,

    /// End of the span to keep, as HH:MM:SS
    #[arg(long, value_name = "HH:MM:SS")]
    pub end: String,
}

#[derive(Args, Debug)]
pub struct CropArgs {
    #[command(flatten)]
    pub io: IoArgs,

    /// Width of the kept rectangle, in pixels
    #[arg(long, value_name = "PIXELS")]
    pub width: String,

    /// Height of the kept rectangle, in pixels
    #[arg(long, value_name = "PIXELS")]
    pub height: String,

    /// Left edge of the kept rectangle
    #[arg(long, value_name = "PIXELS", default_value = "0")]
    pub x: String,

    /// Top edge of the kept rectangle
    #[arg(long, value_name = "PIXELS", default_value = "0")]
    pub y: String,
}

#[derive(Args, Debug)]
#[command(after_help = "The input must be a printf-style sequence pattern: for frames named \
                        image001.jpeg, image002.jpeg, ... pass image%01d.jpeg. Renaming the \
                        frames to match the pattern is a manual step.")]
pub struct ConcatImagesArgs {
    #[command(flatten)]
    pub io: IoArgs,

    /// Frames per second of the produced video
    #[arg(long, value_name = "FPS", default_value = "30")]
    pub framerate: String,

    /// x264 CRF value for the produced video (0 is lossless, 51 is worst)
    #[arg(long, value_name = "CRF")]
    pub quality: String,
}

#[derive(Args, Debug)]
#[command(after_help = "The input is a .txt manifest listing the clips to join in order, one \
                        line per clip:\n\n  file video1.mp4\n  file video2.mp4\n\nManifest \
                        contents are handed to ffmpeg without inspection.")]
pub struct ConcatVideosArgs {
    #[command(flatten)]
    pub io: IoArgs,
}
