//! The closed set of media operations this tool can dispatch to ffmpeg.

use std::str::FromStr;

/// How to rotate or mirror the video stream.
///
/// Each direction maps to exactly one fixed filter-graph token. Unknown
/// directions are unrepresentable; spellings arriving from a command line
/// are rejected by [`FromStr`] before any command is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateDirection {
    /// 90 degrees clockwise.
    Right,
    /// 90 degrees counter-clockwise.
    Left,
    /// Half turn.
    Rotate180,
    /// Mirror top-to-bottom.
    FlipVertical,
    /// Mirror left-to-right.
    FlipHorizontal,
}

impl RotateDirection {
    pub const ALL: [RotateDirection; 5] = [
        RotateDirection::Right,
        RotateDirection::Left,
        RotateDirection::Rotate180,
        RotateDirection::FlipVertical,
        RotateDirection::FlipHorizontal,
    ];

    /// The `-vf` filter graph implementing this direction.
    #[must_use]
    pub fn filter_token(&self) -> &'static str {
        match self {
            RotateDirection::Right => "transpose=1",
            RotateDirection::Left => "transpose=2",
            RotateDirection::Rotate180 => "transpose=2,transpose=2",
            RotateDirection::FlipVertical => "vflip",
            RotateDirection::FlipHorizontal => "hflip",
        }
    }

    /// The command-line spelling of this direction.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            RotateDirection::Right => "right",
            RotateDirection::Left => "left",
            RotateDirection::Rotate180 => "180",
            RotateDirection::FlipVertical => "flip-vertical",
            RotateDirection::FlipHorizontal => "flip-horizontal",
        }
    }
}

impl FromStr for RotateDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|direction| direction.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown rotation direction \"{s}\" (expected one of: right, left, 180, \
                     flip-vertical, flip-horizontal)"
                )
            })
    }
}

/// One media operation with the parameters its command needs.
///
/// Paths are not part of the operation; they are supplied separately when a
/// command is built, so one operation value can be reused across files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaOperation {
    /// Re-encode with ffmpeg's defaults. A quality level is accepted by the
    /// surrounding surface but is not currently threaded into the generated
    /// command; building the command only logs a warning about the unused
    /// value. Known gap, kept visible rather than silently papered over.
    Compress { quality: Option<u8> },
    /// Stream-copy video and audio into a new container. Codec/container
    /// incompatibilities surface from ffmpeg itself.
    Convert,
    /// Drop video, stream-copy audio.
    ExtractAudio,
    /// Drop audio, stream-copy video.
    ExtractImage,
    /// Apply the filter graph for one [`RotateDirection`].
    Rotate { direction: RotateDirection },
    /// Seek to `begin`, stream-copy for the `end - begin` span. Timestamps
    /// are raw `HH:MM:SS` strings validated at build time.
    Trim { begin: String, end: String },
    /// Crop to an explicit rectangle. All four values are raw strings; they
    /// must be non-blank but are not range-checked against the media.
    Crop {
        width: String,
        height: String,
        x: String,
        y: String,
    },
    /// Encode a numbered image sequence into a video. The input must already
    /// be a printf-style pattern ("image%01d.jpeg"); that rewrite is the
    /// caller's manual step.
    ConcatenateImages { framerate: String, quality: String },
    /// Concatenate the files named in a manifest (one `file <path>` line
    /// each). Manifest contents are never inspected here.
    ConcatenateVideos,
}

impl MediaOperation {
    /// Short name used in logs and messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            MediaOperation::Compress { .. } => "compress",
            MediaOperation::Convert => "convert",
            MediaOperation::ExtractAudio => "extract-audio",
            MediaOperation::ExtractImage => "extract-image",
            MediaOperation::Rotate { .. } => "rotate",
            MediaOperation::Trim { .. } => "trim",
            MediaOperation::Crop { .. } => "crop",
            MediaOperation::ConcatenateImages { .. } => "concat-images",
            MediaOperation::ConcatenateVideos => "concat-videos",
        }
    }

    /// Whether the input path names one concrete file that should exist
    /// before dispatch. Concatenation inputs are a sequence pattern or a
    /// manifest that ffmpeg resolves itself, so they are not checked.
    #[must_use]
    pub fn expects_existing_input(&self) -> bool {
        !matches!(
            self,
            MediaOperation::ConcatenateImages { .. } | MediaOperation::ConcatenateVideos
        )
    }
}
