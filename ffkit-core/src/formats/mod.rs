//! Format-compatibility registry for input and output extensions.
//!
//! The registry is a static allow-list, initialized once at startup and never
//! mutated. Membership is an exact, case-sensitive match on the stored token
//! (leading `.` included); anything absent simply answers `false`. There is
//! no probing of the locally installed ffmpeg, so the tables can disagree
//! with that binary's build configuration.

mod tables;

use std::collections::HashSet;
use std::io::{self, BufRead};
use std::path::Path;

use once_cell::sync::Lazy;

static DEMUXER_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| tables::DEMUXER_EXTENSIONS.iter().copied().collect());

static MUXER_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| tables::MUXER_EXTENSIONS.iter().copied().collect());

/// Answers whether an extension token is usable as transcoding input or
/// output. Read-only after initialization, so it is freely shareable.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtensionRegistry;

impl ExtensionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// True if ffmpeg is expected to demux files with this extension token.
    #[must_use]
    pub fn is_supported_input(&self, ext: &str) -> bool {
        DEMUXER_SET.contains(ext)
    }

    /// True if ffmpeg is expected to mux files with this extension token.
    #[must_use]
    pub fn is_supported_output(&self, ext: &str) -> bool {
        MUXER_SET.contains(ext)
    }

    /// Every token the registry accepts as input.
    #[must_use]
    pub fn input_extensions(&self) -> &'static [&'static str] {
        tables::DEMUXER_EXTENSIONS
    }

    /// Every token the registry accepts as output.
    #[must_use]
    pub fn output_extensions(&self) -> &'static [&'static str] {
        tables::MUXER_EXTENSIONS
    }
}

/// Extracts the registry token (`.ext`, original casing) from a path.
/// Returns `None` when the path has no extension or it is not valid UTF-8.
#[must_use]
pub fn extension_token(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
}

/// Width of the capability-flag column in `ffmpeg -demuxers` / `-muxers`
/// listings. Everything before this column is discarded by the loader.
const FORMAT_LISTING_PREFIX: usize = 5;

/// Recovers extension tokens from an `ffmpeg -demuxers` / `-muxers` listing.
///
/// Each entry line carries a fixed-width flag prefix followed by the format
/// name, then a description. The loader strips the prefix, prepends `.`, and
/// keeps characters up to the first space. This is the one-off utility the
/// static tables in this module were generated with; it is not consulted at
/// runtime.
pub fn parse_format_listing<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut tokens = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let Some(rest) = line.get(FORMAT_LISTING_PREFIX..) else {
            continue;
        };
        let name: String = rest.chars().take_while(|c| *c != ' ').collect();
        if !name.is_empty() {
            tokens.push(format!(".{name}"));
        }
    }
    Ok(tokens)
}
