//! Translation of parsed arguments into core operations, and dispatch.
//!
//! Every run follows the same sequence: confirm ffmpeg is reachable, confirm
//! the input exists (where the operation expects one concrete file), consult
//! the extension registry, build the argument vector, then hand it to the
//! executor. Nothing is spawned until every check has passed.

use std::path::Path;

use ffkit_core::external::{check_dependency, execute_command, SidecarSpawner};
use ffkit_core::{plan_command, CoreError, CoreResult, ExtensionRegistry, MediaOperation};
use log::info;
use owo_colors::OwoColorize;

use crate::cli::{Commands, IoArgs};

/// Runs one parsed subcommand to completion.
pub fn run(command: Commands, overwrite: bool) -> CoreResult<()> {
    let (io, operation) = resolve(command);
    dispatch(&io.input, &io.output, &operation, overwrite)
}

/// Maps a subcommand onto the core operation it requests.
fn resolve(command: Commands) -> (IoArgs, MediaOperation) {
    match command {
        Commands::Compress(args) => (
            args.io,
            MediaOperation::Compress {
                quality: args.quality,
            },
        ),
        Commands::Convert(io) => (io, MediaOperation::Convert),
        Commands::ExtractAudio(io) => (io, MediaOperation::ExtractAudio),
        Commands::ExtractImage(io) => (io, MediaOperation::ExtractImage),
        Commands::Rotate(args) => (
            args.io,
            MediaOperation::Rotate {
                direction: args.direction,
            },
        ),
        Commands::Trim(args) => (
            args.io,
            MediaOperation::Trim {
                begin: args.begin,
                end: args.end,
            },
        ),
        Commands::Crop(args) => (
            args.io,
            MediaOperation::Crop {
                width: args.width,
                height: args.height,
                x: args.x,
                y: args.y,
            },
        ),
        Commands::ConcatImages(args) => (
            args.io,
            MediaOperation::ConcatenateImages {
                framerate: args.framerate,
                quality: args.quality,
            },
        ),
        Commands::ConcatVideos(args) => (args.io, MediaOperation::ConcatenateVideos),
    }
}

fn dispatch(
    input: &Path,
    output: &Path,
    operation: &MediaOperation,
    overwrite: bool,
) -> CoreResult<()> {
    check_dependency("ffmpeg")?;

    if operation.expects_existing_input() && !input.is_file() {
        return Err(CoreError::InputNotFound(input.display().to_string()));
    }

    let registry = ExtensionRegistry::new();
    let spec = plan_command(&registry, input, output, operation)?;
    info!("running: ffmpeg {spec}");

    execute_command(&SidecarSpawner, &spec, overwrite)?;

    println!(
        "{} {} wrote {}",
        "done:".green().bold(),
        operation.name(),
        output.display()
    );
    Ok(())
}
