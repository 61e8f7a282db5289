//! Spawning and supervising ffmpeg processes.
//!
//! The spawner is behind a trait so dispatch logic can be exercised in tests
//! without a real ffmpeg binary. The execution model is deliberately simple:
//! one blocking, synchronous invocation per operation, no cancellation, no
//! timeout; a non-zero exit is terminal and carries whatever error output
//! ffmpeg produced.

use std::io;
use std::process::ExitStatus;

use ffmpeg_sidecar::child::FfmpegChild;
use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};
use log::{debug, warn};

use crate::command::CommandSpec;
use crate::error::{CoreError, CoreResult};

/// An active ffmpeg process.
pub trait FfmpegProcess {
    /// Feeds every event from the running process to `handler`.
    fn handle_events<F>(&mut self, handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>;

    /// Waits for the process to finish and returns its exit status.
    fn wait(&mut self) -> CoreResult<ExitStatus>;
}

/// Something that can launch an ffmpeg invocation.
pub trait FfmpegSpawner {
    type Process: FfmpegProcess;

    /// Spawns the command, consuming the command object.
    fn spawn(&self, cmd: FfmpegCommand) -> CoreResult<Self::Process>;
}

/// Wrapper around [`FfmpegChild`] implementing [`FfmpegProcess`].
pub struct SidecarProcess(FfmpegChild);

impl FfmpegProcess for SidecarProcess {
    fn handle_events<F>(&mut self, mut handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>,
    {
        let events = self.0.iter().map_err(|e| {
            CoreError::CommandStart(
                "ffmpeg".to_string(),
                io::Error::new(
                    io::ErrorKind::Other,
                    format!("could not read process events: {e}"),
                ),
            )
        })?;
        for event in events {
            handler(event)?;
        }
        Ok(())
    }

    fn wait(&mut self) -> CoreResult<ExitStatus> {
        Ok(self.0.wait()?)
    }
}

/// Concrete [`FfmpegSpawner`] backed by `ffmpeg-sidecar`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SidecarSpawner;

impl FfmpegSpawner for SidecarSpawner {
    type Process = SidecarProcess;

    fn spawn(&self, mut cmd: FfmpegCommand) -> CoreResult<Self::Process> {
        cmd.spawn()
            .map(SidecarProcess)
            .map_err(|e| CoreError::CommandStart("ffmpeg".to_string(), e))
    }
}

/// Runs one command spec to completion.
///
/// Warnings and progress lines are forwarded to the log; error lines are
/// collected and returned in [`CoreError::CommandFailed`] when the process
/// exits non-zero. Nothing is retried and partially written output files are
/// left where ffmpeg put them.
pub fn execute_command<S: FfmpegSpawner>(
    spawner: &S,
    spec: &CommandSpec,
    overwrite: bool,
) -> CoreResult<()> {
    let mut cmd = FfmpegCommand::new();
    if overwrite {
        cmd.arg("-y");
    }
    cmd.args(spec.args().iter().map(String::as_str));

    let mut process = spawner.spawn(cmd)?;

    let mut error_lines: Vec<String> = Vec::new();
    process.handle_events(|event| {
        match event {
            FfmpegEvent::Log(LogLevel::Error | LogLevel::Fatal, line) => {
                error_lines.push(line);
            }
            FfmpegEvent::Error(line) => error_lines.push(line),
            FfmpegEvent::Log(LogLevel::Warning, line) => warn!("ffmpeg: {line}"),
            FfmpegEvent::Progress(progress) => {
                debug!("ffmpeg progress: time={}", progress.time);
            }
            _ => {}
        }
        Ok(())
    })?;

    let status = process.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(CoreError::CommandFailed {
            tool: "ffmpeg".to_string(),
            status,
            detail: error_lines.join("\n"),
        })
    }
}
