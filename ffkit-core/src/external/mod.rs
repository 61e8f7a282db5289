//! Interactions with the external ffmpeg tool.
//!
//! Everything that leaves the process lives here: the dependency probe and
//! the spawn/wait machinery. Command construction itself is in
//! [`crate::command`] and never touches this module.

use std::io;
use std::process::{Command, Stdio};

use crate::error::{CoreError, CoreResult};

/// Contains traits and implementations for executing ffmpeg commands
pub mod ffmpeg_executor;

pub use ffmpeg_executor::{
    execute_command, FfmpegProcess, FfmpegSpawner, SidecarProcess, SidecarSpawner,
};

/// Checks that a required external command is present and executable.
///
/// Runs `<cmd_name> -version` with all output discarded and only looks at
/// whether the process could be started. Called once per run, before any
/// user-facing work.
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let probe = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match probe {
        Ok(_) => {
            log::debug!("found dependency: {cmd_name}");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("dependency '{cmd_name}' not found");
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) => Err(CoreError::CommandStart(cmd_name.to_string(), e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_dependency_is_reported_by_name() {
        let err = check_dependency("ffkit-test-no-such-binary").unwrap_err();
        match err {
            CoreError::DependencyNotFound(name) => {
                assert_eq!(name, "ffkit-test-no-such-binary");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
