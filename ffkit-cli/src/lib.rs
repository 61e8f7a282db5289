// ffkit-cli/src/lib.rs
//
// Library portion of the ffkit CLI application.
// Contains argument definitions and command dispatch.

pub mod cli;
pub mod commands;
pub mod logging;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands};
pub use commands::run;
