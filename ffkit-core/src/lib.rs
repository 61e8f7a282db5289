//! Core library for assembling and dispatching ffmpeg command lines.
//!
//! This crate holds the logic behind the ffkit front-end: a static registry
//! of the file extensions ffmpeg can read and write, a builder that turns a
//! [`MediaOperation`] plus input/output paths into an argument vector, and a
//! thin execution boundary around the ffmpeg process itself. Validation is
//! strictly front-loaded: every field and extension check happens before a
//! process is spawned.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use ffkit_core::{plan_command, ExtensionRegistry, MediaOperation};
//! use ffkit_core::external::{execute_command, SidecarSpawner};
//! use std::path::Path;
//!
//! let registry = ExtensionRegistry::new();
//! let spec = plan_command(
//!     &registry,
//!     Path::new("/videos/in.mp4"),
//!     Path::new("/videos/out.avi"),
//!     &MediaOperation::Convert,
//! ).unwrap();
//!
//! execute_command(&SidecarSpawner, &spec, false).unwrap();
//! ```

pub mod command;
pub mod error;
pub mod external;
pub mod formats;
pub mod operations;
pub mod timecode;
pub mod validation;

// Re-exports for public API
pub use command::{build_command, plan_command, CommandSpec};
pub use error::{CoreError, CoreResult, FieldError, FieldErrors, FieldProblem};
pub use formats::{extension_token, ExtensionRegistry};
pub use operations::{MediaOperation, RotateDirection};
pub use timecode::{duration_between, format_seconds, Timestamp};
