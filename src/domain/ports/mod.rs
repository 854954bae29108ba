//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod build_events;
pub mod command_runner;
pub mod file_system;

pub use build_events::{BuildEvent, BuildEventSink, NoopEventSink};
pub use command_runner::{CommandOutput, CommandRunner};
pub use file_system::{DirFilter, FileSystem, FileWalk, FsError, FsResult};
