//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local, Memory)
//! - `events/` - Event sinks (JSON)
//! - `process` - Compiler process execution
//! - `toolchain` - Compiler executable lookup

pub mod events;
pub mod fs;
pub mod process;
pub mod toolchain;

// Re-export for convenience
pub use events::JsonEventSink;
pub use fs::{LocalFs, MemoryFs};
pub use process::ProcessRunner;
pub use toolchain::{resolve_compiler, ToolchainEnv};
