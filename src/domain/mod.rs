//! Domain Layer
//!
//! Pure build logic for shaderbake.
//!
//! ## Structure
//!
//! - `entities/` - Values flowing through a build (SourceFile, CompileTask, RunSummary)
//! - `value_objects/` - Immutable settings types (Language, BuildMode, OutputFormat)
//! - `services/` - Discovery, dependency resolution, staleness, task building
//! - `ports/` - Interfaces for filesystem, process execution and event reporting
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - files and processes are reached through ports
//! 2. **Deterministic** - output paths and task lists depend only on inputs
//! 3. **Ports & Adapters** - infrastructure implements the traits in `ports/`

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
