//! shaderbake - incremental, dependency-aware shader build tool
//!
//! shaderbake walks a tree of GLSL or Slang sources, follows their
//! `#include`/`import` directives, and invokes `glslc` or `slangc` in
//! parallel for every output that is older than its source or any of its
//! transitive dependencies.
//!
//! ## Layers
//!
//! - `domain` - entities, value objects, ports and pure services
//! - `application` - build and watch use cases, pipeline and executor
//! - `infrastructure` - filesystem, compiler processes, toolchain lookup, JSON events
//! - `config` - `shaderbake.toml`, environment and CLI layering
//! - `presentation` - CLI definition and use case factory

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{BuildOptions, BuildResult, BuildUseCase, WatchEvent, WatchUseCase};
pub use config::{Config, ConfigOverrides, ConfigWarning};
pub use domain::entities::{BuildPlan, CompileResult, CompileTask, OutputTarget, RunStatus, RunSummary};
pub use domain::value_objects::{BuildMode, Language, OutputFormat};
pub use error::{BakeError, BakeResult};
