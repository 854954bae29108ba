//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! Terminal rendering lives in the binary's `ui` module.
//!
//! ## Usage
//!
//! ```ignore
//! use shaderbake::presentation::factory;
//!
//! let use_case = factory::create_build_use_case();
//! let result = use_case.execute(&options)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{BuildArgs, Cli, ColorWhen, Commands};
pub use factory::{create_build_use_case, create_watch_use_case, ConcreteBuildUseCase, ConcreteWatchUseCase};
