//! Build Module
//!
//! Orchestrates an incremental shader build.
//!
//! ## Structure
//!
//! - `options` - Resolved settings (`BuildOptions`)
//! - `result` - Outcome of a run (`BuildResult`)
//! - `use_case` - Core use case logic (`BuildUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use shaderbake::application::build::{BuildOptions, BuildUseCase};
//!
//! let use_case = BuildUseCase::new(LocalFs::new(), ProcessRunner::new());
//! let result = use_case.execute(&BuildOptions::from_config(&config, compiler))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::BuildOptions;
pub use result::BuildResult;
pub use use_case::BuildUseCase;
