//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{BuildOptions, BuildUseCase, WatchUseCase};
use crate::infrastructure::{LocalFs, ProcessRunner};

/// Type alias for the concrete BuildUseCase with all dependencies
pub type ConcreteBuildUseCase = BuildUseCase<LocalFs, ProcessRunner>;

/// Type alias for the concrete WatchUseCase with all dependencies
pub type ConcreteWatchUseCase = WatchUseCase<LocalFs, ProcessRunner>;

/// Create a build use case backed by the real filesystem and compiler processes
pub fn create_build_use_case() -> ConcreteBuildUseCase {
    BuildUseCase::new(LocalFs::new(), ProcessRunner::new())
}

/// Create a watch use case for `options`
pub fn create_watch_use_case(options: BuildOptions) -> ConcreteWatchUseCase {
    WatchUseCase::new(LocalFs::new(), ProcessRunner::new(), options)
}
