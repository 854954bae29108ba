//! Application Layer
//!
//! Use cases that orchestrate the build flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BuildUseCase` - Plan, execute and summarise one incremental build
//! - `WatchUseCase` - Rebuild on every source tree change
//!
//! ## Services
//!
//! - `BuildPipeline` - Discovery, staleness and task building into a `BuildPlan`
//! - `ParallelExecutor` - Bounded-parallelism task execution

pub mod build;
pub mod executor;
pub mod pipeline;
pub mod watch;

pub use build::{BuildOptions, BuildResult, BuildUseCase};
pub use executor::ParallelExecutor;
pub use pipeline::BuildPipeline;
pub use watch::{WatchEvent, WatchUseCase, WatcherState, DEBOUNCE_MS};
