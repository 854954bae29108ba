//! Domain Services
//!
//! The build decisions: what to compile, where it goes and whether it is
//! already up to date. Services only touch the filesystem through the
//! `FileSystem` port and are tested against `MemoryFs`.

pub mod aggregator;
pub mod dependency_resolver;
pub mod discovery;
pub mod output_mapper;
pub mod staleness;
pub mod task_builder;

pub use aggregator::Aggregator;
pub use dependency_resolver::{parse_directives, DependencyResolver, Directive};
pub use discovery::Discovery;
pub use output_mapper::{OutputMapper, OutputNaming};
pub use staleness::StalenessChecker;
pub use task_builder::{compile_args, SourceTasks, TaskBuilder, TaskSettings};
