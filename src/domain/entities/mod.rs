//! Domain Entities
//!
//! Values that flow through a build: sources, targets, tasks and results.

mod build_plan;
mod compile_result;
mod compile_task;
mod source_file;

pub use build_plan::{BuildPlan, BuildWarning, SourceError};
pub use compile_result::{CompileResult, RunStatus, RunSummary};
pub use compile_task::{CompileTask, OutputTarget};
pub use source_file::SourceFile;
