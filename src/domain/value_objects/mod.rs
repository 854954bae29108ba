//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod build_mode;
mod config_warning;
mod entry_point;
mod language;
mod output_format;

pub use build_mode::BuildMode;
pub use config_warning::ConfigWarning;
pub use entry_point::{EntryPoint, EntryPointScan};
pub use language::{DirectiveSyntax, Language};
pub use output_format::OutputFormat;
