//! Watch Use Case
//!
//! Continuous rebuilds. It orchestrates:
//! - File system monitoring (via `notify` crate)
//! - Debouncing (100ms default)
//! - Incremental rebuilds through `BuildUseCase`
//!
//! ## Usage
//!
//! ```ignore
//! let use_case = WatchUseCase::new(LocalFs::new(), ProcessRunner::new(), options);
//! use_case.start(running, cancel, &sink, |event| { ... })?;
//! ```

mod event;
mod use_case;


pub use event::{is_relevant_change, WatchEvent, WatcherState, DEBOUNCE_MS};
pub use use_case::WatchUseCase;
