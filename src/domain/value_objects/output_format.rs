//! Output format value object - a target encoding the compiler can emit

use serde::{Deserialize, Serialize};

/// A (compiler target selector, file extension) pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OutputFormat {
    /// Value passed to the compiler's target selector (`spirv`, `glsl`)
    pub target: String,
    /// File extension of produced files, without the leading dot
    pub extension: String,
}

impl OutputFormat {
    pub fn new(target: impl Into<String>, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        Self {
            target: target.into(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    pub fn spirv() -> Self {
        Self::new("spirv", "spv")
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::spirv()
    }
}
