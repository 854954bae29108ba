//! Language value object - which shader compiler family a source tree targets

use serde::{Deserialize, Serialize};

/// Shader source language, selecting compiler, directive syntax and naming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// GLSL compiled with `glslc`, one stage per file
    Glsl,
    /// Slang compiled with `slangc`, several entry points per file
    #[default]
    Slang,
}

/// How a language spells its dependency directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveSyntax {
    /// Token that starts the directive (`#include`, `import`)
    pub marker: String,
    /// Extension appended to the extracted fragment before resolution
    pub append_extension: Option<String>,
}

impl DirectiveSyntax {
    pub fn new(marker: impl Into<String>, append_extension: Option<String>) -> Self {
        Self {
            marker: marker.into(),
            append_extension,
        }
    }
}

impl Language {
    /// Executable name searched on PATH
    pub fn compiler_name(&self) -> &'static str {
        match self {
            Language::Glsl => "glslc",
            Language::Slang => "slangc",
        }
    }

    /// Environment variable pointing at the SDK that ships the compiler
    pub fn sdk_env_var(&self) -> &'static str {
        match self {
            Language::Glsl => "VULKAN_SDK",
            Language::Slang => "SLANG_SDK",
        }
    }

    /// Default source tree, relative to the project root
    pub fn default_source_dir(&self) -> &'static str {
        match self {
            Language::Glsl => "asset/glsl",
            Language::Slang => "asset/slang",
        }
    }

    pub fn default_extensions(&self) -> Vec<String> {
        let exts: &[&str] = match self {
            Language::Glsl => &["vert", "frag", "comp", "geom", "tesc", "tese"],
            Language::Slang => &["slang"],
        };
        exts.iter().map(|s| s.to_string()).collect()
    }

    pub fn default_exclude_dirs(&self) -> Vec<String> {
        match self {
            Language::Glsl => Vec::new(),
            Language::Slang => vec!["module".to_string()],
        }
    }

    /// Entry point names recognised in source text; empty for single-entry languages
    pub fn default_entry_points(&self) -> Vec<String> {
        match self {
            Language::Glsl => Vec::new(),
            Language::Slang => ["vert_main", "frag_main", "tesc_main", "tese_main", "comp_main"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    pub fn default_directive(&self) -> DirectiveSyntax {
        match self {
            Language::Glsl => DirectiveSyntax::new("#include", None),
            Language::Slang => DirectiveSyntax::new("import", Some("slang".to_string())),
        }
    }

    /// Default `-profile` value; only Slang uses one
    pub fn default_profile(&self) -> Option<&'static str> {
        match self {
            Language::Glsl => None,
            Language::Slang => Some("glsl_450"),
        }
    }

    /// Whether one source file can produce several entry points
    pub fn has_named_entry_points(&self) -> bool {
        matches!(self, Language::Slang)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Glsl => "GLSL",
            Language::Slang => "Slang",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
