//! Dependency resolver
//!
//! Extracts include/import directives from one source file and resolves them
//! to paths. Only direct dependencies are returned; callers walk the graph.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::DirectiveSyntax;
use crate::error::{BakeError, BakeResult};

/// One directive found in source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// 1-based line number
    pub line: usize,
    /// Path fragment with quotes/brackets removed
    pub fragment: String,
}

pub struct DependencyResolver<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    syntax: DirectiveSyntax,
}

impl<'a, F: FileSystem + ?Sized> DependencyResolver<'a, F> {
    pub fn new(fs: &'a F, syntax: DirectiveSyntax) -> Self {
        Self { fs, syntax }
    }

    pub fn fs(&self) -> &'a F {
        self.fs
    }

    /// Direct dependencies of `file`, resolved relative to its directory
    ///
    /// Fails with `MissingDependency` if a directive points at nothing.
    pub fn resolve_includes(&self, file: &Path) -> BakeResult<Vec<PathBuf>> {
        let content = self.fs.read_to_string(file)?;
        let base = file.parent().unwrap_or_else(|| Path::new(""));

        let mut resolved = BTreeSet::new();
        for directive in parse_directives(&content, &self.syntax.marker) {
            let mut target = directive.fragment.clone();
            if let Some(ext) = &self.syntax.append_extension {
                target.push('.');
                target.push_str(ext.trim_start_matches('.'));
            }
            let path = normalize(&base.join(&target));

            if !self.fs.is_file(&path) {
                return Err(BakeError::MissingDependency {
                    from: file.to_path_buf(),
                    line: directive.line,
                    directive: directive.fragment,
                    resolved: path,
                });
            }
            resolved.insert(path);
        }

        Ok(resolved.into_iter().collect())
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Scan `content` line by line for `marker` directives
///
/// The marker must sit on a token boundary and lines starting with `//` are
/// ignored. The fragment is the quoted (`"..."`), bracketed (`<...>`) or bare
/// text following the marker, without a trailing `;`.
pub fn parse_directives(content: &str, marker: &str) -> Vec<Directive> {
    if marker.is_empty() {
        return Vec::new();
    }

    let mut directives = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim_start().starts_with("//") {
            continue;
        }

        let Some(rest) = find_marker(line, marker) else {
            continue;
        };
        if let Some(fragment) = extract_fragment(rest) {
            directives.push(Directive {
                line: idx + 1,
                fragment,
            });
        }
    }
    directives
}

/// Text after the first boundary-respecting occurrence of `marker`
fn find_marker<'l>(line: &'l str, marker: &str) -> Option<&'l str> {
    for (pos, _) in line.match_indices(marker) {
        let before_ok = line[..pos]
            .chars()
            .next_back()
            .map(|c| !is_ident_char(c))
            .unwrap_or(true);
        let rest = &line[pos + marker.len()..];
        let after_ok = rest.chars().next().map(|c| !is_ident_char(c)).unwrap_or(false);
        if before_ok && after_ok {
            return Some(rest);
        }
    }
    None
}

fn extract_fragment(rest: &str) -> Option<String> {
    let rest = rest.trim();
    let fragment = if let Some(quoted) = rest.strip_prefix('"') {
        quoted.split('"').next().unwrap_or_default()
    } else if let Some(bracketed) = rest.strip_prefix('<') {
        bracketed.split('>').next().unwrap_or_default()
    } else {
        rest.split(|c: char| c.is_whitespace() || c == ';')
            .next()
            .unwrap_or_default()
    };

    let fragment = fragment.trim();
    if fragment.is_empty() {
        None
    } else {
        Some(fragment.to_string())
    }
}

/// Lexically collapse `.` and `..` components
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(out.components().next_back(), Some(Component::Normal(_)));
                if can_pop {
                    out.pop();
                } else if !matches!(
                    out.components().next_back(),
                    Some(Component::RootDir) | Some(Component::Prefix(_))
                ) {
                    out.push("..");
                }
            }
            other => out.push(other),
        }
    }
    out
}
