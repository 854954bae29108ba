//! Entry point value object and the scanners that find entry points in source text

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A named function compiled as its own target (`vert_main`, `frag_main`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryPoint {
    name: String,
}

impl EntryPoint {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short tag used in output file names: `vert_main` -> `vert`
    pub fn suffix(&self) -> &str {
        match self.name.strip_suffix("_main") {
            Some(stem) if !stem.is_empty() => stem,
            _ => &self.name,
        }
    }
}

impl std::fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Strategy for detecting which recognised entry points a file defines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryPointScan {
    /// Plain substring containment anywhere in the file (default)
    #[default]
    Substring,
    /// Whole identifiers only, ignoring comments and string literals
    Lexical,
}

impl EntryPointScan {
    /// Return the candidates present in `content`, in candidate order
    ///
    /// Repeated candidates are reported once.
    pub fn find(&self, content: &str, candidates: &[String]) -> Vec<EntryPoint> {
        let mut seen: HashSet<&str> = HashSet::new();
        let unique = candidates
            .iter()
            .filter(|name| !name.is_empty() && seen.insert(name.as_str()));

        match self {
            EntryPointScan::Substring => unique
                .filter(|name| content.contains(name.as_str()))
                .map(EntryPoint::new)
                .collect(),
            EntryPointScan::Lexical => {
                let code = strip_comments_and_strings(content);
                let idents = identifiers(&code);
                unique
                    .filter(|name| idents.contains(name.as_str()))
                    .map(EntryPoint::new)
                    .collect()
            }
        }
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn identifiers(code: &str) -> HashSet<&str> {
    code.split(|c: char| !is_ident_char(c))
        .filter(|tok| !tok.is_empty())
        .collect()
}

/// Replace comments and string literals with spaces, keeping everything else
fn strip_comments_and_strings(content: &str) -> String {
    #[derive(PartialEq)]
    enum State {
        Code,
        LineComment,
        BlockComment,
        Str,
    }

    let mut out = String::with_capacity(content.len());
    let mut state = State::Code;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            State::Code => match c {
                '/' if chars.peek() == Some(&'/') => {
                    chars.next();
                    state = State::LineComment;
                    out.push(' ');
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    state = State::BlockComment;
                    out.push(' ');
                }
                '"' => {
                    state = State::Str;
                    out.push(' ');
                }
                _ => out.push(c),
            },
            State::LineComment => {
                if c == '\n' {
                    state = State::Code;
                    out.push('\n');
                }
            }
            State::BlockComment => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    state = State::Code;
                    out.push(' ');
                }
            }
            State::Str => match c {
                '\\' => {
                    chars.next();
                }
                '"' | '\n' => {
                    state = State::Code;
                    out.push(' ');
                }
                _ => {}
            },
        }
    }

    out
}
