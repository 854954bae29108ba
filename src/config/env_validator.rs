//! `SHADERBAKE_*` value checking
//!
//! An invalid override never aborts a build: it is reported and the layer
//! below (file or default) stays in effect.

use std::io::Write;

/// Maximum edit distance at which a suggestion is still offered
const SUGGEST_DISTANCE: usize = 2;

/// One overridable environment variable and the spellings it accepts
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parsed `raw`, or `current` with a warning on `writer` when it does not parse
    pub fn apply<T, F, W>(&self, raw: &str, parse: F, current: T, writer: &mut W) -> T
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        if let Some(parsed) = parse(raw) {
            return parsed;
        }

        let hint = closest(&raw.trim().to_lowercase(), self.valid_values.iter().copied())
            .filter(|candidate| !candidate.eq_ignore_ascii_case(raw.trim()))
            .map(|candidate| format!(". Did you mean '{}'?", candidate))
            .unwrap_or_default();
        let _ = writeln!(
            writer,
            "Warning: Invalid {} value '{}'{}; keeping the configured value",
            self.var_name, raw, hint
        );
        let _ = writeln!(writer, "Valid values: {}", self.valid_values.join(", "));
        current
    }
}

/// Nearest candidate within a small edit distance; ties keep the first
pub fn closest<'c>(input: &str, candidates: impl IntoIterator<Item = &'c str>) -> Option<&'c str> {
    candidates
        .into_iter()
        .map(|candidate| (candidate, edit_distance(input, candidate)))
        .filter(|(_, dist)| *dist <= SUGGEST_DISTANCE)
        .min_by_key(|(_, dist)| *dist)
        .map(|(candidate, _)| candidate)
}

/// Levenshtein distance over chars, single rolling row
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + usize::from(ca != *cb));
            diagonal = above;
        }
    }
    row[b.len()]
}
