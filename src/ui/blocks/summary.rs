use shaderbake::domain::entities::{RunStatus, RunSummary};

use crate::ui::primitives::text::ColoredText;

/// Closing lines of every build: the success ratio and the wall-clock time
#[derive(Debug, Clone, Copy)]
pub struct BuildSummary {
    summary: RunSummary,
    failed_sources: usize,
}

impl BuildSummary {
    pub fn new(summary: RunSummary) -> Self {
        Self {
            summary,
            failed_sources: 0,
        }
    }

    /// Sources that produced no tasks because planning failed
    pub fn with_failed_sources(mut self, count: usize) -> Self {
        self.failed_sources = count;
        self
    }

    fn is_failure(&self) -> bool {
        self.summary.status().is_failure() || self.summary.cancelled > 0 || self.failed_sources > 0
    }

    pub fn headline(&self) -> String {
        let s = &self.summary;
        if s.status() == RunStatus::NoOp && s.cancelled == 0 {
            return "Nothing to compile.".to_string();
        }
        format!(
            "Compiled {}/{} ({}%) shaders",
            s.succeeded,
            s.total + s.cancelled,
            percent(s.succeeded, s.total + s.cancelled)
        )
    }

    pub fn render(&self, supports_color: bool) -> String {
        let mut out = String::new();
        if self.summary.cancelled > 0 {
            out.push_str(&format!(
                "{}\n",
                ColoredText::warning(format!("Cancelled {} pending tasks", self.summary.cancelled))
                    .render(supports_color)
            ));
        }

        let headline = self.headline();
        let headline = if self.summary.status() == RunStatus::NoOp && !self.is_failure() {
            ColoredText::plain(headline)
        } else if self.is_failure() {
            ColoredText::error(headline)
        } else {
            ColoredText::info(headline)
        };
        out.push_str(&format!("{}\n", headline.render(supports_color)));
        out.push_str(&format!(
            "Time taken: {:.2} seconds.\n",
            self.summary.elapsed.as_secs_f64()
        ));
        out
    }
}

fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 100;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}
