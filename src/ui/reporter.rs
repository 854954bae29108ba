//! Console Event Sink
//!
//! Human-readable rendering of build events: a transient progress line on
//! interactive terminals, per-task lines when verbose, compiler diagnostics for
//! failures, and the closing summary.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use shaderbake::domain::entities::{CompileResult, SourceError};
use shaderbake::domain::ports::{BuildEvent, BuildEventSink};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::BuildSummary;
use crate::ui::context::UiContext;
use crate::ui::live_region::LiveLine;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

struct ConsoleState {
    out: Box<dyn Write + Send>,
    err: Box<dyn Write + Send>,
    progress: LiveLine,
    failed_sources: usize,
}

pub struct ConsoleEventSink {
    ui: UiContext,
    /// Paths are printed relative to this directory when possible
    display_base: Option<PathBuf>,
    state: Mutex<ConsoleState>,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext) -> Self {
        Self::with_writers(ui, io::stdout(), io::stderr(), std::env::current_dir().ok())
    }

    pub fn with_writers<O, E>(ui: UiContext, out: O, err: E, display_base: Option<PathBuf>) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            ui,
            display_base,
            state: Mutex::new(ConsoleState {
                out: Box::new(out),
                err: Box::new(err),
                progress: LiveLine::new(),
                failed_sources: 0,
            }),
        }
    }

    fn display(&self, path: &Path) -> String {
        display_path(path, self.display_base.as_deref())
    }

    fn handle(&self, state: &mut ConsoleState, event: BuildEvent) -> io::Result<()> {
        let (color, unicode) = (self.ui.color, self.ui.unicode);
        match event {
            BuildEvent::Started {
                language,
                mode,
                source_root,
                output_root,
                jobs,
            } => {
                state.failed_sources = 0;
                if self.ui.is_verbose() {
                    let mut header = CommandHeader::new(Icon::Build, "shaderbake build");
                    header.add("Language", language.display_name());
                    header.add("Mode", mode.to_string());
                    header.add("Source", self.display(&source_root));
                    header.add("Output", self.display(&output_root));
                    header.add("Jobs", jobs.to_string());
                    write!(state.out, "{}", header.render(color, unicode))?;
                }
            }

            BuildEvent::Planned {
                sources,
                tasks,
                up_to_date,
            } => {
                if self.ui.is_verbose() {
                    writeln!(
                        state.out,
                        "{}",
                        ColoredText::dim(format!(
                            "{} sources, {} to compile, {} up to date",
                            sources, tasks, up_to_date
                        ))
                        .render(color)
                    )?;
                }
            }

            BuildEvent::Warning(warning) => {
                if !self.ui.is_quiet() {
                    state.progress.clear(&mut state.out)?;
                    writeln!(
                        state.err,
                        "{} {}",
                        Icon::Warning.colored(color, unicode),
                        ColoredText::warning(warning.to_string()).render(color)
                    )?;
                }
            }

            BuildEvent::SourceFailed(error) => {
                state.failed_sources += 1;
                state.progress.clear(&mut state.out)?;
                write!(state.err, "{}", self.render_source_error(&error))?;
            }

            BuildEvent::TaskFinished {
                result,
                completed,
                total,
            } => {
                state.progress.clear(&mut state.out)?;
                if self.ui.is_verbose() {
                    writeln!(state.out, "{}", self.render_task_line(&result))?;
                }
                if !result.success {
                    write!(state.err, "{}", self.render_failure(&result))?;
                }
                if self.ui.progress && completed < total {
                    state
                        .progress
                        .update(&mut state.out, &progress_text(completed, total))?;
                }
            }

            BuildEvent::Completed { summary } => {
                state.progress.clear(&mut state.out)?;
                let block = BuildSummary::new(summary).with_failed_sources(state.failed_sources);
                write!(state.out, "{}", block.render(color))?;
            }
        }
        state.out.flush()?;
        state.err.flush()
    }

    /// `[OK] asset/spv/basic_vert.spv (0.12s)`
    pub(crate) fn render_task_line(&self, result: &CompileResult) -> String {
        let icon = if result.success { Icon::Success } else { Icon::Error };
        let elapsed = result
            .elapsed
            .map(|d| format!(" ({:.2}s)", d.as_secs_f64()))
            .unwrap_or_default();
        format!(
            "{} {}{}",
            icon.colored(self.ui.color, false),
            self.display(result.task.output_path()),
            ColoredText::dim(elapsed).render(self.ui.color)
        )
    }

    fn render_failure(&self, result: &CompileResult) -> String {
        let color = self.ui.color;
        let target = result.task.target();
        let entry = target
            .entry_point
            .as_ref()
            .map(|e| format!(" ({})", e.name()))
            .unwrap_or_default();
        let mut out = format!(
            "{} {}{}\n",
            Icon::Error.colored(color, self.ui.unicode),
            ColoredText::error(format!("failed to compile {}", self.display(&target.source)))
                .bold()
                .render(color),
            entry
        );
        if let Some(diagnostics) = &result.diagnostics {
            for line in diagnostics.lines() {
                out.push_str(&format!("    {}\n", line));
            }
        }
        out
    }

    fn render_source_error(&self, error: &SourceError) -> String {
        format!(
            "{} {}: {}\n",
            Icon::Error.colored(self.ui.color, self.ui.unicode),
            self.display(&error.path),
            ColoredText::error(error.message.as_str()).render(self.ui.color)
        )
    }
}

impl BuildEventSink for ConsoleEventSink {
    fn on_event(&self, event: BuildEvent) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(err) = self.handle(&mut state, event) {
            tracing::debug!(error = %err, "console output failed");
        }
    }
}

pub(crate) fn progress_text(completed: usize, total: usize) -> String {
    format!("Compiled {}/{} shaders", completed, total)
}

fn display_path(path: &Path, base: Option<&Path>) -> String {
    base.and_then(|b| path.strip_prefix(b).ok())
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(path)
        .display()
        .to_string()
}
