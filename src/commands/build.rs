use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use shaderbake::domain::ports::BuildEventSink;
use shaderbake::infrastructure::JsonEventSink;
use shaderbake::presentation::{create_build_use_case, Cli};
use shaderbake::BuildOptions;

use super::{Outcome, Session};
use crate::ui::reporter::ConsoleEventSink;

pub fn cmd_build(cli: &Cli) -> Result<Outcome> {
    let session = Session::load(cli)?;
    let compiler = session.resolve_compiler()?;
    let options = BuildOptions::from_config(&session.config, compiler);

    let cancel = Arc::new(AtomicBool::new(false));
    let cancel_handler = Arc::clone(&cancel);
    ctrlc::set_handler(move || {
        cancel_handler.store(true, Ordering::SeqCst);
    })
    .context("failed to install Ctrl+C handler")?;

    let sink: Box<dyn BuildEventSink> = if session.ui.json {
        Box::new(JsonEventSink::stdout("build"))
    } else {
        Box::new(ConsoleEventSink::new(session.ui))
    };

    let use_case = create_build_use_case();
    let result = use_case.execute_with_events(&options, sink.as_ref(), cancel)?;

    Ok(if result.is_failure() {
        Outcome::Failure
    } else {
        Outcome::Success
    })
}
