use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use shaderbake::application::WatchEvent;
use shaderbake::domain::ports::BuildEventSink;
use shaderbake::infrastructure::JsonEventSink;
use shaderbake::presentation::{create_watch_use_case, Cli};
use shaderbake::BuildOptions;

use super::{Outcome, Session};
use crate::ui::reporter::ConsoleEventSink;
use crate::ui::views::watch::{render_watch_event, render_watch_header};

pub fn cmd_watch(cli: &Cli) -> Result<Outcome> {
    let session = Session::load(cli)?;
    let compiler = session.resolve_compiler()?;
    let options = BuildOptions::from_config(&session.config, compiler);
    let ui = session.ui;

    let running = Arc::new(AtomicBool::new(true));
    let cancel = Arc::new(AtomicBool::new(false));
    let (running_handler, cancel_handler) = (Arc::clone(&running), Arc::clone(&cancel));
    ctrlc::set_handler(move || {
        cancel_handler.store(true, Ordering::SeqCst);
        running_handler.store(false, Ordering::SeqCst);
    })
    .context("failed to install Ctrl+C handler")?;

    if !ui.json {
        print!(
            "{}",
            render_watch_header(
                &options.source_root.display().to_string(),
                &options.output_root.display().to_string(),
                ui.color,
                ui.unicode
            )
        );
    }

    let sink: Box<dyn BuildEventSink> = if ui.json {
        Box::new(JsonEventSink::stdout("watch"))
    } else {
        Box::new(ConsoleEventSink::new(ui))
    };

    let use_case = create_watch_use_case(options);
    use_case.start(running, cancel, sink.as_ref(), |event| {
        if ui.json {
            println!("{}", event.to_json());
            return;
        }

        let rendered = render_watch_event(&clock_timestamp(), &event, ui.color, ui.unicode);
        match event {
            WatchEvent::Error { .. } => eprint!("{rendered}"),
            _ => print!("{rendered}"),
        }
    })?;

    Ok(Outcome::Success)
}

/// `HH:MM:SS` (UTC) for watch log prefixes
fn clock_timestamp() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 86_400;
            format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
        })
        .unwrap_or_else(|_| "00:00:00".to_string())
}
