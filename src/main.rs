//! shaderbake CLI - incremental shader builds
//!
//! Usage: shaderbake [COMMAND]
//!
//! Commands:
//!   build   Compile every stale shader (default)
//!   plan    List the targets that would be compiled
//!   watch   Rebuild whenever the source tree changes
//!
//! Exit codes: 0 success or nothing to do, 1 a task or source failed,
//! 2 fatal error (compiler not found, invalid configuration).

mod commands;
mod ui;

use std::process::ExitCode;

use clap::Parser;
use shaderbake::presentation::{Cli, Commands};
use shaderbake::BakeError;

use crate::commands::Outcome;

const EXIT_FAILURE: u8 = 1;
const EXIT_FATAL: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.subcommand() {
        Commands::Build => commands::build::cmd_build(&cli),
        Commands::Plan => commands::plan::cmd_plan(&cli),
        Commands::Watch => commands::watch::cmd_watch(&cli),
    };

    match result {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(Outcome::Failure) => ExitCode::from(EXIT_FAILURE),
        Err(err) => {
            report_fatal(&cli, &err);
            ExitCode::from(EXIT_FATAL)
        }
    }
}

/// Logs go to stderr. `RUST_LOG` wins; otherwise `-vv` is debug and `-vvv` trace.
fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_level = match verbose {
        0 | 1 => "warn",
        2 => "shaderbake=debug",
        _ => "shaderbake=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose >= 3)
                .without_time(),
        )
        .with(filter)
        .init();
}

fn report_fatal(cli: &Cli, err: &anyhow::Error) {
    if cli.json {
        let json = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
        });
        println!("{}", json);
        return;
    }

    let caps = ui::terminal::detect_capabilities();
    let color = match cli.color {
        Some(shaderbake::presentation::ColorWhen::Never) => false,
        Some(shaderbake::presentation::ColorWhen::Always) => true,
        _ => caps.supports_color && !caps.is_ci,
    };
    match err.downcast_ref::<BakeError>() {
        Some(bake) => eprint!("{}", ui::output::render_fatal_error(bake, color, caps.supports_unicode)),
        None => eprintln!("Error: {:#}", err),
    }
}
