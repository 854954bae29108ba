use std::path::PathBuf;

use anyhow::Result;
use shaderbake::presentation::{create_build_use_case, Cli};
use shaderbake::BuildOptions;

use super::{Outcome, Session};
use crate::ui::views::plan::render_plan;

pub fn cmd_plan(cli: &Cli) -> Result<Outcome> {
    let session = Session::load(cli)?;
    let language = session.config.language;

    // Nothing is executed, so a missing compiler only affects the listed command lines
    let compiler = session.resolve_compiler().unwrap_or_else(|err| {
        tracing::debug!(error = %err, "compiler not found, planning with bare name");
        PathBuf::from(language.compiler_name())
    });
    let options = BuildOptions::from_config(&session.config, compiler);
    let plan = create_build_use_case().plan(&options)?;

    if session.ui.json {
        let tasks: Vec<_> = plan
            .tasks
            .iter()
            .map(|task| {
                let target = task.target();
                serde_json::json!({
                    "source": target.source.display().to_string(),
                    "output": target.path.display().to_string(),
                    "entry_point": target.entry_point.as_ref().map(|e| e.name().to_string()),
                    "format": target.format.target,
                    "command": task.display_command(),
                })
            })
            .collect();
        let errors: Vec<_> = plan
            .errors
            .iter()
            .map(|e| serde_json::json!({"path": e.path.display().to_string(), "message": e.message}))
            .collect();
        println!(
            "{}",
            serde_json::json!({
                "event": "plan",
                "command": "plan",
                "sources": plan.sources,
                "up_to_date": plan.up_to_date,
                "tasks": tasks,
                "warnings": plan.warnings.iter().map(|w| w.to_string()).collect::<Vec<_>>(),
                "errors": errors,
            })
        );
    } else {
        let (color, unicode) = (session.ui.color, session.ui.unicode);
        for warning in &plan.warnings {
            eprintln!("{}", warning);
        }
        for error in &plan.errors {
            eprintln!("{}: {}", error.path.display(), error.message);
        }
        print!(
            "{}",
            render_plan(&plan, &options.source_root, &options.output_root, color, unicode)
        );
    }

    Ok(if plan.has_errors() {
        Outcome::Failure
    } else {
        Outcome::Success
    })
}
