use std::path::Path;

use shaderbake::domain::entities::BuildPlan;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// List of stale targets followed by a one-line tally
pub fn render_plan(
    plan: &BuildPlan,
    source_root: &Path,
    output_root: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Plan, "shaderbake plan");
    header.add("Source", source_root.display().to_string());
    header.add("Output", output_root.display().to_string());
    let mut out = header.render(supports_color, supports_unicode);
    out.push('\n');

    for task in &plan.tasks {
        let target = task.target();
        let source = target
            .source
            .strip_prefix(source_root)
            .unwrap_or(&target.source)
            .display()
            .to_string();
        let output = target
            .path
            .strip_prefix(output_root)
            .unwrap_or(&target.path)
            .display()
            .to_string();
        let entry = target
            .entry_point
            .as_ref()
            .map(|e| format!(" [{}]", e.name()))
            .unwrap_or_default();

        out.push_str(&format!(
            "  {} {}{} {}\n",
            Icon::Pending.colored(supports_color, supports_unicode),
            source,
            ColoredText::dim(entry).render(supports_color),
            ColoredText::dim(format!("-> {}", output)).render(supports_color),
        ));
    }

    if !plan.tasks.is_empty() {
        out.push('\n');
    }

    let tally = format!(
        "{} to compile, {} up to date, {} sources",
        plan.tasks.len(),
        plan.up_to_date,
        plan.sources
    );
    let tally = if plan.tasks.is_empty() {
        ColoredText::success(tally)
    } else {
        ColoredText::info(tally)
    };
    out.push_str(&format!("{}\n", tally.render(supports_color)));
    out
}
