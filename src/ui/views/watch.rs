use shaderbake::application::WatchEvent;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;

pub fn render_watch_header(source: &str, output: &str, supports_color: bool, supports_unicode: bool) -> String {
    let mut header = CommandHeader::new(Icon::Watch, "shaderbake watch");
    header.add("Source", source);
    header.add("Output", output);
    header.add("Hint", "Press Ctrl+C to stop");
    header.render(supports_color, supports_unicode)
}

pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = format!("[{}]", timestamp);

    match event {
        WatchEvent::WatchStarted { source, .. } => format!(
            "{} {} Watching: {}\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode),
            source
        ),
        WatchEvent::FileChanged { path } => format!(
            "{} {} Changed: {}\n",
            prefix,
            Icon::Arrow.colored(supports_color, supports_unicode),
            path
        ),
        WatchEvent::RebuildStarted => format!(
            "{} {} Rebuilding...\n",
            prefix,
            Icon::Progress.colored(supports_color, supports_unicode)
        ),
        WatchEvent::RebuildComplete {
            compiled,
            failed,
            up_to_date,
        } => {
            let icon = if *failed > 0 { Icon::Warning } else { Icon::Success }
                .colored(supports_color, supports_unicode);

            if *failed > 0 {
                format!(
                    "{} {} Rebuild: {} compiled, {} up to date, {} failed\n",
                    prefix, icon, compiled, up_to_date, failed
                )
            } else {
                format!(
                    "{} {} Rebuild: {} compiled, {} up to date\n",
                    prefix, icon, compiled, up_to_date
                )
            }
        }
        WatchEvent::Error { message } => format!(
            "{} {} Error: {}\n",
            prefix,
            Icon::Error.colored(supports_color, supports_unicode),
            message
        ),
        WatchEvent::Shutdown => format!(
            "\n{} {} Watch stopped.\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode)
        ),
    }
}
