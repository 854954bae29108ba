use std::io::Write;

use shaderbake::config::ConfigWarning;
use shaderbake::BakeError;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_config_warning(warning: &ConfigWarning, supports_color: bool, supports_unicode: bool) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let mut out = format!(
        "{} Unknown config key '{}' in {}\n",
        Icon::Warning.colored(supports_color, supports_unicode),
        warning.key,
        location
    );
    if let Some(suggestion) = &warning.suggestion {
        out.push_str(&format!(
            "   {}\n",
            ColoredText::dim(format!("Did you mean '{}'?", suggestion)).render(supports_color)
        ));
    }
    out
}

/// Config warnings go to stderr in every mode so the NDJSON stream stays clean
pub fn print_config_warnings(ui: &UiContext, warnings: &[ConfigWarning]) {
    let mut err = std::io::stderr().lock();
    for w in warnings {
        let _ = err.write_all(render_config_warning(w, ui.color, ui.unicode).as_bytes());
    }
}

pub fn render_fatal_error(error: &BakeError, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(error.to_string()).bold().render(supports_color)
    );
    if let BakeError::ToolNotFound { name, .. } = error {
        out.push_str(&format!(
            "   {}\n",
            ColoredText::dim(format!(
                "Install {} or set [compiler] path in shaderbake.toml",
                name
            ))
            .render(supports_color)
        ));
    }
    out
}
