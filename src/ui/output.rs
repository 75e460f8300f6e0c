use user_cleanup::config::ConfigWarning;

use crate::ui::primitives::text::ColoredText;

pub fn format_config_warning(w: &ConfigWarning, color: bool) -> String {
    let prefix = ColoredText::warning("[WARN]").render(color);
    let location = match w.line {
        Some(line) => format!("{}:{}", w.file.display(), line),
        None => w.file.display().to_string(),
    };

    let mut out = format!("{} Unknown config key '{}' in {}\n", prefix, w.key, location);
    if let Some(suggestion) = &w.suggestion {
        out.push_str(&format!("       Did you mean '{}'?\n", suggestion));
    }
    out
}

/// Config warnings go to stderr so they never mix with NDJSON on stdout.
pub fn print_config_warnings(warnings: &[ConfigWarning], color: bool) {
    for w in warnings {
        eprint!("{}", format_config_warning(w, color));
    }
}
