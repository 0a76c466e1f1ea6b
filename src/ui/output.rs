use schoolspace::config::ConfigWarning;

use crate::ui::blocks::warning::WarningBlock;
use crate::ui::json::events::WarningEvent;

pub fn config_warning_lines(warnings: &[ConfigWarning]) -> Vec<String> {
    warnings
        .iter()
        .map(|w| {
            let location = match w.line {
                Some(line) => format!("{}:{}", w.file.display(), line),
                None => w.file.display().to_string(),
            };
            match &w.suggestion {
                Some(suggestion) => format!(
                    "Unknown config key '{}' in {} (did you mean '{}'?)",
                    w.key, location, suggestion
                ),
                None => format!("Unknown config key '{}' in {}", w.key, location),
            }
        })
        .collect()
}

/// Config warnings go to stderr in text mode and inline as events in JSON mode.
pub fn print_config_warnings(
    warnings: &[ConfigWarning],
    json: bool,
    command: &str,
    supports_color: bool,
    supports_unicode: bool,
) {
    if warnings.is_empty() {
        return;
    }

    let lines = config_warning_lines(warnings);
    if json {
        for line in lines {
            let _ = crate::ui::json::emit_event(&WarningEvent::new(command, line));
        }
        return;
    }

    let mut block = WarningBlock::new("Config warnings");
    for line in lines {
        block.add_line(line);
    }
    eprint!("{}", block.render(supports_color, supports_unicode));
}
