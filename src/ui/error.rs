use schoolspace::SchoolspaceError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::json::events::ErrorEvent;
use crate::ui::terminal::detect_capabilities;

/// Stable machine-readable code for `--json` error events
fn error_code(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<SchoolspaceError>() {
        Some(SchoolspaceError::InvalidConfig { .. }) => "INVALID_CONFIG",
        Some(SchoolspaceError::InvalidRequest { .. }) => "INVALID_REQUEST",
        Some(SchoolspaceError::InvalidTable { .. }) => "INVALID_TABLE",
        Some(SchoolspaceError::Io(_)) => "IO",
        None => "ERROR",
    }
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let block = match err.downcast_ref::<SchoolspaceError>() {
        Some(SchoolspaceError::InvalidConfig { file, message }) => {
            file_error(file, message).with_fix("Run 'schoolspace explain' for the accepted keys.")
        }
        Some(SchoolspaceError::InvalidRequest { file, message }) => file_error(file, message)
            .with_fix("A request needs every field of ProgramRequest; see 'compute --json' output."),
        Some(other) => ErrorBlock::new(other.to_string()),
        None => ErrorBlock::new(format!("{:#}", err)),
    };
    block.render(supports_color, supports_unicode)
}

fn file_error(file: &std::path::Path, message: &str) -> ErrorBlock {
    let block = ErrorBlock::new(message).in_file(file);
    match line_from_message(message) {
        Some(line) => block.with_line(line).with_file_context(1, 1),
        None => block,
    }
}

/// Line number from parser messages such as "... at line 3 column 7"
fn line_from_message(message: &str) -> Option<usize> {
    let rest = &message[message.find("line ")? + "line ".len()..];
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

pub fn print_error(err: &anyhow::Error, json: bool, command: &str) {
    if json {
        let event = ErrorEvent::new(command, error_code(err), format!("{:#}", err));
        let _ = crate::ui::json::emit_event(&event);
        return;
    }

    let caps = detect_capabilities();
    eprint!(
        "{}",
        format_error(err, caps.supports_color, caps.supports_unicode)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn line_is_read_from_parser_messages() {
        assert_eq!(
            line_from_message("TOML parse error at line 2, column 10"),
            Some(2)
        );
        assert_eq!(
            line_from_message("missing field `campus` at line 12 column 1"),
            Some(12)
        );
        assert_eq!(line_from_message("no position"), None);
    }

    #[test]
    fn config_errors_name_the_file_and_fix() {
        let err = anyhow::Error::new(SchoolspaceError::InvalidConfig {
            file: PathBuf::from("missing.toml"),
            message: "unknown variant `college`".to_string(),
        });
        let rendered = format_error(&err, false, false);
        assert!(rendered.contains("missing.toml"));
        assert!(rendered.contains("unknown variant `college`"));
        assert!(rendered.contains("FIX: Run 'schoolspace explain'"));
        assert_eq!(error_code(&err), "INVALID_CONFIG");
    }

    #[test]
    fn plain_errors_keep_their_context_chain() {
        let err = anyhow::anyhow!("disk full").context("writing report");
        let rendered = format_error(&err, false, false);
        assert!(rendered.contains("writing report: disk full"));
        assert_eq!(error_code(&err), "ERROR");
    }
}
