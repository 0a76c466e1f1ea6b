use std::path::{Path, PathBuf};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

#[derive(Debug, Clone)]
pub struct ErrorBlock {
    file: Option<PathBuf>,
    line: Option<usize>,
    message: String,
    code_context: Option<Vec<(usize, String, bool)>>, // (line_no, content, highlight)
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            file: None,
            line: None,
            message: message.into(),
            code_context: None,
            fix: None,
        }
    }

    pub fn in_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn with_file_context(mut self, before: usize, after: usize) -> Self {
        let (Some(file), Some(line)) = (&self.file, self.line) else {
            return self;
        };
        self.code_context = read_code_context(file, line, before, after);
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error("ERROR").bold().render(supports_color)
        );
        let mut b = Box::with_title(title).style(BoxStyle::Error);

        if let Some(file) = &self.file {
            match self.line {
                Some(line) => b.add_line(format!("{}:{}", file.display(), line)),
                None => b.add_line(file.display().to_string()),
            }
        }
        b.add_empty();
        b.add_line(self.message.clone());

        if let Some(lines) = &self.code_context {
            b.add_empty();
            for (no, text, highlight) in lines {
                let prefix = if *highlight {
                    Icon::Pointer.render(supports_unicode)
                } else {
                    " "
                };

                let rendered_line = if supports_color && *highlight {
                    ColoredText::error(text).render(true)
                } else {
                    text.clone()
                };

                b.add_line(format!("{prefix} {:>4} | {}", no, rendered_line));
            }
        }

        if let Some(fix) = &self.fix {
            b.add_empty();
            b.add_line(format!("FIX: {}", fix));
        }

        b.render(supports_color, supports_unicode)
    }
}

fn read_code_context(
    file: &Path,
    line: usize,
    before: usize,
    after: usize,
) -> Option<Vec<(usize, String, bool)>> {
    let content = std::fs::read_to_string(file).ok()?;
    let lines: Vec<&str> = content.lines().collect();
    if line == 0 || line > lines.len() {
        return None;
    }

    let start = line.saturating_sub(before).saturating_sub(1);
    let end = (line + after).min(lines.len());

    Some(
        lines[start..end]
            .iter()
            .enumerate()
            .map(|(idx, text)| {
                let line_no = start + idx + 1;
                (line_no, (*text).to_string(), line_no == line)
            })
            .collect(),
    )
}
