use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Pointer,
    Program,
    Tables,
    Plumbing,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Pointer) => theme::icons::POINTER,
            (true, Icon::Program) => theme::icons::PROGRAM,
            (true, Icon::Tables) => theme::icons::TABLES,
            (true, Icon::Plumbing) => theme::icons::PLUMBING,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Pointer) => theme::icons_ascii::POINTER,
            (false, Icon::Program) => theme::icons_ascii::PROGRAM,
            (false, Icon::Tables) => theme::icons_ascii::TABLES,
            (false, Icon::Plumbing) => theme::icons_ascii::PLUMBING,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error | Icon::Pointer => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Arrow => theme::colors::DIM,
            Icon::Program | Icon::Tables | Icon::Plumbing => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
