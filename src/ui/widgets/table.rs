use crate::ui::primitives::border::BorderSet;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::visible_width;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone)]
struct Column {
    header: String,
    align: Align,
}

/// Column-aligned text table with a header rule and optional footer row.
#[derive(Debug, Default, Clone)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
    footer: Option<Vec<String>>,
}

impl Table {
    pub fn column(mut self, header: impl Into<String>, align: Align) -> Self {
        self.columns.push(Column {
            header: header.into(),
            align,
        });
        self
    }

    /// Missing cells render empty; extra cells are dropped.
    pub fn add_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    pub fn set_footer(&mut self, cells: Vec<String>) {
        self.footer = Some(cells);
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let border = BorderSet::new(supports_unicode);
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .chain(self.footer.iter())
                    .filter_map(|row| row.get(i))
                    .map(|cell| visible_width(cell))
                    .chain(std::iter::once(visible_width(&col.header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect();
        let total_width = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);

        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        let mut out = String::new();
        out.push_str(
            &ColoredText::plain(self.format_row(&headers, &widths))
                .bold()
                .render(supports_color),
        );
        out.push('\n');
        out.push_str(&ColoredText::dim(border.rule(total_width)).render(supports_color));
        out.push('\n');

        for row in &self.rows {
            out.push_str(&self.format_row(row, &widths));
            out.push('\n');
        }

        if let Some(footer) = &self.footer {
            out.push_str(&ColoredText::dim(border.rule(total_width)).render(supports_color));
            out.push('\n');
            out.push_str(
                &ColoredText::plain(self.format_row(footer, &widths))
                    .bold()
                    .render(supports_color),
            );
            out.push('\n');
        }
        out
    }

    fn format_row(&self, cells: &[String], widths: &[usize]) -> String {
        let mut parts = Vec::with_capacity(self.columns.len());
        for (i, col) in self.columns.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            let pad = " ".repeat(widths[i].saturating_sub(visible_width(cell)));
            parts.push(match col.align {
                Align::Left => format!("{cell}{pad}"),
                Align::Right => format!("{pad}{cell}"),
            });
        }
        parts.join("  ").trim_end().to_string()
    }
}
