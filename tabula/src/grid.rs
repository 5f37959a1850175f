//! The grid renderer: ordered rows plus column configuration in, tabular
//! structure out.
//!
//! Rendering is a pure projection. Row order is exactly the input order
//! and column order is the configuration order; sorting and filtering
//! happen upstream.

use std::collections::HashSet;
use std::fmt;

use unicode_width::UnicodeWidthStr;

use crate::column::{Column, GridRow};
use crate::content::Content;
use crate::error::ConfigError;
use crate::sort::SortIndicator;

/// One rendered header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    /// The column's label, also its sort identity.
    pub label: String,
    /// Rendered header content.
    pub content: Content,
    /// Sort affordance, present iff the column is sortable. Presentation
    /// layers dispatch a toggle with `label` for cells that carry one.
    pub indicator: Option<SortIndicator>,
}

impl HeaderCell {
    /// Header text with the sort glyph appended, as painted by `Display`.
    pub fn display_text(&self) -> String {
        match self.indicator {
            Some(indicator) => format!("{} {}", self.content.as_str(), indicator.glyph()),
            None => self.content.as_str().to_string(),
        }
    }
}

/// One rendered body row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Reconciliation key, from [`GridRow::key`].
    pub key: String,
    /// Cell contents in column order.
    pub cells: Vec<Content>,
}

/// A rendered grid: one header row plus zero or more body rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    pub header: Vec<HeaderCell>,
    pub rows: Vec<Row>,
}

impl Grid {
    /// Project `rows` through `columns` into a grid.
    ///
    /// Duplicate labels abort the render before anything is built, so a
    /// malformed configuration never produces a partial grid that masks
    /// the error. An empty row slice renders a header and no body rows.
    pub fn render<R: GridRow>(rows: &[R], columns: &[Column<R>]) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for column in columns {
            if !seen.insert(column.label()) {
                return Err(ConfigError::DuplicateLabel(column.label().to_string()));
            }
        }

        let header = columns
            .iter()
            .map(|column| HeaderCell {
                label: column.label().to_string(),
                content: column.render_header(),
                indicator: None,
            })
            .collect();

        let body = rows
            .iter()
            .map(|row| Row {
                key: row.key().to_string(),
                cells: columns
                    .iter()
                    .map(|column| column.render_cell(row))
                    .collect(),
            })
            .collect();

        Ok(Grid { header, rows: body })
    }

    /// Widest content per column, header included, in display cells.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .header
            .iter()
            .map(|cell| cell.display_text().width())
            .collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(&row.cells) {
                *width = (*width).max(cell.width());
            }
        }
        widths
    }
}

fn write_padded(f: &mut fmt::Formatter<'_>, text: &str, width: usize) -> fmt::Result {
    write!(f, "{text}")?;
    for _ in text.width()..width {
        write!(f, " ")?;
    }
    Ok(())
}

impl fmt::Display for Grid {
    /// Flat, left-aligned text paint with two spaces between columns.
    /// Richer surfaces should consume the structure directly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        let last = widths.len().saturating_sub(1);

        for (index, (cell, width)) in self.header.iter().zip(&widths).enumerate() {
            if index > 0 {
                write!(f, "  ")?;
            }
            let text = cell.display_text();
            if index == last {
                write!(f, "{text}")?;
            } else {
                write_padded(f, &text, *width)?;
            }
        }
        writeln!(f)?;

        for row in &self.rows {
            for (index, (cell, width)) in row.cells.iter().zip(&widths).enumerate() {
                if index > 0 {
                    write!(f, "  ")?;
                }
                if index == last {
                    write!(f, "{}", cell.as_str())?;
                } else {
                    write_padded(f, cell.as_str(), *width)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
