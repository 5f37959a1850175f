//! Sort state and sort orchestration.
//!
//! Sort state is kept apart from the data it orders: [`SortState::toggle`]
//! records which column orders the grid, while [`sort_rows`] applies that
//! state to a row sequence on demand. The composing layer owns the state
//! and passes it by reference into both halves.

use std::cmp::Ordering;

use crate::column::{Column, GridRow};
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::value::{compare, SortKey};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Which column currently orders the grid, if any.
///
/// Column and direction always travel together: [`SortState::Unsorted`]
/// carries neither, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortState {
    /// No column orders the grid.
    #[default]
    Unsorted,
    /// The grid is ordered by the column with this label.
    SortedBy { label: String, order: SortOrder },
}

impl SortState {
    /// Create the initial, unsorted state.
    pub fn new() -> Self {
        SortState::Unsorted
    }

    /// Advance the state for a header toggle on `label`.
    ///
    /// Repeated toggles on one column cycle
    /// `Unsorted → Ascending → Descending → Unsorted`. Toggling a
    /// different column always restarts at `Ascending`; no per-column
    /// direction is remembered.
    pub fn toggle(&mut self, label: &str) {
        let next = match self {
            SortState::SortedBy {
                label: current,
                order: SortOrder::Ascending,
            } if current == label => SortState::SortedBy {
                label: label.to_string(),
                order: SortOrder::Descending,
            },
            SortState::SortedBy {
                label: current,
                order: SortOrder::Descending,
            } if current == label => SortState::Unsorted,
            _ => SortState::SortedBy {
                label: label.to_string(),
                order: SortOrder::Ascending,
            },
        };
        log::debug!("sort toggle on '{label}': {self:?} -> {next:?}");
        *self = next;
    }

    /// The label of the sorting column, if any.
    pub fn sort_by(&self) -> Option<&str> {
        match self {
            SortState::Unsorted => None,
            SortState::SortedBy { label, .. } => Some(label),
        }
    }

    /// The current direction, if any.
    pub fn order(&self) -> Option<SortOrder> {
        match self {
            SortState::Unsorted => None,
            SortState::SortedBy { order, .. } => Some(*order),
        }
    }

    /// The direction applied to `label`, if it is the sorting column.
    pub fn order_for(&self, label: &str) -> Option<SortOrder> {
        match self {
            SortState::SortedBy { label: current, order } if current == label => Some(*order),
            _ => None,
        }
    }
}

/// Header affordance for a sortable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    /// Sortable, but not the current sort column.
    Inactive,
    Ascending,
    Descending,
}

impl SortIndicator {
    /// Glyph used by the plain-text paint.
    pub fn glyph(self) -> &'static str {
        match self {
            SortIndicator::Inactive => "↕",
            SortIndicator::Ascending => "▲",
            SortIndicator::Descending => "▼",
        }
    }
}

/// Order `rows` per `state` using the column configuration.
///
/// Returns a new sequence; the input is never reordered in place. The
/// sort is stable, so ties keep their input order in both directions.
/// [`SortState::Unsorted`] passes the rows through unchanged.
pub fn sort_rows<R: GridRow>(
    rows: &[R],
    columns: &[Column<R>],
    state: &SortState,
) -> Result<Vec<R>, ConfigError> {
    let (label, order) = match state {
        SortState::Unsorted => return Ok(rows.to_vec()),
        SortState::SortedBy { label, order } => (label.as_str(), *order),
    };

    let column = columns
        .iter()
        .find(|column| column.label() == label)
        .ok_or_else(|| ConfigError::UnknownSortColumn(label.to_string()))?;
    let sort_value = column
        .sort_value_fn()
        .ok_or_else(|| ConfigError::NotSortable(label.to_string()))?;

    // Extract every key up front so mixed kinds are rejected before any
    // comparison runs.
    let keys: Vec<SortKey> = rows.iter().map(|row| sort_value(row)).collect();
    if let Some(first) = keys.first() {
        if keys.iter().any(|key| !key.same_kind(first)) {
            return Err(ConfigError::MixedSortKeys(label.to_string()));
        }
    }

    let mut indices: Vec<usize> = (0..rows.len()).collect();
    // Kinds are uniform here, so the comparator is total.
    indices.sort_by(|&a, &b| compare(&keys[a], &keys[b], order).unwrap_or(Ordering::Equal));

    Ok(indices.into_iter().map(|index| rows[index].clone()).collect())
}

/// Sort `rows`, render them, and decorate each sortable column's header
/// with an indicator reflecting `state`.
///
/// The indicator doubles as the toggle affordance: presentation layers
/// dispatch [`SortState::toggle`] with the cell's label for header cells
/// that carry one.
pub fn render_sorted<R: GridRow>(
    rows: &[R],
    columns: &[Column<R>],
    state: &SortState,
) -> Result<Grid, ConfigError> {
    let ordered = sort_rows(rows, columns, state)?;
    let mut grid = Grid::render(&ordered, columns)?;

    for (cell, column) in grid.header.iter_mut().zip(columns) {
        if !column.is_sortable() {
            continue;
        }
        cell.indicator = Some(match state.order_for(column.label()) {
            Some(SortOrder::Ascending) => SortIndicator::Ascending,
            Some(SortOrder::Descending) => SortIndicator::Descending,
            None => SortIndicator::Inactive,
        });
    }

    Ok(grid)
}
