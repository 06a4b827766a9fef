//! Placement of keypad keys into a fixed-column grid with row and column spans.
//!
//! Keys flow left to right, top to bottom. A position already covered by a
//! multi-row key placed earlier is skipped, the same way CSS grid auto-placement
//! behaves.

use core::fmt;

use alloc::vec;
use alloc::vec::Vec;

use crate::{Footprint, KeyPlacement};

/// Column count of the numeric keypad.
pub const NUMPAD_COLUMNS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub key: KeyPlacement,
    pub row: usize,
    pub column: usize,
    pub row_span: usize,
    pub column_span: usize,
}

impl GridCell {
    pub fn covers(&self, row: usize, column: usize) -> bool {
        (self.row..self.row + self.row_span).contains(&row)
            && (self.column..self.column + self.column_span).contains(&column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    NoColumns,
    SpanTooWide {
        label: &'static str,
        span: usize,
        columns: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::NoColumns => write!(f, "grid must have at least one column"),
            GridError::SpanTooWide { label, span, columns } => {
                write!(f, "key `{label}` spans {span} columns but the grid only has {columns}")
            }
        }
    }
}

impl core::error::Error for GridError {}

/// Number of whole grid cells covered by a footprint, at least one.
fn cells(footprint: Footprint) -> usize {
    usize::from(footprint.quarters().div_ceil(4)).max(1)
}

/// Occupancy map growing downwards as keys are placed.
struct Occupancy {
    columns: usize,
    taken: Vec<bool>,
}

impl Occupancy {
    fn new(columns: usize) -> Self {
        Self {
            columns,
            taken: Vec::new(),
        }
    }

    fn rows(&self) -> usize {
        self.taken.len() / self.columns
    }

    fn is_taken(&self, row: usize, column: usize) -> bool {
        self.taken.get(row * self.columns + column).copied().unwrap_or(false)
    }

    fn fits(&self, row: usize, column: usize, row_span: usize, column_span: usize) -> bool {
        column + column_span <= self.columns
            && (row..row + row_span).all(|r| (column..column + column_span).all(|c| !self.is_taken(r, c)))
    }

    fn take(&mut self, row: usize, column: usize, row_span: usize, column_span: usize) {
        let needed = (row + row_span) * self.columns;
        if self.taken.len() < needed {
            self.taken.resize(needed, false);
        }

        for r in row..row + row_span {
            for c in column..column + column_span {
                self.taken[r * self.columns + c] = true;
            }
        }
    }
}

/// Assigns a grid position to every key, in input order.
pub fn place(keys: &[KeyPlacement], columns: usize) -> Result<Vec<GridCell>, GridError> {
    if columns == 0 {
        return Err(GridError::NoColumns);
    }

    let mut occupancy = Occupancy::new(columns);
    let mut placed = Vec::with_capacity(keys.len());
    let (mut row, mut column) = (0, 0);

    for key in keys {
        let row_span = cells(key.height());
        let column_span = cells(key.width());

        if column_span > columns {
            return Err(GridError::SpanTooWide {
                label: key.label,
                span: column_span,
                columns,
            });
        }

        while !occupancy.fits(row, column, row_span, column_span) {
            column += 1;
            if column >= columns {
                column = 0;
                row += 1;
            }
        }

        occupancy.take(row, column, row_span, column_span);
        placed.push(GridCell {
            key: *key,
            row,
            column,
            row_span,
            column_span,
        });

        column += column_span;
        if column >= columns {
            column = 0;
            row += 1;
        }
    }

    debug!(keys = placed.len(), rows = occupancy.rows(), columns, "Grid placed");

    Ok(placed)
}

/// Grid height in rows for an already placed set of cells.
pub fn row_count(cells: &[GridCell]) -> usize {
    cells.iter().map(|cell| cell.row + cell.row_span).max().unwrap_or(0)
}

/// Renders occupancy as a `rows × columns` matrix of indices into `cells`.
pub fn to_matrix(cells: &[GridCell], columns: usize) -> Vec<Vec<Option<usize>>> {
    let mut matrix = vec![vec![None; columns]; row_count(cells)];

    for (idx, cell) in cells.iter().enumerate() {
        for row in matrix.iter_mut().skip(cell.row).take(cell.row_span) {
            for slot in row.iter_mut().skip(cell.column).take(cell.column_span) {
                *slot = Some(idx);
            }
        }
    }

    matrix
}
