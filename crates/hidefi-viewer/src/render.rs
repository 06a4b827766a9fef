//! Text rendering of a layout.
//!
//! One key unit is [`UNIT_WIDTH`] characters wide and one line high. Keys are drawn
//! as `[label]`, highlighted keys as `<label>`.

use hidefi::keycode::UsageCode;
use hidefi::layout::grid::{self, GridError, NUMPAD_COLUMNS};
use hidefi::layout::{get_layout, Footprint, KeyPlacement, LayoutDescriptor, LayoutId, Row, Slot};

pub const UNIT_WIDTH: usize = 8;

const SECTION_GAP: &str = "  ";

fn chars_for(footprint: Footprint) -> usize {
    usize::from(footprint.quarters()) * UNIT_WIDTH / 4
}

fn key_cell(label: &str, width: usize, highlighted: bool) -> String {
    let (open, close) = if highlighted { ('<', '>') } else { ('[', ']') };
    let inner = width.saturating_sub(2);
    let label: String = label.chars().take(inner).collect();

    format!("{open}{label:<inner$}{close}")
}

fn is_highlighted(key: &KeyPlacement, highlight: Option<UsageCode>) -> bool {
    highlight == Some(key.usage)
}

fn render_row(row: &Row, highlight: Option<UsageCode>, out: &mut String) {
    match row {
        Row::Gap(height) => {
            let lines = height.map_or(1, |height| usize::from(height.quarters() / 4).max(1));

            for _ in 0..lines {
                out.push('\n');
            }
        }
        Row::Keys(sections) => {
            let mut line = String::new();

            for (idx, section) in sections.iter().enumerate() {
                if idx > 0 {
                    line.push_str(SECTION_GAP);
                }

                for slot in section.iter() {
                    match slot {
                        Slot::Key(key) => {
                            line.push_str(&key_cell(
                                key.label,
                                chars_for(key.width()),
                                is_highlighted(key, highlight),
                            ));
                        }
                        Slot::Spacer(footprint) => {
                            line.push_str(&" ".repeat(chars_for(*footprint)));
                        }
                    }
                }
            }

            out.push_str(line.trim_end());
            out.push('\n');
        }
    }
}

/// Draws the keypad on a 4-column grid honoring the double-width and double-height keys.
pub fn render_numpad(layout: &LayoutDescriptor, highlight: Option<UsageCode>) -> Result<String, GridError> {
    let cells = grid::place(layout.numpad, NUMPAD_COLUMNS)?;
    let matrix = grid::to_matrix(&cells, NUMPAD_COLUMNS);

    let mut out = String::new();

    for (row, columns) in matrix.iter().enumerate() {
        let mut line = String::new();

        for (column, occupant) in columns.iter().enumerate() {
            let Some(cell) = occupant.and_then(|idx| cells.get(idx)) else {
                line.push_str(&" ".repeat(UNIT_WIDTH));
                continue;
            };

            if column != cell.column {
                // Covered by the left part of a wide key.
                continue;
            }

            let width = cell.column_span * UNIT_WIDTH;
            let highlighted = is_highlighted(&cell.key, highlight);

            if row == cell.row {
                line.push_str(&key_cell(cell.key.label, width, highlighted));
            } else {
                line.push_str(&key_cell("", width, highlighted));
            }
        }

        out.push_str(line.trim_end());
        out.push('\n');
    }

    Ok(out)
}

/// Draws the main block, the navigation cluster and the keypad of a layout, one after the other.
pub fn render(id: LayoutId, highlight: Option<UsageCode>) -> Result<String, GridError> {
    let layout = get_layout(id);
    let mut out = String::new();

    out.push_str(&format!("{} ({})\n\n", layout.name, layout.id));

    for row in layout.main {
        render_row(row, highlight, &mut out);
    }

    out.push_str("\nNavigation\n");
    for row in layout.nav {
        render_row(row, highlight, &mut out);
    }

    out.push_str("\nKeypad\n");
    out.push_str(&render_numpad(layout, highlight)?);

    trace!(layout = %id, lines = out.lines().count(), "Rendered layout");

    Ok(out)
}
