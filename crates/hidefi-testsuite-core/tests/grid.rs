use expect_test::expect;
use hidefi_keycode::UsageCode;
use hidefi_layout::grid::{place, row_count, to_matrix, GridCell, GridError, NUMPAD_COLUMNS};
use hidefi_layout::{Footprint, KeyPlacement, KeyShape, NUMPAD};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn cell_of<'a>(cells: &'a [GridCell], label: &str) -> &'a GridCell {
    cells.iter().find(|cell| cell.key.label == label).unwrap()
}

#[rstest]
#[case("Num", 0, 0, 1, 1)]
#[case("-", 0, 3, 1, 1)]
#[case("+", 1, 3, 2, 1)]
#[case("4", 2, 0, 1, 1)]
#[case("6", 2, 2, 1, 1)]
#[case("Ent", 3, 3, 2, 1)]
#[case("0", 4, 0, 1, 2)]
#[case(".", 4, 2, 1, 1)]
fn numpad_positions(
    #[case] label: &str,
    #[case] row: usize,
    #[case] column: usize,
    #[case] row_span: usize,
    #[case] column_span: usize,
) {
    let cells = place(&NUMPAD, NUMPAD_COLUMNS).unwrap();
    let cell = cell_of(&cells, label);

    assert_eq!(
        (cell.row, cell.column, cell.row_span, cell.column_span),
        (row, column, row_span, column_span)
    );
}

#[test]
fn numpad_matrix() {
    let cells = place(&NUMPAD, NUMPAD_COLUMNS).unwrap();

    assert_eq!(cells.len(), 17);
    assert_eq!(row_count(&cells), 5);

    let matrix = to_matrix(&cells, NUMPAD_COLUMNS);
    let text: Vec<String> = matrix
        .iter()
        .map(|row| {
            row.iter()
                .map(|slot| slot.map_or("_", |idx| cells[idx].key.label))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    expect![[r#"
        [
            "Num / * -",
            "7 8 9 +",
            "4 5 6 +",
            "1 2 3 Ent",
            "0 0 . Ent",
        ]
    "#]]
    .assert_debug_eq(&text);
}

#[test]
fn tall_key_covers_two_rows() {
    let cells = place(&NUMPAD, NUMPAD_COLUMNS).unwrap();
    let plus = cell_of(&cells, "+");

    assert!(plus.covers(1, 3));
    assert!(plus.covers(2, 3));
    assert!(!plus.covers(3, 3));
    assert!(!plus.covers(1, 2));
}

#[test]
fn no_columns() {
    assert_eq!(place(&NUMPAD, 0), Err(GridError::NoColumns));
}

#[test]
fn span_too_wide() {
    let wide = KeyPlacement::new(UsageCode::KEY_SPACE, "Space")
        .with_footprint(Footprint::U7_5)
        .with_shape(KeyShape::Wide);

    let error = place(&[wide], NUMPAD_COLUMNS).unwrap_err();

    assert_eq!(
        error,
        GridError::SpanTooWide {
            label: "Space",
            span: 8,
            columns: 4,
        }
    );
    assert_eq!(error.to_string(), "key `Space` spans 8 columns but the grid only has 4");
}

#[test]
fn wide_key_wraps_to_next_row() {
    let keys = [
        KeyPlacement::new(UsageCode::KEYPAD_1, "1"),
        KeyPlacement::new(UsageCode::KEYPAD_0, "0").with_footprint(Footprint::U2),
    ];

    let cells = place(&keys, 2).unwrap();

    assert_eq!((cells[1].row, cells[1].column), (1, 0));
    assert_eq!(row_count(&cells), 2);
}

#[test]
fn empty_grid() {
    let cells = place(&[], NUMPAD_COLUMNS).unwrap();

    assert!(cells.is_empty());
    assert_eq!(row_count(&cells), 0);
    assert!(to_matrix(&cells, NUMPAD_COLUMNS).is_empty());
}
