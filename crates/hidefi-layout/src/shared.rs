//! Sub-layouts referenced by more than one layout.

use hidefi_keycode::UsageCode;

use crate::{key, modifier, sized, spacer, Footprint, KeyPlacement, KeyShape, Row};

/// Escape and F1–F12, common to all three layouts.
pub static FUNCTION_ROW: Row = Row::Keys(&[&[
    key(UsageCode::KEY_ESCAPE, "Esc"),
    spacer(Footprint::U1),
    key(UsageCode::KEY_F1, "F1"),
    key(UsageCode::KEY_F2, "F2"),
    key(UsageCode::KEY_F3, "F3"),
    key(UsageCode::KEY_F4, "F4"),
    spacer(Footprint::U0_5),
    key(UsageCode::KEY_F5, "F5"),
    key(UsageCode::KEY_F6, "F6"),
    key(UsageCode::KEY_F7, "F7"),
    key(UsageCode::KEY_F8, "F8"),
    spacer(Footprint::U0_5),
    key(UsageCode::KEY_F9, "F9"),
    key(UsageCode::KEY_F10, "F10"),
    key(UsageCode::KEY_F11, "F11"),
    key(UsageCode::KEY_F12, "F12"),
]]);

/// US number row with a 2-unit Backspace, used by ANSI and ISO.
pub static NUMBER_ROW: Row = Row::Keys(&[&[
    key(UsageCode::KEY_GRAVE, "`"),
    key(UsageCode::KEY_1, "1"),
    key(UsageCode::KEY_2, "2"),
    key(UsageCode::KEY_3, "3"),
    key(UsageCode::KEY_4, "4"),
    key(UsageCode::KEY_5, "5"),
    key(UsageCode::KEY_6, "6"),
    key(UsageCode::KEY_7, "7"),
    key(UsageCode::KEY_8, "8"),
    key(UsageCode::KEY_9, "9"),
    key(UsageCode::KEY_0, "0"),
    key(UsageCode::KEY_MINUS, "-"),
    key(UsageCode::KEY_EQUAL, "="),
    modifier(UsageCode::KEY_BACKSPACE, "Backspace", Footprint::U2),
]]);

/// Seven-key space row with a 7.5-unit Space bar, used by ANSI and ISO.
pub static SPACE_ROW: Row = Row::Keys(&[&[
    modifier(UsageCode::KEY_LEFT_CTRL, "Ctrl", Footprint::U1_25),
    modifier(UsageCode::KEY_LEFT_GUI, "Win", Footprint::U1_25),
    modifier(UsageCode::KEY_LEFT_ALT, "Alt", Footprint::U1_25),
    sized(UsageCode::KEY_SPACE, "Space", Footprint::U7_5),
    modifier(UsageCode::KEY_RIGHT_ALT, "Alt", Footprint::U1_25),
    modifier(UsageCode::KEY_APPLICATION, "Menu", Footprint::U1_25),
    modifier(UsageCode::KEY_RIGHT_CTRL, "Ctrl", Footprint::U1_25),
]]);

/// Print Screen block, editing block and inverted-T arrows.
pub static NAV_CLUSTER: [Row; 7] = [
    Row::Keys(&[&[
        key(UsageCode::KEY_PRINT_SCREEN, "PrtSc"),
        key(UsageCode::KEY_SCROLL_LOCK, "ScrLk"),
        key(UsageCode::KEY_PAUSE, "Pause"),
    ]]),
    Row::Gap(None),
    Row::Keys(&[&[
        key(UsageCode::KEY_INSERT, "Ins"),
        key(UsageCode::KEY_HOME, "Home"),
        key(UsageCode::KEY_PAGE_UP, "PgUp"),
    ]]),
    Row::Keys(&[&[
        key(UsageCode::KEY_DELETE, "Del"),
        key(UsageCode::KEY_END, "End"),
        key(UsageCode::KEY_PAGE_DOWN, "PgDn"),
    ]]),
    // Height of the two rows between the editing block and the arrows.
    Row::Gap(Some(Footprint::U2)),
    Row::Keys(&[&[
        spacer(Footprint::U1),
        key(UsageCode::KEY_UP_ARROW, "\u{2191}"), // ↑
        spacer(Footprint::U1),
    ]]),
    Row::Keys(&[&[
        key(UsageCode::KEY_LEFT_ARROW, "\u{2190}"),  // ←
        key(UsageCode::KEY_DOWN_ARROW, "\u{2193}"),  // ↓
        key(UsageCode::KEY_RIGHT_ARROW, "\u{2192}"), // →
    ]]),
];

const fn pad(usage: UsageCode, label: &'static str) -> KeyPlacement {
    KeyPlacement::new(usage, label)
}

/// Numeric keypad in row-major flow order, 4 columns wide.
pub static NUMPAD: [KeyPlacement; 17] = [
    pad(UsageCode::KEYPAD_NUM_LOCK, "Num"),
    pad(UsageCode::KEYPAD_SLASH, "/"),
    pad(UsageCode::KEYPAD_ASTERISK, "*"),
    pad(UsageCode::KEYPAD_MINUS, "-"),
    pad(UsageCode::KEYPAD_7, "7"),
    pad(UsageCode::KEYPAD_8, "8"),
    pad(UsageCode::KEYPAD_9, "9"),
    pad(UsageCode::KEYPAD_PLUS, "+").with_shape(KeyShape::Tall),
    pad(UsageCode::KEYPAD_4, "4"),
    pad(UsageCode::KEYPAD_5, "5"),
    pad(UsageCode::KEYPAD_6, "6"),
    pad(UsageCode::KEYPAD_1, "1"),
    pad(UsageCode::KEYPAD_2, "2"),
    pad(UsageCode::KEYPAD_3, "3"),
    pad(UsageCode::KEYPAD_ENTER, "Ent").with_shape(KeyShape::Tall),
    pad(UsageCode::KEYPAD_0, "0")
        .with_footprint(Footprint::U2)
        .with_shape(KeyShape::Wide),
    pad(UsageCode::KEYPAD_DOT, "."),
];
