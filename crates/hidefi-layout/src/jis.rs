use hidefi_keycode::UsageCode;

use crate::shared::{FUNCTION_ROW, NAV_CLUSTER, NUMPAD};
use crate::{key, modifier, sized, spacer, Footprint, KeyPlacement, KeyShape, LayoutDescriptor, LayoutId, Row, Slot};

// Legends are kana/kanji; glyphs are given in the trailing comments.

static NUMBER_ROW: Row = Row::Keys(&[&[
    key(UsageCode::KEY_GRAVE, "\u{534a}/\u{5168}"), // 半/全
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
    key(UsageCode::KEY_EQUAL, "^"),
    key(UsageCode::KEY_INTERNATIONAL3, "\u{a5}"), // ¥
    modifier(UsageCode::KEY_BACKSPACE, "BS", Footprint::U1),
]]);

static QWERTY_ROW: Row = Row::Keys(&[&[
    modifier(UsageCode::KEY_TAB, "Tab", Footprint::U1_5),
    key(UsageCode::KEY_Q, "Q"),
    key(UsageCode::KEY_W, "W"),
    key(UsageCode::KEY_E, "E"),
    key(UsageCode::KEY_R, "R"),
    key(UsageCode::KEY_T, "T"),
    key(UsageCode::KEY_Y, "Y"),
    key(UsageCode::KEY_U, "U"),
    key(UsageCode::KEY_I, "I"),
    key(UsageCode::KEY_O, "O"),
    key(UsageCode::KEY_P, "P"),
    key(UsageCode::KEY_LEFT_BRACKET, "@"),
    key(UsageCode::KEY_RIGHT_BRACKET, "["),
    Slot::Key(
        KeyPlacement::new(UsageCode::KEY_ENTER, "Enter")
            .with_footprint(Footprint::U1_25)
            .with_shape(KeyShape::JisEnter)
            .as_modifier(),
    ),
]]);

static HOME_ROW: Row = Row::Keys(&[&[
    modifier(UsageCode::KEY_CAPS_LOCK, "Caps", Footprint::U1_75),
    key(UsageCode::KEY_A, "A"),
    key(UsageCode::KEY_S, "S"),
    key(UsageCode::KEY_D, "D"),
    key(UsageCode::KEY_F, "F"),
    key(UsageCode::KEY_G, "G"),
    key(UsageCode::KEY_H, "H"),
    key(UsageCode::KEY_J, "J"),
    key(UsageCode::KEY_K, "K"),
    key(UsageCode::KEY_L, "L"),
    key(UsageCode::KEY_SEMICOLON, ";"),
    key(UsageCode::KEY_APOSTROPHE, ":"),
    key(UsageCode::KEY_NON_US_HASH, "]"),
    spacer(Footprint::U1_25),
]]);

static BOTTOM_ROW: Row = Row::Keys(&[&[
    modifier(UsageCode::KEY_LEFT_SHIFT, "Shift", Footprint::U2_25),
    key(UsageCode::KEY_Z, "Z"),
    key(UsageCode::KEY_X, "X"),
    key(UsageCode::KEY_C, "C"),
    key(UsageCode::KEY_V, "V"),
    key(UsageCode::KEY_B, "B"),
    key(UsageCode::KEY_N, "N"),
    key(UsageCode::KEY_M, "M"),
    key(UsageCode::KEY_COMMA, ","),
    key(UsageCode::KEY_DOT, "."),
    key(UsageCode::KEY_SLASH, "/"),
    key(UsageCode::KEY_INTERNATIONAL1, "\\_"),
    modifier(UsageCode::KEY_RIGHT_SHIFT, "Shift", Footprint::U1_75),
]]);

static SPACE_ROW: Row = Row::Keys(&[&[
    modifier(UsageCode::KEY_LEFT_CTRL, "Ctrl", Footprint::U1_25),
    modifier(UsageCode::KEY_LEFT_GUI, "Win", Footprint::U1),
    modifier(UsageCode::KEY_LEFT_ALT, "Alt", Footprint::U1),
    modifier(UsageCode::KEY_INTERNATIONAL5, "\u{7121}\u{5909}\u{63db}", Footprint::U1_25), // 無変換
    sized(UsageCode::KEY_SPACE, "Space", Footprint::U2_75),
    modifier(UsageCode::KEY_INTERNATIONAL4, "\u{5909}\u{63db}", Footprint::U1_25), // 変換
    modifier(UsageCode::KEY_INTERNATIONAL2, "\u{304b}\u{306a}", Footprint::U1), // かな
    modifier(UsageCode::KEY_RIGHT_ALT, "Alt", Footprint::U1),
    modifier(UsageCode::KEY_RIGHT_GUI, "Win", Footprint::U1),
    modifier(UsageCode::KEY_APPLICATION, "Menu", Footprint::U1),
    modifier(UsageCode::KEY_RIGHT_CTRL, "Ctrl", Footprint::U1_25),
]]);

pub(crate) static LAYOUT: LayoutDescriptor = LayoutDescriptor {
    id: LayoutId::Jis,
    name: "Japanese JIS",
    main: &[
        &FUNCTION_ROW,
        &NUMBER_ROW,
        &QWERTY_ROW,
        &HOME_ROW,
        &BOTTOM_ROW,
        &SPACE_ROW,
    ],
    nav: &NAV_CLUSTER,
    numpad: &NUMPAD,
};
