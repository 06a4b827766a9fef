use hidefi_keycode::UsageCode;

use crate::shared::{FUNCTION_ROW, NAV_CLUSTER, NUMBER_ROW, NUMPAD, SPACE_ROW};
use crate::{key, modifier, sized, Footprint, LayoutDescriptor, LayoutId, Row};

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
    key(UsageCode::KEY_LEFT_BRACKET, "["),
    key(UsageCode::KEY_RIGHT_BRACKET, "]"),
    sized(UsageCode::KEY_BACKSLASH, "\\", Footprint::U1_5),
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
    key(UsageCode::KEY_APOSTROPHE, "'"),
    modifier(UsageCode::KEY_ENTER, "Enter", Footprint::U2_25),
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
    modifier(UsageCode::KEY_RIGHT_SHIFT, "Shift", Footprint::U2_75),
]]);

pub(crate) static LAYOUT: LayoutDescriptor = LayoutDescriptor {
    id: LayoutId::Ansi,
    name: "US ANSI",
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
