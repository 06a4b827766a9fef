use crate::{EfiKey, EfiScanCode, KeyDescriptor, UsageCode};

const fn unmapped(usage: UsageCode, name: &'static str) -> KeyDescriptor {
    KeyDescriptor {
        usage,
        name,
        efi_key: None,
        scan_code: None,
    }
}

const fn key(usage: UsageCode, name: &'static str, efi_key: EfiKey) -> KeyDescriptor {
    KeyDescriptor {
        usage,
        name,
        efi_key: Some(efi_key),
        scan_code: None,
    }
}

const fn special(usage: UsageCode, name: &'static str, efi_key: EfiKey, scan_code: EfiScanCode) -> KeyDescriptor {
    KeyDescriptor {
        usage,
        name,
        efi_key: Some(efi_key),
        scan_code: Some(scan_code),
    }
}

/// Lookup index with one slot per possible usage code.
pub(crate) static INDEX: [Option<KeyDescriptor>; 256] = build_index(ENTRIES);

const fn build_index(entries: &[KeyDescriptor]) -> [Option<KeyDescriptor>; 256] {
    let mut index = [None; 256];

    let mut i = 0;
    while i < entries.len() {
        let entry = entries[i];
        let slot = entry.usage.as_idx();

        assert!(index[slot].is_none(), "duplicate usage code in key table");
        index[slot] = Some(entry);

        i += 1;
    }

    index
}

// Entries must stay in ascending usage order: `entries()` exposes this slice as-is.
pub(crate) const ENTRIES: &[KeyDescriptor] = &[
    // Error codes
    unmapped(UsageCode::RESERVED, "Reserved"),
    unmapped(UsageCode::ERROR_ROLL_OVER, "ErrorRollOver"),
    unmapped(UsageCode::POST_FAIL, "POSTFail"),
    unmapped(UsageCode::ERROR_UNDEFINED, "ErrorUndefined"),
    // Letters
    key(UsageCode::KEY_A, "A", EfiKey::C1),
    key(UsageCode::KEY_B, "B", EfiKey::B5),
    key(UsageCode::KEY_C, "C", EfiKey::B3),
    key(UsageCode::KEY_D, "D", EfiKey::C3),
    key(UsageCode::KEY_E, "E", EfiKey::D3),
    key(UsageCode::KEY_F, "F", EfiKey::C4),
    key(UsageCode::KEY_G, "G", EfiKey::C5),
    key(UsageCode::KEY_H, "H", EfiKey::C6),
    key(UsageCode::KEY_I, "I", EfiKey::D8),
    key(UsageCode::KEY_J, "J", EfiKey::C7),
    key(UsageCode::KEY_K, "K", EfiKey::C8),
    key(UsageCode::KEY_L, "L", EfiKey::C9),
    key(UsageCode::KEY_M, "M", EfiKey::B7),
    key(UsageCode::KEY_N, "N", EfiKey::B6),
    key(UsageCode::KEY_O, "O", EfiKey::D9),
    key(UsageCode::KEY_P, "P", EfiKey::D10),
    key(UsageCode::KEY_Q, "Q", EfiKey::D1),
    key(UsageCode::KEY_R, "R", EfiKey::D4),
    key(UsageCode::KEY_S, "S", EfiKey::C2),
    key(UsageCode::KEY_T, "T", EfiKey::D5),
    key(UsageCode::KEY_U, "U", EfiKey::D7),
    key(UsageCode::KEY_V, "V", EfiKey::B4),
    key(UsageCode::KEY_W, "W", EfiKey::D2),
    key(UsageCode::KEY_X, "X", EfiKey::B2),
    key(UsageCode::KEY_Y, "Y", EfiKey::D6),
    key(UsageCode::KEY_Z, "Z", EfiKey::B1),
    // Number row
    key(UsageCode::KEY_1, "1 !", EfiKey::E1),
    key(UsageCode::KEY_2, "2 @", EfiKey::E2),
    key(UsageCode::KEY_3, "3 #", EfiKey::E3),
    key(UsageCode::KEY_4, "4 $", EfiKey::E4),
    key(UsageCode::KEY_5, "5 %", EfiKey::E5),
    key(UsageCode::KEY_6, "6 ^", EfiKey::E6),
    key(UsageCode::KEY_7, "7 &", EfiKey::E7),
    key(UsageCode::KEY_8, "8 *", EfiKey::E8),
    key(UsageCode::KEY_9, "9 (", EfiKey::E9),
    key(UsageCode::KEY_0, "0 )", EfiKey::E10),
    // Editing and punctuation
    key(UsageCode::KEY_ENTER, "Enter", EfiKey::Enter),
    special(UsageCode::KEY_ESCAPE, "Escape", EfiKey::Esc, EfiScanCode::SCAN_ESC),
    key(UsageCode::KEY_BACKSPACE, "Backspace", EfiKey::BackSpace),
    key(UsageCode::KEY_TAB, "Tab", EfiKey::Tab),
    key(UsageCode::KEY_SPACE, "Space", EfiKey::SpaceBar),
    key(UsageCode::KEY_MINUS, "- _", EfiKey::E11),
    key(UsageCode::KEY_EQUAL, "= +", EfiKey::E12),
    key(UsageCode::KEY_LEFT_BRACKET, "[ {", EfiKey::D11),
    key(UsageCode::KEY_RIGHT_BRACKET, "] }", EfiKey::D12),
    key(UsageCode::KEY_BACKSLASH, "\\ |", EfiKey::D13),
    key(UsageCode::KEY_NON_US_HASH, "Non-US # ~", EfiKey::C12),
    key(UsageCode::KEY_SEMICOLON, "; :", EfiKey::C10),
    key(UsageCode::KEY_APOSTROPHE, "' \"", EfiKey::C11),
    key(UsageCode::KEY_GRAVE, "` ~", EfiKey::E0),
    key(UsageCode::KEY_COMMA, ", <", EfiKey::B8),
    key(UsageCode::KEY_DOT, ". >", EfiKey::B9),
    key(UsageCode::KEY_SLASH, "/ ?", EfiKey::B10),
    key(UsageCode::KEY_CAPS_LOCK, "Caps Lock", EfiKey::CapsLock),
    // Function keys; F11 and F12 have no EFI 1.x scan code mapping here
    special(UsageCode::KEY_F1, "F1", EfiKey::F1, EfiScanCode::SCAN_F1),
    special(UsageCode::KEY_F2, "F2", EfiKey::F2, EfiScanCode::SCAN_F2),
    special(UsageCode::KEY_F3, "F3", EfiKey::F3, EfiScanCode::SCAN_F3),
    special(UsageCode::KEY_F4, "F4", EfiKey::F4, EfiScanCode::SCAN_F4),
    special(UsageCode::KEY_F5, "F5", EfiKey::F5, EfiScanCode::SCAN_F5),
    special(UsageCode::KEY_F6, "F6", EfiKey::F6, EfiScanCode::SCAN_F6),
    special(UsageCode::KEY_F7, "F7", EfiKey::F7, EfiScanCode::SCAN_F7),
    special(UsageCode::KEY_F8, "F8", EfiKey::F8, EfiScanCode::SCAN_F8),
    special(UsageCode::KEY_F9, "F9", EfiKey::F9, EfiScanCode::SCAN_F9),
    special(UsageCode::KEY_F10, "F10", EfiKey::F10, EfiScanCode::SCAN_F10),
    key(UsageCode::KEY_F11, "F11", EfiKey::F11),
    key(UsageCode::KEY_F12, "F12", EfiKey::F12),
    key(UsageCode::KEY_PRINT_SCREEN, "Print Screen", EfiKey::Print),
    key(UsageCode::KEY_SCROLL_LOCK, "Scroll Lock", EfiKey::SLck),
    key(UsageCode::KEY_PAUSE, "Pause", EfiKey::Pause),
    // Navigation
    special(UsageCode::KEY_INSERT, "Insert", EfiKey::Ins, EfiScanCode::SCAN_INSERT),
    special(UsageCode::KEY_HOME, "Home", EfiKey::Home, EfiScanCode::SCAN_HOME),
    special(UsageCode::KEY_PAGE_UP, "Page Up", EfiKey::PgUp, EfiScanCode::SCAN_PAGE_UP),
    special(UsageCode::KEY_DELETE, "Delete", EfiKey::Del, EfiScanCode::SCAN_DELETE),
    special(UsageCode::KEY_END, "End", EfiKey::End, EfiScanCode::SCAN_END),
    special(UsageCode::KEY_PAGE_DOWN, "Page Down", EfiKey::PgDn, EfiScanCode::SCAN_PAGE_DOWN),
    special(UsageCode::KEY_RIGHT_ARROW, "Right Arrow", EfiKey::RightArrow, EfiScanCode::SCAN_RIGHT),
    special(UsageCode::KEY_LEFT_ARROW, "Left Arrow", EfiKey::LeftArrow, EfiScanCode::SCAN_LEFT),
    special(UsageCode::KEY_DOWN_ARROW, "Down Arrow", EfiKey::DownArrow, EfiScanCode::SCAN_DOWN),
    special(UsageCode::KEY_UP_ARROW, "Up Arrow", EfiKey::UpArrow, EfiScanCode::SCAN_UP),
    // Keypad; digits double as navigation keys with Num Lock off
    key(UsageCode::KEYPAD_NUM_LOCK, "Num Lock", EfiKey::NLck),
    key(UsageCode::KEYPAD_SLASH, "Numpad /", EfiKey::Slash),
    key(UsageCode::KEYPAD_ASTERISK, "Numpad *", EfiKey::Asterisk),
    key(UsageCode::KEYPAD_MINUS, "Numpad -", EfiKey::Minus),
    key(UsageCode::KEYPAD_PLUS, "Numpad +", EfiKey::Plus),
    key(UsageCode::KEYPAD_ENTER, "Numpad Enter", EfiKey::Enter),
    special(UsageCode::KEYPAD_1, "Numpad 1", EfiKey::One, EfiScanCode::SCAN_END),
    special(UsageCode::KEYPAD_2, "Numpad 2", EfiKey::Two, EfiScanCode::SCAN_DOWN),
    special(UsageCode::KEYPAD_3, "Numpad 3", EfiKey::Three, EfiScanCode::SCAN_PAGE_DOWN),
    special(UsageCode::KEYPAD_4, "Numpad 4", EfiKey::Four, EfiScanCode::SCAN_LEFT),
    key(UsageCode::KEYPAD_5, "Numpad 5", EfiKey::Five),
    special(UsageCode::KEYPAD_6, "Numpad 6", EfiKey::Six, EfiScanCode::SCAN_RIGHT),
    special(UsageCode::KEYPAD_7, "Numpad 7", EfiKey::Seven, EfiScanCode::SCAN_HOME),
    special(UsageCode::KEYPAD_8, "Numpad 8", EfiKey::Eight, EfiScanCode::SCAN_UP),
    special(UsageCode::KEYPAD_9, "Numpad 9", EfiKey::Nine, EfiScanCode::SCAN_PAGE_UP),
    special(UsageCode::KEYPAD_0, "Numpad 0", EfiKey::Zero, EfiScanCode::SCAN_INSERT),
    special(UsageCode::KEYPAD_DOT, "Numpad .", EfiKey::Period, EfiScanCode::SCAN_DELETE),
    key(UsageCode::KEY_NON_US_BACKSLASH, "Non-US \\ |", EfiKey::B0),
    key(UsageCode::KEY_APPLICATION, "Application", EfiKey::A4),
    unmapped(UsageCode::KEY_POWER, "Power"),
    unmapped(UsageCode::KEYPAD_EQUAL, "Numpad ="),
    unmapped(UsageCode::KEY_F13, "F13"),
    unmapped(UsageCode::KEY_F14, "F14"),
    unmapped(UsageCode::KEY_F15, "F15"),
    unmapped(UsageCode::KEY_F16, "F16"),
    unmapped(UsageCode::KEY_F17, "F17"),
    unmapped(UsageCode::KEY_F18, "F18"),
    unmapped(UsageCode::KEY_F19, "F19"),
    unmapped(UsageCode::KEY_F20, "F20"),
    unmapped(UsageCode::KEY_F21, "F21"),
    unmapped(UsageCode::KEY_F22, "F22"),
    unmapped(UsageCode::KEY_F23, "F23"),
    unmapped(UsageCode::KEY_F24, "F24"),
    // 0x74..=0x86 reserved
    // International keys (JIS)
    key(UsageCode::KEY_INTERNATIONAL1, "International1 (\\_ \u{308d})", EfiKey::B0),
    key(
        UsageCode::KEY_INTERNATIONAL2,
        "International2 (\u{3072}\u{3089}\u{304c}\u{306a})",
        EfiKey::A3,
    ),
    key(UsageCode::KEY_INTERNATIONAL3, "International3 (\u{a5} |)", EfiKey::D13),
    key(UsageCode::KEY_INTERNATIONAL4, "International4 (\u{5909}\u{63db})", EfiKey::A2),
    key(
        UsageCode::KEY_INTERNATIONAL5,
        "International5 (\u{7121}\u{5909}\u{63db})",
        EfiKey::A1,
    ),
    // 0x8C..=0xDF reserved
    // Modifiers
    key(UsageCode::KEY_LEFT_CTRL, "Left Control", EfiKey::LCtrl),
    key(UsageCode::KEY_LEFT_SHIFT, "Left Shift", EfiKey::LShift),
    key(UsageCode::KEY_LEFT_ALT, "Left Alt", EfiKey::A0),
    key(UsageCode::KEY_LEFT_GUI, "Left Windows", EfiKey::A1),
    key(UsageCode::KEY_RIGHT_CTRL, "Right Control", EfiKey::RCtrl),
    key(UsageCode::KEY_RIGHT_SHIFT, "Right Shift", EfiKey::RShift),
    key(UsageCode::KEY_RIGHT_ALT, "Right Alt", EfiKey::A3),
    key(UsageCode::KEY_RIGHT_GUI, "Right Windows", EfiKey::A4),
    // 0xE8..=0xFF reserved
];
