use core::fmt;
use core::num::ParseIntError;
use core::str::FromStr;

/// USB HID usage ID on the Keyboard/Keypad page (0x07).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct UsageCode(u8);

impl UsageCode {
    pub const fn from_u8(code: u8) -> Self {
        Self(code)
    }

    pub const fn as_u8(self) -> u8 {
        self.0
    }

    #[allow(clippy::as_conversions)] // lossless, `From` is not usable in const context
    pub const fn as_idx(self) -> usize {
        self.0 as usize
    }
}

impl From<u8> for UsageCode {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

impl From<UsageCode> for u8 {
    fn from(usage: UsageCode) -> Self {
        usage.0
    }
}

impl fmt::Display for UsageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseUsageCodeError {
    source: ParseIntError,
}

impl fmt::Display for ParseUsageCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid usage code (expected 0-255 or 0x00-0xFF): {}", self.source)
    }
}

impl core::error::Error for ParseUsageCodeError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Accepts decimal (`40`) or `0x`-prefixed hexadecimal (`0x28`).
impl FromStr for UsageCode {
    type Err = ParseUsageCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let code = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            u8::from_str_radix(hex, 16)
        } else {
            s.parse::<u8>()
        };

        code.map(Self).map_err(|source| ParseUsageCodeError { source })
    }
}

// Names follow the HID Usage Tables, Keyboard/Keypad page (0x07).
// https://usb.org/document-library/hid-usage-tables-15

impl UsageCode {
    pub const RESERVED: Self = Self(0x00);
    pub const ERROR_ROLL_OVER: Self = Self(0x01);
    pub const POST_FAIL: Self = Self(0x02);
    pub const ERROR_UNDEFINED: Self = Self(0x03);

    pub const KEY_A: Self = Self(0x04);
    pub const KEY_B: Self = Self(0x05);
    pub const KEY_C: Self = Self(0x06);
    pub const KEY_D: Self = Self(0x07);
    pub const KEY_E: Self = Self(0x08);
    pub const KEY_F: Self = Self(0x09);
    pub const KEY_G: Self = Self(0x0A);
    pub const KEY_H: Self = Self(0x0B);
    pub const KEY_I: Self = Self(0x0C);
    pub const KEY_J: Self = Self(0x0D);
    pub const KEY_K: Self = Self(0x0E);
    pub const KEY_L: Self = Self(0x0F);
    pub const KEY_M: Self = Self(0x10);
    pub const KEY_N: Self = Self(0x11);
    pub const KEY_O: Self = Self(0x12);
    pub const KEY_P: Self = Self(0x13);
    pub const KEY_Q: Self = Self(0x14);
    pub const KEY_R: Self = Self(0x15);
    pub const KEY_S: Self = Self(0x16);
    pub const KEY_T: Self = Self(0x17);
    pub const KEY_U: Self = Self(0x18);
    pub const KEY_V: Self = Self(0x19);
    pub const KEY_W: Self = Self(0x1A);
    pub const KEY_X: Self = Self(0x1B);
    pub const KEY_Y: Self = Self(0x1C);
    pub const KEY_Z: Self = Self(0x1D);

    pub const KEY_1: Self = Self(0x1E);
    pub const KEY_2: Self = Self(0x1F);
    pub const KEY_3: Self = Self(0x20);
    pub const KEY_4: Self = Self(0x21);
    pub const KEY_5: Self = Self(0x22);
    pub const KEY_6: Self = Self(0x23);
    pub const KEY_7: Self = Self(0x24);
    pub const KEY_8: Self = Self(0x25);
    pub const KEY_9: Self = Self(0x26);
    pub const KEY_0: Self = Self(0x27);

    pub const KEY_ENTER: Self = Self(0x28);
    pub const KEY_ESCAPE: Self = Self(0x29);
    pub const KEY_BACKSPACE: Self = Self(0x2A);
    pub const KEY_TAB: Self = Self(0x2B);
    pub const KEY_SPACE: Self = Self(0x2C);
    pub const KEY_MINUS: Self = Self(0x2D);
    pub const KEY_EQUAL: Self = Self(0x2E);
    pub const KEY_LEFT_BRACKET: Self = Self(0x2F);
    pub const KEY_RIGHT_BRACKET: Self = Self(0x30);
    pub const KEY_BACKSLASH: Self = Self(0x31);
    pub const KEY_NON_US_HASH: Self = Self(0x32);
    pub const KEY_SEMICOLON: Self = Self(0x33);
    pub const KEY_APOSTROPHE: Self = Self(0x34);
    pub const KEY_GRAVE: Self = Self(0x35);
    pub const KEY_COMMA: Self = Self(0x36);
    pub const KEY_DOT: Self = Self(0x37);
    pub const KEY_SLASH: Self = Self(0x38);
    pub const KEY_CAPS_LOCK: Self = Self(0x39);

    pub const KEY_F1: Self = Self(0x3A);
    pub const KEY_F2: Self = Self(0x3B);
    pub const KEY_F3: Self = Self(0x3C);
    pub const KEY_F4: Self = Self(0x3D);
    pub const KEY_F5: Self = Self(0x3E);
    pub const KEY_F6: Self = Self(0x3F);
    pub const KEY_F7: Self = Self(0x40);
    pub const KEY_F8: Self = Self(0x41);
    pub const KEY_F9: Self = Self(0x42);
    pub const KEY_F10: Self = Self(0x43);
    pub const KEY_F11: Self = Self(0x44);
    pub const KEY_F12: Self = Self(0x45);

    pub const KEY_PRINT_SCREEN: Self = Self(0x46);
    pub const KEY_SCROLL_LOCK: Self = Self(0x47);
    pub const KEY_PAUSE: Self = Self(0x48);
    pub const KEY_INSERT: Self = Self(0x49);
    pub const KEY_HOME: Self = Self(0x4A);
    pub const KEY_PAGE_UP: Self = Self(0x4B);
    pub const KEY_DELETE: Self = Self(0x4C);
    pub const KEY_END: Self = Self(0x4D);
    pub const KEY_PAGE_DOWN: Self = Self(0x4E);
    pub const KEY_RIGHT_ARROW: Self = Self(0x4F);
    pub const KEY_LEFT_ARROW: Self = Self(0x50);
    pub const KEY_DOWN_ARROW: Self = Self(0x51);
    pub const KEY_UP_ARROW: Self = Self(0x52);

    pub const KEYPAD_NUM_LOCK: Self = Self(0x53);
    pub const KEYPAD_SLASH: Self = Self(0x54);
    pub const KEYPAD_ASTERISK: Self = Self(0x55);
    pub const KEYPAD_MINUS: Self = Self(0x56);
    pub const KEYPAD_PLUS: Self = Self(0x57);
    pub const KEYPAD_ENTER: Self = Self(0x58);
    pub const KEYPAD_1: Self = Self(0x59);
    pub const KEYPAD_2: Self = Self(0x5A);
    pub const KEYPAD_3: Self = Self(0x5B);
    pub const KEYPAD_4: Self = Self(0x5C);
    pub const KEYPAD_5: Self = Self(0x5D);
    pub const KEYPAD_6: Self = Self(0x5E);
    pub const KEYPAD_7: Self = Self(0x5F);
    pub const KEYPAD_8: Self = Self(0x60);
    pub const KEYPAD_9: Self = Self(0x61);
    pub const KEYPAD_0: Self = Self(0x62);
    pub const KEYPAD_DOT: Self = Self(0x63);

    pub const KEY_NON_US_BACKSLASH: Self = Self(0x64);
    pub const KEY_APPLICATION: Self = Self(0x65);
    pub const KEY_POWER: Self = Self(0x66);
    pub const KEYPAD_EQUAL: Self = Self(0x67);

    pub const KEY_F13: Self = Self(0x68);
    pub const KEY_F14: Self = Self(0x69);
    pub const KEY_F15: Self = Self(0x6A);
    pub const KEY_F16: Self = Self(0x6B);
    pub const KEY_F17: Self = Self(0x6C);
    pub const KEY_F18: Self = Self(0x6D);
    pub const KEY_F19: Self = Self(0x6E);
    pub const KEY_F20: Self = Self(0x6F);
    pub const KEY_F21: Self = Self(0x70);
    pub const KEY_F22: Self = Self(0x71);
    pub const KEY_F23: Self = Self(0x72);
    pub const KEY_F24: Self = Self(0x73);

    /// `\ _` / ろ on JIS keyboards
    pub const KEY_INTERNATIONAL1: Self = Self(0x87);
    /// Katakana/Hiragana (かな)
    pub const KEY_INTERNATIONAL2: Self = Self(0x88);
    /// Yen (¥)
    pub const KEY_INTERNATIONAL3: Self = Self(0x89);
    /// Henkan (変換)
    pub const KEY_INTERNATIONAL4: Self = Self(0x8A);
    /// Muhenkan (無変換)
    pub const KEY_INTERNATIONAL5: Self = Self(0x8B);

    pub const KEY_LEFT_CTRL: Self = Self(0xE0);
    pub const KEY_LEFT_SHIFT: Self = Self(0xE1);
    pub const KEY_LEFT_ALT: Self = Self(0xE2);
    pub const KEY_LEFT_GUI: Self = Self(0xE3);
    pub const KEY_RIGHT_CTRL: Self = Self(0xE4);
    pub const KEY_RIGHT_SHIFT: Self = Self(0xE5);
    pub const KEY_RIGHT_ALT: Self = Self(0xE6);
    pub const KEY_RIGHT_GUI: Self = Self(0xE7);
}
