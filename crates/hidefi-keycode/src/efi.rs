use core::fmt;

macro_rules! efi_keys {
    ($(#[$meta:meta])* pub enum $name:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Identifier as spelled by the firmware headers (`EfiKeyEnter`).
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => concat!("EfiKey", stringify!($variant)),)+
                }
            }
        }
    };
}

// Physical key positions from the UEFI HII `EFI_KEY` enumeration. Letter/number
// names give the row (A = space row .. E = number row) and column from the left.
// `LAlt` is part of the firmware enumeration even though Left Alt is keyed as `A0`
// in the usage table. `A1` has no firmware counterpart and is kept for the table.
efi_keys! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub enum EfiKey {
        LCtrl, A0, A1, LAlt, SpaceBar, A2, A3, A4, RCtrl,
        LeftArrow, DownArrow, RightArrow, Zero, Period, Enter,
        LShift, B0, B1, B2, B3, B4, B5, B6, B7, B8, B9, B10, RShift,
        UpArrow, One, Two, Three,
        CapsLock, C1, C2, C3, C4, C5, C6, C7, C8, C9, C10, C11, C12,
        Four, Five, Six, Plus,
        Tab, D1, D2, D3, D4, D5, D6, D7, D8, D9, D10, D11, D12, D13,
        Del, End, PgDn, Seven, Eight, Nine,
        E0, E1, E2, E3, E4, E5, E6, E7, E8, E9, E10, E11, E12, BackSpace,
        Ins, Home, PgUp, NLck, Slash, Asterisk, Minus,
        Esc, F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
        Print, SLck, Pause,
    }
}

impl fmt::Display for EfiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// EFI special key scan code (`EFI_INPUT_KEY.ScanCode`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct EfiScanCode(u16);

impl EfiScanCode {
    pub const fn from_u16(code: u16) -> Self {
        Self(code)
    }

    pub const fn as_u16(self) -> u16 {
        self.0
    }

    pub const fn name(self) -> Option<&'static str> {
        let name = match self {
            Self::SCAN_UP => "SCAN_UP",
            Self::SCAN_DOWN => "SCAN_DOWN",
            Self::SCAN_RIGHT => "SCAN_RIGHT",
            Self::SCAN_LEFT => "SCAN_LEFT",
            Self::SCAN_HOME => "SCAN_HOME",
            Self::SCAN_END => "SCAN_END",
            Self::SCAN_INSERT => "SCAN_INSERT",
            Self::SCAN_DELETE => "SCAN_DELETE",
            Self::SCAN_PAGE_UP => "SCAN_PAGE_UP",
            Self::SCAN_PAGE_DOWN => "SCAN_PAGE_DOWN",
            Self::SCAN_F1 => "SCAN_F1",
            Self::SCAN_F2 => "SCAN_F2",
            Self::SCAN_F3 => "SCAN_F3",
            Self::SCAN_F4 => "SCAN_F4",
            Self::SCAN_F5 => "SCAN_F5",
            Self::SCAN_F6 => "SCAN_F6",
            Self::SCAN_F7 => "SCAN_F7",
            Self::SCAN_F8 => "SCAN_F8",
            Self::SCAN_F9 => "SCAN_F9",
            Self::SCAN_F10 => "SCAN_F10",
            Self::SCAN_F11 => "SCAN_F11",
            Self::SCAN_F12 => "SCAN_F12",
            Self::SCAN_ESC => "SCAN_ESC",
            _ => return None,
        };

        Some(name)
    }
}

impl fmt::Display for EfiScanCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name} ({:#04X})", self.0),
            None => write!(f, "{:#06X}", self.0),
        }
    }
}

// From MdePkg/Include/Protocol/SimpleTextIn.h
// SCAN_NULL (0x00) has no constant: keys without a special code carry no scan code at all.

impl EfiScanCode {
    pub const SCAN_UP: Self = Self(0x01);
    pub const SCAN_DOWN: Self = Self(0x02);
    pub const SCAN_RIGHT: Self = Self(0x03);
    pub const SCAN_LEFT: Self = Self(0x04);
    pub const SCAN_HOME: Self = Self(0x05);
    pub const SCAN_END: Self = Self(0x06);
    pub const SCAN_INSERT: Self = Self(0x07);
    pub const SCAN_DELETE: Self = Self(0x08);
    pub const SCAN_PAGE_UP: Self = Self(0x09);
    pub const SCAN_PAGE_DOWN: Self = Self(0x0A);
    pub const SCAN_F1: Self = Self(0x0B);
    pub const SCAN_F2: Self = Self(0x0C);
    pub const SCAN_F3: Self = Self(0x0D);
    pub const SCAN_F4: Self = Self(0x0E);
    pub const SCAN_F5: Self = Self(0x0F);
    pub const SCAN_F6: Self = Self(0x10);
    pub const SCAN_F7: Self = Self(0x11);
    pub const SCAN_F8: Self = Self(0x12);
    pub const SCAN_F9: Self = Self(0x13);
    pub const SCAN_F10: Self = Self(0x14);
    pub const SCAN_F11: Self = Self(0x15);
    pub const SCAN_F12: Self = Self(0x16);
    pub const SCAN_ESC: Self = Self(0x17);
}
