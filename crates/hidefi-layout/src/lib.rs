#![doc = include_str!("../README.md")]
#![no_std]

extern crate alloc;

#[macro_use]
extern crate tracing;

mod ansi;
mod iso;
mod jis;
mod shared;

pub mod grid;

use core::fmt;
use core::str::FromStr;

use alloc::string::String;
use hidefi_keycode::UsageCode;

pub use self::shared::{FUNCTION_ROW, NAV_CLUSTER, NUMBER_ROW, NUMPAD, SPACE_ROW};

/// Key width (or height) in quarters of the base 1-unit key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Footprint(u8);

impl Footprint {
    pub const U0_5: Self = Self(2);
    pub const U1: Self = Self(4);
    pub const U1_25: Self = Self(5);
    pub const U1_5: Self = Self(6);
    pub const U1_75: Self = Self(7);
    pub const U2: Self = Self(8);
    pub const U2_25: Self = Self(9);
    pub const U2_75: Self = Self(11);
    pub const U7_5: Self = Self(30);

    pub const fn from_quarters(quarters: u8) -> Self {
        Self(quarters)
    }

    pub const fn quarters(self) -> u8 {
        self.0
    }

    pub fn as_units(self) -> f32 {
        f32::from(self.0) / 4.0
    }
}

impl fmt::Display for Footprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fraction = match self.0 % 4 {
            0 => "",
            1 => ".25",
            2 => ".5",
            _ => ".75",
        };

        write!(f, "{}{fraction}u", self.0 / 4)
    }
}

/// Footprint variant of a key. At most one applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum KeyShape {
    #[default]
    Regular,
    /// Keypad key spanning two columns (`0`).
    Wide,
    /// Keypad key spanning two rows (`+`, Enter).
    Tall,
    /// Inverted-L Enter of ISO keyboards, placed on the upper of its two rows.
    IsoEnter,
    /// JIS Enter, placed on the upper of its two rows.
    JisEnter,
}

/// A key at one physical position of a layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyPlacement {
    pub usage: UsageCode,
    /// Legend shown on the key face, may differ from the table name (`"BS"`, `"かな"`).
    pub label: &'static str,
    pub footprint: Footprint,
    pub modifier: bool,
    pub shape: KeyShape,
}

impl KeyPlacement {
    pub const fn new(usage: UsageCode, label: &'static str) -> Self {
        Self {
            usage,
            label,
            footprint: Footprint::U1,
            modifier: false,
            shape: KeyShape::Regular,
        }
    }

    #[must_use]
    pub const fn with_footprint(mut self, footprint: Footprint) -> Self {
        self.footprint = footprint;
        self
    }

    #[must_use]
    pub const fn with_shape(mut self, shape: KeyShape) -> Self {
        self.shape = shape;
        self
    }

    #[must_use]
    pub const fn as_modifier(mut self) -> Self {
        self.modifier = true;
        self
    }

    pub const fn is_modifier(&self) -> bool {
        self.modifier
    }

    pub const fn is_wide(&self) -> bool {
        matches!(self.shape, KeyShape::Wide)
    }

    pub const fn is_tall(&self) -> bool {
        matches!(self.shape, KeyShape::Tall)
    }

    pub const fn is_iso_enter(&self) -> bool {
        matches!(self.shape, KeyShape::IsoEnter)
    }

    pub const fn is_jis_enter(&self) -> bool {
        matches!(self.shape, KeyShape::JisEnter)
    }

    pub const fn width(&self) -> Footprint {
        self.footprint
    }

    pub const fn height(&self) -> Footprint {
        if self.is_tall() {
            Footprint::U2
        } else {
            Footprint::U1
        }
    }
}

/// One position in a row: either a key or an empty placeholder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    Key(KeyPlacement),
    /// Occupies space, is not hoverable and resolves to no key.
    Spacer(Footprint),
}

impl Slot {
    pub const fn footprint(&self) -> Footprint {
        match self {
            Slot::Key(key) => key.footprint,
            Slot::Spacer(footprint) => *footprint,
        }
    }

    pub fn as_key(&self) -> Option<&KeyPlacement> {
        match self {
            Slot::Key(key) => Some(key),
            Slot::Spacer(_) => None,
        }
    }
}

/// Run of slots without physical gap between them.
pub type Section = &'static [Slot];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Row {
    /// Keys grouped into sections; consecutive sections are separated by a gap.
    Keys(&'static [Section]),
    /// Vertical spacer. `None` is the default inter-row gap of the renderer.
    Gap(Option<Footprint>),
}

impl Row {
    pub fn sections(&self) -> &'static [Section] {
        match self {
            Row::Keys(sections) => sections,
            Row::Gap(_) => &[],
        }
    }

    pub fn is_gap(&self) -> bool {
        matches!(self, Row::Gap(_))
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static KeyPlacement> {
        self.sections()
            .iter()
            .flat_map(|section| section.iter())
            .filter_map(Slot::as_key)
    }

    /// Sum of all slot widths in quarter units, section gaps excluded.
    pub fn width(&self) -> u32 {
        self.sections()
            .iter()
            .flat_map(|section| section.iter())
            .map(|slot| u32::from(slot.footprint().quarters()))
            .sum()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LayoutId {
    Ansi,
    Iso,
    Jis,
}

impl LayoutId {
    pub const ALL: [Self; 3] = [Self::Ansi, Self::Iso, Self::Jis];

    pub const fn as_str(self) -> &'static str {
        match self {
            LayoutId::Ansi => "ansi",
            LayoutId::Iso => "iso",
            LayoutId::Jis => "jis",
        }
    }
}

impl fmt::Display for LayoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLayoutError {
    pub id: String,
}

impl fmt::Display for UnknownLayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown layout `{}` (expected one of: ansi, iso, jis)", self.id)
    }
}

impl core::error::Error for UnknownLayoutError {}

/// Accepts exactly `ansi`, `iso` or `jis`.
impl FromStr for LayoutId {
    type Err = UnknownLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LayoutId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownLayoutError { id: String::from(s) })
    }
}

/// A complete keyboard: main block, navigation cluster and numeric keypad.
#[derive(Debug, PartialEq, Eq)]
pub struct LayoutDescriptor {
    pub id: LayoutId,
    pub name: &'static str,
    pub main: &'static [&'static Row],
    pub nav: &'static [Row],
    /// Keypad keys in grid flow order, see [`grid::place`].
    pub numpad: &'static [KeyPlacement],
}

impl LayoutDescriptor {
    pub fn main_keys(&self) -> impl Iterator<Item = &'static KeyPlacement> {
        let main = self.main;
        main.iter().flat_map(|row| row.keys())
    }

    pub fn nav_keys(&self) -> impl Iterator<Item = &'static KeyPlacement> {
        let nav = self.nav;
        nav.iter().flat_map(Row::keys)
    }

    /// Every key placement: main block, then navigation cluster, then keypad.
    pub fn placements(&self) -> impl Iterator<Item = &'static KeyPlacement> {
        let numpad = self.numpad;
        self.main_keys().chain(self.nav_keys()).chain(numpad.iter())
    }

    /// All placements of a usage code. A code may sit at several positions (main and keypad Enter).
    pub fn find(&self, usage: UsageCode) -> impl Iterator<Item = &'static KeyPlacement> {
        self.placements().filter(move |key| key.usage == usage)
    }
}

pub fn get_layout(id: LayoutId) -> &'static LayoutDescriptor {
    match id {
        LayoutId::Ansi => &ansi::LAYOUT,
        LayoutId::Iso => &iso::LAYOUT,
        LayoutId::Jis => &jis::LAYOUT,
    }
}

pub(crate) const fn key(usage: UsageCode, label: &'static str) -> Slot {
    Slot::Key(KeyPlacement::new(usage, label))
}

pub(crate) const fn sized(usage: UsageCode, label: &'static str, footprint: Footprint) -> Slot {
    Slot::Key(KeyPlacement::new(usage, label).with_footprint(footprint))
}

pub(crate) const fn modifier(usage: UsageCode, label: &'static str, footprint: Footprint) -> Slot {
    Slot::Key(KeyPlacement::new(usage, label).with_footprint(footprint).as_modifier())
}

pub(crate) const fn spacer(footprint: Footprint) -> Slot {
    Slot::Spacer(footprint)
}
