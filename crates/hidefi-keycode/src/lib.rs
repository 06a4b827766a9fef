#![doc = include_str!("../README.md")]
#![no_std]

#[macro_use]
extern crate tracing;

mod efi;
mod table;
mod usage;

pub use self::efi::{EfiKey, EfiScanCode};
pub use self::usage::{ParseUsageCodeError, UsageCode};

/// Table entry for one recognized HID usage code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyDescriptor {
    pub usage: UsageCode,
    /// Human-readable name, may carry the shifted glyph (`"1 !"`).
    pub name: &'static str,
    /// Physical key position as named by the firmware `EFI_KEY` enumeration.
    pub efi_key: Option<EfiKey>,
    /// Special (non-character) scan code, `None` for ordinary character keys.
    pub scan_code: Option<EfiScanCode>,
}

impl KeyDescriptor {
    pub const fn has_firmware_mapping(&self) -> bool {
        self.efi_key.is_some() || self.scan_code.is_some()
    }
}

/// Looks up the descriptor for a usage code.
///
/// `None` means the code is not a recognized usage of the keyboard page (reserved ranges
/// 0x74–0x86, 0x8C–0xDF and 0xE8–0xFF). This is different from a descriptor whose
/// firmware fields are both empty.
pub fn lookup(usage: UsageCode) -> Option<&'static KeyDescriptor> {
    let descriptor = table::INDEX.get(usage.as_idx()).and_then(Option::as_ref);

    if descriptor.is_none() {
        trace!(%usage, "Usage code not in key table");
    }

    descriptor
}

/// All table entries in ascending usage code order.
pub fn entries() -> impl Iterator<Item = &'static KeyDescriptor> {
    table::ENTRIES.iter()
}
