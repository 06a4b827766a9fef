use core::fmt;

use hidefi_keycode::{lookup, EfiKey, EfiScanCode, KeyDescriptor, UsageCode};

/// Placeholder shown for a missing firmware field.
pub const NOT_AVAILABLE: &str = "N/A";

/// Everything the info panel displays for one hovered key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInfo {
    pub usage: UsageCode,
    /// Table name, or the key face label when the code is not in the table.
    pub name: &'static str,
    pub efi_key: Option<EfiKey>,
    pub scan_code: Option<EfiScanCode>,
    /// Whether the usage code has a table entry at all.
    pub resolved: bool,
}

impl KeyInfo {
    pub fn describe(usage: UsageCode, fallback_label: &'static str) -> Self {
        match lookup(usage) {
            Some(descriptor) => Self::from_descriptor(descriptor),
            None => {
                debug!(%usage, label = fallback_label, "Describing key without table entry");

                Self {
                    usage,
                    name: fallback_label,
                    efi_key: None,
                    scan_code: None,
                    resolved: false,
                }
            }
        }
    }

    pub fn from_descriptor(descriptor: &KeyDescriptor) -> Self {
        Self {
            usage: descriptor.usage,
            name: descriptor.name,
            efi_key: descriptor.efi_key,
            scan_code: descriptor.scan_code,
            resolved: true,
        }
    }

    #[cfg(feature = "layout")]
    pub fn for_placement(placement: &hidefi_layout::KeyPlacement) -> Self {
        Self::describe(placement.usage, placement.label)
    }

    pub fn decimal(&self) -> u8 {
        self.usage.as_u8()
    }

    /// `0x28`-style display of the usage code.
    pub fn hex(&self) -> impl fmt::Display {
        self.usage
    }

    pub fn efi_key_display(&self) -> impl fmt::Display {
        OrNotAvailable(self.efi_key)
    }

    pub fn scan_code_display(&self) -> impl fmt::Display {
        OrNotAvailable(self.scan_code)
    }
}

struct OrNotAvailable<T>(Option<T>);

impl<T: fmt::Display> fmt::Display for OrNotAvailable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => fmt::Display::fmt(value, f),
            None => f.write_str(NOT_AVAILABLE),
        }
    }
}

impl fmt::Display for KeyInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Key:        {}", self.name)?;
        writeln!(f, "HID code:   {}", self.hex())?;
        writeln!(f, "Decimal:    {}", self.decimal())?;
        writeln!(f, "EFI key:    {}", self.efi_key_display())?;
        write!(f, "Scan code:  {}", self.scan_code_display())
    }
}
