//! Shared helpers for the integration tests.

use hidefi_keycode::UsageCode;
use hidefi_layout::{get_layout, KeyPlacement, LayoutDescriptor, LayoutId};

pub fn all_layouts() -> impl Iterator<Item = &'static LayoutDescriptor> {
    LayoutId::ALL.into_iter().map(get_layout)
}

/// First main-block placement of a usage code.
pub fn main_key(id: LayoutId, usage: UsageCode) -> Option<&'static KeyPlacement> {
    get_layout(id).main_keys().find(|key| key.usage == usage)
}

pub fn has_key(id: LayoutId, usage: UsageCode) -> bool {
    get_layout(id).find(usage).next().is_some()
}
