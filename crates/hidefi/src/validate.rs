use alloc::vec::Vec;

use hidefi_keycode::lookup;
use hidefi_layout::{get_layout, KeyPlacement, LayoutDescriptor, LayoutId};

/// A placement whose usage code has no entry in the key table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DanglingPlacement {
    pub layout: LayoutId,
    pub placement: KeyPlacement,
}

/// Cross-checks every placement of a layout against the key table.
pub fn validate(layout: &LayoutDescriptor) -> Vec<DanglingPlacement> {
    let dangling: Vec<_> = layout
        .placements()
        .filter(|placement| lookup(placement.usage).is_none())
        .map(|placement| DanglingPlacement {
            layout: layout.id,
            placement: *placement,
        })
        .collect();

    for entry in &dangling {
        warn!(
            layout = %entry.layout,
            usage = %entry.placement.usage,
            label = entry.placement.label,
            "Placement references an unknown usage code"
        );
    }

    dangling
}

pub fn validate_all() -> Vec<DanglingPlacement> {
    LayoutId::ALL
        .into_iter()
        .flat_map(|id| validate(get_layout(id)))
        .collect()
}
