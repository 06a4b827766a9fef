#![doc = include_str!("../README.md")]
#![no_std]

extern crate alloc;

#[macro_use]
extern crate tracing;

#[cfg(feature = "keycode")]
#[doc(inline)]
pub use hidefi_keycode as keycode;

#[cfg(feature = "layout")]
#[doc(inline)]
pub use hidefi_layout as layout;

#[cfg(feature = "keycode")]
mod info;

#[cfg(feature = "layout")]
mod validate;

#[cfg(feature = "keycode")]
pub use self::info::{KeyInfo, NOT_AVAILABLE};

#[cfg(feature = "layout")]
pub use self::validate::{validate, validate_all, DanglingPlacement};
