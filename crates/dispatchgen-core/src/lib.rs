#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core types shared by the dispatchgen compiler and CLI.
//!
//! - `Identifier` / `IdentifierWidth`: the numeric protocol identifier space
//! - `Handler`: the capability every dispatch target exposes
//! - `Colors`: ANSI palette for terminal output
//! - `utils`: naming helpers for generated artifacts

use std::fmt;

pub mod colors;
pub mod utils;


pub use colors::Colors;

/// Numeric protocol identifier (the dispatch key).
///
/// Stored as `u32`; the width actually allowed in a mapping is decided by
/// [`IdentifierWidth`].
pub type Identifier = u32;

/// Width of the `identifier_t` type used by generated artifacts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IdentifierWidth {
    U8,
    #[default]
    U16,
    U32,
}

impl IdentifierWidth {
    pub const ALL: [IdentifierWidth; 3] = [Self::U8, Self::U16, Self::U32];

    /// Largest identifier representable at this width.
    pub fn max(self) -> Identifier {
        match self {
            Self::U8 => u8::MAX as Identifier,
            Self::U16 => u16::MAX as Identifier,
            Self::U32 => u32::MAX,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.name() == name)
    }

    pub fn contains(self, identifier: u64) -> bool {
        identifier <= self.max() as u64
    }
}

impl fmt::Display for IdentifierWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dispatch target: something a lookup can return.
///
/// The only capability a handler needs is reporting its own state, which
/// backs the per-dispatcher diagnostic dump.
pub trait Handler {
    /// Write a textual description of the handler's current state.
    fn write_state(&self, out: &mut dyn fmt::Write) -> fmt::Result;
}

impl<H: Handler + ?Sized> Handler for &H {
    fn write_state(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        (**self).write_state(out)
    }
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn write_state(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        (**self).write_state(out)
    }
}
