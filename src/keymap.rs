//! Static per-platform key tables and the canonicalization algorithm.
//!
//! Each table is keyed by the integer code a backend reports. Mouse buttons live in a disjoint
//! band starting at [`MOUSE_CODE_BASE`] on the platforms where mouse and keyboard codes overlap.

mod mac;
mod windows;
mod x11;

use std::borrow::Cow;

use crate::key::{CanonicalKey, RawKeyDescriptor};

pub use mac::MAC;
pub use windows::WINDOWS;
pub use x11::X11;

/// The first code of the band mouse buttons are offset into before lookup.
pub const MOUSE_CODE_BASE: u32 = 0xFFFF_0000;

/// One row of a [`KeyTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEntry {
    pub code: u32,
    pub raw_name: &'static str,
    pub name: &'static str,
    /// `None` for keys the platform names but that have no portable counterpart.
    pub canonical: Option<CanonicalKey>,
}

impl KeyEntry {
    pub const fn new(
        code: u32,
        raw_name: &'static str,
        name: &'static str,
        canonical: Option<CanonicalKey>,
    ) -> Self {
        Self {
            code,
            raw_name,
            name,
            canonical,
        }
    }
}

/// A lookup table from raw codes to key descriptions.
#[derive(Debug, Clone, Copy)]
pub struct KeyTable {
    name: &'static str,
    entries: &'static [KeyEntry],
}

impl KeyTable {
    pub const fn new(name: &'static str, entries: &'static [KeyEntry]) -> Self {
        Self { name, entries }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn entries(&self) -> &'static [KeyEntry] {
        self.entries
    }

    /// Find the entry for `code`, if the table has one.
    pub fn get(&self, code: u32) -> Option<&'static KeyEntry> {
        self.entries.iter().find(|e| e.code == code)
    }

    /// Resolve `code` to a descriptor.
    ///
    /// This never fails: codes that are missing from the table, or present without a canonical
    /// mapping, resolve to an `UNKNOWN_0x<code>` descriptor.
    pub fn resolve(&self, code: u32) -> RawKeyDescriptor {
        match self.get(code) {
            Some(KeyEntry {
                raw_name,
                name,
                canonical: Some(canonical),
                ..
            }) => RawKeyDescriptor {
                raw_name: Cow::Borrowed(*raw_name),
                name: Cow::Borrowed(*name),
                canonical: *canonical,
            },
            _ => RawKeyDescriptor::unknown(code),
        }
    }
}
