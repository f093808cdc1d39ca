use std::collections::HashMap;

use chrono::{DateTime, Local};

use crate::key::{CanonicalKey, RawKeyDescriptor};

/// A key or mouse button event, as handed to every listener.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    /// The code reported by the key server, before any table offset.
    pub virtual_key: u32,
    /// The platform description the code resolved to.
    pub raw_key: RawKeyDescriptor,
    /// The portable key identifier.
    pub name: CanonicalKey,
    /// Whether the key went down or up.
    pub state: KeyState,
    pub scan_code: u32,
    /// The pointer position, when the key server reports one.
    pub location: Option<(f64, f64)>,
    /// The protocol line this event was decoded from.
    pub raw: String,
    /// Which kind of device produced the event.
    pub device: InputDevice,
    /// When the line was read from the key server.
    pub received_at: DateTime<Local>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyState {
    Down,
    Up,
}

impl KeyState {
    pub fn is_down(self) -> bool {
        self == KeyState::Down
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputDevice {
    Keyboard,
    Mouse,
}

/// The set of keys currently held down.
///
/// Keyboard keys and mouse buttons share one map, so a modifier held on the keyboard is visible
/// while a mouse button event is dispatched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownState {
    keys: HashMap<CanonicalKey, bool>,
}

impl DownState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the effect of `event`.
    pub(crate) fn apply(&mut self, event: &KeyEvent) {
        self.keys.insert(event.name, event.state.is_down());
    }

    /// Whether `key` is currently held.
    pub fn is_down(&self, key: CanonicalKey) -> bool {
        self.keys.get(&key).copied().unwrap_or(false)
    }

    /// The last recorded state of `key`, or `None` if no event for it was seen yet.
    pub fn get(&self, key: CanonicalKey) -> Option<bool> {
        self.keys.get(&key).copied()
    }

    /// All keys currently held, in no particular order.
    pub fn pressed(&self) -> impl Iterator<Item = CanonicalKey> + '_ {
        self.keys
            .iter()
            .filter_map(|(key, down)| down.then_some(*key))
    }

    /// Whether any of the given keys is held.
    pub fn any_down(&self, keys: &[CanonicalKey]) -> bool {
        keys.iter().any(|k| self.is_down(*k))
    }
}
