//! Per-platform knowledge about a key server: its binary, line layout and code space.

use chrono::Local;

use crate::event::{InputDevice, KeyEvent, KeyState};
use crate::key::{CanonicalKey, RawKeyDescriptor};
use crate::keymap::{KeyTable, MAC, MOUSE_CODE_BASE, WINDOWS, X11};
use crate::protocol::{LineLayout, RawEvent};

/// The platforms with a native key server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    X11,
    Mac,
}

impl Platform {
    /// The platform this program was built for, if it has a key server.
    pub fn current() -> Option<Platform> {
        if cfg!(target_os = "windows") {
            Some(Platform::Windows)
        } else if cfg!(target_os = "macos") {
            Some(Platform::Mac)
        } else if cfg!(target_os = "linux") {
            Some(Platform::X11)
        } else {
            None
        }
    }

    /// The file name of the key server executable.
    pub fn binary_name(self) -> &'static str {
        match self {
            Platform::Windows => "WinKeyServer.exe",
            Platform::X11 => "X11KeyServer",
            Platform::Mac => "MacKeyServer",
        }
    }

    pub fn profile(self) -> BackendProfile {
        match self {
            Platform::Windows => BackendProfile {
                platform: self,
                layout: LineLayout::WithScanCode,
                table: &WINDOWS,
                keyboard_offset: 0,
                mouse_in_band: false,
                acknowledges: true,
                grants_permissions: false,
            },
            Platform::X11 => BackendProfile {
                platform: self,
                layout: LineLayout::CodeOnly,
                table: &X11,
                // X11 keycodes are evdev codes shifted by 8.
                keyboard_offset: 8,
                mouse_in_band: true,
                acknowledges: true,
                grants_permissions: true,
            },
            Platform::Mac => BackendProfile {
                platform: self,
                layout: LineLayout::CodeOnly,
                table: &MAC,
                keyboard_offset: 0,
                mouse_in_band: true,
                acknowledges: true,
                grants_permissions: true,
            },
        }
    }
}

/// How one backend's lines are decoded and canonicalized, and what the key server supports.
#[derive(Debug, Clone, Copy)]
pub struct BackendProfile {
    pub platform: Platform,
    pub layout: LineLayout,
    pub table: &'static KeyTable,
    /// Subtracted from keyboard codes before lookup.
    pub keyboard_offset: u32,
    /// Whether mouse button codes are moved into the band at [`MOUSE_CODE_BASE`] before lookup.
    pub mouse_in_band: bool,
    /// Whether the key server reads acknowledgements from its stdin.
    pub acknowledges: bool,
    /// Whether a non-executable key server may be fixed with a privileged `chmod +x`.
    pub grants_permissions: bool,
}

impl BackendProfile {
    /// The table code a raw event is looked up with, or `None` if it falls outside the table's
    /// code space.
    pub fn lookup_code(&self, raw: &RawEvent) -> Option<u32> {
        match raw.device {
            InputDevice::Mouse if self.mouse_in_band => MOUSE_CODE_BASE.checked_add(raw.code),
            _ => raw.code.checked_sub(self.keyboard_offset),
        }
    }

    /// Canonicalize a decoded line into the event handed to listeners.
    pub fn key_event(&self, raw: RawEvent) -> KeyEvent {
        // Unknown keys are named after the code the key server sent, not the lookup code.
        let raw_key = match self.lookup_code(&raw).map(|code| self.table.resolve(code)) {
            Some(resolved) if resolved.canonical != CanonicalKey::Unknown => resolved,
            _ => RawKeyDescriptor::unknown(raw.code),
        };

        KeyEvent {
            virtual_key: raw.code,
            name: raw_key.canonical,
            raw_key,
            state: if raw.is_down {
                KeyState::Down
            } else {
                KeyState::Up
            },
            scan_code: raw.scan_code,
            location: raw.location,
            raw: raw.raw_line,
            device: raw.device,
            received_at: Local::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::KeyEntry;
    use crate::protocol::decode_line;
    use pretty_assertions::assert_eq;

    fn event(platform: Platform, line: &str) -> KeyEvent {
        let profile = platform.profile();
        let raw = decode_line(profile.layout, line).unwrap().unwrap();

        profile.key_event(raw)
    }

    #[test]
    fn windows_codes_are_looked_up_directly() {
        let e = event(Platform::Windows, "KEYBOARD,DOWN,65,30,0,0,1");

        assert_eq!(e.name, CanonicalKey::A);
        assert_eq!(e.virtual_key, 65);
        assert_eq!(e.scan_code, 30);
        assert_eq!(e.raw_key.raw_name, "VK_A");

        let e = event(Platform::Windows, "MOUSE,UP,2,0,10,20,2");
        assert_eq!(e.name, CanonicalKey::MouseRight);
        assert_eq!(e.state, KeyState::Up);
        assert_eq!(e.location, Some((10.0, 20.0)));
    }

    #[test]
    fn x11_keycodes_are_shifted_and_mouse_is_banded() {
        let e = event(Platform::X11, "KEYBOARD,DOWN,38,0,0,1");
        assert_eq!(e.name, CanonicalKey::A);
        assert_eq!(e.scan_code, 38);

        let e = event(Platform::X11, "MOUSE,DOWN,3,0,0,1");
        assert_eq!(e.name, CanonicalKey::MouseRight);
        assert_eq!(e.device, InputDevice::Mouse);
    }

    #[test]
    fn x11_keycodes_below_the_offset_are_unknown() {
        let e = event(Platform::X11, "KEYBOARD,DOWN,3,0,0,1");

        assert_eq!(e.name, CanonicalKey::Unknown);
        assert_eq!(e.raw_key.raw_name, "UNKNOWN_0x3");
    }

    #[test]
    fn unmapped_codes_are_named_after_the_reported_code() {
        let e = event(Platform::X11, "KEYBOARD,DOWN,300,0,0,1");
        assert_eq!(e.name, CanonicalKey::Unknown);
        assert_eq!(e.raw_key.raw_name, "UNKNOWN_0x12C");
        assert_eq!(e.raw_key.name, "UNKNOWN_0x12C");

        let e = event(Platform::X11, "MOUSE,DOWN,7,0,0,1");
        assert_eq!(e.name, CanonicalKey::Unknown);
        assert_eq!(e.raw_key.raw_name, "UNKNOWN_0x7");

        let e = event(Platform::Mac, "MOUSE,UP,7,0,0,1");
        assert_eq!(e.raw_key.raw_name, "UNKNOWN_0x7");
    }

    #[test]
    fn mac_mouse_buttons_are_banded() {
        let e = event(Platform::Mac, "MOUSE,DOWN,0,1,1,1");
        assert_eq!(e.name, CanonicalKey::MouseLeft);

        let e = event(Platform::Mac, "KEYBOARD,DOWN,0,1,1,1");
        assert_eq!(e.name, CanonicalKey::A);
    }

    #[test]
    fn canonicalizes_against_a_custom_table() {
        static TABLE: KeyTable = KeyTable::new(
            "custom",
            &[KeyEntry::new(30, "KEY_A", "A", Some(CanonicalKey::A))],
        );
        let profile = BackendProfile {
            table: &TABLE,
            keyboard_offset: 0,
            ..Platform::X11.profile()
        };
        let raw = decode_line(profile.layout, "KEYBOARD,DOWN,30,3.0,4.0,abc123")
            .unwrap()
            .unwrap();

        let e = profile.key_event(raw);

        assert_eq!(e.state, KeyState::Down);
        assert_eq!(e.name, CanonicalKey::A);
        assert_eq!(e.location, Some((3.0, 4.0)));
        assert_eq!(e.raw, "KEYBOARD,DOWN,30,3.0,4.0,abc123");
    }
}
