use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

macro_rules! canonical_keys {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// A platform-independent identifier for a physical key or mouse button.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum CanonicalKey {
            $($variant),+
        }

        impl CanonicalKey {
            /// Every canonical key, in declaration order.
            pub const ALL: &'static [CanonicalKey] = &[$(CanonicalKey::$variant),+];

            /// The portable name of the key (e.g. `"LEFT CTRL"`).
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(CanonicalKey::$variant => $name),+
                }
            }
        }

        impl FromStr for CanonicalKey {
            type Err = UnknownKeyName;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(CanonicalKey::$variant),)+
                    _ => Err(UnknownKeyName(s.to_owned())),
                }
            }
        }
    };
}

canonical_keys! {
    A => "A", B => "B", C => "C", D => "D", E => "E", F => "F", G => "G",
    H => "H", I => "I", J => "J", K => "K", L => "L", M => "M", N => "N",
    O => "O", P => "P", Q => "Q", R => "R", S => "S", T => "T", U => "U",
    V => "V", W => "W", X => "X", Y => "Y", Z => "Z",

    Num0 => "0", Num1 => "1", Num2 => "2", Num3 => "3", Num4 => "4",
    Num5 => "5", Num6 => "6", Num7 => "7", Num8 => "8", Num9 => "9",

    Numpad0 => "NUMPAD 0", Numpad1 => "NUMPAD 1", Numpad2 => "NUMPAD 2",
    Numpad3 => "NUMPAD 3", Numpad4 => "NUMPAD 4", Numpad5 => "NUMPAD 5",
    Numpad6 => "NUMPAD 6", Numpad7 => "NUMPAD 7", Numpad8 => "NUMPAD 8",
    Numpad9 => "NUMPAD 9",
    NumpadMultiply => "NUMPAD MULTIPLY",
    NumpadPlus => "NUMPAD PLUS",
    NumpadMinus => "NUMPAD MINUS",
    NumpadDivide => "NUMPAD DIVIDE",
    NumpadDot => "NUMPAD DOT",
    NumpadReturn => "NUMPAD RETURN",
    NumpadEquals => "NUMPAD EQUALS",
    NumpadClear => "NUMPAD CLEAR",

    F1 => "F1", F2 => "F2", F3 => "F3", F4 => "F4", F5 => "F5", F6 => "F6",
    F7 => "F7", F8 => "F8", F9 => "F9", F10 => "F10", F11 => "F11", F12 => "F12",
    F13 => "F13", F14 => "F14", F15 => "F15", F16 => "F16", F17 => "F17",
    F18 => "F18", F19 => "F19", F20 => "F20", F21 => "F21", F22 => "F22",
    F23 => "F23", F24 => "F24",

    Space => "SPACE",
    Backspace => "BACKSPACE",
    Tab => "TAB",
    Return => "RETURN",
    Escape => "ESCAPE",
    LeftMeta => "LEFT META",
    RightMeta => "RIGHT META",
    LeftCtrl => "LEFT CTRL",
    RightCtrl => "RIGHT CTRL",
    LeftAlt => "LEFT ALT",
    RightAlt => "RIGHT ALT",
    LeftShift => "LEFT SHIFT",
    RightShift => "RIGHT SHIFT",
    CapsLock => "CAPS LOCK",
    NumLock => "NUM LOCK",
    ScrollLock => "SCROLL LOCK",
    Function => "FN",

    LeftArrow => "LEFT ARROW",
    RightArrow => "RIGHT ARROW",
    UpArrow => "UP ARROW",
    DownArrow => "DOWN ARROW",
    PageUp => "PAGE UP",
    PageDown => "PAGE DOWN",
    Home => "HOME",
    End => "END",
    Insert => "INS",
    Delete => "DELETE",
    PrintScreen => "PRINT SCREEN",
    Pause => "PAUSE",
    ContextMenu => "MENU",

    Section => "SECTION",
    Equals => "EQUALS",
    Minus => "MINUS",
    SquareBracketOpen => "SQUARE BRACKET OPEN",
    SquareBracketClose => "SQUARE BRACKET CLOSE",
    Semicolon => "SEMICOLON",
    Quote => "QUOTE",
    Backslash => "BACKSLASH",
    Backtick => "BACKTICK",
    Comma => "COMMA",
    Dot => "DOT",
    ForwardSlash => "FORWARD SLASH",

    MouseLeft => "MOUSE LEFT",
    MouseRight => "MOUSE RIGHT",
    MouseMiddle => "MOUSE MIDDLE",
    MouseX1 => "MOUSE X1",
    MouseX2 => "MOUSE X2",

    Unknown => "UNKNOWN",
}

impl CanonicalKey {
    /// Whether this key identifies a mouse button.
    pub fn is_mouse_button(self) -> bool {
        matches!(
            self,
            CanonicalKey::MouseLeft
                | CanonicalKey::MouseRight
                | CanonicalKey::MouseMiddle
                | CanonicalKey::MouseX1
                | CanonicalKey::MouseX2
        )
    }

    /// Whether this key is one of the left/right modifier variants.
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            CanonicalKey::LeftMeta
                | CanonicalKey::RightMeta
                | CanonicalKey::LeftCtrl
                | CanonicalKey::RightCtrl
                | CanonicalKey::LeftAlt
                | CanonicalKey::RightAlt
                | CanonicalKey::LeftShift
                | CanonicalKey::RightShift
                | CanonicalKey::Function
        )
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a name that is not a [`CanonicalKey`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown canonical key name: {0:?}")]
pub struct UnknownKeyName(pub String);

/// The platform-specific description of a raw key code, together with its canonical key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawKeyDescriptor {
    /// The platform's own identifier (e.g. `VK_A`, `KEY_ESC`, `kVK_Command`).
    pub raw_name: Cow<'static, str>,
    /// A human readable name for the key.
    pub name: Cow<'static, str>,
    /// The portable identifier.
    pub canonical: CanonicalKey,
}

impl RawKeyDescriptor {
    /// The descriptor synthesized for a code no table knows about.
    pub fn unknown(code: u32) -> Self {
        let name = format!("UNKNOWN_0x{code:X}");

        Self {
            raw_name: Cow::Owned(name.clone()),
            name: Cow::Owned(name),
            canonical: CanonicalKey::Unknown,
        }
    }
}
