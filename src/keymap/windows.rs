//! Windows virtual-key codes ([docs](https://learn.microsoft.com/en-us/windows/win32/inputdev/virtual-key-codes)).
//!
//! Mouse buttons share the virtual-key space, so no offset is applied.

use super::{KeyEntry, KeyTable};
use crate::key::CanonicalKey::*;

pub static WINDOWS: KeyTable = KeyTable::new("windows", ENTRIES);

#[rustfmt::skip]
const ENTRIES: &[KeyEntry] = &[
    KeyEntry::new(0x01, "VK_LBUTTON", "Left Button", Some(MouseLeft)),
    KeyEntry::new(0x02, "VK_RBUTTON", "Right Button", Some(MouseRight)),
    KeyEntry::new(0x03, "VK_CANCEL", "Cancel", None),
    KeyEntry::new(0x04, "VK_MBUTTON", "Middle Button", Some(MouseMiddle)),
    KeyEntry::new(0x05, "VK_XBUTTON1", "X1 Button", Some(MouseX1)),
    KeyEntry::new(0x06, "VK_XBUTTON2", "X2 Button", Some(MouseX2)),
    KeyEntry::new(0x08, "VK_BACK", "Backspace", Some(Backspace)),
    KeyEntry::new(0x09, "VK_TAB", "Tab", Some(Tab)),
    KeyEntry::new(0x0C, "VK_CLEAR", "NumPad Clear", Some(NumpadClear)),
    KeyEntry::new(0x0D, "VK_RETURN", "Enter", Some(Return)),
    KeyEntry::new(0x10, "VK_SHIFT", "Shift", Some(LeftShift)),
    KeyEntry::new(0x11, "VK_CONTROL", "Ctrl", Some(LeftCtrl)),
    KeyEntry::new(0x12, "VK_MENU", "Alt", Some(LeftAlt)),
    KeyEntry::new(0x13, "VK_PAUSE", "Pause", Some(Pause)),
    KeyEntry::new(0x14, "VK_CAPITAL", "Caps Lock", Some(CapsLock)),
    KeyEntry::new(0x15, "VK_KANA", "Kana", None),
    KeyEntry::new(0x19, "VK_KANJI", "Kanji", None),
    KeyEntry::new(0x1B, "VK_ESCAPE", "Escape", Some(Escape)),
    KeyEntry::new(0x1C, "VK_CONVERT", "Convert", None),
    KeyEntry::new(0x1D, "VK_NONCONVERT", "Non Convert", None),
    KeyEntry::new(0x1E, "VK_ACCEPT", "Accept", None),
    KeyEntry::new(0x1F, "VK_MODECHANGE", "Mode Change", None),
    KeyEntry::new(0x20, "VK_SPACE", "Space", Some(Space)),
    KeyEntry::new(0x21, "VK_PRIOR", "Page Up", Some(PageUp)),
    KeyEntry::new(0x22, "VK_NEXT", "Page Down", Some(PageDown)),
    KeyEntry::new(0x23, "VK_END", "End", Some(End)),
    KeyEntry::new(0x24, "VK_HOME", "Home", Some(Home)),
    KeyEntry::new(0x25, "VK_LEFT", "Left", Some(LeftArrow)),
    KeyEntry::new(0x26, "VK_UP", "Up", Some(UpArrow)),
    KeyEntry::new(0x27, "VK_RIGHT", "Right", Some(RightArrow)),
    KeyEntry::new(0x28, "VK_DOWN", "Down", Some(DownArrow)),
    KeyEntry::new(0x29, "VK_SELECT", "Select", None),
    KeyEntry::new(0x2A, "VK_PRINT", "Print", None),
    KeyEntry::new(0x2B, "VK_EXECUTE", "Execute", None),
    KeyEntry::new(0x2C, "VK_SNAPSHOT", "Print Screen", Some(PrintScreen)),
    KeyEntry::new(0x2D, "VK_INSERT", "Insert", Some(Insert)),
    KeyEntry::new(0x2E, "VK_DELETE", "Delete", Some(Delete)),
    KeyEntry::new(0x2F, "VK_HELP", "Help", None),
    KeyEntry::new(0x30, "VK_0", "0", Some(Num0)),
    KeyEntry::new(0x31, "VK_1", "1", Some(Num1)),
    KeyEntry::new(0x32, "VK_2", "2", Some(Num2)),
    KeyEntry::new(0x33, "VK_3", "3", Some(Num3)),
    KeyEntry::new(0x34, "VK_4", "4", Some(Num4)),
    KeyEntry::new(0x35, "VK_5", "5", Some(Num5)),
    KeyEntry::new(0x36, "VK_6", "6", Some(Num6)),
    KeyEntry::new(0x37, "VK_7", "7", Some(Num7)),
    KeyEntry::new(0x38, "VK_8", "8", Some(Num8)),
    KeyEntry::new(0x39, "VK_9", "9", Some(Num9)),
    KeyEntry::new(0x41, "VK_A", "A", Some(A)),
    KeyEntry::new(0x42, "VK_B", "B", Some(B)),
    KeyEntry::new(0x43, "VK_C", "C", Some(C)),
    KeyEntry::new(0x44, "VK_D", "D", Some(D)),
    KeyEntry::new(0x45, "VK_E", "E", Some(E)),
    KeyEntry::new(0x46, "VK_F", "F", Some(F)),
    KeyEntry::new(0x47, "VK_G", "G", Some(G)),
    KeyEntry::new(0x48, "VK_H", "H", Some(H)),
    KeyEntry::new(0x49, "VK_I", "I", Some(I)),
    KeyEntry::new(0x4A, "VK_J", "J", Some(J)),
    KeyEntry::new(0x4B, "VK_K", "K", Some(K)),
    KeyEntry::new(0x4C, "VK_L", "L", Some(L)),
    KeyEntry::new(0x4D, "VK_M", "M", Some(M)),
    KeyEntry::new(0x4E, "VK_N", "N", Some(N)),
    KeyEntry::new(0x4F, "VK_O", "O", Some(O)),
    KeyEntry::new(0x50, "VK_P", "P", Some(P)),
    KeyEntry::new(0x51, "VK_Q", "Q", Some(Q)),
    KeyEntry::new(0x52, "VK_R", "R", Some(R)),
    KeyEntry::new(0x53, "VK_S", "S", Some(S)),
    KeyEntry::new(0x54, "VK_T", "T", Some(T)),
    KeyEntry::new(0x55, "VK_U", "U", Some(U)),
    KeyEntry::new(0x56, "VK_V", "V", Some(V)),
    KeyEntry::new(0x57, "VK_W", "W", Some(W)),
    KeyEntry::new(0x58, "VK_X", "X", Some(X)),
    KeyEntry::new(0x59, "VK_Y", "Y", Some(Y)),
    KeyEntry::new(0x5A, "VK_Z", "Z", Some(Z)),
    KeyEntry::new(0x5B, "VK_LWIN", "Left Win", Some(LeftMeta)),
    KeyEntry::new(0x5C, "VK_RWIN", "Right Win", Some(RightMeta)),
    KeyEntry::new(0x5D, "VK_APPS", "Context Menu", Some(ContextMenu)),
    KeyEntry::new(0x5F, "VK_SLEEP", "Sleep", None),
    KeyEntry::new(0x60, "VK_NUMPAD0", "NumPad 0", Some(Numpad0)),
    KeyEntry::new(0x61, "VK_NUMPAD1", "NumPad 1", Some(Numpad1)),
    KeyEntry::new(0x62, "VK_NUMPAD2", "NumPad 2", Some(Numpad2)),
    KeyEntry::new(0x63, "VK_NUMPAD3", "NumPad 3", Some(Numpad3)),
    KeyEntry::new(0x64, "VK_NUMPAD4", "NumPad 4", Some(Numpad4)),
    KeyEntry::new(0x65, "VK_NUMPAD5", "NumPad 5", Some(Numpad5)),
    KeyEntry::new(0x66, "VK_NUMPAD6", "NumPad 6", Some(Numpad6)),
    KeyEntry::new(0x67, "VK_NUMPAD7", "NumPad 7", Some(Numpad7)),
    KeyEntry::new(0x68, "VK_NUMPAD8", "NumPad 8", Some(Numpad8)),
    KeyEntry::new(0x69, "VK_NUMPAD9", "NumPad 9", Some(Numpad9)),
    KeyEntry::new(0x6A, "VK_MULTIPLY", "NumPad *", Some(NumpadMultiply)),
    KeyEntry::new(0x6B, "VK_ADD", "NumPad +", Some(NumpadPlus)),
    KeyEntry::new(0x6C, "VK_SEPARATOR", "Separator", None),
    KeyEntry::new(0x6D, "VK_SUBTRACT", "NumPad -", Some(NumpadMinus)),
    KeyEntry::new(0x6E, "VK_DECIMAL", "NumPad .", Some(NumpadDot)),
    KeyEntry::new(0x6F, "VK_DIVIDE", "NumPad /", Some(NumpadDivide)),
    KeyEntry::new(0x70, "VK_F1", "F1", Some(F1)),
    KeyEntry::new(0x71, "VK_F2", "F2", Some(F2)),
    KeyEntry::new(0x72, "VK_F3", "F3", Some(F3)),
    KeyEntry::new(0x73, "VK_F4", "F4", Some(F4)),
    KeyEntry::new(0x74, "VK_F5", "F5", Some(F5)),
    KeyEntry::new(0x75, "VK_F6", "F6", Some(F6)),
    KeyEntry::new(0x76, "VK_F7", "F7", Some(F7)),
    KeyEntry::new(0x77, "VK_F8", "F8", Some(F8)),
    KeyEntry::new(0x78, "VK_F9", "F9", Some(F9)),
    KeyEntry::new(0x79, "VK_F10", "F10", Some(F10)),
    KeyEntry::new(0x7A, "VK_F11", "F11", Some(F11)),
    KeyEntry::new(0x7B, "VK_F12", "F12", Some(F12)),
    KeyEntry::new(0x7C, "VK_F13", "F13", Some(F13)),
    KeyEntry::new(0x7D, "VK_F14", "F14", Some(F14)),
    KeyEntry::new(0x7E, "VK_F15", "F15", Some(F15)),
    KeyEntry::new(0x7F, "VK_F16", "F16", Some(F16)),
    KeyEntry::new(0x80, "VK_F17", "F17", Some(F17)),
    KeyEntry::new(0x81, "VK_F18", "F18", Some(F18)),
    KeyEntry::new(0x82, "VK_F19", "F19", Some(F19)),
    KeyEntry::new(0x83, "VK_F20", "F20", Some(F20)),
    KeyEntry::new(0x84, "VK_F21", "F21", Some(F21)),
    KeyEntry::new(0x85, "VK_F22", "F22", Some(F22)),
    KeyEntry::new(0x86, "VK_F23", "F23", Some(F23)),
    KeyEntry::new(0x87, "VK_F24", "F24", Some(F24)),
    KeyEntry::new(0x90, "VK_NUMLOCK", "Num Lock", Some(NumLock)),
    KeyEntry::new(0x91, "VK_SCROLL", "Scroll Lock", Some(ScrollLock)),
    KeyEntry::new(0xA0, "VK_LSHIFT", "Left Shift", Some(LeftShift)),
    KeyEntry::new(0xA1, "VK_RSHIFT", "Right Shift", Some(RightShift)),
    KeyEntry::new(0xA2, "VK_LCONTROL", "Left Ctrl", Some(LeftCtrl)),
    KeyEntry::new(0xA3, "VK_RCONTROL", "Right Ctrl", Some(RightCtrl)),
    KeyEntry::new(0xA4, "VK_LMENU", "Left Alt", Some(LeftAlt)),
    KeyEntry::new(0xA5, "VK_RMENU", "Right Alt", Some(RightAlt)),
    KeyEntry::new(0xA6, "VK_BROWSER_BACK", "Browser Back", None),
    KeyEntry::new(0xA7, "VK_BROWSER_FORWARD", "Browser Forward", None),
    KeyEntry::new(0xA8, "VK_BROWSER_REFRESH", "Browser Refresh", None),
    KeyEntry::new(0xAD, "VK_VOLUME_MUTE", "Volume Mute", None),
    KeyEntry::new(0xAE, "VK_VOLUME_DOWN", "Volume Down", None),
    KeyEntry::new(0xAF, "VK_VOLUME_UP", "Volume Up", None),
    KeyEntry::new(0xB0, "VK_MEDIA_NEXT_TRACK", "Next Track", None),
    KeyEntry::new(0xB1, "VK_MEDIA_PREV_TRACK", "Previous Track", None),
    KeyEntry::new(0xB2, "VK_MEDIA_STOP", "Stop", None),
    KeyEntry::new(0xB3, "VK_MEDIA_PLAY_PAUSE", "Play / Pause", None),
    KeyEntry::new(0xBA, "VK_OEM_1", ";", Some(Semicolon)),
    KeyEntry::new(0xBB, "VK_OEM_PLUS", "=", Some(Equals)),
    KeyEntry::new(0xBC, "VK_OEM_COMMA", ",", Some(Comma)),
    KeyEntry::new(0xBD, "VK_OEM_MINUS", "-", Some(Minus)),
    KeyEntry::new(0xBE, "VK_OEM_PERIOD", ".", Some(Dot)),
    KeyEntry::new(0xBF, "VK_OEM_2", "/", Some(ForwardSlash)),
    KeyEntry::new(0xC0, "VK_OEM_3", "`", Some(Backtick)),
    KeyEntry::new(0xDB, "VK_OEM_4", "[", Some(SquareBracketOpen)),
    KeyEntry::new(0xDC, "VK_OEM_5", "\\", Some(Backslash)),
    KeyEntry::new(0xDD, "VK_OEM_6", "]", Some(SquareBracketClose)),
    KeyEntry::new(0xDE, "VK_OEM_7", "'", Some(Quote)),
    KeyEntry::new(0xDF, "VK_OEM_8", "§", Some(Section)),
    KeyEntry::new(0xE2, "VK_OEM_102", "<>", None),
    KeyEntry::new(0xFA, "VK_PLAY", "Play", None),
    KeyEntry::new(0xFB, "VK_ZOOM", "Zoom", None),
];
