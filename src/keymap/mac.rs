//! macOS virtual key codes from `HIToolbox/Events.h`, plus `CGMouseButton` offset into the mouse band.

use super::{KeyEntry, KeyTable, MOUSE_CODE_BASE};
use crate::key::CanonicalKey::*;

pub static MAC: KeyTable = KeyTable::new("mac", ENTRIES);

#[rustfmt::skip]
const ENTRIES: &[KeyEntry] = &[
    KeyEntry::new(0x00, "kVK_ANSI_A", "A", Some(A)),
    KeyEntry::new(0x01, "kVK_ANSI_S", "S", Some(S)),
    KeyEntry::new(0x02, "kVK_ANSI_D", "D", Some(D)),
    KeyEntry::new(0x03, "kVK_ANSI_F", "F", Some(F)),
    KeyEntry::new(0x04, "kVK_ANSI_H", "H", Some(H)),
    KeyEntry::new(0x05, "kVK_ANSI_G", "G", Some(G)),
    KeyEntry::new(0x06, "kVK_ANSI_Z", "Z", Some(Z)),
    KeyEntry::new(0x07, "kVK_ANSI_X", "X", Some(X)),
    KeyEntry::new(0x08, "kVK_ANSI_C", "C", Some(C)),
    KeyEntry::new(0x09, "kVK_ANSI_V", "V", Some(V)),
    KeyEntry::new(0x0A, "kVK_ISO_Section", "Section", Some(Section)),
    KeyEntry::new(0x0B, "kVK_ANSI_B", "B", Some(B)),
    KeyEntry::new(0x0C, "kVK_ANSI_Q", "Q", Some(Q)),
    KeyEntry::new(0x0D, "kVK_ANSI_W", "W", Some(W)),
    KeyEntry::new(0x0E, "kVK_ANSI_E", "E", Some(E)),
    KeyEntry::new(0x0F, "kVK_ANSI_R", "R", Some(R)),
    KeyEntry::new(0x10, "kVK_ANSI_Y", "Y", Some(Y)),
    KeyEntry::new(0x11, "kVK_ANSI_T", "T", Some(T)),
    KeyEntry::new(0x12, "kVK_ANSI_1", "1", Some(Num1)),
    KeyEntry::new(0x13, "kVK_ANSI_2", "2", Some(Num2)),
    KeyEntry::new(0x14, "kVK_ANSI_3", "3", Some(Num3)),
    KeyEntry::new(0x15, "kVK_ANSI_4", "4", Some(Num4)),
    KeyEntry::new(0x16, "kVK_ANSI_6", "6", Some(Num6)),
    KeyEntry::new(0x17, "kVK_ANSI_5", "5", Some(Num5)),
    KeyEntry::new(0x18, "kVK_ANSI_Equal", "Equal", Some(Equals)),
    KeyEntry::new(0x19, "kVK_ANSI_9", "9", Some(Num9)),
    KeyEntry::new(0x1A, "kVK_ANSI_7", "7", Some(Num7)),
    KeyEntry::new(0x1B, "kVK_ANSI_Minus", "Minus", Some(Minus)),
    KeyEntry::new(0x1C, "kVK_ANSI_8", "8", Some(Num8)),
    KeyEntry::new(0x1D, "kVK_ANSI_0", "0", Some(Num0)),
    KeyEntry::new(0x1E, "kVK_ANSI_RightBracket", "RightBracket", Some(SquareBracketClose)),
    KeyEntry::new(0x1F, "kVK_ANSI_O", "O", Some(O)),
    KeyEntry::new(0x20, "kVK_ANSI_U", "U", Some(U)),
    KeyEntry::new(0x21, "kVK_ANSI_LeftBracket", "LeftBracket", Some(SquareBracketOpen)),
    KeyEntry::new(0x22, "kVK_ANSI_I", "I", Some(I)),
    KeyEntry::new(0x23, "kVK_ANSI_P", "P", Some(P)),
    KeyEntry::new(0x24, "kVK_Return", "Return", Some(Return)),
    KeyEntry::new(0x25, "kVK_ANSI_L", "L", Some(L)),
    KeyEntry::new(0x26, "kVK_ANSI_J", "J", Some(J)),
    KeyEntry::new(0x27, "kVK_ANSI_Quote", "Quote", Some(Quote)),
    KeyEntry::new(0x28, "kVK_ANSI_K", "K", Some(K)),
    KeyEntry::new(0x29, "kVK_ANSI_Semicolon", "Semicolon", Some(Semicolon)),
    KeyEntry::new(0x2A, "kVK_ANSI_Backslash", "Backslash", Some(Backslash)),
    KeyEntry::new(0x2B, "kVK_ANSI_Comma", "Comma", Some(Comma)),
    KeyEntry::new(0x2C, "kVK_ANSI_Slash", "Slash", Some(ForwardSlash)),
    KeyEntry::new(0x2D, "kVK_ANSI_N", "N", Some(N)),
    KeyEntry::new(0x2E, "kVK_ANSI_M", "M", Some(M)),
    KeyEntry::new(0x2F, "kVK_ANSI_Period", "Period", Some(Dot)),
    KeyEntry::new(0x30, "kVK_Tab", "Tab", Some(Tab)),
    KeyEntry::new(0x31, "kVK_Space", "Space", Some(Space)),
    KeyEntry::new(0x32, "kVK_ANSI_Grave", "Grave", Some(Backtick)),
    KeyEntry::new(0x33, "kVK_Delete", "Delete", Some(Backspace)),
    KeyEntry::new(0x35, "kVK_Escape", "Escape", Some(Escape)),
    KeyEntry::new(0x36, "kVK_RightCommand", "Right Command", Some(RightMeta)),
    KeyEntry::new(0x37, "kVK_Command", "Command", Some(LeftMeta)),
    KeyEntry::new(0x38, "kVK_Shift", "Shift", Some(LeftShift)),
    KeyEntry::new(0x39, "kVK_CapsLock", "CapsLock", Some(CapsLock)),
    KeyEntry::new(0x3A, "kVK_Option", "Option", Some(LeftAlt)),
    KeyEntry::new(0x3B, "kVK_Control", "Control", Some(LeftCtrl)),
    KeyEntry::new(0x3C, "kVK_RightShift", "Right Shift", Some(RightShift)),
    KeyEntry::new(0x3D, "kVK_RightOption", "Right Option", Some(RightAlt)),
    KeyEntry::new(0x3E, "kVK_RightControl", "Right Control", Some(RightCtrl)),
    KeyEntry::new(0x3F, "kVK_Function", "Function", Some(Function)),
    KeyEntry::new(0x40, "kVK_F17", "F17", Some(F17)),
    KeyEntry::new(0x41, "kVK_ANSI_KeypadDecimal", "Keypad Decimal", Some(NumpadDot)),
    KeyEntry::new(0x43, "kVK_ANSI_KeypadMultiply", "Keypad Multiply", Some(NumpadMultiply)),
    KeyEntry::new(0x45, "kVK_ANSI_KeypadPlus", "Keypad Plus", Some(NumpadPlus)),
    KeyEntry::new(0x47, "kVK_ANSI_KeypadClear", "Keypad Clear", Some(NumpadClear)),
    KeyEntry::new(0x48, "kVK_VolumeUp", "Volume Up", None),
    KeyEntry::new(0x49, "kVK_VolumeDown", "Volume Down", None),
    KeyEntry::new(0x4A, "kVK_Mute", "Mute", None),
    KeyEntry::new(0x4B, "kVK_ANSI_KeypadDivide", "Keypad Divide", Some(NumpadDivide)),
    KeyEntry::new(0x4C, "kVK_ANSI_KeypadEnter", "Keypad Enter", Some(NumpadReturn)),
    KeyEntry::new(0x4E, "kVK_ANSI_KeypadMinus", "Keypad Minus", Some(NumpadMinus)),
    KeyEntry::new(0x4F, "kVK_F18", "F18", Some(F18)),
    KeyEntry::new(0x50, "kVK_F19", "F19", Some(F19)),
    KeyEntry::new(0x51, "kVK_ANSI_KeypadEquals", "Keypad Equals", Some(NumpadEquals)),
    KeyEntry::new(0x52, "kVK_ANSI_Keypad0", "Keypad 0", Some(Numpad0)),
    KeyEntry::new(0x53, "kVK_ANSI_Keypad1", "Keypad 1", Some(Numpad1)),
    KeyEntry::new(0x54, "kVK_ANSI_Keypad2", "Keypad 2", Some(Numpad2)),
    KeyEntry::new(0x55, "kVK_ANSI_Keypad3", "Keypad 3", Some(Numpad3)),
    KeyEntry::new(0x56, "kVK_ANSI_Keypad4", "Keypad 4", Some(Numpad4)),
    KeyEntry::new(0x57, "kVK_ANSI_Keypad5", "Keypad 5", Some(Numpad5)),
    KeyEntry::new(0x58, "kVK_ANSI_Keypad6", "Keypad 6", Some(Numpad6)),
    KeyEntry::new(0x59, "kVK_ANSI_Keypad7", "Keypad 7", Some(Numpad7)),
    KeyEntry::new(0x5A, "kVK_F20", "F20", Some(F20)),
    KeyEntry::new(0x5B, "kVK_ANSI_Keypad8", "Keypad 8", Some(Numpad8)),
    KeyEntry::new(0x5C, "kVK_ANSI_Keypad9", "Keypad 9", Some(Numpad9)),
    KeyEntry::new(0x60, "kVK_F5", "F5", Some(F5)),
    KeyEntry::new(0x61, "kVK_F6", "F6", Some(F6)),
    KeyEntry::new(0x62, "kVK_F7", "F7", Some(F7)),
    KeyEntry::new(0x63, "kVK_F3", "F3", Some(F3)),
    KeyEntry::new(0x64, "kVK_F8", "F8", Some(F8)),
    KeyEntry::new(0x65, "kVK_F9", "F9", Some(F9)),
    KeyEntry::new(0x67, "kVK_F11", "F11", Some(F11)),
    KeyEntry::new(0x69, "kVK_F13", "F13", Some(F13)),
    KeyEntry::new(0x6A, "kVK_F16", "F16", Some(F16)),
    KeyEntry::new(0x6B, "kVK_F14", "F14", Some(F14)),
    KeyEntry::new(0x6D, "kVK_F10", "F10", Some(F10)),
    KeyEntry::new(0x6F, "kVK_F12", "F12", Some(F12)),
    KeyEntry::new(0x71, "kVK_F15", "F15", Some(F15)),
    KeyEntry::new(0x72, "kVK_Help", "Help", Some(Insert)),
    KeyEntry::new(0x73, "kVK_Home", "Home", Some(Home)),
    KeyEntry::new(0x74, "kVK_PageUp", "Page Up", Some(PageUp)),
    KeyEntry::new(0x75, "kVK_ForwardDelete", "Forward Delete", Some(Delete)),
    KeyEntry::new(0x76, "kVK_F4", "F4", Some(F4)),
    KeyEntry::new(0x77, "kVK_End", "End", Some(End)),
    KeyEntry::new(0x78, "kVK_F2", "F2", Some(F2)),
    KeyEntry::new(0x79, "kVK_PageDown", "Page Down", Some(PageDown)),
    KeyEntry::new(0x7A, "kVK_F1", "F1", Some(F1)),
    KeyEntry::new(0x7B, "kVK_LeftArrow", "Left Arrow", Some(LeftArrow)),
    KeyEntry::new(0x7C, "kVK_RightArrow", "Right Arrow", Some(RightArrow)),
    KeyEntry::new(0x7D, "kVK_DownArrow", "Down Arrow", Some(DownArrow)),
    KeyEntry::new(0x7E, "kVK_UpArrow", "Up Arrow", Some(UpArrow)),
    KeyEntry::new(MOUSE_CODE_BASE, "CGMouseButton.left", "left", Some(MouseLeft)),
    KeyEntry::new(MOUSE_CODE_BASE + 1, "CGMouseButton.right", "right", Some(MouseRight)),
    KeyEntry::new(MOUSE_CODE_BASE + 2, "CGMouseButton.center", "center", Some(MouseMiddle)),
    KeyEntry::new(MOUSE_CODE_BASE + 3, "CGMouseButton.back", "back", Some(MouseX1)),
    KeyEntry::new(MOUSE_CODE_BASE + 4, "CGMouseButton.forward", "forward", Some(MouseX2)),
];
