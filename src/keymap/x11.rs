// Linux input event codes (see [input-event-codes.h]). X11 keycodes are these plus 8.
//
// [input-event-codes.h]: https://elixir.bootlin.com/linux/v5.19.17/source/include/uapi/linux/input-event-codes.h

use super::{KeyEntry, KeyTable, MOUSE_CODE_BASE};
use crate::key::CanonicalKey::*;

pub static X11: KeyTable = KeyTable::new("x11", ENTRIES);

#[rustfmt::skip]
const ENTRIES: &[KeyEntry] = &[
    KeyEntry::new(1, "KEY_ESC", "ESCAPE", Some(Escape)),
    KeyEntry::new(2, "KEY_1", "1", Some(Num1)),
    KeyEntry::new(3, "KEY_2", "2", Some(Num2)),
    KeyEntry::new(4, "KEY_3", "3", Some(Num3)),
    KeyEntry::new(5, "KEY_4", "4", Some(Num4)),
    KeyEntry::new(6, "KEY_5", "5", Some(Num5)),
    KeyEntry::new(7, "KEY_6", "6", Some(Num6)),
    KeyEntry::new(8, "KEY_7", "7", Some(Num7)),
    KeyEntry::new(9, "KEY_8", "8", Some(Num8)),
    KeyEntry::new(10, "KEY_9", "9", Some(Num9)),
    KeyEntry::new(11, "KEY_0", "0", Some(Num0)),
    KeyEntry::new(12, "KEY_MINUS", "MINUS", Some(Minus)),
    KeyEntry::new(13, "KEY_EQUAL", "EQUALS", Some(Equals)),
    KeyEntry::new(14, "KEY_BACKSPACE", "BACKSPACE", Some(Backspace)),
    KeyEntry::new(15, "KEY_TAB", "TAB", Some(Tab)),
    KeyEntry::new(16, "KEY_Q", "Q", Some(Q)),
    KeyEntry::new(17, "KEY_W", "W", Some(W)),
    KeyEntry::new(18, "KEY_E", "E", Some(E)),
    KeyEntry::new(19, "KEY_R", "R", Some(R)),
    KeyEntry::new(20, "KEY_T", "T", Some(T)),
    KeyEntry::new(21, "KEY_Y", "Y", Some(Y)),
    KeyEntry::new(22, "KEY_U", "U", Some(U)),
    KeyEntry::new(23, "KEY_I", "I", Some(I)),
    KeyEntry::new(24, "KEY_O", "O", Some(O)),
    KeyEntry::new(25, "KEY_P", "P", Some(P)),
    KeyEntry::new(26, "KEY_LEFTBRACE", "SQUARE BRACKET OPEN", Some(SquareBracketOpen)),
    KeyEntry::new(27, "KEY_RIGHTBRACE", "SQUARE BRACKET CLOSE", Some(SquareBracketClose)),
    KeyEntry::new(28, "KEY_ENTER", "RETURN", Some(Return)),
    KeyEntry::new(29, "KEY_LEFTCTRL", "LEFT CTRL", Some(LeftCtrl)),
    KeyEntry::new(30, "KEY_A", "A", Some(A)),
    KeyEntry::new(31, "KEY_S", "S", Some(S)),
    KeyEntry::new(32, "KEY_D", "D", Some(D)),
    KeyEntry::new(33, "KEY_F", "F", Some(F)),
    KeyEntry::new(34, "KEY_G", "G", Some(G)),
    KeyEntry::new(35, "KEY_H", "H", Some(H)),
    KeyEntry::new(36, "KEY_J", "J", Some(J)),
    KeyEntry::new(37, "KEY_K", "K", Some(K)),
    KeyEntry::new(38, "KEY_L", "L", Some(L)),
    KeyEntry::new(39, "KEY_SEMICOLON", "SEMICOLON", Some(Semicolon)),
    KeyEntry::new(40, "KEY_APOSTROPHE", "QUOTE", Some(Quote)),
    KeyEntry::new(41, "KEY_GRAVE", "BACKTICK", Some(Backtick)),
    KeyEntry::new(42, "KEY_LEFTSHIFT", "LEFT SHIFT", Some(LeftShift)),
    KeyEntry::new(43, "KEY_BACKSLASH", "BACKSLASH", Some(Backslash)),
    KeyEntry::new(44, "KEY_Z", "Z", Some(Z)),
    KeyEntry::new(45, "KEY_X", "X", Some(X)),
    KeyEntry::new(46, "KEY_C", "C", Some(C)),
    KeyEntry::new(47, "KEY_V", "V", Some(V)),
    KeyEntry::new(48, "KEY_B", "B", Some(B)),
    KeyEntry::new(49, "KEY_N", "N", Some(N)),
    KeyEntry::new(50, "KEY_M", "M", Some(M)),
    KeyEntry::new(51, "KEY_COMMA", "COMMA", Some(Comma)),
    KeyEntry::new(52, "KEY_DOT", "DOT", Some(Dot)),
    KeyEntry::new(53, "KEY_SLASH", "FORWARD SLASH", Some(ForwardSlash)),
    KeyEntry::new(54, "KEY_RIGHTSHIFT", "RIGHT SHIFT", Some(RightShift)),
    KeyEntry::new(55, "KEY_KPASTERISK", "NUMPAD MULTIPLY", Some(NumpadMultiply)),
    KeyEntry::new(56, "KEY_LEFTALT", "LEFT ALT", Some(LeftAlt)),
    KeyEntry::new(57, "KEY_SPACE", "SPACE", Some(Space)),
    KeyEntry::new(58, "KEY_CAPSLOCK", "CAPS LOCK", Some(CapsLock)),
    KeyEntry::new(59, "KEY_F1", "F1", Some(F1)),
    KeyEntry::new(60, "KEY_F2", "F2", Some(F2)),
    KeyEntry::new(61, "KEY_F3", "F3", Some(F3)),
    KeyEntry::new(62, "KEY_F4", "F4", Some(F4)),
    KeyEntry::new(63, "KEY_F5", "F5", Some(F5)),
    KeyEntry::new(64, "KEY_F6", "F6", Some(F6)),
    KeyEntry::new(65, "KEY_F7", "F7", Some(F7)),
    KeyEntry::new(66, "KEY_F8", "F8", Some(F8)),
    KeyEntry::new(67, "KEY_F9", "F9", Some(F9)),
    KeyEntry::new(68, "KEY_F10", "F10", Some(F10)),
    KeyEntry::new(69, "KEY_NUMLOCK", "NUM LOCK", Some(NumLock)),
    KeyEntry::new(70, "KEY_SCROLLLOCK", "SCROLL LOCK", Some(ScrollLock)),
    KeyEntry::new(71, "KEY_KP7", "NUMPAD 7", Some(Numpad7)),
    KeyEntry::new(72, "KEY_KP8", "NUMPAD 8", Some(Numpad8)),
    KeyEntry::new(73, "KEY_KP9", "NUMPAD 9", Some(Numpad9)),
    KeyEntry::new(74, "KEY_KPMINUS", "NUMPAD MINUS", Some(NumpadMinus)),
    KeyEntry::new(75, "KEY_KP4", "NUMPAD 4", Some(Numpad4)),
    KeyEntry::new(76, "KEY_KP5", "NUMPAD 5", Some(Numpad5)),
    KeyEntry::new(77, "KEY_KP6", "NUMPAD 6", Some(Numpad6)),
    KeyEntry::new(78, "KEY_KPPLUS", "NUMPAD PLUS", Some(NumpadPlus)),
    KeyEntry::new(79, "KEY_KP1", "NUMPAD 1", Some(Numpad1)),
    KeyEntry::new(80, "KEY_KP2", "NUMPAD 2", Some(Numpad2)),
    KeyEntry::new(81, "KEY_KP3", "NUMPAD 3", Some(Numpad3)),
    KeyEntry::new(82, "KEY_KP0", "NUMPAD 0", Some(Numpad0)),
    KeyEntry::new(83, "KEY_KPDOT", "NUMPAD DOT", Some(NumpadDot)),
    KeyEntry::new(85, "KEY_ZENKAKUHANKAKU", "ZENKAKU HANKAKU", None),
    KeyEntry::new(86, "KEY_102ND", "102ND", Some(Section)),
    KeyEntry::new(87, "KEY_F11", "F11", Some(F11)),
    KeyEntry::new(88, "KEY_F12", "F12", Some(F12)),
    KeyEntry::new(96, "KEY_KPENTER", "NUMPAD RETURN", Some(NumpadReturn)),
    KeyEntry::new(97, "KEY_RIGHTCTRL", "RIGHT CTRL", Some(RightCtrl)),
    KeyEntry::new(98, "KEY_KPSLASH", "NUMPAD DIVIDE", Some(NumpadDivide)),
    KeyEntry::new(99, "KEY_SYSRQ", "PRINT SCREEN", Some(PrintScreen)),
    KeyEntry::new(100, "KEY_RIGHTALT", "RIGHT ALT", Some(RightAlt)),
    KeyEntry::new(102, "KEY_HOME", "HOME", Some(Home)),
    KeyEntry::new(103, "KEY_UP", "UP ARROW", Some(UpArrow)),
    KeyEntry::new(104, "KEY_PAGEUP", "PAGE UP", Some(PageUp)),
    KeyEntry::new(105, "KEY_LEFT", "LEFT ARROW", Some(LeftArrow)),
    KeyEntry::new(106, "KEY_RIGHT", "RIGHT ARROW", Some(RightArrow)),
    KeyEntry::new(107, "KEY_END", "END", Some(End)),
    KeyEntry::new(108, "KEY_DOWN", "DOWN ARROW", Some(DownArrow)),
    KeyEntry::new(109, "KEY_PAGEDOWN", "PAGE DOWN", Some(PageDown)),
    KeyEntry::new(110, "KEY_INSERT", "INS", Some(Insert)),
    KeyEntry::new(111, "KEY_DELETE", "DELETE", Some(Delete)),
    KeyEntry::new(113, "KEY_MUTE", "MUTE", None),
    KeyEntry::new(114, "KEY_VOLUMEDOWN", "VOLUME DOWN", None),
    KeyEntry::new(115, "KEY_VOLUMEUP", "VOLUME UP", None),
    KeyEntry::new(116, "KEY_POWER", "POWER", None),
    KeyEntry::new(117, "KEY_KPEQUAL", "NUMPAD EQUALS", Some(NumpadEquals)),
    KeyEntry::new(119, "KEY_PAUSE", "PAUSE", Some(Pause)),
    KeyEntry::new(125, "KEY_LEFTMETA", "LEFT META", Some(LeftMeta)),
    KeyEntry::new(126, "KEY_RIGHTMETA", "RIGHT META", Some(RightMeta)),
    KeyEntry::new(127, "KEY_COMPOSE", "MENU", Some(ContextMenu)),
    KeyEntry::new(183, "KEY_F13", "F13", Some(F13)),
    KeyEntry::new(184, "KEY_F14", "F14", Some(F14)),
    KeyEntry::new(185, "KEY_F15", "F15", Some(F15)),
    KeyEntry::new(186, "KEY_F16", "F16", Some(F16)),
    KeyEntry::new(187, "KEY_F17", "F17", Some(F17)),
    KeyEntry::new(188, "KEY_F18", "F18", Some(F18)),
    KeyEntry::new(189, "KEY_F19", "F19", Some(F19)),
    KeyEntry::new(190, "KEY_F20", "F20", Some(F20)),
    KeyEntry::new(191, "KEY_F21", "F21", Some(F21)),
    KeyEntry::new(192, "KEY_F22", "F22", Some(F22)),
    KeyEntry::new(193, "KEY_F23", "F23", Some(F23)),
    KeyEntry::new(194, "KEY_F24", "F24", Some(F24)),
    KeyEntry::new(464, "KEY_FN", "FN", Some(Function)),
    KeyEntry::new(MOUSE_CODE_BASE + 1, "BUTTON_LEFT", "MOUSE LEFT", Some(MouseLeft)),
    KeyEntry::new(MOUSE_CODE_BASE + 2, "BUTTON_MIDDLE", "MOUSE MIDDLE", Some(MouseMiddle)),
    KeyEntry::new(MOUSE_CODE_BASE + 3, "BUTTON_RIGHT", "MOUSE RIGHT", Some(MouseRight)),
    KeyEntry::new(MOUSE_CODE_BASE + 8, "BUTTON_BACK", "MOUSE X1", Some(MouseX1)),
    KeyEntry::new(MOUSE_CODE_BASE + 9, "BUTTON_FORWARD", "MOUSE X2", Some(MouseX2)),
];
