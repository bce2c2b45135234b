//=========================================================================
// Native Constants
//=========================================================================
//
// Integer constants of the native multimedia library: event kinds, init
// and object flags, pixel formats, key codes, scancodes, modifier bits.
//
// Values match the native library's ABI so host code written against the
// native headers reads the same numbers. `EXPORTED` lists the subset a
// host registrar injects into its namespace.
//
//=========================================================================

//=== Event Kinds =========================================================

pub const FIRSTEVENT: u32 = 0;
pub const QUIT: u32 = 0x100;
pub const WINDOWEVENT: u32 = 0x200;
pub const KEYDOWN: u32 = 0x300;
pub const KEYUP: u32 = 0x301;
pub const TEXTEDITING: u32 = 0x302;
pub const TEXTINPUT: u32 = 0x303;
pub const MOUSEMOTION: u32 = 0x400;
pub const MOUSEBUTTONDOWN: u32 = 0x401;
pub const MOUSEBUTTONUP: u32 = 0x402;
pub const MOUSEWHEEL: u32 = 0x403;
pub const USEREVENT: u32 = 0x8000;

//--- Window event sub-kinds ----------------------------------------------

pub const WINDOWEVENT_SHOWN: u8 = 1;
pub const WINDOWEVENT_HIDDEN: u8 = 2;
pub const WINDOWEVENT_MOVED: u8 = 4;
pub const WINDOWEVENT_RESIZED: u8 = 5;
pub const WINDOWEVENT_FOCUS_GAINED: u8 = 12;
pub const WINDOWEVENT_FOCUS_LOST: u8 = 13;
pub const WINDOWEVENT_CLOSE: u8 = 14;

//=== Init Flags ==========================================================

pub const INIT_TIMER: u32 = 0x0000_0001;
pub const INIT_AUDIO: u32 = 0x0000_0010;
pub const INIT_VIDEO: u32 = 0x0000_0020;
pub const INIT_JOYSTICK: u32 = 0x0000_0200;
pub const INIT_HAPTIC: u32 = 0x0000_1000;
pub const INIT_GAMECONTROLLER: u32 = 0x0000_2000;
pub const INIT_EVENTS: u32 = 0x0000_4000;
pub const INIT_SENSOR: u32 = 0x0000_8000;
pub const INIT_EVERYTHING: u32 = INIT_TIMER
    | INIT_AUDIO
    | INIT_VIDEO
    | INIT_EVENTS
    | INIT_JOYSTICK
    | INIT_HAPTIC
    | INIT_GAMECONTROLLER
    | INIT_SENSOR;

//=== Window Flags ========================================================

pub const WINDOW_FULLSCREEN: u32 = 0x0000_0001;
pub const WINDOW_OPENGL: u32 = 0x0000_0002;
pub const WINDOW_SHOWN: u32 = 0x0000_0004;
pub const WINDOW_HIDDEN: u32 = 0x0000_0008;
pub const WINDOW_BORDERLESS: u32 = 0x0000_0010;
pub const WINDOW_RESIZABLE: u32 = 0x0000_0020;

pub const WINDOWPOS_UNDEFINED: i32 = 0x1FFF_0000;
pub const WINDOWPOS_CENTERED: i32 = 0x2FFF_0000;

//=== Renderer Flags ======================================================

pub const RENDERER_SOFTWARE: u32 = 0x0000_0001;
pub const RENDERER_ACCELERATED: u32 = 0x0000_0002;
pub const RENDERER_PRESENTVSYNC: u32 = 0x0000_0004;
pub const RENDERER_TARGETTEXTURE: u32 = 0x0000_0008;

//=== Textures ============================================================

pub const TEXTUREACCESS_STATIC: i32 = 0;
pub const TEXTUREACCESS_STREAMING: i32 = 1;
pub const TEXTUREACCESS_TARGET: i32 = 2;

pub const PIXELFORMAT_RGB888: u32 = 0x1616_1804;
pub const PIXELFORMAT_RGBA8888: u32 = 0x1646_2004;
pub const PIXELFORMAT_ARGB8888: u32 = 0x1636_2004;
pub const PIXELFORMAT_ABGR8888: u32 = 0x1676_2004;

/// Formats the software render targets can hold. All are stored as one
/// 32-bit word per pixel.
pub const SUPPORTED_PIXEL_FORMATS: [u32; 4] = [
    PIXELFORMAT_RGB888,
    PIXELFORMAT_RGBA8888,
    PIXELFORMAT_ARGB8888,
    PIXELFORMAT_ABGR8888,
];

//=== Key States ==========================================================

pub const RELEASED: u8 = 0;
pub const PRESSED: u8 = 1;

//=== Mouse Buttons =======================================================

pub const BUTTON_LEFT: u8 = 1;
pub const BUTTON_MIDDLE: u8 = 2;
pub const BUTTON_RIGHT: u8 = 3;
pub const BUTTON_X1: u8 = 4;
pub const BUTTON_X2: u8 = 5;

//=== Scancodes (physical position) =======================================
//
// USB HID keyboard usage IDs. Keys beyond the HID keyboard page use the
// native library's extension block from 257.

pub const SCANCODE_UNKNOWN: i32 = 0;

//--- Alphanumeric ---------------------------------------------------------

pub const SCANCODE_A: i32 = 4;
pub const SCANCODE_Z: i32 = 29;
pub const SCANCODE_1: i32 = 30;
pub const SCANCODE_9: i32 = 38;
pub const SCANCODE_0: i32 = 39;
pub const SCANCODE_RETURN: i32 = 40;
pub const SCANCODE_ESCAPE: i32 = 41;
pub const SCANCODE_BACKSPACE: i32 = 42;
pub const SCANCODE_TAB: i32 = 43;
pub const SCANCODE_SPACE: i32 = 44;
pub const SCANCODE_MINUS: i32 = 45;
pub const SCANCODE_EQUALS: i32 = 46;
pub const SCANCODE_LEFTBRACKET: i32 = 47;
pub const SCANCODE_RIGHTBRACKET: i32 = 48;
pub const SCANCODE_BACKSLASH: i32 = 49;
pub const SCANCODE_NONUSHASH: i32 = 50;
pub const SCANCODE_SEMICOLON: i32 = 51;
pub const SCANCODE_APOSTROPHE: i32 = 52;
pub const SCANCODE_GRAVE: i32 = 53;
pub const SCANCODE_COMMA: i32 = 54;
pub const SCANCODE_PERIOD: i32 = 55;
pub const SCANCODE_SLASH: i32 = 56;
pub const SCANCODE_CAPSLOCK: i32 = 57;

//--- Function and navigation ----------------------------------------------

pub const SCANCODE_F1: i32 = 58;
pub const SCANCODE_F12: i32 = 69;
pub const SCANCODE_PRINTSCREEN: i32 = 70;
pub const SCANCODE_SCROLLLOCK: i32 = 71;
pub const SCANCODE_PAUSE: i32 = 72;
pub const SCANCODE_INSERT: i32 = 73;
pub const SCANCODE_HOME: i32 = 74;
pub const SCANCODE_PAGEUP: i32 = 75;
pub const SCANCODE_DELETE: i32 = 76;
pub const SCANCODE_END: i32 = 77;
pub const SCANCODE_PAGEDOWN: i32 = 78;
pub const SCANCODE_RIGHT: i32 = 79;
pub const SCANCODE_LEFT: i32 = 80;
pub const SCANCODE_DOWN: i32 = 81;
pub const SCANCODE_UP: i32 = 82;

//--- Keypad ---------------------------------------------------------------

pub const SCANCODE_NUMLOCKCLEAR: i32 = 83;
pub const SCANCODE_KP_DIVIDE: i32 = 84;
pub const SCANCODE_KP_MULTIPLY: i32 = 85;
pub const SCANCODE_KP_MINUS: i32 = 86;
pub const SCANCODE_KP_PLUS: i32 = 87;
pub const SCANCODE_KP_ENTER: i32 = 88;
pub const SCANCODE_KP_1: i32 = 89;
pub const SCANCODE_KP_9: i32 = 97;
pub const SCANCODE_KP_0: i32 = 98;
pub const SCANCODE_KP_PERIOD: i32 = 99;
pub const SCANCODE_KP_EQUALS: i32 = 103;
pub const SCANCODE_KP_COMMA: i32 = 133;
pub const SCANCODE_KP_LEFTPAREN: i32 = 182;
pub const SCANCODE_KP_RIGHTPAREN: i32 = 183;
pub const SCANCODE_KP_BACKSPACE: i32 = 187;
pub const SCANCODE_KP_HASH: i32 = 204;
pub const SCANCODE_KP_MEMSTORE: i32 = 208;
pub const SCANCODE_KP_MEMRECALL: i32 = 209;
pub const SCANCODE_KP_MEMCLEAR: i32 = 210;
pub const SCANCODE_KP_MEMADD: i32 = 211;
pub const SCANCODE_KP_MEMSUBTRACT: i32 = 212;
pub const SCANCODE_KP_CLEAR: i32 = 216;
pub const SCANCODE_KP_CLEARENTRY: i32 = 217;

//--- International and editing --------------------------------------------

pub const SCANCODE_NONUSBACKSLASH: i32 = 100;
pub const SCANCODE_APPLICATION: i32 = 101;
pub const SCANCODE_POWER: i32 = 102;
pub const SCANCODE_F13: i32 = 104;
pub const SCANCODE_F24: i32 = 115;
pub const SCANCODE_EXECUTE: i32 = 116;
pub const SCANCODE_HELP: i32 = 117;
pub const SCANCODE_SELECT: i32 = 119;
pub const SCANCODE_STOP: i32 = 120;
pub const SCANCODE_AGAIN: i32 = 121;
pub const SCANCODE_UNDO: i32 = 122;
pub const SCANCODE_CUT: i32 = 123;
pub const SCANCODE_COPY: i32 = 124;
pub const SCANCODE_PASTE: i32 = 125;
pub const SCANCODE_FIND: i32 = 126;
pub const SCANCODE_MUTE: i32 = 127;
pub const SCANCODE_VOLUMEUP: i32 = 128;
pub const SCANCODE_VOLUMEDOWN: i32 = 129;
pub const SCANCODE_INTERNATIONAL1: i32 = 135;
pub const SCANCODE_INTERNATIONAL2: i32 = 136;
pub const SCANCODE_INTERNATIONAL3: i32 = 137;
pub const SCANCODE_INTERNATIONAL4: i32 = 138;
pub const SCANCODE_INTERNATIONAL5: i32 = 139;
pub const SCANCODE_LANG1: i32 = 144;
pub const SCANCODE_LANG3: i32 = 146;
pub const SCANCODE_LANG4: i32 = 147;
pub const SCANCODE_LANG5: i32 = 148;

//--- Modifiers ------------------------------------------------------------

pub const SCANCODE_LCTRL: i32 = 224;
pub const SCANCODE_LSHIFT: i32 = 225;
pub const SCANCODE_LALT: i32 = 226;
pub const SCANCODE_LGUI: i32 = 227;
pub const SCANCODE_RCTRL: i32 = 228;
pub const SCANCODE_RSHIFT: i32 = 229;
pub const SCANCODE_RALT: i32 = 230;
pub const SCANCODE_RGUI: i32 = 231;

//--- Media and application control ----------------------------------------

pub const SCANCODE_AUDIONEXT: i32 = 258;
pub const SCANCODE_AUDIOPREV: i32 = 259;
pub const SCANCODE_AUDIOSTOP: i32 = 260;
pub const SCANCODE_AUDIOPLAY: i32 = 261;
pub const SCANCODE_MEDIASELECT: i32 = 263;
pub const SCANCODE_MAIL: i32 = 265;
pub const SCANCODE_CALCULATOR: i32 = 266;
pub const SCANCODE_COMPUTER: i32 = 267;
pub const SCANCODE_AC_SEARCH: i32 = 268;
pub const SCANCODE_AC_HOME: i32 = 269;
pub const SCANCODE_AC_BACK: i32 = 270;
pub const SCANCODE_AC_FORWARD: i32 = 271;
pub const SCANCODE_AC_STOP: i32 = 272;
pub const SCANCODE_AC_REFRESH: i32 = 273;
pub const SCANCODE_AC_BOOKMARKS: i32 = 274;
pub const SCANCODE_EJECT: i32 = 281;
pub const SCANCODE_SLEEP: i32 = 282;

/// One past the highest native scancode.
pub const NUM_SCANCODES: i32 = 512;

//=== Keycodes (layout symbol) ============================================

/// Set on keycodes of keys without a printable symbol.
pub const SCANCODE_MASK: i32 = 1 << 30;

pub const SDLK_UNKNOWN: i32 = 0;
pub const SDLK_RETURN: i32 = '\r' as i32;
pub const SDLK_ESCAPE: i32 = 0x1B;
pub const SDLK_BACKSPACE: i32 = 0x08;
pub const SDLK_TAB: i32 = '\t' as i32;
pub const SDLK_SPACE: i32 = ' ' as i32;
pub const SDLK_QUOTE: i32 = '\'' as i32;
pub const SDLK_COMMA: i32 = ',' as i32;
pub const SDLK_MINUS: i32 = '-' as i32;
pub const SDLK_PERIOD: i32 = '.' as i32;
pub const SDLK_SLASH: i32 = '/' as i32;
pub const SDLK_0: i32 = '0' as i32;
pub const SDLK_1: i32 = '1' as i32;
pub const SDLK_9: i32 = '9' as i32;
pub const SDLK_SEMICOLON: i32 = ';' as i32;
pub const SDLK_EQUALS: i32 = '=' as i32;
pub const SDLK_LEFTBRACKET: i32 = '[' as i32;
pub const SDLK_BACKSLASH: i32 = '\\' as i32;
pub const SDLK_RIGHTBRACKET: i32 = ']' as i32;
pub const SDLK_BACKQUOTE: i32 = '`' as i32;
pub const SDLK_A: i32 = 'a' as i32;
pub const SDLK_Q: i32 = 'q' as i32;
pub const SDLK_Z: i32 = 'z' as i32;
pub const SDLK_DELETE: i32 = 0x7F;
pub const SDLK_CAPSLOCK: i32 = SCANCODE_CAPSLOCK | SCANCODE_MASK;
pub const SDLK_F1: i32 = SCANCODE_F1 | SCANCODE_MASK;
pub const SDLK_F12: i32 = SCANCODE_F12 | SCANCODE_MASK;
pub const SDLK_INSERT: i32 = SCANCODE_INSERT | SCANCODE_MASK;
pub const SDLK_HOME: i32 = SCANCODE_HOME | SCANCODE_MASK;
pub const SDLK_PAGEUP: i32 = SCANCODE_PAGEUP | SCANCODE_MASK;
pub const SDLK_END: i32 = SCANCODE_END | SCANCODE_MASK;
pub const SDLK_PAGEDOWN: i32 = SCANCODE_PAGEDOWN | SCANCODE_MASK;
pub const SDLK_RIGHT: i32 = SCANCODE_RIGHT | SCANCODE_MASK;
pub const SDLK_LEFT: i32 = SCANCODE_LEFT | SCANCODE_MASK;
pub const SDLK_DOWN: i32 = SCANCODE_DOWN | SCANCODE_MASK;
pub const SDLK_UP: i32 = SCANCODE_UP | SCANCODE_MASK;
pub const SDLK_KP_1: i32 = SCANCODE_KP_1 | SCANCODE_MASK;
pub const SDLK_KP_ENTER: i32 = SCANCODE_KP_ENTER | SCANCODE_MASK;
pub const SDLK_LCTRL: i32 = SCANCODE_LCTRL | SCANCODE_MASK;
pub const SDLK_LSHIFT: i32 = SCANCODE_LSHIFT | SCANCODE_MASK;
pub const SDLK_LALT: i32 = SCANCODE_LALT | SCANCODE_MASK;
pub const SDLK_LGUI: i32 = SCANCODE_LGUI | SCANCODE_MASK;
pub const SDLK_RCTRL: i32 = SCANCODE_RCTRL | SCANCODE_MASK;
pub const SDLK_RSHIFT: i32 = SCANCODE_RSHIFT | SCANCODE_MASK;
pub const SDLK_RALT: i32 = SCANCODE_RALT | SCANCODE_MASK;
pub const SDLK_RGUI: i32 = SCANCODE_RGUI | SCANCODE_MASK;

/// Keycode produced by a scancode on the default (US) layout.
///
/// Printable keys map to their ASCII symbol. Every other known scancode
/// maps to `scancode | SCANCODE_MASK`. Out-of-range scancodes map to
/// `SDLK_UNKNOWN`.
pub fn default_keycode(scancode: i32) -> i32 {
    match scancode {
        SCANCODE_A..=SCANCODE_Z => SDLK_A + (scancode - SCANCODE_A),
        SCANCODE_1..=SCANCODE_9 => SDLK_1 + (scancode - SCANCODE_1),
        SCANCODE_0 => SDLK_0,
        SCANCODE_RETURN => SDLK_RETURN,
        SCANCODE_ESCAPE => SDLK_ESCAPE,
        SCANCODE_BACKSPACE => SDLK_BACKSPACE,
        SCANCODE_TAB => SDLK_TAB,
        SCANCODE_SPACE => SDLK_SPACE,
        SCANCODE_MINUS => SDLK_MINUS,
        SCANCODE_EQUALS => SDLK_EQUALS,
        SCANCODE_LEFTBRACKET => SDLK_LEFTBRACKET,
        SCANCODE_RIGHTBRACKET => SDLK_RIGHTBRACKET,
        SCANCODE_BACKSLASH => SDLK_BACKSLASH,
        SCANCODE_SEMICOLON => SDLK_SEMICOLON,
        SCANCODE_APOSTROPHE => SDLK_QUOTE,
        SCANCODE_GRAVE => SDLK_BACKQUOTE,
        SCANCODE_COMMA => SDLK_COMMA,
        SCANCODE_PERIOD => SDLK_PERIOD,
        SCANCODE_SLASH => SDLK_SLASH,
        SCANCODE_DELETE => SDLK_DELETE,
        _ if (1..NUM_SCANCODES).contains(&scancode) => scancode | SCANCODE_MASK,
        _ => SDLK_UNKNOWN,
    }
}

//=== Modifier Bits =======================================================

pub const KMOD_NONE: u16 = 0x0000;
pub const KMOD_LSHIFT: u16 = 0x0001;
pub const KMOD_RSHIFT: u16 = 0x0002;
pub const KMOD_LCTRL: u16 = 0x0040;
pub const KMOD_RCTRL: u16 = 0x0080;
pub const KMOD_LALT: u16 = 0x0100;
pub const KMOD_RALT: u16 = 0x0200;
pub const KMOD_LGUI: u16 = 0x0400;
pub const KMOD_RGUI: u16 = 0x0800;
pub const KMOD_NUM: u16 = 0x1000;
pub const KMOD_CAPS: u16 = 0x2000;
pub const KMOD_SHIFT: u16 = KMOD_LSHIFT | KMOD_RSHIFT;
pub const KMOD_CTRL: u16 = KMOD_LCTRL | KMOD_RCTRL;
pub const KMOD_ALT: u16 = KMOD_LALT | KMOD_RALT;
pub const KMOD_GUI: u16 = KMOD_LGUI | KMOD_RGUI;

//=== Registrar Table =====================================================

/// Constants a host registrar publishes under their native names.
pub const EXPORTED: &[(&str, i64)] = &[
    ("QUIT", QUIT as i64),
    ("WINDOWEVENT", WINDOWEVENT as i64),
    ("KEYDOWN", KEYDOWN as i64),
    ("KEYUP", KEYUP as i64),
    ("TEXTINPUT", TEXTINPUT as i64),
    ("MOUSEMOTION", MOUSEMOTION as i64),
    ("MOUSEBUTTONDOWN", MOUSEBUTTONDOWN as i64),
    ("MOUSEBUTTONUP", MOUSEBUTTONUP as i64),
    ("MOUSEWHEEL", MOUSEWHEEL as i64),
    ("USEREVENT", USEREVENT as i64),
    ("INIT_EVERYTHING", INIT_EVERYTHING as i64),
    ("WINDOW_SHOWN", WINDOW_SHOWN as i64),
    ("WINDOW_HIDDEN", WINDOW_HIDDEN as i64),
    ("WINDOW_RESIZABLE", WINDOW_RESIZABLE as i64),
    ("WINDOW_BORDERLESS", WINDOW_BORDERLESS as i64),
    ("WINDOW_FULLSCREEN", WINDOW_FULLSCREEN as i64),
    ("WINDOWPOS_UNDEFINED", WINDOWPOS_UNDEFINED as i64),
    ("WINDOWPOS_CENTERED", WINDOWPOS_CENTERED as i64),
    ("RENDERER_SOFTWARE", RENDERER_SOFTWARE as i64),
    ("RENDERER_ACCELERATED", RENDERER_ACCELERATED as i64),
    ("RENDERER_PRESENTVSYNC", RENDERER_PRESENTVSYNC as i64),
    ("TEXTUREACCESS_STATIC", TEXTUREACCESS_STATIC as i64),
    ("TEXTUREACCESS_STREAMING", TEXTUREACCESS_STREAMING as i64),
    ("TEXTUREACCESS_TARGET", TEXTUREACCESS_TARGET as i64),
    ("PIXELFORMAT_RGBA8888", PIXELFORMAT_RGBA8888 as i64),
    ("PIXELFORMAT_ARGB8888", PIXELFORMAT_ARGB8888 as i64),
    ("PRESSED", PRESSED as i64),
    ("RELEASED", RELEASED as i64),
    ("SDLK_ESCAPE", SDLK_ESCAPE as i64),
    ("SDLK_RETURN", SDLK_RETURN as i64),
    ("SDLK_SPACE", SDLK_SPACE as i64),
    ("SDLK_LEFT", SDLK_LEFT as i64),
    ("SDLK_RIGHT", SDLK_RIGHT as i64),
    ("SDLK_UP", SDLK_UP as i64),
    ("SDLK_DOWN", SDLK_DOWN as i64),
    ("SDLK_a", SDLK_A as i64),
    ("SDLK_z", SDLK_Z as i64),
    ("KMOD_NONE", KMOD_NONE as i64),
    ("KMOD_SHIFT", KMOD_SHIFT as i64),
    ("KMOD_CTRL", KMOD_CTRL as i64),
    ("KMOD_ALT", KMOD_ALT as i64),
];

/// Looks up an exported constant by its native name.
pub fn lookup(name: &str) -> Option<i64> {
    EXPORTED
        .iter()
        .find(|(exported, _)| *exported == name)
        .map(|(_, value)| *value)
}

//=========================================================================
// Unit Tests
//=========================================================================
