//=========================================================================
// Input Processor
//=========================================================================
//
// Converts Winit input into native event records.
//
// Architecture:
//   WindowEvent → InputProcessor → RawEvent → InputBuffer
//
// Stateful tracking: modifier state from `ModifiersChanged` is stamped on
// every later key record, and the last cursor position per window gives
// motion deltas and button coordinates.
//
// Key records carry two identifiers:
// - scancode: the physical key as a USB HID usage, `SCANCODE_UNKNOWN`
//   for keys outside the HID keyboard and media pages
// - sym: the key's meaning under the active layout, taken from Winit's
//   logical key. Keypad keys and keys without a printable symbol get
//   `scancode | 1 << 30`.
// Every key press produces a record, mapped or not.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use winit::{
    event::{ElementState, MouseButton as WinitMouseButton},
    keyboard::{Key, KeyCode as WinitKeyCode, ModifiersState, NamedKey, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::native::{consts, RawEvent, RawKeysym};

//=== InputProcessor ======================================================

pub(crate) struct InputProcessor {
    modifiers: u16,
    cursors: HashMap<u32, (i32, i32)>,
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self {
            modifiers: consts::KMOD_NONE,
            cursors: HashMap::new(),
        }
    }

    //--- Modifier State Management ----------------------------------------

    pub(crate) fn update_modifiers(&mut self, state: ModifiersState) {
        self.modifiers = modifier_bits(state);
    }

    #[cfg(test)]
    pub(crate) fn current_modifiers(&self) -> u16 {
        self.modifiers
    }

    /// Drops the cursor position of a destroyed window.
    pub(crate) fn forget_window(&mut self, window_id: u32) {
        self.cursors.remove(&window_id);
    }

    //--- Event Processing -------------------------------------------------

    /// Key-down or key-up record for a physical key and its layout meaning.
    pub(crate) fn process_key(
        &self,
        timestamp: u32,
        window_id: u32,
        physical: PhysicalKey,
        logical: &Key,
        state: ElementState,
        repeat: bool,
    ) -> RawEvent {
        let scancode = match physical {
            PhysicalKey::Code(code) => scancode_for(code),
            PhysicalKey::Unidentified(_) => consts::SCANCODE_UNKNOWN,
        };

        let (kind, state) = match state {
            ElementState::Pressed => (consts::KEYDOWN, consts::PRESSED),
            ElementState::Released => (consts::KEYUP, consts::RELEASED),
        };
        let keysym = RawKeysym {
            scancode,
            sym: keycode_for(logical, scancode),
            modifiers: self.modifiers,
            unused: 0,
        };
        RawEvent::key(kind, timestamp, window_id, state, u8::from(repeat), keysym)
    }

    /// Motion record with deltas against the last position in this window.
    pub(crate) fn process_mouse_move(&mut self, timestamp: u32, window_id: u32, x: f64, y: f64) -> RawEvent {
        let position = (x as i32, y as i32);
        let previous = self.cursors.insert(window_id, position).unwrap_or(position);
        RawEvent::motion(
            timestamp,
            window_id,
            position.0,
            position.1,
            position.0 - previous.0,
            position.1 - previous.1,
        )
    }

    /// Button record at the last known cursor position in this window.
    pub(crate) fn process_mouse_button(
        &self,
        timestamp: u32,
        window_id: u32,
        button: WinitMouseButton,
        state: ElementState,
    ) -> RawEvent {
        let (kind, state) = match state {
            ElementState::Pressed => (consts::MOUSEBUTTONDOWN, consts::PRESSED),
            ElementState::Released => (consts::MOUSEBUTTONUP, consts::RELEASED),
        };
        let (x, y) = self.cursors.get(&window_id).copied().unwrap_or_default();
        RawEvent::button(kind, timestamp, window_id, button_index(button), state, x, y)
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Modifier bitmask for a Winit modifier state.
///
/// Winit reports modifiers without a side, so each maps to its left bit.
pub(crate) fn modifier_bits(state: ModifiersState) -> u16 {
    let mut bits = consts::KMOD_NONE;
    if state.shift_key() {
        bits |= consts::KMOD_LSHIFT;
    }
    if state.control_key() {
        bits |= consts::KMOD_LCTRL;
    }
    if state.alt_key() {
        bits |= consts::KMOD_LALT;
    }
    if state.super_key() {
        bits |= consts::KMOD_LGUI;
    }
    bits
}

/// Native button index. Extra buttons keep their Winit number.
pub(crate) fn button_index(button: WinitMouseButton) -> u8 {
    match button {
        WinitMouseButton::Left => consts::BUTTON_LEFT,
        WinitMouseButton::Middle => consts::BUTTON_MIDDLE,
        WinitMouseButton::Right => consts::BUTTON_RIGHT,
        WinitMouseButton::Back => consts::BUTTON_X1,
        WinitMouseButton::Forward => consts::BUTTON_X2,
        WinitMouseButton::Other(n) => u8::try_from(n).unwrap_or(u8::MAX),
    }
}

/// Layout keycode for a logical key.
///
/// Printable keys give the lowercase code point of their symbol. Named
/// keys with an ASCII control code keep it. Keypad keys and everything
/// else use the scancode's default keycode.
pub(crate) fn keycode_for(logical: &Key, scancode: i32) -> i32 {
    if is_keypad(scancode) {
        return consts::default_keycode(scancode);
    }
    let symbol = match logical {
        Key::Character(text) => single_char(text),
        Key::Dead(accent) => *accent,
        Key::Named(NamedKey::Enter) => Some('\r'),
        Key::Named(NamedKey::Escape) => Some('\u{1b}'),
        Key::Named(NamedKey::Backspace) => Some('\u{8}'),
        Key::Named(NamedKey::Tab) => Some('\t'),
        Key::Named(NamedKey::Space) => Some(' '),
        Key::Named(NamedKey::Delete) => Some('\u{7f}'),
        _ => None,
    };
    match symbol {
        Some(c) => lowercase(c) as i32,
        None => consts::default_keycode(scancode),
    }
}

fn is_keypad(scancode: i32) -> bool {
    matches!(
        scancode,
        consts::SCANCODE_KP_DIVIDE..=consts::SCANCODE_KP_PERIOD
            | consts::SCANCODE_KP_EQUALS
            | consts::SCANCODE_KP_COMMA
            | consts::SCANCODE_KP_LEFTPAREN..=consts::SCANCODE_KP_CLEARENTRY
    )
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    let c = chars.next()?;
    (chars.next().is_none() && !c.is_control()).then_some(c)
}

/// Lowercase form when it is a single code point. 'İ' lowers to two code
/// points and stays as is.
fn lowercase(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Physical Winit key to native scancode. Winit key codes name USB HID
/// usages, so the table is positional. Keys with no HID usage give
/// `SCANCODE_UNKNOWN`.
pub(crate) fn scancode_for(code: WinitKeyCode) -> i32 {
    use consts::*;
    use WinitKeyCode::*;
    match code {
        //--- Letters ------------------------------------------------------

        KeyA => SCANCODE_A,
        KeyB => SCANCODE_A + 1,
        KeyC => SCANCODE_A + 2,
        KeyD => SCANCODE_A + 3,
        KeyE => SCANCODE_A + 4,
        KeyF => SCANCODE_A + 5,
        KeyG => SCANCODE_A + 6,
        KeyH => SCANCODE_A + 7,
        KeyI => SCANCODE_A + 8,
        KeyJ => SCANCODE_A + 9,
        KeyK => SCANCODE_A + 10,
        KeyL => SCANCODE_A + 11,
        KeyM => SCANCODE_A + 12,
        KeyN => SCANCODE_A + 13,
        KeyO => SCANCODE_A + 14,
        KeyP => SCANCODE_A + 15,
        KeyQ => SCANCODE_A + 16,
        KeyR => SCANCODE_A + 17,
        KeyS => SCANCODE_A + 18,
        KeyT => SCANCODE_A + 19,
        KeyU => SCANCODE_A + 20,
        KeyV => SCANCODE_A + 21,
        KeyW => SCANCODE_A + 22,
        KeyX => SCANCODE_A + 23,
        KeyY => SCANCODE_A + 24,
        KeyZ => SCANCODE_Z,

        //--- Digits (number row, 1 first) ---------------------------------

        Digit1 => SCANCODE_1,
        Digit2 => SCANCODE_1 + 1,
        Digit3 => SCANCODE_1 + 2,
        Digit4 => SCANCODE_1 + 3,
        Digit5 => SCANCODE_1 + 4,
        Digit6 => SCANCODE_1 + 5,
        Digit7 => SCANCODE_1 + 6,
        Digit8 => SCANCODE_1 + 7,
        Digit9 => SCANCODE_9,
        Digit0 => SCANCODE_0,

        //--- Punctuation --------------------------------------------------

        Minus => SCANCODE_MINUS,
        Equal => SCANCODE_EQUALS,
        BracketLeft => SCANCODE_LEFTBRACKET,
        BracketRight => SCANCODE_RIGHTBRACKET,
        Backslash => SCANCODE_BACKSLASH,
        Semicolon => SCANCODE_SEMICOLON,
        Quote => SCANCODE_APOSTROPHE,
        Backquote => SCANCODE_GRAVE,
        Comma => SCANCODE_COMMA,
        Period => SCANCODE_PERIOD,
        Slash => SCANCODE_SLASH,
        IntlBackslash => SCANCODE_NONUSBACKSLASH,
        IntlRo => SCANCODE_INTERNATIONAL1,
        IntlYen => SCANCODE_INTERNATIONAL3,

        //--- Function keys ------------------------------------------------

        F1 => SCANCODE_F1,
        F2 => SCANCODE_F1 + 1,
        F3 => SCANCODE_F1 + 2,
        F4 => SCANCODE_F1 + 3,
        F5 => SCANCODE_F1 + 4,
        F6 => SCANCODE_F1 + 5,
        F7 => SCANCODE_F1 + 6,
        F8 => SCANCODE_F1 + 7,
        F9 => SCANCODE_F1 + 8,
        F10 => SCANCODE_F1 + 9,
        F11 => SCANCODE_F1 + 10,
        F12 => SCANCODE_F12,
        F13 => SCANCODE_F13,
        F14 => SCANCODE_F13 + 1,
        F15 => SCANCODE_F13 + 2,
        F16 => SCANCODE_F13 + 3,
        F17 => SCANCODE_F13 + 4,
        F18 => SCANCODE_F13 + 5,
        F19 => SCANCODE_F13 + 6,
        F20 => SCANCODE_F13 + 7,
        F21 => SCANCODE_F13 + 8,
        F22 => SCANCODE_F13 + 9,
        F23 => SCANCODE_F13 + 10,
        F24 => SCANCODE_F24,

        //--- Navigation ---------------------------------------------------

        ArrowRight => SCANCODE_RIGHT,
        ArrowLeft => SCANCODE_LEFT,
        ArrowDown => SCANCODE_DOWN,
        ArrowUp => SCANCODE_UP,
        Insert => SCANCODE_INSERT,
        Home => SCANCODE_HOME,
        PageUp => SCANCODE_PAGEUP,
        Delete => SCANCODE_DELETE,
        End => SCANCODE_END,
        PageDown => SCANCODE_PAGEDOWN,

        //--- Special ------------------------------------------------------

        Enter => SCANCODE_RETURN,
        Escape => SCANCODE_ESCAPE,
        Backspace => SCANCODE_BACKSPACE,
        Tab => SCANCODE_TAB,
        Space => SCANCODE_SPACE,
        CapsLock => SCANCODE_CAPSLOCK,
        PrintScreen => SCANCODE_PRINTSCREEN,
        ScrollLock => SCANCODE_SCROLLLOCK,
        Pause => SCANCODE_PAUSE,
        ContextMenu => SCANCODE_APPLICATION,

        //--- Keypad -------------------------------------------------------

        NumLock => SCANCODE_NUMLOCKCLEAR,
        NumpadDivide => SCANCODE_KP_DIVIDE,
        NumpadMultiply | NumpadStar => SCANCODE_KP_MULTIPLY,
        NumpadSubtract => SCANCODE_KP_MINUS,
        NumpadAdd => SCANCODE_KP_PLUS,
        NumpadEnter => SCANCODE_KP_ENTER,
        Numpad1 => SCANCODE_KP_1,
        Numpad2 => SCANCODE_KP_1 + 1,
        Numpad3 => SCANCODE_KP_1 + 2,
        Numpad4 => SCANCODE_KP_1 + 3,
        Numpad5 => SCANCODE_KP_1 + 4,
        Numpad6 => SCANCODE_KP_1 + 5,
        Numpad7 => SCANCODE_KP_1 + 6,
        Numpad8 => SCANCODE_KP_1 + 7,
        Numpad9 => SCANCODE_KP_9,
        Numpad0 => SCANCODE_KP_0,
        NumpadDecimal => SCANCODE_KP_PERIOD,
        NumpadEqual => SCANCODE_KP_EQUALS,
        NumpadComma => SCANCODE_KP_COMMA,
        NumpadParenLeft => SCANCODE_KP_LEFTPAREN,
        NumpadParenRight => SCANCODE_KP_RIGHTPAREN,
        NumpadBackspace => SCANCODE_KP_BACKSPACE,
        NumpadHash => SCANCODE_KP_HASH,
        NumpadMemoryStore => SCANCODE_KP_MEMSTORE,
        NumpadMemoryRecall => SCANCODE_KP_MEMRECALL,
        NumpadMemoryClear => SCANCODE_KP_MEMCLEAR,
        NumpadMemoryAdd => SCANCODE_KP_MEMADD,
        NumpadMemorySubtract => SCANCODE_KP_MEMSUBTRACT,
        NumpadClear => SCANCODE_KP_CLEAR,
        NumpadClearEntry => SCANCODE_KP_CLEARENTRY,

        //--- Modifiers ----------------------------------------------------

        ControlLeft => SCANCODE_LCTRL,
        ShiftLeft => SCANCODE_LSHIFT,
        AltLeft => SCANCODE_LALT,
        SuperLeft => SCANCODE_LGUI,
        ControlRight => SCANCODE_RCTRL,
        ShiftRight => SCANCODE_RSHIFT,
        AltRight => SCANCODE_RALT,
        SuperRight => SCANCODE_RGUI,

        //--- Language input -----------------------------------------------

        KanaMode => SCANCODE_INTERNATIONAL2,
        Convert => SCANCODE_INTERNATIONAL4,
        NonConvert => SCANCODE_INTERNATIONAL5,
        Lang1 => SCANCODE_LANG1,
        Lang2 => SCANCODE_LANG1 + 1,
        Lang3 | Katakana => SCANCODE_LANG3,
        Lang4 | Hiragana => SCANCODE_LANG4,
        Lang5 => SCANCODE_LANG5,

        //--- Editing ------------------------------------------------------

        Open => SCANCODE_EXECUTE,
        Help => SCANCODE_HELP,
        Select => SCANCODE_SELECT,
        Again => SCANCODE_AGAIN,
        Undo => SCANCODE_UNDO,
        Cut => SCANCODE_CUT,
        Copy => SCANCODE_COPY,
        Paste => SCANCODE_PASTE,
        Find => SCANCODE_FIND,
        Abort => SCANCODE_STOP,

        //--- Media and system ---------------------------------------------

        AudioVolumeMute => SCANCODE_MUTE,
        AudioVolumeUp => SCANCODE_VOLUMEUP,
        AudioVolumeDown => SCANCODE_VOLUMEDOWN,
        MediaTrackNext => SCANCODE_AUDIONEXT,
        MediaTrackPrevious => SCANCODE_AUDIOPREV,
        MediaStop => SCANCODE_AUDIOSTOP,
        MediaPlayPause => SCANCODE_AUDIOPLAY,
        MediaSelect => SCANCODE_MEDIASELECT,
        LaunchMail => SCANCODE_MAIL,
        LaunchApp2 => SCANCODE_CALCULATOR,
        LaunchApp1 => SCANCODE_COMPUTER,
        BrowserSearch => SCANCODE_AC_SEARCH,
        BrowserHome => SCANCODE_AC_HOME,
        BrowserBack => SCANCODE_AC_BACK,
        BrowserForward => SCANCODE_AC_FORWARD,
        BrowserStop => SCANCODE_AC_STOP,
        BrowserRefresh => SCANCODE_AC_REFRESH,
        BrowserFavorites => SCANCODE_AC_BOOKMARKS,
        Eject => SCANCODE_EJECT,
        Power => SCANCODE_POWER,
        Sleep => SCANCODE_SLEEP,

        _ => SCANCODE_UNKNOWN,
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_no_modifiers() {
        assert_eq!(InputProcessor::new().current_modifiers(), consts::KMOD_NONE);
    }

    #[test]
    fn modifiers_map_to_left_bits() {
        let bits = modifier_bits(ModifiersState::SHIFT | ModifiersState::ALT);
        assert_eq!(bits, consts::KMOD_LSHIFT | consts::KMOD_LALT);
    }

    fn press(processor: &InputProcessor, code: WinitKeyCode, logical: Key) -> RawKeysym {
        processor
            .process_key(0, 1, PhysicalKey::Code(code), &logical, ElementState::Pressed, false)
            .key_event()
            .keysym
    }

    #[test]
    fn key_down_carries_scancode_sym_and_modifiers() {
        let mut processor = InputProcessor::new();
        processor.update_modifiers(ModifiersState::CONTROL);

        let raw = processor.process_key(
            1000,
            1,
            PhysicalKey::Code(WinitKeyCode::KeyA),
            &Key::Character("a".into()),
            ElementState::Pressed,
            false,
        );
        let key = raw.key_event();

        assert_eq!(key.kind, consts::KEYDOWN);
        assert_eq!((key.timestamp, key.window_id, key.state, key.repeat), (1000, 1, consts::PRESSED, 0));
        assert_eq!(key.keysym.scancode, consts::SCANCODE_A);
        assert_eq!(key.keysym.sym, 'a' as i32);
        assert_eq!(key.keysym.modifiers, consts::KMOD_LCTRL);
    }

    #[test]
    fn key_up_with_repeat() {
        let processor = InputProcessor::new();
        let raw = processor.process_key(
            5,
            2,
            PhysicalKey::Code(WinitKeyCode::Escape),
            &Key::Named(NamedKey::Escape),
            ElementState::Released,
            true,
        );
        let key = raw.key_event();
        assert_eq!((key.kind, key.state, key.repeat), (consts::KEYUP, consts::RELEASED, 1));
        assert_eq!(key.keysym.sym, consts::SDLK_ESCAPE);
    }

    #[test]
    fn sym_follows_layout_not_position() {
        // AZERTY: the key in the US 'A' position types 'q'.
        let keysym = press(&InputProcessor::new(), WinitKeyCode::KeyA, Key::Character("q".into()));
        assert_eq!(keysym.scancode, consts::SCANCODE_A);
        assert_eq!(keysym.sym, consts::SDLK_Q);
    }

    #[test]
    fn shifted_character_reports_lowercase_sym() {
        let keysym = press(&InputProcessor::new(), WinitKeyCode::KeyZ, Key::Character("Z".into()));
        assert_eq!(keysym.sym, consts::SDLK_Z);
    }

    #[test]
    fn punctuation_keys_are_reported() {
        let processor = InputProcessor::new();
        let cases = [
            (WinitKeyCode::Minus, "-", consts::SCANCODE_MINUS, consts::SDLK_MINUS),
            (WinitKeyCode::Comma, ",", consts::SCANCODE_COMMA, consts::SDLK_COMMA),
            (WinitKeyCode::Period, ".", consts::SCANCODE_PERIOD, consts::SDLK_PERIOD),
            (WinitKeyCode::Slash, "/", consts::SCANCODE_SLASH, consts::SDLK_SLASH),
        ];
        for (code, text, scancode, sym) in cases {
            let keysym = press(&processor, code, Key::Character(text.into()));
            assert_eq!((keysym.scancode, keysym.sym), (scancode, sym), "{:?}", code);
        }
    }

    #[test]
    fn navigation_keys_get_masked_sym() {
        let processor = InputProcessor::new();
        let cases = [
            (WinitKeyCode::Home, NamedKey::Home, consts::SDLK_HOME),
            (WinitKeyCode::End, NamedKey::End, consts::SDLK_END),
            (WinitKeyCode::PageUp, NamedKey::PageUp, consts::SDLK_PAGEUP),
            (WinitKeyCode::Insert, NamedKey::Insert, consts::SDLK_INSERT),
            (WinitKeyCode::CapsLock, NamedKey::CapsLock, consts::SDLK_CAPSLOCK),
        ];
        for (code, named, sym) in cases {
            let keysym = press(&processor, code, Key::Named(named));
            assert_eq!(keysym.sym, sym, "{:?}", code);
            assert_eq!(keysym.scancode, sym & !consts::SCANCODE_MASK);
        }
    }

    #[test]
    fn numpad_digit_keeps_keypad_scancode() {
        let keysym = press(&InputProcessor::new(), WinitKeyCode::Numpad1, Key::Character("1".into()));
        assert_eq!(keysym.scancode, consts::SCANCODE_KP_1);
        assert_eq!(keysym.sym, consts::SDLK_KP_1);

        let keysym = press(&InputProcessor::new(), WinitKeyCode::NumpadEnter, Key::Named(NamedKey::Enter));
        assert_eq!(keysym.scancode, consts::SCANCODE_KP_ENTER);
        assert_eq!(keysym.sym, consts::SDLK_KP_ENTER);
    }

    #[test]
    fn unknown_keys_still_produce_a_record() {
        use winit::keyboard::{NativeKey, NativeKeyCode};

        let processor = InputProcessor::new();
        let raw = processor.process_key(
            7,
            1,
            PhysicalKey::Unidentified(NativeKeyCode::Unidentified),
            &Key::Unidentified(NativeKey::Unidentified),
            ElementState::Pressed,
            false,
        );
        let key = raw.key_event();
        assert_eq!(key.kind, consts::KEYDOWN);
        assert_eq!((key.keysym.scancode, key.keysym.sym), (consts::SCANCODE_UNKNOWN, consts::SDLK_UNKNOWN));

        let fn_key = press(&processor, WinitKeyCode::Fn, Key::Named(NamedKey::Fn));
        assert_eq!((fn_key.scancode, fn_key.sym), (consts::SCANCODE_UNKNOWN, consts::SDLK_UNKNOWN));
    }

    #[test]
    fn scancode_table_edges() {
        assert_eq!(scancode_for(WinitKeyCode::KeyY), consts::SCANCODE_Z - 1);
        assert_eq!(scancode_for(WinitKeyCode::Digit8), consts::SCANCODE_9 - 1);
        assert_eq!(scancode_for(WinitKeyCode::F11), consts::SCANCODE_F12 - 1);
        assert_eq!(scancode_for(WinitKeyCode::F23), consts::SCANCODE_F24 - 1);
        assert_eq!(scancode_for(WinitKeyCode::Numpad8), consts::SCANCODE_KP_9 - 1);
        assert_eq!(scancode_for(WinitKeyCode::F25), consts::SCANCODE_UNKNOWN);
    }

    #[test]
    fn motion_deltas_track_previous_position() {
        let mut processor = InputProcessor::new();
        let first = processor.process_mouse_move(1, 1, 10.0, 20.0).motion_event();
        let second = processor.process_mouse_move(2, 1, 13.6, 18.0).motion_event();

        assert_eq!((first.xrel, first.yrel), (0, 0));
        assert_eq!((second.x, second.y), (13, 18));
        assert_eq!((second.xrel, second.yrel), (3, -2));
    }

    #[test]
    fn button_uses_last_cursor_position() {
        let mut processor = InputProcessor::new();
        processor.process_mouse_move(1, 1, 40.0, 30.0);

        let button = processor
            .process_mouse_button(2, 1, WinitMouseButton::Right, ElementState::Pressed)
            .button_event();

        assert_eq!(button.kind, consts::MOUSEBUTTONDOWN);
        assert_eq!((button.button, button.state), (consts::BUTTON_RIGHT, consts::PRESSED));
        assert_eq!((button.x, button.y), (40, 30));
    }

    #[test]
    fn forgotten_window_loses_cursor() {
        let mut processor = InputProcessor::new();
        processor.process_mouse_move(1, 3, 5.0, 5.0);
        processor.forget_window(3);
        let button = processor
            .process_mouse_button(2, 3, WinitMouseButton::Left, ElementState::Released)
            .button_event();
        assert_eq!((button.x, button.y), (0, 0));
    }

    #[test]
    fn extra_buttons_keep_their_number() {
        assert_eq!(button_index(WinitMouseButton::Back), consts::BUTTON_X1);
        assert_eq!(button_index(WinitMouseButton::Other(9)), 9);
        assert_eq!(button_index(WinitMouseButton::Other(999)), u8::MAX);
    }
}
