//=========================================================================
// Raw Native Event Layout
//=========================================================================
//
// C-layout mirror of the native tagged-union event record.
//
// Every variant starts with the same `kind: u32` word, so the tag can be
// read regardless of which member was written last. The union is padded
// to the native record size; the native poll primitive writes whole
// records into a caller-owned `RawEvent`.
//
// All members are plain integers, so every bit pattern is a valid value
// of every member. Reading a member is still `unsafe` (union rules); the
// accessors below confine that to this file.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::consts;

//=== Record Members ======================================================

/// Fields shared by every event kind.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawCommonEvent {
    pub kind: u32,
    pub timestamp: u32,
}

/// Native key symbol triple.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawKeysym {
    pub scancode: i32,
    pub sym: i32,
    pub modifiers: u16,
    pub unused: u32,
}

/// Key-down / key-up member.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawKeyboardEvent {
    pub kind: u32,
    pub timestamp: u32,
    pub window_id: u32,
    pub state: u8,
    pub repeat: u8,
    pub padding2: u8,
    pub padding3: u8,
    pub keysym: RawKeysym,
}

/// Window state change member.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawWindowEvent {
    pub kind: u32,
    pub timestamp: u32,
    pub window_id: u32,
    pub event: u8,
    pub padding1: u8,
    pub padding2: u8,
    pub padding3: u8,
    pub data1: i32,
    pub data2: i32,
}

/// Pointer motion member.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawMouseMotionEvent {
    pub kind: u32,
    pub timestamp: u32,
    pub window_id: u32,
    pub which: u32,
    pub state: u32,
    pub x: i32,
    pub y: i32,
    pub xrel: i32,
    pub yrel: i32,
}

/// Pointer button member.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawMouseButtonEvent {
    pub kind: u32,
    pub timestamp: u32,
    pub window_id: u32,
    pub which: u32,
    pub button: u8,
    pub state: u8,
    pub clicks: u8,
    pub padding1: u8,
    pub x: i32,
    pub y: i32,
}

/// Native record size in bytes.
pub const RAW_EVENT_SIZE: usize = 56;

//=== RawEvent ============================================================

/// The native tagged-union event record.
#[repr(C)]
#[derive(Clone, Copy)]
pub union RawEvent {
    pub kind: u32,
    pub common: RawCommonEvent,
    pub key: RawKeyboardEvent,
    pub window: RawWindowEvent,
    pub motion: RawMouseMotionEvent,
    pub button: RawMouseButtonEvent,
    pub padding: [u8; RAW_EVENT_SIZE],
}

impl RawEvent {
    //--- Construction -----------------------------------------------------

    /// An all-zero record (kind `FIRSTEVENT`).
    pub fn zeroed() -> Self {
        Self {
            padding: [0; RAW_EVENT_SIZE],
        }
    }

    /// Writes `member` over a zeroed record so no bytes of an earlier
    /// event survive in the padding.
    fn from_member(write: impl FnOnce(&mut RawEvent)) -> Self {
        let mut raw = Self::zeroed();
        write(&mut raw);
        raw
    }

    pub fn quit(timestamp: u32) -> Self {
        Self::from_member(|raw| {
            raw.common = RawCommonEvent {
                kind: consts::QUIT,
                timestamp,
            };
        })
    }

    pub fn key(kind: u32, timestamp: u32, window_id: u32, state: u8, repeat: u8, keysym: RawKeysym) -> Self {
        Self::from_member(|raw| {
            raw.key = RawKeyboardEvent {
                kind,
                timestamp,
                window_id,
                state,
                repeat,
                keysym,
                ..RawKeyboardEvent::default()
            };
        })
    }

    pub fn window(timestamp: u32, window_id: u32, event: u8, data1: i32, data2: i32) -> Self {
        Self::from_member(|raw| {
            raw.window = RawWindowEvent {
                kind: consts::WINDOWEVENT,
                timestamp,
                window_id,
                event,
                data1,
                data2,
                ..RawWindowEvent::default()
            };
        })
    }

    pub fn motion(timestamp: u32, window_id: u32, x: i32, y: i32, xrel: i32, yrel: i32) -> Self {
        Self::from_member(|raw| {
            raw.motion = RawMouseMotionEvent {
                kind: consts::MOUSEMOTION,
                timestamp,
                window_id,
                x,
                y,
                xrel,
                yrel,
                ..RawMouseMotionEvent::default()
            };
        })
    }

    pub fn button(kind: u32, timestamp: u32, window_id: u32, button: u8, state: u8, x: i32, y: i32) -> Self {
        Self::from_member(|raw| {
            raw.button = RawMouseButtonEvent {
                kind,
                timestamp,
                window_id,
                button,
                state,
                clicks: 1,
                x,
                y,
                ..RawMouseButtonEvent::default()
            };
        })
    }

    /// A record carrying only the common header, for kinds without a
    /// dedicated member (user events, text input, ...).
    pub fn other(kind: u32, timestamp: u32) -> Self {
        Self::from_member(|raw| {
            raw.common = RawCommonEvent { kind, timestamp };
        })
    }

    //--- Access -----------------------------------------------------------

    pub fn kind(&self) -> u32 {
        // SAFETY: every member is plain integers starting with `kind: u32`,
        // so the first word is always initialized and valid.
        unsafe { self.kind }
    }

    pub fn common(&self) -> RawCommonEvent {
        // SAFETY: all members are integer-only and the union is always fully
        // initialized (constructed through `zeroed`), so any bit pattern read
        // through `common` is valid.
        unsafe { self.common }
    }

    /// The key member. Meaningful only when `kind()` is `KEYDOWN`/`KEYUP`.
    pub fn key_event(&self) -> RawKeyboardEvent {
        // SAFETY: see `common`.
        unsafe { self.key }
    }

    /// The window member. Meaningful only when `kind()` is `WINDOWEVENT`.
    pub fn window_event(&self) -> RawWindowEvent {
        // SAFETY: see `common`.
        unsafe { self.window }
    }

    /// The motion member. Meaningful only when `kind()` is `MOUSEMOTION`.
    pub fn motion_event(&self) -> RawMouseMotionEvent {
        // SAFETY: see `common`.
        unsafe { self.motion }
    }

    /// The button member. Meaningful only for `MOUSEBUTTONDOWN`/`UP`.
    pub fn button_event(&self) -> RawMouseButtonEvent {
        // SAFETY: see `common`.
        unsafe { self.button }
    }
}

impl Default for RawEvent {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl std::fmt::Debug for RawEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let common = self.common();
        f.debug_struct("RawEvent")
            .field("kind", &format_args!("{:#x}", common.kind))
            .field("timestamp", &common.timestamp)
            .finish_non_exhaustive()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn members_fit_in_record() {
        assert_eq!(std::mem::size_of::<RawEvent>(), RAW_EVENT_SIZE);
        assert!(std::mem::size_of::<RawKeyboardEvent>() <= RAW_EVENT_SIZE);
        assert!(std::mem::size_of::<RawMouseMotionEvent>() <= RAW_EVENT_SIZE);
    }

    #[test]
    fn zeroed_record_has_first_event_kind() {
        let raw = RawEvent::zeroed();
        assert_eq!(raw.kind(), consts::FIRSTEVENT);
        assert_eq!(raw.common().timestamp, 0);
    }

    #[test]
    fn tag_is_shared_across_members() {
        let raw = RawEvent::key(consts::KEYUP, 7, 1, consts::RELEASED, 0, RawKeysym::default());
        assert_eq!(raw.kind(), consts::KEYUP);
        assert_eq!(raw.common().timestamp, 7);
    }

    #[test]
    fn header_only_record_leaves_key_fields_zero() {
        let raw = RawEvent::quit(55);
        let key = raw.key_event();
        assert_eq!(key.window_id, 0);
        assert_eq!(key.keysym, RawKeysym::default());
    }

    #[test]
    fn window_member_round_trips() {
        let raw = RawEvent::window(10, 3, consts::WINDOWEVENT_RESIZED, 800, 600);
        let window = raw.window_event();
        assert_eq!(window.kind, consts::WINDOWEVENT);
        assert_eq!((window.window_id, window.data1, window.data2), (3, 800, 600));
    }

    #[test]
    fn debug_shows_kind_in_hex() {
        let text = format!("{:?}", RawEvent::quit(1));
        assert!(text.contains("0x100"));
    }
}
