//=========================================================================
// Event Records
//
// Structured, host-facing form of one native event.
//
// Design:
// - Exhaustive over the kinds the bridge understands, with a mandatory
//   `Other` arm for everything else
// - Plain `Copy` data, no back-reference to native state
// - Host shape uses the native field names:
//
// ```text
//  all kinds   type, timestamp
//  key events  windowID, state, repeat, keysym { scancode, sym, mod }
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use serde::ser::{Serialize, SerializeMap, Serializer};

//=== Internal Dependencies ===============================================

use super::KeySym;
use crate::native::consts;

//=== EventKind ===========================================================

/// Native event kind, decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Quit,
    KeyDown,
    KeyUp,
    /// Any kind without a dedicated record shape; carries the native code.
    Other(u32),
}

impl EventKind {
    pub fn from_code(code: u32) -> Self {
        match code {
            consts::QUIT => Self::Quit,
            consts::KEYDOWN => Self::KeyDown,
            consts::KEYUP => Self::KeyUp,
            other => Self::Other(other),
        }
    }

    /// Native integer code (`type` in the host shape).
    pub fn code(self) -> u32 {
        match self {
            Self::Quit => consts::QUIT,
            Self::KeyDown => consts::KEYDOWN,
            Self::KeyUp => consts::KEYUP,
            Self::Other(code) => code,
        }
    }
}

//=== KeyEvent ============================================================

/// Payload shared by key-down and key-up records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub timestamp: u32,
    pub window_id: u32,
    /// `PRESSED` or `RELEASED`.
    pub state: u8,
    /// Non-zero for auto-repeat.
    pub repeat: u8,
    pub keysym: KeySym,
}

//=== EventRecord =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventRecord {
    Quit { timestamp: u32 },
    KeyDown(KeyEvent),
    KeyUp(KeyEvent),
    /// Kind tag and timestamp only. Never carries fields of another shape.
    Other { kind: u32, timestamp: u32 },
}

impl EventRecord {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Quit { .. } => EventKind::Quit,
            Self::KeyDown(_) => EventKind::KeyDown,
            Self::KeyUp(_) => EventKind::KeyUp,
            Self::Other { kind, .. } => EventKind::Other(*kind),
        }
    }

    /// Native integer kind.
    pub fn type_code(&self) -> u32 {
        self.kind().code()
    }

    pub fn timestamp(&self) -> u32 {
        match self {
            Self::Quit { timestamp } | Self::Other { timestamp, .. } => *timestamp,
            Self::KeyDown(key) | Self::KeyUp(key) => key.timestamp,
        }
    }

    /// Key payload for key-down / key-up records.
    pub fn key(&self) -> Option<&KeyEvent> {
        match self {
            Self::KeyDown(key) | Self::KeyUp(key) => Some(key),
            _ => None,
        }
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, Self::Quit { .. })
    }

    /// Host-visible shape as a JSON object.
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

//--- Host Shape ----------------------------------------------------------

impl Serialize for EventRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let key = self.key();
        let mut map = serializer.serialize_map(Some(if key.is_some() { 6 } else { 2 }))?;
        map.serialize_entry("type", &self.type_code())?;
        map.serialize_entry("timestamp", &self.timestamp())?;
        if let Some(key) = key {
            map.serialize_entry("windowID", &key.window_id)?;
            map.serialize_entry("state", &key.state)?;
            map.serialize_entry("repeat", &key.repeat)?;
            map.serialize_entry("keysym", &key.keysym)?;
        }
        map.end()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key_down() -> EventRecord {
        EventRecord::KeyDown(KeyEvent {
            timestamp: 1000,
            window_id: 1,
            state: consts::PRESSED,
            repeat: 0,
            keysym: KeySym::new(4, 'a' as i32, 0),
        })
    }

    #[test]
    fn kind_codes_round_trip() {
        for code in [consts::QUIT, consts::KEYDOWN, consts::KEYUP, consts::MOUSEMOTION, 0xBEEF] {
            assert_eq!(EventKind::from_code(code).code(), code);
        }
        assert_eq!(EventKind::from_code(consts::MOUSEWHEEL), EventKind::Other(consts::MOUSEWHEEL));
    }

    #[test]
    fn quit_shape_has_only_common_fields() {
        let record = EventRecord::Quit { timestamp: 77 };
        assert_eq!(record.to_value(), json!({ "type": 0x100, "timestamp": 77 }));
    }

    #[test]
    fn key_shape_uses_native_field_names() {
        assert_eq!(
            key_down().to_value(),
            json!({
                "type": 0x300,
                "timestamp": 1000,
                "windowID": 1,
                "state": 1,
                "repeat": 0,
                "keysym": { "scancode": 4, "sym": 97, "mod": 0 }
            })
        );
    }

    #[test]
    fn other_shape_has_no_key_fields() {
        let value = EventRecord::Other {
            kind: consts::MOUSEMOTION,
            timestamp: 5,
        }
        .to_value();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(!object.contains_key("keysym"));
        assert_eq!(object["type"], json!(0x400));
    }

    #[test]
    fn accessors_agree_with_variant() {
        let record = key_down();
        assert_eq!(record.kind(), EventKind::KeyDown);
        assert_eq!(record.timestamp(), 1000);
        assert_eq!(record.key().map(|k| k.window_id), Some(1));
        assert!(!record.is_quit());
        assert!(EventRecord::Quit { timestamp: 0 }.key().is_none());
    }
}
