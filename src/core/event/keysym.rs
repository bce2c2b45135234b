//=========================================================================
// KeySym
//=========================================================================

//=== External Dependencies ===============================================

use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use crate::native::RawKeysym;

//=== KeySym ==============================================================

/// Scancode, keycode, and modifier mask of a key event, passed through
/// from the native layer unchanged.
///
/// Serialized with the native field names `scancode`, `sym`, `mod`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeySym {
    /// Physical key position.
    pub scancode: i32,

    /// Layout-dependent key symbol.
    pub sym: i32,

    /// Modifier bitmask (`KMOD_*`).
    #[serde(rename = "mod")]
    pub modifiers: u16,
}

impl KeySym {
    pub const fn new(scancode: i32, sym: i32, modifiers: u16) -> Self {
        Self {
            scancode,
            sym,
            modifiers,
        }
    }

    /// `true` if any bit of `mask` is set in the modifier state.
    pub fn has_modifier(&self, mask: u16) -> bool {
        self.modifiers & mask != 0
    }
}

impl From<RawKeysym> for KeySym {
    fn from(raw: RawKeysym) -> Self {
        Self::new(raw.scancode, raw.sym, raw.modifiers)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::consts;

    #[test]
    fn from_raw_drops_padding_only() {
        let raw = RawKeysym {
            scancode: 4,
            sym: 'a' as i32,
            modifiers: consts::KMOD_LSHIFT,
            unused: 99,
        };
        assert_eq!(KeySym::from(raw), KeySym::new(4, 97, consts::KMOD_LSHIFT));
    }

    #[test]
    fn has_modifier_checks_any_bit() {
        let keysym = KeySym::new(0, 0, consts::KMOD_RCTRL);
        assert!(keysym.has_modifier(consts::KMOD_CTRL));
        assert!(!keysym.has_modifier(consts::KMOD_SHIFT));
    }

    #[test]
    fn serializes_modifiers_as_mod() {
        let value = serde_json::to_value(KeySym::new(4, 97, 1)).unwrap();
        assert_eq!(value, serde_json::json!({ "scancode": 4, "sym": 97, "mod": 1 }));
    }
}
