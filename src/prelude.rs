//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use media_bridge::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Lifecycle
pub use crate::core::{StatusCode, Subsystem, SubsystemState};

// Owned objects
pub use crate::core::{Rect, Renderer, Texture, Window};

// Events
pub use crate::core::{EventKind, EventRecord, EventTranslator, KeyEvent, KeySym};

// Configuration and errors
pub use crate::core::{BridgeConfig, BridgeError, BridgeResult, ConfigError, RendererSpec, WindowSpec};

// Native seam and backends
pub use crate::native::consts;
pub use crate::native::headless::{EventInjector, HeadlessNative};
pub use crate::native::{NativeHandle, NativeLibrary, TextureInfo};

#[cfg(all(
    feature = "winit",
    any(
        target_os = "windows",
        target_os = "macos",
        target_os = "linux",
        target_os = "dragonfly",
        target_os = "freebsd",
        target_os = "netbsd",
        target_os = "openbsd"
    )
))]
pub use crate::platform::WinitNative;
