//=========================================================================
// Core Bridge
//
// Backend-independent half of the bridge: everything above the
// `NativeLibrary` seam.
//
// Responsibilities:
// - Gate every native call behind the subsystem init/quit state
// - Wrap each native handle in exactly one owning object
// - Translate raw native events into structured records
// - Load and validate bridge configuration
//
// Notes:
// Nothing in here is `Send`. The native libraries this bridges to are
// single-threaded, so the subsystem and all objects stay on the thread
// that created them. Cross-thread event injection goes through the
// backend (see `native::headless::EventInjector`).
//
//=========================================================================

//=== Submodules ==========================================================

pub mod config;
pub mod error;
pub mod event;
pub mod lifecycle;
pub mod objects;

pub(crate) mod handle;

//=== Public API ==========================================================

pub use config::{BridgeConfig, ConfigError, RendererSpec, WindowSpec};
pub use error::{BridgeError, BridgeResult};
pub use event::{EventKind, EventRecord, EventTranslator, KeyEvent, KeySym};
pub use lifecycle::{StatusCode, Subsystem, SubsystemState};
pub use objects::{Rect, Renderer, Texture, Window};
