//=========================================================================
// Event Translation
//=========================================================================
//
// Native tagged-union records in, structured `EventRecord`s out.
//
// - `keysym`: the scancode / keycode / modifier triple
// - `record`: `EventKind`, `EventRecord`, and the host-visible shape
// - `translator`: the polling drain over the native queue
//
//=========================================================================

//=== Submodules ==========================================================

mod keysym;
mod record;
mod translator;

//=== Public API ==========================================================

pub use keysym::KeySym;
pub use record::{EventKind, EventRecord, KeyEvent};
pub use translator::{translate, EventTranslator, PollIter};
