//=========================================================================
// Managed Objects
//=========================================================================
//
// Host-visible objects wrapping exactly one native handle each.
//
// Ownership chain (enforced by borrows):
// ```text
//  Subsystem ─► Window<N> ◄─borrows─ Renderer<'w, N> ◄─borrows─ Texture<'r, N>
// ```
//
// A parent cannot be destroyed while a child borrows it. Every object
// releases its handle exactly once: on `destroy(self)` or on drop.
//
//=========================================================================

//=== Submodules ==========================================================

mod rect;
mod renderer;
mod texture;
mod window;

//=== Public API ==========================================================

pub use rect::Rect;
pub use renderer::Renderer;
pub use texture::Texture;
pub use window::Window;
