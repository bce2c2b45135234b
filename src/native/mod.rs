//=========================================================================
// Native Library Seam
//=========================================================================
//
// The contract between the bridge and the imperative multimedia library
// it wraps.
//
// `NativeLibrary` mirrors the library's C conventions on purpose:
// constructors return a nullable handle, mutating calls return an integer
// status (zero = success), the last failure is read back through
// `get_error`, and `poll_event` writes into a caller-owned record. The
// ownership and translation layers in `core` are written against this
// trait only, so backends can be swapped without touching them.
//
// Backends:
// - `headless::HeadlessNative`: in-process simulation, no OS resources
// - `crate::platform::WinitNative`: OS windows and input via winit
//
// Threading: every method must be called from the thread that owns the
// library value. Implementations use interior mutability and are not
// `Sync`.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod consts;
pub mod headless;
pub mod raw;
pub(crate) mod soft;

//=== External Dependencies ===============================================

use std::num::NonZeroUsize;

//=== Internal Dependencies ===============================================

use crate::core::objects::Rect;
pub use raw::{RawEvent, RawKeysym};

//=== NativeHandle ========================================================

/// Opaque, non-null identifier of a native resource.
///
/// Valid only between the constructor call that produced it and the
/// matching destroy call. A null return from a constructor is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeHandle(NonZeroUsize);

impl NativeHandle {
    pub fn new(raw: usize) -> Option<Self> {
        NonZeroUsize::new(raw).map(Self)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl std::fmt::Display for NativeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0.get())
    }
}

/// Monotonic handle source. Handles are never reused within one library
/// instance, so a stale handle cannot alias a newer resource.
#[derive(Debug)]
pub(crate) struct HandleAllocator {
    next: NonZeroUsize,
}

impl HandleAllocator {
    pub(crate) fn new() -> Self {
        Self { next: NonZeroUsize::MIN }
    }

    pub(crate) fn allocate(&mut self) -> NativeHandle {
        let handle = NativeHandle(self.next);
        self.next = self.next.saturating_add(1);
        handle
    }
}

//=== TextureInfo =========================================================

/// Native-held texture attributes, filled by `query_texture`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextureInfo {
    pub format: u32,
    pub access: i32,
    pub w: i32,
    pub h: i32,
}

//=== NativeLibrary =======================================================

/// Imperative surface of the wrapped multimedia library.
///
/// Status-returning methods use zero for success and a negative value for
/// failure; on failure the message is available from [`get_error`].
///
/// [`get_error`]: NativeLibrary::get_error
pub trait NativeLibrary {
    //--- Subsystem --------------------------------------------------------

    /// Brings up the subsystems selected by `flags`.
    fn init(&self, flags: u32) -> i32;

    /// Releases all subsystem-wide state, including every live resource.
    fn quit(&self);

    /// Message describing the most recent failure.
    fn get_error(&self) -> String;

    /// Milliseconds since `init`.
    fn get_ticks(&self) -> u32;

    /// Non-blocking poll. Writes one pending event into `event` and
    /// returns `true`, or returns `false` without touching it.
    fn poll_event(&self, event: &mut RawEvent) -> bool;

    //--- Windows ----------------------------------------------------------

    fn create_window(&self, title: &str, x: i32, y: i32, w: i32, h: i32, flags: u32) -> Option<NativeHandle>;
    fn destroy_window(&self, window: NativeHandle);

    /// Numeric window id used in events; zero for an invalid handle.
    fn get_window_id(&self, window: NativeHandle) -> u32;

    //--- Renderers --------------------------------------------------------

    fn create_renderer(&self, window: NativeHandle, index: i32, flags: u32) -> Option<NativeHandle>;
    fn destroy_renderer(&self, renderer: NativeHandle);
    fn set_render_draw_color(&self, renderer: NativeHandle, r: u8, g: u8, b: u8, a: u8) -> i32;
    fn render_clear(&self, renderer: NativeHandle) -> i32;
    fn render_fill_rect(&self, renderer: NativeHandle, rect: Option<&Rect>) -> i32;
    fn render_draw_rect(&self, renderer: NativeHandle, rect: Option<&Rect>) -> i32;
    fn render_copy(&self, renderer: NativeHandle, texture: NativeHandle, src: Option<&Rect>, dst: Option<&Rect>) -> i32;
    fn render_present(&self, renderer: NativeHandle);
    fn render_read_pixels(&self, renderer: NativeHandle, pixels: &mut Vec<u32>) -> i32;
    fn get_renderer_output_size(&self, renderer: NativeHandle, w: &mut i32, h: &mut i32) -> i32;

    //--- Textures ---------------------------------------------------------

    fn create_texture(&self, renderer: NativeHandle, format: u32, access: i32, w: i32, h: i32) -> Option<NativeHandle>;
    fn destroy_texture(&self, texture: NativeHandle);
    fn query_texture(&self, texture: NativeHandle, info: &mut TextureInfo) -> i32;
    fn update_texture(&self, texture: NativeHandle, rect: Option<&Rect>, pixels: &[u32]) -> i32;
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_the_null_handle() {
        assert!(NativeHandle::new(0).is_none());
        assert_eq!(NativeHandle::new(9).map(NativeHandle::get), Some(9));
    }

    #[test]
    fn allocator_never_repeats() {
        let mut allocator = HandleAllocator::new();
        let a = allocator.allocate();
        let b = allocator.allocate();
        assert_ne!(a, b);
        assert_eq!(a.get(), 1);
    }

    #[test]
    fn handle_displays_as_hex() {
        let handle = NativeHandle::new(255).unwrap();
        assert_eq!(handle.to_string(), "0xff");
    }
}
