//=========================================================================
// Renderer
//=========================================================================
//
// 2D drawing context bound to one window. Drawing goes to a back buffer;
// `present()` makes it the visible frame.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{Rect, Texture, Window};
use crate::core::config::RendererSpec;
use crate::core::error::{BridgeError, BridgeResult};
use crate::core::handle::{RendererKind, ResourceHandle};
use crate::native::{NativeHandle, NativeLibrary};

//=== Renderer ============================================================

/// Renderer owned through one native handle, borrowing its window.
#[derive(Debug)]
pub struct Renderer<'w, N: NativeLibrary> {
    handle: ResourceHandle<N, RendererKind>,
    window: &'w Window<N>,
    index: i32,
    flags: u32,
}

impl<'w, N: NativeLibrary> Renderer<'w, N> {
    //--- Construction -----------------------------------------------------

    /// Creates a renderer for `window`. `index` selects a driver, `-1`
    /// picks the first one supporting `flags`.
    pub fn create(window: &'w Window<N>, index: i32, flags: u32) -> BridgeResult<Self> {
        if index < -1 {
            return Err(BridgeError::argument("index", format!("must be >= -1, got {}", index)));
        }
        let window_handle = window.raw()?;

        let handle = ResourceHandle::create(window.context(), |native| {
            native.create_renderer(window_handle, index, flags)
        })?;

        Ok(Self {
            handle,
            window,
            index,
            flags,
        })
    }

    /// Creates a renderer with the subsystem's configured defaults.
    pub fn create_default(window: &'w Window<N>) -> BridgeResult<Self> {
        let RendererSpec { index, flags } = window.context().config().renderer;
        Self::create(window, index, flags)
    }

    //--- Drawing ----------------------------------------------------------

    pub fn set_draw_color(&self, r: u8, g: u8, b: u8, a: u8) -> BridgeResult<()> {
        self.handle
            .status_call("set_render_draw_color", |native, h| native.set_render_draw_color(h, r, g, b, a))
    }

    /// Fills the whole target with the draw color.
    pub fn clear(&self) -> BridgeResult<()> {
        self.handle.status_call("render_clear", |native, h| native.render_clear(h))
    }

    /// Fills `rect`, or the whole target for `None`.
    pub fn fill_rect(&self, rect: Option<Rect>) -> BridgeResult<()> {
        self.handle
            .status_call("render_fill_rect", |native, h| native.render_fill_rect(h, rect.as_ref()))
    }

    /// Outlines `rect`, or the whole target for `None`.
    pub fn draw_rect(&self, rect: Option<Rect>) -> BridgeResult<()> {
        self.handle
            .status_call("render_draw_rect", |native, h| native.render_draw_rect(h, rect.as_ref()))
    }

    /// Copies `src` of `texture` (all of it for `None`) onto `dst` of the
    /// target (all of it for `None`), scaling to fit.
    ///
    /// # Errors
    ///
    /// [`BridgeError::Argument`] if `texture` belongs to another renderer.
    pub fn copy(&self, texture: &Texture<'_, N>, src: Option<Rect>, dst: Option<Rect>) -> BridgeResult<()> {
        let own = self.raw()?;
        if texture.renderer_handle() != Some(own) {
            return Err(BridgeError::argument("texture", "was created by a different renderer"));
        }
        let texture_handle = texture.raw()?;

        self.handle.status_call("render_copy", |native, h| {
            native.render_copy(h, texture_handle, src.as_ref(), dst.as_ref())
        })
    }

    /// Makes the back buffer the presented frame.
    pub fn present(&self) -> BridgeResult<()> {
        self.handle.with_native(|native, h| native.render_present(h))
    }

    //--- Queries ----------------------------------------------------------

    /// Target size in pixels.
    pub fn output_size(&self) -> BridgeResult<(i32, i32)> {
        let (mut w, mut h) = (0, 0);
        self.handle
            .status_call("get_renderer_output_size", |native, handle| {
                native.get_renderer_output_size(handle, &mut w, &mut h)
            })?;
        Ok((w, h))
    }

    /// Pixels of the last presented frame, row-major RGBA8888.
    pub fn read_pixels(&self) -> BridgeResult<Vec<u32>> {
        let mut pixels = Vec::new();
        self.handle
            .status_call("render_read_pixels", |native, h| native.render_read_pixels(h, &mut pixels))?;
        Ok(pixels)
    }

    pub fn window(&self) -> &'w Window<N> {
        self.window
    }

    pub fn index(&self) -> i32 {
        self.index
    }

    pub fn flags(&self) -> u32 {
        self.flags
    }

    pub fn is_live(&self) -> bool {
        self.handle.is_live()
    }

    pub fn raw(&self) -> BridgeResult<NativeHandle> {
        self.handle.raw()
    }

    pub(crate) fn handle(&self) -> &ResourceHandle<N, RendererKind> {
        &self.handle
    }

    //--- Release ----------------------------------------------------------

    pub fn destroy(self) {
        self.handle.destroy();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::WindowSpec;
    use crate::core::lifecycle::Subsystem;
    use crate::native::consts;
    use crate::native::headless::HeadlessNative;

    const WHITE: u32 = 0xFFFF_FFFF;

    fn ready() -> Subsystem<HeadlessNative> {
        let subsystem = Subsystem::new(HeadlessNative::new());
        subsystem.init();
        subsystem
    }

    fn small_window(subsystem: &Subsystem<HeadlessNative>) -> Window<HeadlessNative> {
        Window::create(subsystem, &WindowSpec::new("r", 4, 3)).unwrap()
    }

    #[test]
    fn output_size_matches_window() {
        let subsystem = ready();
        let window = small_window(&subsystem);
        let renderer = Renderer::create_default(&window).unwrap();
        assert_eq!(renderer.output_size(), Ok((4, 3)));
        assert_eq!(renderer.index(), -1);
        assert_eq!(renderer.flags(), consts::RENDERER_ACCELERATED);
    }

    #[test]
    fn clear_and_present_paint_every_pixel() {
        let subsystem = ready();
        let window = small_window(&subsystem);
        let renderer = Renderer::create(&window, -1, 0).unwrap();

        renderer.set_draw_color(255, 255, 255, 255).unwrap();
        renderer.clear().unwrap();
        renderer.present().unwrap();

        let pixels = renderer.read_pixels().unwrap();
        assert_eq!(pixels.len(), 12);
        assert!(pixels.iter().all(|&p| p == WHITE));
    }

    #[test]
    fn fill_rect_paints_only_the_rect() {
        let subsystem = ready();
        let window = small_window(&subsystem);
        let renderer = Renderer::create(&window, -1, 0).unwrap();

        renderer.set_draw_color(255, 255, 255, 255).unwrap();
        renderer.fill_rect(Some(Rect::new(1, 1, 2, 1))).unwrap();
        renderer.present().unwrap();

        let pixels = renderer.read_pixels().unwrap();
        let painted: Vec<usize> = (0..pixels.len()).filter(|&i| pixels[i] == WHITE).collect();
        assert_eq!(painted, vec![5, 6]);
    }

    #[test]
    fn second_renderer_for_window_fails() {
        let subsystem = ready();
        let window = small_window(&subsystem);
        let _first = Renderer::create(&window, -1, 0).unwrap();

        let err = Renderer::create(&window, -1, 0).unwrap_err();

        assert!(matches!(err, BridgeError::ObjectInit { object: "Renderer", .. }));
    }

    #[test]
    fn index_below_minus_one_is_argument_error() {
        let subsystem = ready();
        let window = small_window(&subsystem);
        let err = Renderer::create(&window, -2, 0).unwrap_err();
        assert!(matches!(err, BridgeError::Argument { name: "index", .. }));
        assert_eq!(subsystem.native().stats().renderers_created, 0);
    }

    #[test]
    fn destroy_releases_before_window() {
        let subsystem = ready();
        let window = small_window(&subsystem);
        let renderer = Renderer::create(&window, -1, 0).unwrap();

        renderer.destroy();
        window.destroy();

        let stats = subsystem.native().stats();
        assert_eq!(stats.renderers_destroyed, 1);
        assert_eq!(stats.windows_destroyed, 1);
        assert_eq!(stats.invalid_releases, 0);
    }

    #[test]
    fn drawing_after_quit_is_invalidated() {
        let subsystem = ready();
        let window = small_window(&subsystem);
        let renderer = Renderer::create(&window, -1, 0).unwrap();
        subsystem.quit();
        assert_eq!(renderer.clear(), Err(BridgeError::Invalidated { object: "Renderer" }));
    }
}
