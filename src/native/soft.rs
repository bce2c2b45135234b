//=========================================================================
// Software Render Targets
//=========================================================================
//
// CPU-side renderer and texture storage shared by the backends.
//
// Pixels are packed RGBA8888 words (`0xRRGGBBAA`) whatever the declared
// texture format; the format is kept for `query_texture`. Copies are
// nearest-neighbour with no blending.
//
// A renderer keeps a back buffer (draw target) and a front buffer (last
// presented frame). Destroying a renderer releases its textures, as the
// native library does.
//
// Errors are returned as the native library's messages so backends can
// store them verbatim for `get_error`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use super::{consts, NativeHandle, TextureInfo};
use crate::core::objects::Rect;

/// Largest texture edge accepted by `create_texture`.
pub(crate) const MAX_TEXTURE_SIZE: i32 = 16384;

//=== Surface =============================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Surface {
    w: i32,
    h: i32,
    pixels: Vec<u32>,
}

impl Surface {
    pub(crate) fn new(w: i32, h: i32) -> Self {
        let w = w.max(0);
        let h = h.max(0);
        Self {
            w,
            h,
            pixels: vec![0; (w as usize) * (h as usize)],
        }
    }

    pub(crate) fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.w, self.h)
    }

    pub(crate) fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    fn index(&self, x: i32, y: i32) -> usize {
        (y as usize) * (self.w as usize) + (x as usize)
    }

    /// Fills `rect` clipped to the surface; `None` fills everything.
    pub(crate) fn fill(&mut self, rect: Option<&Rect>, color: u32) {
        let area = match rect {
            Some(rect) => match rect.intersection(&self.bounds()) {
                Some(area) => area,
                None => return,
            },
            None => self.bounds(),
        };

        for y in area.y..area.bottom() {
            let start = self.index(area.x, y);
            let end = start + area.w as usize;
            self.pixels[start..end].fill(color);
        }
    }

    /// One-pixel outline of `rect`; `None` outlines the whole surface.
    pub(crate) fn outline(&mut self, rect: Option<&Rect>, color: u32) {
        let rect = rect.copied().unwrap_or_else(|| self.bounds());
        if rect.is_empty() {
            return;
        }

        self.fill(Some(&Rect::new(rect.x, rect.y, rect.w, 1)), color);
        self.fill(Some(&Rect::new(rect.x, rect.bottom() - 1, rect.w, 1)), color);
        self.fill(Some(&Rect::new(rect.x, rect.y, 1, rect.h)), color);
        self.fill(Some(&Rect::new(rect.right() - 1, rect.y, 1, rect.h)), color);
    }

    /// Scaled copy of `src_rect` of `source` onto `dst_rect` of `self`.
    pub(crate) fn blit(&mut self, source: &Surface, src_rect: Option<&Rect>, dst_rect: Option<&Rect>) {
        let src = match src_rect {
            Some(rect) => match rect.intersection(&source.bounds()) {
                Some(src) => src,
                None => return,
            },
            None => source.bounds(),
        };
        let dst = dst_rect.copied().unwrap_or_else(|| self.bounds());
        let Some(visible) = dst.intersection(&self.bounds()) else {
            return;
        };

        for y in visible.y..visible.bottom() {
            let sy = src.y + ((i64::from(y - dst.y) * i64::from(src.h)) / i64::from(dst.h)) as i32;
            for x in visible.x..visible.right() {
                let sx = src.x + ((i64::from(x - dst.x) * i64::from(src.w)) / i64::from(dst.w)) as i32;
                let value = source.pixels[source.index(sx, sy)];
                let at = self.index(x, y);
                self.pixels[at] = value;
            }
        }
    }

    /// Overwrites `rect` (or the whole surface) with row-major `pixels`.
    pub(crate) fn write(&mut self, rect: Option<&Rect>, pixels: &[u32]) -> Result<(), String> {
        let area = rect.copied().unwrap_or_else(|| self.bounds());
        if area.is_empty() || area.intersection(&self.bounds()) != Some(area) {
            return Err("Parameter 'rect' is invalid".to_string());
        }
        if pixels.len() != (area.w as usize) * (area.h as usize) {
            return Err("Parameter 'pixels' is invalid".to_string());
        }

        for (row, chunk) in pixels.chunks_exact(area.w as usize).enumerate() {
            let start = self.index(area.x, area.y + row as i32);
            self.pixels[start..start + chunk.len()].copy_from_slice(chunk);
        }
        Ok(())
    }
}

pub(crate) fn pack_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    u32::from_be_bytes([r, g, b, a])
}

//=== Renderer / Texture Records ==========================================

#[derive(Debug)]
pub(crate) struct SoftRenderer {
    window: NativeHandle,
    draw_color: u32,
    back: Surface,
    front: Surface,
    presents: u64,
}

#[derive(Debug)]
pub(crate) struct SoftTexture {
    renderer: NativeHandle,
    info: TextureInfo,
    surface: Surface,
}

//=== SoftDevice ==========================================================

/// Renderer and texture tables for one native library instance.
#[derive(Debug, Default)]
pub(crate) struct SoftDevice {
    renderers: HashMap<NativeHandle, SoftRenderer>,
    textures: HashMap<NativeHandle, SoftTexture>,
}

impl SoftDevice {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    //--- Renderers --------------------------------------------------------

    pub(crate) fn renderer_for_window(&self, window: NativeHandle) -> Option<NativeHandle> {
        self.renderers
            .iter()
            .find(|(_, renderer)| renderer.window == window)
            .map(|(handle, _)| *handle)
    }

    /// Tears down the renderer attached to `window`, if any. Returns the
    /// number of textures released with it.
    pub(crate) fn release_window_target(&mut self, window: NativeHandle) -> Option<usize> {
        let renderer = self.renderer_for_window(window)?;
        self.destroy_renderer(renderer).ok()
    }

    pub(crate) fn create_renderer(&mut self, handle: NativeHandle, window: NativeHandle, w: i32, h: i32) -> Result<(), String> {
        if self.renderer_for_window(window).is_some() {
            return Err("Renderer already associated with window".to_string());
        }

        self.renderers.insert(
            handle,
            SoftRenderer {
                window,
                draw_color: pack_rgba(0, 0, 0, 255),
                back: Surface::new(w, h),
                front: Surface::new(w, h),
                presents: 0,
            },
        );
        Ok(())
    }

    /// Removes the renderer and every texture created with it. Returns the
    /// number of textures released alongside.
    pub(crate) fn destroy_renderer(&mut self, handle: NativeHandle) -> Result<usize, String> {
        if self.renderers.remove(&handle).is_none() {
            return Err("Invalid renderer".to_string());
        }

        let before = self.textures.len();
        self.textures.retain(|_, texture| texture.renderer != handle);
        Ok(before - self.textures.len())
    }

    fn renderer_mut(&mut self, handle: NativeHandle) -> Result<&mut SoftRenderer, String> {
        self.renderers
            .get_mut(&handle)
            .ok_or_else(|| "Invalid renderer".to_string())
    }

    fn renderer(&self, handle: NativeHandle) -> Result<&SoftRenderer, String> {
        self.renderers
            .get(&handle)
            .ok_or_else(|| "Invalid renderer".to_string())
    }

    pub(crate) fn set_draw_color(&mut self, handle: NativeHandle, color: u32) -> Result<(), String> {
        self.renderer_mut(handle)?.draw_color = color;
        Ok(())
    }

    pub(crate) fn clear(&mut self, handle: NativeHandle) -> Result<(), String> {
        let renderer = self.renderer_mut(handle)?;
        let color = renderer.draw_color;
        renderer.back.fill(None, color);
        Ok(())
    }

    pub(crate) fn fill_rect(&mut self, handle: NativeHandle, rect: Option<&Rect>) -> Result<(), String> {
        let renderer = self.renderer_mut(handle)?;
        let color = renderer.draw_color;
        renderer.back.fill(rect, color);
        Ok(())
    }

    pub(crate) fn draw_rect(&mut self, handle: NativeHandle, rect: Option<&Rect>) -> Result<(), String> {
        let renderer = self.renderer_mut(handle)?;
        let color = renderer.draw_color;
        renderer.back.outline(rect, color);
        Ok(())
    }

    pub(crate) fn copy(&mut self, handle: NativeHandle, texture: NativeHandle, src: Option<&Rect>, dst: Option<&Rect>) -> Result<(), String> {
        let source = self
            .textures
            .get(&texture)
            .ok_or_else(|| "Invalid texture".to_string())?;
        if source.renderer != handle {
            return Err("Texture was not created with this renderer".to_string());
        }
        let renderer = self
            .renderers
            .get_mut(&handle)
            .ok_or_else(|| "Invalid renderer".to_string())?;

        renderer.back.blit(&source.surface, src, dst);
        Ok(())
    }

    pub(crate) fn present(&mut self, handle: NativeHandle) -> Result<u64, String> {
        let renderer = self.renderer_mut(handle)?;
        renderer.front.clone_from(&renderer.back);
        renderer.presents += 1;
        Ok(renderer.presents)
    }

    /// Last presented frame.
    pub(crate) fn read_pixels(&self, handle: NativeHandle) -> Result<&[u32], String> {
        Ok(self.renderer(handle)?.front.pixels())
    }

    pub(crate) fn output_size(&self, handle: NativeHandle) -> Result<(i32, i32), String> {
        let bounds = self.renderer(handle)?.back.bounds();
        Ok((bounds.w, bounds.h))
    }

    /// Reallocates the targets of the renderer attached to `window`.
    pub(crate) fn resize_window_target(&mut self, window: NativeHandle, w: i32, h: i32) {
        if let Some(handle) = self.renderer_for_window(window) {
            if let Some(renderer) = self.renderers.get_mut(&handle) {
                renderer.back = Surface::new(w, h);
                renderer.front = Surface::new(w, h);
            }
        }
    }

    //--- Textures ---------------------------------------------------------

    pub(crate) fn create_texture(&mut self, handle: NativeHandle, renderer: NativeHandle, format: u32, access: i32, w: i32, h: i32) -> Result<(), String> {
        self.renderer(renderer)?;
        if !consts::SUPPORTED_PIXEL_FORMATS.contains(&format) {
            return Err("Unknown pixel format".to_string());
        }
        if w <= 0 || h <= 0 {
            return Err("Texture dimensions can't be 0".to_string());
        }
        if w > MAX_TEXTURE_SIZE || h > MAX_TEXTURE_SIZE {
            return Err(format!(
                "Texture dimensions are limited to {MAX_TEXTURE_SIZE}x{MAX_TEXTURE_SIZE}"
            ));
        }

        self.textures.insert(
            handle,
            SoftTexture {
                renderer,
                info: TextureInfo { format, access, w, h },
                surface: Surface::new(w, h),
            },
        );
        Ok(())
    }

    pub(crate) fn destroy_texture(&mut self, handle: NativeHandle) -> Result<(), String> {
        self.textures
            .remove(&handle)
            .map(|_| ())
            .ok_or_else(|| "Invalid texture".to_string())
    }

    pub(crate) fn query_texture(&self, handle: NativeHandle) -> Result<TextureInfo, String> {
        self.textures
            .get(&handle)
            .map(|texture| texture.info)
            .ok_or_else(|| "Invalid texture".to_string())
    }

    pub(crate) fn update_texture(&mut self, handle: NativeHandle, rect: Option<&Rect>, pixels: &[u32]) -> Result<(), String> {
        let texture = self
            .textures
            .get_mut(&handle)
            .ok_or_else(|| "Invalid texture".to_string())?;
        if texture.info.access == consts::TEXTUREACCESS_TARGET {
            return Err("Texture is a render target and can't be updated".to_string());
        }
        texture.surface.write(rect, pixels)
    }

    //--- Bulk -------------------------------------------------------------

    pub(crate) fn live_count(&self) -> usize {
        self.renderers.len() + self.textures.len()
    }

    /// Drops every renderer and texture. Returns how many were released.
    pub(crate) fn release_all(&mut self) -> usize {
        let released = self.live_count();
        self.renderers.clear();
        self.textures.clear();
        released
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::HandleAllocator;

    const RED: u32 = 0xFF00_00FF;
    const BLUE: u32 = 0x0000_FFFF;

    fn device_with_renderer(w: i32, h: i32) -> (SoftDevice, HandleAllocator, NativeHandle) {
        let mut handles = HandleAllocator::new();
        let window = handles.allocate();
        let renderer = handles.allocate();
        let mut device = SoftDevice::new();
        device.create_renderer(renderer, window, w, h).unwrap();
        (device, handles, renderer)
    }

    #[test]
    fn pack_rgba_is_big_endian_word() {
        assert_eq!(pack_rgba(0xFF, 0, 0, 0xFF), RED);
        assert_eq!(pack_rgba(1, 2, 3, 4), 0x0102_0304);
    }

    #[test]
    fn fill_is_clipped_to_surface() {
        let mut surface = Surface::new(4, 4);
        surface.fill(Some(&Rect::new(2, 2, 10, 10)), RED);
        let painted = surface.pixels().iter().filter(|&&p| p == RED).count();
        assert_eq!(painted, 4);
    }

    #[test]
    fn outline_leaves_interior_untouched() {
        let mut surface = Surface::new(4, 4);
        surface.outline(None, RED);
        assert_eq!(surface.pixels()[5], 0);
        assert_eq!(surface.pixels()[0], RED);
        assert_eq!(surface.pixels()[15], RED);
    }

    #[test]
    fn blit_scales_nearest_neighbour() {
        let mut source = Surface::new(1, 1);
        source.fill(None, BLUE);
        let mut target = Surface::new(4, 4);
        target.blit(&source, None, Some(&Rect::new(0, 0, 2, 2)));
        assert_eq!(target.pixels()[0], BLUE);
        assert_eq!(target.pixels()[5], BLUE);
        assert_eq!(target.pixels()[2], 0);
    }

    #[test]
    fn write_rejects_wrong_pixel_count() {
        let mut surface = Surface::new(2, 2);
        assert!(surface.write(None, &[0; 3]).is_err());
        assert!(surface.write(None, &[RED; 4]).is_ok());
        assert!(surface.pixels().iter().all(|&p| p == RED));
    }

    #[test]
    fn one_renderer_per_window() {
        let (mut device, mut handles, first) = device_with_renderer(2, 2);
        let window = device.renderers[&first].window;
        let err = device.create_renderer(handles.allocate(), window, 2, 2).unwrap_err();
        assert!(err.contains("already associated"));
    }

    #[test]
    fn clear_then_present_exposes_frame() {
        let (mut device, _, renderer) = device_with_renderer(2, 2);
        device.set_draw_color(renderer, RED).unwrap();
        device.clear(renderer).unwrap();
        assert!(device.read_pixels(renderer).unwrap().iter().all(|&p| p == 0));

        assert_eq!(device.present(renderer).unwrap(), 1);
        assert!(device.read_pixels(renderer).unwrap().iter().all(|&p| p == RED));
    }

    #[test]
    fn destroying_renderer_releases_its_textures() {
        let (mut device, mut handles, renderer) = device_with_renderer(2, 2);
        let texture = handles.allocate();
        device
            .create_texture(texture, renderer, consts::PIXELFORMAT_RGBA8888, consts::TEXTUREACCESS_STATIC, 8, 8)
            .unwrap();

        assert_eq!(device.destroy_renderer(renderer), Ok(1));
        assert!(device.query_texture(texture).is_err());
    }

    #[test]
    fn window_release_takes_renderer_and_textures() {
        let mut handles = HandleAllocator::new();
        let window = handles.allocate();
        let bare_window = handles.allocate();
        let renderer = handles.allocate();
        let mut device = SoftDevice::new();
        device.create_renderer(renderer, window, 4, 4).unwrap();
        for _ in 0..2 {
            let texture = handles.allocate();
            device
                .create_texture(texture, renderer, consts::PIXELFORMAT_RGBA8888, consts::TEXTUREACCESS_STATIC, 1, 1)
                .unwrap();
        }

        assert_eq!(device.release_window_target(bare_window), None);
        assert_eq!(device.release_window_target(window), Some(2));
        assert_eq!(device.renderer_for_window(window), None);
        assert_eq!(device.release_window_target(window), None);
    }

    #[test]
    fn texture_rejects_unknown_format_and_oversize() {
        let (mut device, mut handles, renderer) = device_with_renderer(2, 2);
        assert_eq!(
            device.create_texture(handles.allocate(), renderer, 0xDEAD, 0, 4, 4),
            Err("Unknown pixel format".to_string())
        );
        assert!(device
            .create_texture(handles.allocate(), renderer, consts::PIXELFORMAT_RGBA8888, 0, MAX_TEXTURE_SIZE + 1, 4)
            .is_err());
    }

    #[test]
    fn copy_requires_matching_renderer() {
        let (mut device, mut handles, renderer) = device_with_renderer(2, 2);
        let other_window = handles.allocate();
        let other = handles.allocate();
        device.create_renderer(other, other_window, 2, 2).unwrap();
        let texture = handles.allocate();
        device
            .create_texture(texture, other, consts::PIXELFORMAT_RGBA8888, consts::TEXTUREACCESS_STATIC, 1, 1)
            .unwrap();

        assert!(device.copy(renderer, texture, None, None).is_err());
        assert!(device.copy(other, texture, None, None).is_ok());
    }

    #[test]
    fn target_textures_cannot_be_updated() {
        let (mut device, mut handles, renderer) = device_with_renderer(2, 2);
        let texture = handles.allocate();
        device
            .create_texture(texture, renderer, consts::PIXELFORMAT_RGBA8888, consts::TEXTUREACCESS_TARGET, 1, 1)
            .unwrap();
        assert!(device.update_texture(texture, None, &[RED]).is_err());
    }
}
