//=========================================================================
// Texture
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{Rect, Renderer};
use crate::core::error::{BridgeError, BridgeResult};
use crate::core::handle::{ResourceHandle, TextureKind};
use crate::native::{consts, NativeHandle, NativeLibrary, TextureInfo};

//=== Texture =============================================================

/// Pixel storage owned through one native handle, borrowing the renderer
/// that created it.
#[derive(Debug)]
pub struct Texture<'r, N: NativeLibrary> {
    handle: ResourceHandle<N, TextureKind>,
    renderer: &'r Renderer<'r, N>,
}

impl<'r, N: NativeLibrary> Texture<'r, N> {
    /// Allocates a `w` x `h` texture of pixel `format` with `access` mode
    /// (`TEXTUREACCESS_STATIC`, `_STREAMING`, or `_TARGET`).
    pub fn create(renderer: &'r Renderer<'r, N>, format: u32, access: i32, w: i32, h: i32) -> BridgeResult<Self> {
        if !matches!(
            access,
            consts::TEXTUREACCESS_STATIC | consts::TEXTUREACCESS_STREAMING | consts::TEXTUREACCESS_TARGET
        ) {
            return Err(BridgeError::argument("access", format!("unknown access mode {}", access)));
        }
        if w <= 0 || h <= 0 {
            return Err(BridgeError::argument("size", format!("must be positive, got {}x{}", w, h)));
        }
        let renderer_handle = renderer.raw()?;

        let handle = ResourceHandle::create(renderer.handle().context(), |native| {
            native.create_texture(renderer_handle, format, access, w, h)
        })?;

        Ok(Self { handle, renderer })
    }

    //--- Accessors --------------------------------------------------------

    /// Format, access mode, and size as the native layer holds them.
    pub fn query(&self) -> BridgeResult<TextureInfo> {
        let mut info = TextureInfo::default();
        self.handle
            .status_call("query_texture", |native, h| native.query_texture(h, &mut info))?;
        Ok(info)
    }

    pub fn width(&self) -> BridgeResult<i32> {
        self.query().map(|info| info.w)
    }

    pub fn height(&self) -> BridgeResult<i32> {
        self.query().map(|info| info.h)
    }

    /// Replaces the pixels of `rect` (the whole texture for `None`) with
    /// row-major RGBA8888 words.
    pub fn update(&self, rect: Option<Rect>, pixels: &[u32]) -> BridgeResult<()> {
        self.handle
            .status_call("update_texture", |native, h| native.update_texture(h, rect.as_ref(), pixels))
    }

    pub fn renderer(&self) -> &'r Renderer<'r, N> {
        self.renderer
    }

    /// Native handle of the owning renderer, live or not.
    pub(crate) fn renderer_handle(&self) -> Option<NativeHandle> {
        self.renderer.raw().ok()
    }

    pub fn is_live(&self) -> bool {
        self.handle.is_live()
    }

    pub fn raw(&self) -> BridgeResult<NativeHandle> {
        self.handle.raw()
    }

    //--- Release ----------------------------------------------------------

    pub fn destroy(self) {
        self.handle.destroy();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
