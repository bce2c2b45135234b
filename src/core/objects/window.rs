//=========================================================================
// Window
//=========================================================================

//=== External Dependencies ===============================================

use std::rc::Rc;

//=== Internal Dependencies ===============================================

use crate::core::config::WindowSpec;
use crate::core::error::{BridgeError, BridgeResult};
use crate::core::handle::{ResourceHandle, WindowKind};
use crate::core::lifecycle::{Context, Subsystem};
use crate::native::{NativeHandle, NativeLibrary};

//=== Window ==============================================================

/// An OS window owned through one native handle.
///
/// Created with [`Window::create`]; released by [`Window::destroy`] or when
/// dropped. A [`Renderer`](super::Renderer) borrows its window, so the
/// window cannot be destroyed while one exists.
#[derive(Debug)]
pub struct Window<N: NativeLibrary> {
    handle: ResourceHandle<N, WindowKind>,
    spec: WindowSpec,
}

impl<N: NativeLibrary> Window<N> {
    /// Opens a window with `spec`'s title, position, size, and flags.
    ///
    /// # Errors
    ///
    /// - [`BridgeError::Argument`] for a non-positive size or a title with
    ///   an interior NUL byte (checked before any native call)
    /// - [`BridgeError::NotInitialized`] if the subsystem is not Ready
    /// - [`BridgeError::ObjectInit`] if the native constructor fails
    pub fn create(subsystem: &Subsystem<N>, spec: &WindowSpec) -> BridgeResult<Self> {
        Self::validate(spec)?;

        let handle = ResourceHandle::create(subsystem.context(), |native| {
            native.create_window(&spec.title, spec.x, spec.y, spec.w, spec.h, spec.flags)
        })?;

        Ok(Self {
            handle,
            spec: spec.clone(),
        })
    }

    /// Opens a window with the subsystem's configured defaults.
    pub fn create_default(subsystem: &Subsystem<N>) -> BridgeResult<Self> {
        let spec = subsystem.config().window.clone();
        Self::create(subsystem, &spec)
    }

    fn validate(spec: &WindowSpec) -> BridgeResult<()> {
        if spec.w <= 0 {
            return Err(BridgeError::argument("w", format!("must be positive, got {}", spec.w)));
        }
        if spec.h <= 0 {
            return Err(BridgeError::argument("h", format!("must be positive, got {}", spec.h)));
        }
        if spec.title.contains('\0') {
            return Err(BridgeError::argument("title", "contains an interior NUL byte"));
        }
        Ok(())
    }

    //--- Accessors --------------------------------------------------------

    /// Numeric id carried by this window's events (`windowID`).
    pub fn id(&self) -> BridgeResult<u32> {
        self.handle.with_native(|native, handle| native.get_window_id(handle))
    }

    pub fn title(&self) -> &str {
        &self.spec.title
    }

    /// Requested size `(w, h)`.
    pub fn size(&self) -> (i32, i32) {
        (self.spec.w, self.spec.h)
    }

    pub fn spec(&self) -> &WindowSpec {
        &self.spec
    }

    pub fn is_live(&self) -> bool {
        self.handle.is_live()
    }

    pub fn raw(&self) -> BridgeResult<NativeHandle> {
        self.handle.raw()
    }

    pub(crate) fn context(&self) -> &Rc<Context<N>> {
        self.handle.context()
    }

    //--- Release ----------------------------------------------------------

    pub fn destroy(self) {
        self.handle.destroy();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
