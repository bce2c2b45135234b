//=========================================================================
// Resource Handle
//=========================================================================
//
// Single owner for one native handle, with exactly-once release.
//
// Ownership rules:
// - A `ResourceHandle` is move-only (no `Clone`), so no two owners can
//   hold the same native handle.
// - `destroy(self)` consumes the owner. Destroying twice does not compile.
// - `Drop` releases a handle that was never explicitly destroyed.
// - Both paths go through `release()`, which `take()`s the handle, so the
//   native destroy call is issued at most once.
//
// Quit invalidation:
// The handle remembers the lifecycle epoch it was created in. After
// `Subsystem::quit()` the native layer has already released everything,
// so a stale handle refuses native reads (`Invalidated`) and skips the
// native destroy call on release.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::marker::PhantomData;
use std::rc::Rc;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::error::{BridgeError, BridgeResult};
use super::lifecycle::Context;
use crate::native::{NativeHandle, NativeLibrary};

//=== ResourceKind ========================================================

/// Names a native resource type and its matching destructor.
pub trait ResourceKind {
    /// Human-readable type name used in errors and logs.
    const LABEL: &'static str;

    fn release<N: NativeLibrary>(native: &N, handle: NativeHandle);
}

#[derive(Debug)]
pub enum WindowKind {}

#[derive(Debug)]
pub enum RendererKind {}

#[derive(Debug)]
pub enum TextureKind {}

impl ResourceKind for WindowKind {
    const LABEL: &'static str = "Window";

    fn release<N: NativeLibrary>(native: &N, handle: NativeHandle) {
        native.destroy_window(handle);
    }
}

impl ResourceKind for RendererKind {
    const LABEL: &'static str = "Renderer";

    fn release<N: NativeLibrary>(native: &N, handle: NativeHandle) {
        native.destroy_renderer(handle);
    }
}

impl ResourceKind for TextureKind {
    const LABEL: &'static str = "Texture";

    fn release<N: NativeLibrary>(native: &N, handle: NativeHandle) {
        native.destroy_texture(handle);
    }
}

//=== ResourceHandle ======================================================

/// Sole owner of one native handle of kind `K`.
pub struct ResourceHandle<N: NativeLibrary, K: ResourceKind> {
    handle: Option<NativeHandle>,
    epoch: u64,
    context: Rc<Context<N>>,
    _kind: PhantomData<K>,
}

impl<N: NativeLibrary, K: ResourceKind> ResourceHandle<N, K> {
    //--- Construction -----------------------------------------------------

    /// Runs a native constructor and takes ownership of its result.
    ///
    /// The subsystem must be Ready. A null result becomes
    /// [`BridgeError::ObjectInit`] with the native error string; nothing is
    /// left to release in that case.
    pub(crate) fn create(
        context: &Rc<Context<N>>,
        construct: impl FnOnce(&N) -> Option<NativeHandle>,
    ) -> BridgeResult<Self> {
        context.require_ready()?;

        match construct(context.native()) {
            Some(handle) => {
                debug!(target: "handle", "{} {} created", K::LABEL, handle);
                Ok(Self {
                    handle: Some(handle),
                    epoch: context.epoch(),
                    context: Rc::clone(context),
                    _kind: PhantomData,
                })
            }
            None => Err(BridgeError::ObjectInit {
                object: K::LABEL,
                message: context.native().get_error(),
            }),
        }
    }

    //--- Access -----------------------------------------------------------

    /// `true` while the native resource behind this handle still exists.
    pub fn is_live(&self) -> bool {
        self.handle.is_some() && self.context.is_ready() && self.context.epoch() == self.epoch
    }

    /// The native handle, if still live.
    pub fn raw(&self) -> BridgeResult<NativeHandle> {
        match self.handle {
            Some(handle) if self.is_live() => Ok(handle),
            _ => Err(BridgeError::Invalidated { object: K::LABEL }),
        }
    }

    /// Runs `call` against the native library with the live handle.
    pub(crate) fn with_native<R>(&self, call: impl FnOnce(&N, NativeHandle) -> R) -> BridgeResult<R> {
        let handle = self.raw()?;
        Ok(call(self.context.native(), handle))
    }

    /// Like [`with_native`](Self::with_native) for status-returning calls.
    pub(crate) fn status_call(
        &self,
        name: &'static str,
        call: impl FnOnce(&N, NativeHandle) -> i32,
    ) -> BridgeResult<()> {
        let code = self.with_native(call)?;
        if code == 0 {
            Ok(())
        } else {
            Err(BridgeError::Native {
                call: name,
                code,
                message: self.context.native().get_error(),
            })
        }
    }

    pub(crate) fn context(&self) -> &Rc<Context<N>> {
        &self.context
    }

    //--- Release ----------------------------------------------------------

    /// Releases the native resource now.
    pub fn destroy(mut self) {
        self.release();
    }

    fn release(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };

        if self.context.is_ready() && self.context.epoch() == self.epoch {
            K::release(self.context.native(), handle);
            debug!(target: "handle", "{} {} released", K::LABEL, handle);
        } else {
            warn!(
                target: "handle",
                "{} {} outlived subsystem quit; native layer already released it",
                K::LABEL,
                handle
            );
        }
    }
}

impl<N: NativeLibrary, K: ResourceKind> Drop for ResourceHandle<N, K> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<N: NativeLibrary, K: ResourceKind> std::fmt::Debug for ResourceHandle<N, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResourceHandle")
            .field("kind", &K::LABEL)
            .field("handle", &self.handle)
            .field("epoch", &self.epoch)
            .field("live", &self.is_live())
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
