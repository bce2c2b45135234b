//=========================================================================
// Subsystem Lifecycle
//=========================================================================
//
// The init/quit gate in front of every native call.
//
// Architecture:
// ```text
//  Subsystem ──owns──> Rc<Context<N>> <──shared── ResourceHandle (each)
//                           │                     EventTranslator
//                           ├─ native: N
//                           ├─ state: Uninitialized | Ready
//                           └─ epoch: bumped by every quit()
// ```
//
// Transition rules:
// - `init()` from Uninitialized calls the native bootstrap; a zero status
//   moves to Ready, any other status is returned verbatim and the state
//   stays Uninitialized.
// - `init()` while Ready is a no-op returning success. The native
//   bootstrap is not called a second time.
// - `quit()` from Ready calls native quit, advances the epoch, and moves
//   to Uninitialized. `quit()` while Uninitialized does nothing.
// - Re-init after quit is allowed and runs the native bootstrap again.
//
// `quit()` does not destroy live objects. Their native resources are gone
// after it; the epoch lets their handles notice and skip the second
// release.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::Cell;
use std::rc::Rc;

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::config::BridgeConfig;
use super::error::{BridgeError, BridgeResult};
use super::event::EventTranslator;
use crate::native::NativeLibrary;

//=== SubsystemState ======================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubsystemState {
    Uninitialized,
    Ready,
}

//=== StatusCode ==========================================================

/// Native bootstrap status: zero is success, anything else is the native
/// failure code, sign preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCode(pub i32);

impl StatusCode {
    pub const SUCCESS: StatusCode = StatusCode(0);

    pub fn is_success(self) -> bool {
        self.0 == 0
    }

    pub fn raw(self) -> i32 {
        self.0
    }
}

impl From<StatusCode> for i32 {
    fn from(status: StatusCode) -> Self {
        status.0
    }
}

//=== Context =============================================================

/// Lifecycle state shared by the subsystem and everything created from it.
pub(crate) struct Context<N: NativeLibrary> {
    native: N,
    config: BridgeConfig,
    state: Cell<SubsystemState>,
    epoch: Cell<u64>,
}

impl<N: NativeLibrary> Context<N> {
    pub(crate) fn native(&self) -> &N {
        &self.native
    }

    pub(crate) fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub(crate) fn state(&self) -> SubsystemState {
        self.state.get()
    }

    pub(crate) fn epoch(&self) -> u64 {
        self.epoch.get()
    }

    pub(crate) fn is_ready(&self) -> bool {
        self.state.get() == SubsystemState::Ready
    }

    /// Gate for native calls that need an initialized subsystem.
    pub(crate) fn require_ready(&self) -> BridgeResult<()> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(BridgeError::NotInitialized)
        }
    }

    fn init(&self) -> StatusCode {
        if self.is_ready() {
            debug!(target: "lifecycle", "init while ready, nothing to do");
            return StatusCode::SUCCESS;
        }

        let status = StatusCode(self.native.init(self.config.init_flags));
        if status.is_success() {
            self.state.set(SubsystemState::Ready);
            info!(
                target: "lifecycle",
                "Subsystem ready (flags {:#x}, epoch {})",
                self.config.init_flags,
                self.epoch.get()
            );
        } else {
            warn!(
                target: "lifecycle",
                "Subsystem init failed with status {}: {}",
                status.raw(),
                self.native.get_error()
            );
        }
        status
    }

    fn quit(&self) {
        if !self.is_ready() {
            debug!(target: "lifecycle", "quit while uninitialized, nothing to do");
            return;
        }

        self.native.quit();
        self.epoch.set(self.epoch.get() + 1);
        self.state.set(SubsystemState::Uninitialized);
        info!(target: "lifecycle", "Subsystem quit (now epoch {})", self.epoch.get());
    }
}

impl<N: NativeLibrary> Drop for Context<N> {
    fn drop(&mut self) {
        if self.is_ready() {
            debug!(target: "lifecycle", "last owner dropped while ready, quitting");
            self.quit();
        }
    }
}

//=== Subsystem ===========================================================

/// Root object owning the native library and its init/quit state.
///
/// Objects and translators created from a subsystem share its context, so
/// they keep the native library alive. None of them are `Send`; every call
/// stays on the thread that created the subsystem.
///
/// # Examples
///
/// ```
/// use media_bridge::prelude::*;
///
/// let subsystem = Subsystem::new(HeadlessNative::new());
/// assert!(subsystem.init().is_success());
///
/// let window = Window::create(&subsystem, &WindowSpec::new("demo", 640, 480))?;
/// window.destroy();
///
/// subsystem.quit();
/// # Ok::<(), BridgeError>(())
/// ```
pub struct Subsystem<N: NativeLibrary> {
    context: Rc<Context<N>>,
}

impl<N: NativeLibrary> Subsystem<N> {
    //--- Construction -----------------------------------------------------

    /// Wraps `native` with default configuration. Does not call into it.
    pub fn new(native: N) -> Self {
        Self::with_config(native, BridgeConfig::default())
    }

    /// Wraps `native` with `config`. A zero drain limit is raised to one.
    pub fn with_config(native: N, mut config: BridgeConfig) -> Self {
        if config.max_events_per_drain == 0 {
            warn!(target: "lifecycle", "max_events_per_drain of 0 raised to 1");
            config.max_events_per_drain = 1;
        }
        Self {
            context: Rc::new(Context {
                native,
                config,
                state: Cell::new(SubsystemState::Uninitialized),
                epoch: Cell::new(0),
            }),
        }
    }

    //--- Transitions ------------------------------------------------------

    /// Runs the native bootstrap. See the module notes for re-init rules.
    pub fn init(&self) -> StatusCode {
        self.context.init()
    }

    /// [`init`](Self::init) with the failure converted to [`BridgeError::Init`].
    pub fn init_checked(&self) -> BridgeResult<()> {
        let status = self.init();
        if status.is_success() {
            Ok(())
        } else {
            Err(BridgeError::Init {
                code: status.raw(),
                message: self.context.native().get_error(),
            })
        }
    }

    /// Releases all subsystem-wide native state. Safe to repeat.
    pub fn quit(&self) {
        self.context.quit();
    }

    //--- Queries ----------------------------------------------------------

    pub fn state(&self) -> SubsystemState {
        self.context.state()
    }

    pub fn is_ready(&self) -> bool {
        self.context.is_ready()
    }

    /// Number of completed `quit()` transitions.
    pub fn epoch(&self) -> u64 {
        self.context.epoch()
    }

    pub fn config(&self) -> &BridgeConfig {
        self.context.config()
    }

    /// The wrapped library, for backend-specific calls.
    pub fn native(&self) -> &N {
        self.context.native()
    }

    /// Native millisecond counter; zero while uninitialized.
    pub fn ticks(&self) -> u32 {
        if self.is_ready() {
            self.context.native().get_ticks()
        } else {
            0
        }
    }

    /// A translator polling this subsystem's event queue.
    pub fn event_translator(&self) -> EventTranslator<N> {
        EventTranslator::new(Rc::clone(&self.context))
    }

    pub(crate) fn context(&self) -> &Rc<Context<N>> {
        &self.context
    }
}

impl<N: NativeLibrary> std::fmt::Debug for Subsystem<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subsystem")
            .field("state", &self.state())
            .field("epoch", &self.epoch())
            .finish_non_exhaustive()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::headless::HeadlessNative;

    #[test]
    fn starts_uninitialized_without_native_calls() {
        let subsystem = Subsystem::new(HeadlessNative::new());
        assert_eq!(subsystem.state(), SubsystemState::Uninitialized);
        assert_eq!(subsystem.native().stats().init_calls, 0);
    }

    #[test]
    fn init_moves_to_ready() {
        let subsystem = Subsystem::new(HeadlessNative::new());
        assert_eq!(subsystem.init(), StatusCode::SUCCESS);
        assert!(subsystem.is_ready());
        assert!(subsystem.native().is_initialized());
    }

    #[test]
    fn init_while_ready_is_noop_success() {
        let subsystem = Subsystem::new(HeadlessNative::new());
        subsystem.init();
        assert!(subsystem.init().is_success());
        assert_eq!(subsystem.native().stats().init_calls, 1);
    }

    #[test]
    fn failed_init_preserves_native_code() {
        let native = HeadlessNative::new().with_init_failure(-2, "No available video device");
        let subsystem = Subsystem::new(native);

        let status = subsystem.init();

        assert_eq!(status.raw(), -2);
        assert_eq!(i32::from(status), -2);
        assert_eq!(subsystem.state(), SubsystemState::Uninitialized);
    }

    #[test]
    fn init_checked_carries_native_message() {
        let native = HeadlessNative::new().with_init_failure(1, "display busy");
        let subsystem = Subsystem::new(native);

        let err = subsystem.init_checked().unwrap_err();

        assert_eq!(
            err,
            BridgeError::Init {
                code: 1,
                message: "display busy".into()
            }
        );
        assert!(err.is_init_error());
    }

    #[test]
    fn quit_twice_is_harmless() {
        let subsystem = Subsystem::new(HeadlessNative::new());
        subsystem.init();
        subsystem.quit();
        subsystem.quit();
        assert_eq!(subsystem.state(), SubsystemState::Uninitialized);
        assert_eq!(subsystem.native().stats().quit_calls, 1);
        assert_eq!(subsystem.epoch(), 1);
    }

    #[test]
    fn quit_without_init_is_noop() {
        let subsystem = Subsystem::new(HeadlessNative::new());
        subsystem.quit();
        assert_eq!(subsystem.native().stats().quit_calls, 0);
        assert_eq!(subsystem.epoch(), 0);
    }

    #[test]
    fn reinit_after_quit_runs_bootstrap_again() {
        let subsystem = Subsystem::new(HeadlessNative::new());
        subsystem.init();
        subsystem.quit();
        assert!(subsystem.init().is_success());
        assert!(subsystem.is_ready());
        assert_eq!(subsystem.native().stats().init_calls, 2);
    }

    #[test]
    fn ticks_are_zero_while_uninitialized() {
        let subsystem = Subsystem::new(HeadlessNative::new());
        assert_eq!(subsystem.ticks(), 0);
    }

    #[test]
    fn config_flags_reach_native_init() {
        use crate::native::consts;

        let config = BridgeConfig::default().with_init_flags(consts::INIT_TIMER);
        let subsystem = Subsystem::with_config(HeadlessNative::new(), config);
        subsystem.init();
        assert!(subsystem.native().create_window("x", 0, 0, 1, 1, 0).is_none());
    }

    #[test]
    fn zero_drain_limit_still_drains() {
        let config = BridgeConfig {
            max_events_per_drain: 0,
            ..BridgeConfig::default()
        };
        let subsystem = Subsystem::with_config(HeadlessNative::new(), config);
        subsystem.init();
        let injector = subsystem.native().injector();
        injector.push_quit(1);
        injector.push_quit(2);

        assert_eq!(subsystem.config().max_events_per_drain, 1);
        assert_eq!(subsystem.event_translator().poll_iter().count(), 1);
    }
}
