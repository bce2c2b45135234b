//=========================================================================
// Headless Native Library
//=========================================================================
//
// In-process implementation of `NativeLibrary` with no OS resources.
//
// Architecture:
// ```text
//  any thread                      library thread
//  ┌───────────────┐               ┌──────────────────────────────┐
//  │ EventInjector │── crossbeam ─→│ poll_event() try_recv()      │
//  └───────────────┘   channel     │ handle table (windows)       │
//                                  │ SoftDevice (renderers, tex)  │
//                                  │ NativeStats (release audit)  │
//                                  └──────────────────────────────┘
// ```
//
// Behaves like the real library where the bridge depends on it:
// - constructors return `None` and set the error string on failure
// - `quit()` releases every live resource and flushes queued events
// - releasing an unknown handle is recorded in `NativeStats` instead of
//   crashing, so tests can assert that nothing was released twice
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Instant;

use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use log::{debug, trace, warn};

//=== Internal Dependencies ===============================================

use super::soft::{self, SoftDevice};
use super::{consts, HandleAllocator, NativeHandle, NativeLibrary, RawEvent, RawKeysym, TextureInfo};
use crate::core::objects::Rect;

/// Simulated display used to resolve centered window positions.
const DISPLAY_SIZE: (i32, i32) = (1920, 1080);

/// Largest window edge the simulated display accepts.
const MAX_WINDOW_SIZE: i32 = 16384;

//=== NativeStats =========================================================

/// Audit counters for native resource traffic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeStats {
    pub init_calls: u32,
    pub quit_calls: u32,
    pub windows_created: u32,
    pub windows_destroyed: u32,
    pub renderers_created: u32,
    pub renderers_destroyed: u32,
    pub textures_created: u32,
    pub textures_destroyed: u32,
    /// Destroy calls naming a handle that was not live.
    pub invalid_releases: u32,
    /// Resources still live when `quit()` ran.
    pub reclaimed_on_quit: u32,
}

//=== EventInjector =======================================================

/// Pushes synthetic events into the headless event queue.
///
/// Cloneable and `Send`; events become visible to `poll_event` in push
/// order.
#[derive(Debug, Clone)]
pub struct EventInjector {
    sender: Sender<RawEvent>,
}

impl EventInjector {
    /// Enqueues a raw record. Returns `false` if the library is gone.
    pub fn push(&self, event: RawEvent) -> bool {
        self.sender.send(event).is_ok()
    }

    pub fn push_quit(&self, timestamp: u32) -> bool {
        self.push(RawEvent::quit(timestamp))
    }

    /// Enqueues a key-down (`state == PRESSED`) or key-up record.
    #[allow(clippy::too_many_arguments)]
    pub fn push_key(
        &self,
        pressed: bool,
        timestamp: u32,
        window_id: u32,
        repeat: u8,
        scancode: i32,
        sym: i32,
        modifiers: u16,
    ) -> bool {
        let (kind, state) = if pressed {
            (consts::KEYDOWN, consts::PRESSED)
        } else {
            (consts::KEYUP, consts::RELEASED)
        };
        let keysym = RawKeysym {
            scancode,
            sym,
            modifiers,
            unused: 0,
        };
        self.push(RawEvent::key(kind, timestamp, window_id, state, repeat, keysym))
    }
}

//=== Internal State ======================================================

#[derive(Debug)]
struct HeadlessWindow {
    id: u32,
    title: String,
    bounds: Rect,
    flags: u32,
}

#[derive(Debug)]
struct HeadlessState {
    initialized: bool,
    flags: u32,
    started: Instant,
    error: String,
    handles: HandleAllocator,
    next_window_id: u32,
    windows: HashMap<NativeHandle, HeadlessWindow>,
    device: SoftDevice,
    stats: NativeStats,
}

impl HeadlessState {
    fn new() -> Self {
        Self {
            initialized: false,
            flags: 0,
            started: Instant::now(),
            error: String::new(),
            handles: HandleAllocator::new(),
            next_window_id: 1,
            windows: HashMap::new(),
            device: SoftDevice::new(),
            stats: NativeStats::default(),
        }
    }

    /// Stores `message` as the current error and returns the failure code.
    fn fail(&mut self, message: impl Into<String>) -> i32 {
        self.error = message.into();
        trace!(target: "headless", "native error: {}", self.error);
        -1
    }

    fn status(&mut self, result: Result<(), String>) -> i32 {
        match result {
            Ok(()) => 0,
            Err(message) => self.fail(message),
        }
    }
}

//=== HeadlessNative ======================================================

/// Native library simulation for tests, demos, and CI machines without a
/// display.
#[derive(Debug)]
pub struct HeadlessNative {
    state: RefCell<HeadlessState>,
    sender: Sender<RawEvent>,
    receiver: Receiver<RawEvent>,
    init_failure: Option<(i32, String)>,
}

impl HeadlessNative {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self {
            state: RefCell::new(HeadlessState::new()),
            sender,
            receiver,
            init_failure: None,
        }
    }

    /// Makes every `init` call fail with `code` and `message`.
    pub fn with_init_failure(mut self, code: i32, message: impl Into<String>) -> Self {
        self.init_failure = Some((code, message.into()));
        self
    }

    pub fn injector(&self) -> EventInjector {
        EventInjector {
            sender: self.sender.clone(),
        }
    }

    pub fn stats(&self) -> NativeStats {
        self.state.borrow().stats
    }

    pub fn is_initialized(&self) -> bool {
        self.state.borrow().initialized
    }

    /// Windows, renderers, and textures currently live.
    pub fn live_resources(&self) -> usize {
        let state = self.state.borrow();
        state.windows.len() + state.device.live_count()
    }

    /// Events waiting in the queue.
    pub fn pending_events(&self) -> usize {
        self.receiver.len()
    }

    /// Title and bounds of a live window, as the library holds them.
    pub fn window_geometry(&self, window: NativeHandle) -> Option<(String, Rect, u32)> {
        self.state
            .borrow()
            .windows
            .get(&window)
            .map(|w| (w.title.clone(), w.bounds, w.flags))
    }

    fn resolve_position(position: i32, extent: i32, display: i32) -> i32 {
        match position {
            consts::WINDOWPOS_CENTERED => (display - extent) / 2,
            consts::WINDOWPOS_UNDEFINED => 0,
            other => other,
        }
    }

    fn device_call(&self, call: impl FnOnce(&mut SoftDevice) -> Result<(), String>) -> i32 {
        let mut state = self.state.borrow_mut();
        let result = call(&mut state.device);
        state.status(result)
    }
}

impl Default for HeadlessNative {
    fn default() -> Self {
        Self::new()
    }
}

//=== NativeLibrary Implementation ========================================

impl NativeLibrary for HeadlessNative {
    //--- Subsystem --------------------------------------------------------

    fn init(&self, flags: u32) -> i32 {
        let mut state = self.state.borrow_mut();
        state.stats.init_calls += 1;

        if let Some((code, message)) = &self.init_failure {
            state.error = message.clone();
            return *code;
        }

        if !state.initialized {
            state.initialized = true;
            state.started = Instant::now();
        }
        state.flags |= flags;
        debug!(target: "headless", "init flags={:#x}", state.flags);
        0
    }

    fn quit(&self) {
        let mut state = self.state.borrow_mut();
        state.stats.quit_calls += 1;

        let reclaimed = state.windows.len() + state.device.release_all();
        state.windows.clear();
        if reclaimed > 0 {
            warn!(target: "headless", "quit reclaimed {} live resources", reclaimed);
        }
        state.stats.reclaimed_on_quit += reclaimed as u32;

        let flushed = self.receiver.try_iter().count();
        if flushed > 0 {
            debug!(target: "headless", "quit flushed {} queued events", flushed);
        }

        state.initialized = false;
        state.flags = 0;
    }

    fn get_error(&self) -> String {
        self.state.borrow().error.clone()
    }

    fn get_ticks(&self) -> u32 {
        let state = self.state.borrow();
        if !state.initialized {
            return 0;
        }
        u32::try_from(state.started.elapsed().as_millis()).unwrap_or(u32::MAX)
    }

    fn poll_event(&self, event: &mut RawEvent) -> bool {
        if !self.state.borrow().initialized {
            return false;
        }

        match self.receiver.try_recv() {
            Ok(raw) => {
                *event = raw;
                true
            }
            Err(TryRecvError::Empty) => false,
            // The library holds a sender, so the channel can't disconnect.
            Err(TryRecvError::Disconnected) => false,
        }
    }

    //--- Windows ----------------------------------------------------------

    fn create_window(&self, title: &str, x: i32, y: i32, w: i32, h: i32, flags: u32) -> Option<NativeHandle> {
        let mut state = self.state.borrow_mut();
        if !state.initialized || state.flags & consts::INIT_VIDEO == 0 {
            state.fail("Video subsystem has not been initialized");
            return None;
        }
        if w <= 0 || h <= 0 || w > MAX_WINDOW_SIZE || h > MAX_WINDOW_SIZE {
            state.fail("Window is too large or has no area");
            return None;
        }

        let bounds = Rect::new(
            Self::resolve_position(x, w, DISPLAY_SIZE.0),
            Self::resolve_position(y, h, DISPLAY_SIZE.1),
            w,
            h,
        );
        let handle = state.handles.allocate();
        let id = state.next_window_id;
        state.next_window_id += 1;
        state.windows.insert(
            handle,
            HeadlessWindow {
                id,
                title: title.to_string(),
                bounds,
                flags,
            },
        );
        state.stats.windows_created += 1;
        Some(handle)
    }

    fn destroy_window(&self, window: NativeHandle) {
        let mut state = self.state.borrow_mut();
        if state.windows.remove(&window).is_none() {
            state.stats.invalid_releases += 1;
            state.fail("Invalid window");
            return;
        }
        state.stats.windows_destroyed += 1;

        // The library tears down a renderer still attached to the window.
        if let Some(textures) = state.device.release_window_target(window) {
            state.stats.renderers_destroyed += 1;
            state.stats.textures_destroyed += textures as u32;
        }
    }

    fn get_window_id(&self, window: NativeHandle) -> u32 {
        let mut state = self.state.borrow_mut();
        let id = state.windows.get(&window).map(|w| w.id);
        match id {
            Some(id) => id,
            None => {
                state.fail("Invalid window");
                0
            }
        }
    }

    //--- Renderers --------------------------------------------------------

    fn create_renderer(&self, window: NativeHandle, _index: i32, _flags: u32) -> Option<NativeHandle> {
        let mut state = self.state.borrow_mut();
        let bounds = state.windows.get(&window).map(|w| w.bounds);
        let Some(bounds) = bounds else {
            state.fail("Invalid window");
            return None;
        };

        let handle = state.handles.allocate();
        match state.device.create_renderer(handle, window, bounds.w, bounds.h) {
            Ok(()) => {
                state.stats.renderers_created += 1;
                Some(handle)
            }
            Err(message) => {
                state.fail(message);
                None
            }
        }
    }

    fn destroy_renderer(&self, renderer: NativeHandle) {
        let mut state = self.state.borrow_mut();
        match state.device.destroy_renderer(renderer) {
            Ok(textures) => {
                state.stats.renderers_destroyed += 1;
                state.stats.textures_destroyed += textures as u32;
            }
            Err(message) => {
                state.stats.invalid_releases += 1;
                state.fail(message);
            }
        }
    }

    fn set_render_draw_color(&self, renderer: NativeHandle, r: u8, g: u8, b: u8, a: u8) -> i32 {
        self.device_call(|device| device.set_draw_color(renderer, soft::pack_rgba(r, g, b, a)))
    }

    fn render_clear(&self, renderer: NativeHandle) -> i32 {
        self.device_call(|device| device.clear(renderer))
    }

    fn render_fill_rect(&self, renderer: NativeHandle, rect: Option<&Rect>) -> i32 {
        self.device_call(|device| device.fill_rect(renderer, rect))
    }

    fn render_draw_rect(&self, renderer: NativeHandle, rect: Option<&Rect>) -> i32 {
        self.device_call(|device| device.draw_rect(renderer, rect))
    }

    fn render_copy(&self, renderer: NativeHandle, texture: NativeHandle, src: Option<&Rect>, dst: Option<&Rect>) -> i32 {
        self.device_call(|device| device.copy(renderer, texture, src, dst))
    }

    fn render_present(&self, renderer: NativeHandle) {
        let mut state = self.state.borrow_mut();
        if let Err(message) = state.device.present(renderer) {
            state.fail(message);
        }
    }

    fn render_read_pixels(&self, renderer: NativeHandle, pixels: &mut Vec<u32>) -> i32 {
        let mut state = self.state.borrow_mut();
        let result = state.device.read_pixels(renderer).map(|frame| {
            pixels.clear();
            pixels.extend_from_slice(frame);
        });
        state.status(result)
    }

    fn get_renderer_output_size(&self, renderer: NativeHandle, w: &mut i32, h: &mut i32) -> i32 {
        let mut state = self.state.borrow_mut();
        let result = state.device.output_size(renderer).map(|(width, height)| {
            *w = width;
            *h = height;
        });
        state.status(result)
    }

    //--- Textures ---------------------------------------------------------

    fn create_texture(&self, renderer: NativeHandle, format: u32, access: i32, w: i32, h: i32) -> Option<NativeHandle> {
        let mut state = self.state.borrow_mut();
        let handle = state.handles.allocate();
        match state.device.create_texture(handle, renderer, format, access, w, h) {
            Ok(()) => {
                state.stats.textures_created += 1;
                Some(handle)
            }
            Err(message) => {
                state.fail(message);
                None
            }
        }
    }

    fn destroy_texture(&self, texture: NativeHandle) {
        let mut state = self.state.borrow_mut();
        match state.device.destroy_texture(texture) {
            Ok(()) => state.stats.textures_destroyed += 1,
            Err(message) => {
                state.stats.invalid_releases += 1;
                state.fail(message);
            }
        }
    }

    fn query_texture(&self, texture: NativeHandle, info: &mut TextureInfo) -> i32 {
        let mut state = self.state.borrow_mut();
        let result = state.device.query_texture(texture).map(|queried| *info = queried);
        state.status(result)
    }

    fn update_texture(&self, texture: NativeHandle, rect: Option<&Rect>, pixels: &[u32]) -> i32 {
        self.device_call(|device| device.update_texture(texture, rect, pixels))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
