//=========================================================================
// Winit Platform Backend
//
// `NativeLibrary` over real OS windows, driven by Winit.
//
// Architecture:
// ```text
//  library thread (the one that called init)
//  ┌────────────────────────────────────────────────────────────┐
//  │ poll_event()                                               │
//  │   ├─ InputBuffer non-empty ─► pop oldest record            │
//  │   └─ empty ─► pump_app_events(timeout 0)                   │
//  │                 ↓                                          │
//  │               Pump (ApplicationHandler)                    │
//  │                 ├─ InputProcessor: keys, pointer, modifiers│
//  │                 └─ window changes: close, resize, focus    │
//  │                 ↓                                          │
//  │               InputBuffer (RawEvent, motion coalesced)     │
//  │                                                            │
//  │ windows: NativeHandle ─► winit Window + numeric id         │
//  │ renderers/textures: SoftDevice (software targets)          │
//  └────────────────────────────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **Pumped, not run**: the host owns the loop and calls `poll_event`,
//   so the Winit loop is pumped with a zero timeout instead of `run_app`
// - **Event loop survives quit**: Winit allows one event loop per
//   process, so it is created by the first `init` and kept, and re-init
//   after `quit` reuses it
// - **Close request of the last window also queues QUIT**, matching what
//   hosts of the native library expect from a single-window program
// - **Main thread requirement**: Winit mandates the main thread on macOS,
//   so `init` must run there
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::{Duration, Instant};

use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalPosition, PhysicalSize},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Fullscreen, Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::objects::Rect;
use crate::native::soft::{self, SoftDevice};
use crate::native::{consts, HandleAllocator, NativeHandle, NativeLibrary, RawEvent, TextureInfo};
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

/// Largest window edge accepted.
const MAX_WINDOW_SIZE: i32 = 16384;

//=== Internal State ======================================================

struct PlatformWindow {
    id: u32,
    window: Window,
}

struct PlatformState {
    initialized: bool,
    flags: u32,
    started: Instant,
    error: String,
    handles: HandleAllocator,
    next_window_id: u32,
    windows: HashMap<NativeHandle, PlatformWindow>,
    ids: HashMap<WindowId, (NativeHandle, u32)>,
    device: SoftDevice,
    buffer: InputBuffer,
    processor: InputProcessor,
}

impl PlatformState {
    fn new() -> Self {
        Self {
            initialized: false,
            flags: 0,
            started: Instant::now(),
            error: String::new(),
            handles: HandleAllocator::new(),
            next_window_id: 1,
            windows: HashMap::new(),
            ids: HashMap::new(),
            device: SoftDevice::new(),
            buffer: InputBuffer::new(),
            processor: InputProcessor::new(),
        }
    }

    fn fail(&mut self, message: impl Into<String>) -> i32 {
        self.error = message.into();
        trace!(target: "platform", "native error: {}", self.error);
        -1
    }

    fn status(&mut self, result: Result<(), String>) -> i32 {
        match result {
            Ok(()) => 0,
            Err(message) => self.fail(message),
        }
    }

    fn ticks(&self) -> u32 {
        u32::try_from(self.started.elapsed().as_millis()).unwrap_or(u32::MAX)
    }

    //--- Event Conversion -------------------------------------------------

    fn handle_window_event(&mut self, window_id: WindowId, event: WindowEvent) {
        let Some(&(handle, id)) = self.ids.get(&window_id) else {
            trace!(target: "platform::input", "Event for unknown window ignored");
            return;
        };
        let timestamp = self.ticks();

        let raw = match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Close requested for window {}", id);
                self.buffer
                    .push(RawEvent::window(timestamp, id, consts::WINDOWEVENT_CLOSE, 0, 0));
                (self.windows.len() == 1).then(|| RawEvent::quit(timestamp))
            }

            WindowEvent::Resized(size) => {
                let (w, h) = (size.width as i32, size.height as i32);
                self.device.resize_window_target(handle, w, h);
                Some(RawEvent::window(timestamp, id, consts::WINDOWEVENT_RESIZED, w, h))
            }

            WindowEvent::Moved(position) => Some(RawEvent::window(
                timestamp,
                id,
                consts::WINDOWEVENT_MOVED,
                position.x,
                position.y,
            )),

            WindowEvent::Focused(focused) => {
                let sub = if focused {
                    consts::WINDOWEVENT_FOCUS_GAINED
                } else {
                    consts::WINDOWEVENT_FOCUS_LOST
                };
                Some(RawEvent::window(timestamp, id, sub, 0, 0))
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                trace!(target: "platform::input", "Modifiers changed: {:?}", modifiers);
                self.processor.update_modifiers(modifiers.state());
                None
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => Some(self.processor.process_key(
                timestamp,
                id,
                key_event.physical_key,
                &key_event.logical_key,
                key_event.state,
                key_event.repeat,
            )),

            WindowEvent::CursorMoved { position, .. } => {
                Some(self.processor.process_mouse_move(timestamp, id, position.x, position.y))
            }

            WindowEvent::MouseInput { state, button, .. } => {
                Some(self.processor.process_mouse_button(timestamp, id, button, state))
            }

            WindowEvent::MouseWheel { .. } => Some(RawEvent::other(consts::MOUSEWHEEL, timestamp)),

            _ => None,
        };

        if let Some(raw) = raw {
            self.buffer.push(raw);
        }
    }
}

//=== Pump ================================================================

/// Handler for one pump of the Winit loop.
struct Pump<'a> {
    state: &'a mut PlatformState,
}

impl ApplicationHandler for Pump<'_> {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {
        debug!(target: "platform", "Event loop resumed");
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        self.state.handle_window_event(window_id, event);
    }
}

//=== WinitNative =========================================================

/// Native library backed by Winit windows and software render targets.
///
/// Rendered frames stay in the software targets and can be read back
/// with `render_read_pixels`; they are not uploaded to the OS surface.
pub struct WinitNative {
    event_loop: RefCell<Option<EventLoop<()>>>,
    state: RefCell<PlatformState>,
}

impl WinitNative {
    /// Creates the backend. The OS event loop is created by the first
    /// `init`.
    pub fn new() -> Self {
        Self {
            event_loop: RefCell::new(None),
            state: RefCell::new(PlatformState::new()),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.state.borrow().initialized
    }

    /// Records converted and waiting for `poll_event`.
    pub fn pending_events(&self) -> usize {
        self.state.borrow().buffer.len()
    }

    /// Moves pending OS events into the buffer.
    fn pump(&self) {
        let mut event_loop = self.event_loop.borrow_mut();
        let Some(event_loop) = event_loop.as_mut() else {
            return;
        };
        let mut state = self.state.borrow_mut();

        let mut pump = Pump { state: &mut *state };
        if let PumpStatus::Exit(code) = event_loop.pump_app_events(Some(Duration::ZERO), &mut pump) {
            debug!(target: "platform", "Event loop reported exit with code {}", code);
        }
    }

    fn device_call(&self, call: impl FnOnce(&mut SoftDevice) -> Result<(), String>) -> i32 {
        let mut state = self.state.borrow_mut();
        let result = call(&mut state.device);
        state.status(result)
    }

    fn build_attributes(title: &str, x: i32, y: i32, w: i32, h: i32, flags: u32) -> WindowAttributes {
        let mut attrs = WindowAttributes::default()
            .with_title(title)
            .with_inner_size(PhysicalSize::new(w as u32, h as u32))
            .with_visible(flags & consts::WINDOW_HIDDEN == 0)
            .with_resizable(flags & consts::WINDOW_RESIZABLE != 0)
            .with_decorations(flags & consts::WINDOW_BORDERLESS == 0);

        if is_explicit(x) && is_explicit(y) {
            attrs = attrs.with_position(PhysicalPosition::new(x, y));
        }
        if flags & consts::WINDOW_FULLSCREEN != 0 {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }
        attrs
    }

    /// Applies `WINDOWPOS_CENTERED` axes against the window's monitor.
    fn center(window: &Window, x: i32, y: i32) {
        if x != consts::WINDOWPOS_CENTERED && y != consts::WINDOWPOS_CENTERED {
            return;
        }
        let Some(monitor) = window.current_monitor() else {
            debug!(target: "platform", "No monitor to center on");
            return;
        };

        let display = monitor.size();
        let origin = monitor.position();
        let size = window.outer_size();
        let current = window.outer_position().unwrap_or(origin);

        let resolve = |position: i32, current: i32, origin: i32, display: u32, extent: u32| {
            if position == consts::WINDOWPOS_CENTERED {
                origin + (display as i32 - extent as i32) / 2
            } else {
                current
            }
        };
        window.set_outer_position(PhysicalPosition::new(
            resolve(x, current.x, origin.x, display.width, size.width),
            resolve(y, current.y, origin.y, display.height, size.height),
        ));
    }
}

impl Default for WinitNative {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WinitNative {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("WinitNative")
            .field("initialized", &state.initialized)
            .field("windows", &state.windows.len())
            .field("pending", &state.buffer.len())
            .finish_non_exhaustive()
    }
}

fn is_explicit(position: i32) -> bool {
    position != consts::WINDOWPOS_UNDEFINED && position != consts::WINDOWPOS_CENTERED
}

//=== NativeLibrary Implementation ========================================

impl NativeLibrary for WinitNative {
    //--- Subsystem --------------------------------------------------------

    fn init(&self, flags: u32) -> i32 {
        let mut event_loop = self.event_loop.borrow_mut();
        let mut state = self.state.borrow_mut();

        if event_loop.is_none() {
            match EventLoop::new() {
                Ok(created) => {
                    info!(target: "platform", "Winit event loop created");
                    *event_loop = Some(created);
                }
                Err(e) => {
                    error!(target: "platform", "Event loop creation failed: {}", e);
                    return state.fail(format!("Event loop creation failed: {}", e));
                }
            }
        }

        if !state.initialized {
            state.initialized = true;
            state.started = Instant::now();
        }
        state.flags |= flags;
        debug!(target: "platform", "init flags={:#x}", state.flags);
        0
    }

    fn quit(&self) {
        let mut state = self.state.borrow_mut();

        let windows = state.windows.len();
        let reclaimed = windows + state.device.release_all();
        state.windows.clear();
        state.ids.clear();
        if reclaimed > 0 {
            warn!(target: "platform", "quit reclaimed {} live resources", reclaimed);
        }

        let coalesced = state.buffer.coalesced();
        let flushed = state.buffer.clear();
        if flushed > 0 {
            debug!(target: "platform", "quit flushed {} queued events", flushed);
        }
        debug!(target: "platform", "{} motion events coalesced so far", coalesced);
        state.processor = InputProcessor::new();
        state.initialized = false;
        state.flags = 0;
        info!(target: "platform", "Platform released ({} windows closed)", windows);
    }

    fn get_error(&self) -> String {
        self.state.borrow().error.clone()
    }

    fn get_ticks(&self) -> u32 {
        let state = self.state.borrow();
        if state.initialized {
            state.ticks()
        } else {
            0
        }
    }

    fn poll_event(&self, event: &mut RawEvent) -> bool {
        if !self.is_initialized() {
            return false;
        }
        if self.state.borrow().buffer.is_empty() {
            self.pump();
        }

        match self.state.borrow_mut().buffer.pop() {
            Some(raw) => {
                *event = raw;
                true
            }
            None => false,
        }
    }

    //--- Windows ----------------------------------------------------------

    fn create_window(&self, title: &str, x: i32, y: i32, w: i32, h: i32, flags: u32) -> Option<NativeHandle> {
        let event_loop = self.event_loop.borrow();
        let mut state = self.state.borrow_mut();

        let video_ready = state.initialized && state.flags & consts::INIT_VIDEO != 0;
        let Some(event_loop) = event_loop.as_ref().filter(|_| video_ready) else {
            state.fail("Video subsystem has not been initialized");
            return None;
        };
        if w <= 0 || h <= 0 || w > MAX_WINDOW_SIZE || h > MAX_WINDOW_SIZE {
            state.fail("Window is too large or has no area");
            return None;
        }

        let attrs = Self::build_attributes(title, x, y, w, h, flags);
        #[allow(deprecated)]
        let created = event_loop.create_window(attrs);
        let window = match created {
            Ok(window) => window,
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                state.fail(format!("Window creation failed: {}", e));
                return None;
            }
        };
        Self::center(&window, x, y);

        let handle = state.handles.allocate();
        let id = state.next_window_id;
        state.next_window_id += 1;
        info!(
            target: "platform",
            "Window {} created: {}x{} @ {}x DPI",
            id,
            window.inner_size().width,
            window.inner_size().height,
            window.scale_factor()
        );
        state.ids.insert(window.id(), (handle, id));
        state.windows.insert(handle, PlatformWindow { id, window });
        Some(handle)
    }

    fn destroy_window(&self, window: NativeHandle) {
        let mut state = self.state.borrow_mut();
        let Some(removed) = state.windows.remove(&window) else {
            state.fail("Invalid window");
            return;
        };

        state.ids.remove(&removed.window.id());
        state.processor.forget_window(removed.id);
        if let Some(textures) = state.device.release_window_target(window) {
            debug!(
                target: "platform",
                "Window {} took its renderer and {} textures with it",
                removed.id,
                textures
            );
        }
        debug!(target: "platform", "Window {} destroyed", removed.id);
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
        let size = state.windows.get(&window).map(|w| w.window.inner_size());
        let Some(size) = size else {
            state.fail("Invalid window");
            return None;
        };

        let handle = state.handles.allocate();
        match state
            .device
            .create_renderer(handle, window, size.width as i32, size.height as i32)
        {
            Ok(()) => Some(handle),
            Err(message) => {
                state.fail(message);
                None
            }
        }
    }

    fn destroy_renderer(&self, renderer: NativeHandle) {
        let mut state = self.state.borrow_mut();
        if let Err(message) = state.device.destroy_renderer(renderer) {
            state.fail(message);
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
        match state.device.present(renderer) {
            Ok(frame) => trace!(target: "platform", "Presented frame {} on {}", frame, renderer),
            Err(message) => {
                state.fail(message);
            }
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
            Ok(()) => Some(handle),
            Err(message) => {
                state.fail(message);
                None
            }
        }
    }

    fn destroy_texture(&self, texture: NativeHandle) {
        let mut state = self.state.borrow_mut();
        if let Err(message) = state.device.destroy_texture(texture) {
            state.fail(message);
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
//
// Only paths that never open a display; window creation needs a real
// desktop session and is exercised by the demo.
//
