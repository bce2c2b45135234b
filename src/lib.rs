//=========================================================================
// Media Bridge Library Root
//
// Owned handles and a polled, structured event stream over a C-style
// multimedia library.
//
// Responsibilities:
// - Expose the subsystem lifecycle and the owned object types
// - Expose the event translator and its structured records
// - Keep the native seam (`NativeLibrary`) pluggable, with a headless
//   backend for tests and a Winit backend for real windows
//
// Typical usage:
// ```no_run
// use media_bridge::prelude::*;
//
// fn main() -> Result<(), BridgeError> {
//     let subsystem = Subsystem::new(HeadlessNative::new());
//     subsystem.init_checked()?;
//
//     let window = Window::create_default(&subsystem)?;
//     let mut events = subsystem.event_translator();
//     while let Some(event) = events.poll() {
//         if event.is_quit() {
//             break;
//         }
//     }
//
//     window.destroy();
//     subsystem.quit();
//     Ok(())
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds everything above the native seam: lifecycle, handles,
// objects, events, errors, and configuration.
//
// `native` holds the seam itself, the raw event layout, the exported
// constants, and the headless backend.
//
pub mod core;
pub mod native;
pub mod prelude;

//--- Platform Backend ----------------------------------------------------
//
// Winit-backed implementation of the seam. Only built on desktop targets
// where Winit can pump its loop from the host.
//
#[cfg(all(
    feature = "winit",
    any(
        target_os = "windows",
        target_os = "macos",
        target_os = "linux",
        target_os = "dragonfly",
        target_os = "freebsd",
        target_os = "netbsd",
        target_os = "openbsd"
    )
))]
pub mod platform;

#[cfg(test)]
mod scenario_tests;

//--- Public Exports ------------------------------------------------------

pub use crate::core::{BridgeError, BridgeResult, Subsystem};
