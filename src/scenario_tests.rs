//=========================================================================
// Scenario Tests
//=========================================================================
//
// End-to-end behavior across lifecycle, objects, and events, driven
// through the headless backend.
//
//=========================================================================

use serde_json::json;

use crate::prelude::*;

//=== Helpers =============================================================

fn ready() -> Subsystem<HeadlessNative> {
    let subsystem = Subsystem::new(HeadlessNative::new());
    assert_eq!(subsystem.init(), StatusCode::SUCCESS);
    subsystem
}

fn push_key_a(injector: &EventInjector, timestamp: u32) {
    injector.push_key(true, timestamp, 1, 0, consts::SCANCODE_A, 'a' as i32, consts::KMOD_NONE);
}

//=== Full Scenario =======================================================

#[test]
fn window_key_press_then_teardown() {
    let subsystem = Subsystem::new(HeadlessNative::new());
    assert_eq!(subsystem.init().raw(), 0);

    let window = Window::create(&subsystem, &WindowSpec::new("scenario", 640, 480)).unwrap();
    assert_eq!(window.id(), Ok(1));

    push_key_a(&subsystem.native().injector(), 1000);
    let mut events = subsystem.event_translator();
    let record = events.poll().unwrap();

    assert_eq!(
        record,
        EventRecord::KeyDown(KeyEvent {
            timestamp: 1000,
            window_id: 1,
            state: consts::PRESSED,
            repeat: 0,
            keysym: KeySym::new(4, 'a' as i32, 0),
        })
    );
    assert_eq!(
        record.to_value(),
        json!({
            "type": consts::KEYDOWN,
            "timestamp": 1000,
            "windowID": 1,
            "state": 1,
            "repeat": 0,
            "keysym": { "scancode": 4, "sym": 97, "mod": 0 }
        })
    );

    window.destroy();
    subsystem.quit();

    let stats = subsystem.native().stats();
    assert_eq!(stats.windows_destroyed, 1);
    assert_eq!(stats.invalid_releases, 0);
    assert_eq!(stats.reclaimed_on_quit, 0);
    assert_eq!(subsystem.state(), SubsystemState::Uninitialized);
}

//=== Event Properties ====================================================

#[test]
fn key_fields_never_leak_into_later_records() {
    let subsystem = ready();
    let injector = subsystem.native().injector();
    injector.push_key(true, 10, 1, 1, consts::SCANCODE_Z, consts::SDLK_Z, consts::KMOD_LSHIFT);
    injector.push_quit(11);
    injector.push(crate::native::RawEvent::other(consts::USEREVENT, 12));

    let mut events = subsystem.event_translator();
    let mut slot = None;

    assert!(events.poll_into(&mut slot));
    assert_eq!(slot.map(|r| r.kind()), Some(EventKind::KeyDown));

    assert!(events.poll_into(&mut slot));
    assert_eq!(slot, Some(EventRecord::Quit { timestamp: 11 }));
    assert_eq!(slot.unwrap().to_value(), json!({ "type": 0x100, "timestamp": 11 }));

    assert!(events.poll_into(&mut slot));
    assert_eq!(
        slot,
        Some(EventRecord::Other {
            kind: consts::USEREVENT,
            timestamp: 12
        })
    );

    assert!(!events.poll_into(&mut slot));
    assert_eq!(slot, None);
}

#[test]
fn quit_event_round_trips() {
    let subsystem = ready();
    subsystem.native().injector().push_quit(4242);

    let record = subsystem.event_translator().poll().unwrap();

    assert!(record.is_quit());
    assert_eq!(record.type_code(), consts::QUIT);
    assert_eq!(record.timestamp(), 4242);
}

#[test]
fn key_up_round_trips_every_field() {
    let subsystem = ready();
    subsystem
        .native()
        .injector()
        .push_key(false, 77, 3, 1, consts::SCANCODE_LEFT, consts::SDLK_LEFT, consts::KMOD_CTRL);

    let record = subsystem.event_translator().poll().unwrap();

    let key = record.key().copied().unwrap();
    assert_eq!(record.kind(), EventKind::KeyUp);
    assert_eq!((key.timestamp, key.window_id, key.state, key.repeat), (77, 3, consts::RELEASED, 1));
    assert_eq!(key.keysym, KeySym::new(consts::SCANCODE_LEFT, consts::SDLK_LEFT, consts::KMOD_CTRL));
}

#[test]
fn empty_queue_yields_nothing_repeatedly() {
    let subsystem = ready();
    let mut events = subsystem.event_translator();
    for _ in 0..3 {
        assert_eq!(events.poll(), None);
    }
}

#[test]
fn events_arrive_in_push_order() {
    let subsystem = ready();
    let injector = subsystem.native().injector();
    for ts in 1..=5 {
        push_key_a(&injector, ts);
    }

    let stamps: Vec<u32> = subsystem
        .event_translator()
        .poll_iter()
        .map(|record| record.timestamp())
        .collect();

    assert_eq!(stamps, vec![1, 2, 3, 4, 5]);
}

//=== Lifecycle and Release Properties ====================================

#[test]
fn single_destruction_then_quit() {
    let subsystem = ready();
    let window = Window::create_default(&subsystem).unwrap();
    let renderer = Renderer::create_default(&window).unwrap();
    let texture = Texture::create(&renderer, consts::PIXELFORMAT_RGBA8888, consts::TEXTUREACCESS_STATIC, 4, 4).unwrap();

    texture.destroy();
    renderer.destroy();
    window.destroy();
    subsystem.quit();

    let stats = subsystem.native().stats();
    assert_eq!(
        (stats.textures_destroyed, stats.renderers_destroyed, stats.windows_destroyed),
        (1, 1, 1)
    );
    assert_eq!(stats.invalid_releases, 0);
    assert_eq!(stats.reclaimed_on_quit, 0);
}

#[test]
fn repeated_quit_is_idempotent() {
    let subsystem = ready();
    subsystem.quit();
    subsystem.quit();
    subsystem.quit();
    assert_eq!(subsystem.native().stats().quit_calls, 1);
    assert_eq!(subsystem.state(), SubsystemState::Uninitialized);
}

#[test]
fn quit_before_destroy_never_releases_twice() {
    let subsystem = ready();
    let window = Window::create_default(&subsystem).unwrap();
    let renderer = Renderer::create_default(&window).unwrap();

    subsystem.quit();
    assert!(!renderer.is_live());
    assert_eq!(window.id(), Err(BridgeError::Invalidated { object: "Window" }));

    renderer.destroy();
    drop(window);

    let stats = subsystem.native().stats();
    assert_eq!(stats.reclaimed_on_quit, 2);
    assert_eq!(stats.windows_destroyed, 0);
    assert_eq!(stats.renderers_destroyed, 0);
    assert_eq!(stats.invalid_releases, 0);
}

#[test]
fn objects_from_before_reinit_stay_invalidated() {
    let subsystem = ready();
    let stale = Window::create_default(&subsystem).unwrap();
    subsystem.quit();
    subsystem.init();

    let fresh = Window::create_default(&subsystem).unwrap();

    assert!(!stale.is_live());
    assert!(fresh.is_live());
    drop(stale);
    assert_eq!(subsystem.native().stats().invalid_releases, 0);
    assert_eq!(subsystem.native().live_resources(), 1);
}

#[test]
fn failed_init_keeps_native_code_and_blocks_objects() {
    let subsystem = Subsystem::new(HeadlessNative::new().with_init_failure(-1, "No available video device"));

    assert_eq!(i32::from(subsystem.init()), -1);
    let err = Window::create_default(&subsystem).unwrap_err();

    assert_eq!(err, BridgeError::NotInitialized);
    assert_eq!(subsystem.native().stats().windows_created, 0);
}

#[test]
fn failed_create_leaves_nothing_live() {
    let subsystem = ready();
    let too_large = WindowSpec::new("huge", 100_000, 10);

    let err = Window::create(&subsystem, &too_large).unwrap_err();

    assert!(err.is_init_error());
    assert_eq!(subsystem.native().live_resources(), 0);
    assert_eq!(subsystem.native().stats().invalid_releases, 0);
}

#[test]
fn translator_keeps_library_alive_after_subsystem_drop() {
    let subsystem = ready();
    let injector = subsystem.native().injector();
    let mut events = subsystem.event_translator();

    drop(subsystem);
    assert!(injector.push_quit(9));
    assert_eq!(events.poll(), Some(EventRecord::Quit { timestamp: 9 }));

    drop(events);
    assert!(!injector.push_quit(10));
}

//=== Drawing =============================================================

#[test]
fn rendered_frame_reads_back() {
    let subsystem = ready();
    let window = Window::create(&subsystem, &WindowSpec::new("frame", 3, 2)).unwrap();
    let renderer = Renderer::create_default(&window).unwrap();

    renderer.set_draw_color(0, 0, 0, 255).unwrap();
    renderer.clear().unwrap();
    renderer.set_draw_color(255, 0, 0, 255).unwrap();
    renderer.draw_rect(None).unwrap();
    renderer.present().unwrap();

    let pixels = renderer.read_pixels().unwrap();
    assert_eq!(pixels.len(), 6);
    assert!(pixels.iter().all(|&p| p == 0xFF00_00FF));
}

//=== Configuration =======================================================

#[test]
fn toml_config_drives_defaults() {
    let config = BridgeConfig::from_toml_str(
        r#"
        max_events_per_drain = 1

        [window]
        title = "configured"
        w = 320
        h = 200
        "#,
    )
    .unwrap();
    let subsystem = Subsystem::with_config(HeadlessNative::new(), config);
    subsystem.init();

    let window = Window::create_default(&subsystem).unwrap();
    assert_eq!(window.title(), "configured");
    assert_eq!(window.size(), (320, 200));

    let injector = subsystem.native().injector();
    injector.push_quit(1);
    injector.push_quit(2);
    assert_eq!(subsystem.event_translator().poll_iter().count(), 1);
}

#[test]
fn exported_constants_resolve_by_name() {
    assert_eq!(consts::lookup("KEYDOWN"), Some(0x300));
    assert_eq!(consts::lookup("QUIT"), Some(0x100));
    assert_eq!(consts::lookup("NOT_A_CONSTANT"), None);
}
