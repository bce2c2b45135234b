//=========================================================================
// Scenario Demo
//
// Walks one full bridge session on the headless backend:
// init → window + renderer → draw → inject input → drain → teardown.
//
// Run with `RUST_LOG=debug` to see lifecycle and handle traffic.
// Pass a `.toml` path to override the default configuration.
//
//=========================================================================

use std::thread;

use media_bridge::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    //--- Configuration ----------------------------------------------------

    let config = match std::env::args().nth(1) {
        Some(path) => BridgeConfig::load_from_file(path)?,
        None => BridgeConfig::default().with_window(WindowSpec::new("scenario", 640, 480).centered()),
    };
    log::info!("Starting scenario demo ({} events per drain)", config.max_events_per_drain);

    //--- Session ----------------------------------------------------------

    let subsystem = Subsystem::with_config(HeadlessNative::new(), config);
    subsystem.init_checked()?;

    let window = Window::create_default(&subsystem)?;
    let renderer = Renderer::create_default(&window)?;
    let (w, h) = renderer.output_size()?;
    log::info!("Window {} ready, target {}x{}", window.id()?, w, h);

    renderer.set_draw_color(32, 32, 48, 255)?;
    renderer.clear()?;
    renderer.set_draw_color(240, 200, 64, 255)?;
    renderer.fill_rect(Some(Rect::new(w / 4, h / 4, w / 2, h / 2)))?;
    renderer.present()?;

    //--- Input from another thread ----------------------------------------

    let injector = subsystem.native().injector();
    let window_id = window.id()?;
    thread::spawn(move || {
        injector.push_key(true, 1000, window_id, 0, consts::SCANCODE_A, consts::SDLK_A, consts::KMOD_NONE);
        injector.push_key(false, 1016, window_id, 0, consts::SCANCODE_A, consts::SDLK_A, consts::KMOD_NONE);
        injector.push_quit(1032);
    })
    .join()
    .map_err(|_| "input thread panicked")?;

    //--- Drain ------------------------------------------------------------

    let mut events = subsystem.event_translator();
    let mut running = true;
    while running {
        let mut drained = 0;
        for event in events.poll_iter() {
            drained += 1;
            println!("{}", serde_json::to_string(&event)?);
            if event.is_quit() {
                running = false;
            }
        }
        if drained == 0 {
            break;
        }
    }

    //--- Teardown ---------------------------------------------------------

    renderer.destroy();
    window.destroy();
    subsystem.quit();

    let stats = subsystem.native().stats();
    log::info!(
        "Released {} windows, {} renderers; {} invalid releases",
        stats.windows_destroyed,
        stats.renderers_destroyed,
        stats.invalid_releases
    );
    Ok(())
}
