//! Desktop driver: runs the gallery sessions on a winit event loop with the
//! live state in the window title. `gallery-native [path]`, e.g.
//! `gallery-native /product/1`.

mod driver;

use driver::Driver;
use gallery_core::{ActivityKind, Catalog};
use instant::Instant;
use std::time::Duration;
use winit::{
    event::*,
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

const TICK: Duration = Duration::from_millis(16);

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());
    let catalog = Catalog::builtin()?;
    let mut driver = Driver::new(catalog, &path);

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(driver.title())
        .build(&event_loop)?;
    let size = window.inner_size();
    driver.set_aspect(size.width, size.height);

    let mut title = driver.title();
    let mut next_tick = Instant::now();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => driver.set_aspect(size.width, size.height),
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent {
            event: WindowEvent::KeyboardInput { event, .. },
            ..
        } => {
            if !event.repeat {
                driver.key(&event.logical_key, event.state == ElementState::Pressed);
            }
        }
        Event::WindowEvent {
            event: WindowEvent::CursorMoved { .. },
            ..
        } => driver.pointer(ActivityKind::PointerMove),
        Event::WindowEvent {
            event:
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    ..
                },
            ..
        } => driver.pointer(ActivityKind::PointerDown),
        Event::WindowEvent {
            event: WindowEvent::Focused(false),
            ..
        } => driver.focus_lost(),
        Event::AboutToWait => {
            let now = Instant::now();
            if now >= next_tick {
                driver.tick();
                next_tick = now + TICK;
                let current = driver.title();
                if current != title {
                    window.set_title(&current);
                    title = current;
                }
            }
            elwt.set_control_flow(ControlFlow::WaitUntil(next_tick));
        }
        _ => {}
    })?;
    Ok(())
}
