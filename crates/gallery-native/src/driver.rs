//! Page state for the desktop driver: one session at a time, swapped in
//! process when the user "navigates".

use gallery_core::{
    ActivityKind, ActivityParams, CameraParams, Catalog, FocusTransition, GallerySession,
    MoveKeys, PlayerParams, PlayerPose, Route, TourParams, ViewerSession,
};
use instant::Instant;
use std::time::Duration;
use winit::keyboard::{Key, NamedKey};

pub enum Page {
    Gallery(GallerySession),
    Viewer(ViewerSession),
    NotFound,
}

pub struct Driver {
    catalog: Catalog,
    page: Page,
    keys: MoveKeys,
    entered: Instant,
    last_tick: Instant,
}

impl Driver {
    pub fn new(catalog: Catalog, path: &str) -> Self {
        let now = Instant::now();
        let mut driver = Self {
            catalog,
            page: Page::NotFound,
            keys: MoveKeys::default(),
            entered: now,
            last_tick: now,
        };
        driver.open(path);
        driver
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Replace the current session with the one for `path`.
    pub fn open(&mut self, path: &str) {
        let route = Route::parse(path).resolve(&self.catalog);
        log::info!("[route] {path} -> {route}");
        self.keys.clear();
        self.entered = Instant::now();
        self.last_tick = self.entered;
        self.page = match route {
            Route::Gallery => Page::Gallery(GallerySession::with_corridor(
                PlayerParams::default(),
                CameraParams::default(),
            )),
            Route::Product(id) => match self.catalog.product(id) {
                Ok(product) => {
                    let mut session = ViewerSession::new(
                        product.clone(),
                        TourParams::default(),
                        ActivityParams::default(),
                        Duration::ZERO,
                    );
                    // no entry animation on desktop
                    session.arrive(Duration::ZERO);
                    Page::Viewer(session)
                }
                Err(e) => {
                    log::warn!("[route] {e}");
                    Page::NotFound
                }
            },
            Route::NotFound => Page::NotFound,
        };
    }

    fn elapsed(&self) -> Duration {
        self.entered.elapsed()
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if let Page::Gallery(session) = &mut self.page {
            session.set_aspect(width.max(1) as f32 / height.max(1) as f32);
        }
    }

    pub fn key(&mut self, key: &Key, pressed: bool) {
        let Some(name) = key_name(key) else { return };
        if !pressed {
            self.keys.set_key(&name, false);
            return;
        }
        let now = self.elapsed();
        let mut target: Option<String> = None;
        match &mut self.page {
            Page::Gallery(session) => {
                if self.keys.set_key(&name, true) {
                    return;
                }
                match name.as_str() {
                    "Escape" => {
                        session.dismiss_focus();
                    }
                    "Enter" => {
                        if let Some(id) = session.focus().focused_id() {
                            match session.navigate(id) {
                                Ok(request) => target = Some(request.path()),
                                Err(e) => log::error!("[route] {e}"),
                            }
                        }
                    }
                    _ => {}
                }
            }
            Page::Viewer(session) => {
                session.record_activity(ActivityKind::KeyDown, now);
                if name == "Backspace" {
                    target = Some("/".to_string());
                } else if let Some(d) = name.chars().next().and_then(|c| c.to_digit(10)) {
                    if d > 0 {
                        if let Err(e) = session.select_variant(d as usize - 1) {
                            log::warn!("{e}");
                        }
                    }
                } else if name.eq_ignore_ascii_case("c") {
                    let view = session.view();
                    let count = view
                        .variant(session.product())
                        .map_or(1, |v| v.colors.len());
                    if let Err(e) = session.select_color((view.color_index + 1) % count) {
                        log::warn!("{e}");
                    }
                }
            }
            Page::NotFound => {
                if name == "Backspace" {
                    target = Some("/".to_string());
                }
            }
        }
        if let Some(path) = target {
            self.open(&path);
        }
    }

    pub fn pointer(&mut self, kind: ActivityKind) {
        let now = self.elapsed();
        if let Page::Viewer(session) = &mut self.page {
            session.record_activity(kind, now);
        }
    }

    pub fn focus_lost(&mut self) {
        self.keys.clear();
    }

    pub fn tick(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_tick;
        self.last_tick = now;
        let elapsed = self.elapsed();
        match &mut self.page {
            Page::Gallery(session) => {
                let report = session.tick(self.keys.intent(), dt);
                for t in &report.transitions {
                    if let FocusTransition::Acquired(id) = t {
                        log::info!("press Enter to view piece {id}, Escape to step back");
                    }
                }
            }
            Page::Viewer(session) => session.advance(elapsed),
            Page::NotFound => {}
        }
    }

    /// Window title summarising live state.
    pub fn title(&self) -> String {
        match &self.page {
            Page::Gallery(session) => {
                let p = session.player().position;
                let pose = match session.player_pose() {
                    PlayerPose::Idle => "idle",
                    PlayerPose::Walk => "walk",
                };
                let focus = session
                    .focus()
                    .focused_id()
                    .map_or_else(|| "none".to_string(), |id| format!("piece {id}"));
                format!(
                    "Gallery | x {:.1} z {:.1} | {pose} | focus: {focus}",
                    p.x, p.z
                )
            }
            Page::Viewer(session) => {
                let product = session.product();
                let view = session.view();
                let variant = view.variant(product).map_or("?", |v| v.name.as_str());
                let color = view.color(product).map_or("?", |c| c.name.as_str());
                let tour = if session.tour().is_running() {
                    "tour"
                } else {
                    "manual"
                };
                format!("{} | {variant} / {color} | {tour}", product.name)
            }
            Page::NotFound => "Product not found".to_string(),
        }
    }
}

/// DOM-style key name for a winit logical key.
pub fn key_name(key: &Key) -> Option<String> {
    match key {
        Key::Character(s) => Some(s.to_string()),
        Key::Named(named) => {
            let name = match named {
                NamedKey::ArrowUp => "ArrowUp",
                NamedKey::ArrowDown => "ArrowDown",
                NamedKey::ArrowLeft => "ArrowLeft",
                NamedKey::ArrowRight => "ArrowRight",
                NamedKey::Escape => "Escape",
                NamedKey::Enter => "Enter",
                NamedKey::Backspace => "Backspace",
                _ => return None,
            };
            Some(name.to_string())
        }
        _ => None,
    }
}
