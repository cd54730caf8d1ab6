//! Session-owned context objects.
//!
//! [`GallerySession`] runs the per-frame pipeline (player, focus arbiter,
//! camera, in that order). [`ViewerSession`] owns the product viewer's tour
//! and activity timers. Neither holds hidden globals; the front-ends create
//! one per session and drop it on teardown.

use crate::activity::{ActivityKind, ActivityMonitor, ActivityParams};
use crate::camera::{Camera, CameraDirector, CameraMode, CameraParams};
use crate::catalog::Product;
use crate::error::Result;
use crate::exhibit::{corridor_layout, Exhibit, Highlight};
use crate::focus::{FocusState, FocusTarget, FocusTransition, ProximityFocusArbiter};
use crate::player::{PlayerController, PlayerParams, PlayerPose, PlayerState};
use crate::route::NavigationRequest;
use crate::tour::{TourParams, TourScheduler, TourState};
use crate::view::{SelectionOrigin, ViewState};
use crate::GalleryError;
use fnv::FnvHashMap;
use glam::Vec3;
use smallvec::SmallVec;
use std::time::Duration;

/// What happened during one gallery tick.
#[derive(Clone, Debug, Default)]
pub struct TickReport {
    pub pose: PlayerPose,
    pub camera_mode: CameraMode,
    pub transitions: SmallVec<[FocusTransition; 2]>,
}

pub struct GallerySession {
    exhibits: Vec<Exhibit>,
    by_id: FnvHashMap<u32, usize>,
    highlights: Vec<Highlight>,
    player: PlayerController,
    focus: FocusState,
    arbiter: ProximityFocusArbiter,
    camera: CameraDirector,
    hovered: Option<u32>,
    ticks: u64,
}

impl GallerySession {
    pub fn new(
        exhibits: Vec<Exhibit>,
        player_params: PlayerParams,
        camera_params: CameraParams,
        spawn: Vec3,
    ) -> Self {
        let highlights = vec![Highlight::default(); exhibits.len()];
        let by_id = exhibits.iter().enumerate().map(|(i, e)| (e.id, i)).collect();
        Self {
            exhibits,
            by_id,
            highlights,
            player: PlayerController::new(player_params, spawn),
            focus: FocusState::default(),
            arbiter: ProximityFocusArbiter,
            camera: CameraDirector::new(camera_params),
            hovered: None,
            ticks: 0,
        }
    }

    /// The standard ten-exhibit corridor with the player at the entrance.
    pub fn with_corridor(player_params: PlayerParams, camera_params: CameraParams) -> Self {
        Self::new(corridor_layout(), player_params, camera_params, Vec3::ZERO)
    }

    /// Return to initial values on session entry.
    pub fn reset(&mut self) {
        self.player.reset();
        self.focus.reset();
        self.camera.reset();
        self.hovered = None;
        self.ticks = 0;
        for h in &mut self.highlights {
            *h = Highlight::default();
        }
    }

    pub fn exhibits(&self) -> &[Exhibit] {
        &self.exhibits
    }

    pub fn exhibit(&self, id: u32) -> Option<&Exhibit> {
        self.by_id.get(&id).and_then(|&i| self.exhibits.get(i))
    }

    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    pub fn player(&self) -> PlayerState {
        self.player.state()
    }

    pub fn player_pose(&self) -> PlayerPose {
        self.player.pose()
    }

    pub fn player_mut(&mut self) -> &mut PlayerController {
        &mut self.player
    }

    pub fn focus(&self) -> &FocusState {
        &self.focus
    }

    pub fn camera(&self) -> &Camera {
        self.camera.camera()
    }

    pub fn camera_mode(&self) -> CameraMode {
        self.camera.mode()
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.camera.set_aspect(aspect);
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Hover is a view-layer concern (pointer picking); it only feeds highlights.
    pub fn set_hovered(&mut self, exhibit_id: Option<u32>) {
        self.hovered = exhibit_id;
    }

    /// One frame: player, then focus arbitration, then camera.
    pub fn tick(&mut self, intent: Vec3, dt: Duration) -> TickReport {
        self.ticks += 1;
        let pose = self.player.tick(intent, !self.focus.is_empty(), dt);
        let position = self.player.position();
        let transitions = self
            .arbiter
            .evaluate(position, &self.exhibits, &mut self.focus);
        let camera_mode = self.camera.tick(position, self.focus.focused());

        for (exhibit, highlight) in self.exhibits.iter().zip(self.highlights.iter_mut()) {
            let id = exhibit.routed_id();
            highlight.step(self.focus.is_focused(id), self.hovered == Some(id));
        }

        TickReport {
            pose,
            camera_mode,
            transitions,
        }
    }

    /// External exit trigger for a held focus (overlay button, Escape).
    pub fn dismiss_focus(&mut self) -> Option<FocusTarget> {
        let released = self.focus.dismiss();
        if let Some(t) = released {
            log::info!("[focus] exhibit {} dismissed", t.exhibit_id);
        }
        released
    }

    /// Navigation request for a selected exhibit (click, "View Piece").
    pub fn navigate(&self, exhibit_id: u32) -> Result<NavigationRequest> {
        if self.exhibit(exhibit_id).is_none() {
            return Err(GalleryError::UnknownExhibit(exhibit_id));
        }
        let request = NavigationRequest::for_exhibit(exhibit_id)?;
        log::info!("[route] exhibit {exhibit_id} -> {}", request.path());
        Ok(request)
    }
}

pub struct ViewerSession {
    product: Product,
    view: ViewState,
    tour: TourScheduler,
    activity: ActivityMonitor,
    ready: bool,
    now: Duration,
}

impl ViewerSession {
    pub fn new(
        product: Product,
        tour_params: TourParams,
        activity_params: ActivityParams,
        now: Duration,
    ) -> Self {
        let tour = TourScheduler::new(&product, tour_params);
        Self {
            product,
            view: ViewState::default(),
            tour,
            activity: ActivityMonitor::new(activity_params, now),
            ready: false,
            now,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn tour(&self) -> &TourScheduler {
        &self.tour
    }

    pub fn tour_state(&self) -> TourState {
        self.tour.state()
    }

    pub fn activity(&self) -> &ActivityMonitor {
        &self.activity
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Return to initial values on session entry.
    pub fn reset(&mut self, now: Duration) {
        self.tour.reset();
        self.view = ViewState::default();
        self.activity.reset(now);
        self.ready = false;
        self.now = now;
    }

    /// The entry animation finished: the viewer is interactive and the tour
    /// starts from the current selection.
    pub fn arrive(&mut self, now: Duration) {
        self.advance(now);
        self.ready = true;
        let (v, c) = self.view.selection();
        self.tour.start(v, Some(c), &mut self.view);
    }

    /// Any pointer/key input. Cancels a running tour immediately.
    pub fn record_activity(&mut self, kind: ActivityKind, now: Duration) {
        self.advance(now);
        self.activity.record(kind, now);
        if self.tour.cancel() {
            log::info!("[activity] {kind:?} cancelled the tour");
        }
    }

    /// Move simulated time to `now`: fire elapsed dwell timers, then run the
    /// idle poll if due.
    pub fn advance(&mut self, now: Duration) {
        let dt = now.saturating_sub(self.now);
        self.now = self.now.max(now);
        self.tour.advance(dt, &mut self.view);

        if let Some(idle) = self.activity.poll(self.now) {
            if self.activity.exceeds_threshold(idle) && !self.tour.is_running() && self.ready {
                log::info!("[activity] idle for {idle:?}, starting autoplay");
                let (v, c) = self.view.selection();
                self.tour.start(v, Some(c), &mut self.view);
            }
        }
    }

    /// Direct user variant pick: cancels any tour and resets the color to 0.
    pub fn select_variant(&mut self, index: usize) -> Result<()> {
        self.product.variant(index)?;
        self.tour.cancel();
        self.view.variant_index = index;
        self.view.color_index = 0;
        self.view.origin = SelectionOrigin::User;
        Ok(())
    }

    pub fn select_color(&mut self, index: usize) -> Result<()> {
        self.product.color(self.view.variant_index, index)?;
        self.tour.cancel();
        self.view.color_index = index;
        self.view.origin = SelectionOrigin::User;
        Ok(())
    }
}
