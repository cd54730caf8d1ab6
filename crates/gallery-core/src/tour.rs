//! Autoplay tour over a product's (variant, color) pairs.
//!
//! The tour is an explicit ordered list of steps walked by a single cursor.
//! Time only moves forward through [`TourScheduler::advance`]; cancelling
//! drops the list, so a dwell that has not elapsed can never apply a step
//! afterwards.

use crate::catalog::Product;
use crate::constants::*;
use crate::view::ViewState;
use smallvec::SmallVec;
use std::time::Duration;

/// One (variant, color) assignment and how long it holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TourStep {
    pub variant_index: usize,
    pub color_index: usize,
    pub dwell: Duration,
    pub is_new_variant: bool,
}

#[derive(Clone, Debug)]
pub struct TourParams {
    pub model_dwell: Duration,
    pub color_dwell: Duration,
    pub grace: Duration,
}

impl Default for TourParams {
    fn default() -> Self {
        Self {
            model_dwell: Duration::from_millis(TOUR_MODEL_DWELL_MS),
            color_dwell: Duration::from_millis(TOUR_COLOR_DWELL_MS),
            grace: Duration::from_millis(TOUR_GRACE_MS),
        }
    }
}

/// Flatten `layout` (colors per variant) into steps, skipping every pair at or
/// before `(from_variant, from_color)`. `from_color: None` keeps all colors of
/// `from_variant`.
pub fn plan_steps(
    layout: &[usize],
    from_variant: usize,
    from_color: Option<usize>,
    params: &TourParams,
) -> Vec<TourStep> {
    let mut steps = Vec::new();
    for (v, &colors) in layout.iter().enumerate() {
        if v < from_variant {
            continue;
        }
        for c in 0..colors {
            if v == from_variant && from_color.is_some_and(|fc| c <= fc) {
                continue;
            }
            let is_new_variant = c == 0;
            steps.push(TourStep {
                variant_index: v,
                color_index: c,
                dwell: if is_new_variant {
                    params.model_dwell
                } else {
                    params.color_dwell
                },
                is_new_variant,
            });
        }
    }
    steps
}

/// Snapshot of the scheduler for the view layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TourState {
    pub running: bool,
    /// Index into the current plan of the step last applied.
    pub current_step: Option<usize>,
    pub start_variant: usize,
    pub start_color: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Stopped,
    Dwelling { remaining: Duration },
    Grace { remaining: Duration },
}

pub struct TourScheduler {
    pub params: TourParams,
    layout: SmallVec<[usize; 8]>,
    plan: Vec<TourStep>,
    cursor: usize,
    phase: Phase,
    state: TourState,
    laps: u32,
}

impl TourScheduler {
    pub fn new(product: &Product, params: TourParams) -> Self {
        Self {
            params,
            layout: product.color_layout().into_iter().collect(),
            plan: Vec::new(),
            cursor: 0,
            phase: Phase::Stopped,
            state: TourState::default(),
            laps: 0,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase != Phase::Stopped
    }

    pub fn state(&self) -> TourState {
        self.state
    }

    /// Steps of the current plan (applied and pending).
    pub fn plan(&self) -> &[TourStep] {
        &self.plan
    }

    /// Steps still waiting to be applied.
    pub fn pending(&self) -> &[TourStep] {
        self.plan.get(self.cursor + 1..).unwrap_or(&[])
    }

    pub fn in_grace(&self) -> bool {
        matches!(self.phase, Phase::Grace { .. })
    }

    /// Number of times the tour looped back to the start on its own.
    pub fn laps(&self) -> u32 {
        self.laps
    }

    /// Start a tour after `(from_variant, from_color)`, cancelling any running one.
    /// The first step applies immediately.
    pub fn start(&mut self, from_variant: usize, from_color: Option<usize>, view: &mut ViewState) {
        if self.is_running() {
            self.cancel();
        }
        self.plan = plan_steps(&self.layout, from_variant, from_color, &self.params);
        self.cursor = 0;
        self.state = TourState {
            running: true,
            current_step: None,
            start_variant: from_variant,
            start_color: from_color,
        };
        log::info!(
            "[tour] start after ({from_variant}, {from_color:?}): {} step(s)",
            self.plan.len()
        );
        match self.plan.first().copied() {
            Some(step) => self.apply(0, step, view),
            None => self.enter_grace(),
        }
    }

    /// Drop all pending steps. The view keeps whatever step applied last.
    pub fn cancel(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        log::info!(
            "[tour] cancelled at step {:?} of {}",
            self.state.current_step,
            self.plan.len()
        );
        self.plan.clear();
        self.cursor = 0;
        self.phase = Phase::Stopped;
        self.state.running = false;
        true
    }

    /// Reset to a stopped tour with no history.
    pub fn reset(&mut self) {
        self.plan.clear();
        self.cursor = 0;
        self.phase = Phase::Stopped;
        self.state = TourState::default();
        self.laps = 0;
    }

    /// Let `dt` of simulated time pass, applying every step whose dwell
    /// elapsed and looping after the grace delay.
    pub fn advance(&mut self, dt: Duration, view: &mut ViewState) {
        let mut budget = dt;
        let mut restarted_at: Option<Duration> = None;
        loop {
            match self.phase {
                Phase::Stopped => return,
                Phase::Dwelling { remaining } => {
                    if budget < remaining {
                        self.phase = Phase::Dwelling {
                            remaining: remaining - budget,
                        };
                        return;
                    }
                    budget -= remaining;
                    let next = self.cursor + 1;
                    match self.plan.get(next).copied() {
                        Some(step) => self.apply(next, step, view),
                        None => {
                            log::info!("[tour] completed {} step(s)", self.plan.len());
                            self.enter_grace();
                        }
                    }
                }
                Phase::Grace { remaining } => {
                    if budget < remaining {
                        self.phase = Phase::Grace {
                            remaining: remaining - budget,
                        };
                        return;
                    }
                    budget -= remaining;
                    if restarted_at == Some(budget) {
                        // A full lap took no time; wait for the next advance
                        self.phase = Phase::Grace {
                            remaining: Duration::ZERO,
                        };
                        return;
                    }
                    restarted_at = Some(budget);
                    self.laps += 1;
                    log::info!("[tour] restarting from the first step");
                    self.phase = Phase::Stopped;
                    self.start(0, None, view);
                    if self.plan.is_empty() {
                        // Nothing to show; stop instead of spinning on grace delays
                        self.cancel();
                        return;
                    }
                }
            }
        }
    }

    fn apply(&mut self, index: usize, step: TourStep, view: &mut ViewState) {
        self.cursor = index;
        view.apply_tour_step(step.variant_index, step.color_index);
        self.state.current_step = Some(index);
        self.phase = Phase::Dwelling {
            remaining: step.dwell,
        };
        log::debug!(
            "[tour] step {index}: variant {} color {} for {:?}",
            step.variant_index,
            step.color_index,
            step.dwell
        );
    }

    fn enter_grace(&mut self) {
        self.phase = Phase::Grace {
            remaining: self.params.grace,
        };
    }
}
