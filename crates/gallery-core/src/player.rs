//! Avatar movement: held-key intent integrated into a bounded corridor position.

use crate::constants::*;
use glam::Vec3;
use std::time::Duration;

/// One of the four movement directions a held key can contribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKey {
    Forward,
    Back,
    Left,
    Right,
}

impl MoveKey {
    /// Map a DOM/winit key name (case-insensitive) to a movement direction.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "w" | "arrowup" => Some(MoveKey::Forward),
            "s" | "arrowdown" => Some(MoveKey::Back),
            "a" | "arrowleft" => Some(MoveKey::Left),
            "d" | "arrowright" => Some(MoveKey::Right),
            _ => None,
        }
    }
}

/// Currently held movement keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveKeys {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveKeys {
    pub fn set(&mut self, key: MoveKey, down: bool) {
        match key {
            MoveKey::Forward => self.forward = down,
            MoveKey::Back => self.back = down,
            MoveKey::Left => self.left = down,
            MoveKey::Right => self.right = down,
        }
    }

    /// Apply a raw key name; returns false when the key isn't a movement key.
    pub fn set_key(&mut self, key: &str, down: bool) -> bool {
        match MoveKey::from_key(key) {
            Some(k) => {
                self.set(k, down);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Unit direction in the XZ plane, or zero when nothing (or only opposing keys) is held.
    pub fn intent(&self) -> Vec3 {
        let mut dir = Vec3::ZERO;
        if self.forward {
            dir.z -= 1.0;
        }
        if self.back {
            dir.z += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        dir.normalize_or_zero()
    }
}

/// Axis-aligned walkable region of the corridor (XZ plane).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CorridorBounds {
    pub x: f32,
    pub z_min: f32,
    pub z_max: f32,
}

impl Default for CorridorBounds {
    fn default() -> Self {
        Self {
            x: BOUND_X,
            z_min: BOUND_Z_MIN,
            z_max: BOUND_Z_MAX,
        }
    }
}

impl CorridorBounds {
    /// Clamp each axis independently; no diagonal rescaling.
    #[inline]
    pub fn clamp(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            p.x.clamp(-self.x, self.x),
            p.y,
            p.z.clamp(self.z_min, self.z_max),
        )
    }

    #[inline]
    pub fn contains(&self, p: Vec3) -> bool {
        p.x >= -self.x && p.x <= self.x && p.z >= self.z_min && p.z <= self.z_max
    }
}

/// How movement scales with frame time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Integration {
    /// `speed` per tick regardless of frame time. Matches the reference feel at
    /// its native frame rate and is what the parity tests use.
    FixedStep,
    /// `speed` per tick at `reference_hz`, scaled by the actual frame time.
    TimeScaled { reference_hz: f32 },
}

#[derive(Clone, Debug)]
pub struct PlayerParams {
    pub speed: f32,
    pub facing_blend: f32,
    pub bounds: CorridorBounds,
    pub integration: Integration,
    /// Keep integrating input while an exhibit holds focus.
    pub move_while_focused: bool,
}

impl Default for PlayerParams {
    fn default() -> Self {
        Self {
            speed: PLAYER_SPEED,
            facing_blend: FACING_BLEND,
            bounds: CorridorBounds::default(),
            integration: Integration::FixedStep,
            move_while_focused: false,
        }
    }
}

/// Animation the view layer should play on the avatar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayerPose {
    #[default]
    Idle,
    Walk,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlayerState {
    pub position: Vec3,
    pub facing_angle: f32,
}

pub struct PlayerController {
    pub params: PlayerParams,
    state: PlayerState,
    spawn: Vec3,
    pose: PlayerPose,
}

impl PlayerController {
    pub fn new(params: PlayerParams, spawn: Vec3) -> Self {
        let spawn = params.bounds.clamp(spawn);
        Self {
            params,
            state: PlayerState {
                position: spawn,
                facing_angle: 0.0,
            },
            spawn,
            pose: PlayerPose::Idle,
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn position(&self) -> Vec3 {
        self.state.position
    }

    pub fn pose(&self) -> PlayerPose {
        self.pose
    }

    /// Teleport (clamped); used on session entry and by tests.
    pub fn set_position(&mut self, position: Vec3) {
        self.state.position = self.params.bounds.clamp(position);
    }

    pub fn reset(&mut self) {
        self.state = PlayerState {
            position: self.spawn,
            facing_angle: 0.0,
        };
        self.pose = PlayerPose::Idle;
    }

    /// Advance one simulation tick.
    ///
    /// `intent` need not be normalised. While `focus_held` is set the
    /// controller ignores input and holds the idle pose, unless
    /// `move_while_focused` is enabled.
    pub fn tick(&mut self, intent: Vec3, focus_held: bool, dt: Duration) -> PlayerPose {
        if focus_held && !self.params.move_while_focused {
            self.pose = PlayerPose::Idle;
            return self.pose;
        }
        let dir = Vec3::new(intent.x, 0.0, intent.z).normalize_or_zero();
        if dir == Vec3::ZERO {
            self.pose = PlayerPose::Idle;
            return self.pose;
        }

        let (step_scale, blend) = match self.params.integration {
            Integration::FixedStep => (1.0, self.params.facing_blend),
            Integration::TimeScaled { reference_hz } => {
                let ticks = dt.as_secs_f32() * reference_hz.max(0.0);
                // Same per-reference-tick blend, compounded over the elapsed ticks
                let blend = 1.0 - (1.0 - self.params.facing_blend).powf(ticks);
                (ticks, blend)
            }
        };

        let next = self.state.position + dir * self.params.speed * step_scale;
        self.state.position = self.params.bounds.clamp(next);

        let heading = dir.x.atan2(dir.z);
        self.state.facing_angle += (heading - self.state.facing_angle) * blend;

        self.pose = PlayerPose::Walk;
        self.pose
    }
}
