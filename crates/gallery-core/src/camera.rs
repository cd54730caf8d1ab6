//! Camera state and the follow/focus blending director.
//!
//! The director never rotates the world: the eye is damped toward a target
//! position each tick and the look-at point is applied directly.

use crate::constants::*;
use crate::focus::FocusTarget;
use glam::{Mat4, Vec3};

/// Eye, look-at point and lens of the scene camera. The renderer receives
/// the combined matrix through the scene packet.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: initial_camera_eye(),
            target: Vec3::new(0.0, FOLLOW_LOOK_HEIGHT, 0.0),
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// World to clip space, right-handed, for the current aspect.
    pub fn view_projection(&self) -> Mat4 {
        let proj = Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar);
        proj * Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Follow-mode offsets and damping factors.
#[derive(Clone, Debug)]
pub struct CameraParams {
    pub lateral_factor: f32,
    pub height: f32,
    pub back: f32,
    pub look_height: f32,
    pub follow_lerp: f32,
    pub focus_lerp: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            lateral_factor: FOLLOW_LATERAL_FACTOR,
            height: FOLLOW_HEIGHT,
            back: FOLLOW_BACK,
            look_height: FOLLOW_LOOK_HEIGHT,
            follow_lerp: FOLLOW_LERP,
            focus_lerp: FOCUS_LERP,
        }
    }
}

impl CameraParams {
    /// World-space eye target behind and above the player; it never spins with
    /// the player's facing.
    pub fn follow_eye(&self, player: Vec3) -> Vec3 {
        Vec3::new(
            player.x * self.lateral_factor,
            player.y + self.height,
            player.z + self.back,
        )
    }

    pub fn follow_look_at(&self, player: Vec3) -> Vec3 {
        Vec3::new(player.x, player.y + self.look_height, player.z)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CameraMode {
    #[default]
    Follow,
    Focus,
}

pub struct CameraDirector {
    pub params: CameraParams,
    camera: Camera,
    mode: CameraMode,
}

impl CameraDirector {
    pub fn new(params: CameraParams) -> Self {
        Self {
            params,
            camera: Camera::default(),
            mode: CameraMode::Follow,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.camera.aspect = aspect;
        }
    }

    pub fn reset(&mut self) {
        self.camera = Camera::default();
        self.mode = CameraMode::Follow;
    }

    /// Advance one tick. Mode switches immediately with the focus slot; only
    /// the eye position is damped.
    pub fn tick(&mut self, player: Vec3, focus: Option<&FocusTarget>) -> CameraMode {
        let (eye_target, look_at, factor, mode) = match focus {
            Some(f) => (f.cam_target, f.look_at, self.params.focus_lerp, CameraMode::Focus),
            None => (
                self.params.follow_eye(player),
                self.params.follow_look_at(player),
                self.params.follow_lerp,
                CameraMode::Follow,
            ),
        };
        self.camera.eye = self.camera.eye.lerp(eye_target, factor);
        self.camera.target = look_at;
        self.mode = mode;
        mode
    }
}
