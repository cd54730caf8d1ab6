use glam::Vec3;

// Shared tuning constants used by both web and native frontends.

// Corridor bounds (player can't walk through walls)
pub const BOUND_X: f32 = 7.2;
pub const BOUND_Z_MIN: f32 = -115.0;
pub const BOUND_Z_MAX: f32 = 0.0;

// Player movement
pub const PLAYER_SPEED: f32 = 0.1; // world units per tick
pub const FACING_BLEND: f32 = 0.15; // per-tick lerp toward the walk heading
pub const TIME_SCALED_REFERENCE_HZ: f32 = 60.0; // tick rate the fixed-step factors were tuned at

// Exhibit focus
pub const FOCUS_ENTER_DISTANCE: f32 = 5.0;
pub const FOCUS_EXIT_DISTANCE: f32 = 7.5;
pub const FOCUS_CAMERA_DISTANCE: f32 = 5.5; // along the exhibit's outward normal
pub const FOCUS_CAMERA_HEIGHT: f32 = 0.5; // above the exhibit center

// Camera
pub const FOLLOW_LATERAL_FACTOR: f32 = 0.3; // camera x tracks a fraction of player x
pub const FOLLOW_HEIGHT: f32 = 5.0;
pub const FOLLOW_BACK: f32 = 8.0;
pub const FOLLOW_LOOK_HEIGHT: f32 = 1.5;
pub const FOLLOW_LERP: f32 = 0.07;
pub const FOCUS_LERP: f32 = 0.05; // heavier than follow
pub const INITIAL_CAMERA_EYE: [f32; 3] = [0.0, 5.0, -2.0];
pub const CAMERA_FOV_DEG: f32 = 60.0; // vertical
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 200.0; // corridor is 115 deep

// Exhibit highlight
pub const HIGHLIGHT_SCALE_FOCUSED: f32 = 1.06;
pub const HIGHLIGHT_SCALE_HOVERED: f32 = 1.03;
pub const HIGHLIGHT_SCALE_IDLE: f32 = 1.0;
pub const HIGHLIGHT_LERP: f32 = 0.08;
pub const FALLBACK_HUE_STEP_DEG: u32 = 36;

// Corridor layout
pub const EXHIBIT_COUNT: usize = 10;
pub const EXHIBIT_WALL_X: f32 = 7.4;
pub const EXHIBIT_HEIGHT: f32 = 2.5;
pub const EXHIBIT_FIRST_Z: f32 = -4.0;
pub const EXHIBIT_SPACING_Z: f32 = 10.0;

// Tour
pub const TOUR_MODEL_DWELL_MS: u64 = 1600; // step that switches to a new variant
pub const TOUR_COLOR_DWELL_MS: u64 = 1000;
pub const TOUR_GRACE_MS: u64 = 2000; // idle delay before the tour loops

// Activity
pub const IDLE_THRESHOLD_MS: u64 = 5000;
pub const POLL_INTERVAL_MS: u64 = 1000;

#[inline]
pub fn initial_camera_eye() -> Vec3 {
    Vec3::from(INITIAL_CAMERA_EYE)
}
