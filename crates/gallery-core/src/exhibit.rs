//! Static exhibits along the corridor and their per-frame highlight state.

use crate::constants::*;
use crate::route::product_for_exhibit;
use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

/// A focusable point of interest mounted on a corridor wall.
///
/// `orientation` is a yaw angle (radians) about +Y; the outward normal is the
/// +Z axis rotated by it.
#[derive(Clone, Debug, PartialEq)]
pub struct Exhibit {
    pub id: u32,
    pub position: Vec3,
    pub orientation: f32,
    pub enter_distance: f32,
    pub exit_distance: f32,
}

impl Exhibit {
    pub fn new(id: u32, position: Vec3, orientation: f32) -> Self {
        Self {
            id,
            position,
            orientation,
            enter_distance: FOCUS_ENTER_DISTANCE,
            exit_distance: FOCUS_EXIT_DISTANCE,
        }
    }

    /// Id normalised into the catalog's 1..=10 range; this is the id the
    /// focus slot and navigation use.
    #[inline]
    pub fn routed_id(&self) -> u32 {
        product_for_exhibit(self.id)
    }

    #[inline]
    pub fn outward_normal(&self) -> Vec3 {
        Vec3::new(self.orientation.sin(), 0.0, self.orientation.cos())
    }

    /// Where the camera parks while this exhibit holds focus.
    pub fn camera_target(&self) -> Vec3 {
        let mut eye = self.position + self.outward_normal() * FOCUS_CAMERA_DISTANCE;
        eye.y = self.position.y + FOCUS_CAMERA_HEIGHT;
        eye
    }

    #[inline]
    pub fn distance_to(&self, point: Vec3) -> f32 {
        self.position.distance(point)
    }

    /// Panel color used while the exhibit's texture is missing or pending.
    pub fn fallback_rgb(&self) -> [f32; 3] {
        hsl_to_rgb(fallback_hue(self.routed_id()) as f32, 0.40, 0.65)
    }
}

/// Hue in degrees for the procedural fallback panel of an exhibit.
#[inline]
pub fn fallback_hue(id: u32) -> u32 {
    (id.wrapping_mul(FALLBACK_HUE_STEP_DEG)) % 360
}

/// The fixed ten-exhibit corridor: odd ids on the left wall facing +X, even
/// ids on the right wall facing -X, spaced down the -Z axis.
pub fn corridor_layout() -> Vec<Exhibit> {
    (0..EXHIBIT_COUNT)
        .map(|i| {
            let left = i % 2 == 0;
            let x = if left { -EXHIBIT_WALL_X } else { EXHIBIT_WALL_X };
            let yaw = if left { FRAC_PI_2 } else { -FRAC_PI_2 };
            let z = EXHIBIT_FIRST_Z - EXHIBIT_SPACING_Z * i as f32;
            Exhibit::new(i as u32 + 1, Vec3::new(x, EXHIBIT_HEIGHT, z), yaw)
        })
        .collect()
}

/// Frame tint palette, picked by highlight state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTint {
    pub color: [f32; 3],
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
}

pub const TINT_FOCUSED: FrameTint = FrameTint {
    color: [0.784, 0.627, 0.251],   // #C8A040
    emissive: [0.353, 0.227, 0.0], // #5A3A00
    emissive_intensity: 0.9,
};
pub const TINT_HOVERED: FrameTint = FrameTint {
    color: [0.627, 0.471, 0.157],   // #A07828
    emissive: [0.227, 0.125, 0.0], // #3A2000
    emissive_intensity: 0.6,
};
pub const TINT_IDLE: FrameTint = FrameTint {
    color: [0.478, 0.345, 0.125],  // #7A5820
    emissive: [0.102, 0.055, 0.0], // #1A0E00
    emissive_intensity: 0.4,
};

/// Smoothed display scale of one exhibit frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    pub scale: f32,
    pub tint: FrameTint,
}

impl Default for Highlight {
    fn default() -> Self {
        Self {
            scale: HIGHLIGHT_SCALE_IDLE,
            tint: TINT_IDLE,
        }
    }
}

impl Highlight {
    pub fn step(&mut self, focused: bool, hovered: bool) {
        let (target, tint) = if focused {
            (HIGHLIGHT_SCALE_FOCUSED, TINT_FOCUSED)
        } else if hovered {
            (HIGHLIGHT_SCALE_HOVERED, TINT_HOVERED)
        } else {
            (HIGHLIGHT_SCALE_IDLE, TINT_IDLE)
        };
        self.scale += (target - self.scale) * HIGHLIGHT_LERP;
        self.tint = tint;
    }
}

fn hsl_to_rgb(hue_deg: f32, s: f32, l: f32) -> [f32; 3] {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = (hue_deg.rem_euclid(360.0)) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    [r + m, g + m, b + m]
}
