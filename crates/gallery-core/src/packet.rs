//! Flat per-frame state handed to the external renderer.
//!
//! Both packets are plain `f32` records so the web layer can copy them into a
//! `Float32Array` without any per-field marshalling.

use crate::constants::EXHIBIT_COUNT;
use crate::player::PlayerPose;
use crate::session::{GallerySession, ViewerSession};
use crate::view::SelectionOrigin;
use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ScenePacket {
    pub camera_eye: [f32; 3],
    pub camera_target: [f32; 3],
    /// Column-major view-projection matrix.
    pub view_projection: [f32; 16],
    pub player_position: [f32; 3],
    pub player_facing: f32,
    /// 0 idle, 1 walk.
    pub player_pose: f32,
    /// Routed id of the focused exhibit, 0 when the slot is empty.
    pub focused_exhibit: f32,
    pub highlight_scale: [f32; EXHIBIT_COUNT],
    pub highlight_emissive: [f32; EXHIBIT_COUNT],
    pub frame_color: [[f32; 3]; EXHIBIT_COUNT],
    pub frame_emissive: [[f32; 3]; EXHIBIT_COUNT],
    /// Panel color to draw while an exhibit's texture is missing.
    pub fallback_rgb: [[f32; 3]; EXHIBIT_COUNT],
}

impl ScenePacket {
    pub fn from_session(session: &GallerySession) -> Self {
        let camera = session.camera();
        let player = session.player();
        let mut packet = Self {
            camera_eye: camera.eye.to_array(),
            camera_target: camera.target.to_array(),
            view_projection: camera.view_projection().to_cols_array(),
            player_position: player.position.to_array(),
            player_facing: player.facing_angle,
            player_pose: match session.player_pose() {
                PlayerPose::Idle => 0.0,
                PlayerPose::Walk => 1.0,
            },
            focused_exhibit: session.focus().focused_id().unwrap_or(0) as f32,
            ..Self::default()
        };
        let exhibits = session.exhibits().iter().zip(session.highlights());
        for (i, (exhibit, h)) in exhibits.take(EXHIBIT_COUNT).enumerate() {
            packet.highlight_scale[i] = h.scale;
            packet.highlight_emissive[i] = h.tint.emissive_intensity;
            packet.frame_color[i] = h.tint.color;
            packet.frame_emissive[i] = h.tint.emissive;
            packet.fallback_rgb[i] = exhibit.fallback_rgb();
        }
        packet
    }

    #[inline]
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ViewerPacket {
    pub variant_index: f32,
    pub color_index: f32,
    /// 0 initial, 1 user, 2 tour.
    pub origin: f32,
    pub tour_running: f32,
    pub ready: f32,
    pub color_rgb: [f32; 3],
}

impl ViewerPacket {
    pub fn from_session(session: &ViewerSession) -> Self {
        let view = session.view();
        let color_rgb = view
            .color(session.product())
            .and_then(|c| c.rgb())
            .unwrap_or([1.0, 1.0, 1.0]);
        Self {
            variant_index: view.variant_index as f32,
            color_index: view.color_index as f32,
            origin: match view.origin {
                SelectionOrigin::Initial => 0.0,
                SelectionOrigin::User => 1.0,
                SelectionOrigin::Tour => 2.0,
            },
            tour_running: session.tour().is_running() as u8 as f32,
            ready: session.is_ready() as u8 as f32,
            color_rgb,
        }
    }

    #[inline]
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }
}
