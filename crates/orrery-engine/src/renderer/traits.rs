//! Capability contracts between the simulator and whatever draws the pixels.
//!
//! The simulator never touches a graphics API. It asks a `RenderBackend` to
//! create visuals, moves them, and requests a draw once per frame. The
//! in-crate `SceneGraph` implements the trait headlessly and exposes flat
//! buffers for the browser host; a native GPU backend (wgpu, Metal, ...)
//! would implement it directly.

use glam::Vec3;

use crate::api::error::RenderResult;
use crate::api::types::{Axis, Color, ImageHandle, ImageRef, VisualHandle};
use crate::components::mesh::SphereDesc;
use crate::renderer::camera::CameraState;

/// Counters from a completed draw call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    /// Frames drawn so far, including this one.
    pub frame: u64,
    /// Spheres submitted this frame.
    pub spheres: u32,
    /// Polylines submitted this frame.
    pub lines: u32,
}

/// Rendering-engine collaborator.
///
/// # Example Implementation
///
/// ```ignore
/// struct WgpuBackend { device: wgpu::Device, queue: wgpu::Queue, /* ... */ }
///
/// impl RenderBackend for WgpuBackend {
///     fn backend(&self) -> &'static str { "wgpu" }
///     fn create_sphere(&mut self, desc: &SphereDesc) -> RenderResult<VisualHandle> {
///         // Upload a UV sphere mesh, bind textures...
///     }
///     // ...
/// }
/// ```
pub trait RenderBackend {
    /// Backend identifier (e.g., "scene-graph", "wgpu").
    fn backend(&self) -> &'static str;

    /// Start loading an image. Must not block; the returned handle may be used
    /// before the pixels arrive (the surface renders untextured meanwhile).
    fn load_image(&mut self, image: &ImageRef) -> ImageHandle;

    fn create_sphere(&mut self, desc: &SphereDesc) -> RenderResult<VisualHandle>;

    fn create_polyline(&mut self, points: &[Vec3], color: Color) -> RenderResult<VisualHandle>;

    /// Make a created visual part of the drawn scene.
    fn add_to_scene(&mut self, handle: VisualHandle);

    /// Stop drawing a visual and release its resources. The handle is
    /// invalid afterwards.
    fn remove_from_scene(&mut self, handle: VisualHandle);

    fn set_position(&mut self, handle: VisualHandle, position: Vec3);

    /// Set the absolute rotation about one axis.
    fn set_rotation(&mut self, handle: VisualHandle, axis: Axis, radians: f32);

    fn set_background(&mut self, image: ImageHandle);

    fn set_ambient_light(&mut self, color: Color);

    /// Draw every visual currently in the scene from `camera`.
    fn draw_frame(&mut self, camera: &CameraState) -> RenderResult<DrawStats>;
}

/// Camera/interaction controller, polled once per frame before drawing.
pub trait CameraController {
    fn update(&mut self, frame_dt: f32) -> CameraState;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_stats_default_is_zeroed() {
        let stats = DrawStats::default();
        assert_eq!(stats.frame, 0);
        assert_eq!(stats.spheres, 0);
        assert_eq!(stats.lines, 0);
    }
}
