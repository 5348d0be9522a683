//! Headless render backend.
//!
//! Keeps the scene as plain data and packs it into flat, `bytemuck`-friendly
//! buffers every drawn frame. The browser host reads those buffers through
//! the `orrery-web` exports and issues the actual GPU calls.

use glam::Vec3;

use crate::api::config::SimConfig;
use crate::api::error::{RenderError, RenderResult};
use crate::api::types::{Axis, Color, ImageHandle, ImageRef, VisualHandle};
use crate::assets::images::ImageRegistry;
use crate::components::mesh::SphereDesc;
use crate::components::node::{NodeKind, SceneNode};
use crate::core::scene::Scene;
use crate::renderer::camera::{CameraState, CameraUniform};
use crate::renderer::instance::{LineRange, LineVertex, SphereBuffer, SphereInstance};
use crate::renderer::traits::{DrawStats, RenderBackend};
use crate::systems::render::{build_line_ranges, build_sphere_buffer};

/// Upper bound on eager buffer reservation. Larger capacities grow on demand.
const PREALLOC_LIMIT: usize = 256;

pub struct SceneGraph {
    scene: Scene,
    images: ImageRegistry,
    spheres: SphereBuffer,
    /// Vertex pool for every live polyline, packed in creation order.
    line_vertices: Vec<LineVertex>,
    line_ranges: Vec<LineRange>,
    camera: CameraUniform,
    background: Option<ImageHandle>,
    ambient: Color,
    next_id: u32,
    sphere_count: usize,
    max_spheres: usize,
    max_line_vertices: usize,
    frame: u64,
}

impl SceneGraph {
    pub fn with_capacity(max_spheres: usize, max_line_vertices: usize) -> Self {
        Self {
            scene: Scene::with_capacity(max_spheres.saturating_mul(2).min(PREALLOC_LIMIT)),
            images: ImageRegistry::new(),
            spheres: SphereBuffer::with_capacity(max_spheres.min(PREALLOC_LIMIT)),
            line_vertices: Vec::new(),
            line_ranges: Vec::new(),
            camera: CameraUniform::default(),
            background: None,
            ambient: Color::WHITE,
            next_id: 1,
            sphere_count: 0,
            max_spheres,
            max_line_vertices,
            frame: 0,
        }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::with_capacity(config.max_spheres, config.max_line_vertices)
    }

    /// Drop a polyline's vertices and shift the ranges packed after it.
    fn release_line_range(&mut self, range: LineRange) {
        let start = range.start as usize;
        self.line_vertices.drain(start..start + range.count as usize);
        for node in self.scene.iter_mut() {
            if let NodeKind::Polyline(r) = &mut node.kind {
                if r.start > range.start {
                    r.start -= range.count;
                }
            }
        }
    }

    fn next_handle(&mut self) -> VisualHandle {
        let id = VisualHandle(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn node(&self, handle: VisualHandle) -> Option<&SceneNode> {
        self.scene.get(handle)
    }

    pub fn images(&self) -> &ImageRegistry {
        &self.images
    }

    /// Host callback: an image finished loading (or failed).
    pub fn image_loaded(&mut self, handle: ImageHandle, ok: bool) {
        if ok {
            self.images.mark_ready(handle);
        } else {
            self.images.mark_failed(handle, "host reported a load error");
        }
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn background_slot(&self) -> f32 {
        self.images.slot(self.background)
    }

    pub fn ambient(&self) -> Color {
        self.ambient
    }

    // ---- Buffer accessors for host reads ----

    pub fn spheres(&self) -> &[SphereInstance] {
        &self.spheres.instances
    }

    pub fn spheres_ptr(&self) -> *const f32 {
        self.spheres.instances_ptr()
    }

    pub fn sphere_count(&self) -> u32 {
        self.spheres.instance_count()
    }

    pub fn line_vertices(&self) -> &[LineVertex] {
        &self.line_vertices
    }

    pub fn line_vertices_ptr(&self) -> *const f32 {
        self.line_vertices.as_ptr() as *const f32
    }

    pub fn line_vertex_count(&self) -> u32 {
        self.line_vertices.len() as u32
    }

    pub fn line_ranges(&self) -> &[LineRange] {
        &self.line_ranges
    }

    pub fn line_ranges_ptr(&self) -> *const u32 {
        self.line_ranges.as_ptr() as *const u32
    }

    pub fn line_range_count(&self) -> u32 {
        self.line_ranges.len() as u32
    }

    pub fn camera(&self) -> &CameraUniform {
        &self.camera
    }

    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera as *const CameraUniform as *const f32
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::from_config(&SimConfig::default())
    }
}

impl RenderBackend for SceneGraph {
    fn backend(&self) -> &'static str {
        "scene-graph"
    }

    fn load_image(&mut self, image: &ImageRef) -> ImageHandle {
        self.images.request(image)
    }

    fn create_sphere(&mut self, desc: &SphereDesc) -> RenderResult<VisualHandle> {
        if self.sphere_count >= self.max_spheres {
            return Err(RenderError::CapacityExceeded {
                kind: "sphere",
                capacity: self.max_spheres,
            });
        }
        if !(desc.radius.is_finite() && desc.radius > 0.0) {
            return Err(RenderError::ResourceCreation(format!(
                "sphere radius must be positive, got {}",
                desc.radius
            )));
        }
        let id = self.next_handle();
        self.scene
            .spawn(SceneNode::new(id, NodeKind::Sphere(desc.clone())).with_tag(desc.label.clone()));
        self.sphere_count += 1;
        Ok(id)
    }

    fn create_polyline(&mut self, points: &[Vec3], color: Color) -> RenderResult<VisualHandle> {
        if points.len() < 2 {
            return Err(RenderError::ResourceCreation(format!(
                "polyline needs at least 2 points, got {}",
                points.len()
            )));
        }
        if self.line_vertices.len() + points.len() > self.max_line_vertices {
            return Err(RenderError::CapacityExceeded {
                kind: "line vertex",
                capacity: self.max_line_vertices,
            });
        }
        let range = LineRange {
            start: self.line_vertices.len() as u32,
            count: points.len() as u32,
        };
        self.line_vertices.extend(points.iter().map(|p| LineVertex {
            x: p.x,
            y: p.y,
            z: p.z,
            r: color.r,
            g: color.g,
            b: color.b,
        }));
        let id = self.next_handle();
        self.scene.spawn(SceneNode::new(id, NodeKind::Polyline(range)));
        Ok(id)
    }

    fn add_to_scene(&mut self, handle: VisualHandle) {
        match self.scene.get_mut(handle) {
            Some(node) => node.in_scene = true,
            None => log::debug!("add_to_scene: unknown handle {:?}", handle),
        }
    }

    fn remove_from_scene(&mut self, handle: VisualHandle) {
        match self.scene.despawn(handle).map(|node| node.kind) {
            Some(NodeKind::Sphere(_)) => self.sphere_count -= 1,
            Some(NodeKind::Polyline(range)) => self.release_line_range(range),
            None => log::debug!("remove_from_scene: unknown handle {:?}", handle),
        }
    }

    fn set_position(&mut self, handle: VisualHandle, position: Vec3) {
        if let Some(node) = self.scene.get_mut(handle) {
            node.pos = position;
        }
    }

    fn set_rotation(&mut self, handle: VisualHandle, axis: Axis, radians: f32) {
        if let Some(node) = self.scene.get_mut(handle) {
            match axis {
                Axis::X => node.rotation.x = radians,
                Axis::Y => node.rotation.y = radians,
                Axis::Z => node.rotation.z = radians,
            }
        }
    }

    fn set_background(&mut self, image: ImageHandle) {
        self.background = Some(image);
    }

    fn set_ambient_light(&mut self, color: Color) {
        self.ambient = color;
    }

    fn draw_frame(&mut self, camera: &CameraState) -> RenderResult<DrawStats> {
        if !camera.is_valid() {
            return Err(RenderError::Draw(format!("degenerate camera state {camera:?}")));
        }
        self.camera = camera.uniform();
        build_sphere_buffer(self.scene.iter(), &self.images, &mut self.spheres);
        build_line_ranges(self.scene.iter(), &mut self.line_ranges);
        self.frame += 1;

        Ok(DrawStats {
            frame: self.frame,
            spheres: self.spheres.instance_count(),
            lines: self.line_ranges.len() as u32,
        })
    }
}
