use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::traits::CameraController;

pub const DEFAULT_FOV_DEGREES: f32 = 75.0;
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 10_000.0;
/// Initial distance from the target, looking down -Z.
pub const DEFAULT_DISTANCE: f32 = 30.0;

/// Keeps the polar angle off the poles so `look_at` stays well defined.
const POLAR_EPSILON: f32 = 1e-4;

/// Snapshot of a perspective camera, handed to `RenderBackend::draw_frame`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_projection: [[f32; 4]; 4],
    /// Eye position, w = 1.
    pub eye: [f32; 4],
}

impl CameraUniform {
    pub const FLOATS: usize = 20;
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view_projection: Mat4::IDENTITY.to_cols_array_2d(),
            eye: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

impl CameraState {
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_projection: self.view_projection().to_cols_array_2d(),
            eye: self.eye.extend(1.0).to_array(),
        }
    }

    /// Whether the matrices can be built from this state.
    pub fn is_valid(&self) -> bool {
        self.eye.is_finite()
            && self.target.is_finite()
            && self.up.is_finite()
            && self.fov_y.is_finite()
            && self.fov_y > 0.0
            && self.aspect.is_finite()
            && self.aspect > 0.0
            && self.near > 0.0
            && self.far > self.near
            && self.eye.distance_squared(self.target) > 0.0
    }
}

/// Accumulated, not yet applied camera motion.
#[derive(Debug, Clone, Copy)]
struct PendingMotion {
    azimuth: f32,
    polar: f32,
    /// Multiplicative dolly factor.
    scale: f32,
}

impl Default for PendingMotion {
    fn default() -> Self {
        Self {
            azimuth: 0.0,
            polar: 0.0,
            scale: 1.0,
        }
    }
}

/// Orbit-style camera: drag rotates around the target, wheel dollies in/out.
/// Position is kept in spherical coordinates (radius, azimuth around +Y,
/// polar angle from +Y).
pub struct OrbitCamera {
    pub target: Vec3,
    radius: f32,
    azimuth: f32,
    polar: f32,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    /// 0.0 = motion applied at once; closer to 1.0 = slower, smoother.
    damping: f32,
    viewport: [f32; 2],
    pending: PendingMotion,
    drag: Option<[f32; 2]>,
    input: InputQueue,
}

impl OrbitCamera {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            target: Vec3::ZERO,
            radius: DEFAULT_DISTANCE,
            azimuth: 0.0,
            polar: std::f32::consts::FRAC_PI_2,
            fov_y: DEFAULT_FOV_DEGREES.to_radians(),
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            min_distance: 1.0,
            max_distance: DEFAULT_FAR * 0.5,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            damping: 0.0,
            viewport: [viewport_width.max(1.0), viewport_height.max(1.0)],
            pending: PendingMotion::default(),
            drag: None,
            input: InputQueue::new(),
        }
    }

    /// Set damping factor for camera motion.
    /// 0.0 = instant, 0.9 = very smooth/slow.
    pub fn set_damping(&mut self, damping: f32) {
        self.damping = damping.clamp(0.0, 0.99);
    }

    pub fn with_distance(mut self, distance: f32) -> Self {
        self.radius = distance.clamp(self.min_distance, self.max_distance);
        self
    }

    /// Queue an input event. Applied on the next `update`.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    pub fn distance(&self) -> f32 {
        self.radius
    }

    pub fn aspect(&self) -> f32 {
        self.viewport[0] / self.viewport[1]
    }

    pub fn eye(&self) -> Vec3 {
        let sin_polar = self.polar.sin();
        self.target
            + self.radius
                * Vec3::new(
                    sin_polar * self.azimuth.sin(),
                    self.polar.cos(),
                    sin_polar * self.azimuth.cos(),
                )
    }

    pub fn state(&self) -> CameraState {
        CameraState {
            eye: self.eye(),
            target: self.target,
            up: Vec3::Y,
            fov_y: self.fov_y,
            aspect: self.aspect(),
            near: self.near,
            far: self.far,
        }
    }

    fn zoom_scale(&self) -> f32 {
        0.95f32.powf(self.zoom_speed)
    }

    fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { x, y } => self.drag = Some([x, y]),
            InputEvent::PointerMove { x, y } => {
                if let Some([last_x, last_y]) = self.drag {
                    let per_pixel = std::f32::consts::TAU / self.viewport[1] * self.rotate_speed;
                    self.pending.azimuth -= (x - last_x) * per_pixel;
                    self.pending.polar -= (y - last_y) * per_pixel;
                    self.drag = Some([x, y]);
                }
            }
            InputEvent::PointerUp { .. } => self.drag = None,
            InputEvent::Wheel { delta } => {
                if delta > 0.0 {
                    self.pending.scale /= self.zoom_scale();
                } else if delta < 0.0 {
                    self.pending.scale *= self.zoom_scale();
                }
            }
            InputEvent::Resize { width, height } => {
                self.viewport = [width.max(1.0), height.max(1.0)];
            }
        }
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

impl CameraController for OrbitCamera {
    fn update(&mut self, _frame_dt: f32) -> CameraState {
        for event in self.input.drain() {
            self.handle_event(event);
        }

        let factor = if self.damping > 0.0 { 1.0 - self.damping } else { 1.0 };
        self.azimuth += self.pending.azimuth * factor;
        self.polar = (self.polar + self.pending.polar * factor)
            .clamp(POLAR_EPSILON, std::f32::consts::PI - POLAR_EPSILON);
        self.radius = (self.radius * self.pending.scale).clamp(self.min_distance, self.max_distance);

        if self.damping > 0.0 {
            self.pending.azimuth *= self.damping;
            self.pending.polar *= self.damping;
        } else {
            self.pending.azimuth = 0.0;
            self.pending.polar = 0.0;
        }
        self.pending.scale = 1.0;

        self.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_eye_looks_down_negative_z() {
        let mut cam = OrbitCamera::default();
        let state = cam.update(0.016);
        assert!((state.eye - Vec3::new(0.0, 0.0, 30.0)).length() < 1e-3);
        assert!((state.fov_y - 75f32.to_radians()).abs() < 1e-6);
        assert!(state.is_valid());
    }

    #[test]
    fn target_projects_to_screen_center() {
        let state = OrbitCamera::default().state();
        let clip = state.view_projection() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!((clip.x / clip.w).abs() < 1e-5);
        assert!((clip.y / clip.w).abs() < 1e-5);
    }

    #[test]
    fn drag_rotates_around_target() {
        let mut cam = OrbitCamera::new(800.0, 600.0);
        cam.push_input(InputEvent::PointerDown { x: 100.0, y: 100.0 });
        cam.push_input(InputEvent::PointerMove { x: 200.0, y: 100.0 });
        cam.push_input(InputEvent::PointerUp { x: 200.0, y: 100.0 });
        let state = cam.update(0.016);
        assert!(state.eye.x < 0.0, "eye = {:?}", state.eye);
        assert!((state.eye.length() - DEFAULT_DISTANCE).abs() < 1e-3);
    }

    #[test]
    fn move_without_press_does_nothing() {
        let mut cam = OrbitCamera::default();
        let before = cam.state().eye;
        cam.push_input(InputEvent::PointerMove { x: 300.0, y: 10.0 });
        assert_eq!(cam.update(0.016).eye, before);
    }

    #[test]
    fn polar_angle_is_clamped() {
        let mut cam = OrbitCamera::new(800.0, 600.0);
        cam.push_input(InputEvent::PointerDown { x: 0.0, y: 0.0 });
        cam.push_input(InputEvent::PointerMove { x: 0.0, y: 5000.0 });
        let state = cam.update(0.016);
        assert!(state.eye.is_finite());
        assert!(state.is_valid());
    }

    #[test]
    fn wheel_dollies_and_clamps() {
        let mut cam = OrbitCamera::default();
        cam.push_input(InputEvent::Wheel { delta: 1.0 });
        cam.update(0.016);
        assert!(cam.distance() > DEFAULT_DISTANCE);

        for _ in 0..500 {
            cam.push_input(InputEvent::Wheel { delta: -1.0 });
        }
        cam.update(0.016);
        assert_eq!(cam.distance(), cam.min_distance);
    }

    #[test]
    fn damping_spreads_motion_over_frames() {
        let mut cam = OrbitCamera::default();
        cam.set_damping(0.5);
        cam.push_input(InputEvent::PointerDown { x: 0.0, y: 0.0 });
        cam.push_input(InputEvent::PointerMove { x: 60.0, y: 0.0 });
        let first = cam.update(0.016).eye.x;
        let second = cam.update(0.016).eye.x;
        assert!(first < 0.0);
        assert!(second < first, "camera should keep turning: {first} -> {second}");
    }

    #[test]
    fn resize_sets_aspect() {
        let mut cam = OrbitCamera::default();
        cam.push_input(InputEvent::Resize { width: 1920.0, height: 1080.0 });
        let state = cam.update(0.016);
        assert!((state.aspect - 1920.0 / 1080.0).abs() < 1e-5);
    }

    #[test]
    fn degenerate_state_is_invalid() {
        let mut state = OrbitCamera::default().state();
        state.aspect = 0.0;
        assert!(!state.is_valid());
        let mut state = OrbitCamera::default().state();
        state.eye = Vec3::new(f32::NAN, 0.0, 0.0);
        assert!(!state.is_valid());
    }
}
