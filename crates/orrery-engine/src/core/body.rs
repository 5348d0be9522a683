use glam::{DVec3, Vec3};

use crate::api::types::VisualHandle;
use crate::core::orbit::{self, OrbitPath, ORBIT_PATH_SEGMENTS};
use crate::core::registry::BodyDefinition;

/// Cosmetic spin of a body's mesh about +Y, in radians per tick.
/// Independent of orbital speed.
pub const SELF_ROTATION_STEP: f64 = 0.001;

/// Mutable orbital state for one body. Owned by the simulation context.
#[derive(Debug, Clone)]
pub struct SimulatedBody {
    name: String,
    distance: f64,
    /// Orbital phase in [0, 2π).
    angle: f64,
    /// Radians per tick. Fixed at creation.
    angular_speed: f64,
    /// Derived from `angle` after every advance. `y` is always 0.
    position: DVec3,
    /// Cumulative mesh rotation about +Y. Not wrapped.
    spin: f64,
    orbit_path: OrbitPath,
    pub(crate) mesh: Option<VisualHandle>,
    pub(crate) orbit_line: Option<VisualHandle>,
}

impl SimulatedBody {
    /// Build the state for a validated definition.
    pub fn new(def: &BodyDefinition, initial_angle: f64, time_constant: f64) -> Self {
        let angle = orbit::wrap_angle(initial_angle);
        let distance = def.distance_from_center;
        Self {
            name: def.name.clone(),
            distance,
            angle,
            angular_speed: time_constant / def.orbital_period,
            position: Self::position_at(angle, distance),
            spin: 0.0,
            orbit_path: OrbitPath::sample(distance, ORBIT_PATH_SEGMENTS),
            mesh: None,
            orbit_line: None,
        }
    }

    fn position_at(angle: f64, distance: f64) -> DVec3 {
        let (x, z) = orbit::orbital_position(angle, distance);
        DVec3::new(x, 0.0, z)
    }

    /// Advance the orbital phase by `delta_phase` radians and spin the mesh by
    /// one step.
    pub fn advance(&mut self, delta_phase: f64) {
        self.angle = orbit::wrap_angle(self.angle + delta_phase);
        self.position = Self::position_at(self.angle, self.distance);
        self.spin += SELF_ROTATION_STEP;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn angular_speed(&self) -> f64 {
        self.angular_speed
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Position converted for a render backend.
    pub fn render_position(&self) -> Vec3 {
        self.position.as_vec3()
    }

    pub fn spin(&self) -> f64 {
        self.spin
    }

    pub fn orbit_path(&self) -> &OrbitPath {
        &self.orbit_path
    }

    /// Mesh handle, or `None` if the renderer could not create it.
    pub fn mesh(&self) -> Option<VisualHandle> {
        self.mesh
    }

    pub fn orbit_line(&self) -> Option<VisualHandle> {
        self.orbit_line
    }
}
