pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::config::{SimConfig, TimeMode, MAX_CAPACITY};
pub use api::error::{ConfigError, RenderError, RenderResult};
pub use api::setup::SceneSetup;
pub use api::types::{Axis, Color, ImageHandle, ImageRef, VisualHandle};
pub use assets::images::{ImageRegistry, ImageStatus};
pub use components::mesh::SphereDesc;
pub use components::node::{NodeKind, SceneNode};
pub use core::angles::{AngleSequence, AngleSource, FixedAngle, UniformAngles};
pub use core::backdrop::{Backdrop, GridSpec, SunDefinition};
pub use core::body::{SimulatedBody, SELF_ROTATION_STEP};
pub use core::orbit::{orbital_position, wrap_angle, OrbitPath, ORBIT_PATH_SEGMENTS};
pub use core::registry::{BodyDefinition, BodyRegistry};
pub use core::scene::Scene;
pub use core::simulation::{tick, FrameStats, SimulationContext};
pub use core::time::{FixedTimestep, TickClock, TickPlan};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::camera::{CameraState, CameraUniform, OrbitCamera};
pub use renderer::instance::{LineRange, LineVertex, SphereBuffer, SphereInstance};
pub use renderer::scene_graph::SceneGraph;
pub use renderer::traits::{CameraController, DrawStats, RenderBackend};
