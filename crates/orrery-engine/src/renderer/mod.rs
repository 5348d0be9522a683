pub mod camera;
pub mod instance;
pub mod scene_graph;
pub mod traits;

// Re-export key types for convenient access
pub use traits::{CameraController, DrawStats, RenderBackend};
