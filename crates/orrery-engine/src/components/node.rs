use glam::Vec3;

use crate::api::types::VisualHandle;
use crate::components::mesh::SphereDesc;
use crate::renderer::instance::LineRange;

/// What a node draws.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Sphere(SphereDesc),
    /// A line strip stored in the scene graph's vertex pool.
    Polyline(LineRange),
}

/// One visual in the scene graph.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub id: VisualHandle,
    /// String tag for finding nodes by name.
    pub tag: String,
    /// Only nodes added to the scene are drawn.
    pub in_scene: bool,
    /// Position in world space.
    pub pos: Vec3,
    /// Euler rotation in radians (XYZ order).
    pub rotation: Vec3,
    pub kind: NodeKind,
}

impl SceneNode {
    /// Create a node at the origin, not yet part of the drawn scene.
    pub fn new(id: VisualHandle, kind: NodeKind) -> Self {
        Self {
            id,
            tag: String::new(),
            in_scene: false,
            pos: Vec3::ZERO,
            rotation: Vec3::ZERO,
            kind,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }
}
