use crate::api::types::VisualHandle;
use crate::components::node::SceneNode;

/// Simple node storage using a flat Vec.
/// Scenes here hold tens of nodes, so linear lookups are fine.
pub struct Scene {
    nodes: Vec<SceneNode>,
}

impl Scene {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn spawn(&mut self, node: SceneNode) {
        self.nodes.push(node);
    }

    /// Remove a node by ID. Returns the removed node if found.
    pub fn despawn(&mut self, id: VisualHandle) -> Option<SceneNode> {
        let idx = self.nodes.iter().position(|n| n.id == id)?;
        Some(self.nodes.remove(idx))
    }

    pub fn get(&self, id: VisualHandle) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn get_mut(&mut self, id: VisualHandle) -> Option<&mut SceneNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Iterate in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &SceneNode> {
        self.nodes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut SceneNode> {
        self.nodes.iter_mut()
    }

    pub fn find_by_tag(&self, tag: &str) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.tag == tag)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::mesh::SphereDesc;
    use crate::components::node::NodeKind;
    use glam::Vec3;

    fn sphere(id: u32) -> SceneNode {
        SceneNode::new(VisualHandle(id), NodeKind::Sphere(SphereDesc::new(1.0)))
    }

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        scene.spawn(sphere(1).with_pos(Vec3::new(10.0, 0.0, 20.0)));
        let n = scene.get(VisualHandle(1)).unwrap();
        assert_eq!(n.pos, Vec3::new(10.0, 0.0, 20.0));
        assert!(!n.in_scene);
    }

    #[test]
    fn despawn_keeps_creation_order() {
        let mut scene = Scene::new();
        for id in 1..=3 {
            scene.spawn(sphere(id));
        }
        scene.despawn(VisualHandle(1));
        let ids: Vec<_> = scene.iter().map(|n| n.id.0).collect();
        assert_eq!(ids, [2, 3]);
        assert!(scene.despawn(VisualHandle(1)).is_none());
    }

    #[test]
    fn find_by_tag() {
        let mut scene = Scene::new();
        scene.spawn(sphere(1).with_tag("Sun"));
        scene.spawn(sphere(2).with_tag("Earth"));
        assert_eq!(scene.find_by_tag("Earth").map(|n| n.id), Some(VisualHandle(2)));
    }
}
