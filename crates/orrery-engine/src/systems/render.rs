use crate::assets::images::ImageRegistry;
use crate::components::node::{NodeKind, SceneNode};
use crate::renderer::instance::{LineRange, SphereBuffer, SphereInstance};

/// Build the sphere instance buffer from nodes that are in the scene.
pub fn build_sphere_buffer<'a>(
    nodes: impl Iterator<Item = &'a SceneNode>,
    images: &ImageRegistry,
    buffer: &mut SphereBuffer,
) {
    buffer.clear();
    for node in nodes {
        if !node.in_scene {
            continue;
        }
        let desc = match &node.kind {
            NodeKind::Sphere(desc) => desc,
            NodeKind::Polyline(_) => continue,
        };
        buffer.push(SphereInstance {
            x: node.pos.x,
            y: node.pos.y,
            z: node.pos.z,
            radius: desc.radius,
            rot_x: node.rotation.x,
            rot_y: node.rotation.y,
            rot_z: node.rotation.z,
            surface: images.slot(desc.surface),
            relief: images.slot(desc.relief),
            _pad0: 0.0,
            _pad1: 0.0,
            _pad2: 0.0,
        });
    }
}

/// Collect the vertex ranges of polylines that are in the scene.
pub fn build_line_ranges<'a>(nodes: impl Iterator<Item = &'a SceneNode>, ranges: &mut Vec<LineRange>) {
    ranges.clear();
    ranges.extend(nodes.filter(|n| n.in_scene).filter_map(|n| match n.kind {
        NodeKind::Polyline(range) => Some(range),
        NodeKind::Sphere(_) => None,
    }));
}
