use bytemuck::{Pod, Zeroable};

/// Per-sphere render data read by the host renderer.
/// Wire format: 12 floats = 48 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct SphereInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub radius: f32,
    /// Euler rotation (radians, XYZ order).
    pub rot_x: f32,
    pub rot_y: f32,
    pub rot_z: f32,
    /// Image slot of the color texture, -1 = untextured.
    pub surface: f32,
    /// Image slot of the normal map, -1 = none.
    pub relief: f32,
    pub _pad0: f32,
    pub _pad1: f32,
    pub _pad2: f32,
}

impl SphereInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Sphere instances rebuilt every drawn frame.
pub struct SphereBuffer {
    pub instances: Vec<SphereInstance>,
}

impl SphereBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: SphereInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for host reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for SphereBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Polyline vertex: position + color. 6 floats.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl LineVertex {
    pub const FLOATS: usize = 6;
}

/// A drawable polyline: `count` consecutive vertices starting at `start`,
/// drawn as a line strip.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct LineRange {
    pub start: u32,
    pub count: u32,
}
