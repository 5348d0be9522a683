//! Static scene decor: the sun, the background image, the ground grid and the
//! ambient light. Created once with the simulation and never updated.

use glam::Vec3;

use crate::api::types::{Color, ImageRef};

/// The central, non-orbiting sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct SunDefinition {
    /// Rendered radius (not scaled by `SimConfig::size_scale`).
    pub radius: f64,
    pub surface_image: Option<ImageRef>,
}

impl SunDefinition {
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            surface_image: None,
        }
    }

    pub fn with_surface(mut self, image: impl Into<ImageRef>) -> Self {
        self.surface_image = Some(image.into());
        self
    }
}

/// Square grid on the orbital plane, centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    /// Edge length.
    pub size: f32,
    /// Number of cells along each edge.
    pub divisions: u32,
    pub color: Color,
}

impl GridSpec {
    pub fn new(size: f32, divisions: u32) -> Self {
        Self {
            size,
            divisions,
            color: Color::from_hex(0x444444),
        }
    }

    /// Line segments making up the grid: `divisions + 1` lines along X,
    /// then `divisions + 1` lines along Z.
    pub fn segments(&self) -> Vec<[Vec3; 2]> {
        if self.divisions == 0 {
            return Vec::new();
        }
        let half = self.size / 2.0;
        let step = self.size / self.divisions as f32;
        let lines = self.divisions as usize + 1;

        let mut segments = Vec::with_capacity(lines * 2);
        for i in 0..lines {
            let z = -half + i as f32 * step;
            segments.push([Vec3::new(-half, 0.0, z), Vec3::new(half, 0.0, z)]);
        }
        for i in 0..lines {
            let x = -half + i as f32 * step;
            segments.push([Vec3::new(x, 0.0, -half), Vec3::new(x, 0.0, half)]);
        }
        segments
    }
}

/// Everything in the scene besides the orbiting bodies. Each piece is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Backdrop {
    pub sun: Option<SunDefinition>,
    pub background: Option<ImageRef>,
    pub grid: Option<GridSpec>,
    pub ambient_light: Option<Color>,
}

impl Backdrop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sun(mut self, sun: SunDefinition) -> Self {
        self.sun = Some(sun);
        self
    }

    pub fn with_background(mut self, image: impl Into<ImageRef>) -> Self {
        self.background = Some(image.into());
        self
    }

    pub fn with_grid(mut self, grid: GridSpec) -> Self {
        self.grid = Some(grid);
        self
    }

    pub fn with_ambient_light(mut self, color: Color) -> Self {
        self.ambient_light = Some(color);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_has_two_families_of_lines() {
        let grid = GridSpec::new(100.0, 4);
        let segments = grid.segments();
        assert_eq!(segments.len(), 10);
        // First line runs along X at the far -Z edge
        assert_eq!(segments[0], [Vec3::new(-50.0, 0.0, -50.0), Vec3::new(50.0, 0.0, -50.0)]);
        // Last line runs along Z at the +X edge
        assert_eq!(segments[9], [Vec3::new(50.0, 0.0, -50.0), Vec3::new(50.0, 0.0, 50.0)]);
    }

    #[test]
    fn grid_stays_on_orbital_plane() {
        for [a, b] in GridSpec::new(6300.0, 50).segments() {
            assert_eq!(a.y, 0.0);
            assert_eq!(b.y, 0.0);
        }
    }

    #[test]
    fn zero_divisions_yields_nothing() {
        assert!(GridSpec::new(10.0, 0).segments().is_empty());
    }
}
