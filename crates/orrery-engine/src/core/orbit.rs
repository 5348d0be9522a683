//! Circular-orbit geometry. Pure math, no renderer dependencies.
//!
//! State is kept in f64; conversion to f32 happens only when points or
//! positions are handed to a render backend.

use std::f64::consts::TAU;

use glam::Vec3;

/// Segments per orbit guide line. A path has `ORBIT_PATH_SEGMENTS + 1` points.
pub const ORBIT_PATH_SEGMENTS: usize = 200;

/// Wrap an angle into `[0, 2π)`.
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Position on a circular orbit in the XZ plane: `(x, z)`.
pub fn orbital_position(angle: f64, distance: f64) -> (f64, f64) {
    (angle.cos() * distance, angle.sin() * distance)
}

/// Precomputed polyline approximating a circular orbit track.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitPath {
    radius: f64,
    points: Vec<Vec3>,
}

impl OrbitPath {
    /// Sample `segments + 1` points around the circle, starting and ending at
    /// angle zero so the line closes on itself.
    pub fn sample(radius: f64, segments: usize) -> Self {
        let segments = segments.max(1);
        let points = (0..=segments)
            .map(|i| {
                let t = TAU * i as f64 / segments as f64;
                let (x, z) = orbital_position(t, radius);
                Vec3::new(x as f32, 0.0, z as f32)
            })
            .collect();
        Self { radius, points }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_range() {
        assert_eq!(wrap_angle(0.0), 0.0);
        assert!((wrap_angle(TAU + 0.5) - 0.5).abs() < 1e-12);
        assert!((wrap_angle(-0.5) - (TAU - 0.5)).abs() < 1e-12);
        assert_eq!(wrap_angle(TAU), 0.0);
        let w = wrap_angle(-1e-18);
        assert!((0.0..TAU).contains(&w), "w = {w}");
    }

    #[test]
    fn path_has_segments_plus_one_points() {
        let path = OrbitPath::sample(40.0, ORBIT_PATH_SEGMENTS);
        assert_eq!(path.len(), 201);
    }

    #[test]
    fn path_is_closed_and_on_circle() {
        let path = OrbitPath::sample(150.0, ORBIT_PATH_SEGMENTS);
        let first = path.points()[0];
        let last = *path.points().last().unwrap();
        assert!((first - last).length() < 1e-3, "first={first:?} last={last:?}");
        for p in path.points() {
            assert_eq!(p.y, 0.0);
            assert!((p.length() - 150.0).abs() < 1e-3);
        }
    }

    #[test]
    fn sampling_is_idempotent() {
        let a = OrbitPath::sample(3010.0, ORBIT_PATH_SEGMENTS);
        let b = OrbitPath::sample(3010.0, ORBIT_PATH_SEGMENTS);
        assert_eq!(a, b);
    }

    #[test]
    fn position_matches_trig() {
        let (x, z) = orbital_position(std::f64::consts::FRAC_PI_2, 100.0);
        assert!(x.abs() < 1e-9);
        assert!((z - 100.0).abs() < 1e-9);
    }
}
