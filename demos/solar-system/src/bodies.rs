//! Planet catalog: orbit distance, period and size in scene units.
//!
//! Distances and radii are compressed for readability, not to scale.
//! Periods are in Earth days.

use orrery_engine::{BodyDefinition, BodyRegistry, Color};

/// Folder every texture path is relative to.
pub const MEDIA_DIR: &str = "multimedia";

// ── Sun ──────────────────────────────────────────────────────────────

/// 109 Earth radii, shrunk tenfold so the inner orbits stay visible.
pub const SUN_RADIUS: f64 = 109.0 * 0.1;
pub const SUN_TEXTURE: &str = "sun.jpg";

// ── Backdrop ─────────────────────────────────────────────────────────

pub const BACKGROUND_TEXTURE: &str = "space.jpg";
pub const GRID_SIZE: f32 = 6300.0;
pub const GRID_DIVISIONS: u32 = 50;

// ── Planets ──────────────────────────────────────────────────────────

pub const ORBIT_COLOR: u32 = 0xffff00;

/// Static data for one planet.
pub struct Planet {
    pub name: &'static str,
    pub distance: f64,
    pub period_days: f64,
    pub radius: f64,
    pub texture: &'static str,
    pub normal_map: Option<&'static str>,
}

pub const PLANETS: [Planet; 8] = [
    Planet { name: "mercury", distance: 40.0, period_days: 88.0, radius: 0.38, texture: "mercury.jpg", normal_map: Some("mercury-normal.jpg") },
    Planet { name: "venus", distance: 70.0, period_days: 225.0, radius: 0.95, texture: "venus.jpg", normal_map: Some("venus-normal.jpg") },
    Planet { name: "earth", distance: 100.0, period_days: 365.25, radius: 1.0, texture: "earth.jpg", normal_map: None },
    Planet { name: "mars", distance: 150.0, period_days: 687.0, radius: 0.53, texture: "mars.jpg", normal_map: Some("mars-normal.jpg") },
    Planet { name: "jupiter", distance: 520.0, period_days: 4332.59, radius: 11.2, texture: "jupiter.jpg", normal_map: None },
    Planet { name: "saturn", distance: 950.0, period_days: 10759.22, radius: 9.0, texture: "saturn.jpg", normal_map: None },
    Planet { name: "uranus", distance: 1920.0, period_days: 30688.5, radius: 3.95, texture: "uranus.jpg", normal_map: None },
    Planet { name: "neptune", distance: 3010.0, period_days: 60182.0, radius: 3.85, texture: "neptune.jpg", normal_map: None },
];

pub fn media(file: &str) -> String {
    format!("{}/{}", MEDIA_DIR, file)
}

impl Planet {
    pub fn definition(&self) -> BodyDefinition {
        let def = BodyDefinition::new(self.name, self.distance, self.period_days, self.radius)
            .with_surface(media(self.texture))
            .with_orbit_color(Color::from_hex(ORBIT_COLOR));
        match self.normal_map {
            Some(normal) => def.with_relief(media(normal)),
            None => def,
        }
    }
}

/// All planets, innermost first.
pub fn registry() -> BodyRegistry {
    PLANETS.iter().map(Planet::definition).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_valid_and_ordered() {
        let registry = registry();
        assert!(registry.validate().is_ok());
        assert_eq!(registry.len(), 8);
        let distances: Vec<f64> = registry.list_bodies().iter().map(|b| b.distance_from_center).collect();
        assert!(distances.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn only_rocky_inner_planets_have_relief_maps() {
        let registry = registry();
        let with_relief: Vec<&str> = registry
            .list_bodies()
            .iter()
            .filter(|b| b.relief_image.is_some())
            .map(|b| b.name.as_str())
            .collect();
        assert_eq!(with_relief, ["mercury", "venus", "mars"]);
    }

    #[test]
    fn textures_live_under_media_dir() {
        let earth = registry().get("earth").cloned().unwrap();
        assert_eq!(earth.surface_image.unwrap().as_str(), "multimedia/earth.jpg");
        assert_eq!(earth.orbit_color, Color::from_hex(0xffff00));
    }

    #[test]
    fn neptune_is_nearly_static_per_tick() {
        let neptune = registry().get("neptune").cloned().unwrap();
        assert!(1.0 / neptune.orbital_period < 1e-4);
    }
}
