//! Solar System scene: textured sun, eight planets on yellow guide tracks,
//! starfield background and a ground grid.

use orrery_engine::{Backdrop, BodyRegistry, Color, GridSpec, SceneSetup, SunDefinition};

use crate::bodies;

pub struct SolarSystem;

impl SolarSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneSetup for SolarSystem {
    fn registry(&self) -> BodyRegistry {
        bodies::registry()
    }

    fn backdrop(&self) -> Backdrop {
        Backdrop::new()
            .with_sun(SunDefinition::new(bodies::SUN_RADIUS).with_surface(bodies::media(bodies::SUN_TEXTURE)))
            .with_background(bodies::media(bodies::BACKGROUND_TEXTURE))
            .with_grid(GridSpec::new(bodies::GRID_SIZE, bodies::GRID_DIVISIONS))
            .with_ambient_light(Color::WHITE)
    }
}
