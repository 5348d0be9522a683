use crate::api::error::ConfigError;
use crate::api::types::{Color, ImageRef};

/// Static description of one orbiting body.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyDefinition {
    /// Display name, also used as the scene tag.
    pub name: String,
    /// Radius of the circular orbit track.
    pub distance_from_center: f64,
    /// Time units per revolution. Only used to derive angular speed.
    pub orbital_period: f64,
    /// Visual size factor, independent of the orbit distance.
    pub body_radius: f64,
    pub surface_image: Option<ImageRef>,
    /// Normal map, present only for some bodies.
    pub relief_image: Option<ImageRef>,
    pub orbit_color: Color,
}

impl BodyDefinition {
    pub fn new(name: impl Into<String>, distance: f64, period: f64, radius: f64) -> Self {
        Self {
            name: name.into(),
            distance_from_center: distance,
            orbital_period: period,
            body_radius: radius,
            surface_image: None,
            relief_image: None,
            orbit_color: Color::from_hex(0xffff00),
        }
    }

    // -- Builder pattern --

    pub fn with_surface(mut self, image: impl Into<ImageRef>) -> Self {
        self.surface_image = Some(image.into());
        self
    }

    pub fn with_relief(mut self, image: impl Into<ImageRef>) -> Self {
        self.relief_image = Some(image.into());
        self
    }

    pub fn with_orbit_color(mut self, color: Color) -> Self {
        self.orbit_color = color;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("distance_from_center", self.distance_from_center),
            ("orbital_period", self.orbital_period),
            ("body_radius", self.body_radius),
        ];
        for (field, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidBody {
                    name: self.name.clone(),
                    field,
                    value,
                });
            }
        }
        Ok(())
    }
}

/// Ordered catalog of bodies, instantiated once at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodyRegistry {
    bodies: Vec<BodyDefinition>,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, body: BodyDefinition) -> Self {
        self.bodies.push(body);
        self
    }

    /// All definitions in registry order.
    pub fn list_bodies(&self) -> &[BodyDefinition] {
        &self.bodies
    }

    pub fn get(&self, name: &str) -> Option<&BodyDefinition> {
        self.bodies.iter().find(|b| b.name == name)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Reject an empty catalog and any entry with a non-positive field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bodies.is_empty() {
            return Err(ConfigError::EmptyRegistry);
        }
        self.bodies.iter().try_for_each(BodyDefinition::validate)
    }
}

impl FromIterator<BodyDefinition> for BodyRegistry {
    fn from_iter<I: IntoIterator<Item = BodyDefinition>>(iter: I) -> Self {
        Self {
            bodies: iter.into_iter().collect(),
        }
    }
}
