use crate::api::types::ImageHandle;

/// Request for a textured sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereDesc {
    /// Rendered radius in world units.
    pub radius: f32,
    /// Color texture. `None` renders with default shading.
    pub surface: Option<ImageHandle>,
    /// Normal map.
    pub relief: Option<ImageHandle>,
    /// Tag for lookups and log lines.
    pub label: String,
}

impl SphereDesc {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            surface: None,
            relief: None,
            label: String::new(),
        }
    }

    pub fn with_surface(mut self, surface: Option<ImageHandle>) -> Self {
        self.surface = surface;
        self
    }

    pub fn with_relief(mut self, relief: Option<ImageHandle>) -> Self {
        self.relief = relief;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}
