use serde::{Deserialize, Serialize};

use crate::api::error::ConfigError;

/// Largest accepted value for `max_spheres` and `max_line_vertices`.
/// Keeps buffer counts addressable as `u32` on the host side.
pub const MAX_CAPACITY: usize = 1 << 24;

/// How simulated time relates to rendered frames.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimeMode {
    /// One tick per frame, advancing each body by its full angular speed.
    /// Visual speed follows the display refresh rate.
    PerFrame,
    /// One tick per frame, with the phase advance scaled by
    /// `frame_dt / reference_dt`.
    Scaled { reference_dt: f32 },
    /// Whole ticks of `dt` seconds each, driven by an accumulator
    /// (zero or more per frame).
    FixedStep { dt: f32 },
}

impl Default for TimeMode {
    fn default() -> Self {
        TimeMode::PerFrame
    }
}

/// Simulation configuration, provided by the scene setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Numerator of `angular_speed = time_constant / orbital_period` (default: 1.0).
    pub time_constant: f64,
    /// Frame/tick relationship (default: per frame).
    pub time_mode: TimeMode,
    /// Multiplier from `body_radius` to rendered sphere radius (default: 4.0).
    pub size_scale: f64,
    /// Maximum number of spheres a scene graph will create (default: 64).
    pub max_spheres: usize,
    /// Maximum number of polyline vertices (default: 16384).
    pub max_line_vertices: usize,
    /// Fixed seed for the initial orbital phases. `None` lets the host pick one.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            time_constant: 1.0,
            time_mode: TimeMode::PerFrame,
            size_scale: 4.0,
            max_spheres: 64,
            max_line_vertices: 16384,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Parse a config override from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply a partial JSON override on top of this config. Fields missing
    /// from `json` keep their current values.
    pub fn merged_with_json(&self, json: &str) -> Result<Self, ConfigError> {
        let overrides: serde_json::Value = serde_json::from_str(json)?;
        let serde_json::Value::Object(overrides) = overrides else {
            return Err(ConfigError::InvalidConfig(
                "config override must be a JSON object".into(),
            ));
        };
        let mut base = serde_json::to_value(self)?;
        if let serde_json::Value::Object(fields) = &mut base {
            fields.extend(overrides);
        }
        let config: SimConfig = serde_json::from_value(base)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_time_constant(mut self, time_constant: f64) -> Self {
        self.time_constant = time_constant;
        self
    }

    pub fn with_time_mode(mut self, mode: TimeMode) -> Self {
        self.time_mode = mode;
        self
    }

    pub fn with_size_scale(mut self, size_scale: f64) -> Self {
        self.size_scale = size_scale;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_capacity(mut self, max_spheres: usize, max_line_vertices: usize) -> Self {
        self.max_spheres = max_spheres;
        self.max_line_vertices = max_line_vertices;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.time_constant.is_finite() && self.time_constant > 0.0) {
            return Err(ConfigError::InvalidConfig(format!(
                "time_constant must be positive, got {}",
                self.time_constant
            )));
        }
        if !(self.size_scale.is_finite() && self.size_scale > 0.0) {
            return Err(ConfigError::InvalidConfig(format!(
                "size_scale must be positive, got {}",
                self.size_scale
            )));
        }
        for (name, value) in [
            ("max_spheres", self.max_spheres),
            ("max_line_vertices", self.max_line_vertices),
        ] {
            if value == 0 || value > MAX_CAPACITY {
                return Err(ConfigError::InvalidConfig(format!(
                    "{name} must be in 1..={MAX_CAPACITY}, got {value}"
                )));
            }
        }
        match self.time_mode {
            TimeMode::PerFrame => {}
            TimeMode::Scaled { reference_dt: dt } | TimeMode::FixedStep { dt } => {
                if !(dt.is_finite() && dt > 0.0) {
                    return Err(ConfigError::InvalidConfig(format!(
                        "time step must be positive, got {dt}"
                    )));
                }
            }
        }
        Ok(())
    }
}
