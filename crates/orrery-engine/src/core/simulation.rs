//! The orbit simulator and scene compositor.
//!
//! `SimulationContext` owns every body's orbital state and drives a
//! `RenderBackend` through one frame at a time: update the camera, advance
//! each body, then draw.

use crate::api::config::SimConfig;
use crate::api::error::{ConfigError, RenderError};
use crate::api::types::{Axis, VisualHandle};
use crate::components::mesh::SphereDesc;
use crate::core::angles::AngleSource;
use crate::core::backdrop::Backdrop;
use crate::core::body::SimulatedBody;
use crate::core::registry::{BodyDefinition, BodyRegistry};
use crate::core::time::TickClock;
use crate::renderer::traits::{CameraController, DrawStats, RenderBackend};

/// Result of one `render_frame` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Ticks applied to every body this frame.
    pub ticks: u32,
    pub draw: DrawStats,
}

pub struct SimulationContext {
    config: SimConfig,
    registry: BodyRegistry,
    /// One entry per registry definition, same order.
    bodies: Vec<SimulatedBody>,
    angles: Box<dyn AngleSource>,
    clock: TickClock,
    /// Sun, grid lines. Never moved after creation.
    decor: Vec<VisualHandle>,
    frame_count: u64,
}

impl SimulationContext {
    /// Validate the inputs, build the backdrop and create every body in
    /// registry order.
    pub fn new<R: RenderBackend + ?Sized>(
        config: SimConfig,
        registry: BodyRegistry,
        backdrop: &Backdrop,
        angles: impl AngleSource + 'static,
        backend: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        registry.validate()?;

        let mut ctx = Self {
            clock: TickClock::new(config.time_mode),
            config,
            bodies: Vec::with_capacity(registry.len()),
            registry,
            angles: Box::new(angles),
            decor: Vec::new(),
            frame_count: 0,
        };

        ctx.apply_backdrop(backdrop, backend);

        let definitions = ctx.registry.list_bodies().to_vec();
        for def in &definitions {
            let body = ctx.create_body(def, backend);
            ctx.bodies.push(body);
        }

        log::info!(
            "simulation: {} bodies on {} ({:?})",
            ctx.bodies.len(),
            backend.backend(),
            ctx.config.time_mode
        );
        Ok(ctx)
    }

    fn apply_backdrop<R: RenderBackend + ?Sized>(&mut self, backdrop: &Backdrop, backend: &mut R) {
        if let Some(image) = &backdrop.background {
            let handle = backend.load_image(image);
            backend.set_background(handle);
        }
        if let Some(color) = backdrop.ambient_light {
            backend.set_ambient_light(color);
        }
        if let Some(sun) = &backdrop.sun {
            let surface = sun.surface_image.as_ref().map(|img| backend.load_image(img));
            let desc = SphereDesc::new(sun.radius as f32)
                .with_surface(surface)
                .with_label("Sun");
            match backend.create_sphere(&desc) {
                Ok(handle) => {
                    backend.add_to_scene(handle);
                    self.decor.push(handle);
                }
                Err(e) => log::warn!("sun: sphere not created: {}", e),
            }
        }
        if let Some(grid) = &backdrop.grid {
            for segment in grid.segments() {
                match backend.create_polyline(&segment, grid.color) {
                    Ok(handle) => {
                        backend.add_to_scene(handle);
                        self.decor.push(handle);
                    }
                    Err(e) => {
                        log::warn!("grid: line not created, skipping the rest: {}", e);
                        break;
                    }
                }
            }
        }
    }

    /// Create the runtime state and visuals for one body.
    ///
    /// Renderer failures are logged and leave the matching handle `None`.
    /// The body is created regardless and keeps orbiting.
    fn create_body<R: RenderBackend + ?Sized>(
        &mut self,
        def: &BodyDefinition,
        backend: &mut R,
    ) -> SimulatedBody {
        let initial_angle = self.angles.next_angle();
        let mut body = SimulatedBody::new(def, initial_angle, self.config.time_constant);

        let surface = def.surface_image.as_ref().map(|img| backend.load_image(img));
        let relief = def.relief_image.as_ref().map(|img| backend.load_image(img));
        let desc = SphereDesc::new((def.body_radius * self.config.size_scale) as f32)
            .with_surface(surface)
            .with_relief(relief)
            .with_label(def.name.clone());

        match backend.create_sphere(&desc) {
            Ok(handle) => {
                backend.set_position(handle, body.render_position());
                backend.add_to_scene(handle);
                body.mesh = Some(handle);
            }
            Err(e) => log::warn!("{}: sphere not created: {}", def.name, e),
        }

        match backend.create_polyline(body.orbit_path().points(), def.orbit_color) {
            Ok(handle) => {
                backend.add_to_scene(handle);
                body.orbit_line = Some(handle);
            }
            Err(e) => log::warn!("{}: orbit path not created: {}", def.name, e),
        }

        log::debug!(
            "{}: angle {:.3} rad, speed {:.6} rad/tick",
            def.name,
            body.angle(),
            body.angular_speed()
        );
        body
    }

    /// Advance the simulation by one frame and draw it.
    ///
    /// Order: camera update, every body ticked in registry order, draw.
    /// A draw failure is returned as is; the next call proceeds normally.
    pub fn render_frame<R, C>(
        &mut self,
        backend: &mut R,
        camera: &mut C,
        frame_dt: f32,
    ) -> Result<FrameStats, RenderError>
    where
        R: RenderBackend + ?Sized,
        C: CameraController + ?Sized,
    {
        let camera_state = camera.update(frame_dt);

        let plan = self.clock.plan(frame_dt);
        for _ in 0..plan.ticks {
            for body in &mut self.bodies {
                let delta = body.angular_speed() * plan.phase_scale;
                tick(body, delta, backend);
            }
        }
        self.frame_count += 1;

        let draw = backend.draw_frame(&camera_state)?;
        Ok(FrameStats {
            ticks: plan.ticks,
            draw,
        })
    }

    pub fn bodies(&self) -> &[SimulatedBody] {
        &self.bodies
    }

    pub fn body(&self, name: &str) -> Option<&SimulatedBody> {
        self.bodies.iter().find(|b| b.name() == name)
    }

    pub fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Number of `render_frame` calls so far, including ones whose draw failed.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Remove every visual this context created from the renderer scene,
    /// releasing its renderer resources.
    pub fn teardown<R: RenderBackend + ?Sized>(self, backend: &mut R) {
        let mut removed = 0;
        let body_visuals = self
            .bodies
            .iter()
            .flat_map(|b| [b.mesh(), b.orbit_line()])
            .flatten();
        for handle in self.decor.iter().copied().chain(body_visuals) {
            backend.remove_from_scene(handle);
            removed += 1;
        }
        log::info!(
            "simulation: torn down after {} frames, {} visuals removed",
            self.frame_count,
            removed
        );
    }
}

/// Advance one body by `delta_phase` and push its new transform to the
/// renderer, if it has a mesh.
pub fn tick<R: RenderBackend + ?Sized>(body: &mut SimulatedBody, delta_phase: f64, backend: &mut R) {
    body.advance(delta_phase);
    if let Some(mesh) = body.mesh() {
        backend.set_position(mesh, body.render_position());
        backend.set_rotation(mesh, Axis::Y, body.spin() as f32);
    }
}
