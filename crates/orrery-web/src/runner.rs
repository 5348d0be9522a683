use serde::Serialize;

use orrery_engine::{
    CameraState, CameraUniform, ConfigError, FrameStats, ImageHandle, InputEvent,
    OrbitCamera, SceneGraph, SceneSetup, SimConfig, SimulationContext, UniformAngles,
};

/// One image the host still has to fetch.
#[derive(Debug, Serialize)]
struct ImageRequest<'a> {
    handle: u32,
    path: &'a str,
}

/// Generic scene runner that wires up the simulation loop.
///
/// Each concrete scene (e.g., `solar-system`) creates a `thread_local!`
/// SceneRunner and exports free functions via `#[wasm_bindgen]`, because
/// wasm-bindgen cannot export generic structs directly.
pub struct SceneRunner<S: SceneSetup> {
    setup: S,
    config: SimConfig,
    backend: SceneGraph,
    camera: OrbitCamera,
    sim: Option<SimulationContext>,
    dropped_frames: u64,
}

impl<S: SceneSetup> SceneRunner<S> {
    pub fn new(setup: S) -> Self {
        let config = setup.config();
        let backend = SceneGraph::from_config(&config);
        Self {
            setup,
            config,
            backend,
            camera: OrbitCamera::default(),
            sim: None,
            dropped_frames: 0,
        }
    }

    /// Apply a JSON config override from the host. Only allowed before `init`.
    pub fn configure(&mut self, json: &str) -> Result<(), ConfigError> {
        if self.sim.is_some() {
            return Err(ConfigError::InvalidConfig(
                "configure must be called before init".into(),
            ));
        }
        self.config = self.config.merged_with_json(json)?;
        Ok(())
    }

    /// Build the simulation. `seed` seeds the initial orbital phases unless
    /// the config pins one. Calling again rebuilds the scene from scratch.
    pub fn init(&mut self, seed: u64) -> Result<(), ConfigError> {
        self.teardown();
        self.backend = SceneGraph::from_config(&self.config);

        let seed = self.config.seed.unwrap_or(seed);
        let sim = SimulationContext::new(
            self.config.clone(),
            self.setup.registry(),
            &self.setup.backdrop(),
            UniformAngles::seeded(seed),
            &mut self.backend,
        )?;
        self.sim = Some(sim);
        self.dropped_frames = 0;
        log::info!("runner: seed {}, {} images requested", seed, self.backend.images().len());
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.sim.is_some()
    }

    /// Queue a camera input event. Applied on the next frame.
    pub fn push_input(&mut self, event: InputEvent) {
        self.camera.push_input(event);
    }

    /// Run one frame. Returns `None` if nothing was drawn: either the scene
    /// is not initialized or the draw failed (logged, and the next frame
    /// proceeds as usual).
    pub fn frame(&mut self, dt: f32) -> Option<FrameStats> {
        let sim = self.sim.as_mut()?;
        match sim.render_frame(&mut self.backend, &mut self.camera, dt) {
            Ok(stats) => Some(stats),
            Err(e) => {
                self.dropped_frames += 1;
                log::warn!("frame {} dropped: {}", sim.frame_count(), e);
                None
            }
        }
    }

    /// Host callback once an image requested by the scene has loaded or failed.
    pub fn image_loaded(&mut self, handle: u32, ok: bool) {
        self.backend.image_loaded(ImageHandle(handle), ok);
    }

    /// JSON array of `{ handle, path }` for every image still pending.
    pub fn pending_images_json(&self) -> String {
        let pending: Vec<ImageRequest> = self
            .backend
            .images()
            .pending()
            .map(|(handle, image)| ImageRequest {
                handle: handle.0,
                path: image.as_str(),
            })
            .collect();
        match serde_json::to_string(&pending) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("pending image list not serialized: {}", e);
                "[]".to_string()
            }
        }
    }

    /// Remove every visual from the scene and drop the simulation.
    pub fn teardown(&mut self) {
        if let Some(sim) = self.sim.take() {
            sim.teardown(&mut self.backend);
        }
    }

    pub fn simulation(&self) -> Option<&SimulationContext> {
        self.sim.as_ref()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn frame_count(&self) -> u64 {
        self.sim.as_ref().map_or(0, |s| s.frame_count())
    }

    pub fn dropped_frames(&self) -> u64 {
        self.dropped_frames
    }

    // ---- Pointer accessors for host memory reads ----

    pub fn spheres_ptr(&self) -> *const f32 {
        self.backend.spheres_ptr()
    }

    pub fn sphere_count(&self) -> u32 {
        self.backend.sphere_count()
    }

    pub fn line_vertices_ptr(&self) -> *const f32 {
        self.backend.line_vertices_ptr()
    }

    pub fn line_vertex_count(&self) -> u32 {
        self.backend.line_vertex_count()
    }

    pub fn line_ranges_ptr(&self) -> *const u32 {
        self.backend.line_ranges_ptr()
    }

    pub fn line_range_count(&self) -> u32 {
        self.backend.line_range_count()
    }

    pub fn camera_ptr(&self) -> *const f32 {
        self.backend.camera_ptr()
    }

    pub fn camera_floats(&self) -> u32 {
        CameraUniform::FLOATS as u32
    }

    pub fn background_slot(&self) -> f32 {
        self.backend.background_slot()
    }

    pub fn ambient_r(&self) -> f32 {
        self.backend.ambient().r
    }

    pub fn ambient_g(&self) -> f32 {
        self.backend.ambient().g
    }

    pub fn ambient_b(&self) -> f32 {
        self.backend.ambient().b
    }

    // ---- Capacity accessors ----

    pub fn max_spheres(&self) -> u32 {
        u32::try_from(self.config.max_spheres).unwrap_or(u32::MAX)
    }

    pub fn max_line_vertices(&self) -> u32 {
        u32::try_from(self.config.max_line_vertices).unwrap_or(u32::MAX)
    }

    /// Current camera without advancing it.
    pub fn camera_state(&self) -> CameraState {
        self.camera.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::{Backdrop, BodyDefinition, BodyRegistry, SunDefinition, MAX_CAPACITY};

    struct TwoPlanets;

    impl SceneSetup for TwoPlanets {
        fn registry(&self) -> BodyRegistry {
            BodyRegistry::new()
                .with_body(BodyDefinition::new("a", 10.0, 10.0, 1.0).with_surface("a.jpg"))
                .with_body(BodyDefinition::new("b", 20.0, 20.0, 1.0).with_surface("a.jpg"))
        }

        fn backdrop(&self) -> Backdrop {
            Backdrop::new()
                .with_sun(SunDefinition::new(5.0).with_surface("sun.jpg"))
                .with_background("space.jpg")
        }
    }

    struct Empty;

    impl SceneSetup for Empty {
        fn registry(&self) -> BodyRegistry {
            BodyRegistry::new()
        }
    }

    #[test]
    fn frame_before_init_draws_nothing() {
        let mut runner = SceneRunner::new(TwoPlanets);
        assert!(runner.frame(0.016).is_none());
        assert_eq!(runner.frame_count(), 0);
    }

    #[test]
    fn init_then_frames_fill_buffers() {
        let mut runner = SceneRunner::new(TwoPlanets);
        runner.init(1).unwrap();
        let stats = runner.frame(0.016).unwrap();
        assert_eq!(stats.draw.spheres, 3);
        assert_eq!(runner.sphere_count(), 3);
        assert_eq!(runner.line_range_count(), 2);
        assert_eq!(runner.line_vertex_count(), 2 * 201);
        assert_eq!(runner.frame_count(), 1);
    }

    #[test]
    fn empty_scene_fails_init() {
        let mut runner = SceneRunner::new(Empty);
        assert_eq!(runner.init(0), Err(ConfigError::EmptyRegistry));
        assert!(!runner.is_initialized());
    }

    #[test]
    fn pending_images_are_listed_once() {
        let mut runner = SceneRunner::new(TwoPlanets);
        runner.init(1).unwrap();
        let json = runner.pending_images_json();
        let list: serde_json::Value = serde_json::from_str(&json).unwrap();
        let paths: Vec<_> = list
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["path"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(paths, ["space.jpg", "sun.jpg", "a.jpg"]);

        runner.image_loaded(list[0]["handle"].as_u64().unwrap() as u32, true);
        runner.image_loaded(list[1]["handle"].as_u64().unwrap() as u32, false);
        assert_eq!(runner.pending_images_json(), r#"[{"handle":2,"path":"a.jpg"}]"#);
        assert_eq!(runner.background_slot(), 0.0);
    }

    #[test]
    fn configure_overrides_then_locks() {
        let mut runner = SceneRunner::new(TwoPlanets);
        runner
            .configure(r#"{ "seed": 99, "time_mode": { "kind": "fixed_step", "dt": 1.0 } }"#)
            .unwrap();
        runner.init(1).unwrap();
        assert_eq!(runner.config().seed, Some(99));
        // Less than one fixed step: no tick, but still drawn.
        let stats = runner.frame(0.5).unwrap();
        assert_eq!(stats.ticks, 0);
        assert!(runner.configure("{}").is_err());
    }

    #[test]
    fn configure_rejects_out_of_range_capacity() {
        let mut runner = SceneRunner::new(TwoPlanets);
        assert!(matches!(
            runner.configure(r#"{ "max_spheres": 18446744073709551615 }"#),
            Err(ConfigError::InvalidConfig(_))
        ));
        assert!(runner.configure(r#"{ "max_line_vertices": 0 }"#).is_err());
        assert_eq!(runner.max_spheres(), 64);

        runner
            .configure(&format!(r#"{{ "max_spheres": {MAX_CAPACITY}, "max_line_vertices": 4096 }}"#))
            .unwrap();
        runner.init(1).unwrap();
        assert_eq!(runner.max_spheres(), MAX_CAPACITY as u32);
        assert_eq!(runner.max_line_vertices(), 4096);
        assert!(runner.frame(0.016).is_some());
    }

    #[test]
    fn repeated_init_reuses_capacity() {
        let mut runner = SceneRunner::new(TwoPlanets);
        runner.configure(r#"{ "max_spheres": 3, "max_line_vertices": 402 }"#).unwrap();
        for seed in 0..5 {
            runner.init(seed).unwrap();
            let stats = runner.frame(0.016).unwrap();
            assert_eq!((stats.draw.spheres, stats.draw.lines), (3, 2));
        }
        runner.teardown();
        assert_eq!(runner.line_vertex_count(), 0);
    }

    #[test]
    fn pinned_seed_wins_over_host_seed() {
        let angles = |host_seed| {
            let mut runner = SceneRunner::new(TwoPlanets);
            runner.configure(r#"{ "seed": 5 }"#).unwrap();
            runner.init(host_seed).unwrap();
            runner
                .simulation()
                .unwrap()
                .bodies()
                .iter()
                .map(|b| b.angle())
                .collect::<Vec<_>>()
        };
        assert_eq!(angles(1), angles(2));
    }

    #[test]
    fn broken_camera_drops_the_frame_only() {
        let mut runner = SceneRunner::new(TwoPlanets);
        runner.init(1).unwrap();
        runner.camera.near = 0.0;
        assert!(runner.frame(0.016).is_none());
        runner.camera.near = 0.1;
        assert!(runner.frame(0.016).is_some());
        assert_eq!(runner.dropped_frames(), 1);
        assert_eq!(runner.frame_count(), 2);
    }

    #[test]
    fn teardown_and_reinit() {
        let mut runner = SceneRunner::new(TwoPlanets);
        runner.init(1).unwrap();
        runner.frame(0.016);
        runner.teardown();
        assert!(!runner.is_initialized());
        runner.init(2).unwrap();
        let stats = runner.frame(0.016).unwrap();
        assert_eq!(stats.draw.spheres, 3);
        assert_eq!(stats.draw.frame, 1);
    }

    #[test]
    fn input_reaches_the_camera() {
        let mut runner = SceneRunner::new(TwoPlanets);
        runner.init(1).unwrap();
        let before = runner.camera_state().eye;
        runner.push_input(InputEvent::Wheel { delta: 1.0 });
        runner.frame(0.016);
        assert!(runner.camera_state().eye.length() > before.length());
    }
}
