pub mod runner;

pub use orrery_engine;
pub use runner::SceneRunner;

/// Generate all `#[wasm_bindgen]` exports for a scene.
///
/// Generates:
/// - `thread_local!` storage for the SceneRunner, created on first use
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (scene_configure, scene_init, scene_frame,
///   input handlers, image callbacks, buffer accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod scene;
/// use scene::MyScene;
///
/// orrery_web::export_scene!(MyScene, "my-scene");
/// ```
///
/// # Arguments
///
/// - `$scene_type`: a type implementing `orrery_engine::SceneSetup` with a
///   `new()` constructor
/// - `$scene_name`: A string literal used in log messages
#[macro_export]
macro_rules! export_scene {
    ($scene_type:ty, $scene_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::SceneRunner<$scene_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::SceneRunner<$scene_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.get_or_insert_with(|| {
                    console_error_panic_hook::set_once();
                    let _ = console_log::init_with_level(log::Level::Info);
                    $crate::SceneRunner::new(<$scene_type>::new())
                });
                f(runner)
            })
        }

        /// Override simulation settings with a JSON object. Call before `scene_init`.
        #[wasm_bindgen]
        pub fn scene_configure(json: &str) -> Result<(), wasm_bindgen::JsValue> {
            with_runner(|r| r.configure(json))
                .map_err(|e| wasm_bindgen::JsValue::from_str(&e.to_string()))
        }

        #[wasm_bindgen]
        pub fn scene_init(seed: u32) -> Result<(), wasm_bindgen::JsValue> {
            match with_runner(|r| r.init(seed as u64)) {
                Ok(()) => {
                    log::info!("{}: initialized", $scene_name);
                    Ok(())
                }
                Err(e) => {
                    log::error!("{}: {}", $scene_name, e);
                    Err(wasm_bindgen::JsValue::from_str(&e.to_string()))
                }
            }
        }

        /// Advance and draw one frame. Returns false if nothing was drawn.
        #[wasm_bindgen]
        pub fn scene_frame(dt: f32) -> bool {
            with_runner(|r| r.frame(dt).is_some())
        }

        #[wasm_bindgen]
        pub fn scene_teardown() {
            with_runner(|r| r.teardown());
            log::info!("{}: torn down", $scene_name);
        }

        #[wasm_bindgen]
        pub fn scene_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input($crate::orrery_engine::InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn scene_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input($crate::orrery_engine::InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn scene_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input($crate::orrery_engine::InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn scene_wheel(delta: f32) {
            with_runner(|r| r.push_input($crate::orrery_engine::InputEvent::Wheel { delta }));
        }

        #[wasm_bindgen]
        pub fn scene_resize(width: f32, height: f32) {
            with_runner(|r| r.push_input($crate::orrery_engine::InputEvent::Resize { width, height }));
        }

        // ---- Images ----

        /// JSON list of `{ handle, path }` the host should fetch.
        #[wasm_bindgen]
        pub fn get_pending_images() -> String {
            with_runner(|r| r.pending_images_json())
        }

        #[wasm_bindgen]
        pub fn scene_image_loaded(handle: u32, ok: bool) {
            with_runner(|r| r.image_loaded(handle, ok));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_spheres_ptr() -> *const f32 {
            with_runner(|r| r.spheres_ptr())
        }

        #[wasm_bindgen]
        pub fn get_sphere_count() -> u32 {
            with_runner(|r| r.sphere_count())
        }

        #[wasm_bindgen]
        pub fn get_line_vertices_ptr() -> *const f32 {
            with_runner(|r| r.line_vertices_ptr())
        }

        #[wasm_bindgen]
        pub fn get_line_vertex_count() -> u32 {
            with_runner(|r| r.line_vertex_count())
        }

        #[wasm_bindgen]
        pub fn get_line_ranges_ptr() -> *const u32 {
            with_runner(|r| r.line_ranges_ptr())
        }

        #[wasm_bindgen]
        pub fn get_line_range_count() -> u32 {
            with_runner(|r| r.line_range_count())
        }

        #[wasm_bindgen]
        pub fn get_camera_ptr() -> *const f32 {
            with_runner(|r| r.camera_ptr())
        }

        #[wasm_bindgen]
        pub fn get_camera_floats() -> u32 {
            with_runner(|r| r.camera_floats())
        }

        #[wasm_bindgen]
        pub fn get_background_slot() -> f32 {
            with_runner(|r| r.background_slot())
        }

        #[wasm_bindgen]
        pub fn get_ambient_r() -> f32 {
            with_runner(|r| r.ambient_r())
        }

        #[wasm_bindgen]
        pub fn get_ambient_g() -> f32 {
            with_runner(|r| r.ambient_g())
        }

        #[wasm_bindgen]
        pub fn get_ambient_b() -> f32 {
            with_runner(|r| r.ambient_b())
        }

        #[wasm_bindgen]
        pub fn get_dropped_frames() -> u32 {
            with_runner(|r| r.dropped_frames() as u32)
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_spheres() -> u32 {
            with_runner(|r| r.max_spheres())
        }

        #[wasm_bindgen]
        pub fn get_max_line_vertices() -> u32 {
            with_runner(|r| r.max_line_vertices())
        }
    };
}
