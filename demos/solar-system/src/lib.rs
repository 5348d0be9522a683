use wasm_bindgen::prelude::*;

mod bodies;
mod scene;
use scene::SolarSystem;

orrery_web::export_scene!(SolarSystem, "solar-system");
