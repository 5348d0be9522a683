pub mod angles;
pub mod backdrop;
pub mod body;
pub mod orbit;
pub mod registry;
pub mod scene;
pub mod simulation;
pub mod time;
