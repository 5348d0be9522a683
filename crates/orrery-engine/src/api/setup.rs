use crate::api::config::SimConfig;
use crate::core::backdrop::Backdrop;
use crate::core::registry::BodyRegistry;

/// The contract every scene must fulfill. The host runner calls each method
/// once, before the simulation is built.
pub trait SceneSetup {
    /// Return simulation configuration. Host overrides are applied on top.
    fn config(&self) -> SimConfig {
        SimConfig::default()
    }

    /// The bodies to simulate, in creation and update order.
    fn registry(&self) -> BodyRegistry;

    /// Static decor. Empty by default.
    fn backdrop(&self) -> Backdrop {
        Backdrop::default()
    }
}
