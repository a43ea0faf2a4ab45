use tokio::runtime::Handle;

use super::{dispatch::Dispatcher, registry::Registry};
use crate::config::Config;

/// Builder for constructing a [`Registry`] with optional settings.
#[derive(Debug)]
pub struct RegistryBuilder {
    cfg: Config,
    runtime: Option<Handle>,
}

impl RegistryBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self { cfg, runtime: None }
    }

    /// Pins background dispatch to a specific tokio runtime.
    ///
    /// Without it, [`Registry::fire_background`] uses the runtime of the calling
    /// context and fails with `RuntimeUnavailable` outside of one.
    pub fn with_runtime(mut self, handle: Handle) -> Self {
        self.runtime = Some(handle);
        self
    }

    /// Builds and returns the Registry instance.
    pub fn build(self) -> Registry {
        Registry::from_parts(self.cfg, Dispatcher::new(self.runtime))
    }
}
