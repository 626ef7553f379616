use crate::domain::FirebaseConfig;
use crate::errors::AnalyticsError;
use crate::ports::AnalyticsClientPort;
use async_trait::async_trait;
use std::rc::Rc;

/// Application factory of the analytics backend.
///
/// Apps are singletons per name: `existing_app` must return the app created by
/// an earlier `initialize_app` with the same name.
#[async_trait(?Send)]
pub trait BackendPort {
    /// Makes the backend library usable. Resolves to an error when the library
    /// is missing or reports analytics as unsupported.
    async fn load(&self) -> Result<(), AnalyticsError>;

    fn existing_app(&self, name: &str) -> Option<Rc<dyn BackendAppPort>>;

    fn initialize_app(
        &self,
        config: &FirebaseConfig,
        name: &str,
    ) -> Result<Rc<dyn BackendAppPort>, AnalyticsError>;
}

pub trait BackendAppPort {
    fn name(&self) -> String;

    fn analytics(&self) -> Result<Rc<dyn AnalyticsClientPort>, AnalyticsError>;
}
