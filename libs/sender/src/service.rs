use async_trait::async_trait;
use dispatch_core::{Context, Payload, Result};
use tracing::info;

use crate::Sender;

const DEFAULT_DESTINATION: &str = "outside world";

/// Reference sender
///
/// Emits a diagnostic record of each payload and reports success. The context
/// is accepted but not consulted.
#[derive(Debug, Clone)]
pub struct Service {
    destination: String,
}

impl Service {
    /// Sender targeting the default destination
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for configuring the sender
    pub fn builder() -> ServiceBuilder {
        ServiceBuilder::new()
    }

    /// Label recorded alongside every payload
    pub fn destination(&self) -> &str {
        &self.destination
    }
}

impl Default for Service {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Sender for Service {
    async fn send(&self, _ctx: &Context, payload: Payload) -> Result<()> {
        info!(destination = %self.destination, %payload, "Sending data");
        Ok(())
    }
}

/// Builder for [`Service`]
#[derive(Debug, Clone)]
pub struct ServiceBuilder {
    destination: String,
}

impl ServiceBuilder {
    pub fn new() -> Self {
        Self {
            destination: DEFAULT_DESTINATION.to_string(),
        }
    }

    pub fn destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = destination.into();
        self
    }

    pub fn build(self) -> Service {
        Service {
            destination: self.destination,
        }
    }
}

impl Default for ServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_outside_world() {
        assert_eq!(Service::new().destination(), "outside world");
        assert_eq!(Service::default().destination(), "outside world");
    }

    #[test]
    fn builder_overrides_destination() {
        let service = Service::builder().destination("audit log").build();
        assert_eq!(service.destination(), "audit log");
    }

    #[tokio::test]
    async fn send_ignores_cancelled_context() {
        let ctx = Context::background();
        ctx.cancel();

        let result = Service::new()
            .send(&ctx, Payload::new().with("name", "test"))
            .await;

        assert_eq!(result, Ok(()));
    }
}
