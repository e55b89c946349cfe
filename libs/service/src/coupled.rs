use dispatch_core::{Context, Payload, Result};
use dispatch_sender::{Sender, Service};
use tracing::debug;

/// User service bound to the concrete reference sender
///
/// This crate must know about `dispatch_sender::Service` itself, and a test
/// cannot make `send_data` fail without modifying that type.
#[derive(Debug, Clone)]
pub struct UserService {
    sender: Service,
}

impl UserService {
    /// Wrap the concrete reference sender
    pub fn new(sender: Service) -> Self {
        Self { sender }
    }

    pub async fn send_data(&self, ctx: &Context, payload: Payload) -> Result<()> {
        debug!(keys = payload.len(), "Forwarding to reference sender");
        self.sender.send(ctx, payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn send_data_succeeds() {
        let service = UserService::new(Service::new());
        let result = service
            .send_data(&Context::background(), Payload::new().with("name", "test"))
            .await;
        assert!(result.is_ok());
    }
}
