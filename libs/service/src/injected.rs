use std::fmt;

use dispatch_core::{Context, Payload, Result};
use dispatch_sender::Sender;
use tracing::debug;

/// User service that works with anyone who can send data
pub struct UserService {
    sender: Box<dyn Sender>,
}

impl fmt::Debug for UserService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserService").finish_non_exhaustive()
    }
}

impl UserService {
    /// Accept any sender implementation
    pub fn new(sender: impl Sender + 'static) -> Self {
        Self {
            sender: Box::new(sender),
        }
    }

    /// Forward to the injected sender. Errors come back untouched.
    pub async fn send_data(&self, ctx: &Context, payload: Payload) -> Result<()> {
        debug!(keys = payload.len(), "Forwarding to injected sender");
        self.sender.send(ctx, payload).await
    }
}
