use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Cancellation and deadline scope for a single call
///
/// Senders receive a context with every call. Nothing in this workspace
/// honors it yet; it is threaded through so implementations can.
#[derive(Debug, Clone)]
pub struct Context {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            token: CancellationToken::new(),
            deadline: None,
        }
    }
}

impl Context {
    /// Context that is never cancelled and has no deadline
    pub fn background() -> Self {
        Self::default()
    }

    /// Attach an externally owned cancellation token
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.token = token;
        self
    }

    /// Set an absolute deadline
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Set a deadline relative to now
    ///
    /// A timeout too large to represent leaves the context without a deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Instant::now().checked_add(timeout);
        self
    }

    /// Deadline after which the call should give up, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Token shared by every clone of this context
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.token
    }

    /// Cancel this context and every clone sharing its token
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Whether [`Context::cancel`] or the attached token has fired
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Whether the deadline, if any, has passed
    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}
