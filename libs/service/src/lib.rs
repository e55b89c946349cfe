//! Dispatch Service - Two ways to wire a consumer to its sender
//!
//! - [`coupled::UserService`] owns the concrete [`dispatch_sender::Service`].
//!   Only the success path can be exercised without changing that type.
//! - [`injected::UserService`] owns anything implementing
//!   [`dispatch_sender::Sender`], so tests can substitute a stub.
//!
//! Both forward `send_data` to their sender and return its result verbatim.

pub mod coupled;
pub mod injected;
