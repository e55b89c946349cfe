//! Dispatch Sender - The "can send data" capability
//!
//! [`Sender`] is the contract consumers should depend on. [`Service`] is the
//! reference implementation; it records the payload and always succeeds.
//!
//! # Example
//!
//! ```
//! use dispatch_core::{Context, Payload};
//! use dispatch_sender::{Sender, Service};
//!
//! # async fn example() -> dispatch_core::Result<()> {
//! let sender = Service::builder().destination("audit log").build();
//! sender
//!     .send(&Context::background(), Payload::new().with("name", "test"))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod service;

use std::sync::Arc;

use dispatch_core::{Context, Payload, Result};

pub use self::service::{Service, ServiceBuilder};

/// Capability for sending a payload somewhere outside the caller
#[async_trait::async_trait]
pub trait Sender: Send + Sync {
    /// Send the payload, returning the failure reason if it could not be sent
    async fn send(&self, ctx: &Context, payload: Payload) -> Result<()>;
}

#[async_trait::async_trait]
impl<S: Sender + ?Sized> Sender for Box<S> {
    async fn send(&self, ctx: &Context, payload: Payload) -> Result<()> {
        (**self).send(ctx, payload).await
    }
}

#[async_trait::async_trait]
impl<S: Sender + ?Sized> Sender for Arc<S> {
    async fn send(&self, ctx: &Context, payload: Payload) -> Result<()> {
        (**self).send(ctx, payload).await
    }
}

#[async_trait::async_trait]
impl<S: Sender + ?Sized> Sender for &S {
    async fn send(&self, ctx: &Context, payload: Payload) -> Result<()> {
        (**self).send(ctx, payload).await
    }
}
