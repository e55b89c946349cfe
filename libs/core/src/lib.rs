//! Dispatch Core - Shared vocabulary for senders and their consumers
//!
//! Defines the [`Payload`] carried by every send, the [`Context`] scoping a
//! call, and the [`Error`] a sender may return.

pub mod context;
pub mod error;
pub mod payload;

pub use context::Context;
pub use error::{Error, Result};
pub use payload::Payload;
