use async_trait::async_trait;
use dispatch_core::{Context, Error, Payload, Result};
use dispatch_sender::Sender;
use serde_json::json;

/// Sender that ignores its inputs and returns a fixed outcome
#[derive(Debug, Clone, Default)]
pub struct StubSender {
    err: Option<Error>,
}

impl StubSender {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn failing(err: Error) -> Self {
        Self { err: Some(err) }
    }
}

#[async_trait]
impl Sender for StubSender {
    async fn send(&self, _ctx: &Context, _payload: Payload) -> Result<()> {
        match &self.err {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

pub fn sample_payloads() -> Vec<Payload> {
    vec![
        Payload::new(),
        Payload::new().with("name", "test"),
        Payload::new().with("id", 7).with("nothing", json!(null)),
        Payload::new().with("nested", json!({"a": [1, 2, {"b": false}]})),
    ]
}
