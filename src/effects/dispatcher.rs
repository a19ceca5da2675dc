//! Forwarding completion signals to the effect runner

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::timer::EffectDispatcher;

/// A request to present the end-of-timer effect
#[derive(Debug, Clone)]
pub struct EffectRequest {
    pub total_seconds: u64,
    pub finished_at: DateTime<Utc>,
}

/// Dispatcher that hands completions to a channel without waiting on them
#[derive(Debug, Clone)]
pub struct ChannelDispatcher {
    tx: mpsc::UnboundedSender<EffectRequest>,
}

impl ChannelDispatcher {
    pub fn new(tx: mpsc::UnboundedSender<EffectRequest>) -> Self {
        Self { tx }
    }

    /// Create a dispatcher together with the receiving end
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<EffectRequest>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

impl EffectDispatcher for ChannelDispatcher {
    fn on_finished(&mut self, total_seconds: u64) {
        let request = EffectRequest {
            total_seconds,
            finished_at: Utc::now(),
        };

        match self.tx.send(request) {
            Ok(()) => debug!("Effect requested for {}s countdown", total_seconds),
            Err(e) => warn!("Effect runner is gone, dropping request: {}", e),
        }
    }
}
