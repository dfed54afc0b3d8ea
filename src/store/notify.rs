//! Change notification for observers of the store.
//!
//! Events carry no payload beyond which family changed; observers re-read
//! the full state on receipt.

use serde::Serialize;
use tokio::sync::broadcast;

use crate::log_debug;

const ENABLE_LOGS: bool = true;

pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum StoreEvent {
    SavedLocationsChanged,
    ReviewsChanged { place_id: String },
    HelpfulVotesChanged { review_id: String },
    IdentityChanged,
}

#[derive(Debug, Clone)]
pub struct ChangeNotifier {
    sender: broadcast::Sender<StoreEvent>,
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNEL_CAPACITY)
    }
}

impl ChangeNotifier {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.sender.subscribe()
    }

    /// Broadcast `event`; returns how many observers received it.
    pub fn publish(&self, event: StoreEvent) -> usize {
        match self.sender.send(event) {
            Ok(delivered) => delivered,
            Err(broadcast::error::SendError(event)) => {
                log_debug!("No observers for {event:?}");
                0
            }
        }
    }
}
