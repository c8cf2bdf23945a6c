// ── Network event taxonomy ──
//
// This layer defines the notification shapes only; subscription plumbing
// and delivery are the consumer's responsibility. The tagged serialization
// matches what the backend emits on its event channel.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast::{Receiver, Sender};

use netstage_api::models::NetworkSettings;

use crate::model::Connection;

/// Events the network layer exposes upward.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum NetworkEvent {
    ActiveConnectionAdded { id: String },
    ActiveConnectionUpdated { id: String },
    ActiveConnectionRemoved { id: String },
    ConnectionAdded(Connection),
    ConnectionUpdated(Connection),
    ConnectionRemoved { id: String },
    SettingsUpdated(NetworkSettings),
}

pub type EventsSender = Sender<NetworkEvent>;
pub type EventsReceiver = Receiver<NetworkEvent>;
