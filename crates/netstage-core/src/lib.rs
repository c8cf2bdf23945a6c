//! Domain model and orchestration layer over `netstage-api`.
//!
//! This crate owns everything between the raw wire payloads and the rest of
//! the system:
//!
//! - **Domain model** ([`model`]) — normalized value types (`Connection`,
//!   `Device`, `AccessPoint`, `Route`, [`IpAddress`]) with the invariants
//!   enforced at construction time, so consumers never re-validate.
//!
//! - **Translation** ([`convert`]) — fallible factories turning wire records
//!   into domain objects and back. Malformed wire data (bad address literal,
//!   non-contiguous netmask, unknown device-type code) fails construction
//!   rather than producing a best-guess value.
//!
//! - **[`NetworkGateway`]** — the orchestration facade. Fetches collections,
//!   translates in both directions, and sequences every mutation as a
//!   *(write, apply)* pair against the backend's staged change-set.
//!
//! - **Event taxonomy** ([`event`]) — the notification shapes this layer
//!   exposes upward. Delivery wiring belongs to the consumer.

pub mod classify;
pub mod convert;
pub mod error;
pub mod event;
pub mod gateway;
pub mod model;
pub mod security;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::{CoreError, MutationPhase};
pub use event::{EventsReceiver, EventsSender, NetworkEvent};
pub use gateway::{NetworkGateway, WirelessOptions};
pub use security::{SecurityDecoder, SecurityProtocol, StandardFlagsDecoder};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    AccessPoint, AddressError, BondSettings, Connection, ConnectionType, Device, DeviceType,
    IpAddress, Route, VlanSettings, WirelessSettings,
};

// The wire-level settings object is returned as-is by the gateway.
pub use netstage_api::models::NetworkSettings;
