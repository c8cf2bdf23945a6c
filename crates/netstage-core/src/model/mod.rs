// Domain model types.
//
// All of these are plain owned value objects: the gateway hands them out and
// never caches or mutates them afterwards. Cross-references between entities
// are by `id`/`iface` string, never by pointer.

pub mod address;
pub mod connection;
pub mod device;
pub mod route;
pub mod wifi;

pub use address::{AddressError, IpAddress};
pub use connection::{BondSettings, Connection, ConnectionType, VlanSettings, WirelessSettings};
pub use device::{Device, DeviceType};
pub use route::Route;
pub use wifi::AccessPoint;
