// ── Configuration gateway ──
//
// Orchestration facade over `NetworkApi`. Every collection read performs the
// full wire-to-domain translation before returning; partially-translated
// records never escape. Every mutation is a *(write, apply)* pair: the
// backend stages connection changes and only commits them on the apply call,
// which is issued strictly after the write response is observed.
//
// Two API tiers per operation where history demands it: `try_*` methods
// surface the failure cause, while the plain methods keep the original
// contract (collections degrade to empty and log; mutations collapse to
// option/boolean). Callers of the plain tier cannot distinguish "empty"
// from "unreachable backend" without reading the logs.

use std::sync::Arc;

use tracing::warn;

use netstage_api::models::{NetworkSettings, WireConnection};
use netstage_api::NetworkApi;

use crate::convert::access_point_from_wire;
use crate::error::{CoreError, MutationPhase};
use crate::model::{AccessPoint, Connection, ConnectionType, Device, WirelessSettings};
use crate::security::{SecurityDecoder, StandardFlagsDecoder};

/// Options for [`NetworkGateway::add_and_connect_to`].
#[derive(Debug, Clone, Default)]
pub struct WirelessOptions {
    pub security: Option<String>,
    pub password: Option<String>,
    pub hidden: bool,
    pub mode: Option<String>,
}

/// High-level gateway to the network configuration service.
///
/// Holds no state beyond the API handle and the injected security decoder;
/// the staged change-set lives in the backend and is shared by every caller
/// of the same service. Concurrent flows get independent request sequences,
/// and concurrent updates to the same connection id are resolved by whoever
/// applies last.
pub struct NetworkGateway {
    api: NetworkApi,
    security: Arc<dyn SecurityDecoder>,
}

impl NetworkGateway {
    /// Create a gateway with the standard 802.11 flags decoder.
    pub fn new(api: NetworkApi) -> Self {
        Self::with_security_decoder(api, Arc::new(StandardFlagsDecoder))
    }

    /// Create a gateway with a custom security-flags decoder.
    pub fn with_security_decoder(api: NetworkApi, security: Arc<dyn SecurityDecoder>) -> Self {
        Self { api, security }
    }

    // ── Collections ──────────────────────────────────────────────────

    /// Fetch all devices, translated to domain form.
    pub async fn try_devices(&self) -> Result<Vec<Device>, CoreError> {
        let wire = self.api.devices().await?;
        wire.into_iter().map(Device::try_from).collect()
    }

    /// Fetch all devices; on failure, logs and returns an empty list.
    pub async fn devices(&self) -> Vec<Device> {
        self.try_devices().await.unwrap_or_else(|e| {
            warn!(error = %e, "fetching devices failed; returning empty list");
            Vec::new()
        })
    }

    /// Fetch all connections, translated to domain form.
    pub async fn try_connections(&self) -> Result<Vec<Connection>, CoreError> {
        let wire = self.api.connections().await?;
        wire.into_iter().map(Connection::try_from).collect()
    }

    /// Fetch all connections; on failure, logs and returns an empty list.
    pub async fn connections(&self) -> Vec<Connection> {
        self.try_connections().await.unwrap_or_else(|e| {
            warn!(error = %e, "fetching connections failed; returning empty list");
            Vec::new()
        })
    }

    /// Fetch visible access points, with security decoded by the injected
    /// strategy.
    pub async fn try_access_points(&self) -> Result<Vec<AccessPoint>, CoreError> {
        let wire = self.api.access_points().await?;
        wire.into_iter()
            .map(|ap| access_point_from_wire(ap, self.security.as_ref()))
            .collect()
    }

    /// Fetch visible access points; on failure, logs and returns an empty
    /// list.
    pub async fn access_points(&self) -> Vec<AccessPoint> {
        self.try_access_points().await.unwrap_or_else(|e| {
            warn!(error = %e, "fetching access points failed; returning empty list");
            Vec::new()
        })
    }

    /// Fetch the general network state.
    pub async fn try_settings(&self) -> Result<NetworkSettings, CoreError> {
        Ok(self.api.settings().await?)
    }

    /// Fetch the general network state; on failure, logs and returns the
    /// default (all-off) settings.
    pub async fn settings(&self) -> NetworkSettings {
        self.try_settings().await.unwrap_or_else(|e| {
            warn!(error = %e, "fetching settings failed; returning defaults");
            NetworkSettings::default()
        })
    }

    // ── Lookup ───────────────────────────────────────────────────────

    /// Find a connection by id. Absence is a normal outcome, not an error;
    /// a transport failure is an error.
    pub async fn get_connection(&self, id: &str) -> Result<Option<Connection>, CoreError> {
        Ok(self
            .try_connections()
            .await?
            .into_iter()
            .find(|c| c.id == id))
    }

    // ── Mutations (write + apply) ────────────────────────────────────

    /// Create a connection and commit the change-set. Returns the
    /// server-normalized record.
    pub async fn try_add_connection(&self, conn: &Connection) -> Result<Connection, CoreError> {
        let wire = WireConnection::from(conn);
        let created = self
            .api
            .add_connection(&wire)
            .await
            .map_err(|e| CoreError::Mutation {
                phase: MutationPhase::Write,
                source: e,
            })?;
        self.apply_phase().await?;
        Connection::try_from(created)
    }

    /// Create a connection; on failure, logs and returns `None`. Callers
    /// must treat `None` as failure.
    pub async fn add_connection(&self, conn: &Connection) -> Option<Connection> {
        match self.try_add_connection(conn).await {
            Ok(created) => Some(created),
            Err(e) => {
                warn!(id = %conn.id, error = %e, "adding connection failed");
                None
            }
        }
    }

    /// Update a connection (matched by `id`) and commit the change-set.
    ///
    /// The error records which phase broke; an `Apply`-phase failure means
    /// the update is staged but not committed.
    pub async fn try_update_connection(&self, conn: &Connection) -> Result<(), CoreError> {
        let wire = WireConnection::from(conn);
        self.api
            .update_connection(&conn.id, &wire)
            .await
            .map_err(|e| CoreError::Mutation {
                phase: MutationPhase::Write,
                source: e,
            })?;
        self.apply_phase().await
    }

    /// Update a connection; `true` iff both the update and the apply
    /// succeeded. The phase information is collapsed away.
    pub async fn update_connection(&self, conn: &Connection) -> bool {
        match self.try_update_connection(conn).await {
            Ok(()) => true,
            Err(e) => {
                warn!(id = %conn.id, error = %e, "updating connection failed");
                false
            }
        }
    }

    /// Delete a connection and commit the change-set.
    pub async fn try_delete_connection(&self, id: &str) -> Result<(), CoreError> {
        self.api
            .delete_connection(id)
            .await
            .map_err(|e| CoreError::Mutation {
                phase: MutationPhase::Write,
                source: e,
            })?;
        self.apply_phase().await
    }

    /// Delete a connection; `true` iff both the delete and the apply
    /// succeeded.
    pub async fn delete_connection(&self, id: &str) -> bool {
        match self.try_delete_connection(id).await {
            Ok(()) => true,
            Err(e) => {
                warn!(id, error = %e, "deleting connection failed");
                false
            }
        }
    }

    /// Add a connection and bring it up. Activation is implicit server-side
    /// on write; the subsequent apply commits it.
    pub async fn connect_to(&self, conn: &Connection) -> Result<Connection, CoreError> {
        self.try_add_connection(conn).await
    }

    /// Synthesize a wireless connection for `ssid` (with `id = ssid`) and
    /// connect to it.
    pub async fn add_and_connect_to(
        &self,
        ssid: &str,
        options: WirelessOptions,
    ) -> Result<Connection, CoreError> {
        let conn = Connection {
            id: ssid.to_owned(),
            connection_type: ConnectionType::Wireless,
            wireless: Some(WirelessSettings {
                ssid: ssid.to_owned(),
                security: options.security,
                password: options.password,
                hidden: options.hidden,
                mode: options.mode,
            }),
            ..Connection::default()
        };
        self.connect_to(&conn).await
    }

    /// Commit the staged change-set. Invoked automatically by every
    /// mutating operation, but independently callable.
    pub async fn apply(&self) -> Result<(), CoreError> {
        Ok(self.api.apply().await?)
    }

    /// Apply step of a two-phase mutation; failures carry the phase.
    async fn apply_phase(&self) -> Result<(), CoreError> {
        self.api.apply().await.map_err(|e| CoreError::Mutation {
            phase: MutationPhase::Apply,
            source: e,
        })
    }
}
