// Network service endpoints
//
// Thin typed layer over `BaseHttpClient` for the `/network/*` surface.
// The backend stages every connection change; nothing takes effect on the
// managed system until `apply` commits the change-set, so callers are
// expected to pair each mutation with an `apply` call.

use tracing::debug;

use crate::client::BaseHttpClient;
use crate::error::Error;
use crate::models::{NetworkSettings, WireAccessPoint, WireConnection, WireDevice};

/// Typed client for the network configuration endpoints.
pub struct NetworkApi {
    client: BaseHttpClient,
}

impl NetworkApi {
    pub fn new(client: BaseHttpClient) -> Self {
        Self { client }
    }

    /// The underlying HTTP client.
    pub fn client(&self) -> &BaseHttpClient {
        &self.client
    }

    /// List all network devices.
    ///
    /// `GET /network/devices`
    pub async fn devices(&self) -> Result<Vec<WireDevice>, Error> {
        self.client.get("/network/devices").await
    }

    /// List all configured connections.
    ///
    /// `GET /network/connections`
    pub async fn connections(&self) -> Result<Vec<WireConnection>, Error> {
        self.client.get("/network/connections").await
    }

    /// Create a connection in the staged change-set.
    ///
    /// `POST /network/connections` — returns the server-normalized record.
    pub async fn add_connection(&self, conn: &WireConnection) -> Result<WireConnection, Error> {
        debug!(id = %conn.id, "adding connection");
        self.client.post("/network/connections", conn).await
    }

    /// Replace a staged connection, matched by id.
    ///
    /// `PUT /network/connections/{id}`
    pub async fn update_connection(&self, id: &str, conn: &WireConnection) -> Result<(), Error> {
        debug!(id, "updating connection");
        self.client
            .put_void(&format!("/network/connections/{id}"), conn)
            .await
    }

    /// Remove a connection from the staged change-set.
    ///
    /// `DELETE /network/connections/{id}`
    pub async fn delete_connection(&self, id: &str) -> Result<(), Error> {
        debug!(id, "deleting connection");
        self.client
            .delete_void(&format!("/network/connections/{id}"))
            .await
    }

    /// List visible wireless access points.
    ///
    /// `GET /network/wifi`
    pub async fn access_points(&self) -> Result<Vec<WireAccessPoint>, Error> {
        self.client.get("/network/wifi").await
    }

    /// Fetch the general network state.
    ///
    /// `GET /network/settings`
    pub async fn settings(&self) -> Result<NetworkSettings, Error> {
        self.client.get("/network/settings").await
    }

    /// Commit the staged change-set to the managed system.
    ///
    /// `PUT /network/system/apply` — the backend expects a body, even an
    /// empty one, so an empty array is sent.
    pub async fn apply(&self) -> Result<(), Error> {
        debug!("applying staged network changes");
        let empty_body: [String; 0] = [];
        self.client.put_void("/network/system/apply", &empty_body).await
    }
}
