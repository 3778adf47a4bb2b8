use log::{debug, info};
use reqwest::blocking::Client;
use std::time::Duration;

use super::types::KytosTopology;
use super::KytosError;

/// Topology endpoint of a Kytos controller running on the local host
pub const DEFAULT_TOPOLOGY_URL: &str = "http://localhost:8181/api/kytos/topology/v3/";

/// Kytos topology API client
pub struct KytosClient {
    topology_url: String,
    client: Client,
}

impl KytosClient {
    /// Build a client for the given topology endpoint.
    ///
    /// When `timeout` is `None` the transport default applies.
    pub fn new(topology_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, KytosError> {
        let topology_url = topology_url.into();
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|source| KytosError::Transport {
            url: topology_url.clone(),
            source,
        })?;

        Ok(Self { topology_url, client })
    }

    pub fn topology_url(&self) -> &str {
        &self.topology_url
    }

    /// Fetch the controller's current topology.
    ///
    /// Issues a single GET; there is no retry.
    pub fn fetch_topology(&self) -> Result<KytosTopology, KytosError> {
        info!("Fetching topology from {}", self.topology_url);

        let transport = |source| KytosError::Transport {
            url: self.topology_url.clone(),
            source,
        };

        let resp = self
            .client
            .get(&self.topology_url)
            .header("Content-type", "application/json")
            .send()
            .map_err(transport)?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().unwrap_or_default();
            return Err(KytosError::Status { status, body });
        }

        let body = resp.text().map_err(transport)?;
        debug!("Kytos topology response: {} bytes", body.len());

        KytosTopology::from_api_response(&body)
    }
}
