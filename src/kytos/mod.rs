//! Kytos controller module.
//!
//! This module contains the controller-native topology records as reported by
//! the Kytos topology API, and a blocking client that fetches them.

pub mod client;
pub mod types;

pub use client::{KytosClient, DEFAULT_TOPOLOGY_URL};
pub use types::{EndpointId, Interface, KytosTopology, Link, LinkEndpoint, Metadata, Switch, LOCAL_PORT_NUMBER};

/// Errors that can occur while fetching or decoding a Kytos topology
#[derive(Debug, thiserror::Error)]
pub enum KytosError {
    #[error("Error connecting to Kytos API at {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Kytos API error {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to decode Kytos topology: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Kytos response has no 'topology' field")]
    MissingTopology,

    #[error("topology schema is not a dictionary")]
    NotAMapping,
}
