//! Kytos topology type definitions.
//!
//! These mirror the JSON documents served by the Kytos topology API
//! (`/api/kytos/topology/v3/`). Only the attributes the SDX conversion reads
//! are modelled; everything else in the payload is ignored on decode.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::KytosError;
use crate::sdx::SdxError;

/// Port number OpenFlow reserves for the switch's local (virtual) port
pub const LOCAL_PORT_NUMBER: u64 = 4294967294;

/// Number of colon-separated segments in a Kytos datapath id
const DPID_SEGMENTS: usize = 8;

/// Free-form metadata attached to switches and interfaces
pub type Metadata = serde_json::Map<String, Value>;

/// Read a metadata attribute as text.
///
/// Strings are returned as-is and numbers are rendered in decimal; any other
/// JSON type is treated as absent.
pub fn metadata_text(metadata: &Metadata, key: &str) -> Option<String> {
    match metadata.get(key)? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Controller-native topology snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KytosTopology {
    /// Switches keyed by datapath id, in the order the controller reported them
    #[serde(default)]
    pub switches: IndexMap<String, Switch>,
    /// Links keyed by link id, in the order the controller reported them
    #[serde(default)]
    pub links: IndexMap<String, Link>,
}

impl KytosTopology {
    /// Decode a topology API response, which wraps the topology in a
    /// top-level `topology` field.
    pub fn from_api_response(body: &str) -> Result<Self, KytosError> {
        let mut response: Value = serde_json::from_str(body)?;
        let topology = response
            .get_mut("topology")
            .map(Value::take)
            .ok_or(KytosError::MissingTopology)?;
        Self::from_value(topology)
    }

    /// Decode a saved snapshot: either a full API response or the bare
    /// topology object.
    pub fn from_snapshot(body: &str) -> Result<Self, KytosError> {
        let mut document: Value = serde_json::from_str(body)?;
        let topology = match document.get_mut("topology") {
            Some(inner) => inner.take(),
            None => document,
        };
        Self::from_value(topology)
    }

    fn from_value(topology: Value) -> Result<Self, KytosError> {
        if !topology.is_object() {
            return Err(KytosError::NotAMapping);
        }
        Ok(serde_json::from_value(topology)?)
    }

    /// True when the snapshot carries neither switches nor links
    pub fn is_empty(&self) -> bool {
        self.switches.is_empty() && self.links.is_empty()
    }
}

/// A switch as reported by Kytos
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Switch {
    /// Native datapath string, used as the display name when no
    /// operator-assigned `node_name` exists
    #[serde(default)]
    pub data_path: Option<String>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub metadata: Metadata,
    /// Interfaces keyed by interface id (`<dpid>:<port>`)
    #[serde(default)]
    pub interfaces: IndexMap<String, Interface>,
}

impl Switch {
    /// Operator-assigned name from `metadata.node_name`, falling back to the
    /// datapath string.
    pub fn display_name(&self) -> Option<String> {
        if let Some(name) = metadata_text(&self.metadata, "node_name") {
            return Some(name);
        }
        self.data_path.clone()
    }
}

/// A switch interface as reported by Kytos
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Interface {
    pub port_number: u64,
    #[serde(default)]
    pub name: String,
    /// Raw link rate as reported by OpenFlow
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Interface {
    /// Whether this is the switch's reserved local port
    pub fn is_local(&self) -> bool {
        self.port_number == LOCAL_PORT_NUMBER
    }
}

/// A link between two switch interfaces as reported by Kytos
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub endpoint_a: LinkEndpoint,
    pub endpoint_b: LinkEndpoint,
    #[serde(default)]
    pub enabled: bool,
}

/// One end of a Kytos link; `id` is the interface id of that end
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkEndpoint {
    pub id: String,
}

/// A parsed Kytos interface id.
///
/// Grammar: `<dpid>:<port>` where `<dpid>` is exactly eight colon-separated
/// segments (e.g. `00:00:00:00:00:00:00:01`) and `<port>` is a decimal port
/// number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointId {
    pub switch: String,
    pub port: u64,
}

impl EndpointId {
    pub fn parse(id: &str) -> Result<Self, SdxError> {
        let segments: Vec<&str> = id.split(':').collect();
        if segments.len() != DPID_SEGMENTS + 1 {
            return Err(SdxError::InvalidArgument(format!(
                "endpoint id '{}' must have {} colon-separated segments, found {}",
                id,
                DPID_SEGMENTS + 1,
                segments.len()
            )));
        }

        let switch = segments[..DPID_SEGMENTS].join(":");
        let port = segments[DPID_SEGMENTS].parse::<u64>().map_err(|_| {
            SdxError::InvalidArgument(format!(
                "endpoint id '{}' has a non-numeric port '{}'",
                id, segments[DPID_SEGMENTS]
            ))
        })?;

        Ok(Self { switch, port })
    }
}
