//! SDX topology type definitions.
//!
//! These are the records of the SDX exchange topology document. Field names
//! and value spellings follow the SDX topology data model 1.0.0, so the
//! serialized document can be handed straight to the SDX controller.

use serde::{Serialize, Serializer};
use std::fmt;

/// Topology data model implemented by this crate
pub const MODEL_VERSION: &str = "1.0.0";

/// Service offered on every port
pub const PORT_SERVICES: &str = "l2vpn";

/// MTU reported when the interface metadata carries none
pub const DEFAULT_MTU: &str = "1500";

/// Complete SDX topology document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Topology {
    pub name: String,
    pub id: String,
    pub version: String,
    /// Generation time, `YYYYMMDD-HHMMSS` local time
    pub timestamp: String,
    pub model_version: String,
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub name: String,
    pub id: String,
    pub location: Location,
    pub ports: Vec<Port>,
}

/// Geographic location of a node; unknown fields are empty strings
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Location {
    pub address: String,
    pub latitude: String,
    pub longitude: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Port {
    pub id: String,
    pub name: String,
    /// URN of the owning node
    pub node: String,
    #[serde(rename = "type")]
    pub port_type: PortType,
    pub status: PortStatus,
    pub state: PortState,
    pub services: String,
    pub nni: Nni,
    pub mtu: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub name: String,
    pub id: String,
    /// Port URNs of the two ends
    pub ports: [String; 2],
}

/// Port speed class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PortType {
    #[serde(rename = "100GE")]
    HundredGigE,
    #[serde(rename = "40GE")]
    FortyGigE,
    #[serde(rename = "10GE")]
    TenGigE,
    #[serde(rename = "1GE")]
    GigE,
    Unknown,
}

impl PortType {
    /// Classify a raw OpenFlow link rate.
    ///
    /// The codes are the values Kytos reports for each class and are matched
    /// exactly; they are not bit rates.
    pub fn from_speed(speed: Option<f64>) -> Self {
        match speed {
            Some(rate) if rate == 100_000_000.0 => Self::HundredGigE,
            Some(rate) if rate == 1_250_000_000.0 => Self::TenGigE,
            Some(rate) if rate == 40_000_000.0 => Self::FortyGigE,
            Some(rate) if rate == 125_000_000.0 => Self::GigE,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HundredGigE => "100GE",
            Self::FortyGigE => "40GE",
            Self::TenGigE => "10GE",
            Self::GigE => "1GE",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for PortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operational link state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PortStatus {
    Up,
    Down,
}

impl From<bool> for PortStatus {
    fn from(active: bool) -> Self {
        if active { Self::Up } else { Self::Down }
    }
}

/// Administrative state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PortState {
    Enabled,
    Disabled,
}

impl From<bool> for PortState {
    fn from(enabled: bool) -> Self {
        if enabled { Self::Enabled } else { Self::Disabled }
    }
}

/// Neighbor of a port across an inter-switch link.
///
/// Serialized as the peer port URN, or as the string `"False"` when the port
/// has no known neighbor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Nni {
    Peer(String),
    #[default]
    Unset,
}

impl Nni {
    /// Sentinel written for ports without a neighbor
    pub const UNSET: &'static str = "False";

    /// Interpret an operator-supplied `nni` metadata value
    pub fn from_metadata(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(peer) if !peer.is_empty() && peer != Self::UNSET => {
                Self::Peer(peer.clone())
            }
            _ => Self::Unset,
        }
    }
}

impl Serialize for Nni {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Peer(peer) => serializer.serialize_str(peer),
            Self::Unset => serializer.serialize_str(Self::UNSET),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_speed_classification() {
        assert_eq!(PortType::from_speed(Some(100000000.0)), PortType::HundredGigE);
        assert_eq!(PortType::from_speed(Some(1250000000.0)), PortType::TenGigE);
        assert_eq!(PortType::from_speed(Some(40000000.0)), PortType::FortyGigE);
        assert_eq!(PortType::from_speed(Some(125000000.0)), PortType::GigE);
    }

    #[test]
    fn test_unknown_speeds() {
        for speed in [0.0, 1.0, 10000000000.0, 12500000000.0, 100000000.5, -1.0] {
            assert_eq!(PortType::from_speed(Some(speed)), PortType::Unknown, "speed {}", speed);
        }
        assert_eq!(PortType::from_speed(None), PortType::Unknown);
    }

    #[test]
    fn test_port_type_labels_match_serialization() {
        for port_type in [
            PortType::HundredGigE,
            PortType::FortyGigE,
            PortType::TenGigE,
            PortType::GigE,
            PortType::Unknown,
        ] {
            assert_eq!(serde_json::to_value(port_type).unwrap(), json!(port_type.as_str()));
        }
    }

    #[test]
    fn test_nni_serialization() {
        assert_eq!(serde_json::to_value(Nni::Unset).unwrap(), json!("False"));
        assert_eq!(
            serde_json::to_value(Nni::Peer("urn:sdx:port:a.net:SW2:1".to_string())).unwrap(),
            json!("urn:sdx:port:a.net:SW2:1")
        );
    }

    #[test]
    fn test_nni_from_metadata() {
        assert_eq!(Nni::from_metadata(&json!("urn:sdx:port:b.net:X:9")), Nni::Peer("urn:sdx:port:b.net:X:9".to_string()));
        assert_eq!(Nni::from_metadata(&json!("False")), Nni::Unset);
        assert_eq!(Nni::from_metadata(&json!(false)), Nni::Unset);
        assert_eq!(Nni::from_metadata(&json!("")), Nni::Unset);
    }

    #[test]
    fn test_status_and_state() {
        assert_eq!(serde_json::to_value(PortStatus::from(true)).unwrap(), json!("up"));
        assert_eq!(serde_json::to_value(PortStatus::from(false)).unwrap(), json!("down"));
        assert_eq!(serde_json::to_value(PortState::from(true)).unwrap(), json!("enabled"));
        assert_eq!(serde_json::to_value(PortState::from(false)).unwrap(), json!("disabled"));
    }
}
