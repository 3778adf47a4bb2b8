//! Node conversion.

use log::debug;

use super::port::build_ports;
use super::types::{Location, Node};
use super::urn::node_urn;
use super::SdxError;
use crate::kytos::types::metadata_text;
use crate::kytos::{KytosTopology, Switch};

/// Build the SDX node for one Kytos switch.
///
/// The node is named by `metadata.node_name` when present and by the
/// datapath string otherwise. A switch with neither has no identity and is
/// rejected.
pub fn build_node(switch: &Switch, domain: &str) -> Result<Node, SdxError> {
    let name = switch
        .display_name()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| SdxError::InvalidArgument("Switch CANNOT be empty".to_string()))?;

    let location = Location {
        address: metadata_text(&switch.metadata, "address").unwrap_or_default(),
        latitude: metadata_text(&switch.metadata, "lat").unwrap_or_default(),
        longitude: metadata_text(&switch.metadata, "lng").unwrap_or_default(),
    };

    let ports = build_ports(&name, switch, domain)?;

    Ok(Node {
        id: node_urn(domain, &name),
        name,
        location,
        ports,
    })
}

/// Build nodes for every enabled switch, in mapping order
pub fn build_nodes(topology: &KytosTopology, domain: &str) -> Result<Vec<Node>, SdxError> {
    let mut nodes = Vec::with_capacity(topology.switches.len());

    for (switch_id, switch) in &topology.switches {
        if !switch.enabled {
            debug!("Skipping disabled switch {}", switch_id);
            continue;
        }
        nodes.push(build_node(switch, domain)?);
    }

    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kytos::Interface;
    use crate::sdx::types::{Nni, PortStatus, PortState, PortType};
    use serde_json::json;

    fn sw1() -> Switch {
        let mut switch = Switch {
            data_path: Some("00:00:00:00:00:00:00:01".to_string()),
            enabled: true,
            ..Default::default()
        };
        switch.metadata.insert("node_name".to_string(), json!("SW1"));
        switch.interfaces.insert(
            "00:00:00:00:00:00:00:01:1".to_string(),
            Interface {
                port_number: 1,
                name: "eth0".to_string(),
                speed: Some(100000000.0),
                active: true,
                enabled: true,
                metadata: Default::default(),
            },
        );
        switch
    }

    #[test]
    fn test_build_node_scenario() {
        let node = build_node(&sw1(), "amlight.net").unwrap();

        assert_eq!(node.name, "SW1");
        assert_eq!(node.id, "urn:sdx:node:amlight.net:SW1");
        assert_eq!(node.location, Location::default());
        assert_eq!(node.ports.len(), 1);

        let port = &node.ports[0];
        assert_eq!(port.id, "urn:sdx:port:amlight.net:SW1:1");
        assert_eq!(port.port_type, PortType::HundredGigE);
        assert_eq!(port.status, PortStatus::Up);
        assert_eq!(port.state, PortState::Enabled);
        assert_eq!(port.mtu, "1500");
        assert_eq!(port.nni, Nni::Unset);

        let serialized = serde_json::to_value(port).unwrap();
        assert_eq!(serialized["type"], json!("100GE"));
        assert_eq!(serialized["nni"], json!("False"));
    }

    #[test]
    fn test_build_node_falls_back_to_data_path() {
        let mut switch = sw1();
        switch.metadata.clear();

        let node = build_node(&switch, "amlight.net").unwrap();
        assert_eq!(node.name, "00:00:00:00:00:00:00:01");
        assert_eq!(node.ports[0].id, "urn:sdx:port:amlight.net:00:00:00:00:00:00:00:01:1");
    }

    #[test]
    fn test_build_node_location() {
        let mut switch = sw1();
        switch.metadata.insert("address".to_string(), json!("Miami, FL"));
        switch.metadata.insert("lat".to_string(), json!("25.75"));
        switch.metadata.insert("lng".to_string(), json!(-80.37));

        let node = build_node(&switch, "amlight.net").unwrap();
        assert_eq!(node.location.address, "Miami, FL");
        assert_eq!(node.location.latitude, "25.75");
        assert_eq!(node.location.longitude, "-80.37");
    }

    #[test]
    fn test_build_node_rejects_empty_switch() {
        let result = build_node(&Switch::default(), "amlight.net");
        assert!(matches!(result, Err(SdxError::InvalidArgument(_))));
    }

    #[test]
    fn test_build_nodes_only_enabled() {
        let mut disabled = sw1();
        disabled.enabled = false;
        disabled.metadata.insert("node_name".to_string(), json!("SW0"));

        let mut topology = KytosTopology::default();
        topology.switches.insert("00:00:00:00:00:00:00:00".to_string(), disabled);
        topology.switches.insert("00:00:00:00:00:00:00:01".to_string(), sw1());

        let nodes = build_nodes(&topology, "amlight.net").unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].name, "SW1");
    }
}
