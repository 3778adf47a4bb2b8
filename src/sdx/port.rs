//! Port conversion.
//!
//! Maps Kytos interfaces of one switch to SDX ports.

use log::debug;

use super::types::{Nni, Port, PortState, PortStatus, PortType, DEFAULT_MTU, PORT_SERVICES};
use super::urn::{node_port_urn, node_urn, InterfaceRef};
use super::SdxError;
use crate::kytos::types::metadata_text;
use crate::kytos::{Interface, Switch};

/// Build the SDX port for one interface of the node named `node_name`.
///
/// `nni` starts as [`Nni::Unset`] unless the interface metadata carries an
/// `nni` override; `mtu` comes from metadata or defaults to 1500.
pub fn build_port(node_name: &str, interface: &Interface, domain: &str) -> Result<Port, SdxError> {
    if node_name.is_empty() {
        return Err(SdxError::InvalidArgument("Interface and node CANNOT be empty".to_string()));
    }

    let id = node_port_urn(node_name, &InterfaceRef::Number(interface.port_number), domain)?;

    let nni = interface
        .metadata
        .get("nni")
        .map(Nni::from_metadata)
        .unwrap_or_default();
    let mtu = metadata_text(&interface.metadata, "mtu").unwrap_or_else(|| DEFAULT_MTU.to_string());

    Ok(Port {
        id,
        name: interface.name.clone(),
        node: node_urn(domain, node_name),
        port_type: PortType::from_speed(interface.speed),
        status: PortStatus::from(interface.active),
        state: PortState::from(interface.enabled),
        services: PORT_SERVICES.to_string(),
        nni,
        mtu,
    })
}

/// Build ports for every interface of `switch`, skipping the local port.
///
/// Ports keep the order of the switch's interface mapping.
pub fn build_ports(node_name: &str, switch: &Switch, domain: &str) -> Result<Vec<Port>, SdxError> {
    let mut ports = Vec::with_capacity(switch.interfaces.len());

    for (interface_id, interface) in &switch.interfaces {
        if interface.is_local() {
            debug!("Skipping local port {} of {}", interface_id, node_name);
            continue;
        }
        ports.push(build_port(node_name, interface, domain)?);
    }

    Ok(ports)
}
