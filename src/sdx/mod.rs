//! SDX topology module.
//!
//! This module turns a Kytos snapshot into an SDX exchange topology: URN
//! construction, port/node/link conversion, NNI annotation and document
//! assembly.

pub mod link;
pub mod nni;
pub mod node;
pub mod port;
pub mod topology;
pub mod types;
pub mod urn;

// Re-export key types and functions for easier access
pub use link::{build_link, build_links};
pub use nni::{annotate_nni, NniPatches};
pub use node::{build_node, build_nodes};
pub use port::{build_port, build_ports};
pub use topology::{build_topology, build_topology_at, TopologyParams};
pub use types::{Link, Location, Nni, Node, Port, PortState, PortStatus, PortType, Topology};
pub use urn::{InterfaceRef, PortUrn};

/// Errors raised while converting a Kytos topology
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SdxError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
