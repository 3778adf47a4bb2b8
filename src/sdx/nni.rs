//! NNI annotation.
//!
//! Second phase of the conversion: once nodes and links exist, each port that
//! terminates a link is tagged with the URN of the port at the other end.
//! The annotation is computed as a patch table keyed by `(node name, port)`
//! and applied to the nodes, so running it again changes nothing.

use log::{debug, warn};
use std::collections::HashMap;

use super::types::{Link, Nni, Node};
use super::urn::PortUrn;

/// Peer port URNs keyed by `(node name, port segment)`
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NniPatches {
    peers: HashMap<(String, String), String>,
}

impl NniPatches {
    /// Derive the patches from built links.
    ///
    /// When several links touch the same port, the last link wins. Links
    /// whose port URNs cannot be parsed are skipped with a warning.
    pub fn from_links(links: &[Link]) -> Self {
        let mut peers = HashMap::new();

        for link in links {
            let [urn_a, urn_b] = &link.ports;
            let (end_a, end_b) = match (PortUrn::parse(urn_a), PortUrn::parse(urn_b)) {
                (Ok(end_a), Ok(end_b)) => (end_a, end_b),
                (Err(err), _) | (_, Err(err)) => {
                    warn!("Skipping NNI for link {}: {}", link.id, err);
                    continue;
                }
            };

            peers.insert((end_a.node, end_a.port), urn_b.clone());
            peers.insert((end_b.node, end_b.port), urn_a.clone());
        }

        Self { peers }
    }

    /// Peer URN recorded for a port of `node_name`
    pub fn peer(&self, node_name: &str, port: &str) -> Option<&str> {
        self.peers
            .get(&(node_name.to_string(), port.to_string()))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.peers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }

    /// Return `nodes` with every linked port's `nni` set to its peer.
    ///
    /// Ports that no link touches keep their current `nni`.
    pub fn apply(&self, nodes: Vec<Node>) -> Vec<Node> {
        nodes
            .into_iter()
            .map(|mut node| {
                for port in &mut node.ports {
                    let Ok(parsed) = PortUrn::parse(&port.id) else {
                        continue;
                    };
                    if let Some(peer) = self.peer(&node.name, &parsed.port) {
                        debug!("NNI {} -> {}", port.id, peer);
                        port.nni = Nni::Peer(peer.to_string());
                    }
                }
                node
            })
            .collect()
    }
}

/// Annotate `nodes` with the neighbors implied by `links`
pub fn annotate_nni(nodes: Vec<Node>, links: &[Link]) -> Vec<Node> {
    NniPatches::from_links(links).apply(nodes)
}
