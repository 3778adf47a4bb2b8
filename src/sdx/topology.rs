//! Topology assembly.
//!
//! Runs the whole conversion over one Kytos snapshot: nodes, links, NNI
//! annotation, and the document header.

use chrono::{DateTime, Local};
use log::info;

use super::link::build_links;
use super::nni::annotate_nni;
use super::node::build_nodes;
use super::types::{Topology, MODEL_VERSION};
use super::urn::{topology_urn, validate_domain};
use super::SdxError;
use crate::kytos::KytosTopology;
use crate::naming::NameResolver;

/// Format of the `timestamp` field
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Header values supplied by the OXP operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologyParams {
    /// Topology schema version
    pub version: String,
    /// Human-readable OXP name
    pub oxp_name: String,
    /// OXP domain embedded in every URN
    pub oxp_url: String,
}

/// Current local time as a topology timestamp
pub fn timestamp_now() -> String {
    format_timestamp(&Local::now())
}

pub fn format_timestamp(at: &DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Convert a Kytos snapshot into an SDX topology stamped with the current time
pub fn build_topology<R>(kytos: &KytosTopology, resolver: &R, params: &TopologyParams) -> Result<Topology, SdxError>
where
    R: NameResolver + ?Sized,
{
    build_topology_at(kytos, resolver, params, timestamp_now())
}

/// Convert a Kytos snapshot into an SDX topology with an explicit timestamp
pub fn build_topology_at<R>(
    kytos: &KytosTopology,
    resolver: &R,
    params: &TopologyParams,
    timestamp: String,
) -> Result<Topology, SdxError>
where
    R: NameResolver + ?Sized,
{
    if kytos.is_empty() {
        return Err(SdxError::InvalidArgument("Kytos topology CANNOT be empty".to_string()));
    }

    let domain = params.oxp_url.as_str();
    validate_domain(domain)?;

    let nodes = build_nodes(kytos, domain)?;
    let links = build_links(kytos, resolver, domain)?;
    let nodes = annotate_nni(nodes, &links);

    info!(
        "Built topology {}: {} nodes, {} ports, {} links",
        topology_urn(domain),
        nodes.len(),
        nodes.iter().map(|node| node.ports.len()).sum::<usize>(),
        links.len()
    );

    Ok(Topology {
        name: params.oxp_name.clone(),
        id: topology_urn(domain),
        version: params.version.clone(),
        timestamp,
        model_version: MODEL_VERSION.to_string(),
        nodes,
        links,
    })
}
