//! Link conversion.

use log::debug;

use super::types::Link;
use super::urn::{link_name, link_urn, port_urn, InterfaceRef};
use super::SdxError;
use crate::kytos::{EndpointId, KytosTopology, Link as KytosLink};
use crate::naming::NameResolver;

/// Build the SDX link for one Kytos link.
///
/// Returns `Ok(None)` when both ends sit on the same switch; such loops are
/// not part of the exchange topology.
pub fn build_link<R>(link: &KytosLink, resolver: &R, domain: &str) -> Result<Option<Link>, SdxError>
where
    R: NameResolver + ?Sized,
{
    let end_a = EndpointId::parse(&link.endpoint_a.id)?;
    let end_b = EndpointId::parse(&link.endpoint_b.id)?;

    if end_a.switch == end_b.switch {
        return Ok(None);
    }

    let name = link_name(
        resolver.display_name(&end_a.switch),
        end_a.port,
        resolver.display_name(&end_b.switch),
        end_b.port,
    );

    let ports = [
        port_urn(resolver, &end_a.switch, &InterfaceRef::Number(end_a.port), domain)?,
        port_urn(resolver, &end_b.switch, &InterfaceRef::Number(end_b.port), domain)?,
    ];

    Ok(Some(Link {
        id: link_urn(domain, &name),
        name,
        ports,
    }))
}

/// Build links for every enabled Kytos link, dropping switch loops
pub fn build_links<R>(topology: &KytosTopology, resolver: &R, domain: &str) -> Result<Vec<Link>, SdxError>
where
    R: NameResolver + ?Sized,
{
    let mut links = Vec::with_capacity(topology.links.len());

    for (link_id, link) in &topology.links {
        if !link.enabled {
            debug!("Skipping disabled link {}", link_id);
            continue;
        }
        match build_link(link, resolver, domain)? {
            Some(sdx_link) => links.push(sdx_link),
            None => debug!("Dropping link {}: both ends on the same switch", link_id),
        }
    }

    Ok(links)
}
