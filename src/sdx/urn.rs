//! SDX resource identifiers.
//!
//! Every entity in an SDX topology is named by a URN of the form
//!
//! ```text
//! urn:sdx:<kind>:<domain>:<path>
//! ```
//!
//! where `<domain>` is the OXP url (it never contains `:`) and `<path>` depends
//! on the kind:
//!
//! | kind       | path                                   |
//! |------------|----------------------------------------|
//! | `topology` | empty (the URN ends after the domain)  |
//! | `node`     | `<node name>`                          |
//! | `port`     | `<node name>:<interface>`              |
//! | `link`     | `<nameA>/<portA>_<nameB>/<portB>`      |
//!
//! A node name may itself contain `:` (datapath fallback names do), so a port
//! URN is split on the first `:` after the kind for the domain and on the last
//! `:` for the interface.

use std::fmt;

use super::SdxError;
use crate::naming::NameResolver;

/// Leading part shared by every SDX URN
pub const URN_PREFIX: &str = "urn:sdx";

/// Kind segment of an SDX URN
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrnKind {
    Topology,
    Node,
    Port,
    Link,
}

impl UrnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Topology => "topology",
            Self::Node => "node",
            Self::Port => "port",
            Self::Link => "link",
        }
    }
}

impl fmt::Display for UrnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interface part of a port URN: an interface name or a port number
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterfaceRef {
    Name(String),
    Number(u64),
}

impl InterfaceRef {
    fn validate(&self) -> Result<(), SdxError> {
        match self {
            Self::Name(name) if name.is_empty() => {
                Err(SdxError::InvalidArgument("Interface CANNOT be empty".to_string()))
            }
            Self::Number(0) => Err(SdxError::InvalidArgument(
                "Interface number must be positive".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for InterfaceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Number(number) => write!(f, "{}", number),
        }
    }
}

impl From<u64> for InterfaceRef {
    fn from(number: u64) -> Self {
        Self::Number(number)
    }
}

impl From<&str> for InterfaceRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for InterfaceRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// Check that `domain` can be embedded in a URN and parsed back out
pub fn validate_domain(domain: &str) -> Result<(), SdxError> {
    if domain.is_empty() {
        return Err(SdxError::InvalidArgument("Domain CANNOT be empty".to_string()));
    }
    if domain.contains(':') {
        return Err(SdxError::InvalidArgument(format!(
            "Domain '{}' must not contain ':'",
            domain
        )));
    }
    Ok(())
}

/// `urn:sdx:topology:<domain>`
pub fn topology_urn(domain: &str) -> String {
    format!("{}:{}:{}", URN_PREFIX, UrnKind::Topology, domain)
}

/// `urn:sdx:node:<domain>:<node name>`
pub fn node_urn(domain: &str, node_name: &str) -> String {
    format!("{}:{}:{}:{}", URN_PREFIX, UrnKind::Node, domain, node_name)
}

/// Link name joining both ends: `<nameA>/<portA>_<nameB>/<portB>`
pub fn link_name(name_a: &str, port_a: u64, name_b: &str, port_b: u64) -> String {
    format!("{}/{}_{}/{}", name_a, port_a, name_b, port_b)
}

/// `urn:sdx:link:<domain>:<link name>`
pub fn link_urn(domain: &str, link_name: &str) -> String {
    format!("{}:{}:{}:{}", URN_PREFIX, UrnKind::Link, domain, link_name)
}

/// Port URN for an interface of an already-named node
pub fn node_port_urn(node_name: &str, interface: &InterfaceRef, domain: &str) -> Result<String, SdxError> {
    if node_name.is_empty() {
        return Err(SdxError::InvalidArgument("Node CANNOT be empty".to_string()));
    }
    interface.validate()?;

    Ok(format!("{}:{}:{}:{}:{}", URN_PREFIX, UrnKind::Port, domain, node_name, interface))
}

/// Port URN for an interface of a Kytos switch.
///
/// The switch id is resolved to its display name; an unknown switch keeps
/// its raw id as the name.
pub fn port_urn<R>(resolver: &R, switch: &str, interface: &InterfaceRef, domain: &str) -> Result<String, SdxError>
where
    R: NameResolver + ?Sized,
{
    if switch.is_empty() {
        return Err(SdxError::InvalidArgument("Switch CANNOT be empty".to_string()));
    }
    node_port_urn(resolver.display_name(switch), interface, domain)
}

/// A parsed port URN
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortUrn {
    pub domain: String,
    pub node: String,
    pub port: String,
}

impl PortUrn {
    pub fn parse(urn: &str) -> Result<Self, SdxError> {
        let malformed = || SdxError::InvalidArgument(format!("'{}' is not an SDX port URN", urn));

        let rest = urn
            .strip_prefix(URN_PREFIX)
            .and_then(|rest| rest.strip_prefix(':'))
            .and_then(|rest| rest.strip_prefix(UrnKind::Port.as_str()))
            .and_then(|rest| rest.strip_prefix(':'))
            .ok_or_else(malformed)?;
        let (domain, path) = rest.split_once(':').ok_or_else(malformed)?;
        let (node, port) = path.rsplit_once(':').ok_or_else(malformed)?;

        if domain.is_empty() || node.is_empty() || port.is_empty() {
            return Err(malformed());
        }

        Ok(Self {
            domain: domain.to_string(),
            node: node.to_string(),
            port: port.to_string(),
        })
    }
}

impl fmt::Display for PortUrn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}:{}:{}", URN_PREFIX, UrnKind::Port, self.domain, self.node, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn names() -> HashMap<String, String> {
        let mut names = HashMap::new();
        names.insert("00:00:00:00:00:00:00:01".to_string(), "SW1".to_string());
        names
    }

    #[test]
    fn test_fixed_urns() {
        assert_eq!(topology_urn("amlight.net"), "urn:sdx:topology:amlight.net");
        assert_eq!(node_urn("amlight.net", "SW1"), "urn:sdx:node:amlight.net:SW1");
        assert_eq!(link_name("SW1", 1, "SW2", 3), "SW1/1_SW2/3");
        assert_eq!(link_urn("amlight.net", "SW1/1_SW2/3"), "urn:sdx:link:amlight.net:SW1/1_SW2/3");
    }

    #[test]
    fn test_port_urn_resolves_switch() {
        let urn = port_urn(&names(), "00:00:00:00:00:00:00:01", &InterfaceRef::Number(1), "amlight.net").unwrap();
        assert_eq!(urn, "urn:sdx:port:amlight.net:SW1:1");

        let urn = port_urn(&names(), "00:00:00:00:00:00:00:01", &InterfaceRef::from("eth0"), "amlight.net").unwrap();
        assert_eq!(urn, "urn:sdx:port:amlight.net:SW1:eth0");
    }

    #[test]
    fn test_port_urn_unknown_switch_uses_raw_id() {
        let urn = port_urn(&names(), "Tenet03", &InterfaceRef::Number(50), "ampath.net").unwrap();
        assert_eq!(urn, "urn:sdx:port:ampath.net:Tenet03:50");
    }

    #[test]
    fn test_port_urn_argument_errors() {
        let names = names();
        assert!(port_urn(&names, "", &InterfaceRef::Number(1), "amlight.net").is_err());
        assert!(port_urn(&names, "SW1", &InterfaceRef::Number(0), "amlight.net").is_err());
        assert!(port_urn(&names, "SW1", &InterfaceRef::Name(String::new()), "amlight.net").is_err());
        assert!(node_port_urn("", &InterfaceRef::Number(1), "amlight.net").is_err());
    }

    #[test]
    fn test_validate_domain() {
        assert!(validate_domain("amlight.net").is_ok());
        assert!(validate_domain("").is_err());
        assert!(validate_domain("amlight.net:8080").is_err());
    }

    #[test]
    fn test_port_urn_parse() {
        let parsed = PortUrn::parse("urn:sdx:port:amlight.net:SW1:1").unwrap();
        assert_eq!(parsed.domain, "amlight.net");
        assert_eq!(parsed.node, "SW1");
        assert_eq!(parsed.port, "1");
        assert_eq!(parsed.to_string(), "urn:sdx:port:amlight.net:SW1:1");
    }

    #[test]
    fn test_port_urn_parse_node_name_with_colons() {
        let parsed = PortUrn::parse("urn:sdx:port:amlight.net:00:00:00:00:00:00:00:01:2").unwrap();
        assert_eq!(parsed.node, "00:00:00:00:00:00:00:01");
        assert_eq!(parsed.port, "2");
    }

    #[test]
    fn test_port_urn_parse_rejects_other_kinds() {
        assert!(PortUrn::parse("urn:sdx:node:amlight.net:SW1").is_err());
        assert!(PortUrn::parse("urn:sdx:port:amlight.net:SW1").is_err());
        assert!(PortUrn::parse("urn:sdx:port:amlight.net::1").is_err());
        assert!(PortUrn::parse("SW1:1").is_err());
    }
}
