//! Switch name resolution.
//!
//! Every SDX identifier embeds a switch's display name rather than its
//! datapath id. The mapping is built once per run from a topology snapshot and
//! handed to the identifier builders through the [`NameResolver`] trait.

use std::collections::HashMap;

use crate::kytos::KytosTopology;

/// Capability to map a Kytos switch id to its display name
pub trait NameResolver {
    /// Display name for `switch_id`, if the switch is known
    fn resolve(&self, switch_id: &str) -> Option<&str>;

    /// Display name for `switch_id`, falling back to the raw id
    fn display_name<'a>(&'a self, switch_id: &'a str) -> &'a str {
        self.resolve(switch_id).unwrap_or(switch_id)
    }
}

/// Switch id to display name mapping taken from one topology snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeNames {
    names: HashMap<String, String>,
}

impl NodeNames {
    /// Build the mapping for every switch in the snapshot, enabled or not.
    ///
    /// Switches without a `node_name` or `data_path` map to their own id.
    pub fn from_topology(topology: &KytosTopology) -> Self {
        let names = topology
            .switches
            .iter()
            .map(|(switch_id, switch)| {
                let name = switch.display_name().unwrap_or_else(|| switch_id.clone());
                (switch_id.clone(), name)
            })
            .collect();

        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl NameResolver for NodeNames {
    fn resolve(&self, switch_id: &str) -> Option<&str> {
        self.names.get(switch_id).map(String::as_str)
    }
}

impl NameResolver for HashMap<String, String> {
    fn resolve(&self, switch_id: &str) -> Option<&str> {
        self.get(switch_id).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> KytosTopology {
        KytosTopology::from_snapshot(
            r#"{"switches": {
                "00:00:00:00:00:00:00:01": {"data_path": "dp-1", "enabled": true, "metadata": {"node_name": "SW1"}},
                "00:00:00:00:00:00:00:02": {"data_path": "dp-2", "enabled": false, "metadata": {}},
                "00:00:00:00:00:00:00:03": {"enabled": true}
            }}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_node_names_from_topology() {
        let names = NodeNames::from_topology(&snapshot());
        assert_eq!(names.len(), 3);
        assert_eq!(names.resolve("00:00:00:00:00:00:00:01"), Some("SW1"));
        assert_eq!(names.resolve("00:00:00:00:00:00:00:02"), Some("dp-2"));
        assert_eq!(names.resolve("00:00:00:00:00:00:00:03"), Some("00:00:00:00:00:00:00:03"));
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let names = NodeNames::from_topology(&snapshot());
        assert_eq!(names.display_name("00:00:00:00:00:00:00:01"), "SW1");
        assert_eq!(names.display_name("00:00:00:00:00:00:00:99"), "00:00:00:00:00:00:00:99");
    }

    #[test]
    fn test_hash_map_resolver() {
        let mut names = HashMap::new();
        names.insert("dpid".to_string(), "Ampath1".to_string());
        assert_eq!(names.display_name("dpid"), "Ampath1");
        assert_eq!(names.resolve("other"), None);
    }
}
