//! # kytos-sdx - Kytos to SDX topology converter
//!
//! This library converts the topology reported by a Kytos SDN controller into
//! the topology document an Open Exchange Point (OXP) publishes to the SDX
//! controller.
//!
//! ## Overview
//!
//! The conversion is a single stateless pass over one controller snapshot:
//!
//! 1. The switch list is turned into a switch-id to display-name mapping
//!    (operator `node_name` metadata, else the datapath string).
//! 2. Every enabled switch becomes an SDX node and every interface except the
//!    local port becomes an SDX port.
//! 3. Every enabled link between two different switches becomes an SDX link.
//! 4. Ports at either end of a link are annotated with their neighbor's URN
//!    (the NNI).
//! 5. The document is stamped with the OXP name, domain URN, version and
//!    generation time.
//!
//! ## Architecture
//!
//! - `kytos`: controller-native records and the topology API client
//! - `naming`: switch name resolution, injected into the URN builders
//! - `sdx`: URN grammar, node/port/link conversion, NNI annotation, assembly
//! - `config`: YAML configuration with command-line overrides
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use kytos_sdx::kytos::KytosClient;
//! use kytos_sdx::naming::NodeNames;
//! use kytos_sdx::sdx::{build_topology, TopologyParams};
//!
//! let client = KytosClient::new(kytos_sdx::kytos::DEFAULT_TOPOLOGY_URL, None)?;
//! let kytos = client.fetch_topology()?;
//! let names = NodeNames::from_topology(&kytos);
//!
//! let params = TopologyParams {
//!     version: "1".to_string(),
//!     oxp_name: "AmLight-OXP".to_string(),
//!     oxp_url: "amlight.net".to_string(),
//! };
//! let topology = build_topology(&kytos, &names, &params)?;
//! println!("{}", serde_json::to_string_pretty(&topology)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Identifiers
//!
//! All identifiers follow `urn:sdx:<kind>:<domain>:<path>`:
//!
//! ```text
//! urn:sdx:topology:amlight.net
//! urn:sdx:node:amlight.net:Ampath1
//! urn:sdx:port:amlight.net:Ampath1:50
//! urn:sdx:link:amlight.net:Ampath1/50_Ampath2/51
//! ```
//!
//! ## Error Handling
//!
//! Library functions return typed `thiserror` errors (`SdxError`,
//! `KytosError`, `ConfigError`); the command-line tool wraps them with
//! `color_eyre` for reporting.

pub mod config;
pub mod kytos;
pub mod naming;
pub mod sdx;
