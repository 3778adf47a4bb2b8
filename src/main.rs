use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::{error, info};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use kytos_sdx::config::{self, Config, ConfigOverrides};
use kytos_sdx::kytos::{KytosClient, KytosError, KytosTopology};
use kytos_sdx::naming::NodeNames;
use kytos_sdx::sdx::build_topology;

/// Convert a Kytos controller topology into an SDX topology document
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the converter configuration YAML file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read a saved Kytos topology JSON instead of querying the controller
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Write the SDX topology here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Human-readable OXP name
    #[arg(long)]
    oxp_name: Option<String>,

    /// OXP domain embedded in every URN
    #[arg(long)]
    oxp_url: Option<String>,

    /// Topology schema version
    #[arg(long)]
    topology_version: Option<String>,

    /// Kytos topology API endpoint
    #[arg(long)]
    topology_url: Option<String>,

    /// Emit single-line JSON
    #[arg(long)]
    compact: bool,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            oxp_name: self.oxp_name.clone(),
            oxp_url: self.oxp_url.clone(),
            version: self.topology_version.clone(),
            topology_url: self.topology_url.clone(),
        }
    }
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let overrides = args.overrides();
    let config = match &args.config {
        Some(path) => {
            let mut config = config::load_config(path)?;
            config.apply_overrides(&overrides);
            config
        }
        None => Config::from_overrides(&overrides)?,
    };
    config.validate()?;

    info!("Converting topology for {} ({})", config.oxp.name, config.oxp.url);

    let kytos = match &args.input {
        Some(path) => {
            info!("Reading Kytos topology snapshot: {:?}", path);
            let body = fs::read_to_string(path)
                .wrap_err_with(|| format!("Failed to read snapshot '{}'", path.display()))?;
            KytosTopology::from_snapshot(&body)
                .wrap_err_with(|| format!("Invalid Kytos snapshot '{}'", path.display()))?
        }
        None => fetch_or_exit(&config)?,
    };

    let names = NodeNames::from_topology(&kytos);
    let topology = build_topology(&kytos, &names, &config.topology_params())?;

    let document = if args.compact {
        serde_json::to_string(&topology)?
    } else {
        serde_json::to_string_pretty(&topology)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{}\n", document))
                .wrap_err_with(|| format!("Failed to write '{}'", path.display()))?;
            info!("Wrote SDX topology to {:?}", path);
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", document)?;
        }
    }

    Ok(())
}

/// Fetch the live topology; a controller that cannot be reached ends the run.
fn fetch_or_exit(config: &Config) -> Result<KytosTopology> {
    let client = KytosClient::new(config.kytos.topology_url.clone(), config.kytos.timeout)?;

    match client.fetch_topology() {
        Ok(topology) => Ok(topology),
        Err(err @ KytosError::Transport { .. }) => {
            error!("{}", err);
            std::process::exit(1);
        }
        Err(err) => Err(err).wrap_err("Failed to read topology from Kytos"),
    }
}
