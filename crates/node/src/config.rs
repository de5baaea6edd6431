use std::net::SocketAddr;

use clap::Parser;
use sdx_api::DEFAULT_API_PREFIX;
use sdx_version_control::{DEFAULT_MODEL_VERSION, EngineConfig, ExchangeConfig};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Position of this exchange in the name and url lists
    #[arg(long, env = "OXPO_ID", default_value_t = 0)]
    oxpo_id: usize,

    /// Comma separated names of every exchange in the federation
    #[arg(long, env = "OXPO_NAMES", value_delimiter = ',', required = true)]
    oxpo_names: Vec<String>,

    /// Comma separated urls of every exchange in the federation
    #[arg(long, env = "OXPO_URLS", value_delimiter = ',', required = true)]
    oxpo_urls: Vec<String>,

    /// Controller endpoint serving the raw topology
    #[arg(long, env = "KYTOS_TOPOLOGY")]
    kytos_topology: String,

    /// Endpoint of the topology validator
    #[arg(long, env = "SDXTOPOLOGY_VALIDATOR")]
    sdxtopology_validator: String,

    /// Data model version stamped on published topologies
    #[arg(long, env = "MODEL_VERSION", default_value = DEFAULT_MODEL_VERSION)]
    model_version: String,

    /// Controller endpoint creating circuits
    #[arg(long, env = "KYTOS_EVC_URL")]
    kytos_evc_url: String,

    #[arg(long, env = "SDX_LISTEN_ADDR", default_value = "0.0.0.0:8181")]
    listen_addr: SocketAddr,

    #[arg(long, env = "SDX_API_PREFIX", default_value = DEFAULT_API_PREFIX)]
    api_prefix: String,
}

/// Everything the node needs to wire the engine and serve the API.
#[derive(Clone, Debug)]
pub struct SdxConfig {
    pub exchange: ExchangeConfig,
    pub engine: EngineConfig,
    pub topology_url: String,
    pub validator_url: String,
    pub evc_url: String,
    pub listen_addr: SocketAddr,
    pub api_prefix: String,
}

impl From<Args> for SdxConfig {
    fn from(args: Args) -> Self {
        let trimmed =
            |values: Vec<String>| values.into_iter().map(|v| v.trim().to_string()).collect();

        Self {
            exchange: ExchangeConfig {
                index: args.oxpo_id,
                names: trimmed(args.oxpo_names),
                urls: trimmed(args.oxpo_urls),
            },
            engine: EngineConfig {
                model_version: args.model_version,
                ..EngineConfig::default()
            },
            topology_url: args.kytos_topology,
            validator_url: args.sdxtopology_validator,
            evc_url: args.kytos_evc_url,
            listen_addr: args.listen_addr,
            api_prefix: args.api_prefix,
        }
    }
}
