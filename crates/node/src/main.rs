//! Binary serving an exchange's SDX topology and circuit API.
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_pub_crate)]

mod app;
mod config;
mod error;
mod server;

use app::build_router;
use config::{Args, SdxConfig};
use error::Result;
use server::SdxServer;

use clap::Parser;
use sdx_provisioning::{HttpProvisioner, HttpProvisionerOptions};
use sdx_topology_kytos::{KytosTopologyAdaptor, KytosTopologyAdaptorOptions};
use sdx_validation::{HttpValidationGateway, HttpValidationGatewayOptions};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .finish(),
    )?;

    let config = SdxConfig::from(Args::parse());
    let exchange = config.exchange.metadata()?;
    info!("Publishing topology for {} ({})", exchange.name, exchange.url);

    let router = build_router(
        KytosTopologyAdaptor::new(KytosTopologyAdaptorOptions::new(&config.topology_url)),
        HttpValidationGateway::new(HttpValidationGatewayOptions::new(&config.validator_url)),
        HttpProvisioner::new(HttpProvisionerOptions::new(&config.evc_url)),
        &config,
    )
    .await?;

    let server = SdxServer::new(config.listen_addr);
    let server_handle = server.start(router).await?;
    info!(
        "Listening on http://{}{}",
        config.listen_addr, config.api_prefix
    );

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutting down");
            server.shutdown().await;
        }
        _ = server_handle => {
            error!("http server exited");
        }
    }

    Ok(())
}
