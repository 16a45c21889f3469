//! Operational CLI for the gateway core.
//!
//! `check` validates configuration and prints the computed listener plan,
//! `classify` answers how a request path would be dispatched, and `watch`
//! runs the discovery bridge, republishing the cluster leader address until
//! interrupted.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use streamgate::config::loader::load_config;
use streamgate::lifecycle::signals::shutdown_on_signal;
use streamgate::observability::{logging, metrics};
use streamgate::{
    DynamicProperties, GatewayConfig, ListenerPlan, MasterEndpointClient, MasterMonitor,
    PushPrefixSet, Shutdown, UPSTREAM_SERVERS_KEY,
};

#[derive(Parser)]
#[command(name = "streamgate")]
#[command(about = "Address discovery and request routing for the streaming API gateway", long_about = None)]
struct Cli {
    /// Path to the gateway configuration file.
    #[arg(short, long, default_value = "gateway.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate configuration and print the computed listener plan
    Check,
    /// Classify a request path as push or standard traffic
    Classify { path: String },
    /// Follow cluster leadership and republish the leader address
    Watch,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    match cli.command {
        Commands::Check => check(&config)?,
        Commands::Classify { path } => classify(&config, &path),
        Commands::Watch => watch(config).await?,
    }

    Ok(())
}

fn check(config: &GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    let push_prefixes = Arc::new(PushPrefixSet::new(config.push_prefixes.clone()));
    let plan = ListenerPlan::from_config(&config.listeners, push_prefixes.clone())?;

    println!(
        "configuration OK: {} listener(s), {} push prefix(es)",
        plan.len(),
        push_prefixes.len()
    );
    for (address, pipeline) in plan.bindings() {
        println!(
            "  {} protocol={:?} trust_forwarded_headers={} proxy_protocol={} tls_from_intermediary={}",
            address,
            pipeline.protocol,
            pipeline.trust_forwarded_headers,
            pipeline.with_proxy_protocol,
            pipeline.tls_from_intermediary,
        );
    }
    Ok(())
}

fn classify(config: &GatewayConfig, path: &str) {
    let push_prefixes = PushPrefixSet::new(config.push_prefixes.clone());
    if push_prefixes.is_push_path(path) {
        println!("push");
    } else {
        println!("standard");
    }
}

async fn watch(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    logging::init(&config.observability);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "streamgate starting");

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "failed to parse metrics address"
            ),
        }
    }

    // Fail fast before any traffic could be accepted: an invalid listener
    // plan must abort startup, not degrade it.
    let push_prefixes = Arc::new(PushPrefixSet::new(config.push_prefixes.clone()));
    let plan = ListenerPlan::from_config(&config.listeners, push_prefixes)?;
    tracing::info!(
        listeners = plan.len(),
        "listener plan computed; bindings are handed to the connection runtime"
    );

    let properties = DynamicProperties::new();
    let upstream_servers = properties.string(UPSTREAM_SERVERS_KEY);

    let shutdown = Shutdown::new();
    let (client, feed) = MasterEndpointClient::new(&config.discovery)?;
    let monitor = MasterMonitor::new(feed, upstream_servers.clone());

    let client_task = tokio::spawn(client.run(shutdown.subscribe()));
    let monitor_task = tokio::spawn(monitor.run(shutdown.subscribe()));

    shutdown_on_signal(&shutdown).await;

    let _ = tokio::join!(client_task, monitor_task);

    match upstream_servers.get() {
        Some(last) => tracing::info!(leader = %last, "last published leader address"),
        None => tracing::info!("no leader address was published"),
    }
    tracing::info!("Shutdown complete");
    Ok(())
}
