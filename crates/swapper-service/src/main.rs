//! Main entry point for the swapper service.
//!
//! This binary wires the concrete implementations together — local key
//! account, 0x aggregator client, Alloy delivery — and hands them to the
//! orchestrator, which executes the configured sell assets in order.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use swapper_config::Config;
use swapper_core::SwapOrchestrator;

// Import implementations from individual crates
use swapper_account::implementations::local::LocalAccount;
use swapper_aggregator::implementations::zeroex::ZeroExAggregator;
use swapper_delivery::implementations::evm::EvmDelivery;

/// Command-line arguments for the swapper service.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Path to configuration file
	#[arg(short, long, default_value = "config.toml")]
	config: PathBuf,

	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long, default_value = "info")]
	log_level: String,
}

/// Main entry point for the swapper service.
///
/// This function:
/// 1. Parses command-line arguments
/// 2. Initializes logging infrastructure
/// 3. Loads configuration from file
/// 4. Builds the orchestrator with all implementations
/// 5. Runs the configured swap sequence to completion
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	// Initialize tracing with env filter
	use tracing_subscriber::{fmt, EnvFilter};

	// Create env filter with default from args
	let default_directive = args.log_level.to_string();
	let env_filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

	fmt()
		.with_env_filter(env_filter)
		.with_thread_ids(true)
		.with_target(true)
		.init();

	tracing::info!("Started swapper");

	// Load configuration
	let config_path = args
		.config
		.to_str()
		.ok_or("Configuration path is not valid UTF-8")?;
	let config = Config::from_file(config_path)?;
	tracing::info!(
		chain_id = config.network.chain_id,
		sell_assets = config.swap.sell_assets.len(),
		"Loaded configuration"
	);

	// Build the orchestrator with implementations
	let orchestrator = build_swapper(config)?;

	if let Err(e) = orchestrator.run().await {
		tracing::error!(error = %e, "Swap run failed");
		return Err(e.into());
	}

	tracing::info!("Stopped swapper");
	Ok(())
}

/// Builds the orchestrator over the concrete implementations:
/// - Account: local private key signing
/// - Aggregator: 0x permit2 price and quote endpoints
/// - Delivery: Alloy HTTP provider against the configured network
fn build_swapper(config: Config) -> Result<SwapOrchestrator, Box<dyn std::error::Error>> {
	let account = LocalAccount::new(&config.wallet.private_key)?;
	let aggregator = ZeroExAggregator::new(&config.aggregator)?;
	let delivery = EvmDelivery::new(&config.network, &config.wallet.private_key)?;

	Ok(SwapOrchestrator::new(
		config,
		Arc::new(account),
		Arc::new(aggregator),
		Arc::new(delivery),
	))
}
