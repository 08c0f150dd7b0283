//! Configuration module for the swapper.
//!
//! Loads configuration from TOML files with environment-variable resolution
//! and validates it before anything else runs. Three settings are required
//! and have no defaults: the signing key, the aggregator API key, and the RPC
//! endpoint URL; a missing one is a startup-fatal error. Everything else
//! defaults to Base mainnet values so a minimal config only carries secrets.

use alloy_primitives::Address;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use swapper_types::{
	SecretString, SellAsset, BASE_CHAIN_ID, BASE_EXPLORER_URL, BASE_USDC, BASE_WETH,
};
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error that occurs during file I/O operations.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	/// Error that occurs when parsing TOML configuration.
	#[error("Configuration error: {0}")]
	Parse(String),
	/// Error that occurs when configuration validation fails.
	#[error("Validation error: {0}")]
	Validation(String),
}

impl From<toml::de::Error> for ConfigError {
	fn from(err: toml::de::Error) -> Self {
		// Extract just the message without the input dump
		ConfigError::Parse(err.message().to_string())
	}
}

/// Main configuration structure for the swapper.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
	/// Signing key configuration.
	pub wallet: WalletConfig,
	/// Aggregator API configuration.
	pub aggregator: AggregatorConfig,
	/// Chain and RPC configuration.
	pub network: NetworkConfig,
	/// Swap sequence configuration.
	#[serde(default)]
	pub swap: SwapConfig,
}

/// Signing key configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WalletConfig {
	/// Hex-encoded private key used for signing and submission.
	pub private_key: SecretString,
}

/// Aggregator API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AggregatorConfig {
	/// API key sent in the `0x-api-key` header.
	pub api_key: SecretString,
	/// Base URL of the aggregator API.
	#[serde(default = "default_aggregator_base_url")]
	pub base_url: String,
	/// API version sent in the `0x-version` header.
	#[serde(default = "default_aggregator_api_version")]
	pub api_version: String,
}

/// Chain and RPC configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NetworkConfig {
	/// HTTP JSON-RPC endpoint URL.
	pub rpc_url: String,
	/// Chain ID of the network.
	#[serde(default = "default_chain_id")]
	pub chain_id: u64,
	/// Block explorer base URL used for transaction links in logs.
	#[serde(default = "default_explorer_url")]
	pub explorer_url: String,
}

/// Swap sequence configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SwapConfig {
	/// Decimal notional sold per swap, scaled by the asset's decimals.
	#[serde(default = "default_sell_amount")]
	pub sell_amount: String,
	/// Asset bought by every swap.
	#[serde(default = "default_buy_token")]
	pub buy_token: Address,
	/// Sell assets executed in order by the run driver.
	#[serde(default = "default_sell_assets")]
	pub sell_assets: Vec<SellAsset>,
	/// Delay between consecutive swap attempts, in seconds.
	#[serde(default = "default_delay_seconds")]
	pub delay_seconds: u64,
}

impl Default for SwapConfig {
	fn default() -> Self {
		Self {
			sell_amount: default_sell_amount(),
			buy_token: default_buy_token(),
			sell_assets: default_sell_assets(),
			delay_seconds: default_delay_seconds(),
		}
	}
}

fn default_aggregator_base_url() -> String {
	"https://api.0x.org".to_string()
}

fn default_aggregator_api_version() -> String {
	"v2".to_string()
}

fn default_chain_id() -> u64 {
	BASE_CHAIN_ID
}

fn default_explorer_url() -> String {
	BASE_EXPLORER_URL.to_string()
}

fn default_sell_amount() -> String {
	"0.0001".to_string()
}

fn default_buy_token() -> Address {
	BASE_USDC
}

/// Default run: native ETH first, then wrapped ETH.
fn default_sell_assets() -> Vec<SellAsset> {
	vec![
		SellAsset::native("ETH"),
		SellAsset::new("WETH", BASE_WETH),
	]
}

fn default_delay_seconds() -> u64 {
	15
}

/// Resolves environment variables in a string.
///
/// Replaces ${VAR_NAME} with the value of the environment variable VAR_NAME.
/// Supports default values with ${VAR_NAME:-default_value}.
///
/// Input strings are limited to 1MB to prevent ReDoS attacks.
pub(crate) fn resolve_env_vars(input: &str) -> Result<String, ConfigError> {
	const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB
	if input.len() > MAX_INPUT_SIZE {
		return Err(ConfigError::Validation(format!(
			"Configuration file too large: {} bytes (max: {} bytes)",
			input.len(),
			MAX_INPUT_SIZE
		)));
	}

	let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]{0,127})(?::-([^}]{0,256}))?\}")
		.map_err(|e| ConfigError::Parse(format!("Regex error: {}", e)))?;

	let mut result = input.to_string();
	let mut replacements = Vec::new();

	for cap in re.captures_iter(input) {
		let full_match = cap.get(0).ok_or_else(|| {
			ConfigError::Parse("Malformed environment variable reference".to_string())
		})?;
		let var_name = &cap[1];
		let default_value = cap.get(2).map(|m| m.as_str());

		let value = match std::env::var(var_name) {
			Ok(v) => v,
			Err(_) => match default_value {
				Some(default) => default.to_string(),
				None => {
					return Err(ConfigError::Validation(format!(
						"Environment variable '{}' not found",
						var_name
					)))
				},
			},
		};

		replacements.push((full_match.start(), full_match.end(), value));
	}

	// Apply replacements in reverse order to maintain positions
	for (start, end, value) in replacements.iter().rev() {
		result.replace_range(start..end, value);
	}

	Ok(result)
}

impl Config {
	/// Loads configuration from a TOML file, resolving environment variables
	/// and validating the result.
	pub fn from_file(path: &str) -> Result<Self, ConfigError> {
		let raw = std::fs::read_to_string(path)?;
		raw.parse()
	}

	/// Validates the configuration to ensure all required fields are set.
	///
	/// The three required settings — signing key, aggregator API key, and
	/// RPC URL — must be non-empty; the swap section must name at least one
	/// sell asset and a notional that parses as a decimal.
	fn validate(&self) -> Result<(), ConfigError> {
		if self.wallet.private_key.is_empty() {
			return Err(ConfigError::Validation(
				"wallet.private_key cannot be empty".into(),
			));
		}
		if self.aggregator.api_key.is_empty() {
			return Err(ConfigError::Validation(
				"aggregator.api_key cannot be empty".into(),
			));
		}
		if self.aggregator.base_url.is_empty() {
			return Err(ConfigError::Validation(
				"aggregator.base_url cannot be empty".into(),
			));
		}
		if self.network.rpc_url.is_empty() {
			return Err(ConfigError::Validation(
				"network.rpc_url cannot be empty".into(),
			));
		}
		if self.network.chain_id == 0 {
			return Err(ConfigError::Validation(
				"network.chain_id must be greater than 0".into(),
			));
		}
		if self.swap.sell_assets.is_empty() {
			return Err(ConfigError::Validation(
				"swap.sell_assets must name at least one asset".into(),
			));
		}
		if self.swap.sell_amount.parse::<f64>().is_err() {
			return Err(ConfigError::Validation(format!(
				"swap.sell_amount is not a decimal number: {}",
				self.swap.sell_amount
			)));
		}
		Ok(())
	}
}

/// Parses configuration from a TOML string, resolving environment variables
/// and validating afterwards.
impl FromStr for Config {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let resolved = resolve_env_vars(s)?;
		let config: Config = toml::from_str(&resolved)?;
		config.validate()?;
		Ok(config)
	}
}
