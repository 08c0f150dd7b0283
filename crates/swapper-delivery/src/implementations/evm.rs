//! Alloy-based EVM delivery implementation.
//!
//! Uses the Alloy provider stack against a single configured network. The
//! provider carries the wallet for direct submissions; the raw path signs
//! the transaction locally and broadcasts the 2718-encoded bytes, which is
//! what the ERC-20 swap branch requires.

use crate::{DeliveryError, DeliveryInterface};
use alloy_eips::eip2718::Encodable2718;
use alloy_network::{EthereumWallet, TransactionBuilder};
use alloy_primitives::{Address, FixedBytes, U256};
use alloy_provider::{Provider, ProviderBuilder};
use alloy_rpc_types::TransactionRequest;
use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use alloy_transport_http::Http;
use async_trait::async_trait;
use std::sync::Arc;
use swapper_config::NetworkConfig;
use swapper_types::{SecretString, TransactionHash, TransactionPlan, TransactionReceipt};

// decimals() selector
const DECIMALS_SELECTOR: [u8; 4] = [0x31, 0x3c, 0xe5, 0x67];
// approve(address,uint256) selector
const APPROVE_SELECTOR: [u8; 4] = [0x09, 0x5e, 0xa7, 0xb3];

/// Builds the calldata for a `decimals()` read.
fn decimals_call_data() -> Vec<u8> {
	DECIMALS_SELECTOR.to_vec()
}

/// Builds the calldata for `approve(spender, amount)`.
fn approve_call_data(spender: Address, amount: U256) -> Vec<u8> {
	let mut call_data = Vec::with_capacity(4 + 32 + 32);
	call_data.extend_from_slice(&APPROVE_SELECTOR);
	call_data.extend_from_slice(&[0; 12]); // Pad spender address to 32 bytes
	call_data.extend_from_slice(spender.as_slice());
	call_data.extend_from_slice(&amount.to_be_bytes::<32>());
	call_data
}

/// Alloy-based delivery over a single EVM network.
pub struct EvmDelivery {
	/// Provider with the wallet filler installed for direct submissions.
	provider: Arc<dyn Provider<Http<reqwest::Client>> + Send + Sync>,
	/// Wallet used for local signing on the raw path.
	wallet: EthereumWallet,
	/// Chain the delivery targets.
	chain_id: u64,
}

impl EvmDelivery {
	/// Creates a new EvmDelivery instance for the configured network.
	pub fn new(network: &NetworkConfig, private_key: &SecretString) -> Result<Self, DeliveryError> {
		let signer: PrivateKeySigner = private_key.with_exposed(|key| {
			key.parse()
				.map_err(|_| DeliveryError::Configuration("Invalid private key format".to_string()))
		})?;
		let signer = signer.with_chain_id(Some(network.chain_id));
		let wallet = EthereumWallet::from(signer);

		let url = network.rpc_url.parse().map_err(|e| {
			DeliveryError::Configuration(format!("Invalid RPC URL {}: {}", network.rpc_url, e))
		})?;

		let provider = ProviderBuilder::new()
			.with_recommended_fillers()
			.wallet(wallet.clone())
			.on_http(url);

		provider
			.client()
			.set_poll_interval(std::time::Duration::from_secs(7));

		Ok(Self {
			provider: Arc::new(provider) as Arc<dyn Provider<Http<reqwest::Client>> + Send + Sync>,
			wallet,
			chain_id: network.chain_id,
		})
	}

	/// Translates a resolved plan into an RPC transaction request.
	fn base_request(&self, plan: &TransactionPlan) -> TransactionRequest {
		let mut request = TransactionRequest::default()
			.to(plan.to)
			.input(plan.data.clone().into())
			.with_value(plan.value)
			.with_nonce(plan.nonce);

		if let Some(gas) = plan.gas {
			request = request.with_gas_limit(gas);
		}
		if let Some(gas_price) = plan.gas_price {
			request = request.with_gas_price(gas_price);
		}

		request
	}

	/// Polls for a transaction receipt until it lands or the wait times out.
	async fn wait_for_receipt(
		&self,
		hash: FixedBytes<32>,
	) -> Result<TransactionReceipt, DeliveryError> {
		let poll_interval = tokio::time::Duration::from_secs(5);
		let max_wait = tokio::time::Duration::from_secs(180);
		let start = tokio::time::Instant::now();

		loop {
			if start.elapsed() > max_wait {
				return Err(DeliveryError::Network(format!(
					"Timeout waiting for receipt of {}",
					TransactionHash(hash.0.to_vec())
				)));
			}

			match self.provider.get_transaction_receipt(hash).await {
				Ok(Some(receipt)) => {
					return Ok(TransactionReceipt {
						hash: TransactionHash(receipt.transaction_hash.0.to_vec()),
						block_number: receipt.block_number.unwrap_or(0),
						success: receipt.status(),
					})
				},
				Ok(None) => {
					// Not yet mined, wait and retry
					tokio::time::sleep(poll_interval).await;
				},
				Err(e) => {
					return Err(DeliveryError::Network(format!(
						"Failed to get receipt: {}",
						e
					)))
				},
			}
		}
	}
}

#[async_trait]
impl DeliveryInterface for EvmDelivery {
	async fn token_decimals(&self, token: Address) -> Result<u8, DeliveryError> {
		let request = TransactionRequest::default()
			.to(token)
			.input(decimals_call_data().into());

		let result = self
			.provider
			.call(&request)
			.await
			.map_err(|e| DeliveryError::Network(format!("Failed to call decimals: {}", e)))?;

		if result.len() < 32 {
			return Err(DeliveryError::InvalidResponse(
				"decimals() returned fewer than 32 bytes".to_string(),
			));
		}

		let decimals = U256::from_be_slice(&result[..32]);
		if decimals > U256::from(u8::MAX) {
			return Err(DeliveryError::InvalidResponse(format!(
				"decimals() out of range: {}",
				decimals
			)));
		}
		Ok(decimals.to::<u8>())
	}

	async fn approve(
		&self,
		token: Address,
		spender: Address,
		amount: U256,
	) -> Result<TransactionReceipt, DeliveryError> {
		let request = TransactionRequest::default()
			.to(token)
			.input(approve_call_data(spender, amount).into());

		let pending = self
			.provider
			.send_transaction(request)
			.await
			.map_err(|e| DeliveryError::Network(format!("Failed to send approval: {}", e)))?;

		let tx_hash = *pending.tx_hash();
		tracing::debug!(
			tx_hash = %TransactionHash(tx_hash.0.to_vec()),
			token = ?token,
			spender = ?spender,
			"Submitted approval transaction"
		);

		self.wait_for_receipt(tx_hash).await
	}

	async fn transaction_count(&self, owner: Address) -> Result<u64, DeliveryError> {
		self.provider
			.get_transaction_count(owner)
			.await
			.map_err(|e| DeliveryError::Network(format!("Failed to get nonce: {}", e)))
	}

	async fn submit(&self, plan: &TransactionPlan) -> Result<TransactionHash, DeliveryError> {
		let request = self.base_request(plan);

		let pending = self
			.provider
			.send_transaction(request)
			.await
			.map_err(|e| DeliveryError::Network(format!("Failed to send transaction: {}", e)))?;

		let tx_hash = *pending.tx_hash();
		tracing::debug!(
			tx_hash = %TransactionHash(tx_hash.0.to_vec()),
			chain_id = self.chain_id,
			"Submitted transaction"
		);

		Ok(TransactionHash(tx_hash.0.to_vec()))
	}

	async fn submit_raw(&self, plan: &TransactionPlan) -> Result<TransactionHash, DeliveryError> {
		let mut request = self.base_request(plan).with_chain_id(self.chain_id);

		// The firm quote normally supplies gas and gasPrice; fall back to
		// the node when it omits them, since a raw transaction must be
		// complete before signing.
		if plan.gas.is_none() {
			let gas = self
				.provider
				.estimate_gas(&request)
				.await
				.map_err(|e| DeliveryError::Network(format!("Failed to estimate gas: {}", e)))?;
			request = request.with_gas_limit(gas);
		}
		if plan.gas_price.is_none() {
			let gas_price = self
				.provider
				.get_gas_price()
				.await
				.map_err(|e| DeliveryError::Network(format!("Failed to get gas price: {}", e)))?;
			request = request.with_gas_price(gas_price);
		}

		let envelope = request
			.build(&self.wallet)
			.await
			.map_err(|e| DeliveryError::Network(format!("Failed to sign transaction: {}", e)))?;

		let pending = self
			.provider
			.send_raw_transaction(&envelope.encoded_2718())
			.await
			.map_err(|e| {
				DeliveryError::Network(format!("Failed to broadcast raw transaction: {}", e))
			})?;

		let tx_hash = *pending.tx_hash();
		tracing::debug!(
			tx_hash = %TransactionHash(tx_hash.0.to_vec()),
			chain_id = self.chain_id,
			"Broadcast raw transaction"
		);

		Ok(TransactionHash(tx_hash.0.to_vec()))
	}
}
