//! Transaction delivery module for the swapper.
//!
//! This module provides the blockchain access the swap sequence needs:
//! reading token metadata, submitting approvals and waiting for their
//! receipts, nonce lookup, and the two submission modes: direct submission
//! for native-asset sells and locally-signed raw broadcast for ERC-20 sells.

use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use swapper_types::{TransactionHash, TransactionPlan, TransactionReceipt};
use thiserror::Error;

/// Re-export implementations
pub mod implementations {
	pub mod evm;
}

/// Errors that can occur during delivery operations.
#[derive(Debug, Error)]
pub enum DeliveryError {
	/// Error that occurs during network communication with the RPC node.
	#[error("Network error: {0}")]
	Network(String),
	/// Error that occurs when a contract read returns an unusable value.
	#[error("Invalid chain response: {0}")]
	InvalidResponse(String),
	/// Error that occurs when the delivery provider cannot be constructed.
	#[error("Configuration error: {0}")]
	Configuration(String),
}

/// Trait defining the interface for delivery implementations.
#[async_trait]
pub trait DeliveryInterface: Send + Sync {
	/// Reads an ERC-20 token's decimal precision via `decimals()`.
	async fn token_decimals(&self, token: Address) -> Result<u8, DeliveryError>;

	/// Submits an `approve(spender, amount)` transaction against the token
	/// contract and waits for its confirmation receipt.
	async fn approve(
		&self,
		token: Address,
		spender: Address,
		amount: U256,
	) -> Result<TransactionReceipt, DeliveryError>;

	/// Reads the sender's current transaction count, used as the explicit
	/// nonce for submission.
	async fn transaction_count(&self, owner: Address) -> Result<u64, DeliveryError>;

	/// Submits a transaction directly; the provider's wallet signs it.
	async fn submit(&self, plan: &TransactionPlan) -> Result<TransactionHash, DeliveryError>;

	/// Signs a transaction locally and broadcasts the serialized raw bytes.
	async fn submit_raw(&self, plan: &TransactionPlan) -> Result<TransactionHash, DeliveryError>;
}
