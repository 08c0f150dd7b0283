//! Account management module for the swapper.
//!
//! This module provides the wallet abstraction that holds the signing key
//! and produces the off-chain signatures the swap sequence needs. The
//! orchestrator only sees the [`AccountInterface`] trait; the concrete
//! implementation wraps a local private key.

use alloy_primitives::Address;
use async_trait::async_trait;
use swapper_types::Signature;
use thiserror::Error;

/// Re-export implementations
pub mod implementations {
	pub mod local;
}

/// Errors that can occur during account operations.
#[derive(Debug, Error)]
pub enum AccountError {
	/// Error that occurs when signing operations fail.
	#[error("Signing failed: {0}")]
	SigningFailed(String),
	/// Error that occurs when a cryptographic key is invalid or malformed.
	#[error("Invalid key: {0}")]
	InvalidKey(String),
	/// Error that occurs when a typed-data payload cannot be interpreted.
	#[error("Invalid typed data: {0}")]
	InvalidTypedData(String),
}

/// Trait defining the interface for account implementations.
///
/// Provides the taker address and EIP-712 typed-data signing over the
/// aggregator's dynamic permit payloads.
#[async_trait]
pub trait AccountInterface: Send + Sync {
	/// Returns the address associated with this account.
	fn address(&self) -> Address;

	/// Signs an EIP-712 typed-data payload as received from the aggregator.
	///
	/// The payload is the raw JSON object under `permit2.eip712` in a firm
	/// quote: domain, types, primary type, and message.
	async fn sign_typed_data(
		&self,
		payload: &serde_json::Value,
	) -> Result<Signature, AccountError>;
}
