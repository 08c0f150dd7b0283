//! Local private-key account implementation.
//!
//! Wraps an in-memory secp256k1 key. Typed-data payloads arrive as the raw
//! JSON the aggregator returned, so they are interpreted dynamically with
//! `alloy-dyn-abi` before hashing and signing.

use crate::{AccountError, AccountInterface};
use alloy_dyn_abi::TypedData;
use alloy_primitives::Address;
use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;
use swapper_types::{SecretString, Signature};

/// Account backed by a locally-held private key.
pub struct LocalAccount {
	signer: PrivateKeySigner,
}

impl LocalAccount {
	/// Creates a local account from a hex-encoded private key.
	pub fn new(private_key: &SecretString) -> Result<Self, AccountError> {
		let signer: PrivateKeySigner = private_key.with_exposed(|key| {
			key.parse().map_err(|_| {
				AccountError::InvalidKey("not a valid hex-encoded secp256k1 key".to_string())
			})
		})?;
		Ok(Self { signer })
	}
}

#[async_trait]
impl AccountInterface for LocalAccount {
	fn address(&self) -> Address {
		self.signer.address()
	}

	async fn sign_typed_data(
		&self,
		payload: &serde_json::Value,
	) -> Result<Signature, AccountError> {
		let typed: TypedData = serde_json::from_value(payload.clone())
			.map_err(|e| AccountError::InvalidTypedData(e.to_string()))?;

		let digest = typed
			.eip712_signing_hash()
			.map_err(|e| AccountError::InvalidTypedData(e.to_string()))?;

		let signature = self
			.signer
			.sign_hash(&digest)
			.await
			.map_err(|e| AccountError::SigningFailed(e.to_string()))?;

		Ok(Signature(signature.as_bytes().to_vec()))
	}
}
