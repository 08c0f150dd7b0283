//! Transaction delivery types for the swapper system.
//!
//! This module defines types related to blockchain transaction submission
//! and monitoring, including transaction hashes, receipts, and the signature
//! bytes produced by off-chain permit signing.

/// Blockchain transaction hash representation.
///
/// Stores transaction hashes as raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TransactionHash(pub Vec<u8>);

impl std::fmt::Display for TransactionHash {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "0x{}", hex::encode(&self.0))
	}
}

/// Transaction receipt containing execution details.
///
/// Provides information about a transaction after it has been included in a
/// block, including its success status and block number.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TransactionReceipt {
	/// The hash of the transaction.
	pub hash: TransactionHash,
	/// The block number where the transaction was included.
	pub block_number: u64,
	/// Whether the transaction executed successfully.
	pub success: bool,
}

/// A signature produced by signing an off-chain permit message.
///
/// Exists only in memory for the duration of one swap attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature(pub Vec<u8>);

impl Signature {
	/// Returns the signature length in bytes.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns true when the signature is empty.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
