//! Submission planning types produced by the orchestrator.
//!
//! After the firm quote and (optional) permit signing, the orchestrator
//! reduces the remaining work to a [`SubmissionPlan`]: either a direct
//! value-bearing transaction for a native sell, or a locally-signed raw
//! broadcast whose calldata carries the bundled permit signature. The plan is
//! validated before use so the submission step has nothing left to decide.

use alloy_primitives::{Address, Bytes, U256};

/// Fully-resolved transaction parameters ready for submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionPlan {
	/// Recipient contract.
	pub to: Address,
	/// Call data, including any appended permit signature.
	pub data: Bytes,
	/// Native value to attach.
	pub value: U256,
	/// Explicit nonce read from the sender's transaction count.
	pub nonce: u64,
	/// Gas limit from the firm quote, when it supplied one.
	pub gas: Option<u64>,
	/// Gas price from the firm quote, when it supplied one.
	pub gas_price: Option<u128>,
}

/// How the assembled transaction reaches the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionPlan {
	/// Native-asset sell: submit directly and let the provider sign.
	DirectValue(TransactionPlan),
	/// ERC-20 sell: sign locally and broadcast the raw transaction. The
	/// plan's calldata already carries the appended permit signature.
	PermitBundled(TransactionPlan),
}

impl SubmissionPlan {
	/// Borrows the underlying transaction plan.
	pub fn transaction(&self) -> &TransactionPlan {
		match self {
			SubmissionPlan::DirectValue(plan) => plan,
			SubmissionPlan::PermitBundled(plan) => plan,
		}
	}
}
