//! Core swap orchestration for the swapper.
//!
//! This module coordinates the wallet, aggregator, and delivery services
//! through the ordered swap sequence: price discovery, allowance resolution,
//! firm quote, permit signing, payload assembly, and submission. The
//! orchestrator owns the sequencing and the failure policy; everything it
//! talks to sits behind a trait.

use swapper_aggregator::AggregatorError;
use swapper_delivery::DeliveryError;
use swapper_types::WireError;
use thiserror::Error;

pub mod orchestrator;

pub use orchestrator::SwapOrchestrator;

/// Errors that terminate a swap attempt.
#[derive(Debug, Error)]
pub enum SwapError {
	/// Price or quote request failed; fatal to the attempt.
	#[error("Aggregator error: {0}")]
	Aggregator(#[from] AggregatorError),
	/// Chain read or submission failed; fatal to the attempt.
	#[error("Delivery error: {0}")]
	Delivery(#[from] DeliveryError),
	/// A quote field the submission depends on was unusable.
	#[error("Malformed quote field: {0}")]
	Quote(#[from] WireError),
	/// The configured sell notional does not scale to the asset's decimals.
	#[error("Invalid sell amount {amount}: {reason}")]
	InvalidAmount {
		/// The configured notional.
		amount: String,
		/// Why scaling failed.
		reason: String,
	},
	/// A permit was required but signing failed or the quote carried no
	/// transaction data to bundle the signature into.
	#[error("Failed to obtain signature or transaction data")]
	PermitIncomplete,
	/// An ERC-20 sell reached submission without a permit signature.
	#[error("Failed to obtain a signature, transaction not sent")]
	NotSubmittable,
	/// The firm quote carried no transaction descriptor.
	#[error("Firm quote did not include a transaction")]
	TransactionMissing,
}
