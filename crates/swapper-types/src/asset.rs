//! Sell-asset model and allowance state tracking.
//!
//! A sell asset is either the chain's native asset (identified by the
//! `0xee..ee` marker address) or an ERC-20 contract. The allowance path only
//! exists for ERC-20 sells; the orchestrator records which branch it took as
//! an explicit [`SellPath`] rather than re-deriving it later.

use crate::constants::NATIVE_ASSET;
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// A fungible asset selected for the sell side of a swap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellAsset {
	/// Human-readable symbol used in progress logs (e.g. "ETH", "WETH").
	pub symbol: String,
	/// Asset address; the native marker for the chain's intrinsic currency.
	pub address: Address,
}

impl SellAsset {
	/// Creates a new sell asset.
	pub fn new(symbol: impl Into<String>, address: Address) -> Self {
		Self {
			symbol: symbol.into(),
			address,
		}
	}

	/// Creates the native-asset selection.
	pub fn native(symbol: impl Into<String>) -> Self {
		Self::new(symbol, NATIVE_ASSET)
	}

	/// Returns true when this asset is the chain's native asset.
	///
	/// Native assets never have an allowance requirement.
	pub fn is_native(&self) -> bool {
		self.address == NATIVE_ASSET
	}
}

/// Outcome of the allowance-resolution step for an ERC-20 sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowanceStatus {
	/// The price response reported no allowance issue.
	AlreadyApproved,
	/// An approval transaction was submitted and confirmed.
	Granted,
	/// The approval attempt failed; the swap proceeds regardless and will
	/// fail at submission if the allowance is in fact insufficient.
	Failed,
}

/// Which branch of the swap sequence a sell asset takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SellPath {
	/// Native asset: no allowance check, direct value-bearing submission.
	Native,
	/// ERC-20 asset: allowance resolution followed by the permit path.
	Token(AllowanceStatus),
}
