//! Aggregator request and response wire types.
//!
//! The aggregator returns loosely-shaped JSON; these types pin down the
//! fields the swapper relies on and reject malformed payloads as a distinct
//! error kind instead of failing later on a missing field. Numeric quantity
//! fields arrive as decimal strings and are parsed on access.

use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a response field the swap depends on is unusable.
#[derive(Debug, Error)]
pub enum WireError {
	/// A numeric quantity field failed to parse.
	#[error("invalid numeric field `{field}`: {value}")]
	InvalidNumber {
		/// Name of the offending field.
		field: &'static str,
		/// The raw value received.
		value: String,
	},
}

/// Query parameters shared by the price and quote endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapQuery {
	/// Chain the swap executes on.
	pub chain_id: u64,
	/// Asset being sold (native marker or ERC-20 address).
	pub sell_token: Address,
	/// Asset being bought.
	pub buy_token: Address,
	/// Sell amount in the sell asset's base units.
	pub sell_amount: U256,
	/// Address that will send the swap transaction.
	pub taker: Address,
}

impl SwapQuery {
	/// Renders the query as key/value pairs in the order the aggregator
	/// documents them.
	pub fn as_pairs(&self) -> Vec<(&'static str, String)> {
		vec![
			("chainId", self.chain_id.to_string()),
			("sellToken", format!("{:?}", self.sell_token)),
			("buyToken", format!("{:?}", self.buy_token)),
			("sellAmount", self.sell_amount.to_string()),
			("taker", format!("{:?}", self.taker)),
		]
	}
}

/// An allowance problem reported by the price endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllowanceIssue {
	/// Contract that must be approved to move the sell token.
	pub spender: Address,
	/// Allowance currently granted, when reported.
	#[serde(default)]
	pub actual: Option<String>,
}

/// Issue block attached to price and quote responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issues {
	/// Present when the taker must grant an allowance before swapping;
	/// null when the sell token is already sufficiently approved.
	#[serde(default)]
	pub allowance: Option<AllowanceIssue>,
}

/// Response of the indicative price endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceResponse {
	/// Estimated buy amount in the buy asset's base units.
	#[serde(default)]
	pub buy_amount: Option<String>,
	/// Problems the taker must resolve before the swap can execute.
	#[serde(default)]
	pub issues: Option<Issues>,
}

impl PriceResponse {
	/// Returns the allowance issue, if the aggregator reported one.
	pub fn allowance_issue(&self) -> Option<&AllowanceIssue> {
		self.issues.as_ref().and_then(|issues| issues.allowance.as_ref())
	}
}

/// Executable transaction descriptor returned by the quote endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDescriptor {
	/// Contract the transaction calls.
	pub to: Address,
	/// Call data; the permit path appends the signature to these bytes.
	pub data: Bytes,
	/// Native value to attach, as a decimal string.
	#[serde(default)]
	pub value: Option<String>,
	/// Gas limit suggested by the aggregator, as a decimal string.
	#[serde(default)]
	pub gas: Option<String>,
	/// Gas price suggested by the aggregator, as a decimal string.
	#[serde(default)]
	pub gas_price: Option<String>,
}

impl TransactionDescriptor {
	/// Parses the attached native value, defaulting to zero when absent.
	pub fn value(&self) -> Result<U256, WireError> {
		match &self.value {
			None => Ok(U256::ZERO),
			Some(raw) => raw.parse().map_err(|_| WireError::InvalidNumber {
				field: "value",
				value: raw.clone(),
			}),
		}
	}

	/// Parses the suggested gas limit, when present.
	pub fn gas(&self) -> Result<Option<u64>, WireError> {
		match &self.gas {
			None => Ok(None),
			Some(raw) => raw
				.parse()
				.map(Some)
				.map_err(|_| WireError::InvalidNumber {
					field: "gas",
					value: raw.clone(),
				}),
		}
	}

	/// Parses the suggested gas price, when present.
	pub fn gas_price(&self) -> Result<Option<u128>, WireError> {
		match &self.gas_price {
			None => Ok(None),
			Some(raw) => raw
				.parse()
				.map(Some)
				.map_err(|_| WireError::InvalidNumber {
					field: "gasPrice",
					value: raw.clone(),
				}),
		}
	}
}

/// Off-chain permit message attached to a firm quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermitPayload {
	/// The EIP-712 typed-data payload to sign.
	#[serde(default)]
	pub eip712: Option<serde_json::Value>,
}

/// Response of the firm quote endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
	/// Estimated buy amount in the buy asset's base units.
	#[serde(default)]
	pub buy_amount: Option<String>,
	/// Ready-to-send transaction descriptor.
	#[serde(default)]
	pub transaction: Option<TransactionDescriptor>,
	/// Permit2 coupon to sign, when the route requires one.
	#[serde(default)]
	pub permit2: Option<PermitPayload>,
	/// Problems the taker must resolve before the swap can execute.
	#[serde(default)]
	pub issues: Option<Issues>,
}

impl QuoteResponse {
	/// Returns the EIP-712 permit payload, if the quote carries one.
	pub fn permit_payload(&self) -> Option<&serde_json::Value> {
		self.permit2.as_ref().and_then(|permit| permit.eip712.as_ref())
	}
}
