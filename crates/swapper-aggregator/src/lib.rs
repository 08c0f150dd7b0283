//! Aggregator client module for the swapper.
//!
//! This module provides the interface for talking to the swap aggregator's
//! HTTP API: an indicative price endpoint and a firm quote endpoint that
//! share the same query parameters. The orchestrator depends only on the
//! [`AggregatorInterface`] trait; the concrete implementation targets the
//! 0x v2 permit2 API.

use async_trait::async_trait;
use swapper_types::{PriceResponse, QuoteResponse, SwapQuery};
use thiserror::Error;

/// Re-export implementations
pub mod implementations {
	pub mod zeroex;
}

/// Errors that can occur during aggregator operations.
#[derive(Debug, Error)]
pub enum AggregatorError {
	/// Error that occurs during network communication with the aggregator.
	#[error("Network error: {0}")]
	Network(String),
	/// Error returned by the aggregator itself (non-2xx response).
	#[error("Aggregator rejected request with status {status}: {body}")]
	Api {
		/// HTTP status code of the response.
		status: u16,
		/// Response body, verbatim, for diagnostics.
		body: String,
	},
	/// Error that occurs when a response body cannot be interpreted.
	#[error("Malformed aggregator response: {0}")]
	MalformedResponse(String),
	/// Error that occurs when the client cannot be constructed.
	#[error("Configuration error: {0}")]
	Configuration(String),
}

/// Trait defining the interface for aggregator implementations.
///
/// Both operations take the same query; the quote endpoint additionally
/// returns an executable transaction descriptor and, when the route requires
/// one, an off-chain permit message.
#[async_trait]
pub trait AggregatorInterface: Send + Sync {
	/// Fetches an indicative price for the given swap parameters.
	async fn price(&self, query: &SwapQuery) -> Result<PriceResponse, AggregatorError>;

	/// Fetches a firm, executable quote for the given swap parameters.
	async fn quote(&self, query: &SwapQuery) -> Result<QuoteResponse, AggregatorError>;
}
