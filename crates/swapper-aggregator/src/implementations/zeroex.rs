//! 0x v2 permit2 aggregator implementation.
//!
//! Issues GET requests against `/swap/permit2/price` and
//! `/swap/permit2/quote` with the API key and version sent as default
//! headers on every request.

use crate::{AggregatorError, AggregatorInterface};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use swapper_config::AggregatorConfig;
use swapper_types::{PriceResponse, QuoteResponse, SwapQuery};

const PRICE_PATH: &str = "/swap/permit2/price";
const QUOTE_PATH: &str = "/swap/permit2/quote";

/// HTTP client for the 0x swap API.
pub struct ZeroExAggregator {
	client: reqwest::Client,
	base_url: String,
}

impl ZeroExAggregator {
	/// Creates a new aggregator client from configuration.
	///
	/// The API key and version are installed as default headers so every
	/// request carries them.
	pub fn new(config: &AggregatorConfig) -> Result<Self, AggregatorError> {
		let mut headers = HeaderMap::new();
		headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

		let mut api_key = config.api_key.with_exposed(|key| {
			HeaderValue::from_str(key)
				.map_err(|_| AggregatorError::Configuration("API key is not a valid header value".to_string()))
		})?;
		api_key.set_sensitive(true);
		headers.insert("0x-api-key", api_key);

		let version = HeaderValue::from_str(&config.api_version).map_err(|_| {
			AggregatorError::Configuration("API version is not a valid header value".to_string())
		})?;
		headers.insert("0x-version", version);

		let client = reqwest::Client::builder()
			.default_headers(headers)
			.build()
			.map_err(|e| AggregatorError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

		Ok(Self {
			client,
			base_url: config.base_url.trim_end_matches('/').to_string(),
		})
	}

	/// Issues one GET and decodes the JSON body into the expected shape.
	async fn get<T: DeserializeOwned>(
		&self,
		path: &str,
		query: &SwapQuery,
	) -> Result<T, AggregatorError> {
		let url = format!("{}{}", self.base_url, path);
		tracing::debug!(url = %url, params = ?query.as_pairs(), "Requesting aggregator endpoint");

		let response = self
			.client
			.get(&url)
			.query(&query.as_pairs())
			.send()
			.await
			.map_err(|e| AggregatorError::Network(format!("Request to {} failed: {}", path, e)))?;

		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			return Err(AggregatorError::Api {
				status: status.as_u16(),
				body,
			});
		}

		response
			.json::<T>()
			.await
			.map_err(|e| AggregatorError::MalformedResponse(e.to_string()))
	}
}

#[async_trait]
impl AggregatorInterface for ZeroExAggregator {
	async fn price(&self, query: &SwapQuery) -> Result<PriceResponse, AggregatorError> {
		self.get(PRICE_PATH, query).await
	}

	async fn quote(&self, query: &SwapQuery) -> Result<QuoteResponse, AggregatorError> {
		self.get(QUOTE_PATH, query).await
	}
}
