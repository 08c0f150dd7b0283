//! The swap orchestrator and run driver.
//!
//! One `execute_swap` call performs exactly one swap-and-submit sequence:
//!
//! 1. scale the configured notional by the sell asset's decimals,
//! 2. fetch an indicative price,
//! 3. resolve the allowance (ERC-20 sells only; failures here are logged
//!    and the attempt continues),
//! 4. fetch a firm quote,
//! 5. sign the permit message when the quote carries one and append the
//!    signature to the calldata,
//! 6. read the sender's transaction count as the explicit nonce,
//! 7. submit: directly for native sells, locally-signed raw broadcast for
//!    ERC-20 sells.
//!
//! Price, quote, and decimals failures abort the attempt. There is no retry
//! and no rollback of a partial approval.

use crate::SwapError;
use alloy_primitives::{utils::parse_units, U256};
use std::sync::Arc;
use swapper_account::AccountInterface;
use swapper_aggregator::AggregatorInterface;
use swapper_config::Config;
use swapper_delivery::DeliveryInterface;
use swapper_types::{
	bundle_permit_signature, AllowanceStatus, PriceResponse, QuoteResponse, SellAsset, SellPath,
	Signature, SubmissionPlan, SwapQuery, TransactionHash, TransactionPlan, NATIVE_DECIMALS,
};
use tracing::{info, warn};

/// Executes swap-and-submit sequences against the configured aggregator
/// and network.
pub struct SwapOrchestrator {
	config: Config,
	account: Arc<dyn AccountInterface>,
	aggregator: Arc<dyn AggregatorInterface>,
	delivery: Arc<dyn DeliveryInterface>,
}

impl SwapOrchestrator {
	/// Creates a new orchestrator over the given services.
	pub fn new(
		config: Config,
		account: Arc<dyn AccountInterface>,
		aggregator: Arc<dyn AggregatorInterface>,
		delivery: Arc<dyn DeliveryInterface>,
	) -> Self {
		Self {
			config,
			account,
			aggregator,
			delivery,
		}
	}

	/// Runs the configured sell assets in order with the configured delay
	/// between attempts. The first fatal fault ends the run.
	pub async fn run(&self) -> Result<(), SwapError> {
		for (index, asset) in self.config.swap.sell_assets.iter().enumerate() {
			if index > 0 {
				info!(
					delay_seconds = self.config.swap.delay_seconds,
					"Waiting before executing next swap"
				);
				tokio::time::sleep(std::time::Duration::from_secs(
					self.config.swap.delay_seconds,
				))
				.await;
			}

			info!(sell = %asset.symbol, "Executing swap");
			let hash = self.execute_swap(asset).await?;
			info!(sell = %asset.symbol, tx_hash = %hash, "Swap submitted");
		}
		Ok(())
	}

	/// Executes exactly one swap-and-submit sequence for the given asset.
	pub async fn execute_swap(&self, asset: &SellAsset) -> Result<TransactionHash, SwapError> {
		let notional = &self.config.swap.sell_amount;

		// 1. Scale the fixed notional by the asset's decimal precision.
		let decimals = if asset.is_native() {
			NATIVE_DECIMALS
		} else {
			self.delivery.token_decimals(asset.address).await?
		};
		let sell_amount = parse_units(notional, decimals)
			.map_err(|e| SwapError::InvalidAmount {
				amount: notional.clone(),
				reason: e.to_string(),
			})?
			.get_absolute();

		let query = SwapQuery {
			chain_id: self.config.network.chain_id,
			sell_token: asset.address,
			buy_token: self.config.swap.buy_token,
			sell_amount,
			taker: self.account.address(),
		};

		// 2. Indicative price.
		info!(
			sell = %asset.symbol,
			amount = %notional,
			buy_token = ?query.buy_token,
			"Fetching price"
		);
		let price = self.aggregator.price(&query).await?;
		if let Some(buy_amount) = &price.buy_amount {
			info!(buy_amount = %buy_amount, "Received price estimate");
		}

		// 3. Allowance resolution; never fatal.
		let path = self.resolve_allowance(asset, &price).await;

		// 4. Firm quote.
		info!(sell = %asset.symbol, "Fetching firm quote");
		let quote = self.aggregator.quote(&query).await?;

		// 5. Permit signing and payload assembly.
		let signature = self.sign_permit(&quote).await?;
		let tx = quote
			.transaction
			.as_ref()
			.ok_or(SwapError::TransactionMissing)?;
		let data = match &signature {
			Some(sig) => bundle_permit_signature(&tx.data, sig),
			None => tx.data.clone(),
		};

		// 6. Explicit nonce from the sender's transaction count.
		let nonce = self.delivery.transaction_count(query.taker).await?;

		let plan = TransactionPlan {
			to: tx.to,
			data,
			value: tx.value()?,
			nonce,
			gas: tx.gas()?,
			gas_price: tx.gas_price()?,
		};

		// 7. Submission plan, validated before use.
		let submission = match path {
			SellPath::Native => SubmissionPlan::DirectValue(plan),
			SellPath::Token(_) => {
				if signature.is_none() {
					warn!(sell = %asset.symbol, "No permit signature available, transaction not sent");
					return Err(SwapError::NotSubmittable);
				}
				SubmissionPlan::PermitBundled(plan)
			},
		};

		tracing::debug!(
			to = ?submission.transaction().to,
			nonce = submission.transaction().nonce,
			"Submitting swap transaction"
		);
		let hash = match &submission {
			SubmissionPlan::DirectValue(plan) => self.delivery.submit(plan).await?,
			SubmissionPlan::PermitBundled(plan) => self.delivery.submit_raw(plan).await?,
		};

		info!(tx_hash = %hash, "Transaction hash received");
		info!(
			"See transaction details at {}/tx/{}",
			self.config.network.explorer_url, hash
		);

		Ok(hash)
	}

	/// Resolves the allowance step for the sell asset.
	///
	/// Approval faults are logged and recorded as [`AllowanceStatus::Failed`];
	/// the swap attempt proceeds regardless and fails at submission if the
	/// allowance is in fact insufficient.
	async fn resolve_allowance(&self, asset: &SellAsset, price: &PriceResponse) -> SellPath {
		if asset.is_native() {
			info!("Native sell asset detected, no allowance check needed");
			return SellPath::Native;
		}

		let issue = match price.allowance_issue() {
			None => {
				info!(sell = %asset.symbol, "Sell token already approved for spender");
				return SellPath::Token(AllowanceStatus::AlreadyApproved);
			},
			Some(issue) => issue,
		};

		info!(
			sell = %asset.symbol,
			spender = ?issue.spender,
			"Approving spender to move sell token"
		);
		let status = match self
			.delivery
			.approve(asset.address, issue.spender, U256::MAX)
			.await
		{
			Ok(receipt) if receipt.success => {
				info!(
					tx_hash = %receipt.hash,
					block_number = receipt.block_number,
					"Approval confirmed"
				);
				AllowanceStatus::Granted
			},
			Ok(receipt) => {
				warn!(
					tx_hash = %receipt.hash,
					"Approval transaction reverted, continuing with swap attempt"
				);
				AllowanceStatus::Failed
			},
			Err(e) => {
				warn!(error = %e, "Error approving spender, continuing with swap attempt");
				AllowanceStatus::Failed
			},
		};

		SellPath::Token(status)
	}

	/// Signs the permit message attached to a firm quote, when present.
	///
	/// A signing fault leaves the signature absent, but a quote that expects
	/// a permit must end up with both a signature and transaction data;
	/// anything else aborts the attempt.
	async fn sign_permit(&self, quote: &QuoteResponse) -> Result<Option<Signature>, SwapError> {
		let payload = match quote.permit_payload() {
			None => return Ok(None),
			Some(payload) => payload,
		};

		let signature = match self.account.sign_typed_data(payload).await {
			Ok(signature) => {
				info!("Signed permit2 message from quote response");
				Some(signature)
			},
			Err(e) => {
				warn!(error = %e, "Error signing permit2 coupon");
				None
			},
		};

		if signature.is_none() || quote.transaction.is_none() {
			return Err(SwapError::PermitIncomplete);
		}

		Ok(signature)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::{Address, Bytes};
	use async_trait::async_trait;
	use mockall::{mock, Sequence};
	use serde_json::json;
	use std::sync::Mutex;
	use swapper_account::AccountError;
	use swapper_aggregator::AggregatorError;
	use swapper_config::{AggregatorConfig, NetworkConfig, SwapConfig, WalletConfig};
	use swapper_types::{
		AllowanceIssue, Issues, PermitPayload, SecretString, TransactionDescriptor,
		TransactionReceipt, BASE_USDC, BASE_WETH, NATIVE_ASSET,
	};

	mock! {
		pub Account {}

		#[async_trait]
		impl AccountInterface for Account {
			fn address(&self) -> Address;
			async fn sign_typed_data(
				&self,
				payload: &serde_json::Value,
			) -> Result<Signature, AccountError>;
		}
	}

	mock! {
		pub Aggregator {}

		#[async_trait]
		impl AggregatorInterface for Aggregator {
			async fn price(&self, query: &SwapQuery) -> Result<PriceResponse, AggregatorError>;
			async fn quote(&self, query: &SwapQuery) -> Result<QuoteResponse, AggregatorError>;
		}
	}

	mock! {
		pub Delivery {}

		#[async_trait]
		impl DeliveryInterface for Delivery {
			async fn token_decimals(
				&self,
				token: Address,
			) -> Result<u8, swapper_delivery::DeliveryError>;
			async fn approve(
				&self,
				token: Address,
				spender: Address,
				amount: U256,
			) -> Result<TransactionReceipt, swapper_delivery::DeliveryError>;
			async fn transaction_count(
				&self,
				owner: Address,
			) -> Result<u64, swapper_delivery::DeliveryError>;
			async fn submit(
				&self,
				plan: &TransactionPlan,
			) -> Result<TransactionHash, swapper_delivery::DeliveryError>;
			async fn submit_raw(
				&self,
				plan: &TransactionPlan,
			) -> Result<TransactionHash, swapper_delivery::DeliveryError>;
		}
	}

	const TAKER: Address = Address::repeat_byte(0x42);
	const SPENDER: Address = Address::repeat_byte(0x11);
	const SETTLER: Address = Address::repeat_byte(0x22);

	// 0.0001 scaled by 18 decimals.
	const SELL_AMOUNT_WEI: u64 = 100_000_000_000_000;

	fn test_config() -> Config {
		Config {
			wallet: WalletConfig {
				private_key: SecretString::from("0x01"),
			},
			aggregator: AggregatorConfig {
				api_key: SecretString::from("key"),
				base_url: "https://api.0x.org".to_string(),
				api_version: "v2".to_string(),
			},
			network: NetworkConfig {
				rpc_url: "http://localhost:8545".to_string(),
				chain_id: 8453,
				explorer_url: "https://basescan.org".to_string(),
			},
			swap: SwapConfig::default(),
		}
	}

	fn eth() -> SellAsset {
		SellAsset::native("ETH")
	}

	fn weth() -> SellAsset {
		SellAsset::new("WETH", BASE_WETH)
	}

	fn price_with_issue(issue: Option<AllowanceIssue>) -> PriceResponse {
		PriceResponse {
			buy_amount: Some("312026".to_string()),
			issues: Some(Issues { allowance: issue }),
		}
	}

	fn allowance_issue() -> AllowanceIssue {
		AllowanceIssue {
			spender: SPENDER,
			actual: Some("0".to_string()),
		}
	}

	fn descriptor() -> TransactionDescriptor {
		TransactionDescriptor {
			to: SETTLER,
			data: Bytes::from(vec![0xde, 0xad, 0xbe, 0xef]),
			value: Some("100000000000000".to_string()),
			gas: Some("288079".to_string()),
			gas_price: Some("4837860".to_string()),
		}
	}

	fn permit_payload() -> serde_json::Value {
		json!({"primaryType": "PermitTransferFrom", "domain": {"name": "Permit2"}})
	}

	fn quote_with_permit() -> QuoteResponse {
		QuoteResponse {
			buy_amount: Some("312026".to_string()),
			transaction: Some(descriptor()),
			permit2: Some(PermitPayload {
				eip712: Some(permit_payload()),
			}),
			issues: None,
		}
	}

	fn quote_without_permit() -> QuoteResponse {
		QuoteResponse {
			buy_amount: Some("312026".to_string()),
			transaction: Some(descriptor()),
			permit2: None,
			issues: None,
		}
	}

	fn test_signature() -> Signature {
		Signature(vec![0xaa; 65])
	}

	fn receipt(success: bool) -> TransactionReceipt {
		TransactionReceipt {
			hash: TransactionHash(vec![0x0f; 32]),
			block_number: 1,
			success,
		}
	}

	fn orchestrator(
		account: MockAccount,
		aggregator: MockAggregator,
		delivery: MockDelivery,
	) -> SwapOrchestrator {
		SwapOrchestrator::new(
			test_config(),
			Arc::new(account),
			Arc::new(aggregator),
			Arc::new(delivery),
		)
	}

	#[tokio::test]
	async fn native_sell_never_checks_allowance() {
		let mut account = MockAccount::new();
		account.expect_address().return_const(TAKER);

		let mut aggregator = MockAggregator::new();
		aggregator
			.expect_price()
			.times(1)
			.withf(|query| {
				query.sell_token == NATIVE_ASSET
					&& query.buy_token == BASE_USDC
					&& query.sell_amount == U256::from(SELL_AMOUNT_WEI)
					&& query.taker == TAKER
			})
			.returning(|_| Ok(price_with_issue(None)));
		aggregator
			.expect_quote()
			.times(1)
			.returning(|_| Ok(quote_without_permit()));

		// No token_decimals and no approve expectations: calling either
		// fails the test.
		let mut delivery = MockDelivery::new();
		delivery
			.expect_transaction_count()
			.times(1)
			.returning(|_| Ok(7));
		delivery
			.expect_submit()
			.times(1)
			.withf(|plan| {
				plan.to == SETTLER
					&& plan.value == U256::from(100_000_000_000_000u64)
					&& plan.nonce == 7
					&& plan.gas == Some(288_079)
					&& plan.gas_price == Some(4_837_860)
					&& plan.data.as_ref() == [0xde, 0xad, 0xbe, 0xef]
			})
			.returning(|_| Ok(TransactionHash(vec![0x01; 32])));

		let hash = orchestrator(account, aggregator, delivery)
			.execute_swap(&eth())
			.await
			.unwrap();
		assert_eq!(hash, TransactionHash(vec![0x01; 32]));
	}

	#[tokio::test]
	async fn token_sell_approves_reported_spender_before_quote() {
		let mut account = MockAccount::new();
		account.expect_address().return_const(TAKER);
		account
			.expect_sign_typed_data()
			.times(1)
			.returning(|_| Ok(test_signature()));

		let mut seq = Sequence::new();

		let mut delivery = MockDelivery::new();
		delivery
			.expect_token_decimals()
			.times(1)
			.withf(|token| *token == BASE_WETH)
			.returning(|_| Ok(18));

		let mut aggregator = MockAggregator::new();
		aggregator
			.expect_price()
			.times(1)
			.returning(|_| Ok(price_with_issue(Some(allowance_issue()))));

		// Maximum approval for the reported spender, then the firm quote.
		delivery
			.expect_approve()
			.times(1)
			.in_sequence(&mut seq)
			.withf(|token, spender, amount| {
				*token == BASE_WETH && *spender == SPENDER && *amount == U256::MAX
			})
			.returning(|_, _, _| Ok(receipt(true)));
		aggregator
			.expect_quote()
			.times(1)
			.in_sequence(&mut seq)
			.returning(|_| Ok(quote_with_permit()));

		delivery
			.expect_transaction_count()
			.times(1)
			.returning(|_| Ok(3));
		let expected = bundle_permit_signature(&descriptor().data, &test_signature());
		delivery
			.expect_submit_raw()
			.times(1)
			.withf(move |plan| plan.data == expected && plan.nonce == 3)
			.returning(|_| Ok(TransactionHash(vec![0x02; 32])));

		let hash = orchestrator(account, aggregator, delivery)
			.execute_swap(&weth())
			.await
			.unwrap();
		assert_eq!(hash, TransactionHash(vec![0x02; 32]));
	}

	#[tokio::test]
	async fn token_sell_without_allowance_issue_skips_approval() {
		let mut account = MockAccount::new();
		account.expect_address().return_const(TAKER);
		account
			.expect_sign_typed_data()
			.times(1)
			.returning(|_| Ok(test_signature()));

		let mut aggregator = MockAggregator::new();
		aggregator
			.expect_price()
			.times(1)
			.returning(|_| Ok(price_with_issue(None)));
		aggregator
			.expect_quote()
			.times(1)
			.returning(|_| Ok(quote_with_permit()));

		// No approve expectation: an approval call fails the test.
		let mut delivery = MockDelivery::new();
		delivery
			.expect_token_decimals()
			.times(1)
			.returning(|_| Ok(18));
		delivery
			.expect_transaction_count()
			.times(1)
			.returning(|_| Ok(0));
		delivery
			.expect_submit_raw()
			.times(1)
			.returning(|_| Ok(TransactionHash(vec![0x03; 32])));

		orchestrator(account, aggregator, delivery)
			.execute_swap(&weth())
			.await
			.unwrap();
	}

	#[tokio::test]
	async fn approval_failure_is_not_fatal() {
		let mut account = MockAccount::new();
		account.expect_address().return_const(TAKER);
		account
			.expect_sign_typed_data()
			.times(1)
			.returning(|_| Ok(test_signature()));

		let mut aggregator = MockAggregator::new();
		aggregator
			.expect_price()
			.times(1)
			.returning(|_| Ok(price_with_issue(Some(allowance_issue()))));
		aggregator
			.expect_quote()
			.times(1)
			.returning(|_| Ok(quote_with_permit()));

		let mut delivery = MockDelivery::new();
		delivery
			.expect_token_decimals()
			.times(1)
			.returning(|_| Ok(18));
		delivery.expect_approve().times(1).returning(|_, _, _| {
			Err(swapper_delivery::DeliveryError::Network(
				"insufficient funds".to_string(),
			))
		});
		delivery
			.expect_transaction_count()
			.times(1)
			.returning(|_| Ok(0));
		delivery
			.expect_submit_raw()
			.times(1)
			.returning(|_| Ok(TransactionHash(vec![0x04; 32])));

		// The swap proceeds to submission despite the failed approval.
		orchestrator(account, aggregator, delivery)
			.execute_swap(&weth())
			.await
			.unwrap();
	}

	#[tokio::test]
	async fn signing_failure_with_permit_aborts_without_submission() {
		let mut account = MockAccount::new();
		account.expect_address().return_const(TAKER);
		account
			.expect_sign_typed_data()
			.times(1)
			.returning(|_| Err(AccountError::SigningFailed("rejected".to_string())));

		let mut aggregator = MockAggregator::new();
		aggregator
			.expect_price()
			.times(1)
			.returning(|_| Ok(price_with_issue(None)));
		aggregator
			.expect_quote()
			.times(1)
			.returning(|_| Ok(quote_with_permit()));

		// No submit, submit_raw, or transaction_count expectations:
		// reaching submission fails the test.
		let mut delivery = MockDelivery::new();
		delivery
			.expect_token_decimals()
			.times(1)
			.returning(|_| Ok(18));

		let err = orchestrator(account, aggregator, delivery)
			.execute_swap(&weth())
			.await
			.unwrap_err();
		assert!(matches!(err, SwapError::PermitIncomplete));
		assert_eq!(
			err.to_string(),
			"Failed to obtain signature or transaction data"
		);
	}

	#[tokio::test]
	async fn permit_without_transaction_data_aborts() {
		let mut account = MockAccount::new();
		account.expect_address().return_const(TAKER);
		account
			.expect_sign_typed_data()
			.times(1)
			.returning(|_| Ok(test_signature()));

		let quote = QuoteResponse {
			transaction: None,
			permit2: Some(PermitPayload {
				eip712: Some(permit_payload()),
			}),
			..Default::default()
		};

		let mut aggregator = MockAggregator::new();
		aggregator
			.expect_price()
			.times(1)
			.returning(|_| Ok(price_with_issue(None)));
		aggregator
			.expect_quote()
			.times(1)
			.returning(move |_| Ok(quote.clone()));

		let mut delivery = MockDelivery::new();
		delivery
			.expect_token_decimals()
			.times(1)
			.returning(|_| Ok(18));

		let err = orchestrator(account, aggregator, delivery)
			.execute_swap(&weth())
			.await
			.unwrap_err();
		assert!(matches!(err, SwapError::PermitIncomplete));
	}

	#[tokio::test]
	async fn token_quote_without_permit_is_not_submitted() {
		let mut account = MockAccount::new();
		account.expect_address().return_const(TAKER);

		let mut aggregator = MockAggregator::new();
		aggregator
			.expect_price()
			.times(1)
			.returning(|_| Ok(price_with_issue(None)));
		aggregator
			.expect_quote()
			.times(1)
			.returning(|_| Ok(quote_without_permit()));

		let mut delivery = MockDelivery::new();
		delivery
			.expect_token_decimals()
			.times(1)
			.returning(|_| Ok(18));
		delivery
			.expect_transaction_count()
			.times(1)
			.returning(|_| Ok(0));

		let err = orchestrator(account, aggregator, delivery)
			.execute_swap(&weth())
			.await
			.unwrap_err();
		assert!(matches!(err, SwapError::NotSubmittable));
	}

	#[tokio::test]
	async fn decimals_read_failure_is_fatal() {
		let account = MockAccount::new();
		let aggregator = MockAggregator::new();

		let mut delivery = MockDelivery::new();
		delivery.expect_token_decimals().times(1).returning(|_| {
			Err(swapper_delivery::DeliveryError::Network(
				"connection refused".to_string(),
			))
		});

		let err = orchestrator(account, aggregator, delivery)
			.execute_swap(&weth())
			.await
			.unwrap_err();
		assert!(matches!(err, SwapError::Delivery(_)));
	}

	#[tokio::test]
	async fn identical_responses_assemble_identical_payloads() {
		let mut account = MockAccount::new();
		account.expect_address().return_const(TAKER);
		account
			.expect_sign_typed_data()
			.times(2)
			.returning(|_| Ok(test_signature()));

		let mut aggregator = MockAggregator::new();
		aggregator
			.expect_price()
			.times(2)
			.returning(|_| Ok(price_with_issue(None)));
		aggregator
			.expect_quote()
			.times(2)
			.returning(|_| Ok(quote_with_permit()));

		let payloads = Arc::new(Mutex::new(Vec::new()));
		let captured = Arc::clone(&payloads);

		let mut delivery = MockDelivery::new();
		delivery
			.expect_token_decimals()
			.times(2)
			.returning(|_| Ok(18));
		delivery
			.expect_transaction_count()
			.times(2)
			.returning(|_| Ok(9));
		delivery.expect_submit_raw().times(2).returning(move |plan| {
			captured.lock().unwrap().push(plan.data.clone());
			Ok(TransactionHash(vec![0x05; 32]))
		});

		let orchestrator = orchestrator(account, aggregator, delivery);
		orchestrator.execute_swap(&weth()).await.unwrap();
		orchestrator.execute_swap(&weth()).await.unwrap();

		let payloads = payloads.lock().unwrap();
		assert_eq!(payloads.len(), 2);
		assert_eq!(payloads[0], payloads[1]);
		assert_eq!(
			payloads[0],
			bundle_permit_signature(&descriptor().data, &test_signature())
		);
	}

	#[tokio::test(start_paused = true)]
	async fn run_driver_executes_configured_assets_in_order() {
		let mut account = MockAccount::new();
		account.expect_address().return_const(TAKER);
		account
			.expect_sign_typed_data()
			.times(2)
			.returning(|_| Ok(test_signature()));

		let mut aggregator = MockAggregator::new();
		let mut seq = Sequence::new();
		aggregator
			.expect_price()
			.times(1)
			.in_sequence(&mut seq)
			.withf(|query| query.sell_token == NATIVE_ASSET)
			.returning(|_| Ok(price_with_issue(None)));
		aggregator
			.expect_price()
			.times(1)
			.in_sequence(&mut seq)
			.withf(|query| query.sell_token == BASE_WETH)
			.returning(|_| Ok(price_with_issue(None)));
		aggregator
			.expect_quote()
			.times(2)
			.returning(|_| Ok(quote_with_permit()));

		let mut delivery = MockDelivery::new();
		delivery
			.expect_token_decimals()
			.times(1)
			.returning(|_| Ok(18));
		delivery
			.expect_transaction_count()
			.times(2)
			.returning(|_| Ok(0));
		delivery
			.expect_submit()
			.times(1)
			.returning(|_| Ok(TransactionHash(vec![0x06; 32])));
		delivery
			.expect_submit_raw()
			.times(1)
			.returning(|_| Ok(TransactionHash(vec![0x07; 32])));

		orchestrator(account, aggregator, delivery).run().await.unwrap();
	}
}
