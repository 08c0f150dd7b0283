//! Chain-level constants shared across the swapper components.

use alloy_primitives::{address, Address};

/// Pseudo-address aggregators use to identify the chain's native asset.
pub const NATIVE_ASSET: Address = Address::repeat_byte(0xee);

/// Decimal precision of the native asset.
pub const NATIVE_DECIMALS: u8 = 18;

/// Chain ID of Base mainnet, the default network.
pub const BASE_CHAIN_ID: u64 = 8453;

/// Canonical WETH on Base.
pub const BASE_WETH: Address = address!("4200000000000000000000000000000000000006");

/// Native USDC on Base.
pub const BASE_USDC: Address = address!("833589fcd6edb6e08f4c7c32d4f71b54bda02913");

/// Default block explorer for Base.
pub const BASE_EXPLORER_URL: &str = "https://basescan.org";
