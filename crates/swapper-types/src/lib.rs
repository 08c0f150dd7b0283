//! Common types module for the swapper system.
//!
//! This module defines the core data types and structures shared by the
//! swapper components. It provides a centralized location for the sell-asset
//! model, the aggregator wire types, submission planning, and small utilities
//! so every crate agrees on the same shapes.

/// Aggregator request and response wire types.
pub mod aggregator;
/// Sell-asset model and allowance state tracking.
pub mod asset;
/// Chain-level constants shared across components.
pub mod constants;
/// Transaction delivery types for blockchain interactions.
pub mod delivery;
/// Submission planning types produced by the orchestrator.
pub mod plan;
/// Secure string type for secrets.
pub mod secret_string;
/// Utility functions for calldata assembly and formatting.
pub mod utils;

// Re-export all types for convenient access
pub use aggregator::*;
pub use asset::*;
pub use constants::*;
pub use delivery::*;
pub use plan::*;
pub use secret_string::SecretString;
pub use utils::bundle_permit_signature;
