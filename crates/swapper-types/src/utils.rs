//! Utility functions for calldata assembly and formatting.

use crate::delivery::Signature;
use alloy_primitives::{Bytes, U256};

/// Appends a permit signature to swap calldata.
///
/// The execution contract expects permit-bundled calldata laid out as
/// `data ‖ len ‖ signature`, where `len` is the signature's byte length
/// encoded as a 32-byte big-endian word.
pub fn bundle_permit_signature(data: &Bytes, signature: &Signature) -> Bytes {
	let mut out = Vec::with_capacity(data.len() + 32 + signature.len());
	out.extend_from_slice(data);
	out.extend_from_slice(&U256::from(signature.len()).to_be_bytes::<32>());
	out.extend_from_slice(&signature.0);
	Bytes::from(out)
}
