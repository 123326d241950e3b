// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgenmac
// File: primitive.rs
// Author: Volker Schwaberow <volker@schwaberow.de>

//! The `Mac` capability shared by all keyed authentication primitives.

use super::error::MacError;

/// Computes and verifies authentication tags under a key fixed at
/// construction time.
///
/// Implementations are immutable and may be shared across threads.
pub trait Mac: Send + Sync {
	/// Returns the tag for `data`.
	fn compute_mac(&self, data: &[u8]) -> Result<Vec<u8>, MacError>;

	/// Succeeds iff `mac` is the tag for `data`. Failures carry no detail
	/// about where a mismatch occurred.
	fn verify_mac(&self, mac: &[u8], data: &[u8])
		-> Result<(), MacError>;
}

impl<T: Mac + ?Sized> Mac for Box<T> {
	fn compute_mac(&self, data: &[u8]) -> Result<Vec<u8>, MacError> {
		(**self).compute_mac(data)
	}

	fn verify_mac(
		&self,
		mac: &[u8],
		data: &[u8],
	) -> Result<(), MacError> {
		(**self).verify_mac(mac, data)
	}
}
