// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgenmac
// File: hmac.rs
// Author: Volker Schwaberow <volker@schwaberow.de>

//! HMAC primitive with tag truncation, over SHA-1 (legacy) and SHA-2.

use std::fmt;

use zeroize::{Zeroize, Zeroizing};

use super::compare::constant_time_eq;
use super::error::MacError;
use super::hash::{self, DigestBuffer, HashAlgorithm, HashType};
use super::primitive::Mac;

/// HMAC keyed with a fixed secret, emitting the leading `tag_size` bytes
/// of the native digest.
pub struct HmacPrimitive {
	algorithm: &'static HashAlgorithm,
	tag_size: usize,
	key: Zeroizing<Vec<u8>>,
}

impl HmacPrimitive {
	/// Validates `hash` and `tag_size` and takes a copy of `key`.
	///
	/// The key length is not policed here; the key manager owns that
	/// policy. A bad tag size means the key manager let through
	/// parameters it should not have, hence `Internal`.
	pub fn new(
		hash: HashType,
		tag_size: usize,
		key: &[u8],
	) -> Result<Self, MacError> {
		let algorithm = hash::resolve(hash)?;
		if tag_size == 0 || tag_size > algorithm.native_digest_size() {
			return Err(MacError::internal("invalid tag size"));
		}
		Ok(Self {
			algorithm,
			tag_size,
			key: Zeroizing::new(key.to_vec()),
		})
	}

	/// Same as [`HmacPrimitive::new`] but hands back the `Mac` trait
	/// object.
	pub fn boxed(
		hash: HashType,
		tag_size: usize,
		key: &[u8],
	) -> Result<Box<dyn Mac>, MacError> {
		Ok(Box::new(Self::new(hash, tag_size, key)?))
	}

	pub fn hash_type(&self) -> HashType {
		self.algorithm.hash_type()
	}

	pub fn tag_size(&self) -> usize {
		self.tag_size
	}

	fn keyed_digest(
		&self,
		data: &[u8],
		buf: &mut DigestBuffer,
	) -> Result<(), MacError> {
		self.algorithm.hmac(&self.key, data, buf).map(|_| ())
	}
}

impl Mac for HmacPrimitive {
	fn compute_mac(&self, data: &[u8]) -> Result<Vec<u8>, MacError> {
		let mut buf: DigestBuffer = [0u8; hash::MAX_DIGEST_SIZE];
		let result = self
			.keyed_digest(data, &mut buf)
			.map(|()| buf[..self.tag_size].to_vec());
		buf.zeroize();
		result
	}

	fn verify_mac(
		&self,
		mac: &[u8],
		data: &[u8],
	) -> Result<(), MacError> {
		if mac.len() != self.tag_size {
			return Err(MacError::invalid_argument(
				"incorrect tag size",
			));
		}
		let mut buf: DigestBuffer = [0u8; hash::MAX_DIGEST_SIZE];
		let result = self.keyed_digest(data, &mut buf).map(|()| {
			constant_time_eq(&buf[..self.tag_size], mac)
		});
		buf.zeroize();
		if result? {
			Ok(())
		} else {
			Err(MacError::invalid_argument("verification failed"))
		}
	}
}

impl fmt::Debug for HmacPrimitive {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HmacPrimitive")
			.field("hash", &self.algorithm.hash_type())
			.field("tag_size", &self.tag_size)
			.field("key", &"<redacted>")
			.finish()
	}
}
