// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgenmac
// File: key.rs
// Author: Volker Schwaberow <volker@schwaberow.de>

//! Key parameter and key material containers for HMAC primitives.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use super::error::MacError;
use super::hash::HashType;
use super::hmac::HmacPrimitive;

/// Public half of an HMAC key: which hash and how many tag bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HmacParameters {
	pub hash: HashType,
	pub tag_size: usize,
}

impl HmacParameters {
	pub const fn new(hash: HashType, tag_size: usize) -> Self {
		Self { hash, tag_size }
	}
}

/// Parameters plus secret key value. The secret is wiped on drop and
/// never printed.
#[derive(Clone)]
pub struct HmacKey {
	params: HmacParameters,
	key_value: Zeroizing<Vec<u8>>,
}

impl HmacKey {
	pub fn new(params: HmacParameters, key_value: Vec<u8>) -> Self {
		Self {
			params,
			key_value: Zeroizing::new(key_value),
		}
	}

	pub fn params(&self) -> HmacParameters {
		self.params
	}

	pub fn key_len(&self) -> usize {
		self.key_value.len()
	}

	/// Builds the validated primitive for this key.
	pub fn primitive(&self) -> Result<HmacPrimitive, MacError> {
		HmacPrimitive::new(
			self.params.hash,
			self.params.tag_size,
			&self.key_value,
		)
	}
}

impl fmt::Debug for HmacKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HmacKey")
			.field("params", &self.params)
			.field("key_len", &self.key_len())
			.finish()
	}
}
