// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgenmac
// File: hash.rs
// Author: Volker Schwaberow <volker@schwaberow.de>

//! Hash engine seam: maps symbolic hash identifiers onto RustCrypto
//! HMAC implementations and writes full-length digests into a caller
//! owned stack buffer.

use std::fmt;
use std::str::FromStr;

use digest::InvalidLength;
use hmac::{Hmac, Mac as KeyedHash};
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha512};
use strum::EnumIter;

use super::error::MacError;

/// Largest native digest among the supported hashes (SHA-512).
pub const MAX_DIGEST_SIZE: usize = 64;

pub type DigestBuffer = [u8; MAX_DIGEST_SIZE];

type HmacSha1 = Hmac<Sha1>;
type HmacSha224 = Hmac<Sha224>;
type HmacSha256 = Hmac<Sha256>;
type HmacSha512 = Hmac<Sha512>;

const ENGINE_FAILURE: &str = "hash engine failed to compute HMAC";

/// Hash identifiers as they appear in key parameters. Not every
/// identifier is backed by the engine; see [`resolve`].
#[derive(
	Clone,
	Copy,
	Debug,
	PartialEq,
	Eq,
	Hash,
	Serialize,
	Deserialize,
	EnumIter,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum HashType {
	#[serde(rename = "unknown")]
	UnknownHash,
	Sha1,
	Sha224,
	Sha256,
	Sha384,
	Sha512,
}

impl HashType {
	pub fn identifier(self) -> &'static str {
		match self {
			Self::UnknownHash => "unknown",
			Self::Sha1 => "sha1",
			Self::Sha224 => "sha224",
			Self::Sha256 => "sha256",
			Self::Sha384 => "sha384",
			Self::Sha512 => "sha512",
		}
	}

	pub fn display_name(self) -> &'static str {
		match self {
			Self::UnknownHash => "UNKNOWN",
			Self::Sha1 => "SHA-1",
			Self::Sha224 => "SHA-224",
			Self::Sha256 => "SHA-256",
			Self::Sha384 => "SHA-384",
			Self::Sha512 => "SHA-512",
		}
	}

	/// SHA-1 and SHA-224 still work but are flagged for replacement.
	pub fn is_legacy(self) -> bool {
		matches!(self, Self::Sha1 | Self::Sha224)
	}
}

impl fmt::Display for HashType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.display_name())
	}
}

impl FromStr for HashType {
	type Err = MacError;

	/// Accepts `sha256`, `SHA-256`, `sha_256` and similar spellings.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let normalized: String = s
			.chars()
			.filter(|c| *c != '-' && *c != '_')
			.map(|c| c.to_ascii_lowercase())
			.collect();
		match normalized.as_str() {
			"unknown" => Ok(Self::UnknownHash),
			"sha1" => Ok(Self::Sha1),
			"sha224" => Ok(Self::Sha224),
			"sha256" => Ok(Self::Sha256),
			"sha384" => Ok(Self::Sha384),
			"sha512" => Ok(Self::Sha512),
			_ => Err(MacError::unimplemented(format!(
				"unsupported hash `{}`",
				s
			))),
		}
	}
}

impl TryFrom<String> for HashType {
	type Error = MacError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

/// Engine-native descriptor for a supported hash.
#[derive(Debug, PartialEq, Eq)]
pub struct HashAlgorithm {
	hash: HashType,
	digest_size: usize,
}

static ALGORITHMS: [HashAlgorithm; 4] = [
	HashAlgorithm {
		hash: HashType::Sha1,
		digest_size: 20,
	},
	HashAlgorithm {
		hash: HashType::Sha224,
		digest_size: 28,
	},
	HashAlgorithm {
		hash: HashType::Sha256,
		digest_size: 32,
	},
	HashAlgorithm {
		hash: HashType::Sha512,
		digest_size: MAX_DIGEST_SIZE,
	},
];

/// Looks up the engine descriptor for `hash`.
pub fn resolve(
	hash: HashType,
) -> Result<&'static HashAlgorithm, MacError> {
	ALGORITHMS
		.iter()
		.find(|algorithm| algorithm.hash == hash)
		.ok_or_else(|| MacError::unimplemented("unsupported hash"))
}

/// Every hash the engine can compute, in table order.
pub fn supported() -> impl Iterator<Item = &'static HashAlgorithm> {
	ALGORITHMS.iter()
}

impl HashAlgorithm {
	pub fn hash_type(&self) -> HashType {
		self.hash
	}

	pub fn native_digest_size(&self) -> usize {
		self.digest_size
	}

	/// Computes the full HMAC of `message` under `key` into `out` and
	/// returns the number of bytes written.
	pub fn hmac(
		&self,
		key: &[u8],
		message: &[u8],
		out: &mut DigestBuffer,
	) -> Result<usize, MacError> {
		let written = match self.hash {
			HashType::Sha1 => keyed_digest(
				HmacSha1::new_from_slice(key),
				message,
				out,
			),
			HashType::Sha224 => keyed_digest(
				HmacSha224::new_from_slice(key),
				message,
				out,
			),
			HashType::Sha256 => keyed_digest(
				HmacSha256::new_from_slice(key),
				message,
				out,
			),
			HashType::Sha512 => keyed_digest(
				HmacSha512::new_from_slice(key),
				message,
				out,
			),
			HashType::UnknownHash | HashType::Sha384 => {
				Err(MacError::internal(ENGINE_FAILURE))
			}
		}?;
		if written != self.digest_size {
			return Err(MacError::internal(ENGINE_FAILURE));
		}
		Ok(written)
	}
}

fn keyed_digest<M: KeyedHash>(
	mac: Result<M, InvalidLength>,
	message: &[u8],
	out: &mut DigestBuffer,
) -> Result<usize, MacError> {
	let mut mac =
		mac.map_err(|_| MacError::internal(ENGINE_FAILURE))?;
	mac.update(message);
	let digest = mac.finalize().into_bytes();
	let written = digest.len();
	out.get_mut(..written)
		.ok_or_else(|| MacError::internal(ENGINE_FAILURE))?
		.copy_from_slice(&digest);
	Ok(written)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::rgm::mac::error::MacErrorKind;
	use digest::Digest;
	use strum::IntoEnumIterator;

	#[test]
	fn table_sizes_match_digest_output() {
		let expected = [
			(HashType::Sha1, <Sha1 as Digest>::output_size()),
			(HashType::Sha224, <Sha224 as Digest>::output_size()),
			(HashType::Sha256, <Sha256 as Digest>::output_size()),
			(HashType::Sha512, <Sha512 as Digest>::output_size()),
		];
		for (hash, size) in expected {
			let algorithm = resolve(hash).unwrap();
			assert_eq!(algorithm.native_digest_size(), size);
			assert!(size <= MAX_DIGEST_SIZE);
		}
	}

	#[test]
	fn unbacked_identifiers_are_unimplemented() {
		for hash in [HashType::UnknownHash, HashType::Sha384] {
			let err = resolve(hash).unwrap_err();
			assert_eq!(err.kind(), MacErrorKind::Unimplemented);
			assert_eq!(err.message(), "unsupported hash");
		}
	}

	#[test]
	fn every_supported_hash_round_trips_identifier() {
		for hash in HashType::iter() {
			let parsed: HashType = hash.identifier().parse().unwrap();
			assert_eq!(parsed, hash);
			let display: HashType =
				hash.display_name().parse().unwrap();
			assert_eq!(display, hash);
		}
		assert_eq!(supported().count(), 4);
	}

	#[test]
	fn parsing_rejects_unknown_names() {
		let err = "md5".parse::<HashType>().unwrap_err();
		assert_eq!(err.kind(), MacErrorKind::Unimplemented);
		assert_eq!(
			"SHA_512".parse::<HashType>().unwrap(),
			HashType::Sha512
		);
	}

	#[test]
	fn engine_writes_native_digest_length() {
		let mut buf = [0u8; MAX_DIGEST_SIZE];
		for algorithm in supported() {
			let written =
				algorithm.hmac(b"key", b"message", &mut buf).unwrap();
			assert_eq!(written, algorithm.native_digest_size());
		}
	}

	#[test]
	fn legacy_flags() {
		assert!(HashType::Sha1.is_legacy());
		assert!(HashType::Sha224.is_legacy());
		assert!(!HashType::Sha256.is_legacy());
		assert!(!HashType::Sha512.is_legacy());
	}
}
