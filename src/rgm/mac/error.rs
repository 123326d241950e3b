// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgenmac
// File: error.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025

//! Status-style error values shared by every `Mac` implementation.

use std::borrow::Cow;

/// Coarse error classification. Kinds are deliberately few: callers
/// branch on the kind, never on which internal step failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacErrorKind {
	/// The requested hash function is not backed by the engine.
	Unimplemented,
	/// A precondition of the primitive or the hash engine itself failed.
	Internal,
	/// Caller-supplied tag was malformed or did not verify.
	InvalidArgument,
}

impl MacErrorKind {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Unimplemented => "unimplemented",
			Self::Internal => "internal",
			Self::InvalidArgument => "invalid argument",
		}
	}
}

impl std::fmt::Display for MacErrorKind {
	fn fmt(
		&self,
		f: &mut std::fmt::Formatter<'_>,
	) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacError {
	kind: MacErrorKind,
	message: Cow<'static, str>,
}

impl MacError {
	pub fn new(
		kind: MacErrorKind,
		message: impl Into<Cow<'static, str>>,
	) -> Self {
		Self {
			kind,
			message: message.into(),
		}
	}

	pub fn unimplemented(
		message: impl Into<Cow<'static, str>>,
	) -> Self {
		Self::new(MacErrorKind::Unimplemented, message)
	}

	pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
		Self::new(MacErrorKind::Internal, message)
	}

	pub fn invalid_argument(
		message: impl Into<Cow<'static, str>>,
	) -> Self {
		Self::new(MacErrorKind::InvalidArgument, message)
	}

	pub fn kind(&self) -> MacErrorKind {
		self.kind
	}

	pub fn message(&self) -> &str {
		self.message.as_ref()
	}
}

impl std::fmt::Display for MacError {
	fn fmt(
		&self,
		f: &mut std::fmt::Formatter<'_>,
	) -> std::fmt::Result {
		write!(f, "{}: {}", self.kind, self.message)
	}
}

impl std::error::Error for MacError {}
