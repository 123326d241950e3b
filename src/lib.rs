// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgenmac
// File: lib.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

pub mod rgm {
	pub mod mac;
}
