// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgenmac
// Module: mac (message authentication codes)
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! Keyed message authentication. `primitive` defines the `Mac`
//! capability, `hmac` implements it over the hash engine in `hash`.

pub mod compare;
pub mod error;
pub mod hash;
pub mod hmac;
pub mod key;
pub mod primitive;
