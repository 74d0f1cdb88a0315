// SPDX-FileCopyrightText: 2026 Callboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Callboard controller tests.
//!
//! - [`MockBackend`] - scripted in-memory backend with request counters and gates
//! - [`fixtures`] - deterministic calls, conversations, voices and stats

pub mod fixtures;
pub mod mock_backend;

pub use mock_backend::{Endpoint, Gate, MockBackend, not_found, server_error, transport_error};
