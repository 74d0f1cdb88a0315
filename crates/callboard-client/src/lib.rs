// SPDX-FileCopyrightText: 2026 Callboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP access layer for the voice-assistant backend.
//!
//! [`ApiClient`] implements the resource-family traits from `callboard-core`
//! ([`CallsApi`](callboard_core::CallsApi), [`VoicesApi`](callboard_core::VoicesApi),
//! [`DashboardApi`](callboard_core::DashboardApi), [`HealthApi`](callboard_core::HealthApi)).
//! Each family module also exposes the pure request builders the trait
//! methods are made of.

pub mod calls;
pub mod dashboard;
pub mod gateway;
pub mod health;
pub mod request;
pub mod voices;

pub use gateway::{API_BASE_PATH, ApiClient, REQUEST_TIMEOUT, normalize_failure};
pub use request::{ApiRequest, RequestBody};
