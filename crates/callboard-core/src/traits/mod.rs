// SPDX-FileCopyrightText: 2026 Callboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resource-family traits the view controllers are written against.
//!
//! The HTTP gateway implements all of them; tests substitute scripted
//! backends. All traits use `#[async_trait]` for dynamic dispatch.

pub mod calls;
pub mod dashboard;
pub mod health;
pub mod voices;

pub use calls::CallsApi;
pub use dashboard::DashboardApi;
pub use health::HealthApi;
pub use voices::VoicesApi;
