// SPDX-FileCopyrightText: 2026 Callboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bearer-token credential slot.
//!
//! The slot has exactly one writer ([`SignIn`]) and any number of readers
//! ([`CredentialSlot`]). Readers are consulted on every request, so reads are
//! lock-free.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

/// Source of the bearer token attached to outbound requests.
///
/// Returning `None` is not an error: the request goes out unauthenticated and
/// the backend decides whether that is acceptable.
pub trait CredentialProvider: Send + Sync + 'static {
    fn bearer_token(&self) -> Option<Arc<SecretString>>;
}

/// Read side of the process-wide credential slot.
#[derive(Clone)]
pub struct CredentialSlot {
    token: Arc<ArcSwapOption<SecretString>>,
}

/// Write side of the credential slot. Not `Clone`: the sign-in flow owns it.
pub struct SignIn {
    token: Arc<ArcSwapOption<SecretString>>,
}

impl CredentialSlot {
    /// Creates an empty slot, returning its single writer and a reader.
    pub fn new() -> (SignIn, CredentialSlot) {
        let token = Arc::new(ArcSwapOption::empty());
        (
            SignIn {
                token: Arc::clone(&token),
            },
            CredentialSlot { token },
        )
    }

    /// Returns true when a token is currently stored.
    pub fn is_signed_in(&self) -> bool {
        self.token.load().is_some()
    }
}

impl std::fmt::Debug for CredentialSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialSlot")
            .field("signed_in", &self.is_signed_in())
            .finish()
    }
}

impl CredentialProvider for CredentialSlot {
    fn bearer_token(&self) -> Option<Arc<SecretString>> {
        self.token.load_full()
    }
}

impl SignIn {
    /// Stores a token for subsequent requests. Blank tokens clear the slot.
    pub fn sign_in(&self, token: SecretString) {
        if token.expose_secret().trim().is_empty() {
            debug!("blank token supplied, clearing credential slot");
            self.token.store(None);
            return;
        }
        self.token.store(Some(Arc::new(token)));
        debug!("credential slot updated");
    }

    /// Clears the stored token.
    pub fn sign_out(&self) {
        self.token.store(None);
        debug!("credential slot cleared");
    }
}

/// Provider that never supplies a token.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

impl CredentialProvider for Anonymous {
    fn bearer_token(&self) -> Option<Arc<SecretString>> {
        None
    }
}
