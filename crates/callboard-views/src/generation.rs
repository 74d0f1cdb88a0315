// SPDX-FileCopyrightText: 2026 Callboard Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Stale-completion guard for asynchronous view loads.
//!
//! Every load takes a [`Generation`] from the view's [`GenerationGuard`]
//! before awaiting. When the result arrives it is applied only if no newer
//! load has been started in the meantime.

/// Token identifying one load cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct GenerationGuard {
    current: u64,
}

impl GenerationGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new load cycle, invalidating every earlier token.
    pub fn advance(&mut self) -> Generation {
        self.current = self.current.wrapping_add(1);
        Generation(self.current)
    }

    /// Whether `generation` still belongs to the latest load cycle.
    pub fn is_current(&self, generation: Generation) -> bool {
        generation.0 == self.current
    }
}

/// What happened to the result of a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum LoadOutcome {
    /// Fresh data was applied to the view.
    Applied,
    /// A failure was applied to the view.
    Failed,
    /// A newer load superseded this one; its result was dropped.
    Discarded,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advancing_invalidates_older_tokens() {
        let mut guard = GenerationGuard::new();
        let first = guard.advance();
        assert!(guard.is_current(first));

        let second = guard.advance();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
        assert!(second.value() > first.value());
    }
}
