// SPDX-License-Identifier: MIT OR Apache-2.0
//! Name generation for unnamed coordinators.
//!
//! Unnamed coordinators are called `<prefix>-<n>`. By default `n` comes from
//! [`GlobalCounter`], a process-wide counter that starts at 1 when the process
//! starts and only ever increases. Tests and embedders that need exact names
//! inject their own [`NameSource`] such as [`SequentialNames`].

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_GLOBAL_INDEX: AtomicU64 = AtomicU64::new(1);

/// Source of indices for generated names
pub trait NameSource {
    /// Take the next index; every call returns a value no earlier call returned
    fn next_index(&self) -> u64;
}

/// The process-wide counter shared by every coordinator
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalCounter;

impl NameSource for GlobalCounter {
    fn next_index(&self) -> u64 {
        NEXT_GLOBAL_INDEX.fetch_add(1, Ordering::Relaxed)
    }
}

/// An independent counter, for deterministic naming
#[derive(Debug)]
pub struct SequentialNames {
    next: AtomicU64,
}

impl SequentialNames {
    /// Create a counter whose first index is `first`
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialNames {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl NameSource for SequentialNames {
    fn next_index(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

/// Format a generated name
pub fn generated_name(prefix: &str, index: u64) -> String {
    format!("{prefix}-{index}")
}
