// SPDX-License-Identifier: MPL-2.0
//! Toast identifiers.
//!
//! Ids are decimal strings drawn from a single process-wide counter. The
//! counter wraps at [`MAX_SAFE_INTEGER`]; collisions after a wrap are not
//! detected, and the sequence restarts with every process.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Largest integer an IEEE-754 double represents exactly (2^53 - 1).
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

static GENERATOR: IdGenerator = IdGenerator::new();

/// Unique identifier of a toast.
///
/// An empty id is never produced by the generator; it is what the
/// free-function façade hands back when no toast context is installed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ToastId(String);

impl ToastId {
    /// The id returned when a toast could not be created.
    #[must_use]
    pub fn empty() -> Self {
        Self(String::new())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ToastId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ToastId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Monotonic id counter, incremented modulo [`MAX_SAFE_INTEGER`].
#[derive(Debug)]
pub struct IdGenerator {
    counter: AtomicU64,
}

impl IdGenerator {
    /// Creates a generator whose first id is `"1"`.
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    /// Creates a generator that continues after `value`.
    #[must_use]
    pub const fn starting_at(value: u64) -> Self {
        Self {
            counter: AtomicU64::new(value % MAX_SAFE_INTEGER),
        }
    }

    /// Advances the counter and returns the new value as an id.
    pub fn next_id(&self) -> ToastId {
        let previous = self
            .counter
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |count| {
                Some(advance(count))
            })
            .unwrap_or_else(|count| count);
        ToastId(advance(previous).to_string())
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

const fn advance(count: u64) -> u64 {
    (count + 1) % MAX_SAFE_INTEGER
}

/// Draws the next id from the process-wide generator.
pub fn next_id() -> ToastId {
    GENERATOR.next_id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fresh_generator_starts_at_one() {
        let generator = IdGenerator::new();
        assert_eq!(generator.next_id().as_str(), "1");
        assert_eq!(generator.next_id().as_str(), "2");
    }

    #[test]
    fn counter_wraps_at_max_safe_integer() {
        let generator = IdGenerator::starting_at(MAX_SAFE_INTEGER - 2);
        assert_eq!(
            generator.next_id().as_str(),
            (MAX_SAFE_INTEGER - 1).to_string()
        );
        assert_eq!(generator.next_id().as_str(), "0");
        assert_eq!(generator.next_id().as_str(), "1");
    }

    #[test]
    fn global_ids_are_pairwise_distinct() {
        let ids: HashSet<ToastId> = (0..1_000).map(|_| next_id()).collect();
        assert_eq!(ids.len(), 1_000);
    }

    #[test]
    fn generated_ids_are_never_empty() {
        assert!(!next_id().is_empty());
        assert!(ToastId::empty().is_empty());
    }

    #[test]
    fn display_matches_inner_string() {
        let id = ToastId::from("42");
        assert_eq!(id.to_string(), "42");
    }
}
