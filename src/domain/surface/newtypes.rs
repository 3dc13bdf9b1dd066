// SPDX-License-Identifier: MPL-2.0
//! Opaque identifier newtypes.

use std::fmt;

// =============================================================================
// SurfaceId
// =============================================================================

/// Identifies one presentation surface inside a host tree.
///
/// The value is assigned by the host; the core only compares and stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(u64);

impl SurfaceId {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface#{}", self.0)
    }
}

// =============================================================================
// TransitionId
// =============================================================================

/// Token for an in-flight present or dismiss transition.
///
/// Issued by the controller when it asks the host to present or dismiss,
/// and handed back by the host exactly once when the transition finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionId(u64);

impl TransitionId {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the identifier issued after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for TransitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transition#{}", self.0)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_id_round_trips_value() {
        assert_eq!(SurfaceId::new(7).value(), 7);
    }

    #[test]
    fn surface_id_displays_with_prefix() {
        assert_eq!(SurfaceId::new(3).to_string(), "surface#3");
    }

    #[test]
    fn transition_ids_advance() {
        let first = TransitionId::new(0);
        assert_eq!(first.next(), TransitionId::new(1));
        assert_ne!(first, first.next());
    }

    #[test]
    fn transition_id_wraps_instead_of_overflowing() {
        assert_eq!(TransitionId::new(u64::MAX).next(), TransitionId::new(0));
    }
}
