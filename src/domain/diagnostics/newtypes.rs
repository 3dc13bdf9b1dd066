// SPDX-License-Identifier: MPL-2.0
//! Diagnostics newtypes.

// =============================================================================
// Buffer Capacity Bounds
// =============================================================================

/// How many alert lifecycle events the diagnostics ring may hold.
pub mod buffer_capacity_bounds {
    /// Minimum buffer capacity.
    pub const MIN: usize = 16;
    /// Maximum buffer capacity.
    pub const MAX: usize = 4096;
    /// Default buffer capacity.
    pub const DEFAULT: usize = 256;
}

// =============================================================================
// BufferCapacity
// =============================================================================

/// Capacity of the diagnostic event ring, always within
/// [`buffer_capacity_bounds::MIN`]..=[`buffer_capacity_bounds::MAX`].
///
/// Out-of-range values are clamped rather than rejected, so a hand-edited
/// settings file can never disable diagnostics entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(buffer_capacity_bounds::MIN, buffer_capacity_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(buffer_capacity_bounds::DEFAULT)
    }
}

impl From<Option<usize>> for BufferCapacity {
    fn from(value: Option<usize>) -> Self {
        value.map(Self::new).unwrap_or_default()
    }
}

// =============================================================================
// Tests
// =============================================================================
