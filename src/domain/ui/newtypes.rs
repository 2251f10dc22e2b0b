// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for gallery settings,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Page Size
// =============================================================================

/// Bounds for the number of photos revealed per "load more" step.
pub mod page_bounds {
    /// Minimum page size.
    pub const MIN: usize = 1;
    /// Maximum page size.
    pub const MAX: usize = 500;
    /// Default page size.
    pub const DEFAULT: usize = 20;
}

/// Number of photos revealed per page, guaranteed to be within 1–500.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(usize);

impl PageSize {
    /// Creates a new page size, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(page_bounds::MIN, page_bounds::MAX))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(page_bounds::DEFAULT)
    }
}

// =============================================================================
// Fetch Timeout
// =============================================================================

/// Bounds for the document fetch timeout, in seconds.
pub mod timeout_bounds {
    /// Minimum timeout.
    pub const MIN: u32 = 1;
    /// Maximum timeout.
    pub const MAX: u32 = 300;
    /// Default timeout.
    pub const DEFAULT: u32 = 30;
}

/// Timeout for loading the gallery document over the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTimeout(u32);

impl FetchTimeout {
    /// Creates a new timeout, clamping to valid range.
    #[must_use]
    pub fn new(secs: u32) -> Self {
        Self(secs.clamp(timeout_bounds::MIN, timeout_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the timeout as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }
}

impl Default for FetchTimeout {
    fn default() -> Self {
        Self(timeout_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================
