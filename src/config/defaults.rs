// SPDX-License-Identifier: MPL-2.0
//! Default values for the settings file.
//!
//! Bounds are shared with the domain newtypes so the clamping applied when a
//! setting is read always agrees with what is documented here.

use crate::domain::ui::newtypes::{page_bounds, timeout_bounds};

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Photos revealed per "load more" step.
pub const DEFAULT_PAGE_SIZE: usize = page_bounds::DEFAULT;

pub const MIN_PAGE_SIZE: usize = page_bounds::MIN;

pub const MAX_PAGE_SIZE: usize = page_bounds::MAX;

// ==========================================================================
// Source Defaults
// ==========================================================================

/// Document location used when none is given on the command line.
pub const DEFAULT_DOCUMENT: &str = "photos_data.json";

/// HTTP fetch timeout (in seconds).
pub const DEFAULT_TIMEOUT_SECS: u32 = timeout_bounds::DEFAULT;

pub const MIN_TIMEOUT_SECS: u32 = timeout_bounds::MIN;

pub const MAX_TIMEOUT_SECS: u32 = timeout_bounds::MAX;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_PAGE_SIZE > 0);
    assert!(MAX_PAGE_SIZE >= MIN_PAGE_SIZE);
    assert!(DEFAULT_PAGE_SIZE >= MIN_PAGE_SIZE);
    assert!(DEFAULT_PAGE_SIZE <= MAX_PAGE_SIZE);

    assert!(MIN_TIMEOUT_SECS > 0);
    assert!(MAX_TIMEOUT_SECS >= MIN_TIMEOUT_SECS);
    assert!(DEFAULT_TIMEOUT_SECS >= MIN_TIMEOUT_SECS);
    assert!(DEFAULT_TIMEOUT_SECS <= MAX_TIMEOUT_SECS);

    assert!(!DEFAULT_DOCUMENT.is_empty());
};
