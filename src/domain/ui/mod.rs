// SPDX-License-Identifier: MPL-2.0
//! UI domain types.
//!
//! Value objects for gallery settings that are independent of any
//! rendering surface.

pub mod newtypes;

// Re-export commonly used types
pub use newtypes::{FetchTimeout, PageSize};
