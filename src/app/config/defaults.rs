// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and runtime limits.
//!
//! # Categories
//!
//! - **Gallery**: Startup tab and filter memory
//! - **Images**: Remote fetch limits and cache size
//! - **Notifications**: Toast lifetimes

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Whether the last event filter is restored on the next launch.
pub const DEFAULT_REMEMBER_FILTER: bool = true;

// ==========================================================================
// Image Defaults
// ==========================================================================

/// Number of decoded images kept in memory.
pub const DEFAULT_IMAGE_CACHE_CAPACITY: usize = 64;

/// Timeout for a single remote image request (in seconds).
pub const IMAGE_FETCH_TIMEOUT_SECS: u64 = 15;

/// Largest image payload accepted, local or remote (20 MiB).
pub const MAX_IMAGE_BYTES: u64 = 20 * 1024 * 1024;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Auto-dismiss delay for warning toasts (in seconds).
pub const TOAST_WARNING_SECS: u64 = 5;

/// Maximum number of toasts on screen at once.
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_stay_long_enough_to_read() {
        assert!(TOAST_WARNING_SECS >= 3);
    }

    #[test]
    fn image_limits_are_positive() {
        assert!(DEFAULT_IMAGE_CACHE_CAPACITY > 0);
        assert!(IMAGE_FETCH_TIMEOUT_SECS > 0);
        assert!(MAX_IMAGE_BYTES >= 1024 * 1024);
    }
}
