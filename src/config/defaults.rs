// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Feed**: Pagination cursor and page size bounds
//! - **Network**: HTTP client behavior
//! - **Loading**: Spinner animation and stuck-load detection

// ==========================================================================
// Feed Defaults
// ==========================================================================

/// First logical page of the feed. The cursor never goes below this.
pub const FIRST_PAGE: u32 = 1;

/// Default number of images requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Minimum allowed page size.
pub const MIN_PAGE_SIZE: u32 = 1;

/// Maximum allowed page size (the public API caps `limit` well below this).
pub const MAX_PAGE_SIZE: u32 = 25;

// ==========================================================================
// Network Defaults
// ==========================================================================

/// Default endpoint for image search.
pub const DEFAULT_API_URL: &str = "https://api.thecatapi.com/v1/images/search";

/// Sort order requested from the endpoint.
pub const API_SORT_ORDER: &str = "Desc";

/// User agent sent with every request.
pub const HTTP_USER_AGENT: &str = "CatLens/0.1.0";

/// Maximum number of redirects followed per request.
pub const HTTP_MAX_REDIRECTS: usize = 10;

/// Hard timeout for a single request, in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// ==========================================================================
// Loading Defaults
// ==========================================================================

/// Interval between spinner animation ticks, in milliseconds.
pub const SPINNER_TICK_MILLIS: u64 = 100;

/// How long a page fetch may stay outstanding before it is reported as
/// taking too long, in seconds. Must stay below the request timeout so the
/// message appears while the request can still settle.
pub const LOADING_TIMEOUT_SECS: u64 = 10;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Feed validation
    assert!(FIRST_PAGE == 1);
    assert!(MIN_PAGE_SIZE > 0);
    assert!(MAX_PAGE_SIZE >= MIN_PAGE_SIZE);
    assert!(DEFAULT_PAGE_SIZE >= MIN_PAGE_SIZE);
    assert!(DEFAULT_PAGE_SIZE <= MAX_PAGE_SIZE);

    // Network validation
    assert!(HTTP_MAX_REDIRECTS > 0);
    assert!(HTTP_TIMEOUT_SECS > 0);

    // Loading validation
    assert!(SPINNER_TICK_MILLIS > 0);
    assert!(LOADING_TIMEOUT_SECS > 0);
    assert!(LOADING_TIMEOUT_SECS < HTTP_TIMEOUT_SECS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_defaults_are_valid() {
        assert_eq!(DEFAULT_PAGE_SIZE, 5);
        assert!(DEFAULT_PAGE_SIZE >= MIN_PAGE_SIZE);
        assert!(DEFAULT_PAGE_SIZE <= MAX_PAGE_SIZE);
    }

    #[test]
    fn loading_timeout_fires_before_request_timeout() {
        assert!(LOADING_TIMEOUT_SECS < HTTP_TIMEOUT_SECS);
    }

    #[test]
    fn api_url_is_https() {
        assert!(DEFAULT_API_URL.starts_with("https://"));
    }
}
