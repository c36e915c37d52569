//! Shared constants for end-to-end tests
//!
//! When test data changes (keys, movie IDs, etc.), update only this file.

// ============================================================================
// API Keys
// ============================================================================

/// Key accepted by every test server
pub const TEST_API_KEY: &str = "test-service-key";

/// Owner of the test key
pub const TEST_API_KEY_OWNER: &str = "Test Suite";

// ============================================================================
// Test Data IDs
// ============================================================================

/// "The Test Movie": EN (two revisions), FR, and an invalid DE row
pub const MOVIE_1_ID: i32 = 1;

/// "Second Feature": a single EN row, most watched
pub const MOVIE_2_ID: i32 = 2;

/// Only invalid metadata rows
pub const MOVIE_3_ID: i32 = 3;

/// Appears in stats but has no metadata at all
pub const MOVIE_WITHOUT_METADATA_ID: i32 = 99;

/// Title of the latest EN revision of movie 1
pub const MOVIE_1_EN_TITLE: &str = "The Test Movie (Remastered)";

/// Title of movie 2
pub const MOVIE_2_TITLE: &str = "Second Feature";

// ============================================================================
// Test Timeouts and Configuration
// ============================================================================

/// Maximum time to wait for server to become ready (milliseconds)
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Timeout for individual HTTP requests (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Polling interval when waiting for server ready (milliseconds)
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;

/// Body of every 400 response
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while processing your request. Please try again and if the problem persists please contact support";
