//! Crate-wide constants.
//!
//! Centralizes default thresholds.

// ============================================================================
// Hit Testing
// ============================================================================

/// Default threshold above which a single hit test is logged as slow
pub const DEFAULT_SLOW_HIT_TEST_MS: f64 = 1.0;

/// Average items compared per hit test above which hit testing is reported as a bottleneck
pub const HIT_TEST_BOTTLENECK_ITEMS: f64 = 100.0;

/// Exponential moving average factor for hit test statistics
pub const HIT_TEST_EMA_ALPHA: f64 = 0.1;

// ============================================================================
// Logging
// ============================================================================

/// Filter directive used when `RUST_LOG` is not set
pub const DEFAULT_LOG_DIRECTIVE: &str = "dropzone=info";
