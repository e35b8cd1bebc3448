//! Performance instrumentation for the interaction hot paths.
//!
//! Hit testing costs registry size × hit-stack depth per call and runs on
//! every reduced pointer event, so it is the one place worth measuring.
//!
//! ## Features
//!
//! - **Scoped timers**: RAII-style timing for reducers and publishing
//! - **Hit test statistics**: items compared and elapsed time per hit test
//! - **Conditional compilation**: `profile_scope!` is zero-cost unless the
//!   `profiling` feature is enabled
//!
//! ## Usage
//! ```ignore
//! fn pointer_down(&mut self) {
//!     profile_scope!("pointer_down");
//!     // ... reduction ...
//! }
//! ```

use crate::constants::{HIT_TEST_BOTTLENECK_ITEMS, HIT_TEST_EMA_ALPHA};
use std::time::Instant;
#[cfg(feature = "profiling")]
use tracing::trace;
use tracing::warn;

// ============================================================================
// Profiling Macros (zero-cost when disabled)
// ============================================================================

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use crate::profile_scope;

// ============================================================================
// Scoped Timer
// ============================================================================

/// A scoped timer that reports its duration on drop when over threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Create a timer for profiling (low threshold, 0.1ms).
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 0.1)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms <= self.threshold_ms {
            return;
        }

        #[cfg(feature = "profiling")]
        trace!("[PERF] {}: {:.3}ms", self.name, elapsed_ms);

        #[cfg(not(feature = "profiling"))]
        warn!(
            operation = self.name,
            elapsed_ms = format!("{:.3}", elapsed_ms),
            threshold_ms = format!("{:.3}", self.threshold_ms),
            "Slow operation"
        );
    }
}

// ============================================================================
// Timing Utilities
// ============================================================================

/// Measure execution time of a closure and return both the result and elapsed time.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    (result, elapsed_ms)
}

// ============================================================================
// Hit Testing Statistics
// ============================================================================

/// Running statistics over hit tests performed by one manager.
#[derive(Debug, Clone, Default)]
pub struct HitTestProfiler {
    /// Registry entries compared in the last hit test
    pub items_tested: usize,
    /// Time taken by the last hit test
    pub last_test_ms: f64,
    /// Exponential moving average of entries compared
    avg_items: f64,
    /// Total hit tests performed
    test_count: u64,
    /// Hit tests over the slow threshold
    slow_count: u64,
}

impl HitTestProfiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a hit test. Logs a warning if it took longer than `slow_threshold_ms`.
    pub fn record(&mut self, items_tested: usize, elapsed_ms: f64, slow_threshold_ms: f64) {
        self.items_tested = items_tested;
        self.last_test_ms = elapsed_ms;
        self.avg_items = if self.test_count == 0 {
            items_tested as f64
        } else {
            self.avg_items * (1.0 - HIT_TEST_EMA_ALPHA) + items_tested as f64 * HIT_TEST_EMA_ALPHA
        };
        self.test_count += 1;

        if elapsed_ms > slow_threshold_ms {
            self.slow_count += 1;
            warn!(
                items_tested,
                elapsed_ms = format!("{:.3}", elapsed_ms),
                threshold_ms = format!("{:.3}", slow_threshold_ms),
                "Slow hit test"
            );
        }
    }

    pub fn test_count(&self) -> u64 {
        self.test_count
    }

    pub fn slow_count(&self) -> u64 {
        self.slow_count
    }

    pub fn average_items(&self) -> f64 {
        self.avg_items
    }

    /// Hit testing is a bottleneck when it scans many entries and is slow.
    pub fn is_bottleneck(&self, slow_threshold_ms: f64) -> bool {
        self.avg_items > HIT_TEST_BOTTLENECK_ITEMS && self.last_test_ms > slow_threshold_ms
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
