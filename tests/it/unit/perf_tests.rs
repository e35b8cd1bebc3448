//! Tests for hit test statistics and timing helpers.

use crate::helpers::*;
use dropzone::perf::{HitTestProfiler, ScopedTimer, measure};
use dropzone::{DragDropManager, Item, ManagerConfig, Point};

#[test]
fn test_profiler_averages_items_tested() {
    let mut profiler = HitTestProfiler::new();
    profiler.record(10, 0.01, 1.0);
    assert_eq!(profiler.test_count(), 1);
    assert_eq!(profiler.average_items(), 10.0);

    profiler.record(20, 0.01, 1.0);
    assert_eq!(profiler.items_tested, 20);
    assert!((profiler.average_items() - 11.0).abs() < 1e-9);
    assert_eq!(profiler.slow_count(), 0);
}

#[test]
fn test_profiler_counts_slow_tests() {
    let mut profiler = HitTestProfiler::new();
    profiler.record(500, 5.0, 1.0);
    profiler.record(500, 0.5, 1.0);

    assert_eq!(profiler.slow_count(), 1);
    assert!(!profiler.is_bottleneck(1.0));

    profiler.record(500, 2.0, 1.0);
    assert!(profiler.is_bottleneck(1.0));

    profiler.reset();
    assert_eq!(profiler.test_count(), 0);
    assert!(!profiler.is_bottleneck(1.0));
}

#[test]
fn test_measure_returns_result() {
    let (value, elapsed_ms) = measure(|| 6 * 7);
    assert_eq!(value, 42);
    assert!(elapsed_ms >= 0.0);
}

#[test]
fn test_scoped_timer_reports_name() {
    let timer = ScopedTimer::new("reduce", 1000.0);
    assert_eq!(timer.name(), "reduce");
    assert!(timer.elapsed_ms() >= 0.0);
}

#[test]
fn test_manager_records_hit_tests() {
    let surface = overlapping_surface();
    let mut manager = immediate_manager();

    manager.pointer_down(&surface, Point::new(10.0, 10.0));
    // One draggable and one droppable lookup.
    assert_eq!(manager.hit_test_stats().test_count(), 2);

    manager.pointer_move(&surface, Point::new(11.0, 11.0));
    manager.pointer_up(&surface);
    assert_eq!(manager.hit_test_stats().test_count(), 4);
}

#[test]
fn test_missed_pointer_down_skips_drop_lookup() {
    let surface = overlapping_surface();
    let mut manager = DragDropManager::<Payload>::with_config(ManagerConfig::default());
    manager.register_droppable(Item::new(DROP, "column"));

    manager.pointer_down(&surface, Point::new(10.0, 10.0));
    assert_eq!(manager.hit_test_stats().test_count(), 1);
}
