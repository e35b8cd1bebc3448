//! Unit tests for dropzone.

mod config_tests;
mod perf_tests;
mod snapshot_tests;
mod watch_tests;
