//! Unit tests for the task lifecycle engine.
#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "Test code uses indexing after length checks"
)]

mod date_window_tests;
mod support;
