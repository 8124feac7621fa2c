//! # silk-bench
//!
//! Benchmark suite for the silk cloth grid.
//!
//! Provides three scenarios, a frame clock that mimics a render loop's
//! timing, metric collection, and CSV export for regression tracking.

pub mod clock;
pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use clock::FrameClock;
pub use metrics::BenchmarkMetrics;
pub use runner::BenchmarkRunner;
pub use scenarios::{Scenario, ScenarioKind, StepTiming};
