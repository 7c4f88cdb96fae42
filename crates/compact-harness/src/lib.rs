//! Fixed-scenario harness for the sorted-run compactor.
//!
//! Runs the known compaction cases, tallies every check in a [`UnitTest`]
//! accumulator and renders the one-line summary printed by the binary.

pub mod config;
pub mod scenarios;

pub use config::HarnessConfig;
pub use scenarios::{Scenario, SCENARIOS};
pub use unit_test::UnitTest;

/// Run every scenario under the configured suite name.
pub fn run_suite(config: &HarnessConfig) -> UnitTest {
    let mut test = UnitTest::new(config.name.clone());
    scenarios::run_all(&mut test);
    test
}
