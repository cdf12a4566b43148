//! Integration test driver for `tests/integration/` submodules.
//!
//! Each `mod` below maps to a file that exercises the classifier through
//! its public API, one cycle at a time, the way the control loop calls it.

mod drive;
mod scenario_tests;
