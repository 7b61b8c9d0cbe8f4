//! Workspace-level integration tests.
//!
//! The golden-file tests live under `tests/` and exercise every mode of
//! `bnfib-core` against `tests/testdata/fibonacci_golden.json`.
