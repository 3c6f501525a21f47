//! lendscore-tests: shared fixtures for end-to-end and property tests.

pub mod helpers;
