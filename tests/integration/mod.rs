//! Integration tests for the connector operations.

pub mod concurrency;
pub mod property_tests;
pub mod strict_mode;
