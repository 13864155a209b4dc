//! Integration tests for signet-rbac
//!
//! These tests go through the public API only.

pub mod config_tests;
pub mod registry_tests;
