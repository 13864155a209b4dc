//! Common test utilities for signet-rbac
//!
//! - Config factories and the shipped YAML resource
//! - Registry assertions

pub mod fixtures;

// Re-export commonly used items
pub use assertions::RegistryAssertions;
pub use fixtures::ConfigFactory;
