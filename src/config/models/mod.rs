//! Configuration data models

pub mod rbac;

pub use rbac::*;
