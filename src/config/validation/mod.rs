//! Configuration validation
//!
//! - `trait_def`: the `Validate` trait
//! - `rbac_validators`: checks for the RBAC table (roles, catalog, resource rules)
//! - `tests`: test suite for the validators

mod rbac_validators;
mod trait_def;

pub use trait_def::Validate;
