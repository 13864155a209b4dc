//! # signet-rbac
//!
//! Role-based access control for a document e-signature platform.
//!
//! A static registry maps each role (`regular_user`, `team_admin`,
//! `super_admin`) to a permission set, resource limits and feature flags.
//! Queries never fail: an unknown role, permission, resource or limit key
//! resolves to "denied" or a zero limit.
//!
//! ## Features
//!
//! - **Permission checks**: single, all-of and any-of
//! - **Role hierarchy**: "at least this privileged" comparisons by level
//! - **Resource rules**: a resource is reachable through any of its permissions
//! - **Feature limits**: numeric or textual quotas with unlimited sentinels
//! - **Configurable**: built-in table, or a validated YAML resource
//!
//! ## Quick Start
//!
//! ```rust
//! use signet_rbac::{Role, can_access, check_permission, get_feature_limit, has_role};
//!
//! assert!(check_permission(Role::TeamAdmin, "team_management"));
//! assert!(!check_permission("regular_user", "team_management"));
//! assert!(has_role(Role::SuperAdmin, Role::TeamAdmin));
//! assert!(can_access("team_admin", "team-management"));
//! assert_eq!(get_feature_limit(Role::RegularUser, "signatures"), 3);
//! ```
//!
//! ## Custom Table
//!
//! ```rust,no_run
//! use signet_rbac::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/rbac.yaml").await?;
//!     let rbac = config.build_registry()?;
//!     assert!(rbac.can_access("super_admin", "audit-logs"));
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod auth;
pub mod config;
pub mod utils;

// Re-export main types
pub use auth::rbac::{
    AsRole, DenialReason, FeatureLimit, Permission, PermissionCheck, RbacSystem, Role,
    RoleDefinition,
};
pub use auth::{can_access, check_permission, get_feature_limit, has_feature, has_role, registry};
pub use config::{Config, RbacConfig};
pub use utils::error::{RbacError, Result};
