//! Role-Based Access Control (RBAC) system
//!
//! An immutable registry answering access questions for the three platform
//! roles. Every query is total: unknown roles, permissions, resources and
//! limit keys resolve to a denial or a zero limit.

mod helpers;
mod limits;
mod permissions;
mod resources;
mod roles;
mod system;
mod types;

// Re-export public types and structs
pub use roles::AsRole;
pub use system::RbacSystem;
pub use types::{DenialReason, FeatureLimit, Permission, PermissionCheck, Role, RoleDefinition};
