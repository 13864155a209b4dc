//! Authorization
//!
//! The process-wide registry and free functions over it. The registry is
//! built from the built-in table on first use and never changes afterwards.

pub mod rbac;

use once_cell::sync::Lazy;
use tracing::debug;

use rbac::{AsRole, FeatureLimit, RbacSystem};

static REGISTRY: Lazy<RbacSystem> = Lazy::new(|| {
    debug!("Building process-wide RBAC registry");
    RbacSystem::builtin()
});

/// Process-wide registry built from the built-in table
pub fn registry() -> &'static RbacSystem {
    &REGISTRY
}

/// Whether a role holds a permission
pub fn check_permission<R: AsRole>(role: R, permission: &str) -> bool {
    registry().check_permission(role, permission)
}

/// Whether `user_role` is at least as privileged as `required_role`
pub fn has_role<U: AsRole, R: AsRole>(user_role: U, required_role: R) -> bool {
    registry().has_role(user_role, required_role)
}

/// Whether a role may access a resource
pub fn can_access<R: AsRole>(role: R, resource: &str) -> bool {
    registry().can_access(role, resource)
}

/// Configured limit, or zero for an unknown role or key
pub fn get_feature_limit<R: AsRole>(role: R, limit_key: &str) -> FeatureLimit {
    registry().get_feature_limit(role, limit_key)
}

/// Whether a role has a feature flag
pub fn has_feature<R: AsRole>(role: R, feature: &str) -> bool {
    registry().has_feature(role, feature)
}
