//! Helper methods for RBAC lookups
//!
//! Lookups return `Option`; the public query methods map `None` to a denial.

use super::roles::AsRole;
use super::system::RbacSystem;
use super::types::{Role, RoleDefinition};

pub(super) trait RbacHelpers {
    /// Resolve a caller-supplied role to its effective definition
    fn resolve<R: AsRole>(&self, role: &R) -> Option<&RoleDefinition>;

    /// Level of a role, if it is known to this registry
    fn level_of(&self, role: Role) -> Option<u8>;

    /// Permissions that unlock a resource
    fn resource_rule(&self, resource: &str) -> Option<&[String]>;
}

impl RbacHelpers for RbacSystem {
    fn resolve<R: AsRole>(&self, role: &R) -> Option<&RoleDefinition> {
        role.as_role().and_then(|r| self.roles.get(&r))
    }

    fn level_of(&self, role: Role) -> Option<u8> {
        self.roles.get(&role).map(|def| def.level)
    }

    fn resource_rule(&self, resource: &str) -> Option<&[String]> {
        self.resources
            .get(resource)
            .map(Vec::as_slice)
            .filter(|perms| !perms.is_empty())
    }
}
