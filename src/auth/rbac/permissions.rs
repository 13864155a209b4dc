//! Permission checking methods

use crate::utils::logging::{DecisionKind, SecurityLogger};

use super::helpers::RbacHelpers;
use super::roles::AsRole;
use super::system::RbacSystem;
use super::types::{DenialReason, PermissionCheck, Role};

impl RbacSystem {
    /// Check whether a role holds a permission
    pub fn check_permission<R: AsRole>(&self, role: R, permission: &str) -> bool {
        self.check_permission_detailed(role, permission).granted
    }

    /// Detailed permission check
    pub fn check_permission_detailed<R: AsRole>(&self, role: R, permission: &str) -> PermissionCheck {
        let check = self.evaluate(&role, permission);

        let kind = match check.denial_reason {
            None => DecisionKind::Granted,
            Some(DenialReason::MissingPermission) => DecisionKind::Denied,
            Some(_) => DecisionKind::Unresolved,
        };
        SecurityLogger::log_authz_event("check_permission", role.label(), permission, kind);

        check
    }

    fn evaluate<R: AsRole>(&self, role: &R, permission: &str) -> PermissionCheck {
        let Some(definition) = self.resolve(role) else {
            return PermissionCheck::denied(DenialReason::UnknownRole);
        };

        if definition.permissions.contains(permission) {
            PermissionCheck::granted(definition.role)
        } else if permission.is_empty() || !self.permissions.contains_key(permission) {
            PermissionCheck::denied(DenialReason::UnknownPermission)
        } else {
            PermissionCheck::denied(DenialReason::MissingPermission)
        }
    }

    /// Check if a role holds every listed permission.
    ///
    /// An empty list is denied.
    pub fn check_all_permissions<R: AsRole>(&self, role: R, required: &[&str]) -> bool {
        !required.is_empty() && required.iter().all(|p| self.check_permission(&role, p))
    }

    /// Check if a role holds any of the listed permissions
    pub fn check_any_permission<R: AsRole>(&self, role: R, required: &[&str]) -> bool {
        required.iter().any(|p| self.check_permission(&role, p))
    }

    /// Effective permission ids of a role, sorted
    pub fn role_permissions<R: AsRole>(&self, role: R) -> Vec<&str> {
        let mut permissions: Vec<&str> = self
            .resolve(&role)
            .map(|def| def.permissions.iter().map(String::as_str).collect())
            .unwrap_or_default();
        permissions.sort_unstable();
        permissions
    }

    /// Lowest role that holds a permission
    pub fn minimum_role_for(&self, permission: &str) -> Option<Role> {
        self.list_roles()
            .into_iter()
            .find(|def| def.permissions.contains(permission))
            .map(|def| def.role)
    }
}
