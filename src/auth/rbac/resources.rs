//! Resource-level access checks

use crate::utils::logging::{DecisionKind, SecurityLogger};

use super::helpers::RbacHelpers;
use super::roles::AsRole;
use super::system::RbacSystem;

impl RbacSystem {
    /// Whether a role may access a resource.
    ///
    /// Holding any one of the resource's listed permissions is enough.
    pub fn can_access<R: AsRole>(&self, role: R, resource: &str) -> bool {
        let decision = self
            .resolve(&role)
            .zip(self.resource_rule(resource))
            .map(|(def, rule)| rule.iter().any(|p| def.permissions.contains(p)));

        let kind = match decision {
            Some(true) => DecisionKind::Granted,
            Some(false) => DecisionKind::Denied,
            None => DecisionKind::Unresolved,
        };
        SecurityLogger::log_authz_event("can_access", role.label(), resource, kind);

        decision.unwrap_or(false)
    }

    /// Resources a role can access, sorted by name
    pub fn accessible_resources<R: AsRole>(&self, role: R) -> Vec<&str> {
        let Some(definition) = self.resolve(&role) else {
            return Vec::new();
        };

        self.resources
            .iter()
            .filter(|(_, rule)| rule.iter().any(|p| definition.permissions.contains(p)))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// All known resource names, sorted
    pub fn list_resources(&self) -> Vec<&str> {
        self.resources.keys().map(String::as_str).collect()
    }

    /// Permissions that unlock a resource
    pub fn resource_permissions(&self, resource: &str) -> Option<&[String]> {
        self.resource_rule(resource)
    }
}
