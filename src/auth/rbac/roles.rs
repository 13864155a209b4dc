//! Role resolution and hierarchy checks

use crate::utils::logging::{DecisionKind, SecurityLogger};

use super::helpers::RbacHelpers;
use super::system::RbacSystem;
use super::types::{Role, RoleDefinition};

/// Anything a caller may hand in as "the user's role".
///
/// Strings resolve through `Role::from_str`; anything that does not resolve
/// is treated as an unrecognized role and denied by every query.
pub trait AsRole {
    fn as_role(&self) -> Option<Role>;

    /// Text used when logging the decision
    fn label(&self) -> &str;
}

impl AsRole for Role {
    fn as_role(&self) -> Option<Role> {
        Some(*self)
    }

    fn label(&self) -> &str {
        self.as_str()
    }
}

impl AsRole for Option<Role> {
    fn as_role(&self) -> Option<Role> {
        *self
    }

    fn label(&self) -> &str {
        match self {
            Some(role) => role.as_str(),
            None => "<none>",
        }
    }
}

impl AsRole for str {
    fn as_role(&self) -> Option<Role> {
        self.parse().ok()
    }

    fn label(&self) -> &str {
        self
    }
}

impl AsRole for String {
    fn as_role(&self) -> Option<Role> {
        self.as_str().as_role()
    }

    fn label(&self) -> &str {
        self
    }
}

impl<T: AsRole + ?Sized> AsRole for &T {
    fn as_role(&self) -> Option<Role> {
        (**self).as_role()
    }

    fn label(&self) -> &str {
        (**self).label()
    }
}

impl RbacSystem {
    /// Get the effective definition of a role
    pub fn get_role<R: AsRole>(&self, role: R) -> Option<&RoleDefinition> {
        self.resolve(&role)
    }

    /// Whether `user_role` is at least as privileged as `required_role`
    pub fn has_role<U: AsRole, R: AsRole>(&self, user_role: U, required_role: R) -> bool {
        let levels = user_role
            .as_role()
            .and_then(|r| self.level_of(r))
            .zip(required_role.as_role().and_then(|r| self.level_of(r)));

        let (granted, kind) = match levels {
            Some((have, need)) if have >= need => (true, DecisionKind::Granted),
            Some(_) => (false, DecisionKind::Denied),
            None => (false, DecisionKind::Unresolved),
        };

        SecurityLogger::log_authz_event("has_role", user_role.label(), required_role.label(), kind);
        granted
    }
}
