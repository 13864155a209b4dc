//! RBAC configuration validators

use super::trait_def::Validate;
use crate::auth::rbac::Role;
use crate::config::models::*;
use std::collections::HashSet;
use tracing::debug;

impl Validate for PermissionConfig {
    fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Permission id cannot be empty".to_string());
        }

        if self.id.trim() != self.id {
            return Err(format!(
                "Permission id {:?} must not have surrounding whitespace",
                self.id
            ));
        }

        Ok(())
    }
}

impl Validate for RoleConfig {
    fn validate(&self) -> Result<(), String> {
        if self.permissions.iter().any(|p| p.is_empty()) {
            return Err(format!("Role {} lists an empty permission", self.id));
        }

        if self.features.iter().any(|f| f.is_empty()) {
            return Err(format!("Role {} lists an empty feature", self.id));
        }

        if self.limits.keys().any(|k| k.is_empty()) {
            return Err(format!("Role {} has a limit with an empty key", self.id));
        }

        Ok(())
    }
}

impl Validate for RbacConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating RBAC configuration");

        let mut catalog = HashSet::new();
        for permission in &self.permissions {
            permission.validate()?;
            if !catalog.insert(permission.id.as_str()) {
                return Err(format!("Duplicate permission id: {}", permission.id));
            }
        }

        let mut seen = HashSet::new();
        for role in &self.roles {
            role.validate()?;
            if !seen.insert(role.id) {
                return Err(format!("Role {} is defined more than once", role.id));
            }
            if let Some(unknown) = role
                .permissions
                .iter()
                .find(|p| !catalog.contains(p.as_str()))
            {
                return Err(format!(
                    "Role {} references unknown permission: {}",
                    role.id, unknown
                ));
            }
        }

        // Every role present, levels strictly increasing with privilege
        let mut previous: Option<(Role, u8)> = None;
        for role in Role::ALL {
            let config = self
                .role(role)
                .ok_or_else(|| format!("Role {} is not defined", role))?;
            if let Some((lower, level)) = previous {
                if config.level <= level {
                    return Err(format!(
                        "Role {} must have a higher level than {} ({} <= {})",
                        role, lower, config.level, level
                    ));
                }
            }
            previous = Some((role, config.level));
        }

        for (resource, permissions) in &self.resources {
            if resource.trim().is_empty() {
                return Err("Resource name cannot be empty".to_string());
            }
            if permissions.is_empty() {
                return Err(format!("Resource {} must list at least one permission", resource));
            }
            if let Some(unknown) = permissions.iter().find(|p| !catalog.contains(p.as_str())) {
                return Err(format!(
                    "Resource {} references unknown permission: {}",
                    resource, unknown
                ));
            }
        }

        Ok(())
    }
}
