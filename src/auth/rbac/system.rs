//! RBAC system core functionality

use crate::config::{RbacConfig, RoleConfig, Validate};
use crate::utils::error::{RbacError, Result};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::{debug, error, info};

use super::types::{Permission, Role, RoleDefinition};

/// Immutable registry of roles, permissions and resource rules
#[derive(Debug, Clone, Default)]
pub struct RbacSystem {
    /// Effective role definitions
    pub(super) roles: HashMap<Role, RoleDefinition>,
    /// Permission catalog
    pub(super) permissions: BTreeMap<String, Permission>,
    /// Resource access rules (any listed permission unlocks the resource)
    pub(super) resources: BTreeMap<String, Vec<String>>,
}

impl RbacSystem {
    /// Create a new RBAC system
    pub fn new(config: &RbacConfig) -> Result<Self> {
        info!("Initializing RBAC system");

        config
            .validate()
            .map_err(|e| RbacError::Validation(format!("RBAC config error: {}", e)))?;

        let permissions = Self::build_permissions(config);
        let roles = Self::fold_roles(config);

        let rbac = Self {
            roles,
            permissions,
            resources: config.resources.clone(),
        };

        info!(
            roles = rbac.roles.len(),
            permissions = rbac.permissions.len(),
            resources = rbac.resources.len(),
            "RBAC system initialized successfully"
        );
        Ok(rbac)
    }

    /// Registry built from the built-in table.
    ///
    /// Falls back to an empty registry, which denies everything, if the
    /// built-in table fails validation.
    pub fn builtin() -> Self {
        Self::new(&RbacConfig::default()).unwrap_or_else(|e| {
            error!("Built-in RBAC table rejected, denying all access: {}", e);
            Self::empty()
        })
    }

    /// Registry with no roles; every query is denied
    pub fn empty() -> Self {
        Self::default()
    }

    fn build_permissions(config: &RbacConfig) -> BTreeMap<String, Permission> {
        debug!("Initializing permission catalog");

        config
            .permissions
            .iter()
            .map(|p| {
                let permission = Permission {
                    id: p.id.clone(),
                    name: p.name.clone(),
                    description: p.description.clone(),
                    category: p.category.clone(),
                };
                (p.id.clone(), permission)
            })
            .collect()
    }

    /// Fold role deltas in level order so each role carries everything the
    /// roles below it carry.
    fn fold_roles(config: &RbacConfig) -> HashMap<Role, RoleDefinition> {
        debug!("Folding role deltas");

        let mut ordered: Vec<&RoleConfig> = config.roles.iter().collect();
        ordered.sort_by_key(|r| r.level);

        let mut roles = HashMap::new();
        let mut permissions: HashSet<String> = HashSet::new();
        let mut features: HashSet<String> = HashSet::new();
        let mut limits = HashMap::new();

        for delta in ordered {
            permissions.extend(delta.permissions.iter().cloned());
            features.extend(delta.features.iter().cloned());
            limits.extend(delta.limits.iter().map(|(k, v)| (k.clone(), v.clone())));

            debug!(
                role = %delta.id,
                level = delta.level,
                permissions = permissions.len(),
                "Role folded"
            );

            roles.insert(
                delta.id,
                RoleDefinition {
                    role: delta.id,
                    name: delta.name.clone(),
                    description: delta.description.clone(),
                    level: delta.level,
                    permissions: permissions.clone(),
                    limits: limits.clone(),
                    features: features.clone(),
                },
            );
        }

        roles
    }

    /// List all roles, least privileged first
    pub fn list_roles(&self) -> Vec<&RoleDefinition> {
        let mut roles: Vec<&RoleDefinition> = self.roles.values().collect();
        roles.sort_by_key(|r| r.level);
        roles
    }

    /// List all permissions, ordered by id
    pub fn list_permissions(&self) -> Vec<&Permission> {
        self.permissions.values().collect()
    }

    /// Permissions in a display category, ordered by id
    pub fn permissions_by_category(&self, category: &str) -> Vec<&Permission> {
        self.permissions
            .values()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Get permission by id
    pub fn get_permission(&self, permission_id: &str) -> Option<&Permission> {
        self.permissions.get(permission_id)
    }
}
