//! Test fixtures and config factories
//!
//! All factories build real configurations and registries, not mocks.

use signet_rbac::config::{PermissionConfig, RoleConfig};
use signet_rbac::{Config, RbacConfig, RbacSystem, Role};

/// The YAML resource shipped with the crate
pub const SHIPPED_CONFIG: &str = include_str!("../../config/rbac.yaml");

/// Factory for creating test configurations
pub struct ConfigFactory;

impl ConfigFactory {
    /// Built-in table
    pub fn builtin() -> RbacConfig {
        RbacConfig::default()
    }

    /// Table parsed from the shipped YAML resource
    pub fn shipped() -> Config {
        Config::from_yaml_str(SHIPPED_CONFIG).unwrap()
    }

    /// Smallest valid table: one permission per role
    pub fn minimal() -> RbacConfig {
        let permission = |id: &str| PermissionConfig {
            id: id.to_string(),
            name: String::new(),
            description: String::new(),
            category: "general".to_string(),
        };
        let role = |id: Role, level: u8, perm: &str| RoleConfig {
            id,
            name: String::new(),
            description: String::new(),
            level,
            permissions: vec![perm.to_string()],
            limits: Default::default(),
            features: vec![],
        };

        RbacConfig {
            permissions: vec![permission("read"), permission("write"), permission("admin")],
            roles: vec![
                role(Role::RegularUser, 10, "read"),
                role(Role::TeamAdmin, 20, "write"),
                role(Role::SuperAdmin, 30, "admin"),
            ],
            resources: [("editor".to_string(), vec!["write".to_string()])]
                .into_iter()
                .collect(),
        }
    }

    /// Registry built from a config, panicking on invalid input
    pub fn registry(config: &RbacConfig) -> RbacSystem {
        RbacSystem::new(config).unwrap()
    }
}
