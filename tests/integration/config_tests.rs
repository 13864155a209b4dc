//! Configuration integration tests
//!
//! Loading the table from disk and rejecting invalid tables.

#[cfg(test)]
mod tests {
    use crate::common::ConfigFactory;
    use crate::common::fixtures::SHIPPED_CONFIG;
    use signet_rbac::{Config, RbacError, RbacSystem, Role};
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// The shipped resource is the built-in table verbatim
    #[test]
    fn test_shipped_config_equals_builtin() {
        assert_eq!(ConfigFactory::shipped(), Config::default());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(SHIPPED_CONFIG.as_bytes()).unwrap();

        let config = Config::from_file(temp_file.path()).await.unwrap();
        let rbac = config.build_registry().unwrap();

        assert!(rbac.can_access(Role::TeamAdmin, "team-management"));
        assert_eq!(rbac.get_feature_limit(Role::RegularUser, "signatures"), 3);
    }

    #[tokio::test]
    async fn test_file_with_invalid_level_rejected() {
        let yaml = SHIPPED_CONFIG.replace("level: 3", "level: 2");
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let result = Config::from_file(temp_file.path()).await;
        match result {
            Err(RbacError::Validation(msg)) => assert!(msg.contains("higher level")),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_typo_in_resource_rule_rejected() {
        let yaml = SHIPPED_CONFIG.replace("billing: [billing_management]", "billing: [biling_management]");
        let result = Config::from_yaml_str(&yaml);
        assert!(matches!(result, Err(RbacError::Validation(_))));
    }

    #[test]
    fn test_unknown_role_in_file_rejected() {
        let yaml = SHIPPED_CONFIG.replace("- id: team_admin", "- id: team_owner");
        let result = Config::from_yaml_str(&yaml);
        assert!(matches!(result, Err(RbacError::Config(_))));
    }

    #[test]
    fn test_registry_rejects_invalid_table_directly() {
        let mut config = ConfigFactory::minimal();
        config.roles[1].level = 10;

        assert!(RbacSystem::new(&config).is_err());
    }
}
