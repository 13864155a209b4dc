//! Registry integration tests
//!
//! Access-control properties checked against the process-wide registry and
//! registries built from other tables.

#[cfg(test)]
mod tests {
    use crate::common::{ConfigFactory, RegistryAssertions};
    use signet_rbac::{
        DenialReason, FeatureLimit, RbacSystem, Role, can_access, check_permission,
        get_feature_limit, has_feature, has_role, registry,
    };

    // ==================== Permission checks ====================

    /// Every catalog permission is answered exactly as configured
    #[test]
    fn test_check_permission_against_table() {
        let config = ConfigFactory::builtin();

        for role in Role::ALL {
            let level = config.role(role).unwrap().level;
            for permission in &config.permissions {
                let configured = config
                    .roles
                    .iter()
                    .any(|r| r.level <= level && r.permissions.contains(&permission.id));
                assert_eq!(check_permission(role, &permission.id), configured);
            }
        }
    }

    /// Lower roles' permissions are always held by higher roles
    #[test]
    fn test_superset_chain() {
        registry().assert_superset_chain();
    }

    /// Unknown or empty inputs fail closed
    #[test]
    fn test_fail_closed_permission_checks() {
        assert!(!check_permission("", "sign_documents"));
        assert!(!check_permission(Role::RegularUser, ""));
        assert!(!check_permission("admin", "sign_documents"));
        assert!(!check_permission(Role::SuperAdmin, "not_a_permission"));
    }

    /// Misconfigured lookups can be told apart from real denials
    #[test]
    fn test_detailed_check_reports_reason() {
        let check = registry().check_permission_detailed("teamadmin", "team_management");
        assert!(!check.granted);
        assert_eq!(check.denial_reason, Some(DenialReason::UnknownRole));

        let check = registry().check_permission_detailed(Role::RegularUser, "billing_management");
        assert_eq!(check.denial_reason, Some(DenialReason::MissingPermission));
    }

    // ==================== Role hierarchy ====================

    #[test]
    fn test_has_role() {
        for role in Role::ALL {
            assert!(has_role(role, role));
        }
        assert!(has_role(Role::SuperAdmin, Role::TeamAdmin));
        assert!(!has_role(Role::RegularUser, Role::TeamAdmin));
        assert!(!has_role("superuser", Role::RegularUser));
    }

    // ==================== Resources ====================

    #[test]
    fn test_can_access() {
        assert!(!can_access(Role::RegularUser, "team-management"));
        assert!(can_access(Role::TeamAdmin, "team-management"));
        assert!(!can_access(Role::SuperAdmin, "no-such-page"));
        assert!(!can_access("", "dashboard"));
    }

    /// Navigation filtering: each role sees a strictly larger menu
    #[test]
    fn test_navigation_grows_with_privilege() {
        let menus: Vec<Vec<&str>> = Role::ALL
            .iter()
            .map(|role| registry().accessible_resources(*role))
            .collect();

        for pair in menus.windows(2) {
            assert!(pair[0].iter().all(|r| pair[1].contains(r)));
            assert!(pair[1].len() > pair[0].len());
        }
        assert!(menus[1].contains(&"team-management"));
        assert!(!menus[1].contains(&"billing"));
    }

    // ==================== Limits and features ====================

    #[test]
    fn test_feature_limits() {
        assert_eq!(get_feature_limit(Role::RegularUser, "signatures"), 3);
        assert_eq!(get_feature_limit(Role::TeamAdmin, "signatures"), -1);
        assert_eq!(get_feature_limit(Role::TeamAdmin, "nonexistent"), 0);
        assert_eq!(get_feature_limit("visitor", "signatures"), FeatureLimit::zero());
    }

    #[test]
    fn test_has_feature() {
        assert!(has_feature(Role::RegularUser, "mobile_app"));
        assert!(has_feature(Role::SuperAdmin, "mobile_app"));
        assert!(!has_feature(Role::TeamAdmin, "sso"));
    }

    // ==================== Other tables ====================

    #[test]
    fn test_minimal_table() {
        let rbac = ConfigFactory::registry(&ConfigFactory::minimal());

        rbac.assert_superset_chain();
        assert!(rbac.check_permission(Role::SuperAdmin, "read"));
        assert!(rbac.can_access(Role::TeamAdmin, "editor"));
        assert!(!rbac.can_access(Role::RegularUser, "editor"));
        assert!(rbac.has_role(Role::TeamAdmin, Role::RegularUser));
        assert_eq!(rbac.get_feature_limit(Role::SuperAdmin, "signatures"), 0);
    }

    #[test]
    fn test_shipped_yaml_matches_builtin() {
        let shipped = ConfigFactory::shipped().build_registry().unwrap();
        shipped.assert_equivalent_to(registry());
    }

    // ==================== Concurrency ====================

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_registry_is_send_sync() {
        assert_send_sync::<RbacSystem>();
    }

    #[test]
    fn test_concurrent_queries_agree() {
        let results: Vec<bool> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|i| {
                    scope.spawn(move || {
                        let role = Role::ALL[i % 3];
                        (0..200).all(|_| {
                            can_access(role, "dashboard")
                                && check_permission(role, "sign_documents")
                        })
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(results.into_iter().all(|ok| ok));
    }
}
