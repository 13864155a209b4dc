//! Feature limits and feature flags

use crate::utils::logging::{DecisionKind, SecurityLogger};

use super::helpers::RbacHelpers;
use super::roles::AsRole;
use super::system::RbacSystem;
use super::types::FeatureLimit;

impl RbacSystem {
    /// Configured limit for a role, or `FeatureLimit::Count(0)` when the role
    /// or key is unknown
    pub fn get_feature_limit<R: AsRole>(&self, role: R, limit_key: &str) -> FeatureLimit {
        self.resolve(&role)
            .and_then(|def| def.limits.get(limit_key))
            .cloned()
            .unwrap_or_else(FeatureLimit::zero)
    }

    /// Whether `usage` more units fit under a role's limit
    pub fn within_limit<R: AsRole>(&self, role: R, limit_key: &str, usage: u64) -> bool {
        self.get_feature_limit(role, limit_key).allows(usage)
    }

    /// Whether a role has a feature flag
    pub fn has_feature<R: AsRole>(&self, role: R, feature: &str) -> bool {
        let decision = self
            .resolve(&role)
            .map(|def| def.features.contains(feature));

        let kind = match decision {
            Some(true) => DecisionKind::Granted,
            Some(false) => DecisionKind::Denied,
            None => DecisionKind::Unresolved,
        };
        SecurityLogger::log_authz_event("has_feature", role.label(), feature, kind);

        decision.unwrap_or(false)
    }

    /// Feature flags of a role, sorted
    pub fn role_features<R: AsRole>(&self, role: R) -> Vec<&str> {
        let mut features: Vec<&str> = self
            .resolve(&role)
            .map(|def| def.features.iter().map(String::as_str).collect())
            .unwrap_or_default();
        features.sort_unstable();
        features
    }
}
