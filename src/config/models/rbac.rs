//! RBAC configuration
//!
//! Each role lists only what it adds on top of the next lower role. The
//! registry folds these deltas in level order when it is built.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::auth::rbac::{FeatureLimit, Role};

/// RBAC configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RbacConfig {
    /// Permission catalog
    pub permissions: Vec<PermissionConfig>,
    /// Role definitions as deltas
    pub roles: Vec<RoleConfig>,
    /// Resource name to the permissions that unlock it (any of)
    pub resources: BTreeMap<String, Vec<String>>,
}

/// Catalog entry for a single permission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PermissionConfig {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_category")]
    pub category: String,
}

/// Role delta
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoleConfig {
    pub id: Role,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub level: u8,
    /// Permissions introduced at this level
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Limits set or overridden at this level
    #[serde(default)]
    pub limits: BTreeMap<String, FeatureLimit>,
    /// Features introduced at this level
    #[serde(default)]
    pub features: Vec<String>,
}

impl Default for RbacConfig {
    fn default() -> Self {
        Self {
            permissions: default_permissions(),
            roles: default_roles(),
            resources: default_resources(),
        }
    }
}

impl RbacConfig {
    /// Look up a role delta
    pub fn role(&self, role: Role) -> Option<&RoleConfig> {
        self.roles.iter().find(|r| r.id == role)
    }
}

fn default_category() -> String {
    "general".to_string()
}

fn permission(id: &str, name: &str, description: &str, category: &str) -> PermissionConfig {
    PermissionConfig {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn limits(items: &[(&str, FeatureLimit)]) -> BTreeMap<String, FeatureLimit> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn text(s: &str) -> FeatureLimit {
    FeatureLimit::Text(s.to_string())
}

/// Built-in permission catalog
pub fn default_permissions() -> Vec<PermissionConfig> {
    vec![
        // Documents
        permission(
            "create_documents",
            "Create Documents",
            "Upload documents and prepare envelopes",
            "documents",
        ),
        permission(
            "sign_documents",
            "Sign Documents",
            "Sign envelopes addressed to the user",
            "documents",
        ),
        permission(
            "view_own_documents",
            "View Own Documents",
            "See envelopes the user created or received",
            "documents",
        ),
        permission(
            "download_documents",
            "Download Documents",
            "Download signed documents and certificates",
            "documents",
        ),
        // Templates
        permission(
            "use_templates",
            "Use Templates",
            "Start envelopes from existing templates",
            "templates",
        ),
        permission(
            "manage_templates",
            "Manage Templates",
            "Create, edit and share templates",
            "templates",
        ),
        // Team
        permission(
            "team_management",
            "Team Management",
            "Manage team settings and membership",
            "team",
        ),
        permission(
            "invite_members",
            "Invite Members",
            "Invite new members to the team",
            "team",
        ),
        permission(
            "view_team_documents",
            "View Team Documents",
            "See envelopes created by team members",
            "team",
        ),
        permission(
            "bulk_send",
            "Bulk Send",
            "Send one envelope to many recipients",
            "team",
        ),
        // Analytics
        permission(
            "view_analytics",
            "View Analytics",
            "View team usage and completion analytics",
            "analytics",
        ),
        permission(
            "view_system_analytics",
            "View System Analytics",
            "View platform-wide analytics",
            "analytics",
        ),
        // Branding
        permission(
            "custom_branding",
            "Custom Branding",
            "Apply logos and colors to envelopes and emails",
            "branding",
        ),
        // Administration
        permission(
            "user_management",
            "User Management",
            "Create, suspend and delete user accounts",
            "administration",
        ),
        permission(
            "role_management",
            "Role Management",
            "Assign roles to users",
            "administration",
        ),
        permission(
            "system_settings",
            "System Settings",
            "Change platform configuration",
            "administration",
        ),
        permission(
            "audit_logs",
            "Audit Logs",
            "Read the platform audit trail",
            "administration",
        ),
        permission(
            "view_all_documents",
            "View All Documents",
            "See every envelope on the platform",
            "administration",
        ),
        // Billing
        permission(
            "billing_management",
            "Billing Management",
            "Manage plans, invoices and payment methods",
            "billing",
        ),
    ]
}

/// Built-in role deltas
pub fn default_roles() -> Vec<RoleConfig> {
    vec![
        RoleConfig {
            id: Role::RegularUser,
            name: "Regular User".to_string(),
            description: "Individual account that sends and signs documents".to_string(),
            level: 1,
            permissions: strings(&[
                "create_documents",
                "sign_documents",
                "view_own_documents",
                "download_documents",
                "use_templates",
            ]),
            limits: limits(&[
                ("signatures", FeatureLimit::Count(3)),
                ("documents", FeatureLimit::Count(10)),
                ("templates", FeatureLimit::Count(3)),
                ("team_members", FeatureLimit::Count(1)),
                ("storage", text("1GB")),
            ]),
            features: strings(&["basic_signing", "email_notifications", "mobile_app"]),
        },
        RoleConfig {
            id: Role::TeamAdmin,
            name: "Team Admin".to_string(),
            description: "Administers a team workspace and its members".to_string(),
            level: 2,
            permissions: strings(&[
                "manage_templates",
                "team_management",
                "invite_members",
                "view_team_documents",
                "bulk_send",
                "view_analytics",
                "custom_branding",
            ]),
            limits: limits(&[
                ("signatures", FeatureLimit::Count(FeatureLimit::UNLIMITED_COUNT)),
                ("documents", FeatureLimit::Count(FeatureLimit::UNLIMITED_COUNT)),
                ("templates", FeatureLimit::Count(50)),
                ("team_members", FeatureLimit::Count(25)),
                ("storage", text("100GB")),
            ]),
            features: strings(&[
                "team_workspace",
                "bulk_send",
                "custom_branding",
                "advanced_analytics",
                "priority_support",
            ]),
        },
        RoleConfig {
            id: Role::SuperAdmin,
            name: "Super Admin".to_string(),
            description: "Operates the platform with full access".to_string(),
            level: 3,
            permissions: strings(&[
                "user_management",
                "role_management",
                "system_settings",
                "audit_logs",
                "view_all_documents",
                "view_system_analytics",
                "billing_management",
            ]),
            limits: limits(&[
                ("templates", FeatureLimit::Count(FeatureLimit::UNLIMITED_COUNT)),
                ("team_members", FeatureLimit::Count(FeatureLimit::UNLIMITED_COUNT)),
                ("storage", text(FeatureLimit::UNLIMITED_TEXT)),
            ]),
            features: strings(&[
                "admin_console",
                "audit_trail",
                "sso",
                "api_access",
                "dedicated_support",
            ]),
        },
    ]
}

/// Built-in resource access rules
pub fn default_resources() -> BTreeMap<String, Vec<String>> {
    let rules: [(&str, &[&str]); 13] = [
        ("dashboard", &["view_own_documents"]),
        ("documents", &["create_documents", "view_own_documents"]),
        ("signing", &["sign_documents"]),
        ("templates", &["use_templates", "manage_templates"]),
        ("template-editor", &["manage_templates"]),
        ("team-management", &["team_management"]),
        ("team-documents", &["view_team_documents", "view_all_documents"]),
        ("analytics", &["view_analytics", "view_system_analytics"]),
        ("branding", &["custom_branding"]),
        ("user-management", &["user_management"]),
        (
            "admin-panel",
            &["system_settings", "user_management", "role_management"],
        ),
        ("audit-logs", &["audit_logs"]),
        ("billing", &["billing_management"]),
    ];

    rules
        .into_iter()
        .map(|(resource, perms)| (resource.to_string(), strings(perms)))
        .collect()
}
