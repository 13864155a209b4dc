//! RBAC type definitions

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::RbacError;

/// Privilege tier assigned to a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Individual account
    RegularUser,
    /// Administrator of a team workspace
    TeamAdmin,
    /// Platform operator
    SuperAdmin,
}

impl Role {
    /// All roles, least privileged first
    pub const ALL: [Role; 3] = [Role::RegularUser, Role::TeamAdmin, Role::SuperAdmin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::RegularUser => "regular_user",
            Role::TeamAdmin => "team_admin",
            Role::SuperAdmin => "super_admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RbacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| RbacError::validation(format!("Unknown role: {:?}", s)))
    }
}

/// Per-role quota.
///
/// Numeric limits use `-1` for "no bound"; textual limits use `"Unlimited"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureLimit {
    Count(i64),
    Text(String),
}

impl FeatureLimit {
    /// Numeric sentinel for an unbounded limit
    pub const UNLIMITED_COUNT: i64 = -1;
    /// Textual sentinel for an unbounded limit
    pub const UNLIMITED_TEXT: &'static str = "Unlimited";

    /// Value reported for a missing role or key
    pub fn zero() -> Self {
        FeatureLimit::Count(0)
    }

    pub fn is_unlimited(&self) -> bool {
        match self {
            FeatureLimit::Count(n) => *n == Self::UNLIMITED_COUNT,
            FeatureLimit::Text(s) => s == Self::UNLIMITED_TEXT,
        }
    }

    /// Whether `usage` more units fit under this limit.
    ///
    /// Non-sentinel text limits such as `"1GB"` are display values and never
    /// allow a numeric comparison.
    pub fn allows(&self, usage: u64) -> bool {
        if self.is_unlimited() {
            return true;
        }
        match self {
            FeatureLimit::Count(n) => u64::try_from(*n).is_ok_and(|max| usage < max),
            FeatureLimit::Text(_) => false,
        }
    }

    pub fn as_count(&self) -> Option<i64> {
        match self {
            FeatureLimit::Count(n) => Some(*n),
            FeatureLimit::Text(_) => None,
        }
    }
}

impl Default for FeatureLimit {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for FeatureLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureLimit::Count(n) => write!(f, "{}", n),
            FeatureLimit::Text(s) => f.write_str(s),
        }
    }
}

impl PartialEq<i64> for FeatureLimit {
    fn eq(&self, other: &i64) -> bool {
        self.as_count() == Some(*other)
    }
}

impl PartialEq<&str> for FeatureLimit {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, FeatureLimit::Text(s) if s == other)
    }
}

/// Permission catalog entry.
///
/// Only `id` participates in access decisions; the rest is display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permission {
    /// Permission identifier
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Permission description
    pub description: String,
    /// Display grouping
    pub category: String,
}

/// Effective definition of a role after folding in every lower role
#[derive(Debug, Clone)]
pub struct RoleDefinition {
    pub role: Role,
    /// Display name
    pub name: String,
    /// Role description
    pub description: String,
    /// Ordinal used for hierarchical comparison
    pub level: u8,
    /// Granted permission ids
    pub permissions: HashSet<String>,
    /// Resource limits keyed by limit name
    pub limits: HashMap<String, FeatureLimit>,
    /// Feature flags
    pub features: HashSet<String>,
}

/// Why a permission check failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    /// The role did not resolve
    UnknownRole,
    /// The permission is empty or not in the catalog
    UnknownPermission,
    /// The role is known but does not hold the permission
    MissingPermission,
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DenialReason::UnknownRole => "unknown role",
            DenialReason::UnknownPermission => "unknown permission",
            DenialReason::MissingPermission => "missing permission",
        };
        f.write_str(s)
    }
}

/// Permission check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionCheck {
    /// Whether permission is granted
    pub granted: bool,
    /// Role that granted the permission
    pub granted_by_role: Option<Role>,
    /// Reason for denial (if not granted)
    pub denial_reason: Option<DenialReason>,
}

impl PermissionCheck {
    pub(super) fn granted(role: Role) -> Self {
        Self {
            granted: true,
            granted_by_role: Some(role),
            denial_reason: None,
        }
    }

    pub(super) fn denied(reason: DenialReason) -> Self {
        Self {
            granted: false,
            granted_by_role: None,
            denial_reason: Some(reason),
        }
    }
}
