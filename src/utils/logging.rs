//! Logging utilities
//!
//! Subscriber setup plus a security-aware logger for authorization decisions.

use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Log target used for authorization decisions
pub const SECURITY_TARGET: &str = "security";

/// Install a global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `default_level`. Returns `false` if a
/// subscriber was already installed.
pub fn init_logging(default_level: &str, json: bool) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false);

    if json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}

/// Why an authorization decision came out the way it did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionKind {
    /// The role holds what was asked for
    Granted,
    /// The role is known but lacks the permission, level or feature
    Denied,
    /// Some input did not resolve against the registry
    Unresolved,
}

/// Security-aware logging utilities
pub struct SecurityLogger;

impl SecurityLogger {
    /// Log an authorization decision.
    ///
    /// Unresolved lookups log at `warn` since they usually mean a typo in a
    /// role, permission or resource name at the call site.
    pub fn log_authz_event(check: &str, role: &str, subject: &str, kind: DecisionKind) {
        // Cap caller-provided strings so a hostile value cannot flood the log
        let role: String = role.chars().take(64).collect();
        let subject: String = subject.chars().take(128).collect();

        match kind {
            DecisionKind::Granted => debug!(
                target: SECURITY_TARGET,
                check,
                role = %role,
                subject = %subject,
                granted = true,
                "Authorization granted"
            ),
            DecisionKind::Denied => debug!(
                target: SECURITY_TARGET,
                check,
                role = %role,
                subject = %subject,
                granted = false,
                "Authorization denied"
            ),
            DecisionKind::Unresolved => warn!(
                target: SECURITY_TARGET,
                check,
                role = %role,
                subject = %subject,
                granted = false,
                "Authorization denied: unrecognized input"
            ),
        }
    }
}
