//! Validation trait definition

/// Structural checks run before a configuration is turned into a registry.
///
/// Errors are plain messages; callers lift them into `RbacError::Validation`.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
