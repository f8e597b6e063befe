//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (e.g. `LayoutError`, `ActionError`) are defined in
//! their respective modules alongside the operations they validate. They all
//! implement [`GameError`] so hosts can decide how to surface them.
//!
//! # Design Principles
//!
//! - **Soft failures**: a blocked action never mutates state; the host shows a
//!   notification and moves on
//! - **Severity Classification**: errors are categorized so hosts can pick a
//!   notification level without matching on every variant
//! - **Stable codes**: every variant has a static error code for logs and tests

/// Severity level of an error, used for categorization and presentation.
///
/// - **Recoverable**: the player lacks something (gold, stamina, materials,
///   level). Retrying later or with other choices may succeed.
/// - **Validation**: the request references something that does not exist or
///   is not applicable. Retrying unchanged will fail again.
/// - **Internal**: unexpected state inconsistency; indicates a bug.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
