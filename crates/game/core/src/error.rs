//! Common error infrastructure for skirmish-core.
//!
//! Domain-specific errors (`StateError`, `ActionError`, `ConfigError`) live
//! next to the types they validate. This module provides the classification
//! shared by all of them.
//!
//! # Design Principles
//!
//! - **Fail loudly**: a malformed snapshot is never silently corrected
//! - **Rich Context**: errors carry the offending unit and position
//! - **Severity Classification**: errors are categorized for host handling

/// Severity level of an error, used for categorization by the host.
///
/// - **Validation**: invalid input from the host (bad snapshot, bad config,
///   illegal joint action). Rejected before any search runs.
/// - **Internal**: the model reached a state its own invariants forbid.
///   These indicate bugs and should be investigated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: overlapping units, zero search depth
    Validation,

    /// Unexpected state inconsistency.
    ///
    /// Examples: a generated child that breaks the occupancy invariant
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all skirmish-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who caused the failure, not its impact
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
