//! Common error infrastructure for realm-core.
//!
//! Combat resolution itself never fails: stun, dodge, miss and hit are all
//! outcomes. Errors only arise at the edges, when looking up static content or
//! turning persisted character data into a combatant. Those error enums
//! implement [`GameError`] so callers can classify them uniformly.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: may succeed on retry or with different input
/// - **Validation**: invalid input, reject without retry
/// - **Internal**: unexpected inconsistency, investigate
/// - **Fatal**: content or state is unusable
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,

    /// Examples: unknown archetype id, snapshot with zero max hp
    Validation,

    Internal,

    /// Examples: bestiary missing an archetype's template
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all realm-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    ///
    /// This is used for error handling strategies and logging priorities.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Defaults to the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
