//! Oracle access errors.
//!
//! Errors related to static content lookups and character snapshots.

use crate::behavior::Archetype;
use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when reading static or persisted data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    /// The archetype id does not name any known archetype.
    #[error("unknown archetype '{0}'")]
    UnknownArchetype(String),

    /// The archetype exists but the bestiary has no template for it.
    #[error("no bestiary template for archetype '{0}'")]
    TemplateNotFound(Archetype),

    /// The combatant was not spawned from the bestiary.
    #[error("combatant '{0}' has no archetype")]
    MissingArchetype(String),

    /// A character snapshot cannot produce a valid combatant.
    #[error("invalid character snapshot: {0}")]
    InvalidSnapshot(&'static str),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            UnknownArchetype(_) | MissingArchetype(_) | InvalidSnapshot(_) => {
                ErrorSeverity::Validation
            }
            // Every archetype must ship with a template
            TemplateNotFound(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            UnknownArchetype(_) => "ORACLE_UNKNOWN_ARCHETYPE",
            TemplateNotFound(_) => "ORACLE_TEMPLATE_NOT_FOUND",
            MissingArchetype(_) => "ORACLE_MISSING_ARCHETYPE",
            InvalidSnapshot(_) => "ORACLE_INVALID_SNAPSHOT",
        }
    }
}
