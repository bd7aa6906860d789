//! Oracle access errors.

use crate::error::{CombatError, ErrorSeverity};

/// A required oracle is missing from the [`CombatEnv`](super::CombatEnv).
///
/// Unknown skills or items are not errors; only a missing provider is.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("SkillOracle not available")]
    SkillsNotAvailable,

    #[error("ItemOracle not available")]
    ItemsNotAvailable,

    #[error("RngOracle not available")]
    RngNotAvailable,
}

impl CombatError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SkillsNotAvailable => "ORACLE_SKILLS_NOT_AVAILABLE",
            Self::ItemsNotAvailable => "ORACLE_ITEMS_NOT_AVAILABLE",
            Self::RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
        }
    }
}
