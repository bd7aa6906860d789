//! Action processing errors.

use crate::env::OracleError;
use crate::error::{CombatError, ErrorSeverity};

use super::ActionKind;

/// Failure to process an action.
///
/// Stale ids and unknown definitions never produce this; they resolve to
/// no-ops. Only an environment missing a provider the action needs does.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProcessError {
    #[error("{kind} requires an oracle that is not available: {source}")]
    MissingOracle {
        kind: ActionKind,
        #[source]
        source: OracleError,
    },
}

impl ProcessError {
    pub(crate) fn oracle(kind: ActionKind) -> impl FnOnce(OracleError) -> Self {
        move |source| Self::MissingOracle { kind, source }
    }
}

impl CombatError for ProcessError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingOracle { source, .. } => source.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingOracle { source, .. } => source.error_code(),
        }
    }
}
