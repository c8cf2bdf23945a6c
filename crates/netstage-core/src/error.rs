// ── Core error types ──
//
// Consumers of this crate see domain-level failures, not raw HTTP detail.
// Two failure classes matter: backend/transport errors (wrapped from
// `netstage_api::Error`) and validation errors from wire-to-domain
// translation, which are always hard failures.

use std::fmt;

use thiserror::Error;

use crate::model::AddressError;

/// Which half of a two-phase *(write, apply)* mutation failed.
///
/// The backend stages changes and only commits on apply, so a mutation that
/// failed in the `Apply` phase has already been written to the staged
/// change-set; one that failed in `Write` has not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationPhase {
    Write,
    Apply,
}

impl fmt::Display for MutationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Write => f.write_str("write"),
            Self::Apply => f.write_str("apply"),
        }
    }
}

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Malformed address or prefix in a wire payload.
    #[error("invalid wire data: {0}")]
    Address(#[from] AddressError),

    /// Other malformed wire data (unknown device code, out-of-range field).
    #[error("invalid wire data: {message}")]
    Malformed { message: String },

    /// A two-phase mutation failed, with the phase that broke.
    #[error("connection {phase} failed: {source}")]
    Mutation {
        phase: MutationPhase,
        source: netstage_api::Error,
    },

    /// Backend or transport failure outside a mutation.
    #[error("API error: {0}")]
    Api(#[from] netstage_api::Error),
}

impl CoreError {
    /// The failed mutation phase, if this error came from a two-phase
    /// operation.
    pub fn failed_phase(&self) -> Option<MutationPhase> {
        match self {
            Self::Mutation { phase, .. } => Some(*phase),
            _ => None,
        }
    }
}
