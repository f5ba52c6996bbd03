//! Error types for the scoring engine.
//!
//! The engine itself is validate-and-skip: malformed answer data is
//! silently excluded, never an error. The only fallible operation is
//! resolving an instrument identifier string.

use thiserror::Error;

/// Returned when an instrument identifier string matches no known
/// questionnaire instrument.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown questionnaire instrument '{0}'")]
pub struct UnknownInstrument(pub String);
