//! Instrument identifier enum - the engine's entry-point vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::UnknownInstrument;

/// The questionnaire instruments the engine can score.
///
/// The string identifiers match the ones projects are stored with, so the
/// UI layer can dispatch straight from a persisted questionnaire id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Instrument {
    Sus,
    Deep,
    Umux,
    UmuxLite,
    Ueq,
    UeqS,
    #[serde(rename = "attrakdiff")]
    AttrakDiff,
    #[serde(rename = "attrakdiff_abridged")]
    AttrakDiffAbridged,
}

impl Instrument {
    /// Every instrument, in presentation order.
    pub const ALL: &'static [Instrument] = &[
        Instrument::Sus,
        Instrument::Deep,
        Instrument::Umux,
        Instrument::UmuxLite,
        Instrument::Ueq,
        Instrument::UeqS,
        Instrument::AttrakDiff,
        Instrument::AttrakDiffAbridged,
    ];

    /// Returns the stable string identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Instrument::Sus => "sus",
            Instrument::Deep => "deep",
            Instrument::Umux => "umux",
            Instrument::UmuxLite => "umux_lite",
            Instrument::Ueq => "ueq",
            Instrument::UeqS => "ueq_s",
            Instrument::AttrakDiff => "attrakdiff",
            Instrument::AttrakDiffAbridged => "attrakdiff_abridged",
        }
    }
}

impl FromStr for Instrument {
    type Err = UnknownInstrument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Instrument::ALL
            .iter()
            .find(|i| i.id() == s)
            .copied()
            .ok_or_else(|| UnknownInstrument(s.to_string()))
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
