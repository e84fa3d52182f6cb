//! Character codes and the binary axes they are built from.
//!
//! A [`MainCode`] is three letters, one per axis: `S`/`P` (lump sum vs.
//! annuity), `N`/`R` (gamble vs. certain), `F`/`L` (leisure vs. labor).
//! The fourth quiz answer selects an [`EiAxis`] sub-variant that never takes
//! part in catalog lookups.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Lump-sum vs. annuity preference (first letter of a main code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpAxis {
    /// Takes the lump sum.
    S,
    /// Takes the annuity.
    P,
}

/// High-variance vs. certain outcome preference (second letter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NrAxis {
    /// Gambles on the 10x.
    N,
    /// Takes the certain 2x.
    R,
}

/// Leisure-first vs. labor-first preference (third letter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlAxis {
    /// Travels the world now.
    F,
    /// Works for the doubled salary.
    L,
}

/// One of the eight character archetype codes.
///
/// Variants are declared in catalog order; `Ord` follows the lexicographic
/// order of the string form, which is what compatibility keys sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MainCode {
    /// Flex strategist.
    Snf,
    /// Asset architect.
    Snl,
    /// Smart enjoyer.
    Srf,
    /// Iron guardian.
    Srl,
    /// Instinctive investor.
    Pnf,
    /// Twist-charm investor.
    Pnl,
    /// Free spirit.
    Prf,
    /// Easygoing saver.
    Prl,
}

impl MainCode {
    /// All eight codes in catalog order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Snf,
            Self::Snl,
            Self::Srf,
            Self::Srl,
            Self::Pnf,
            Self::Pnl,
            Self::Prf,
            Self::Prl,
        ]
    }

    /// The three-letter string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Snf => "SNF",
            Self::Snl => "SNL",
            Self::Srf => "SRF",
            Self::Srl => "SRL",
            Self::Pnf => "PNF",
            Self::Pnl => "PNL",
            Self::Prf => "PRF",
            Self::Prl => "PRL",
        }
    }

    /// Exact, case-sensitive parse. No trimming or case folding.
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|code| code.as_str() == s)
    }

    /// Assemble a code from its three axis letters.
    pub fn from_axes(sp: SpAxis, nr: NrAxis, fl: FlAxis) -> Self {
        match (sp, nr, fl) {
            (SpAxis::S, NrAxis::N, FlAxis::F) => Self::Snf,
            (SpAxis::S, NrAxis::N, FlAxis::L) => Self::Snl,
            (SpAxis::S, NrAxis::R, FlAxis::F) => Self::Srf,
            (SpAxis::S, NrAxis::R, FlAxis::L) => Self::Srl,
            (SpAxis::P, NrAxis::N, FlAxis::F) => Self::Pnf,
            (SpAxis::P, NrAxis::N, FlAxis::L) => Self::Pnl,
            (SpAxis::P, NrAxis::R, FlAxis::F) => Self::Prf,
            (SpAxis::P, NrAxis::R, FlAxis::L) => Self::Prl,
        }
    }

    /// Position in catalog order.
    pub(crate) fn index(self) -> usize {
        match self {
            Self::Snf => 0,
            Self::Snl => 1,
            Self::Srf => 2,
            Self::Srl => 3,
            Self::Pnf => 4,
            Self::Pnl => 5,
            Self::Prf => 6,
            Self::Prl => 7,
        }
    }

    /// Split a code back into its three axis letters.
    pub fn axes(self) -> (SpAxis, NrAxis, FlAxis) {
        let sp = match self {
            Self::Snf | Self::Snl | Self::Srf | Self::Srl => SpAxis::S,
            Self::Pnf | Self::Pnl | Self::Prf | Self::Prl => SpAxis::P,
        };
        let nr = match self {
            Self::Snf | Self::Snl | Self::Pnf | Self::Pnl => NrAxis::N,
            Self::Srf | Self::Srl | Self::Prf | Self::Prl => NrAxis::R,
        };
        let fl = match self {
            Self::Snf | Self::Srf | Self::Pnf | Self::Prf => FlAxis::F,
            Self::Snl | Self::Srl | Self::Pnl | Self::Prl => FlAxis::L,
        };
        (sp, nr, fl)
    }
}

impl PartialOrd for MainCode {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MainCode {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl fmt::Display for MainCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MainCode {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownCode(s.to_string()))
    }
}

impl Serialize for MainCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Sub-variant: talks about money (`E`) or quietly accumulates (`I`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EiAxis {
    /// Extroverted.
    E,
    /// Introverted.
    I,
}

impl EiAxis {
    /// Both sub-variants.
    pub fn all() -> &'static [Self] {
        &[Self::E, Self::I]
    }

    /// The one-letter string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::E => "E",
            Self::I => "I",
        }
    }

    /// Exact, case-sensitive parse.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "E" => Some(Self::E),
            "I" => Some(Self::I),
            _ => None,
        }
    }
}

impl fmt::Display for EiAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EiAxis {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownCode(s.to_string()))
    }
}

impl Serialize for EiAxis {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The four-letter receipt number, e.g. `SNFE`. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FullCode {
    /// The archetype.
    pub main: MainCode,
    /// The sub-variant.
    pub sub: EiAxis,
}

impl FullCode {
    /// Pair a main code with its sub-variant.
    pub fn new(main: MainCode, sub: EiAxis) -> Self {
        Self { main, sub }
    }

    /// Parse exactly four characters: a main code followed by `E` or `I`.
    pub fn parse(s: &str) -> Option<Self> {
        if s.len() != 4 || !s.is_char_boundary(3) {
            return None;
        }
        let (main, sub) = s.split_at(3);
        Some(Self::new(MainCode::parse(main)?, EiAxis::parse(sub)?))
    }
}

impl fmt::Display for FullCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.main, self.sub)
    }
}

impl FromStr for FullCode {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownCode(s.to_string()))
    }
}

/// A string that is not one of the enumerated codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown code: \"{0}\"")]
pub struct UnknownCode(pub String);

/// True iff `s` is exactly one of the eight main codes.
pub fn is_main_code(s: &str) -> bool {
    MainCode::parse(s).is_some()
}

/// True iff `s` is exactly `E` or `I`.
pub fn is_ei_axis(s: &str) -> bool {
    EiAxis::parse(s).is_some()
}
