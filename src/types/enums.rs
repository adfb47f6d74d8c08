use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SanctumError;

/// Trade direction for a swap quote: which side of the pair is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteMode {
    ExactIn,
    ExactOut,
}

impl fmt::Display for QuoteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteMode::ExactIn => write!(f, "ExactIn"),
            QuoteMode::ExactOut => write!(f, "ExactOut"),
        }
    }
}

impl FromStr for QuoteMode {
    type Err = SanctumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ExactIn" => Ok(QuoteMode::ExactIn),
            "ExactOut" => Ok(QuoteMode::ExactOut),
            other => Err(SanctumError::Validation(format!(
                "invalid quote mode: {other} (expected ExactIn or ExactOut)"
            ))),
        }
    }
}

/// Venue a swap quote is routed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapSource {
    Spool,
    Stakedex,
    Jup,
}

impl fmt::Display for SwapSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapSource::Spool => write!(f, "Spool"),
            SwapSource::Stakedex => write!(f, "Stakedex"),
            SwapSource::Jup => write!(f, "Jup"),
        }
    }
}

impl FromStr for SwapSource {
    type Err = SanctumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Spool" => Ok(SwapSource::Spool),
            "Stakedex" => Ok(SwapSource::Stakedex),
            "Jup" => Ok(SwapSource::Jup),
            other => Err(SanctumError::Validation(format!(
                "invalid swap source: {other} (expected Spool, Stakedex or Jup)"
            ))),
        }
    }
}

/// Averaging window for APY queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApyWindow {
    /// Most recent epoch.
    #[default]
    Latest,
    /// Trailing average over the given number of epochs.
    Epochs(u32),
    /// Average since the LST's inception.
    Inception,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_mode_parse() {
        assert_eq!("ExactIn".parse::<QuoteMode>().unwrap(), QuoteMode::ExactIn);
        assert_eq!(
            "ExactOut".parse::<QuoteMode>().unwrap(),
            QuoteMode::ExactOut
        );
    }

    #[test]
    fn test_quote_mode_parse_invalid() {
        let err = "Bad".parse::<QuoteMode>().unwrap_err();
        assert!(matches!(err, SanctumError::Validation(_)));
        // Values are case-sensitive, as the API expects them verbatim.
        assert!("exactin".parse::<QuoteMode>().is_err());
    }

    #[test]
    fn test_swap_source_parse() {
        assert_eq!("Spool".parse::<SwapSource>().unwrap(), SwapSource::Spool);
        assert_eq!(
            "Stakedex".parse::<SwapSource>().unwrap(),
            SwapSource::Stakedex
        );
        assert_eq!("Jup".parse::<SwapSource>().unwrap(), SwapSource::Jup);
    }

    #[test]
    fn test_swap_source_parse_invalid() {
        let err = "Orca".parse::<SwapSource>().unwrap_err();
        assert!(matches!(err, SanctumError::Validation(_)));
    }

    #[test]
    fn test_display_matches_wire_values() {
        assert_eq!(QuoteMode::ExactIn.to_string(), "ExactIn");
        assert_eq!(QuoteMode::ExactOut.to_string(), "ExactOut");
        assert_eq!(SwapSource::Stakedex.to_string(), "Stakedex");
    }
}
