use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::MarketDataError;

/// Ticker symbol, uppercased on construction.
///
/// Symbols are not checked against any exchange list. Anything non-empty is
/// accepted and sent upstream verbatim, so `"^gdaxi"` becomes `"^GDAXI"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(Arc<str>);

impl Symbol {
    pub fn parse(raw: &str) -> Result<Self, MarketDataError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(MarketDataError::InvalidSymbol(raw.to_string()));
        }
        Ok(Self(Arc::from(trimmed.to_uppercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Symbol {
    type Error = MarketDataError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0.to_string()
    }
}

/// Bar size of the requested series (`interval` query parameter).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interval {
    #[default]
    OneDay,
    FiveDays,
    OneWeek,
    OneMonth,
    ThreeMonths,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneDay => "1d",
            Self::FiveDays => "5d",
            Self::OneWeek => "1wk",
            Self::OneMonth => "1mo",
            Self::ThreeMonths => "3mo",
        }
    }
}

impl FromStr for Interval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1d" => Ok(Self::OneDay),
            "5d" => Ok(Self::FiveDays),
            "1wk" => Ok(Self::OneWeek),
            "1mo" => Ok(Self::OneMonth),
            "3mo" => Ok(Self::ThreeMonths),
            other => Err(format!("unsupported interval '{}'", other)),
        }
    }
}

/// Look-back window of the requested series (`range` query parameter).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Range {
    FiveDays,
    #[default]
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
    TwoYears,
    FiveYears,
    YearToDate,
    Max,
}

impl Range {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FiveDays => "5d",
            Self::OneMonth => "1mo",
            Self::ThreeMonths => "3mo",
            Self::SixMonths => "6mo",
            Self::OneYear => "1y",
            Self::TwoYears => "2y",
            Self::FiveYears => "5y",
            Self::YearToDate => "ytd",
            Self::Max => "max",
        }
    }
}

impl FromStr for Range {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "5d" => Ok(Self::FiveDays),
            "1mo" => Ok(Self::OneMonth),
            "3mo" => Ok(Self::ThreeMonths),
            "6mo" => Ok(Self::SixMonths),
            "1y" => Ok(Self::OneYear),
            "2y" => Ok(Self::TwoYears),
            "5y" => Ok(Self::FiveYears),
            "ytd" => Ok(Self::YearToDate),
            "max" => Ok(Self::Max),
            other => Err(format!("unsupported range '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_is_uppercased_and_trimmed() {
        let symbol = Symbol::parse("  aapl ").unwrap();
        assert_eq!(symbol.as_str(), "AAPL");
        assert_eq!(symbol, Symbol::parse("AAPL").unwrap());
        assert_eq!(Symbol::parse("^gdaxi").unwrap().to_string(), "^GDAXI");
    }

    #[test]
    fn test_empty_symbol_rejected() {
        assert_eq!(
            Symbol::parse("   "),
            Err(MarketDataError::InvalidSymbol("   ".to_string()))
        );
    }

    #[test]
    fn test_symbol_serde() {
        let symbol: Symbol = serde_json::from_str("\"msft\"").unwrap();
        assert_eq!(symbol.as_str(), "MSFT");
        assert_eq!(serde_json::to_string(&symbol).unwrap(), "\"MSFT\"");
        assert!(serde_json::from_str::<Symbol>("\"\"").is_err());
    }

    #[test]
    fn test_interval_and_range_parse() {
        assert_eq!("1wk".parse::<Interval>().unwrap(), Interval::OneWeek);
        assert_eq!(Interval::default().as_str(), "1d");
        assert_eq!("ytd".parse::<Range>().unwrap(), Range::YearToDate);
        assert_eq!(Range::default().as_str(), "1mo");
        assert!("2h".parse::<Interval>().is_err());
        assert!("10y".parse::<Range>().is_err());
    }
}
