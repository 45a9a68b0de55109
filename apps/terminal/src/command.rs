use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tickerboard_core::projection::ProjectionInput;

/// One line of user input.
#[derive(Debug, PartialEq)]
pub enum Command {
    /// Any bare word selects a symbol.
    Select(String),
    Compare(bool),
    Refresh,
    Estimate(ProjectionInput),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let head = parts.next().ok_or_else(|| "empty input".to_string())?;

        match head {
            ":q" | ":quit" => Ok(Self::Quit),
            ":h" | ":help" => Ok(Self::Help),
            ":r" | ":refresh" => Ok(Self::Refresh),
            ":compare" => match parts.next() {
                Some("on") => Ok(Self::Compare(true)),
                Some("off") => Ok(Self::Compare(false)),
                _ => Err("usage: :compare on|off".to_string()),
            },
            ":estimate" => {
                let usage = || "usage: :estimate SYMBOL AMOUNT YYYY-MM-DD".to_string();
                let symbol = parts.next().ok_or_else(usage)?;
                let amount = parts
                    .next()
                    .and_then(|a| Decimal::from_str(a).ok())
                    .ok_or_else(usage)?;
                let start_date = parts
                    .next()
                    .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
                    .ok_or_else(usage)?;
                Ok(Self::Estimate(ProjectionInput {
                    symbol: symbol.to_string(),
                    amount,
                    start_date,
                }))
            }
            other if other.starts_with(':') => Err(format!("unknown command '{}'", other)),
            symbol => Ok(Self::Select(symbol.to_string())),
        }
    }
}

pub const HELP: &str = "\
SYMBOL                          show SYMBOL (e.g. msft)
:compare on|off                 overlay the reference index
:refresh                        refetch the current symbol
:estimate SYMBOL AMOUNT DATE    projected value at 10% a year
:quit                           exit";

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_commands() {
        assert_eq!("msft".parse(), Ok(Command::Select("msft".to_string())));
        assert_eq!(":compare on".parse(), Ok(Command::Compare(true)));
        assert_eq!(":compare off".parse(), Ok(Command::Compare(false)));
        assert_eq!(" :q ".parse(), Ok(Command::Quit));
        assert!(":compare".parse::<Command>().is_err());
        assert!(":bogus".parse::<Command>().is_err());
        assert!("".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_estimate() {
        assert_eq!(
            ":estimate aapl 1000 2024-07-10".parse(),
            Ok(Command::Estimate(ProjectionInput {
                symbol: "aapl".to_string(),
                amount: dec!(1000),
                start_date: NaiveDate::from_ymd_opt(2024, 7, 10).unwrap(),
            }))
        );
        assert!(":estimate aapl ten 2024-07-10".parse::<Command>().is_err());
    }
}
