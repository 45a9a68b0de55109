use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Form input of the projection calculator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionInput {
    pub symbol: String,
    pub amount: Decimal,
    pub start_date: NaiveDate,
}

/// Estimated value of an investment held since `start_date`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub symbol: String,
    pub amount: Decimal,
    pub start_date: NaiveDate,
    pub months_elapsed: u32,
    pub annual_return: Decimal,
    pub future_value: Decimal,
}

impl Projection {
    /// One-line description for display.
    pub fn summary(&self) -> String {
        format!(
            "Investment in {} since {}: ${:.2} (estimated, assuming {}% annual return)",
            self.symbol,
            self.start_date.format("%Y-%m-%d"),
            self.future_value,
            (self.annual_return * Decimal::ONE_HUNDRED).normalize()
        )
    }
}
