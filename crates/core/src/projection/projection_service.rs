use chrono::{Datelike, NaiveDate};
use log::debug;
use rust_decimal::{Decimal, MathematicalOps};

use crate::constants::{ASSUMED_ANNUAL_RETURN, DISPLAY_DECIMAL_PRECISION};
use crate::errors::ProjectionError;

use super::projection_model::{Projection, ProjectionInput};

/// Whole calendar months from `start` to `end`, ignoring the day of month.
///
/// Returns 0 when `end` is not after `start`'s month.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> u32 {
    let months = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    months.max(0) as u32
}

/// Compound `input.amount` monthly at the assumed annual return up to `today`.
pub fn estimate(input: &ProjectionInput, today: NaiveDate) -> Result<Projection, ProjectionError> {
    let symbol = input.symbol.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(ProjectionError::MissingField("symbol".to_string()));
    }
    if input.amount <= Decimal::ZERO {
        return Err(ProjectionError::NonPositiveAmount);
    }
    if input.start_date > today {
        return Err(ProjectionError::FutureStartDate(input.start_date));
    }

    let months_elapsed = months_between(input.start_date, today);

    let monthly_factor = (Decimal::ONE + ASSUMED_ANNUAL_RETURN)
        .checked_powd(Decimal::ONE / Decimal::from(12))
        .ok_or(ProjectionError::Overflow)?;
    let growth = monthly_factor
        .checked_powi(i64::from(months_elapsed))
        .ok_or(ProjectionError::Overflow)?;
    let future_value = input
        .amount
        .checked_mul(growth)
        .ok_or(ProjectionError::Overflow)?
        .round_dp(DISPLAY_DECIMAL_PRECISION);

    debug!(
        "Projected {} {} over {} months to {}",
        input.amount, symbol, months_elapsed, future_value
    );

    Ok(Projection {
        symbol,
        amount: input.amount,
        start_date: input.start_date,
        months_elapsed,
        annual_return: ASSUMED_ANNUAL_RETURN,
        future_value,
    })
}
