use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Symbol shown when the dashboard first loads
pub const DEFAULT_SYMBOL: &str = "AAPL";

/// Reference index overlaid in comparison mode (DAX performance index)
pub const DEFAULT_REFERENCE_SYMBOL: &str = "^GDAXI";

/// Legend label of the reference dataset
pub const DEFAULT_REFERENCE_LABEL: &str = "DAX";

/// Flat annual return assumed by the investment projection
pub const ASSUMED_ANNUAL_RETURN: Decimal = dec!(0.10);

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
