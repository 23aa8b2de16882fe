//! Currency display formatting.

/// Currency symbol prefixed to every amount. Fixed by contract; the client
/// does no locale detection or symbol configuration.
pub const CURRENCY_SYMBOL: &str = "$";

/// Format an amount for display: the currency symbol followed by the value
/// with exactly two fraction digits.
///
/// Rounding past two decimals follows Rust's float formatting (round half
/// to even over the nearest representable value). Amounts that quote cents
/// exactly render exactly.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    format!("{CURRENCY_SYMBOL}{amount:.2}")
}
