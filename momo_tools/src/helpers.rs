use spg_common::Tzs;

use crate::AggregatorApiError;

/// The aggregator reports amounts as decimal strings ("15000.00"). TZS has no minor unit, so
/// any fractional part must be zero.
pub fn parse_provider_amount(amount: &str) -> Result<Tzs, AggregatorApiError> {
    let mut parts = amount.split('.');
    let whole_units = parts
        .next()
        .ok_or_else(|| AggregatorApiError::InvalidCurrencyAmount(amount.to_string()))?
        .parse::<i64>()
        .map_err(|e| AggregatorApiError::InvalidCurrencyAmount(format!("Invalid amount value: {amount}. {e}.")))?;
    if let Some(frac) = parts.next() {
        let cents = frac
            .parse::<i64>()
            .map_err(|e| AggregatorApiError::InvalidCurrencyAmount(format!("Invalid amount value: {amount}. {e}.")))?;
        if cents != 0 {
            return Err(AggregatorApiError::InvalidCurrencyAmount(format!(
                "TZS amounts cannot carry cents: {amount}"
            )));
        }
    }
    Ok(Tzs::from(whole_units))
}
