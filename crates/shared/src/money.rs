use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency amounts in reais. Exact decimal, never floating point.
pub type Money = Decimal;

pub const CURRENCY_PREFIX: &str = "R$";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyError {
    #[error("invalid currency amount: {0:?}")]
    Invalid(String),
}

/// Rounds half away from zero to whole centavos.
pub fn to_centavos(value: Money) -> Money {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Parses Brazilian currency text: "R$ 2.360,79", "2360,79", "3.50", "".
///
/// Dots are thousands separators unless the text has no comma and a single
/// dot followed by at most two digits.
pub fn parse_brl(input: &str) -> Result<Money, MoneyError> {
    let trimmed = input.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed),
    };
    let body = rest.strip_prefix(CURRENCY_PREFIX).unwrap_or(rest).trim();
    if body.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let normalized = if body.contains(',') {
        body.replace('.', "").replace(',', ".")
    } else {
        match body.split_once('.') {
            Some((_, frac)) if !frac.contains('.') && frac.len() <= 2 => body.to_string(),
            _ => body.replace('.', ""),
        }
    };

    let value = Decimal::from_str(&normalized).map_err(|_| MoneyError::Invalid(input.to_string()))?;
    Ok(if negative { -value } else { value })
}

/// Formats as "R$ 3.733.907,79"; negatives as "-R$ 175,00".
pub fn format_brl(value: Money) -> String {
    let mut cents = to_centavos(value).abs();
    cents.rescale(2);
    let text = cents.to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if value.is_sign_negative() && !cents.is_zero() { "-" } else { "" };
    format!("{sign}{CURRENCY_PREFIX} {grouped},{frac_part}")
}
