//! Brazilian Portuguese cardinal numbers, used to spell out currency amounts.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::money::{to_centavos, Money};

const UNITS: [&str; 10] = ["", "um", "dois", "três", "quatro", "cinco", "seis", "sete", "oito", "nove"];
const TENS: [&str; 10] = [
    "", "dez", "vinte", "trinta", "quarenta", "cinquenta", "sessenta", "setenta", "oitenta", "noventa",
];
const TEENS: [&str; 10] = [
    "dez", "onze", "doze", "treze", "quatorze", "quinze", "dezesseis", "dezessete", "dezoito", "dezenove",
];
const HUNDREDS: [&str; 10] = [
    "", "cento", "duzentos", "trezentos", "quatrocentos", "quinhentos", "seiscentos", "setecentos",
    "oitocentos", "novecentos",
];

/// Words for 1..=999.
fn group(n: u64) -> String {
    if n == 100 {
        return "cem".to_string();
    }
    let hundreds = (n / 100) as usize;
    let tens = ((n % 100) / 10) as usize;
    let units = (n % 10) as usize;

    let mut words: Vec<&str> = Vec::new();
    if hundreds > 0 {
        words.push(HUNDREDS[hundreds]);
    }
    if tens == 1 {
        if !words.is_empty() {
            words.push("e");
        }
        words.push(TEENS[units]);
    } else {
        if tens > 1 {
            if !words.is_empty() {
                words.push("e");
            }
            words.push(TENS[tens]);
        }
        if units > 0 {
            if !words.is_empty() {
                words.push("e");
            }
            words.push(UNITS[units]);
        }
    }
    words.join(" ")
}

/// Lowercase cardinal for `n`: 150 -> "cento e cinquenta".
///
/// Millions, thousands and units are joined with "e". Exactly one thousand
/// with no millions reads "mil".
pub fn cardinal(n: u64) -> String {
    if n == 0 {
        return "zero".to_string();
    }
    let millions = n / 1_000_000;
    let thousands = (n % 1_000_000) / 1_000;
    let rest = n % 1_000;

    let mut parts: Vec<String> = Vec::new();
    if millions > 0 {
        let count = if millions < 1_000 { group(millions) } else { cardinal(millions) };
        let unit = if millions == 1 { "milhão" } else { "milhões" };
        parts.push(format!("{count} {unit}"));
    }
    if thousands > 0 {
        if !parts.is_empty() {
            parts.push("e".to_string());
        }
        if thousands == 1 && millions == 0 {
            parts.push("mil".to_string());
        } else {
            parts.push(format!("{} mil", group(thousands)));
        }
    }
    if rest > 0 {
        if !parts.is_empty() {
            parts.push("e".to_string());
        }
        parts.push(group(rest));
    }
    parts.join(" ")
}

/// Spells a currency amount: 2360.79 -> "Dois mil e trezentos e sessenta
/// reais e setenta e nove centavos". The sign is ignored.
pub fn amount_in_words(value: Money) -> String {
    let value = to_centavos(value.abs());
    if value.is_zero() {
        return "Zero reais".to_string();
    }

    let int_part = value.trunc();
    let cents = ((value - int_part) * Decimal::ONE_HUNDRED).to_u64().unwrap_or(0);
    let reais = int_part.to_u64().unwrap_or(u64::MAX);

    let mut parts: Vec<String> = Vec::new();
    if reais > 0 {
        parts.push(cardinal(reais));
        parts.push(if reais == 1 { "real" } else { "reais" }.to_string());
    }
    if cents > 0 {
        if !parts.is_empty() {
            parts.push("e".to_string());
        }
        parts.push(group(cents));
        parts.push(if cents == 1 { "centavo" } else { "centavos" }.to_string());
    }

    capitalize(&parts.join(" "))
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spot_checks() {
        assert_eq!(cardinal(100), "cem");
        assert_eq!(cardinal(150), "cento e cinquenta");
        assert_eq!(cardinal(1_000_000), "um milhão");
        assert_eq!(cardinal(15), "quinze");
    }

    #[test]
    fn test_groups() {
        assert_eq!(cardinal(0), "zero");
        assert_eq!(cardinal(1), "um");
        assert_eq!(cardinal(10), "dez");
        assert_eq!(cardinal(19), "dezenove");
        assert_eq!(cardinal(21), "vinte e um");
        assert_eq!(cardinal(101), "cento e um");
        assert_eq!(cardinal(110), "cento e dez");
        assert_eq!(cardinal(999), "novecentos e noventa e nove");
    }

    #[test]
    fn test_thousands_and_millions() {
        assert_eq!(cardinal(1_000), "mil");
        assert_eq!(cardinal(1_001), "mil e um");
        assert_eq!(cardinal(2_360), "dois mil e trezentos e sessenta");
        assert_eq!(cardinal(100_000), "cem mil");
        assert_eq!(cardinal(1_001_000), "um milhão e um mil");
        assert_eq!(cardinal(2_000_000), "dois milhões");
        assert_eq!(
            cardinal(3_733_907),
            "três milhões e setecentos e trinta e três mil e novecentos e sete"
        );
    }

    #[test]
    fn test_amounts() {
        assert_eq!(amount_in_words(Decimal::ZERO), "Zero reais");
        assert_eq!(amount_in_words(Decimal::ONE), "Um real");
        assert_eq!(amount_in_words(Decimal::new(1, 2)), "Um centavo");
        assert_eq!(amount_in_words(Decimal::new(50, 2)), "Cinquenta centavos");
        assert_eq!(amount_in_words(Decimal::new(100, 0)), "Cem reais");
        assert_eq!(amount_in_words(Decimal::new(1_000_000, 0)), "Um milhão reais");
        assert_eq!(
            amount_in_words(Decimal::new(236_079, 2)),
            "Dois mil e trezentos e sessenta reais e setenta e nove centavos"
        );
    }

    #[test]
    fn test_amount_ignores_sign() {
        assert_eq!(amount_in_words(Decimal::new(-17_500, 2)), "Cento e setenta e cinco reais");
    }
}
