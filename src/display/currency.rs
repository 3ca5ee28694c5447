//! Locale-aware currency formatting
//!
//! Reports carry plain `Money` values. Turning them into strings such as
//! `2 800,00 €` happens only here, at the display and export boundary.

use crate::models::Money;

/// No-break space placed between an amount and a trailing symbol
const SYMBOL_SPACE: char = '\u{a0}';

/// How amounts are rendered for people
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    /// Currency symbol
    pub symbol: String,
    /// Symbol after the number (`12,00 €`) rather than before (`$12.00`)
    pub symbol_after: bool,
    /// Separator between units and cents
    pub decimal_separator: String,
    /// Separator between groups of three digits
    pub group_separator: String,
}

impl CurrencyFormat {
    /// Euro amounts as the fr-FR locale writes them: `1 234,56 €`
    pub fn french() -> Self {
        Self {
            symbol: "€".into(),
            symbol_after: true,
            decimal_separator: ",".into(),
            group_separator: "\u{202f}".into(),
        }
    }

    /// Plain `$1,234.56` style, mostly useful in tests and logs
    pub fn us_dollar() -> Self {
        Self {
            symbol: "$".into(),
            symbol_after: false,
            decimal_separator: ".".into(),
            group_separator: ",".into(),
        }
    }

    /// Format an amount with grouping, two decimals and the currency symbol
    pub fn format(&self, amount: Money) -> String {
        let number = self.format_number(amount.abs());
        let sign = if amount.is_negative() { "-" } else { "" };

        if self.symbol_after {
            format!("{}{}{}{}", sign, number, SYMBOL_SPACE, self.symbol)
        } else {
            format!("{}{}{}", sign, self.symbol, number)
        }
    }

    /// Format the absolute amount without sign or symbol
    fn format_number(&self, amount: Money) -> String {
        format!(
            "{}{}{:02}",
            group_digits(amount.units(), &self.group_separator),
            self.decimal_separator,
            amount.cents_part()
        )
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::french()
    }
}

/// Insert `separator` between groups of three digits of a non-negative number
fn group_digits(value: i64, separator: &str) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_french_format() {
        let fmt = CurrencyFormat::french();
        assert_eq!(fmt.format(Money::from_cents(2_543_000)), "25\u{202f}430,00\u{a0}€");
        assert_eq!(fmt.format(Money::from_cents(-8250)), "-82,50\u{a0}€");
        assert_eq!(fmt.format(Money::zero()), "0,00\u{a0}€");
    }

    #[test]
    fn test_us_format() {
        let fmt = CurrencyFormat::us_dollar();
        assert_eq!(fmt.format(Money::from_cents(123_456_789)), "$1,234,567.89");
        assert_eq!(fmt.format(Money::from_cents(-5)), "-$0.05");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0, " "), "0");
        assert_eq!(group_digits(999, " "), "999");
        assert_eq!(group_digits(1000, " "), "1 000");
        assert_eq!(group_digits(1_000_000, " "), "1 000 000");
    }
}
