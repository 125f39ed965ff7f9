//! Number Formatting
//! Digit substitution and thousands grouping for prices and counters.

use serde::{Deserialize, Serialize};

const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Which glyphs numbers are written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigitStyle {
    #[default]
    Persian,
    Latin,
}

impl DigitStyle {
    /// Replace every ASCII digit in `text` with this style's glyph.
    pub fn localize(self, text: &str) -> String {
        match self {
            DigitStyle::Latin => text.to_string(),
            DigitStyle::Persian => text
                .chars()
                .map(|c| match c.to_digit(10) {
                    Some(d) if c.is_ascii_digit() => PERSIAN_DIGITS[d as usize],
                    _ => c,
                })
                .collect(),
        }
    }
}

/// Insert `,` between every group of three digits.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Rounds half-way cases toward positive infinity.
fn round_half_up(value: f64) -> i64 {
    // `(value + 0.5).floor()` is off for values just below one half.
    let rounded = value.round();
    if value - value.trunc() == -0.5 {
        (rounded + 1.0) as i64
    } else {
        rounded as i64
    }
}

/// Formats chart values as tooltip prices.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceFormatter {
    pub digits: DigitStyle,
    /// Multiplier from chart units to displayed price units.
    pub scale: f64,
    pub currency: String,
}

impl Default for PriceFormatter {
    fn default() -> Self {
        Self {
            digits: DigitStyle::Persian,
            scale: 1000.0,
            currency: "ریال".to_string(),
        }
    }
}

impl PriceFormatter {
    pub fn format(&self, value: f64) -> String {
        let grouped = group_thousands(round_half_up(value * self.scale));
        let localized = self.digits.localize(&grouped);
        if self.currency.is_empty() {
            localized
        } else {
            format!("{} {}", localized, self.currency)
        }
    }
}

/// Format an integer counter value without grouping.
pub fn format_count(value: u64, digits: DigitStyle) -> String {
    digits.localize(&value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(112_800), "112,800");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(-45_000), "-45,000");
    }

    #[test]
    fn persian_digit_substitution() {
        assert_eq!(DigitStyle::Persian.localize("1,234"), "۱,۲۳۴");
        assert_eq!(DigitStyle::Latin.localize("1,234"), "1,234");
        assert_eq!(DigitStyle::Persian.localize("abc"), "abc");
    }

    #[test]
    fn formats_price_like_the_tooltip() {
        let formatter = PriceFormatter::default();
        assert_eq!(formatter.format(112.8), "۱۱۲,۸۰۰ ریال");
        // 112.6 * 1000 is slightly below 112600 in binary floating point.
        assert_eq!(formatter.format(112.6), "۱۱۲,۶۰۰ ریال");
    }

    #[test]
    fn latin_price_without_currency() {
        let formatter = PriceFormatter {
            digits: DigitStyle::Latin,
            scale: 1.0,
            currency: String::new(),
        };
        assert_eq!(formatter.format(1234.5), "1,235");
        assert_eq!(formatter.format(-0.5), "0");
    }

    #[test]
    fn half_way_cases_round_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(2.4), 2);
        assert_eq!(round_half_up(-2.6), -3);
        // Largest double below 0.5; adding 0.5 to it rounds to 1.0.
        assert_eq!(round_half_up(0.499_999_999_999_999_94), 0);
    }

    #[test]
    fn counter_values_are_not_grouped() {
        assert_eq!(format_count(12500, DigitStyle::Persian), "۱۲۵۰۰");
        assert_eq!(format_count(42, DigitStyle::Latin), "42");
    }
}
