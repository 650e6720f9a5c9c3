//! Human-readable nickname and status strings

use ticker_quote::{PriceChange, Quote};

/// Format `value` with `decimals` fraction digits, optionally grouping
/// thousands with commas
///
/// Negative values keep the `-` produced by the standard formatter.
pub fn format_fixed(value: f64, decimals: usize, thousands: bool) -> String {
    let formatted = format!("{value:.decimals$}");
    if !thousands {
        return formatted;
    }

    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(formatted.len() + integer.len() / 3);
    out.push_str(sign);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Like [`format_fixed`], with a `+` in front of non-negative output
///
/// The sign is decided on the formatted text so a value such as `-0.0` never
/// ends up as `+-0.00`.
pub fn format_signed(value: f64, decimals: usize, thousands: bool) -> String {
    let formatted = format_fixed(value, decimals, thousands);
    if formatted.starts_with('-') {
        formatted
    } else {
        format!("+{formatted}")
    }
}

/// Nickname, e.g. `TAIEX: 17,523.45`
pub fn nickname(label: &str, price: f64) -> String {
    format!("{label}: {}", format_fixed(price, 2, true))
}

/// Status line, e.g. `+23.45 (+0.13%)`
pub fn change_status(change: &PriceChange) -> String {
    format!(
        "{} ({}%)",
        format_signed(change.change, 2, true),
        format_signed(change.percent_change, 2, false)
    )
}

/// The two strings published each cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceText {
    pub nickname: String,
    pub status: String,
}

impl PresenceText {
    /// Build the texts for `quote`, or `None` when the quote carries no price
    pub fn from_quote(quote: &Quote, label: &str, unavailable_status: &str) -> Option<Self> {
        let price = quote.latest_price?;

        let status = match &quote.change {
            Some(change) => change_status(change),
            None => unavailable_status.to_string(),
        };

        Some(Self {
            nickname: nickname(label, price),
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_fixed_thousands() {
        assert_eq!(format_fixed(17523.45, 2, true), "17,523.45");
        assert_eq!(format_fixed(1234567.891, 2, true), "1,234,567.89");
        assert_eq!(format_fixed(999.999, 2, true), "1,000.00");
        assert_eq!(format_fixed(100.0, 2, true), "100.00");
        assert_eq!(format_fixed(0.5, 2, true), "0.50");
        assert_eq!(format_fixed(-1234.5, 2, true), "-1,234.50");
        assert_eq!(format_fixed(-100.0, 2, true), "-100.00");
        assert_eq!(format_fixed(123456.0, 0, true), "123,456");
    }

    #[test]
    fn test_format_fixed_plain() {
        assert_eq!(format_fixed(17523.45, 2, false), "17523.45");
        assert_eq!(format_fixed(0.134, 2, false), "0.13");
        assert_eq!(format_fixed(-0.5714, 2, false), "-0.57");
    }

    #[test]
    fn test_format_signed() {
        assert_eq!(format_signed(23.45, 2, true), "+23.45");
        assert_eq!(format_signed(0.0, 2, false), "+0.00");
        assert_eq!(format_signed(-100.0, 2, true), "-100.00");
        assert_eq!(format_signed(-0.0, 2, false), "-0.00");
        assert_eq!(format_signed(1500.0, 2, true), "+1,500.00");
    }

    #[test]
    fn test_rising_quote() {
        let quote = Quote::with_previous_close(17523.45, 17500.0);
        let text = PresenceText::from_quote(&quote, "TAIEX", "n/a").unwrap();

        assert_eq!(text.nickname, "TAIEX: 17,523.45");
        assert_eq!(text.status, "+23.45 (+0.13%)");
    }

    #[test]
    fn test_falling_quote() {
        let quote = Quote::with_previous_close(17400.0, 17500.0);
        let text = PresenceText::from_quote(&quote, "TAIEX", "n/a").unwrap();

        assert_eq!(text.nickname, "TAIEX: 17,400.00");
        assert_eq!(text.status, "-100.00 (-0.57%)");
    }

    #[test]
    fn test_price_only_quote() {
        let quote = Quote::price_only(17523.45);
        let text = PresenceText::from_quote(&quote, "TAIEX", "Change unavailable").unwrap();

        assert_eq!(text.nickname, "TAIEX: 17,523.45");
        assert_eq!(text.status, "Change unavailable");
    }

    #[test]
    fn test_unavailable_quote() {
        assert_eq!(PresenceText::from_quote(&Quote::unavailable(), "TAIEX", "n/a"), None);
    }

    #[test]
    fn test_zero_previous_close_status() {
        let quote = Quote::with_previous_close(100.0, 0.0);
        let text = PresenceText::from_quote(&quote, "TAIEX", "n/a").unwrap();

        assert_eq!(text.status, "+100.00 (+0.00%)");
    }
}
