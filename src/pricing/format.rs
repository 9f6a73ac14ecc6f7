//! Display formatting for converted prices
//!
//! Home-currency amounts render as integer LKR with thousands grouping;
//! every other currency renders with its en-US symbol and two decimals.

use super::rates::Currency;

/// Placeholder rendered while conversion is unavailable
pub const UNAVAILABLE: &str = "...";

/// Format a converted amount for display in the given currency
pub fn format_price(amount: f64, currency: Currency) -> String {
    match currency {
        Currency::Lkr => {
            let rounded = amount.round() as i64;
            format!("LKR {}", group_thousands(&rounded.abs().to_string(), rounded < 0))
        }
        other => {
            let rounded = (amount * 100.0).round() / 100.0;
            let negative = rounded < 0.0;
            let cents = (rounded.abs() * 100.0).round() as i64;
            let whole = cents / 100;
            let fraction = cents % 100;
            format!(
                "{}{}.{:02}",
                other.symbol(),
                group_thousands(&whole.to_string(), negative),
                fraction
            )
        }
    }
}

/// Insert en-US thousands separators into a digit string
fn group_thousands(digits: &str, negative: bool) -> String {
    let mut grouped = String::new();
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lkr_renders_integer_with_grouping() {
        assert_eq!(format_price(9_960.0, Currency::Lkr), "LKR 9,960");
        assert_eq!(format_price(128_000.0, Currency::Lkr), "LKR 128,000");
        assert_eq!(format_price(1_234_567.0, Currency::Lkr), "LKR 1,234,567");
        assert_eq!(format_price(950.0, Currency::Lkr), "LKR 950");
    }

    #[test]
    fn test_lkr_rounds_to_whole_rupees() {
        assert_eq!(format_price(9_959.6, Currency::Lkr), "LKR 9,960");
        assert_eq!(format_price(9_959.4, Currency::Lkr), "LKR 9,959");
    }

    #[test]
    fn test_foreign_currencies_render_two_decimals_with_symbol() {
        assert_eq!(format_price(33.2, Currency::Usd), "$33.20");
        assert_eq!(format_price(30.536, Currency::Eur), "€30.54");
        assert_eq!(format_price(26.23, Currency::Gbp), "£26.23");
        assert_eq!(format_price(49.8, Currency::Aud), "A$49.80");
        assert_eq!(format_price(45.484, Currency::Cad), "CA$45.48");
    }

    #[test]
    fn test_foreign_amounts_group_thousands() {
        assert_eq!(format_price(4_266.67, Currency::Usd), "$4,266.67");
        assert_eq!(format_price(1_074.666, Currency::Aud), "A$1,074.67");
    }

    #[test]
    fn test_discounted_cents_round_cleanly() {
        // 33.2 * 0.85 carries floating error; display must be exact cents
        assert_eq!(format_price(33.2 * 0.85, Currency::Usd), "$28.22");
    }
}
