//! Number formatting for catalog cells

/// Currency prefix for catalog prices
pub const CURRENCY_SYMBOL: &str = "$";

/// Formats a number with `decimals` fraction digits and a comma every three
/// integer digits: `1234.5` with 2 decimals gives `"1,234.50"`.
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, fraction) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match fraction {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Price with two decimals, without currency
pub fn format_price(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Price with two decimals and the currency prefix
pub fn format_price_with_currency(value: f64) -> String {
    format!("{}{}", CURRENCY_SYMBOL, format_price(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(109.95), "109.95");
        assert_eq!(format_price(7.0), "7.00");
        assert_eq!(format_price(0.0), "0.00");
        assert_eq!(format_price(1234.5), "1,234.50");
        assert_eq!(format_price(1234567.891), "1,234,567.89");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
        assert_eq!(format_number_with_decimals(-1234.5, 2), "-1,234.50");
    }

    #[test]
    fn test_currency_prefix() {
        assert_eq!(format_price_with_currency(22.3), "$22.30");
    }
}
