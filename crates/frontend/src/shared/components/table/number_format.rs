//! Number formatting utilities for tables and money cells

use rust_decimal::Decimal;

/// Formats a decimal amount with 2 decimal places, Brazilian grouping:
/// thousands separated by '.', decimals by ',' ("1.234.567,89").
pub fn format_amount(value: Decimal) -> String {
    let formatted = format!("{:.2}", value);

    // Split integer and fractional parts
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));

    // Insert dots every 3 digits from the end of the integer part
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push('.');
        }
        result.push(*c);
    }

    let formatted_integer = result.chars().rev().collect::<String>();

    format!("{},{}", formatted_integer, decimal_part)
}

/// Formats a money value with the currency prefix: "R$ 1.234,56".
pub fn format_brl(value: Decimal) -> String {
    format!("R$ {}", format_amount(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(dec!(1234.56)), "1.234,56");
        assert_eq!(format_amount(dec!(1234567.89)), "1.234.567,89");
        assert_eq!(format_amount(dec!(0)), "0,00");
        assert_eq!(format_amount(dec!(-1234.56)), "-1.234,56");
    }

    #[test]
    fn test_format_amount_rounds_to_cents() {
        assert_eq!(format_amount(dec!(10.999)), "11,00");
        assert_eq!(format_amount(dec!(3299.9)), "3.299,90");
    }

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(dec!(6599.80)), "R$ 6.599,80");
        assert_eq!(format_brl(dec!(89.9)), "R$ 89,90");
    }
}
