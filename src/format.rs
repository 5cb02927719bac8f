//! Rupee formatting using the Indian numbering system (thousand, lakh, crore)

const CRORE: f64 = 10_000_000.0;
const LAKH: f64 = 100_000.0;
const THOUSAND: f64 = 1_000.0;

/// Placeholder shown for NaN or infinite amounts
const NOT_A_NUMBER: &str = "₹—";

/// Abbreviated rupee amount: ₹1.23 Cr, ₹2.50 L, ₹5K, ₹999
///
/// The unit is picked after rounding, so 999.6 shows as ₹1K and 99,500 as
/// ₹1.00 L rather than ₹1,000 or ₹100K.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return NOT_A_NUMBER.to_string();
    }

    let abs_amount = amount.abs();
    let rupees = abs_amount.round();
    // Whole thousands double as hundredths of a lakh, whole lakhs as hundredths of a crore
    let thousands = (abs_amount / THOUSAND).round();
    let lakhs = (abs_amount / LAKH).round();
    let sign = if amount < 0.0 && rupees > 0.0 { "-" } else { "" };

    if thousands >= CRORE / THOUSAND {
        format!("{}₹{:.2} Cr", sign, lakhs / 100.0)
    } else if thousands >= LAKH / THOUSAND {
        format!("{}₹{:.2} L", sign, thousands / 100.0)
    } else if rupees >= THOUSAND {
        format!("{}₹{:.0}K", sign, thousands)
    } else {
        format!("{}₹{}", sign, group_indian_digits(rupees as u64))
    }
}

/// Full rupee amount without abbreviation: ₹12,34,567
pub fn format_rupees(amount: f64) -> String {
    if !amount.is_finite() {
        return NOT_A_NUMBER.to_string();
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}₹{}", sign, group_indian_digits(amount.abs().round() as u64))
}

/// Integer with Indian digit grouping (12,34,567), no currency symbol
pub fn format_indian_grouped(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let grouped = group_indian_digits(amount.abs().round() as u64);
    if amount < 0.0 && grouped != "0" {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Last three digits together, then pairs: 1234567 -> 12,34,567
fn group_indian_digits(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Percentage with two decimals from an annual percent figure (12.5 -> "12.50%")
pub fn format_percent(percent: f64) -> String {
    format!("{:.2}%", percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviations() {
        assert_eq!(format_currency(12_345_678.0), "₹1.23 Cr");
        assert_eq!(format_currency(250_000.0), "₹2.50 L");
        assert_eq!(format_currency(5_000.0), "₹5K");
        assert_eq!(format_currency(999.0), "₹999");
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        assert_eq!(format_currency(10_000_000.0), "₹1.00 Cr");
        assert_eq!(format_currency(100_000.0), "₹1.00 L");
        assert_eq!(format_currency(1_000.0), "₹1K");
        assert_eq!(format_currency(0.0), "₹0");
    }

    #[test]
    fn test_unit_follows_rounded_value() {
        assert_eq!(format_currency(999.4), "₹999");
        assert_eq!(format_currency(999.5), "₹1K");
        assert_eq!(format_currency(99_499.0), "₹99K");
        assert_eq!(format_currency(99_500.0), "₹1.00 L");
        assert_eq!(format_currency(9_950_000.0), "₹99.50 L");
        assert_eq!(format_currency(9_999_500.0), "₹1.00 Cr");
        assert_eq!(format_currency(-999.7), "-₹1K");
        assert_eq!(format_currency(-0.2), "₹0");
    }

    #[test]
    fn test_thousands_round_to_integer() {
        assert_eq!(format_currency(28_403.51), "₹28K");
        assert_eq!(format_currency(28_791.87), "₹29K");
    }

    #[test]
    fn test_negative_and_non_finite() {
        assert_eq!(format_currency(-250_000.0), "-₹2.50 L");
        assert_eq!(format_currency(f64::NAN), "₹—");
        assert_eq!(format_rupees(f64::INFINITY), "₹—");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(format_indian_grouped(0.0), "0");
        assert_eq!(format_indian_grouped(999.0), "999");
        assert_eq!(format_indian_grouped(1_000.0), "1,000");
        assert_eq!(format_indian_grouped(100_000.0), "1,00,000");
        assert_eq!(format_indian_grouped(1_234_567.0), "12,34,567");
        assert_eq!(format_indian_grouped(123_456_789.0), "12,34,56,789");
        assert_eq!(format_indian_grouped(-4_316_843.3), "-43,16,843");
        assert_eq!(format_indian_grouped(-0.2), "0");
    }

    #[test]
    fn test_full_rupees() {
        assert_eq!(format_rupees(2_500_000.0), "₹25,00,000");
        assert_eq!(format_rupees(28_403.51), "₹28,404");
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(12.5), "12.50%");
    }
}
