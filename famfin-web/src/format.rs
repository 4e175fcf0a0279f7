/// `1234.5` -> `"$1,234.50"`.
pub fn money(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{sign}${grouped}.{cents}")
}

/// Budget usage as a whole percentage, e.g. `64%`.
pub fn percent(value: f64) -> String {
    format!("{value:.0}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money() {
        assert_eq!(money(0.0), "$0.00");
        assert_eq!(money(999.999), "$1,000.00");
        assert_eq!(money(1234.5), "$1,234.50");
        assert_eq!(money(120_000.0), "$120,000.00");
        assert_eq!(money(-42.1), "-$42.10");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(64.0), "64%");
        assert_eq!(percent(99.6), "100%");
    }
}
