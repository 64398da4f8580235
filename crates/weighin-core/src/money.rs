//! USD presentation formatting (`$1,234.56`).

/// Format `amount` as dollars with thousands separators and two decimals.
pub fn format_usd(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let negative = amount.is_sign_negative() && fixed.bytes().any(|b| (b'1'..=b'9').contains(&b));
    let sign = if negative { "-" } else { "" };

    format!("{sign}${}.{frac_part}", group_thousands(int_part))
}

/// Insert `,` every three digits from the right.
fn group_thousands(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let chars: Vec<char> = digits.chars().collect();
    for (i, &ch) in chars.iter().enumerate() {
        out.push(ch);
        let remaining = chars.len() - i - 1;
        if remaining > 0 && remaining % 3 == 0 {
            out.push(',');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_amounts() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(5.5), "$5.50");
        assert_eq!(format_usd(999.999), "$1,000.00");
    }

    #[test]
    fn thousands() {
        assert_eq!(format_usd(291_666.0), "$291,666.00");
        assert_eq!(format_usd(1_234_567.891), "$1,234,567.89");
    }

    #[test]
    fn negatives() {
        assert_eq!(format_usd(-1000.0), "-$1,000.00");
        assert_eq!(format_usd(-0.001), "$0.00");
    }
}
