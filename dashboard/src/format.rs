//! Display formatting for money and dates.
//!
//! The browser's `Intl` machinery is deliberately avoided so these stay pure
//! and unit-testable on the native target.

/// format an amount as Kenyan shillings with thousands grouping,
/// e.g. `KES 234,890.50`
pub fn kes(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("KES {sign}{grouped}.{frac:02}")
}

/// render an ISO-ish date (`YYYY-MM-DD`, with or without a time suffix) as
/// `DD/MM/YYYY`; anything unparseable comes back as "N/A"
pub fn date(value: &str) -> String {
    let day_part = value.split('T').next().unwrap_or_default();
    let mut parts = day_part.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), Some(d))
            if y.len() == 4 && !m.is_empty() && !d.is_empty()
                && y.chars().all(|c| c.is_ascii_digit())
                && m.chars().all(|c| c.is_ascii_digit())
                && d.chars().all(|c| c.is_ascii_digit()) =>
        {
            format!("{:0>2}/{:0>2}/{y}", d, m)
        }
        _ => "N/A".to_string(),
    }
}

/// like [`date`] but for optional fields
pub fn opt_date(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => date(v),
        _ => "N/A".to_string(),
    }
}

/// render an optional string field, falling back to "N/A"
pub fn or_na(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kes_groups_thousands() {
        assert_eq!(kes(234890.0), "KES 234,890.00");
        assert_eq!(kes(1234567.89), "KES 1,234,567.89");
    }

    #[test]
    fn kes_handles_small_and_negative_amounts() {
        assert_eq!(kes(0.0), "KES 0.00");
        assert_eq!(kes(7.5), "KES 7.50");
        assert_eq!(kes(-950.25), "KES -950.25");
    }

    #[test]
    fn date_renders_day_first() {
        assert_eq!(date("2024-03-09"), "09/03/2024");
        assert_eq!(date("2024-11-30T14:05:00.000Z"), "30/11/2024");
    }

    #[test]
    fn date_rejects_garbage() {
        assert_eq!(date(""), "N/A");
        assert_eq!(date("last tuesday"), "N/A");
        assert_eq!(opt_date(None), "N/A");
        assert_eq!(opt_date(Some("2023-01-15")), "15/01/2023");
    }

    #[test]
    fn or_na_falls_back_for_missing_values() {
        assert_eq!(or_na(Some("SAV-001")), "SAV-001");
        assert_eq!(or_na(Some("")), "N/A");
        assert_eq!(or_na(None), "N/A");
    }
}
