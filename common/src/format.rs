use chrono::NaiveDate;

/// Renders an amount stored in minor currency units (cents) as a display
/// string, e.g. `123456` -> `"$1,234.56"`.
pub fn format_currency(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let dollars = (cents / 100).abs();
    let remainder = (cents % 100).abs();

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}${}.{:02}", sign, grouped, remainder)
}

/// Renders an ISO date as a short locale string, e.g. `"Oct 5, 2023"`.
pub fn format_date_to_local(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_cents_with_thousands_separators() {
        assert_eq!(format_currency(123456), "$1,234.56");
        assert_eq!(format_currency(100000000), "$1,000,000.00");
    }

    #[test]
    fn formats_small_amounts() {
        assert_eq!(format_currency(0), "$0.00");
        assert_eq!(format_currency(5), "$0.05");
        assert_eq!(format_currency(50), "$0.50");
        assert_eq!(format_currency(999), "$9.99");
    }

    #[test]
    fn formats_dates_without_zero_padding() {
        let date = NaiveDate::from_ymd_opt(2023, 10, 5).unwrap();
        assert_eq!(format_date_to_local(date), "Oct 5, 2023");

        let date = NaiveDate::from_ymd_opt(2022, 12, 25).unwrap();
        assert_eq!(format_date_to_local(date), "Dec 25, 2022");
    }
}
