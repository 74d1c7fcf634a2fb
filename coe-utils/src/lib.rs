//! Shared utility functions for COE crates.

/// Currency and number display helpers.
pub mod format {
    /// Group the integer part of `value` with commas, e.g. `1234567` -> `"1,234,567"`.
    pub fn thousands(value: i64) -> String {
        let digits = value.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if value < 0 {
            out.push('-');
        }
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }

    /// Format a dollar amount rounded to whole dollars: `$133,333`.
    pub fn dollars(value: f64) -> String {
        format!("${}", thousands(value.round() as i64))
    }

    /// Format a dollar amount scaled to thousands: `$100k`.
    pub fn dollars_k(value: f64) -> String {
        format!("${}k", (value / 1000.0).round() as i64)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_thousands() {
            assert_eq!(thousands(0), "0");
            assert_eq!(thousands(999), "999");
            assert_eq!(thousands(1000), "1,000");
            assert_eq!(thousands(1234567), "1,234,567");
            assert_eq!(thousands(-45000), "-45,000");
        }

        #[test]
        fn test_dollars() {
            assert_eq!(dollars(133333.33), "$133,333");
            assert_eq!(dollars(99.5), "$100");
        }

        #[test]
        fn test_dollars_k() {
            assert_eq!(dollars_k(100000.0), "$100k");
            assert_eq!(dollars_k(133333.33), "$133k");
            assert_eq!(dollars_k(0.0), "$0k");
        }
    }
}

/// Calendar month helpers
pub mod months {
    use chrono::Month;

    /// Parse a month name as the backend sends it ("January", "Jan").
    pub fn parse_month(name: &str) -> Option<Month> {
        name.trim().parse::<Month>().ok()
    }

    /// Three-letter label for a month name; unknown names pass through untouched.
    pub fn short_label(name: &str) -> String {
        match parse_month(name) {
            Some(month) => month.name()[..3].to_string(),
            None => name.to_string(),
        }
    }

    /// True when the names are in calendar order (January first).
    pub fn is_calendar_ordered<'a>(names: impl IntoIterator<Item = &'a str>) -> bool {
        let mut last: Option<u32> = None;
        for name in names {
            let Some(month) = parse_month(name) else {
                return false;
            };
            let n = month.number_from_month();
            if last.is_some_and(|prev| n <= prev) {
                return false;
            }
            last = Some(n);
        }
        true
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_month() {
            assert_eq!(parse_month("January"), Some(Month::January));
            assert_eq!(parse_month("sep"), Some(Month::September));
            assert_eq!(parse_month("Smarch"), None);
        }

        #[test]
        fn test_short_label() {
            assert_eq!(short_label("February"), "Feb");
            assert_eq!(short_label("2019"), "2019");
        }

        #[test]
        fn test_calendar_order() {
            assert!(is_calendar_ordered(["January", "March", "December"]));
            assert!(!is_calendar_ordered(["March", "January"]));
            assert!(!is_calendar_ordered(["January", "Nonsense"]));
        }
    }
}
