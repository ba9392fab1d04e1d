use chrono::NaiveDate;

/// `January 15, 2024`, used on the blog list and post pages.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// `1/15/2024`, used on the home screen cards.
pub fn short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

pub fn copyright_line(year: i32, owner: &str) -> String {
    format!("© {year} {owner}. All rights reserved.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_formats() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(long_date(date), "January 5, 2024");
        assert_eq!(short_date(date), "1/5/2024");

        let date = NaiveDate::from_ymd_opt(2023, 12, 20).unwrap();
        assert_eq!(long_date(date), "December 20, 2023");
        assert_eq!(short_date(date), "12/20/2023");
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright_line(2026, "Alex Johnson"),
            "© 2026 Alex Johnson. All rights reserved."
        );
    }
}
