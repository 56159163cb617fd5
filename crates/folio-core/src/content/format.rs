//! Text helpers shared by section and detail views

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use super::records::Featured;

/// Shown in place of a date that does not parse
pub const INVALID_DATE: &str = "Invalid Date";

/// An uppercase letter that starts a new word inside a camelCase key
static WORD_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("Invalid word boundary regex"));

/// Format an ISO date (`2024-01-15`) as a long US English date
/// (`January 15, 2024`).
///
/// The input is a calendar date, so no timezone conversion is applied.
/// Anything that is not a valid `YYYY-MM-DD` date yields [`INVALID_DATE`].
pub fn format_long_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%B %-d, %Y").to_string(),
        Err(_) => INVALID_DATE.to_string(),
    }
}

/// Turn a metric key into a display label.
///
/// Splits camelCase words and capitalizes the first letter:
/// `"downloads"` -> `"Downloads"`, `"activeUsers"` -> `"Active Users"`.
pub fn humanize_key(key: &str) -> String {
    let spaced = WORD_BOUNDARY.replace_all(key.trim(), "$1 $2");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Split entries into `(featured, other)`, preserving source order in both.
///
/// Every entry lands in exactly one of the two lists.
pub fn partition_featured<T: Featured>(entries: &[T]) -> (Vec<&T>, Vec<&T>) {
    entries.iter().partition(|entry| entry.is_featured())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Entry(u8, bool);

    impl Featured for Entry {
        fn is_featured(&self) -> bool {
            self.1
        }
    }

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date("2024-01-15"), "January 15, 2024");
        assert_eq!(format_long_date("2023-12-01"), "December 1, 2023");
        assert_eq!(format_long_date("2023-11-20"), "November 20, 2023");
    }

    #[test]
    fn test_format_long_date_invalid() {
        assert_eq!(format_long_date("not a date"), INVALID_DATE);
        assert_eq!(format_long_date("2024-02-30"), INVALID_DATE);
        assert_eq!(format_long_date(""), INVALID_DATE);
    }

    #[test]
    fn test_humanize_key() {
        assert_eq!(humanize_key("downloads"), "Downloads");
        assert_eq!(humanize_key("activeUsers"), "Active Users");
        assert_eq!(humanize_key("uptime"), "Uptime");
        assert_eq!(humanize_key(""), "");
    }

    #[test]
    fn test_partition_featured_is_stable_and_total() {
        let entries = vec![
            Entry(0, false),
            Entry(1, true),
            Entry(2, false),
            Entry(3, true),
            Entry(4, false),
        ];
        let (featured, other) = partition_featured(&entries);

        let featured: Vec<u8> = featured.iter().map(|e| e.0).collect();
        let other: Vec<u8> = other.iter().map(|e| e.0).collect();
        assert_eq!(featured, vec![1, 3]);
        assert_eq!(other, vec![0, 2, 4]);
    }

    #[test]
    fn test_partition_featured_empty() {
        let entries: Vec<Entry> = vec![];
        let (featured, other) = partition_featured(&entries);
        assert!(featured.is_empty());
        assert!(other.is_empty());
    }
}
