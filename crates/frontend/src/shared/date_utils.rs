/// Utilities for date formatting
///
/// Dates are displayed in the Brazilian DD/MM/YYYY convention across the
/// application.

/// Format an ISO date string to DD/MM/YYYY.
/// Example: "2023-04-15" or "2023-04-15T14:02:26Z" -> "15/04/2023"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Today's date as DD/MM/YYYY, in the browser's local time.
pub fn today() -> String {
    chrono::Local::now().format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2023-04-15"), "15/04/2023");
        assert_eq!(format_date("2023-04-15T14:02:26.123Z"), "15/04/2023");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
    }
}
