use chrono::NaiveDate;

/// Formats a stored date as `"Mon YYYY"`.
///
/// Accepts `YYYY-MM` (what the month picker writes) and full `YYYY-MM-DD`
/// strings. A valid year with an out-of-range month degrades to the year; any
/// other input is returned trimmed and unchanged. Blank input yields `""`.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }

    let mut parts = raw.splitn(3, '-');
    let year = parts
        .next()
        .filter(|y| y.len() == 4 && y.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|y| y.parse::<i32>().ok());
    let month = parts
        .next()
        .and_then(|m| m.get(..2).or(Some(m)))
        .and_then(|m| m.parse::<u32>().ok());

    match (year, month) {
        (Some(y), Some(m)) => match NaiveDate::from_ymd_opt(y, m, 1) {
            Some(date) => date.format("%b %Y").to_string(),
            None => y.to_string(),
        },
        (Some(y), None) if raw.len() == 4 => y.to_string(),
        _ => raw.to_string(),
    }
}

/// `"start - end"`, with `"Present"` replacing the end for current roles.
pub fn format_range(start: &str, end: &str, current: bool) -> String {
    let end = if current {
        "Present".to_string()
    } else {
        format_date(end)
    };
    format!("{} - {}", format_date(start), end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_formats_to_empty() {
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("   "), "");
    }

    #[test]
    fn test_partial_month() {
        assert_eq!(format_date("2023-05"), "May 2023");
        assert_eq!(format_date("2019-12"), "Dec 2019");
    }

    #[test]
    fn test_full_date() {
        assert_eq!(format_date("2023-05-14"), "May 2023");
        assert_eq!(format_date("2021-01-31T00:00:00Z"), "Jan 2021");
    }

    #[test]
    fn test_year_only() {
        assert_eq!(format_date("2020"), "2020");
    }

    #[test]
    fn test_invalid_month_degrades_to_year() {
        assert_eq!(format_date("2023-13"), "2023");
        assert_eq!(format_date("2023-00"), "2023");
    }

    #[test]
    fn test_garbage_is_returned_unchanged() {
        assert_eq!(format_date("Summer 2020"), "Summer 2020");
        assert_eq!(format_date("-"), "-");
        assert_eq!(format_date("20x3-05"), "20x3-05");
        assert_eq!(format_date("2023-ab"), "2023-ab");
    }

    #[test]
    fn test_multibyte_input_does_not_panic() {
        assert_eq!(format_date("2023-é"), "2023-é");
        assert_eq!(format_date("日本語"), "日本語");
    }

    #[test]
    fn test_range_current_ignores_end() {
        assert_eq!(format_range("2021-03", "2022-01", true), "Mar 2021 - Present");
        assert_eq!(format_range("2021-03", "2022-01", false), "Mar 2021 - Jan 2022");
        assert_eq!(format_range("", "", false), " - ");
    }
}
