use chrono::NaiveDate;

/// Render an ISO `YYYY-MM-DD` value the way the date picker displays it.
///
/// Returns `None` for anything that does not parse as a date.
#[must_use]
pub fn format_date_label(iso: &str) -> Option<String> {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .ok()
        .map(|date| date.format("%m-%d-%Y").to_string())
}
