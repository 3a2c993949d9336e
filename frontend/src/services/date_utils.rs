use chrono::NaiveDate;

/// Parse a coupon expiry date (YYYY-MM-DD). Malformed dates yield None
/// and the caller falls back to showing the raw string.
pub fn parse_expiry(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").ok()
}

/// Format an expiry date for display, e.g. "Dec 31, 2026"
pub fn format_expiry(date_str: &str) -> String {
    if let Some(date) = parse_expiry(date_str) {
        date.format("%b %-d, %Y").to_string()
    } else {
        date_str.to_string()
    }
}

/// Whole days from `today` until the expiry date; negative once expired
pub fn days_until(date_str: &str, today: NaiveDate) -> Option<i64> {
    parse_expiry(date_str).map(|expiry| (expiry - today).num_days())
}

/// A coupon counts as expiring soon when its expiry is within 7 days of
/// today (already-expired coupons included)
pub fn is_expiring_soon(date_str: &str, today: NaiveDate) -> bool {
    matches!(days_until(date_str, today), Some(days) if days <= 7)
}

/// Current date from the browser clock
pub fn today() -> NaiveDate {
    use js_sys::Date;
    let now = Date::new_0();
    // JavaScript months are 0-indexed
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}
