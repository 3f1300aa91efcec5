//! Duration calculator for the experience timeline.
//!
//! Role dates in the content are free text ("Jun 2025", "Present"). Nothing here fails
//! outward: an unknown month falls back to January, an unreadable year resolves to `None`,
//! and an unresolved span renders as "0 mos".

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::models::content::{DateRange, Role};

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const PRESENT: &str = "Present";
const ZERO_DURATION: &str = "0 mos";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonthYearError {
    #[error("unrecognized month token '{0}'")]
    UnknownMonth(String),

    #[error("missing year")]
    MissingYear,

    #[error("year token '{0}' is not a number")]
    InvalidYear(String),
}

/// A calendar month. Field order makes the derived `Ord` chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth {
    pub year: i32,
    /// Zero-based: January = 0.
    pub month0: u32,
}

impl YearMonth {
    pub fn new(year: i32, month0: u32) -> Self {
        debug_assert!(month0 < 12, "month0 out of range: {month0}");
        Self { year, month0 }
    }

    pub fn from_date(date: impl Datelike) -> Self {
        Self::new(date.year(), date.month0())
    }

    pub fn short_month(self) -> &'static str {
        MONTH_ABBREVIATIONS[(self.month0 % 12) as usize]
    }

    fn ordinal(self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month0)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.short_month(), self.year)
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// True when a date token means "ongoing" (case-insensitive, anywhere in the string).
pub fn is_present(value: &str) -> bool {
    value.to_lowercase().contains("present")
}

/// Strict month lookup on the first three characters of the token.
pub fn lookup_month(token: &str) -> Result<u32, MonthYearError> {
    let prefix: String = token.chars().take(3).collect::<String>().to_lowercase();
    MONTH_ABBREVIATIONS
        .iter()
        .position(|abbr| abbr.eq_ignore_ascii_case(&prefix))
        .map(|idx| idx as u32)
        .ok_or_else(|| MonthYearError::UnknownMonth(token.to_string()))
}

/// Zero-based month index. Unrecognized tokens resolve to January.
pub fn month_index(token: &str) -> u32 {
    lookup_month(token).unwrap_or_else(|e| {
        debug!("Falling back to January: {e}");
        0
    })
}

pub fn parse_year(token: Option<&str>) -> Result<i32, MonthYearError> {
    let token = token.ok_or(MonthYearError::MissingYear)?;
    token
        .parse::<i32>()
        .map_err(|_| MonthYearError::InvalidYear(token.to_string()))
}

/// Resolves a "Mon YYYY" token against the local clock. See [`parse_month_year_at`].
pub fn parse_month_year(value: &str) -> Option<YearMonth> {
    parse_month_year_at(value, today())
}

/// Resolves a "Mon YYYY" token to a calendar month.
///
/// - empty or "present" (any case) → the month of `today`
/// - unknown month → January of the given year
/// - missing or non-numeric year → `None`
pub fn parse_month_year_at(value: &str, today: NaiveDate) -> Option<YearMonth> {
    if value.is_empty() || is_present(value) {
        return Some(YearMonth::from_date(today));
    }

    let mut tokens = value.split_whitespace();
    let month_token = tokens.next().unwrap_or_default();
    match parse_year(tokens.next()) {
        Ok(year) => Some(YearMonth::new(year, month_index(month_token))),
        Err(e) => {
            debug!(value, "Unresolvable date: {e}");
            None
        }
    }
}

/// Inclusive month span: both endpoint months count, so a single month is 1.
/// Zero or negative when `end` precedes `start`.
pub fn diff_months(start: YearMonth, end: YearMonth) -> i64 {
    end.ordinal() - start.ordinal() + 1
}

/// Human-readable duration, e.g. "2 yrs 1 mo". Non-positive spans render as "0 mos".
pub fn format_duration(total_months: i64) -> String {
    if total_months <= 0 {
        return ZERO_DURATION.to_string();
    }

    let years = total_months / 12;
    let months = total_months % 12;

    let mut parts = Vec::with_capacity(2);
    if years > 0 {
        parts.push(format!("{years} yr{}", if years > 1 { "s" } else { "" }));
    }
    if months > 0 {
        parts.push(format!("{months} mo{}", if months > 1 { "s" } else { "" }));
    }
    parts.join(" ")
}

/// Formats a span that may not have resolved.
pub fn format_span(total_months: Option<i64>) -> String {
    total_months.map_or_else(|| ZERO_DURATION.to_string(), format_duration)
}

/// "<start> — <end>" exactly as written in the content.
pub fn date_range_label(range: &DateRange) -> String {
    format!("{} — {}", range.start, range.end)
}

pub fn role_duration_at(range: &DateRange, today: NaiveDate) -> String {
    let start = parse_month_year_at(&range.start, today);
    let end = parse_month_year_at(&range.end, today);
    format_span(start.zip(end).map(|(s, e)| diff_months(s, e)))
}

pub fn company_summary(roles: &[Role]) -> String {
    company_summary_at(roles, today())
}

/// Earliest start to latest end across all roles, e.g. "Nov 2024 — Present · 2 yrs".
///
/// Roles whose dates do not resolve are left out of the bounds. Empty input gives an
/// empty string; input with no resolvable bounds gives "0 mos".
pub fn company_summary_at(roles: &[Role], today: NaiveDate) -> String {
    if roles.is_empty() {
        return String::new();
    }

    let min_start = roles
        .iter()
        .filter_map(|r| parse_month_year_at(&r.date_range.start, today))
        .min();
    let max_end = roles
        .iter()
        .filter_map(|r| parse_month_year_at(&r.date_range.end, today))
        .max();

    let (Some(start), Some(end)) = (min_start, max_end) else {
        return ZERO_DURATION.to_string();
    };

    let end_label = if roles.iter().any(|r| is_present(&r.date_range.end)) {
        PRESENT.to_string()
    } else {
        end.to_string()
    };

    format!(
        "{start} — {end_label} · {}",
        format_duration(diff_months(start, end))
    )
}
