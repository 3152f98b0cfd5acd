//! Date arithmetic for weekly schedule requests.
//!
//! The schedule endpoint returns a 7-day window starting at a given date.
//! [`week_start_dates`] picks the anchors needed to cover a date range and
//! [`ScheduleWindow`] captures whether a range was requested at all.

use chrono::{Days, NaiveDate};

use crate::error::GoalsError;

/// Canonical date format used by the API and by every input and output.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Number of days covered by one weekly schedule document.
pub const DAYS_PER_WEEK: i64 = 7;

/// Parses a `YYYY-MM-DD` string into a naive date.
///
/// # Errors
///
/// Returns [`GoalsError::InvalidDate`] if `input` does not match
/// [`DATE_FORMAT`].
pub fn parse_date(input: &str) -> Result<NaiveDate, GoalsError> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|source| GoalsError::InvalidDate {
        input: input.to_string(),
        source,
    })
}

/// Formats a date as zero-padded `YYYY-MM-DD`.
#[must_use]
pub fn fmt_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Normalizes a date string into canonical `YYYY-MM-DD`, e.g.
/// `"2024-1-8"` becomes `"2024-01-08"`.
///
/// # Errors
///
/// Returns [`GoalsError::InvalidDate`] if `input` is not a date.
pub fn normalize_date(input: &str) -> Result<String, GoalsError> {
    parse_date(input).map(fmt_date)
}

/// Start dates of the weekly schedule requests covering `from..=to`.
///
/// For a positive span of `n` days this yields `n / 7 + 1` anchors spaced
/// seven days apart starting at `from`. A zero-length or inverted span
/// yields `[from]`.
#[must_use]
pub fn week_start_dates(from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    let num_days = (to - from).num_days();
    let anchors: Vec<NaiveDate> = if num_days > 0 {
        let num_weeks = num_days / DAYS_PER_WEEK + 1;
        (0..num_weeks.unsigned_abs())
            .map_while(|i| from.checked_add_days(Days::new(i * DAYS_PER_WEEK.unsigned_abs())))
            .collect()
    } else {
        vec![from]
    };
    tracing::debug!(%from, %to, num_days, ?anchors, "week start dates");
    anchors
}

/// Inclusive date range with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range. An `end` before `start` is logged and clamped so
    /// that `start` becomes both bounds.
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if end < start {
            tracing::warn!(%start, %end, "end date is before start date, using start date only");
            return Self { start, end: start };
        }
        Self { start, end }
    }

    /// First day of the range.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range (inclusive).
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Weekly schedule anchors covering this range.
    #[must_use]
    pub fn week_starts(&self) -> Vec<NaiveDate> {
        week_start_dates(self.start, self.end)
    }
}

/// Which schedule documents a run should request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleWindow {
    /// No start date: a single request for the current schedule week.
    Current,
    /// Explicit date range.
    Range(DateRange),
}

impl ScheduleWindow {
    /// Builds a window from optional user-supplied date strings.
    ///
    /// An absent or empty `start` selects [`ScheduleWindow::Current`] and
    /// `end` is ignored. An absent or empty `end` defaults to `start`.
    ///
    /// # Errors
    ///
    /// Returns [`GoalsError::InvalidDate`] if either date is malformed.
    pub fn from_args(start: Option<&str>, end: Option<&str>) -> Result<Self, GoalsError> {
        let Some(start) = start.filter(|s| !s.is_empty()) else {
            return Ok(Self::Current);
        };
        let start = parse_date(start)?;
        let end = match end.filter(|s| !s.is_empty()) {
            Some(end) => parse_date(end)?,
            None => start,
        };
        Ok(Self::Range(DateRange::new(start, end)))
    }

    /// Last day whose games are kept, if any bound applies.
    #[must_use]
    pub const fn upper_bound(&self) -> Option<NaiveDate> {
        match self {
            Self::Current => None,
            Self::Range(range) => Some(range.end()),
        }
    }
}
