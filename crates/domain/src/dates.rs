// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar helpers: stay periods, inclusive spans and ISO date text.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::{Date, Duration, Month};

/// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the text is not a real calendar date.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(value.trim(), &format).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Returns the number of days in a month.
#[must_use]
pub const fn days_in_month(year: i32, month: Month) -> u8 {
    match month {
        Month::February => {
            if time::util::is_leap_year(year) {
                29
            } else {
                28
            }
        }
        Month::April | Month::June | Month::September | Month::November => 30,
        _ => 31,
    }
}

/// A stay expressed as the half-open interval `[check_in, check_out)`.
///
/// The check-out day is not a night of the stay, so back-to-back stays on the
/// same room never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StayPeriod {
    check_in: Date,
    check_out: Date,
}

impl StayPeriod {
    /// Creates a stay period.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStayPeriod` unless `check_out > check_in`.
    pub fn new(check_in: Date, check_out: Date) -> Result<Self, DomainError> {
        if check_out <= check_in {
            return Err(DomainError::InvalidStayPeriod {
                check_in,
                check_out,
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Returns the check-in date.
    #[must_use]
    pub const fn check_in(&self) -> Date {
        self.check_in
    }

    /// Returns the check-out date.
    #[must_use]
    pub const fn check_out(&self) -> Date {
        self.check_out
    }

    /// Returns true if the two stays share at least one night.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }

    /// Returns true if `date` is a night of this stay.
    #[must_use]
    pub fn covers(&self, date: Date) -> bool {
        self.check_in <= date && date < self.check_out
    }

    /// Returns true if any night of the stay falls inside `span`.
    #[must_use]
    pub fn intersects(&self, span: &DateSpan) -> bool {
        self.check_in <= span.last() && span.first() < self.check_out
    }

    /// Returns the number of nights.
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).whole_days()
    }
}

/// An inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    first: Date,
    last: Date,
}

impl DateSpan {
    /// A span covering a single day.
    #[must_use]
    pub const fn day(date: Date) -> Self {
        Self {
            first: date,
            last: date,
        }
    }

    /// The span covering every day of a calendar month.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCalendarMonth` if `month` is not 1-12 or the
    /// year is outside the supported range.
    pub fn month(year: i32, month: u8) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidCalendarMonth { year, month };
        let calendar_month: Month = Month::try_from(month).map_err(|_| invalid())?;
        let first = Date::from_calendar_date(year, calendar_month, 1).map_err(|_| invalid())?;
        let last = Date::from_calendar_date(
            year,
            calendar_month,
            days_in_month(year, calendar_month),
        )
        .map_err(|_| invalid())?;
        Ok(Self { first, last })
    }

    /// The Monday-to-Sunday week containing `date`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateOutOfRange` at the edges of the calendar.
    pub fn week_of(date: Date) -> Result<Self, DomainError> {
        let offset = i64::from(date.weekday().number_days_from_monday());
        let first = date
            .checked_sub(Duration::days(offset))
            .ok_or(DomainError::DateOutOfRange)?;
        let last = first
            .checked_add(Duration::days(6))
            .ok_or(DomainError::DateOutOfRange)?;
        Ok(Self { first, last })
    }

    /// The calendar month containing `date`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCalendarMonth` at the edges of the calendar.
    pub fn month_of(date: Date) -> Result<Self, DomainError> {
        Self::month(date.year(), u8::from(date.month()))
    }

    /// Returns the first day of the span.
    #[must_use]
    pub const fn first(&self) -> Date {
        self.first
    }

    /// Returns the last day of the span.
    #[must_use]
    pub const fn last(&self) -> Date {
        self.last
    }

    /// Returns true if `date` lies within the span.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.first <= date && date <= self.last
    }

    /// Iterates every day of the span in order.
    pub fn days(&self) -> impl Iterator<Item = Date> + use<> {
        let last = self.last;
        std::iter::successors(Some(self.first), |d| d.next_day()).take_while(move |d| *d <= last)
    }
}

/// Reporting window for movement lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MovementPeriod {
    /// The current property-local day.
    #[default]
    Today,
    /// Monday to Sunday of the current week.
    Week,
    /// The current calendar month.
    Month,
}

status_labels!(MovementPeriod, "movement period", {
    Today => "today" | "hoje",
    Week => "week" | "semana",
    Month => "month" | "mes" | "mês",
});

impl MovementPeriod {
    /// Resolves the period to concrete days relative to `today`.
    ///
    /// # Errors
    ///
    /// Returns an error at the edges of the supported calendar.
    pub fn span(self, today: Date) -> Result<DateSpan, DomainError> {
        match self {
            Self::Today => Ok(DateSpan::day(today)),
            Self::Week => DateSpan::week_of(today),
            Self::Month => DateSpan::month_of(today),
        }
    }
}
