// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::Datelike;
use chrono_tz::Tz;
use time::{Date, Month, OffsetDateTime};

/// Source of the current instant and the property-local date.
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> OffsetDateTime;

    /// Today's date in the property's timezone.
    fn today(&self) -> Date;
}

/// The wall clock, with "today" resolved in the property's timezone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    #[must_use]
    pub const fn new(tz: Tz) -> Self {
        Self { tz }
    }

    #[must_use]
    pub const fn timezone(&self) -> Tz {
        self.tz
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(Tz::UTC)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }

    fn today(&self) -> Date {
        let local = chrono::Utc::now().with_timezone(&self.tz).date_naive();

        // Convert chrono::NaiveDate to time::Date
        u8::try_from(local.month())
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .zip(u8::try_from(local.day()).ok())
            .and_then(|(month, day)| Date::from_calendar_date(local.year(), month, day).ok())
            .unwrap_or_else(|| OffsetDateTime::now_utc().date())
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: OffsetDateTime,
}

impl FixedClock {
    #[must_use]
    pub const fn new(now: OffsetDateTime) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.now
    }

    fn today(&self) -> Date {
        self.now.date()
    }
}
