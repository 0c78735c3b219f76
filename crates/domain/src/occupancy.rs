// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-side projections over reservations and rooms.
//!
//! Everything here is recomputed from the entities passed in; nothing is
//! cached and nothing is written.

use crate::dates::DateSpan;
use crate::reservation::{Reservation, StageStatus};
use crate::room::{Room, RoomStatus};
use serde::{Deserialize, Serialize};
use time::Date;

/// Reservation activity on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: Date,
    /// Non-cancelled reservations whose stay covers the night of `date`.
    pub reservation_count: u32,
    pub checkins: u32,
    pub checkouts: u32,
}

/// Builds one `CalendarDay` per day of `span`.
#[must_use]
pub fn calendar_days(span: &DateSpan, reservations: &[Reservation]) -> Vec<CalendarDay> {
    let live: Vec<&Reservation> = reservations.iter().filter(|r| !r.is_cancelled()).collect();
    span.days()
        .map(|date| {
            let mut day = CalendarDay {
                date,
                reservation_count: 0,
                checkins: 0,
                checkouts: 0,
            };
            for reservation in &live {
                if reservation.stay.covers(date) {
                    day.reservation_count += 1;
                }
                if reservation.stay.check_in() == date {
                    day.checkins += 1;
                }
                if reservation.stay.check_out() == date {
                    day.checkouts += 1;
                }
            }
            day
        })
        .collect()
}

/// Direction of a guest movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    CheckIn,
    CheckOut,
}

impl MovementKind {
    /// The date on which `reservation` makes this movement.
    #[must_use]
    pub const fn date_of(self, reservation: &Reservation) -> Date {
        match self {
            Self::CheckIn => reservation.stay.check_in(),
            Self::CheckOut => reservation.stay.check_out(),
        }
    }
}

/// Non-cancelled reservations making `kind` movement within `span`, ordered
/// by date then reservation id.
#[must_use]
pub fn movements_within<'a>(
    kind: MovementKind,
    span: &DateSpan,
    reservations: &'a [Reservation],
) -> Vec<&'a Reservation> {
    let mut selected: Vec<&Reservation> = reservations
        .iter()
        .filter(|r| !r.is_cancelled() && span.contains(kind.date_of(r)))
        .collect();
    selected.sort_by(|a, b| (kind.date_of(a), &a.id).cmp(&(kind.date_of(b), &b.id)));
    selected
}

/// Room count per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomStatusOverview {
    pub available: u32,
    pub reserved: u32,
    pub occupied: u32,
    pub maintenance: u32,
    pub total: u32,
}

impl RoomStatusOverview {
    /// Counts rooms by their current status.
    #[must_use]
    pub fn from_rooms<'a>(rooms: impl IntoIterator<Item = &'a Room>) -> Self {
        rooms.into_iter().fold(Self::default(), |mut overview, room| {
            match room.status {
                RoomStatus::Available => overview.available += 1,
                RoomStatus::Reserved => overview.reserved += 1,
                RoomStatus::Occupied => overview.occupied += 1,
                RoomStatus::Maintenance => overview.maintenance += 1,
            }
            overview.total += 1;
            overview
        })
    }

    /// Occupied rooms as a percentage of all rooms, rounded to one decimal.
    ///
    /// A property with no rooms has a rate of zero.
    #[must_use]
    pub fn occupancy_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let rate = f64::from(self.occupied) / f64::from(self.total) * 100.0;
        (rate * 10.0).round() / 10.0
    }
}

/// Arrivals expected on `date` that have not been confirmed yet.
#[must_use]
pub fn pending_arrivals_on(date: Date, reservations: &[Reservation]) -> u32 {
    count_where(reservations, |r| {
        r.stay.check_in() == date && r.check_in_status == StageStatus::Pending
    })
}

/// Departures expected on `date` that have not been confirmed yet.
#[must_use]
pub fn pending_departures_on(date: Date, reservations: &[Reservation]) -> u32 {
    count_where(reservations, |r| {
        r.stay.check_out() == date && r.check_out_status == StageStatus::Pending
    })
}

fn count_where(reservations: &[Reservation], predicate: impl Fn(&Reservation) -> bool) -> u32 {
    reservations
        .iter()
        .filter(|r| !r.is_cancelled() && predicate(r))
        .fold(0, |count, _| count + 1)
}
