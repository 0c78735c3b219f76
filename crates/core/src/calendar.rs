// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::names::Names;
use crate::property::Shared;
use inn_domain::{
    CalendarDay, DateSpan, MovementKind, MovementPeriod, Reservation, ReservationId, Room, RoomId,
    RoomStatusOverview, calendar_days, movements_within, pending_arrivals_on,
    pending_departures_on,
};
use time::Date;

/// One arrival or departure, with names resolved for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementEntry {
    pub reservation_id: ReservationId,
    pub kind: MovementKind,
    /// Check-in date for arrivals, check-out date for departures.
    pub date: Date,
    pub party_name: String,
    pub room_id: RoomId,
    pub room_identifier: String,
    pub guests_count: u32,
}

/// Arrivals and departures over an inclusive range of days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movements {
    pub first: Date,
    pub last: Date,
    pub checkins: Vec<MovementEntry>,
    pub checkouts: Vec<MovementEntry>,
}

/// Front-desk summary for today.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub date: Date,
    /// Occupied rooms as a percentage of all rooms, one decimal.
    pub occupancy_rate: f64,
    pub pending_checkins: u32,
    pub pending_checkouts: u32,
    pub maintenance_rooms: u32,
    pub rooms: RoomStatusOverview,
    pub movements: Movements,
}

/// Read-only occupancy views, recomputed from the store on every call.
pub struct OccupancyCalendar<'a> {
    shared: &'a Shared,
}

impl<'a> OccupancyCalendar<'a> {
    pub(crate) const fn new(shared: &'a Shared) -> Self {
        Self { shared }
    }

    /// Reservation counts for every day of a month.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the month is not 1-12, or an error if the
    /// store fails.
    pub fn get_month(&self, year: i32, month: u8) -> Result<Vec<CalendarDay>, CoreError> {
        let span: DateSpan = DateSpan::month(year, month)?;
        let reservations: Vec<Reservation> = self.shared.store.reservations()?;
        Ok(calendar_days(&span, &reservations))
    }

    /// Arrivals and departures on one day.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn get_day_movements(&self, date: Date) -> Result<Movements, CoreError> {
        self.movements_for(DateSpan::day(date))
    }

    /// Arrivals and departures over a period relative to the property-local
    /// today.
    ///
    /// # Errors
    ///
    /// Returns an error at the edges of the calendar or if the store fails.
    pub fn movements(&self, period: MovementPeriod) -> Result<Movements, CoreError> {
        let span: DateSpan = period.span(self.shared.clock.today())?;
        self.movements_for(span)
    }

    /// Today's front-desk summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn dashboard(&self) -> Result<Dashboard, CoreError> {
        let today: Date = self.shared.clock.today();
        let rooms: Vec<Room> = self.shared.store.rooms()?;
        let reservations: Vec<Reservation> = self.shared.store.reservations()?;
        let overview: RoomStatusOverview = RoomStatusOverview::from_rooms(&rooms);
        let names: Names = Names::load(self.shared.store.as_ref(), &rooms)?;

        Ok(Dashboard {
            date: today,
            occupancy_rate: overview.occupancy_rate(),
            pending_checkins: pending_arrivals_on(today, &reservations),
            pending_checkouts: pending_departures_on(today, &reservations),
            maintenance_rooms: overview.maintenance,
            rooms: overview,
            movements: build_movements(DateSpan::day(today), &reservations, &names),
        })
    }

    fn movements_for(&self, span: DateSpan) -> Result<Movements, CoreError> {
        let rooms: Vec<Room> = self.shared.store.rooms()?;
        let reservations: Vec<Reservation> = self.shared.store.reservations()?;
        let names: Names = Names::load(self.shared.store.as_ref(), &rooms)?;
        Ok(build_movements(span, &reservations, &names))
    }
}

fn build_movements(span: DateSpan, reservations: &[Reservation], names: &Names) -> Movements {
    let entries = |kind: MovementKind| -> Vec<MovementEntry> {
        movements_within(kind, &span, reservations)
            .into_iter()
            .map(|r| MovementEntry {
                reservation_id: r.id.clone(),
                kind,
                date: kind.date_of(r),
                party_name: names.party(&r.party),
                room_id: r.room_id.clone(),
                room_identifier: names.room(&r.room_id),
                guests_count: r.guests_count,
            })
            .collect()
    };

    Movements {
        first: span.first(),
        last: span.last(),
        checkins: entries(MovementKind::CheckIn),
        checkouts: entries(MovementKind::CheckOut),
    }
}
