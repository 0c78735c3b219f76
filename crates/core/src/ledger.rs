// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::directory::GuestDirectory;
use crate::error::CoreError;
use crate::ids;
use crate::property::Shared;
use crate::registry::{RoomRegistry, Staged};
use crate::snapshot;
use crate::state::{RoomWrite, TransitionResult};
use inn_audit::{Action, Actor, AuditEvent, StateSnapshot, Subject};
use inn_domain::{
    Amount, DomainError, GuestOrCompany, Reservation, ReservationCounters, ReservationId, RoomId,
    StayPeriod,
};
use time::Date;
use tracing::{debug, info, warn};

/// How many times an operation re-acquires room locks after the
/// reservation moved to another room underneath it.
const MAX_ROOM_LOCK_ATTEMPTS: usize = 3;

/// Owns reservations and keeps room status in step with them.
pub struct ReservationLedger<'a> {
    shared: &'a Shared,
}

impl<'a> ReservationLedger<'a> {
    pub(crate) const fn new(shared: &'a Shared) -> Self {
        Self { shared }
    }

    const fn registry(&self) -> RoomRegistry<'a> {
        RoomRegistry::new(self.shared)
    }

    /// Books a room for a stay.
    ///
    /// The overlap check and the claim happen under the room's lock and are
    /// committed together, so two overlapping requests can never both win.
    ///
    /// # Arguments
    ///
    /// * `actor` - The operator making the booking
    /// * `party` - The guest or company the booking is for
    /// * `room_id` - The room to book
    /// * `guests_count` - Number of guests, at least one
    /// * `check_in` - First night of the stay
    /// * `check_out` - Departure day, strictly after `check_in`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The dates or guest count are invalid
    /// - The guest, company or room does not exist
    /// - The room is under maintenance
    /// - Another non-cancelled reservation overlaps the stay
    pub fn create(
        &self,
        actor: &Actor,
        party: &GuestOrCompany,
        room_id: &RoomId,
        guests_count: u32,
        check_in: Date,
        check_out: Date,
    ) -> Result<Reservation, CoreError> {
        let stay: StayPeriod = StayPeriod::new(check_in, check_out)?;
        if guests_count == 0 {
            return Err(DomainError::InvalidGuestsCount(guests_count).into());
        }
        GuestDirectory::new(self.shared).ensure_exists(party)?;
        self.shared.load_room(room_id)?;

        self.shared.locks.with_rooms(&[room_id], || {
            self.ensure_room_claimable(room_id, &stay, None)?;

            let reservation: Reservation = Reservation::book(
                ids::generate(ReservationId::PREFIX),
                party.clone(),
                room_id.clone(),
                guests_count,
                stay,
                self.shared.clock.now(),
            )?;
            let room_write: RoomWrite = self.registry().stage_derived_status(
                room_id,
                &Staged {
                    reservations: &[&reservation],
                    task: None,
                },
            )?;

            let audit_event: AuditEvent = AuditEvent::new(
                actor.clone(),
                Action::new(
                    String::from("CreateReservation"),
                    Some(format!(
                        "Booked room {room_id} for {} night(s)",
                        stay.nights()
                    )),
                ),
                Subject::reservation(&reservation.id),
                StateSnapshot::absent(),
                snapshot::reservation(&reservation),
            );
            let transition: TransitionResult = TransitionResult::new(audit_event)
                .with_reservation(reservation.clone())
                .with_room_write(room_write);
            self.shared.commit(&transition)?;

            info!(
                reservation_id = %reservation.id,
                room_id = %room_id,
                check_in = %check_in,
                check_out = %check_out,
                "Created reservation"
            );
            Ok(reservation)
        })
    }

    /// Marks the guest as arrived; the room becomes occupied.
    ///
    /// # Errors
    ///
    /// Returns an error if the reservation does not exist, is cancelled, was
    /// already checked in, or the room is under maintenance or occupied by
    /// another reservation.
    pub fn confirm_arrival(
        &self,
        actor: &Actor,
        reservation_id: &ReservationId,
    ) -> Result<Reservation, CoreError> {
        self.with_reservation_rooms(reservation_id, None, |current| {
            let arrived: Reservation = current.confirm_arrival(self.shared.clock.now())?;
            let room_id: &RoomId = &current.room_id;

            if let Some(task) = self.shared.store.active_task_for_room(room_id)? {
                return Err(DomainError::RoomUnderMaintenance {
                    room_id: room_id.clone(),
                    task_id: task.id,
                }
                .into());
            }
            if let Some(occupant) = self
                .shared
                .store
                .live_reservations_for_room(room_id)?
                .into_iter()
                .find(|r| r.id != current.id && r.is_in_house())
            {
                return Err(DomainError::RoomOccupied {
                    room_id: room_id.clone(),
                    reservation_id: occupant.id,
                }
                .into());
            }

            self.commit_with_room_status(actor, "ConfirmArrival", current, arrived, None)
        })
    }

    /// Marks the guest as departed and releases the room.
    ///
    /// # Errors
    ///
    /// Returns `PreconditionFailed` if the guest never arrived, or an error if
    /// the reservation does not exist, is cancelled or already departed.
    pub fn confirm_departure(
        &self,
        actor: &Actor,
        reservation_id: &ReservationId,
    ) -> Result<Reservation, CoreError> {
        self.with_reservation_rooms(reservation_id, None, |current| {
            let departed: Reservation = current.confirm_departure(self.shared.clock.now())?;
            self.commit_with_room_status(actor, "ConfirmDeparture", current, departed, None)
        })
    }

    /// Records a payment. The room is not touched.
    ///
    /// # Errors
    ///
    /// Returns an error if the method is blank, the amount is zero, or the
    /// reservation does not exist or is cancelled.
    pub fn register_payment(
        &self,
        actor: &Actor,
        reservation_id: &ReservationId,
        method: &str,
        amount: Amount,
    ) -> Result<Reservation, CoreError> {
        self.with_reservation_rooms(reservation_id, None, |current| {
            let paid: Reservation = current.register_payment(method, amount)?;

            let audit_event: AuditEvent = AuditEvent::new(
                actor.clone(),
                Action::new(
                    String::from("RegisterPayment"),
                    Some(format!("{} {}", method.trim(), amount)),
                ),
                Subject::reservation(&current.id),
                snapshot::reservation(current),
                snapshot::reservation(&paid),
            );
            let transition: TransitionResult =
                TransitionResult::new(audit_event).with_reservation(paid.clone());
            self.shared.commit(&transition)?;

            Ok(paid)
        })
    }

    /// Cancels a reservation and releases its room.
    ///
    /// Cancelling an already cancelled reservation changes nothing and
    /// returns it as stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the reservation does not exist or the store fails.
    pub fn cancel(
        &self,
        actor: &Actor,
        reservation_id: &ReservationId,
    ) -> Result<Reservation, CoreError> {
        self.with_reservation_rooms(reservation_id, None, |current| {
            if current.is_cancelled() {
                debug!(reservation_id = %current.id, "Reservation already cancelled");
                return Ok(current.clone());
            }
            let cancelled: Reservation = current.cancel(self.shared.clock.now())?;
            self.commit_with_room_status(actor, "CancelReservation", current, cancelled, None)
        })
    }

    /// Moves a reservation to another room.
    ///
    /// Both rooms are locked (in id order) and both statuses are re-derived
    /// in the same commit.
    ///
    /// # Errors
    ///
    /// Returns an error if either entity does not exist, the new room equals
    /// the current one, the reservation is cancelled or finished, or the new
    /// room is under maintenance or already claimed for overlapping nights.
    pub fn change_room(
        &self,
        actor: &Actor,
        reservation_id: &ReservationId,
        new_room_id: &RoomId,
    ) -> Result<Reservation, CoreError> {
        self.shared.load_room(new_room_id)?;

        self.with_reservation_rooms(reservation_id, Some(new_room_id), |current| {
            let moved: Reservation = current.move_to(new_room_id.clone())?;
            self.ensure_room_claimable(new_room_id, &moved.stay, Some(&moved.id))?;

            if moved.is_in_house()
                && let Some(occupant) = self
                    .shared
                    .store
                    .live_reservations_for_room(new_room_id)?
                    .into_iter()
                    .find(Reservation::is_in_house)
            {
                return Err(DomainError::RoomOccupied {
                    room_id: new_room_id.clone(),
                    reservation_id: occupant.id,
                }
                .into());
            }

            self.commit_with_room_status(
                actor,
                "ChangeRoom",
                current,
                moved,
                Some(new_room_id),
            )
        })
    }

    /// Returns a reservation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ReservationNotFound` if it does not exist.
    pub fn get(&self, reservation_id: &ReservationId) -> Result<Reservation, CoreError> {
        self.shared.store.reservation(reservation_id)?.ok_or_else(|| {
            DomainError::ReservationNotFound(reservation_id.clone()).into()
        })
    }

    /// Every reservation, ordered by check-in then id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn list(&self) -> Result<Vec<Reservation>, CoreError> {
        Ok(self.shared.store.reservations()?)
    }

    /// Reservation totals by status.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn counters(&self) -> Result<ReservationCounters, CoreError> {
        let reservations: Vec<Reservation> = self.shared.store.reservations()?;
        Ok(ReservationCounters::tally(&reservations))
    }

    /// Fails unless `room_id` can take a new claim for `stay`.
    ///
    /// `ignoring` excludes the reservation being moved from the overlap check.
    fn ensure_room_claimable(
        &self,
        room_id: &RoomId,
        stay: &StayPeriod,
        ignoring: Option<&ReservationId>,
    ) -> Result<(), CoreError> {
        if let Some(task) = self.shared.store.active_task_for_room(room_id)? {
            debug!(room_id = %room_id, task_id = %task.id, "Room under maintenance");
            return Err(DomainError::RoomUnderMaintenance {
                room_id: room_id.clone(),
                task_id: task.id,
            }
            .into());
        }

        let overlapping: Option<Reservation> = self
            .shared
            .store
            .live_reservations_for_room(room_id)?
            .into_iter()
            .find(|r| Some(&r.id) != ignoring && r.stay.overlaps(stay));
        if let Some(existing) = overlapping {
            debug!(
                room_id = %room_id,
                existing = %existing.id,
                "Rejected overlapping reservation"
            );
            return Err(DomainError::OverlappingReservation {
                room_id: room_id.clone(),
                existing: existing.id,
            }
            .into());
        }
        Ok(())
    }

    /// Commits `after` together with the re-derived status of its room (and
    /// of `other_room`, when the reservation moved).
    fn commit_with_room_status(
        &self,
        actor: &Actor,
        action: &str,
        before: &Reservation,
        after: Reservation,
        other_room: Option<&RoomId>,
    ) -> Result<Reservation, CoreError> {
        let staged_reservations: [&Reservation; 1] = [&after];
        let staged: Staged<'_> = Staged {
            reservations: &staged_reservations,
            task: None,
        };

        let mut room_writes: Vec<RoomWrite> = vec![
            self.registry()
                .stage_derived_status(&before.room_id, &staged)?,
        ];
        if let Some(other) = other_room {
            room_writes.push(self.registry().stage_derived_status(other, &staged)?);
        }

        let audit_event: AuditEvent = AuditEvent::new(
            actor.clone(),
            Action::new(action.to_string(), None),
            Subject::reservation(&before.id),
            snapshot::reservation(before),
            snapshot::reservation(&after),
        );
        let transition: TransitionResult = room_writes.into_iter().fold(
            TransitionResult::new(audit_event).with_reservation(after.clone()),
            TransitionResult::with_room_write,
        );
        self.shared.commit(&transition)?;

        Ok(after)
    }

    /// Runs `op` on the current state of a reservation while holding the lock
    /// of its room (plus `extra_room`, if given).
    ///
    /// The reservation is re-read under the lock. If it moved to a different
    /// room in between, the locks are released and the sequence restarts.
    fn with_reservation_rooms<T>(
        &self,
        reservation_id: &ReservationId,
        extra_room: Option<&RoomId>,
        op: impl Fn(&Reservation) -> Result<T, CoreError>,
    ) -> Result<T, CoreError> {
        let mut last_room: Option<RoomId> = None;

        for attempt in 1..=MAX_ROOM_LOCK_ATTEMPTS {
            let room_id: RoomId = self.get(reservation_id)?.room_id;
            let mut room_ids: Vec<&RoomId> = vec![&room_id];
            room_ids.extend(extra_room);

            let outcome: Option<T> = self.shared.locks.with_rooms(&room_ids, || {
                let current: Reservation = self.get(reservation_id)?;
                if current.room_id != room_id {
                    return Ok(None);
                }
                op(&current).map(Some)
            })?;

            if let Some(value) = outcome {
                return Ok(value);
            }
            warn!(
                reservation_id = %reservation_id,
                room_id = %room_id,
                attempt,
                "Reservation changed room while waiting for lock, retrying"
            );
            last_room = Some(room_id);
        }

        Err(CoreError::ConcurrencyConflict {
            room_id: last_room.unwrap_or_else(|| RoomId::new("")),
        })
    }
}
