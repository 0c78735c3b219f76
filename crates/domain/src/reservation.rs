// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::dates::StayPeriod;
use crate::error::DomainError;
use crate::ids::{CompanyId, GuestId, ReservationId, RoomId};
use crate::money::Amount;
use crate::room::ClaimState;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Booking status of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    /// Awaiting confirmation. Reservations are confirmed on creation, so this
    /// only appears on data imported from older systems.
    Pending,
    /// Confirmed booking.
    Confirmed,
    /// Terminal.
    Cancelled,
}

status_labels!(ReservationStatus, "reservation", {
    Pending => "pending" | "pendente",
    Confirmed => "confirmed" | "confirmado" | "confirmada" | "reservado",
    Cancelled => "cancelled" | "cancelado" | "cancelada",
});

/// Status of the arrival or departure stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    Pending,
    Concluded,
    Cancelled,
}

status_labels!(StageStatus, "stage", {
    Pending => "pending" | "pendente",
    Concluded => "concluded" | "concluido" | "concluído",
    Cancelled => "cancelled" | "cancelado",
});

/// Payment status of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Confirmed,
    Cancelled,
}

status_labels!(PaymentStatus, "payment", {
    Pending => "pending" | "pendente",
    Confirmed => "confirmed" | "confirmado" | "pago",
    Cancelled => "cancelled" | "cancelado",
});

/// The party a reservation is made for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "id")]
pub enum GuestOrCompany {
    Guest(GuestId),
    Company(CompanyId),
}

impl GuestOrCompany {
    /// Returns the kind label ("guest" or "company").
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Guest(_) => "guest",
            Self::Company(_) => "company",
        }
    }

    /// Returns the referenced identifier value.
    #[must_use]
    pub fn id_str(&self) -> &str {
        match self {
            Self::Guest(id) => id.as_str(),
            Self::Company(id) => id.as_str(),
        }
    }
}

/// A booking of one room for a stay.
///
/// The three stage statuses are ordered: arrival can only conclude on a live
/// booking, departure only after arrival, and cancellation cancels all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: ReservationId,
    pub party: GuestOrCompany,
    pub room_id: RoomId,
    pub guests_count: u32,
    pub stay: StayPeriod,
    pub status: ReservationStatus,
    pub check_in_status: StageStatus,
    pub check_out_status: StageStatus,
    pub payment_status: PaymentStatus,
    pub payment_method: Option<String>,
    pub total_amount: Amount,
    pub created_at: OffsetDateTime,
    pub checked_in_at: Option<OffsetDateTime>,
    pub checked_out_at: Option<OffsetDateTime>,
    pub cancelled_at: Option<OffsetDateTime>,
}

impl Reservation {
    /// Creates a confirmed reservation with every stage pending.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidGuestsCount` if `guests_count` is zero.
    pub fn book(
        id: ReservationId,
        party: GuestOrCompany,
        room_id: RoomId,
        guests_count: u32,
        stay: StayPeriod,
        created_at: OffsetDateTime,
    ) -> Result<Self, DomainError> {
        if guests_count == 0 {
            return Err(DomainError::InvalidGuestsCount(guests_count));
        }
        Ok(Self {
            id,
            party,
            room_id,
            guests_count,
            stay,
            status: ReservationStatus::Confirmed,
            check_in_status: StageStatus::Pending,
            check_out_status: StageStatus::Pending,
            payment_status: PaymentStatus::Pending,
            payment_method: None,
            total_amount: Amount::ZERO,
            created_at,
            checked_in_at: None,
            checked_out_at: None,
            cancelled_at: None,
        })
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.status == ReservationStatus::Cancelled
    }

    /// True while the guest is checked in and has not left.
    #[must_use]
    pub fn is_in_house(&self) -> bool {
        !self.is_cancelled()
            && self.check_in_status == StageStatus::Concluded
            && self.check_out_status == StageStatus::Pending
    }

    /// True while the reservation holds its room (not cancelled, not departed).
    #[must_use]
    pub fn holds_claim(&self) -> bool {
        !self.is_cancelled() && self.check_out_status == StageStatus::Pending
    }

    /// The contribution of this reservation to its room's status.
    #[must_use]
    pub const fn claim_state(&self) -> ClaimState {
        ClaimState {
            check_in: self.check_in_status,
        }
    }

    fn ensure_live(&self) -> Result<(), DomainError> {
        if self.is_cancelled() {
            return Err(DomainError::ReservationCancelled(self.id.clone()));
        }
        Ok(())
    }

    /// Concludes the arrival stage.
    ///
    /// # Errors
    ///
    /// Fails if the reservation is cancelled or the arrival already concluded.
    pub fn confirm_arrival(&self, at: OffsetDateTime) -> Result<Self, DomainError> {
        self.ensure_live()?;
        if self.check_in_status != StageStatus::Pending {
            return Err(DomainError::ArrivalAlreadyConfirmed(self.id.clone()));
        }
        Ok(Self {
            check_in_status: StageStatus::Concluded,
            checked_in_at: Some(at),
            ..self.clone()
        })
    }

    /// Concludes the departure stage.
    ///
    /// # Errors
    ///
    /// Fails if the reservation is cancelled, already departed, or the guest
    /// never arrived.
    pub fn confirm_departure(&self, at: OffsetDateTime) -> Result<Self, DomainError> {
        self.ensure_live()?;
        if self.check_out_status != StageStatus::Pending {
            return Err(DomainError::DepartureAlreadyConfirmed(self.id.clone()));
        }
        if self.check_in_status != StageStatus::Concluded {
            return Err(DomainError::ArrivalNotConfirmed(self.id.clone()));
        }
        Ok(Self {
            check_out_status: StageStatus::Concluded,
            checked_out_at: Some(at),
            ..self.clone()
        })
    }

    /// Records a payment, replacing the total.
    ///
    /// # Errors
    ///
    /// Fails on a blank method, a zero amount, or a cancelled reservation.
    pub fn register_payment(&self, method: &str, amount: Amount) -> Result<Self, DomainError> {
        let method = method.trim();
        if method.is_empty() {
            return Err(DomainError::EmptyField {
                field: "payment_method",
            });
        }
        if amount.is_zero() {
            return Err(DomainError::InvalidAmount(String::from(
                "payment amount must be greater than zero",
            )));
        }
        self.ensure_live()?;
        Ok(Self {
            payment_status: PaymentStatus::Confirmed,
            payment_method: Some(method.to_string()),
            total_amount: amount,
            ..self.clone()
        })
    }

    /// Cancels the reservation and every pending stage.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ReservationCancelled` if already cancelled.
    pub fn cancel(&self, at: OffsetDateTime) -> Result<Self, DomainError> {
        self.ensure_live()?;
        Ok(Self {
            status: ReservationStatus::Cancelled,
            check_in_status: StageStatus::Cancelled,
            check_out_status: StageStatus::Cancelled,
            payment_status: PaymentStatus::Cancelled,
            payment_method: None,
            total_amount: Amount::ZERO,
            cancelled_at: Some(at),
            ..self.clone()
        })
    }

    /// Reassigns the reservation to another room.
    ///
    /// # Errors
    ///
    /// Fails if the reservation is cancelled or already departed, or if
    /// `room_id` is the current room.
    pub fn move_to(&self, room_id: RoomId) -> Result<Self, DomainError> {
        self.ensure_live()?;
        if self.check_out_status == StageStatus::Concluded {
            return Err(DomainError::DepartureAlreadyConfirmed(self.id.clone()));
        }
        if room_id == self.room_id {
            return Err(DomainError::SameRoom(room_id));
        }
        Ok(Self {
            room_id,
            ..self.clone()
        })
    }
}

/// Reservation totals by status, as shown on the reservations overview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationCounters {
    pub confirmed: u32,
    pub pending: u32,
    pub cancelled: u32,
    /// Checked in and not yet departed.
    pub in_house: u32,
}

impl ReservationCounters {
    /// Tallies a set of reservations.
    #[must_use]
    pub fn tally<'a>(reservations: impl IntoIterator<Item = &'a Reservation>) -> Self {
        reservations
            .into_iter()
            .fold(Self::default(), |mut counters, reservation| {
                match reservation.status {
                    ReservationStatus::Confirmed => counters.confirmed += 1,
                    ReservationStatus::Pending => counters.pending += 1,
                    ReservationStatus::Cancelled => counters.cancelled += 1,
                }
                if reservation.is_in_house() {
                    counters.in_house += 1;
                }
                counters
            })
    }
}
