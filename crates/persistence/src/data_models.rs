// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row types and their conversions to and from domain values.
//!
//! Dates are stored as `YYYY-MM-DD` text, timestamps as RFC 3339 text and
//! enums by their canonical label.

use std::collections::BTreeSet;
use std::str::FromStr;

use diesel::prelude::*;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::{Date, OffsetDateTime};

use inn_domain::{
    Amount, Company, CompanyId, Expense, ExpenseId, Guest, GuestId, GuestOrCompany, Income,
    IncomeId, MaintenanceTask, Reservation, ReservationId, Room, RoomId, StayPeriod, TaskId,
    format_date, parse_date,
};

use crate::diesel_schema::{
    companies, expenses, guests, incomes, maintenance_tasks, reservations, rooms,
};
use crate::error::PersistenceError;

/// Serializable representation of an Actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorData {
    pub id: String,
    pub actor_type: String,
}

/// Serializable representation of an Action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionData {
    pub name: String,
    pub details: Option<String>,
}

/// Serializable representation of a `StateSnapshot`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshotData {
    pub data: String,
}

#[derive(Debug, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = rooms, primary_key(room_id))]
#[diesel(treat_none_as_null = true)]
pub struct RoomRow {
    pub room_id: String,
    pub identifier: String,
    pub room_type: String,
    pub status: String,
    pub amenities_json: String,
    pub description: Option<String>,
    pub version: i64,
}

impl RoomRow {
    /// # Errors
    ///
    /// Returns an error if the amenities cannot be serialized or the version
    /// does not fit the column.
    pub fn from_domain(room: &Room) -> Result<Self, PersistenceError> {
        Ok(Self {
            room_id: room.id.to_string(),
            identifier: room.identifier.clone(),
            room_type: room.room_type.clone(),
            status: room.status.as_str().to_string(),
            amenities_json: serde_json::to_string(&room.amenities)?,
            description: room.description.clone(),
            version: room.version.to_i64().ok_or_else(|| {
                PersistenceError::SerializationError(format!(
                    "room version {} out of range",
                    room.version
                ))
            })?,
        })
    }

    /// # Errors
    ///
    /// Returns an error if a stored value is not a valid domain value.
    pub fn into_domain(self) -> Result<Room, PersistenceError> {
        let amenities: BTreeSet<String> = serde_json::from_str(&self.amenities_json)?;
        Ok(Room {
            id: RoomId::new(self.room_id),
            identifier: self.identifier,
            room_type: self.room_type,
            status: parse_label(&self.status)?,
            amenities,
            description: self.description,
            version: self.version.to_u64().ok_or_else(|| {
                PersistenceError::ReconstructionError(format!(
                    "negative room version {}",
                    self.version
                ))
            })?,
        })
    }
}

#[derive(Debug, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = reservations, primary_key(reservation_id))]
#[diesel(treat_none_as_null = true)]
pub struct ReservationRow {
    pub reservation_id: String,
    pub party_kind: String,
    pub party_id: String,
    pub room_id: String,
    pub guests_count: i32,
    pub check_in: String,
    pub check_out: String,
    pub status: String,
    pub check_in_status: String,
    pub check_out_status: String,
    pub payment_status: String,
    pub payment_method: Option<String>,
    pub total_cents: i64,
    pub created_at: String,
    pub checked_in_at: Option<String>,
    pub checked_out_at: Option<String>,
    pub cancelled_at: Option<String>,
}

impl ReservationRow {
    /// # Errors
    ///
    /// Returns an error if a timestamp cannot be formatted or the guest count
    /// does not fit the column.
    pub fn from_domain(reservation: &Reservation) -> Result<Self, PersistenceError> {
        Ok(Self {
            reservation_id: reservation.id.to_string(),
            party_kind: reservation.party.kind().to_string(),
            party_id: reservation.party.id_str().to_string(),
            room_id: reservation.room_id.to_string(),
            guests_count: reservation.guests_count.to_i32().ok_or_else(|| {
                PersistenceError::SerializationError(format!(
                    "guests count {} out of range",
                    reservation.guests_count
                ))
            })?,
            check_in: format_date(reservation.stay.check_in()),
            check_out: format_date(reservation.stay.check_out()),
            status: reservation.status.as_str().to_string(),
            check_in_status: reservation.check_in_status.as_str().to_string(),
            check_out_status: reservation.check_out_status.as_str().to_string(),
            payment_status: reservation.payment_status.as_str().to_string(),
            payment_method: reservation.payment_method.clone(),
            total_cents: reservation.total_amount.cents(),
            created_at: format_timestamp(reservation.created_at)?,
            checked_in_at: reservation.checked_in_at.map(format_timestamp).transpose()?,
            checked_out_at: reservation.checked_out_at.map(format_timestamp).transpose()?,
            cancelled_at: reservation.cancelled_at.map(format_timestamp).transpose()?,
        })
    }

    /// # Errors
    ///
    /// Returns an error if a stored value is not a valid domain value.
    pub fn into_domain(self) -> Result<Reservation, PersistenceError> {
        let party: GuestOrCompany = match self.party_kind.as_str() {
            "guest" => GuestOrCompany::Guest(GuestId::new(self.party_id)),
            "company" => GuestOrCompany::Company(CompanyId::new(self.party_id)),
            other => {
                return Err(PersistenceError::ReconstructionError(format!(
                    "unknown party kind '{other}'"
                )));
            }
        };
        let stay: StayPeriod =
            StayPeriod::new(read_date(&self.check_in)?, read_date(&self.check_out)?)
                .map_err(|e| PersistenceError::ReconstructionError(e.to_string()))?;

        Ok(Reservation {
            id: ReservationId::new(self.reservation_id),
            party,
            room_id: RoomId::new(self.room_id),
            guests_count: self.guests_count.to_u32().ok_or_else(|| {
                PersistenceError::ReconstructionError(format!(
                    "negative guests count {}",
                    self.guests_count
                ))
            })?,
            stay,
            status: parse_label(&self.status)?,
            check_in_status: parse_label(&self.check_in_status)?,
            check_out_status: parse_label(&self.check_out_status)?,
            payment_status: parse_label(&self.payment_status)?,
            payment_method: self.payment_method,
            total_amount: Amount::from_cents(self.total_cents)
                .map_err(|e| PersistenceError::ReconstructionError(e.to_string()))?,
            created_at: read_timestamp(&self.created_at)?,
            checked_in_at: self.checked_in_at.as_deref().map(read_timestamp).transpose()?,
            checked_out_at: self.checked_out_at.as_deref().map(read_timestamp).transpose()?,
            cancelled_at: self.cancelled_at.as_deref().map(read_timestamp).transpose()?,
        })
    }
}

#[derive(Debug, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = maintenance_tasks, primary_key(task_id))]
#[diesel(treat_none_as_null = true)]
pub struct MaintenanceTaskRow {
    pub task_id: String,
    pub room_id: String,
    pub room_identifier: String,
    pub issue: String,
    pub priority: String,
    pub status: String,
    pub opened_at: String,
    pub completed_on: Option<String>,
    pub notes: Option<String>,
}

impl MaintenanceTaskRow {
    #[must_use]
    pub fn from_domain(task: &MaintenanceTask) -> Self {
        Self {
            task_id: task.id.to_string(),
            room_id: task.room_id.to_string(),
            room_identifier: task.room_identifier.clone(),
            issue: task.issue.clone(),
            priority: task.priority.as_str().to_string(),
            status: task.status.as_str().to_string(),
            opened_at: format_date(task.opened_at),
            completed_on: task.completed_on.map(format_date),
            notes: task.notes.clone(),
        }
    }

    /// # Errors
    ///
    /// Returns an error if a stored value is not a valid domain value.
    pub fn into_domain(self) -> Result<MaintenanceTask, PersistenceError> {
        Ok(MaintenanceTask {
            id: TaskId::new(self.task_id),
            room_id: RoomId::new(self.room_id),
            room_identifier: self.room_identifier,
            issue: self.issue,
            priority: parse_label(&self.priority)?,
            status: parse_label(&self.status)?,
            opened_at: read_date(&self.opened_at)?,
            completed_on: self.completed_on.as_deref().map(read_date).transpose()?,
            notes: self.notes,
        })
    }
}

#[derive(Debug, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = guests, primary_key(guest_id))]
#[diesel(treat_none_as_null = true)]
pub struct GuestRow {
    pub guest_id: String,
    pub full_name: String,
    pub document: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<&Guest> for GuestRow {
    fn from(guest: &Guest) -> Self {
        Self {
            guest_id: guest.id.to_string(),
            full_name: guest.full_name.clone(),
            document: guest.document.clone(),
            email: guest.email.clone(),
            phone: guest.phone.clone(),
        }
    }
}

impl From<GuestRow> for Guest {
    fn from(row: GuestRow) -> Self {
        Self {
            id: GuestId::new(row.guest_id),
            full_name: row.full_name,
            document: row.document,
            email: row.email,
            phone: row.phone,
        }
    }
}

#[derive(Debug, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = companies, primary_key(company_id))]
#[diesel(treat_none_as_null = true)]
pub struct CompanyRow {
    pub company_id: String,
    pub name: String,
    pub document: String,
    pub main_contact: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<&Company> for CompanyRow {
    fn from(company: &Company) -> Self {
        Self {
            company_id: company.id.to_string(),
            name: company.name.clone(),
            document: company.document.clone(),
            main_contact: company.main_contact.clone(),
            email: company.email.clone(),
            phone: company.phone.clone(),
        }
    }
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Self {
            id: CompanyId::new(row.company_id),
            name: row.name,
            document: row.document,
            main_contact: row.main_contact,
            email: row.email,
            phone: row.phone,
        }
    }
}

#[derive(Debug, Queryable, Selectable, Insertable)]
#[diesel(table_name = incomes, primary_key(income_id))]
pub struct IncomeRow {
    pub income_id: String,
    pub description: String,
    pub date: String,
    pub amount_cents: i64,
    pub method: String,
    pub recorded_at: String,
}

impl IncomeRow {
    /// # Errors
    ///
    /// Returns an error if the timestamp cannot be formatted.
    pub fn from_domain(income: &Income) -> Result<Self, PersistenceError> {
        Ok(Self {
            income_id: income.id.to_string(),
            description: income.description.clone(),
            date: format_date(income.date),
            amount_cents: income.amount.cents(),
            method: income.method.clone(),
            recorded_at: format_timestamp(income.recorded_at)?,
        })
    }

    /// # Errors
    ///
    /// Returns an error if a stored value is not a valid domain value.
    pub fn into_domain(self) -> Result<Income, PersistenceError> {
        Income::new(
            IncomeId::new(self.income_id),
            &self.description,
            read_date(&self.date)?,
            read_amount(self.amount_cents)?,
            &self.method,
            read_timestamp(&self.recorded_at)?,
        )
        .map_err(|e| PersistenceError::ReconstructionError(e.to_string()))
    }
}

#[derive(Debug, Queryable, Selectable, Insertable)]
#[diesel(table_name = expenses, primary_key(expense_id))]
pub struct ExpenseRow {
    pub expense_id: String,
    pub description: String,
    pub category: String,
    pub date: String,
    pub amount_cents: i64,
    pub recorded_at: String,
}

impl ExpenseRow {
    /// # Errors
    ///
    /// Returns an error if the timestamp cannot be formatted.
    pub fn from_domain(expense: &Expense) -> Result<Self, PersistenceError> {
        Ok(Self {
            expense_id: expense.id.to_string(),
            description: expense.description.clone(),
            category: expense.category.clone(),
            date: format_date(expense.date),
            amount_cents: expense.amount.cents(),
            recorded_at: format_timestamp(expense.recorded_at)?,
        })
    }

    /// # Errors
    ///
    /// Returns an error if a stored value is not a valid domain value.
    pub fn into_domain(self) -> Result<Expense, PersistenceError> {
        Expense::new(
            ExpenseId::new(self.expense_id),
            &self.description,
            &self.category,
            read_date(&self.date)?,
            read_amount(self.amount_cents)?,
            read_timestamp(&self.recorded_at)?,
        )
        .map_err(|e| PersistenceError::ReconstructionError(e.to_string()))
    }
}

fn parse_label<T>(value: &str) -> Result<T, PersistenceError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse::<T>()
        .map_err(|e| PersistenceError::ReconstructionError(e.to_string()))
}

fn read_amount(cents: i64) -> Result<Amount, PersistenceError> {
    Amount::from_cents(cents).map_err(|e| PersistenceError::ReconstructionError(e.to_string()))
}

fn read_date(value: &str) -> Result<Date, PersistenceError> {
    parse_date(value).map_err(|e| PersistenceError::ReconstructionError(e.to_string()))
}

fn format_timestamp(value: OffsetDateTime) -> Result<String, PersistenceError> {
    value
        .format(&Rfc3339)
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))
}

fn read_timestamp(value: &str) -> Result<OffsetDateTime, PersistenceError> {
    OffsetDateTime::parse(value, &Rfc3339)
        .map_err(|e| PersistenceError::ReconstructionError(format!("'{value}': {e}")))
}
