// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Writes for entities without optimistic versions.
//!
//! Reservation and task writers already serialize on the room lock of the
//! room they touch, so a plain upsert is enough. Incomes and expenses are
//! append-only.

use diesel::prelude::*;
use diesel::SqliteConnection;
use inn_domain::{Company, Expense, Guest, GuestOrCompany, Income, MaintenanceTask, Reservation};

use crate::data_models::{
    CompanyRow, ExpenseRow, GuestRow, IncomeRow, MaintenanceTaskRow, ReservationRow,
};
use crate::diesel_schema::{
    companies, expenses, guests, incomes, maintenance_tasks, reservations,
};
use crate::error::PersistenceError;

/// # Errors
///
/// Returns an error if the row cannot be built or written.
pub fn upsert_reservation(
    conn: &mut SqliteConnection,
    reservation: &Reservation,
) -> Result<(), PersistenceError> {
    let row: ReservationRow = ReservationRow::from_domain(reservation)?;
    diesel::insert_into(reservations::table)
        .values(&row)
        .on_conflict(reservations::reservation_id)
        .do_update()
        .set(&row)
        .execute(conn)?;
    Ok(())
}

/// # Errors
///
/// Returns an error if the row cannot be written.
pub fn upsert_task(
    conn: &mut SqliteConnection,
    task: &MaintenanceTask,
) -> Result<(), PersistenceError> {
    let row: MaintenanceTaskRow = MaintenanceTaskRow::from_domain(task);
    diesel::insert_into(maintenance_tasks::table)
        .values(&row)
        .on_conflict(maintenance_tasks::task_id)
        .do_update()
        .set(&row)
        .execute(conn)?;
    Ok(())
}

/// # Errors
///
/// Returns an error if the row cannot be written.
pub fn upsert_guest(conn: &mut SqliteConnection, guest: &Guest) -> Result<(), PersistenceError> {
    let row: GuestRow = GuestRow::from(guest);
    diesel::insert_into(guests::table)
        .values(&row)
        .on_conflict(guests::guest_id)
        .do_update()
        .set(&row)
        .execute(conn)?;
    Ok(())
}

/// # Errors
///
/// Returns an error if the row cannot be written.
pub fn upsert_company(
    conn: &mut SqliteConnection,
    company: &Company,
) -> Result<(), PersistenceError> {
    let row: CompanyRow = CompanyRow::from(company);
    diesel::insert_into(companies::table)
        .values(&row)
        .on_conflict(companies::company_id)
        .do_update()
        .set(&row)
        .execute(conn)?;
    Ok(())
}

/// # Errors
///
/// Returns an error if the row cannot be built or written.
pub fn insert_income(conn: &mut SqliteConnection, income: &Income) -> Result<(), PersistenceError> {
    let row: IncomeRow = IncomeRow::from_domain(income)?;
    diesel::insert_into(incomes::table)
        .values(&row)
        .execute(conn)?;
    Ok(())
}

/// # Errors
///
/// Returns an error if the row cannot be built or written.
pub fn insert_expense(
    conn: &mut SqliteConnection,
    expense: &Expense,
) -> Result<(), PersistenceError> {
    let row: ExpenseRow = ExpenseRow::from_domain(expense)?;
    diesel::insert_into(expenses::table)
        .values(&row)
        .execute(conn)?;
    Ok(())
}

/// Deletes a guest or company row. Deleting a missing row is not an error.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_party(
    conn: &mut SqliteConnection,
    party: &GuestOrCompany,
) -> Result<(), PersistenceError> {
    match party {
        GuestOrCompany::Guest(id) => {
            diesel::delete(guests::table.filter(guests::guest_id.eq(id.as_str()))).execute(conn)?;
        }
        GuestOrCompany::Company(id) => {
            diesel::delete(companies::table.filter(companies::company_id.eq(id.as_str())))
                .execute(conn)?;
        }
    }
    Ok(())
}
