// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use inn_domain::{Company, CompanyId, Guest, GuestId, GuestOrCompany};

use crate::data_models::{CompanyRow, GuestRow};
use crate::diesel_schema::{companies, guests, reservations};
use crate::error::PersistenceError;

/// # Errors
///
/// Returns an error if the query fails.
pub fn find_guest(
    conn: &mut SqliteConnection,
    guest_id: &GuestId,
) -> Result<Option<Guest>, PersistenceError> {
    Ok(guests::table
        .filter(guests::guest_id.eq(guest_id.as_str()))
        .select(GuestRow::as_select())
        .first::<GuestRow>(conn)
        .optional()?
        .map(Guest::from))
}

/// Lists guests ordered by name.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_guests(conn: &mut SqliteConnection) -> Result<Vec<Guest>, PersistenceError> {
    Ok(guests::table
        .order((guests::full_name.asc(), guests::guest_id.asc()))
        .select(GuestRow::as_select())
        .load::<GuestRow>(conn)?
        .into_iter()
        .map(Guest::from)
        .collect())
}

/// # Errors
///
/// Returns an error if the query fails.
pub fn find_company(
    conn: &mut SqliteConnection,
    company_id: &CompanyId,
) -> Result<Option<Company>, PersistenceError> {
    Ok(companies::table
        .filter(companies::company_id.eq(company_id.as_str()))
        .select(CompanyRow::as_select())
        .first::<CompanyRow>(conn)
        .optional()?
        .map(Company::from))
}

/// Lists companies ordered by name.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_companies(conn: &mut SqliteConnection) -> Result<Vec<Company>, PersistenceError> {
    Ok(companies::table
        .order((companies::name.asc(), companies::company_id.asc()))
        .select(CompanyRow::as_select())
        .load::<CompanyRow>(conn)?
        .into_iter()
        .map(Company::from)
        .collect())
}

/// True if the guest or company row exists.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn party_exists(
    conn: &mut SqliteConnection,
    party: &GuestOrCompany,
) -> Result<bool, PersistenceError> {
    let count: i64 = match party {
        GuestOrCompany::Guest(id) => guests::table
            .filter(guests::guest_id.eq(id.as_str()))
            .count()
            .get_result(conn)?,
        GuestOrCompany::Company(id) => companies::table
            .filter(companies::company_id.eq(id.as_str()))
            .count()
            .get_result(conn)?,
    };
    Ok(count > 0)
}

/// Counts reservations naming `party`, cancelled ones included.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_reservations_for_party(
    conn: &mut SqliteConnection,
    party: &GuestOrCompany,
) -> Result<i64, PersistenceError> {
    Ok(reservations::table
        .filter(reservations::party_kind.eq(party.kind()))
        .filter(reservations::party_id.eq(party.id_str()))
        .count()
        .get_result(conn)?)
}
