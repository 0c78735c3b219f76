// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use inn_domain::{Expense, Income};

use crate::data_models::{ExpenseRow, IncomeRow};
use crate::diesel_schema::{expenses, incomes};
use crate::error::PersistenceError;

/// Lists manual incomes, newest first.
///
/// # Errors
///
/// Returns an error if the query fails or a row is invalid.
pub fn list_incomes(conn: &mut SqliteConnection) -> Result<Vec<Income>, PersistenceError> {
    incomes::table
        .order((incomes::date.desc(), incomes::income_id.asc()))
        .select(IncomeRow::as_select())
        .load::<IncomeRow>(conn)?
        .into_iter()
        .map(IncomeRow::into_domain)
        .collect()
}

/// Lists expenses, newest first.
///
/// # Errors
///
/// Returns an error if the query fails or a row is invalid.
pub fn list_expenses(conn: &mut SqliteConnection) -> Result<Vec<Expense>, PersistenceError> {
    expenses::table
        .order((expenses::date.desc(), expenses::expense_id.asc()))
        .select(ExpenseRow::as_select())
        .load::<ExpenseRow>(conn)?
        .into_iter()
        .map(ExpenseRow::into_domain)
        .collect()
}
