// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Manual incomes and expenses, and the financial dashboard derived from
//! reservation payments.

use crate::error::CoreError;
use crate::ids;
use crate::names::Names;
use crate::property::Shared;
use crate::snapshot;
use crate::state::TransitionResult;
use inn_audit::{Action, Actor, AuditEvent, StateSnapshot, Subject};
use inn_domain::{
    Amount, Expense, ExpenseId, FinancialInsight, FinancialSummary, Income, IncomeId,
    LedgerSource, Receivable, ReceivableStatus, Reservation, RevenueOrigin, revenue_entries,
};
use std::collections::BTreeMap;
use time::Date;
use tracing::info;

/// A revenue line with its display description resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeLine {
    /// Income id, or the reservation id for reservation payments.
    pub id: String,
    pub origin: RevenueOrigin,
    pub description: String,
    pub date: Date,
    pub amount: Amount,
    pub method: String,
}

/// A receivable with the party name resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivableLine {
    pub id: String,
    pub name: String,
    pub due_date: Date,
    pub amount: Amount,
    pub status: ReceivableStatus,
}

/// Financial overview of the property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinancialDashboard {
    pub gross_revenue: Amount,
    pub receivables: Amount,
    pub expenses: Amount,
    /// Gross revenue minus expenses, in cents.
    pub estimated_profit_cents: i64,
    /// Revenue per payment method.
    pub by_method: BTreeMap<String, Amount>,
    pub insights: Vec<FinancialInsight>,
    pub company_receivables: Vec<ReceivableLine>,
    pub guest_receivables: Vec<ReceivableLine>,
}

/// Records incomes and expenses and derives the financial dashboard.
///
/// Reservation revenue is never written here; it follows the payment state
/// kept by the reservation ledger.
pub struct FinancialLedger<'a> {
    shared: &'a Shared,
}

impl<'a> FinancialLedger<'a> {
    pub(crate) const fn new(shared: &'a Shared) -> Self {
        Self { shared }
    }

    /// Records revenue received outside any reservation.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank description or method or a
    /// zero amount, or an error if the store fails.
    pub fn record_income(
        &self,
        actor: &Actor,
        description: &str,
        date: Date,
        amount: Amount,
        method: &str,
    ) -> Result<Income, CoreError> {
        let income: Income = Income::new(
            ids::generate(IncomeId::PREFIX),
            description,
            date,
            amount,
            method,
            self.shared.clock.now(),
        )?;

        let audit_event: AuditEvent = AuditEvent::new(
            actor.clone(),
            Action::new(
                String::from("RecordIncome"),
                Some(format!("{} {}", income.method, income.amount)),
            ),
            Subject::income(&income.id),
            StateSnapshot::absent(),
            snapshot::income(&income),
        );
        self.shared
            .commit(&TransitionResult::new(audit_event).with_income(income.clone()))?;

        info!(income_id = %income.id, amount = %income.amount, "Recorded income");
        Ok(income)
    }

    /// Records an operating expense.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a blank description or category or a
    /// zero amount, or an error if the store fails.
    pub fn record_expense(
        &self,
        actor: &Actor,
        description: &str,
        category: &str,
        date: Date,
        amount: Amount,
    ) -> Result<Expense, CoreError> {
        let expense: Expense = Expense::new(
            ids::generate(ExpenseId::PREFIX),
            description,
            category,
            date,
            amount,
            self.shared.clock.now(),
        )?;

        let audit_event: AuditEvent = AuditEvent::new(
            actor.clone(),
            Action::new(
                String::from("RecordExpense"),
                Some(format!("{} {}", expense.category, expense.amount)),
            ),
            Subject::expense(&expense.id),
            StateSnapshot::absent(),
            snapshot::expense(&expense),
        );
        self.shared
            .commit(&TransitionResult::new(audit_event).with_expense(expense.clone()))?;

        info!(expense_id = %expense.id, amount = %expense.amount, "Recorded expense");
        Ok(expense)
    }

    /// Manual incomes and confirmed reservation payments, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn incomes(&self) -> Result<Vec<IncomeLine>, CoreError> {
        let reservations: Vec<Reservation> = self.shared.store.reservations()?;
        let incomes: Vec<Income> = self.shared.store.incomes()?;
        let names: Names = Names::load(self.shared.store.as_ref(), &[])?;

        Ok(revenue_entries(&reservations, &incomes)
            .into_iter()
            .map(|entry| IncomeLine {
                id: entry.source.id_str().to_string(),
                origin: entry.origin(),
                description: match &entry.source {
                    LedgerSource::Reservation { party, .. } => {
                        format!("Reservation - {}", names.party(party))
                    }
                    LedgerSource::Income { description, .. } => description.clone(),
                },
                date: entry.date,
                amount: entry.amount,
                method: entry.method,
            })
            .collect())
    }

    /// Recorded expenses, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn expenses(&self) -> Result<Vec<Expense>, CoreError> {
        Ok(self.shared.store.expenses()?)
    }

    /// Totals, payment breakdown and receivables as of now.
    ///
    /// # Errors
    ///
    /// Returns an error if a total overflows or the store fails.
    pub fn dashboard(&self) -> Result<FinancialDashboard, CoreError> {
        let reservations: Vec<Reservation> = self.shared.store.reservations()?;
        let incomes: Vec<Income> = self.shared.store.incomes()?;
        let expenses: Vec<Expense> = self.shared.store.expenses()?;
        let summary: FinancialSummary =
            FinancialSummary::compute(&reservations, &incomes, &expenses)?;
        let names: Names = Names::load(self.shared.store.as_ref(), &[])?;

        let lines = |receivables: &[Receivable]| -> Vec<ReceivableLine> {
            receivables
                .iter()
                .map(|r| ReceivableLine {
                    id: r.source.id_str().to_string(),
                    name: match &r.source {
                        LedgerSource::Reservation { party, .. } => names.party(party),
                        LedgerSource::Income { description, .. } => description.clone(),
                    },
                    due_date: r.due_date,
                    amount: r.amount,
                    status: r.status,
                })
                .collect()
        };

        Ok(FinancialDashboard {
            gross_revenue: summary.gross_revenue,
            receivables: summary.receivables,
            expenses: summary.expenses,
            estimated_profit_cents: summary.estimated_profit_cents(),
            insights: summary.insights(),
            company_receivables: lines(&summary.company_receivables),
            guest_receivables: lines(&summary.guest_receivables),
            by_method: summary.by_method,
        })
    }
}
