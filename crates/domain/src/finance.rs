// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Manual incomes and expenses, and the financial projection over them.
//!
//! Reservation revenue is never stored separately: it is read from the
//! payment state of each reservation whenever a summary is built.

use crate::error::DomainError;
use crate::ids::{ExpenseId, IncomeId, ReservationId};
use crate::money::Amount;
use crate::party::non_empty;
use crate::reservation::{GuestOrCompany, PaymentStatus, Reservation};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::{Date, OffsetDateTime};

/// Method label used when a payment carries none.
pub const UNSPECIFIED_METHOD: &str = "other";

fn positive(amount: Amount) -> Result<Amount, DomainError> {
    if amount.is_zero() {
        return Err(DomainError::InvalidAmount(String::from(
            "amount must be greater than zero",
        )));
    }
    Ok(amount)
}

/// Revenue recorded by hand, outside any reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Income {
    pub id: IncomeId,
    pub description: String,
    pub date: Date,
    pub amount: Amount,
    pub method: String,
    pub recorded_at: OffsetDateTime,
}

impl Income {
    /// # Errors
    ///
    /// Returns `DomainError::EmptyField` for a blank description or method,
    /// or `DomainError::InvalidAmount` for a zero amount.
    pub fn new(
        id: IncomeId,
        description: &str,
        date: Date,
        amount: Amount,
        method: &str,
        recorded_at: OffsetDateTime,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            description: non_empty("description", description)?,
            date,
            amount: positive(amount)?,
            method: non_empty("method", method)?,
            recorded_at,
        })
    }
}

/// An operating expense.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    pub category: String,
    pub date: Date,
    pub amount: Amount,
    pub recorded_at: OffsetDateTime,
}

impl Expense {
    /// # Errors
    ///
    /// Returns `DomainError::EmptyField` for a blank description or category,
    /// or `DomainError::InvalidAmount` for a zero amount.
    pub fn new(
        id: ExpenseId,
        description: &str,
        category: &str,
        date: Date,
        amount: Amount,
        recorded_at: OffsetDateTime,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            description: non_empty("description", description)?,
            category: non_empty("category", category)?,
            date,
            amount: positive(amount)?,
            recorded_at,
        })
    }
}

/// Where a revenue or receivable line comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerSource {
    Reservation {
        id: ReservationId,
        party: GuestOrCompany,
    },
    Income {
        id: IncomeId,
        description: String,
    },
}

impl LedgerSource {
    /// Identifier of the underlying record.
    #[must_use]
    pub fn id_str(&self) -> &str {
        match self {
            Self::Reservation { id, .. } => id.as_str(),
            Self::Income { id, .. } => id.as_str(),
        }
    }

    /// True for reservations booked by a company.
    #[must_use]
    pub const fn is_company(&self) -> bool {
        matches!(
            self,
            Self::Reservation {
                party: GuestOrCompany::Company(_),
                ..
            }
        )
    }
}

/// Origin of a revenue line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevenueOrigin {
    /// Entered through `record_income`.
    Manual,
    /// A confirmed reservation payment.
    Reservation,
}

status_labels!(RevenueOrigin, "revenue origin", {
    Manual => "manual",
    Reservation => "reservation" | "automatica" | "automática",
});

/// One line of revenue, manual or from a paid reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevenueEntry {
    pub source: LedgerSource,
    /// Income date, or the check-out date for reservation payments.
    pub date: Date,
    pub amount: Amount,
    pub method: String,
}

impl RevenueEntry {
    #[must_use]
    pub const fn origin(&self) -> RevenueOrigin {
        match self.source {
            LedgerSource::Reservation { .. } => RevenueOrigin::Reservation,
            LedgerSource::Income { .. } => RevenueOrigin::Manual,
        }
    }
}

/// Settlement state of a receivable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReceivableStatus {
    Open,
    Paid,
}

status_labels!(ReceivableStatus, "receivable", {
    Open => "open" | "em aberto",
    Paid => "paid" | "pago",
});

/// An amount owed to the property, settled or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receivable {
    pub source: LedgerSource,
    /// Check-out date for reservations, income date for manual incomes.
    pub due_date: Date,
    pub amount: Amount,
    pub status: ReceivableStatus,
}

/// Observations attached to a financial summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinancialInsight {
    PendingPayments,
    RevenueRecorded,
    ExpensesRecorded,
    NegativeResult,
}

status_labels!(FinancialInsight, "insight", {
    PendingPayments => "pending_payments",
    RevenueRecorded => "revenue_recorded",
    ExpensesRecorded => "expenses_recorded",
    NegativeResult => "negative_result",
});

/// Revenue lines in date order, newest first, then by record id.
///
/// Cancelled reservations and reservations whose payment is not confirmed
/// contribute nothing; neither do confirmed payments of zero.
#[must_use]
pub fn revenue_entries(reservations: &[Reservation], incomes: &[Income]) -> Vec<RevenueEntry> {
    let from_reservations = reservations
        .iter()
        .filter(|r| {
            !r.is_cancelled()
                && r.payment_status == PaymentStatus::Confirmed
                && !r.total_amount.is_zero()
        })
        .map(|r| RevenueEntry {
            source: LedgerSource::Reservation {
                id: r.id.clone(),
                party: r.party.clone(),
            },
            date: r.stay.check_out(),
            amount: r.total_amount,
            method: r
                .payment_method
                .clone()
                .unwrap_or_else(|| String::from(UNSPECIFIED_METHOD)),
        });
    let from_incomes = incomes.iter().map(|i| RevenueEntry {
        source: LedgerSource::Income {
            id: i.id.clone(),
            description: i.description.clone(),
        },
        date: i.date,
        amount: i.amount,
        method: i.method.clone(),
    });

    let mut entries: Vec<RevenueEntry> = from_reservations.chain(from_incomes).collect();
    entries.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| a.source.id_str().cmp(b.source.id_str()))
    });
    entries
}

/// Revenue, receivables and expenses at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinancialSummary {
    /// Confirmed reservation payments plus manual incomes.
    pub gross_revenue: Amount,
    /// Amounts still open on live reservations.
    pub receivables: Amount,
    pub expenses: Amount,
    /// Revenue per payment method, methods with no revenue omitted.
    pub by_method: BTreeMap<String, Amount>,
    /// Receivables of company bookings.
    pub company_receivables: Vec<Receivable>,
    /// Receivables of individual guests, plus manual incomes.
    pub guest_receivables: Vec<Receivable>,
}

impl FinancialSummary {
    /// Builds the summary from the current reservations, incomes and
    /// expenses.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` if a total overflows.
    pub fn compute(
        reservations: &[Reservation],
        incomes: &[Income],
        expenses: &[Expense],
    ) -> Result<Self, DomainError> {
        let mut summary = Self {
            gross_revenue: Amount::ZERO,
            receivables: Amount::ZERO,
            expenses: Amount::ZERO,
            by_method: BTreeMap::new(),
            company_receivables: Vec::new(),
            guest_receivables: Vec::new(),
        };

        for reservation in reservations.iter().filter(|r| !r.is_cancelled()) {
            let status: ReceivableStatus = match reservation.payment_status {
                PaymentStatus::Pending => ReceivableStatus::Open,
                PaymentStatus::Confirmed => ReceivableStatus::Paid,
                PaymentStatus::Cancelled => continue,
            };
            if status == ReceivableStatus::Open {
                summary.receivables = summary.receivables.checked_add(reservation.total_amount)?;
            }
            summary.push(Receivable {
                source: LedgerSource::Reservation {
                    id: reservation.id.clone(),
                    party: reservation.party.clone(),
                },
                due_date: reservation.stay.check_out(),
                amount: reservation.total_amount,
                status,
            });
        }

        for income in incomes {
            summary.push(Receivable {
                source: LedgerSource::Income {
                    id: income.id.clone(),
                    description: income.description.clone(),
                },
                due_date: income.date,
                amount: income.amount,
                status: ReceivableStatus::Paid,
            });
        }

        for entry in revenue_entries(reservations, incomes) {
            summary.gross_revenue = summary.gross_revenue.checked_add(entry.amount)?;
            let by_method: &mut Amount = summary.by_method.entry(entry.method).or_default();
            *by_method = by_method.checked_add(entry.amount)?;
        }

        for expense in expenses {
            summary.expenses = summary.expenses.checked_add(expense.amount)?;
        }

        summary.company_receivables.sort_by(receivable_order);
        summary.guest_receivables.sort_by(receivable_order);
        Ok(summary)
    }

    fn push(&mut self, receivable: Receivable) {
        if receivable.source.is_company() {
            self.company_receivables.push(receivable);
        } else {
            self.guest_receivables.push(receivable);
        }
    }

    /// Gross revenue minus expenses, in cents. Negative on a loss.
    #[must_use]
    pub const fn estimated_profit_cents(&self) -> i64 {
        self.gross_revenue.cents_minus(self.expenses)
    }

    #[must_use]
    pub fn insights(&self) -> Vec<FinancialInsight> {
        let mut insights: Vec<FinancialInsight> = Vec::new();
        if self
            .company_receivables
            .iter()
            .chain(&self.guest_receivables)
            .any(|r| r.status == ReceivableStatus::Open)
        {
            insights.push(FinancialInsight::PendingPayments);
        }
        if !self.gross_revenue.is_zero() {
            insights.push(FinancialInsight::RevenueRecorded);
        }
        if !self.expenses.is_zero() {
            insights.push(FinancialInsight::ExpensesRecorded);
        }
        if self.estimated_profit_cents() < 0 {
            insights.push(FinancialInsight::NegativeResult);
        }
        insights
    }
}

fn receivable_order(a: &Receivable, b: &Receivable) -> std::cmp::Ordering {
    a.due_date
        .cmp(&b.due_date)
        .then_with(|| a.source.id_str().cmp(b.source.id_str()))
}
