// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Short textual state used for audit before/after snapshots.

use inn_audit::StateSnapshot;
use inn_domain::{Company, Expense, Guest, Income, MaintenanceTask, Reservation, Room};

pub fn room(room: &Room) -> StateSnapshot {
    StateSnapshot::new(format!(
        "identifier={} type={} status={} version={}",
        room.identifier, room.room_type, room.status, room.version
    ))
}

pub fn reservation(reservation: &Reservation) -> StateSnapshot {
    StateSnapshot::new(format!(
        "room={} stay={}..{} status={} check_in={} check_out={} payment={} total={}",
        reservation.room_id,
        reservation.stay.check_in(),
        reservation.stay.check_out(),
        reservation.status,
        reservation.check_in_status,
        reservation.check_out_status,
        reservation.payment_status,
        reservation.total_amount
    ))
}

pub fn task(task: &MaintenanceTask) -> StateSnapshot {
    StateSnapshot::new(format!(
        "room={} priority={} status={} completed_on={}",
        task.room_id,
        task.priority,
        task.status,
        task.completed_on
            .map_or_else(|| String::from("-"), |d| d.to_string())
    ))
}

pub fn guest(guest: &Guest) -> StateSnapshot {
    StateSnapshot::new(format!("name={} document={}", guest.full_name, guest.document))
}

pub fn company(company: &Company) -> StateSnapshot {
    StateSnapshot::new(format!("name={} document={}", company.name, company.document))
}

pub fn income(income: &Income) -> StateSnapshot {
    StateSnapshot::new(format!(
        "date={} amount={} method={}",
        income.date, income.amount, income.method
    ))
}

pub fn expense(expense: &Expense) -> StateSnapshot {
    StateSnapshot::new(format!(
        "date={} amount={} category={}",
        expense.date, expense.amount, expense.category
    ))
}
