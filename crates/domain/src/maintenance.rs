// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::ids::{RoomId, TaskId};
use crate::room::Room;
use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};
use time::Date;

/// Urgency of a maintenance task. Ordered from least to most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

status_labels!(Priority, "priority", {
    Low => "low" | "baixa",
    Medium => "medium" | "media" | "média",
    High => "high" | "alta",
});

/// Lifecycle of a maintenance task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Open,
    InProgress,
    /// Terminal.
    Completed,
}

status_labels!(MaintenanceStatus, "maintenance", {
    Open => "open" | "aberta" | "aberto",
    InProgress => "in_progress" | "em andamento" | "em_andamento",
    Completed => "completed" | "concluída" | "concluida" | "concluido" | "concluído",
});

impl MaintenanceStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Returns true if the lifecycle permits moving from `self` to `target`.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Open, Self::InProgress | Self::Completed) | (Self::InProgress, Self::Completed)
        )
    }
}

/// A maintenance ticket holding a room out of service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceTask {
    pub id: TaskId,
    pub room_id: RoomId,
    /// Copy of the room identifier at the time the task was opened.
    pub room_identifier: String,
    pub issue: String,
    pub priority: Priority,
    pub status: MaintenanceStatus,
    pub opened_at: Date,
    pub completed_on: Option<Date>,
    pub notes: Option<String>,
}

impl MaintenanceTask {
    /// Opens a new task against `room`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyField` if `issue` is blank.
    pub fn open(
        id: TaskId,
        room: &Room,
        issue: &str,
        priority: Priority,
        opened_at: Date,
    ) -> Result<Self, DomainError> {
        let issue = issue.trim();
        if issue.is_empty() {
            return Err(DomainError::EmptyField { field: "issue" });
        }
        Ok(Self {
            id,
            room_id: room.id.clone(),
            room_identifier: room.identifier.clone(),
            issue: issue.to_string(),
            priority,
            status: MaintenanceStatus::Open,
            opened_at,
            completed_on: None,
            notes: None,
        })
    }

    /// True until the task is completed.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Moves the task forward in its lifecycle.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` for regressions and
    /// no-op transitions, and a date error if `completed_on` is missing when
    /// completing, present otherwise, or earlier than the opening date.
    pub fn advance(
        &self,
        target: MaintenanceStatus,
        completed_on: Option<Date>,
        notes: Option<String>,
    ) -> Result<Self, DomainError> {
        if !self.status.can_transition_to(target) {
            let reason = if self.status == target {
                "task is already in this status"
            } else if self.status.is_terminal() {
                "completed tasks cannot be reopened"
            } else {
                "status cannot move backwards"
            };
            return Err(DomainError::InvalidStatusTransition {
                entity: "maintenance",
                from: self.status.to_string(),
                to: target.to_string(),
                reason: reason.to_string(),
            });
        }

        let completed_on = match (target, completed_on) {
            (MaintenanceStatus::Completed, None) => return Err(DomainError::CompletionDateRequired),
            (MaintenanceStatus::Completed, Some(date)) => {
                if date < self.opened_at {
                    return Err(DomainError::CompletionBeforeOpening {
                        opened_at: self.opened_at,
                        completed_on: date,
                    });
                }
                Some(date)
            }
            (_, Some(_)) => return Err(DomainError::UnexpectedCompletionDate),
            (_, None) => None,
        };

        let notes = notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .or_else(|| self.notes.clone());

        Ok(Self {
            status: target,
            completed_on,
            notes,
            ..self.clone()
        })
    }
}

/// Which tasks a listing should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskView {
    /// Open and in-progress tasks only.
    #[default]
    Active,
    /// Every task, active ones first.
    All,
}

/// Orders tasks for display.
///
/// Active tasks come first, most urgent and then oldest first. Completed
/// tasks follow, most recently completed first.
pub fn sort_for_display(tasks: &mut [MaintenanceTask]) {
    tasks.sort_by(display_order);
}

fn display_order(a: &MaintenanceTask, b: &MaintenanceTask) -> Ordering {
    match (a.is_active(), b.is_active()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => (Reverse(a.priority), a.opened_at, &a.id).cmp(&(
            Reverse(b.priority),
            b.opened_at,
            &b.id,
        )),
        (false, false) => (Reverse(a.completed_on), &a.id).cmp(&(Reverse(b.completed_on), &b.id)),
    }
}
