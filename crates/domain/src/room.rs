// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::ids::RoomId;
use crate::reservation::StageStatus;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Operational status of a room.
///
/// The status is a projection of the claims held on the room: it is never
/// chosen freely, only recomputed from reservations and maintenance tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    /// No claim on the room.
    Available,
    /// A future or current reservation holds the room, guest not yet in house.
    Reserved,
    /// A checked-in guest is in the room.
    Occupied,
    /// An active maintenance task holds the room.
    Maintenance,
}

status_labels!(RoomStatus, "room", {
    Available => "available" | "disponível" | "disponivel",
    Reserved => "reserved" | "reservado",
    Occupied => "occupied" | "ocupado",
    Maintenance => "maintenance" | "manutenção" | "manutencao",
});

impl RoomStatus {
    /// Every status, in display order.
    pub const ALL: [Self; 4] = [
        Self::Available,
        Self::Reserved,
        Self::Occupied,
        Self::Maintenance,
    ];
}

/// A rentable room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Generated identifier.
    pub id: RoomId,
    /// Human-facing label, unique within the property (e.g. "105").
    pub identifier: String,
    /// Free-form room category.
    pub room_type: String,
    /// Current status projection.
    pub status: RoomStatus,
    /// Amenity labels.
    pub amenities: BTreeSet<String>,
    /// Optional description.
    pub description: Option<String>,
    /// Incremented on every write; used for optimistic concurrency.
    pub version: u64,
}

impl Room {
    /// Creates a new available room.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyField` if the identifier or room type is blank.
    pub fn new(
        id: RoomId,
        identifier: &str,
        room_type: &str,
        amenities: impl IntoIterator<Item = String>,
        description: Option<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            identifier: required("identifier", identifier)?,
            room_type: required("room_type", room_type)?,
            status: RoomStatus::Available,
            amenities: normalize_amenities(amenities),
            description: optional(description),
            version: 0,
        })
    }

    /// Returns a copy carrying `status` and the next version.
    #[must_use]
    pub fn with_status(&self, status: RoomStatus) -> Self {
        Self {
            status,
            version: self.version + 1,
            ..self.clone()
        }
    }

    /// Applies the descriptive fields of `patch`.
    ///
    /// The status field of the patch is ignored here; it is reconciled against
    /// current claims by the registry.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyField` if a supplied identifier or type is blank.
    pub fn apply_patch(&self, patch: &RoomPatch) -> Result<Self, DomainError> {
        let mut updated = self.clone();
        if let Some(identifier) = &patch.identifier {
            updated.identifier = required("identifier", identifier)?;
        }
        if let Some(room_type) = &patch.room_type {
            updated.room_type = required("room_type", room_type)?;
        }
        if let Some(amenities) = &patch.amenities {
            updated.amenities = normalize_amenities(amenities.iter().cloned());
        }
        if let Some(description) = &patch.description {
            updated.description = optional(Some(description.clone()));
        }
        updated.version = self.version + 1;
        Ok(updated)
    }

    /// Returns true if the room satisfies every criterion of `filter`.
    #[must_use]
    pub fn matches(&self, filter: &RoomFilter) -> bool {
        if filter.status.is_some_and(|status| status != self.status) {
            return false;
        }
        if let Some(room_type) = &filter.room_type
            && !self.room_type.eq_ignore_ascii_case(room_type.trim())
        {
            return false;
        }
        match filter.search_text.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(text) => {
                let needle = text.to_lowercase();
                self.identifier.to_lowercase().contains(&needle)
                    || self.room_type.to_lowercase().contains(&needle)
                    || self
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
                    || self
                        .amenities
                        .iter()
                        .any(|a| a.to_lowercase().contains(&needle))
            }
        }
    }
}

/// Criteria for listing rooms. Empty criteria match every room.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomFilter {
    /// Exact status.
    pub status: Option<RoomStatus>,
    /// Room type, compared case-insensitively.
    pub room_type: Option<String>,
    /// Substring searched in identifier, type, description and amenities.
    pub search_text: Option<String>,
}

/// Partial update of a room. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomPatch {
    pub identifier: Option<String>,
    pub room_type: Option<String>,
    pub amenities: Option<Vec<String>>,
    pub description: Option<String>,
    pub status: Option<RoomStatus>,
}

/// What a single reservation contributes to its room's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimState {
    /// Arrival stage of the reservation.
    pub check_in: StageStatus,
}

/// Computes the status a room must carry given its live claims.
///
/// `claims` must only contain reservations still holding the room (not
/// cancelled, not checked out). An in-house guest wins over maintenance,
/// maintenance wins over a pending arrival.
#[must_use]
pub fn derive_room_status(active_task: bool, claims: &[ClaimState]) -> RoomStatus {
    if claims
        .iter()
        .any(|c| c.check_in == StageStatus::Concluded)
    {
        RoomStatus::Occupied
    } else if active_task {
        RoomStatus::Maintenance
    } else if claims.is_empty() {
        RoomStatus::Available
    } else {
        RoomStatus::Reserved
    }
}

fn required(field: &'static str, value: &str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyField { field });
    }
    Ok(trimmed.to_string())
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn normalize_amenities(amenities: impl IntoIterator<Item = String>) -> BTreeSet<String> {
    amenities
        .into_iter()
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
        .collect()
}
