// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Opaque entity identifiers.
//!
//! Identifiers are generated by the coordinator with a type prefix and are
//! otherwise treated as opaque strings.

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Prefix used when generating new identifiers of this kind.
            pub const PREFIX: &'static str = $prefix;

            /// Wraps an existing identifier value.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

entity_id!(
    /// Identifier of a room.
    RoomId,
    "room"
);
entity_id!(
    /// Identifier of a reservation.
    ReservationId,
    "res"
);
entity_id!(
    /// Identifier of a maintenance task.
    TaskId,
    "mnt"
);
entity_id!(
    /// Identifier of a registered guest.
    GuestId,
    "gst"
);
entity_id!(
    /// Identifier of a registered company.
    CompanyId,
    "cmp"
);
entity_id!(
    /// Identifier of a manually recorded income.
    IncomeId,
    "inc"
);
entity_id!(
    /// Identifier of a recorded expense.
    ExpenseId,
    "exp"
);
