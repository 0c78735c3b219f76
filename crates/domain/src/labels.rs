// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! String plumbing shared by the closed status enums.
//!
//! Each enum has one canonical label, used for persistence and the API, and
//! may accept legacy labels on input. Parsing is case-insensitive.

macro_rules! status_labels {
    (
        $name:ident, $entity:literal,
        { $($variant:ident => $label:literal $(| $alias:literal)*),+ $(,)? }
    ) => {
        impl $name {
            /// Returns the canonical string representation.
            ///
            /// This is used for persistence and API serialization.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($label $(| $alias)* => Ok(Self::$variant),)+
                    _ => Err($crate::error::DomainError::InvalidStatus {
                        entity: $entity,
                        status: s.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
