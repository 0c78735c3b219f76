// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::ids::{CompanyId, GuestId};

/// A registered individual guest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guest {
    pub id: GuestId,
    pub full_name: String,
    /// National identity document (CPF).
    pub document: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Guest {
    /// # Errors
    ///
    /// Returns `DomainError::EmptyField` if the name or document is blank.
    pub fn new(
        id: GuestId,
        full_name: &str,
        document: &str,
        email: Option<String>,
        phone: Option<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            full_name: non_empty("full_name", full_name)?,
            document: non_empty("document", document)?,
            email: trimmed(email),
            phone: trimmed(phone),
        })
    }

    /// Returns this guest with `patch` applied.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyField` if the patch blanks the name or
    /// document.
    pub fn apply(&self, patch: GuestPatch) -> Result<Self, DomainError> {
        Ok(Self {
            id: self.id.clone(),
            full_name: patch
                .full_name
                .map_or_else(|| Ok(self.full_name.clone()), |v| non_empty("full_name", &v))?,
            document: patch
                .document
                .map_or_else(|| Ok(self.document.clone()), |v| non_empty("document", &v))?,
            email: patch.email.map_or_else(|| self.email.clone(), |v| trimmed(Some(v))),
            phone: patch.phone.map_or_else(|| self.phone.clone(), |v| trimmed(Some(v))),
        })
    }
}

/// Changes to a guest. `None` keeps the current value; for the optional
/// contact fields a blank string clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuestPatch {
    pub full_name: Option<String>,
    pub document: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// A registered company that books on behalf of guests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    /// Company registration number (CNPJ).
    pub document: String,
    pub main_contact: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Company {
    /// # Errors
    ///
    /// Returns `DomainError::EmptyField` if the name or document is blank.
    pub fn new(
        id: CompanyId,
        name: &str,
        document: &str,
        main_contact: Option<String>,
        email: Option<String>,
        phone: Option<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            name: non_empty("name", name)?,
            document: non_empty("document", document)?,
            main_contact: trimmed(main_contact),
            email: trimmed(email),
            phone: trimmed(phone),
        })
    }

    /// Returns this company with `patch` applied.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyField` if the patch blanks the name or
    /// document.
    pub fn apply(&self, patch: CompanyPatch) -> Result<Self, DomainError> {
        Ok(Self {
            id: self.id.clone(),
            name: patch
                .name
                .map_or_else(|| Ok(self.name.clone()), |v| non_empty("name", &v))?,
            document: patch
                .document
                .map_or_else(|| Ok(self.document.clone()), |v| non_empty("document", &v))?,
            main_contact: patch
                .main_contact
                .map_or_else(|| self.main_contact.clone(), |v| trimmed(Some(v))),
            email: patch.email.map_or_else(|| self.email.clone(), |v| trimmed(Some(v))),
            phone: patch.phone.map_or_else(|| self.phone.clone(), |v| trimmed(Some(v))),
        })
    }
}

/// Changes to a company, with the same conventions as `GuestPatch`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyPatch {
    pub name: Option<String>,
    pub document: Option<String>,
    pub main_contact: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

pub(crate) fn non_empty(field: &'static str, value: &str) -> Result<String, DomainError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DomainError::EmptyField { field });
    }
    Ok(value.to_string())
}

pub(crate) fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
