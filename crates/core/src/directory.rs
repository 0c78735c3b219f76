// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::ids;
use crate::property::Shared;
use crate::snapshot;
use crate::state::TransitionResult;
use inn_audit::{Action, Actor, AuditEvent, StateSnapshot, Subject};
use inn_domain::{
    Company, CompanyId, CompanyPatch, DomainError, Guest, GuestId, GuestOrCompany, GuestPatch,
};
use tracing::info;

/// Registry of the guests and companies reservations are made for.
pub struct GuestDirectory<'a> {
    shared: &'a Shared,
}

impl<'a> GuestDirectory<'a> {
    pub(crate) const fn new(shared: &'a Shared) -> Self {
        Self { shared }
    }

    /// Registers a guest.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or document is blank or the store fails.
    pub fn register_guest(
        &self,
        actor: &Actor,
        full_name: &str,
        document: &str,
        email: Option<String>,
        phone: Option<String>,
    ) -> Result<Guest, CoreError> {
        let guest: Guest = Guest::new(
            ids::generate(GuestId::PREFIX),
            full_name,
            document,
            email,
            phone,
        )?;

        let audit_event: AuditEvent = AuditEvent::new(
            actor.clone(),
            Action::new(String::from("RegisterGuest"), None),
            Subject::guest(&guest.id),
            StateSnapshot::absent(),
            snapshot::guest(&guest),
        );
        self.shared
            .commit(&TransitionResult::new(audit_event).with_guest(guest.clone()))?;

        info!(guest_id = %guest.id, "Registered guest");
        Ok(guest)
    }

    /// Registers a company.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or document is blank or the store fails.
    pub fn register_company(
        &self,
        actor: &Actor,
        name: &str,
        document: &str,
        main_contact: Option<String>,
        email: Option<String>,
        phone: Option<String>,
    ) -> Result<Company, CoreError> {
        let company: Company = Company::new(
            ids::generate(CompanyId::PREFIX),
            name,
            document,
            main_contact,
            email,
            phone,
        )?;

        let audit_event: AuditEvent = AuditEvent::new(
            actor.clone(),
            Action::new(String::from("RegisterCompany"), None),
            Subject::company(&company.id),
            StateSnapshot::absent(),
            snapshot::company(&company),
        );
        self.shared
            .commit(&TransitionResult::new(audit_event).with_company(company.clone()))?;

        info!(company_id = %company.id, "Registered company");
        Ok(company)
    }

    /// Changes the fields set in `patch`, leaving the rest untouched.
    ///
    /// # Errors
    ///
    /// Returns `GuestNotFound` for an unknown guest, a validation error if
    /// the patch blanks the name or document, or an error if the store fails.
    pub fn update_guest(
        &self,
        actor: &Actor,
        guest_id: &GuestId,
        patch: GuestPatch,
    ) -> Result<Guest, CoreError> {
        let current: Guest = self.load_guest(guest_id)?;
        let updated: Guest = current.apply(patch)?;

        let audit_event: AuditEvent = AuditEvent::new(
            actor.clone(),
            Action::new(String::from("UpdateGuest"), None),
            Subject::guest(guest_id),
            snapshot::guest(&current),
            snapshot::guest(&updated),
        );
        self.shared
            .commit(&TransitionResult::new(audit_event).with_guest(updated.clone()))?;

        info!(guest_id = %guest_id, "Updated guest");
        Ok(updated)
    }

    /// Changes the fields set in `patch`, leaving the rest untouched.
    ///
    /// # Errors
    ///
    /// Returns `CompanyNotFound` for an unknown company, a validation error
    /// if the patch blanks the name or document, or an error if the store
    /// fails.
    pub fn update_company(
        &self,
        actor: &Actor,
        company_id: &CompanyId,
        patch: CompanyPatch,
    ) -> Result<Company, CoreError> {
        let current: Company = self.load_company(company_id)?;
        let updated: Company = current.apply(patch)?;

        let audit_event: AuditEvent = AuditEvent::new(
            actor.clone(),
            Action::new(String::from("UpdateCompany"), None),
            Subject::company(company_id),
            snapshot::company(&current),
            snapshot::company(&updated),
        );
        self.shared
            .commit(&TransitionResult::new(audit_event).with_company(updated.clone()))?;

        info!(company_id = %company_id, "Updated company");
        Ok(updated)
    }

    /// Deletes a guest and returns the removed record.
    ///
    /// The store refuses the removal while any reservation, cancelled ones
    /// included, names the guest.
    ///
    /// # Errors
    ///
    /// Returns `GuestNotFound` for an unknown guest, `PartyInUse` while the
    /// guest is referenced, or an error if the store fails.
    pub fn delete_guest(&self, actor: &Actor, guest_id: &GuestId) -> Result<Guest, CoreError> {
        let current: Guest = self.load_guest(guest_id)?;

        let audit_event: AuditEvent = AuditEvent::new(
            actor.clone(),
            Action::new(String::from("DeleteGuest"), None),
            Subject::guest(guest_id),
            snapshot::guest(&current),
            StateSnapshot::absent(),
        );
        self.shared.commit(
            &TransitionResult::new(audit_event)
                .removing_party(GuestOrCompany::Guest(guest_id.clone())),
        )?;

        info!(guest_id = %guest_id, "Deleted guest");
        Ok(current)
    }

    /// Deletes a company and returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns `CompanyNotFound` for an unknown company, `PartyInUse` while
    /// the company is referenced, or an error if the store fails.
    pub fn delete_company(
        &self,
        actor: &Actor,
        company_id: &CompanyId,
    ) -> Result<Company, CoreError> {
        let current: Company = self.load_company(company_id)?;

        let audit_event: AuditEvent = AuditEvent::new(
            actor.clone(),
            Action::new(String::from("DeleteCompany"), None),
            Subject::company(company_id),
            snapshot::company(&current),
            StateSnapshot::absent(),
        );
        self.shared.commit(
            &TransitionResult::new(audit_event)
                .removing_party(GuestOrCompany::Company(company_id.clone())),
        )?;

        info!(company_id = %company_id, "Deleted company");
        Ok(current)
    }

    fn load_guest(&self, guest_id: &GuestId) -> Result<Guest, CoreError> {
        self.shared
            .store
            .guest(guest_id)?
            .ok_or_else(|| DomainError::GuestNotFound(guest_id.clone()).into())
    }

    fn load_company(&self, company_id: &CompanyId) -> Result<Company, CoreError> {
        self.shared
            .store
            .company(company_id)?
            .ok_or_else(|| DomainError::CompanyNotFound(company_id.clone()).into())
    }

    /// All guests, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn guests(&self) -> Result<Vec<Guest>, CoreError> {
        Ok(self.shared.store.guests()?)
    }

    /// All companies, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub fn companies(&self) -> Result<Vec<Company>, CoreError> {
        Ok(self.shared.store.companies()?)
    }

    /// Resolves the name shown for a reservation party.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the party does not exist.
    pub fn display_name(&self, party: &GuestOrCompany) -> Result<String, CoreError> {
        match party {
            GuestOrCompany::Guest(id) => self
                .shared
                .store
                .guest(id)?
                .map(|g| g.full_name)
                .ok_or_else(|| DomainError::GuestNotFound(id.clone()).into()),
            GuestOrCompany::Company(id) => self
                .shared
                .store
                .company(id)?
                .map(|c| c.name)
                .ok_or_else(|| DomainError::CompanyNotFound(id.clone()).into()),
        }
    }

    pub(crate) fn ensure_exists(&self, party: &GuestOrCompany) -> Result<(), CoreError> {
        self.display_name(party).map(|_| ())
    }
}
