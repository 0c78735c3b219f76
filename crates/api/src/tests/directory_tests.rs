// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ApiError, RegisterCompanyRequest, UpdateCompanyRequest, UpdateGuestRequest, delete_company,
    delete_guest, list_companies, list_guests, register_company, update_company, update_guest,
};

use super::helpers::{add_guest, add_room, book, create_test_operator, create_test_property};

#[test]
fn test_update_guest_patches_given_fields() {
    let property = create_test_property();
    let guest = add_guest(&property, "Maria Silva");

    let updated = update_guest(
        &property,
        &guest.guest_id,
        &UpdateGuestRequest {
            email: Some(String::from("maria@example.com")),
            ..UpdateGuestRequest::default()
        },
        &create_test_operator(),
    )
    .unwrap();

    assert_eq!(updated.full_name, "Maria Silva");
    assert_eq!(updated.email.as_deref(), Some("maria@example.com"));
    assert_eq!(list_guests(&property).unwrap().guests, vec![updated]);
}

#[test]
fn test_update_unknown_guest_is_not_found() {
    let property = create_test_property();

    let result = update_guest(
        &property,
        "gst_missing",
        &UpdateGuestRequest::default(),
        &create_test_operator(),
    );

    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { ref resource_type, .. }) if resource_type == "Guest"
    ));
}

#[test]
fn test_delete_guest_with_reservation_is_rejected() {
    let property = create_test_property();
    let guest = add_guest(&property, "Maria Silva");
    let room = add_room(&property, "105");
    book(&property, &guest, &room, "2025-10-10", "2025-10-12");

    let result = delete_guest(&property, &guest.guest_id, &create_test_operator());

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "party_referenced"
    ));
    assert_eq!(list_guests(&property).unwrap().guests.len(), 1);
}

#[test]
fn test_company_update_then_delete() {
    let property = create_test_property();
    let operator = create_test_operator();
    let company = register_company(
        &property,
        &RegisterCompanyRequest {
            name: String::from("Acme Ltda"),
            document: String::from("12.345.678/0001-90"),
            main_contact: None,
            email: None,
            phone: None,
        },
        &operator,
    )
    .unwrap();

    let updated = update_company(
        &property,
        &company.company_id,
        &UpdateCompanyRequest {
            main_contact: Some(String::from("Carlos")),
            ..UpdateCompanyRequest::default()
        },
        &operator,
    )
    .unwrap();
    assert_eq!(updated.main_contact.as_deref(), Some("Carlos"));

    let removed = delete_company(&property, &company.company_id, &operator).unwrap();
    assert_eq!(removed, updated);
    assert!(list_companies(&property).unwrap().companies.is_empty());
}
