// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ApiError, RecordExpenseRequest, RecordIncomeRequest, RegisterPaymentRequest,
    get_financial_dashboard, list_expenses, list_incomes, record_expense, record_income,
    register_payment,
};

use super::helpers::{add_guest, add_room, book, create_test_operator, create_test_property};

fn income_request(description: &str, date: &str, amount: &str) -> RecordIncomeRequest {
    RecordIncomeRequest {
        description: description.to_string(),
        date: date.to_string(),
        amount: amount.into(),
        method: String::from("PIX"),
    }
}

#[test]
fn test_record_income_accepts_comma_amount() {
    let property = create_test_property();

    let income = record_income(
        &property,
        &income_request("Frigobar", "2025-10-05", "35,50"),
        &create_test_operator(),
    )
    .unwrap();

    assert_eq!(income.origin, "manual");
    assert_eq!(income.date, "2025-10-05");
    assert!((income.amount - 35.5).abs() < f64::EPSILON);
}

#[test]
fn test_record_income_rejects_bad_input() {
    let property = create_test_property();
    let operator = create_test_operator();

    let result = record_income(
        &property,
        &income_request("Frigobar", "05/10/2025", "10"),
        &operator,
    );
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "date"
    ));

    let result = record_income(
        &property,
        &income_request("Frigobar", "2025-10-05", "0"),
        &operator,
    );
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "amount"
    ));

    let result = record_income(&property, &income_request(" ", "2025-10-05", "10"), &operator);
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "description"
    ));
}

#[test]
fn test_incomes_list_includes_reservation_payments() {
    let property = create_test_property();
    let operator = create_test_operator();
    let guest = add_guest(&property, "Maria Silva");
    let room = add_room(&property, "105");
    let reservation = book(&property, &guest, &room, "2025-10-10", "2025-10-12");
    register_payment(
        &property,
        &reservation.reservation_id,
        &RegisterPaymentRequest {
            payment_method: String::from("Cartão"),
            amount: 450.0.into(),
        },
        &operator,
    )
    .unwrap();
    record_income(
        &property,
        &income_request("Estacionamento", "2025-10-01", "20"),
        &operator,
    )
    .unwrap();

    let incomes = list_incomes(&property).unwrap().incomes;

    assert_eq!(incomes.len(), 2);
    assert_eq!(incomes[0].origin, "reservation");
    assert_eq!(incomes[0].description, "Reservation - Maria Silva");
    assert_eq!(incomes[0].date, "2025-10-12");
    assert_eq!(incomes[1].origin, "manual");
}

#[test]
fn test_financial_dashboard_reports_loss() {
    let property = create_test_property();
    let operator = create_test_operator();
    let guest = add_guest(&property, "Maria Silva");
    let room = add_room(&property, "105");
    book(&property, &guest, &room, "2025-10-10", "2025-10-12");
    record_income(
        &property,
        &income_request("Frigobar", "2025-10-05", "50"),
        &operator,
    )
    .unwrap();
    let expense = record_expense(
        &property,
        &RecordExpenseRequest {
            description: String::from("Reforma do banheiro"),
            category: String::from("manutencao"),
            date: String::from("2025-10-06"),
            amount: 150.0.into(),
        },
        &operator,
    )
    .unwrap();
    assert_eq!(list_expenses(&property).unwrap().expenses, vec![expense]);

    let dashboard = get_financial_dashboard(&property).unwrap();

    assert!((dashboard.kpis.gross_revenue - 50.0).abs() < f64::EPSILON);
    assert!((dashboard.kpis.expenses - 150.0).abs() < f64::EPSILON);
    assert!((dashboard.kpis.estimated_profit + 100.0).abs() < f64::EPSILON);
    let pix: f64 = dashboard.payment_overview["PIX"];
    assert!((pix - 50.0).abs() < f64::EPSILON);
    assert_eq!(
        dashboard.insights,
        vec![
            "pending_payments",
            "revenue_recorded",
            "expenses_recorded",
            "negative_result"
        ]
    );
    assert!(dashboard.company_receivables.is_empty());
    assert_eq!(dashboard.guest_receivables.len(), 2);
    assert_eq!(dashboard.guest_receivables[0].name, "Frigobar");
    assert_eq!(dashboard.guest_receivables[1].status, "open");
}
