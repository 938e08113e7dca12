//! Tests for model serialization

use super::*;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use serde_json::json;

#[test]
fn test_subject_deserializes_server_payload() {
    let subject: Subject = serde_json::from_value(json!({
        "id": 28,
        "name": "Apple Czech s.r.o.",
        "registration_no": "47123737",
        "street": "Evropská 2591/33D",
        "city": "Praha",
        "zip": "16000",
        "email": "store@apple.cz",
        "avatar_url": null,
        "html_url": "https://app.fakturoid.cz/myslug/subjects/28",
        "updated_at": "2012-06-02T09:34:47+02:00"
    }))
    .unwrap();

    assert_eq!(subject.id, Some(28));
    assert_eq!(subject.name.as_deref(), Some("Apple Czech s.r.o."));
    assert_eq!(subject.registration_no.as_deref(), Some("47123737"));
    let updated = subject.updated_at.unwrap();
    assert_eq!(updated.to_rfc3339(), "2012-06-02T07:34:47+00:00");
    assert_eq!(subject.to_string(), "Apple Czech s.r.o.");
}

#[test]
fn test_subject_serialization_skips_readonly_fields() {
    let subject = Subject {
        id: Some(28),
        name: Some("Apple Czech s.r.o.".to_string()),
        html_url: Some("https://app.fakturoid.cz/myslug/subjects/28".to_string()),
        ..Subject::default()
    };

    let value = serde_json::to_value(&subject).unwrap();
    let object = value.as_object().unwrap();
    assert!(!object.contains_key("id"));
    assert!(!object.contains_key("html_url"));
    assert!(!object.contains_key("updated_at"));
    // Unset writable fields are omitted rather than sent as nulls.
    assert!(!object.contains_key("street"));
    assert_eq!(object.get("name"), Some(&json!("Apple Czech s.r.o.")));
}

#[test]
fn test_invoice_deserializes_server_payload() {
    let invoice: Invoice = serde_json::from_value(json!({
        "id": 9,
        "number": "2012-0004",
        "status": "paid",
        "subject_id": 28,
        "issued_on": "2012-03-30",
        "due_on": "2012-04-14",
        "paid_at": "2012-04-05T11:29:00+02:00",
        "subtotal": "1100.0",
        "total": "1320.0",
        "exchange_rate": "25.4",
        "lines": [
            {
                "id": 1,
                "name": "Hard work",
                "quantity": "1.0",
                "unit_name": "h",
                "unit_price": "1100.0",
                "vat_rate": 20
            }
        ]
    }))
    .unwrap();

    assert_eq!(invoice.id, Some(9));
    assert_eq!(invoice.number.as_deref(), Some("2012-0004"));
    assert_eq!(invoice.status, Some(crate::types::InvoiceStatus::Paid));
    assert_eq!(
        invoice.issued_on,
        chrono::NaiveDate::from_ymd_opt(2012, 3, 30)
    );
    assert_eq!(invoice.subtotal, Some(Decimal::new(11000, 1)));
    assert_eq!(invoice.total, Some(Decimal::new(13200, 1)));
    assert_eq!(invoice.lines.len(), 1);
    assert_eq!(invoice.lines[0].unit_price, Some(Decimal::new(11000, 1)));
    assert_eq!(invoice.lines[0].vat_rate, Some(Decimal::from(20)));
    assert_eq!(invoice.to_string(), "2012-0004");
}

#[test]
fn test_invoice_serialization_round_trip_for_create() {
    let invoice = Invoice {
        subject_id: Some(28),
        issued_on: chrono::NaiveDate::from_ymd_opt(2012, 3, 30),
        lines: vec![InvoiceLine {
            name: Some("Hard work".to_string()),
            unit_name: Some("h".to_string()),
            unit_price: Some(Decimal::from(1100)),
            vat_rate: Some(Decimal::from(20)),
            ..InvoiceLine::default()
        }],
        ..Invoice::default()
    };

    let value = serde_json::to_value(&invoice).unwrap();
    let object = value.as_object().unwrap();
    assert!(!object.contains_key("id"));
    assert!(!object.contains_key("status"));
    assert!(!object.contains_key("subtotal"));
    assert_eq!(object.get("subject_id"), Some(&json!(28)));
    assert_eq!(object.get("issued_on"), Some(&json!("2012-03-30")));

    let lines = value["lines"].as_array().unwrap();
    assert_eq!(lines[0]["name"], json!("Hard work"));
    // Money travels as strings.
    assert_eq!(lines[0]["quantity"], json!("1"));
    assert_eq!(lines[0]["unit_price"], json!("1100"));
}

#[test]
fn test_invoice_line_display() {
    let mut line = InvoiceLine {
        name: Some("Hard work".to_string()),
        ..InvoiceLine::default()
    };
    assert_eq!(line.to_string(), "Hard work");

    line.quantity = Decimal::from(3);
    assert_eq!(line.to_string(), "3 Hard work");

    line.unit_name = Some("h".to_string());
    assert_eq!(line.to_string(), "3 h Hard work");
}

#[test]
fn test_bank_account_default_flag() {
    let account: BankAccount = serde_json::from_value(json!({
        "id": 123_456,
        "name": "Test Bank Account",
        "currency": "EUR",
        "number": "123456789/4242",
        "default": true
    }))
    .unwrap();

    assert_eq!(account.id, Some(123_456));
    assert_eq!(account.is_default, Some(true));
    assert_eq!(account.to_string(), "Test Bank Account");
}

#[test]
fn test_generator_entity_routing() {
    let generator = Generator {
        id: Some(4),
        name: Some("Podpora".to_string()),
        ..Generator::default()
    };
    assert_eq!(Generator::ENDPOINT, "generators");
    assert_eq!(Entity::id(&generator), Some(4));
    assert_eq!(generator.to_string(), "Podpora");
}

#[test]
fn test_message_serialization_skips_server_fields() {
    let message = Message {
        id: Some(7),
        subject: Some("Your invoice".to_string()),
        message: Some("Hello, invoice at #link#".to_string()),
        delivered_at: None,
        ..Message::default()
    };

    let value = serde_json::to_value(&message).unwrap();
    let object = value.as_object().unwrap();
    assert!(!object.contains_key("id"));
    assert!(!object.contains_key("delivered_at"));
    assert_eq!(object.get("subject"), Some(&json!("Your invoice")));
}
