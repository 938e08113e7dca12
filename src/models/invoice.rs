//! Invoice and invoice line models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Entity;
use crate::types::InvoiceStatus;

/// One line of an invoice or generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceLine {
    /// Server-assigned id; kept in update bodies so existing lines are
    /// updated in place instead of re-created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Line description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Quantity, 1 by default
    #[serde(default = "default_quantity", with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
    /// Unit label, e.g. `h` or `kg`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<String>,
    /// Price per unit without VAT
    #[serde(
        default,
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub unit_price: Option<Decimal>,
    /// VAT rate in percent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_rate: Option<Decimal>,
}

fn default_quantity() -> Decimal {
    Decimal::ONE
}

impl Default for InvoiceLine {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            quantity: default_quantity(),
            unit_name: None,
            unit_price: None,
            vat_rate: None,
        }
    }
}

impl fmt::Display for InvoiceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name.as_deref().unwrap_or("");
        match &self.unit_name {
            Some(unit) => write!(f, "{} {} {}", self.quantity, unit, name),
            None if self.quantity == Decimal::ONE => f.write_str(name),
            None => write!(f, "{} {}", self.quantity, name),
        }
    }
}

/// An issued (or proforma) invoice.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Invoice {
    /// Server-assigned id
    #[serde(skip_serializing)]
    pub id: Option<u64>,
    /// Caller-side identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    /// Whether this is a proforma invoice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proforma: Option<bool>,
    /// Invoice number; assigned from the number format when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Variable symbol for payment matching
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_symbol: Option<String>,
    /// Id of the subject the invoice is addressed to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<u64>,
    /// Lifecycle status, maintained by the server
    #[serde(skip_serializing)]
    pub status: Option<InvoiceStatus>,
    /// Due period in days
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<u32>,
    /// Due date, computed from `due`
    #[serde(skip_serializing)]
    pub due_on: Option<NaiveDate>,
    /// Issue date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_on: Option<NaiveDate>,
    /// When the invoice was sent to the client
    #[serde(skip_serializing)]
    pub sent_at: Option<DateTime<Utc>>,
    /// When the invoice was paid
    #[serde(skip_serializing)]
    pub paid_at: Option<DateTime<Utc>>,
    /// When a reminder was last sent
    #[serde(skip_serializing)]
    pub reminder_sent_at: Option<DateTime<Utc>>,
    /// When the proforma was accepted
    #[serde(skip_serializing)]
    pub accepted_at: Option<DateTime<Utc>>,
    /// When the invoice was cancelled
    #[serde(skip_serializing)]
    pub cancelled_at: Option<DateTime<Utc>>,
    /// Note printed on the invoice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Footer note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_note: Option<String>,
    /// Payment method, e.g. `bank` or `cash`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    /// Invoice currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Exchange rate to the account currency
    #[serde(
        default,
        with = "rust_decimal::serde::str_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub exchange_rate: Option<Decimal>,
    /// Invoice language
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Public access token
    #[serde(skip_serializing)]
    pub token: Option<String>,
    /// Total without VAT
    #[serde(default, with = "rust_decimal::serde::str_option", skip_serializing)]
    pub subtotal: Option<Decimal>,
    /// Total with VAT
    #[serde(default, with = "rust_decimal::serde::str_option", skip_serializing)]
    pub total: Option<Decimal>,
    /// Total without VAT in the account currency
    #[serde(default, with = "rust_decimal::serde::str_option", skip_serializing)]
    pub native_subtotal: Option<Decimal>,
    /// Total with VAT in the account currency
    #[serde(default, with = "rust_decimal::serde::str_option", skip_serializing)]
    pub native_total: Option<Decimal>,
    /// Unpaid remainder
    #[serde(default, with = "rust_decimal::serde::str_option", skip_serializing)]
    pub remaining_amount: Option<Decimal>,
    /// Unpaid remainder in the account currency
    #[serde(default, with = "rust_decimal::serde::str_option", skip_serializing)]
    pub remaining_native_amount: Option<Decimal>,
    /// Web app URL of the invoice
    #[serde(skip_serializing)]
    pub html_url: Option<String>,
    /// Public (client-facing) URL
    #[serde(skip_serializing)]
    pub public_html_url: Option<String>,
    /// API URL of the invoice
    #[serde(skip_serializing)]
    pub url: Option<String>,
    /// API URL of the subject
    #[serde(skip_serializing)]
    pub subject_url: Option<String>,
    /// When the invoice was last changed
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Invoice lines
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<InvoiceLine>,
}

impl Entity for Invoice {
    const ENDPOINT: &'static str = "invoices";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

impl fmt::Display for Invoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.number.as_deref().unwrap_or(""))
    }
}
