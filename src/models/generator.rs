//! Generator (invoice template) model.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Entity, InvoiceLine};

/// A generator: a template that produces invoices, optionally on a
/// recurring schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Generator {
    /// Server-assigned id
    #[serde(skip_serializing)]
    pub id: Option<u64>,
    /// Caller-side identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    /// Template name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Id of the subject generated invoices are addressed to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<u64>,
    /// Whether invoices are generated on a schedule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring: Option<bool>,
    /// First generation date for recurring templates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Months between generated invoices
    #[serde(skip_serializing_if = "Option::is_none")]
    pub months_period: Option<u32>,
    /// Due period in days for generated invoices
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<u32>,
    /// Variable symbol for generated invoices
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_symbol: Option<String>,
    /// Note printed on generated invoices
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Payment method
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
    /// Web app URL of the generator
    #[serde(skip_serializing)]
    pub html_url: Option<String>,
    /// API URL of the generator
    #[serde(skip_serializing)]
    pub url: Option<String>,
    /// API URL of the subject
    #[serde(skip_serializing)]
    pub subject_url: Option<String>,
    /// When the generator was last changed
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Template lines
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<InvoiceLine>,
}

impl Entity for Generator {
    const ENDPOINT: &'static str = "generators";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name.as_deref().unwrap_or(""))
    }
}
