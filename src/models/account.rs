//! Account and bank account models.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fmt;

/// The account the API credentials belong to. Read-only resource.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Account {
    /// Account subdomain (the URL slug)
    pub subdomain: Option<String>,
    /// Subscription plan name
    pub plan: Option<String>,
    /// Business name
    pub name: Option<String>,
    /// Full name of the account holder
    pub full_name: Option<String>,
    /// Contact e-mail
    pub email: Option<String>,
    /// E-mail invoices are sent from
    pub invoice_email: Option<String>,
    /// Contact phone
    pub phone: Option<String>,
    /// Web address
    pub web: Option<String>,
    /// Street line of the billing address
    pub street: Option<String>,
    /// City of the billing address
    pub city: Option<String>,
    /// ZIP code of the billing address
    pub zip: Option<String>,
    /// ISO country code
    pub country: Option<String>,
    /// Company registration number
    pub registration_no: Option<String>,
    /// VAT identification number
    pub vat_no: Option<String>,
    /// Default bank account number
    pub bank_account: Option<String>,
    /// Default IBAN
    pub iban: Option<String>,
    /// Default BIC/SWIFT code
    pub swift_bic: Option<String>,
    /// Default invoice currency
    pub currency: Option<String>,
    /// Default due period in days
    pub due: Option<u32>,
    /// When the account was created
    pub created_at: Option<DateTime<Utc>>,
    /// When the account was last changed
    pub updated_at: Option<DateTime<Utc>>,
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name.as_deref().unwrap_or(""))
    }
}

/// A bank account attached to the Fakturoid account. Read-only resource.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BankAccount {
    /// Server-assigned id
    pub id: Option<u64>,
    /// Display name
    pub name: Option<String>,
    /// Account currency
    pub currency: Option<String>,
    /// Local account number
    pub number: Option<String>,
    /// IBAN
    pub iban: Option<String>,
    /// BIC/SWIFT code
    pub swift_bic: Option<String>,
    /// Whether this is the account used by default on new invoices
    #[serde(rename = "default")]
    pub is_default: Option<bool>,
}

impl fmt::Display for BankAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name.as_deref().unwrap_or(""))
    }
}
