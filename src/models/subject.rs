//! Subject (customer/supplier) model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Entity;

/// A subject: the customer or supplier an invoice is addressed to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Subject {
    /// Server-assigned id
    #[serde(skip_serializing)]
    pub id: Option<u64>,
    /// Caller-side identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
    /// Company or person name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Street line of the address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// Second street line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    /// City
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// ZIP code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    /// ISO country code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Company registration number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_no: Option<String>,
    /// VAT identification number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_no: Option<String>,
    /// Bank account number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<String>,
    /// IBAN
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    /// Contact e-mail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Carbon-copy e-mail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_copy: Option<String>,
    /// Contact phone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Web address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web: Option<String>,
    /// Contact person full name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Avatar URL
    #[serde(skip_serializing)]
    pub avatar_url: Option<String>,
    /// Web app URL of the subject
    #[serde(skip_serializing)]
    pub html_url: Option<String>,
    /// API URL of the subject
    #[serde(skip_serializing)]
    pub url: Option<String>,
    /// When the subject was last changed
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for Subject {
    const ENDPOINT: &'static str = "subjects";

    fn id(&self) -> Option<u64> {
        self.id
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name.as_deref().unwrap_or(""))
    }
}
