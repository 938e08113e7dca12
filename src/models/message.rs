//! Invoice message model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An e-mail message sent to the client along with an invoice.
///
/// Messages live under an invoice, not under a collection of their own, so
/// they are created through
/// [`Fakturoid::create_message`](crate::Fakturoid::create_message) rather
/// than the generic save path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Message {
    /// Server-assigned id
    #[serde(skip_serializing)]
    pub id: Option<u64>,
    /// E-mail subject
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Recipient e-mail; the subject's e-mail when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Carbon-copy recipient
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_copy: Option<String>,
    /// Message body; `#link#` expands to the public invoice URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// When the message was delivered
    #[serde(skip_serializing)]
    pub delivered_at: Option<DateTime<Utc>>,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.subject.as_deref().unwrap_or(""))
    }
}
