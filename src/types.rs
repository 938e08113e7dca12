//! Common types used throughout the Fakturoid client
//!
//! Shared type aliases and the wire enums for invoice lifecycle values.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;

// ============================================================================
// Invoice Status
// ============================================================================

/// Lifecycle status of an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    /// Issued, not yet sent
    Open,
    /// Sent to the client
    Sent,
    /// Past its due date
    Overdue,
    /// Fully paid
    Paid,
    /// Cancelled
    Cancelled,
}

impl InvoiceStatus {
    /// Wire representation used in query strings
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Sent => "sent",
            Self::Overdue => "overdue",
            Self::Paid => "paid",
            Self::Cancelled => "cancelled",
        }
    }
}

// ============================================================================
// Invoice Event
// ============================================================================

/// Event fired against an invoice via the fire endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceEvent {
    /// Mark as sent without emailing the client
    MarkAsSent,
    /// Email the invoice to the client
    Deliver,
    /// Mark as paid
    Pay,
    /// Mark a proforma as paid
    PayProforma,
    /// Mark a partial proforma as paid
    PayPartialProforma,
    /// Remove a recorded payment
    RemovePayment,
    /// Email a payment reminder
    DeliverReminder,
    /// Cancel the invoice
    Cancel,
    /// Undo a cancellation
    UndoCancel,
}

impl InvoiceEvent {
    /// Wire representation used in query strings
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MarkAsSent => "mark_as_sent",
            Self::Deliver => "deliver",
            Self::Pay => "pay",
            Self::PayProforma => "pay_proforma",
            Self::PayPartialProforma => "pay_partial_proforma",
            Self::RemovePayment => "remove_payment",
            Self::DeliverReminder => "deliver_reminder",
            Self::Cancel => "cancel",
            Self::UndoCancel => "undo_cancel",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_status_serde() {
        let status: InvoiceStatus = serde_json::from_str("\"overdue\"").unwrap();
        assert_eq!(status, InvoiceStatus::Overdue);

        let json = serde_json::to_string(&InvoiceStatus::Paid).unwrap();
        assert_eq!(json, "\"paid\"");
    }

    #[test]
    fn test_invoice_status_as_str() {
        assert_eq!(InvoiceStatus::Open.as_str(), "open");
        assert_eq!(InvoiceStatus::Cancelled.as_str(), "cancelled");
    }

    #[test]
    fn test_invoice_event_as_str_matches_serde() {
        for event in [
            InvoiceEvent::MarkAsSent,
            InvoiceEvent::Deliver,
            InvoiceEvent::Pay,
            InvoiceEvent::PayProforma,
            InvoiceEvent::PayPartialProforma,
            InvoiceEvent::RemovePayment,
            InvoiceEvent::DeliverReminder,
            InvoiceEvent::Cancel,
            InvoiceEvent::UndoCancel,
        ] {
            let json = serde_json::to_string(&event).unwrap();
            assert_eq!(json, format!("\"{}\"", event.as_str()));
        }
    }
}
