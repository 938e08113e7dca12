//! Typed API endpoints
//!
//! High-level resource access on top of the HTTP plumbing: single-object
//! loads, filtered finds, paged collections, and the generic save/delete
//! routing driven by the [`Entity`] trait.

use super::http::Fakturoid;
use crate::error::{Error, Result};
use crate::models::{Account, BankAccount, Entity, Generator, Invoice, Message, Subject};
use crate::paging::PagedList;
use crate::types::{InvoiceEvent, InvoiceStatus, StringMap};
use chrono::{DateTime, Utc};
use serde_json::json;
use std::sync::Arc;

// ============================================================================
// Filters
// ============================================================================

/// Filter for subject listings.
#[derive(Debug, Clone, Default)]
pub struct SubjectFilter {
    since: Option<DateTime<Utc>>,
    updated_since: Option<DateTime<Utc>>,
    custom_id: Option<String>,
}

impl SubjectFilter {
    /// An empty filter matching every subject.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only subjects created since the given instant.
    #[must_use]
    pub fn since(mut self, since: DateTime<Utc>) -> Self {
        self.since = Some(since);
        self
    }

    /// Only subjects updated since the given instant.
    #[must_use]
    pub fn updated_since(mut self, updated_since: DateTime<Utc>) -> Self {
        self.updated_since = Some(updated_since);
        self
    }

    /// Only subjects with the given caller-side identifier.
    #[must_use]
    pub fn custom_id(mut self, custom_id: impl Into<String>) -> Self {
        self.custom_id = Some(custom_id.into());
        self
    }

    pub(crate) fn query(&self) -> StringMap {
        let mut query = StringMap::new();
        if let Some(since) = &self.since {
            query.insert("since".to_string(), since.to_rfc3339());
        }
        if let Some(updated_since) = &self.updated_since {
            query.insert("updated_since".to_string(), updated_since.to_rfc3339());
        }
        if let Some(custom_id) = &self.custom_id {
            query.insert("custom_id".to_string(), custom_id.clone());
        }
        query
    }
}

/// Filter for invoice listings.
#[derive(Debug, Clone, Default)]
pub struct InvoiceFilter {
    subject_id: Option<u64>,
    since: Option<DateTime<Utc>>,
    updated_since: Option<DateTime<Utc>>,
    number: Option<String>,
    custom_id: Option<String>,
    status: Option<InvoiceStatus>,
    proforma: Option<bool>,
}

impl InvoiceFilter {
    /// An empty filter matching every invoice.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only invoices addressed to the given subject.
    #[must_use]
    pub fn subject_id(mut self, subject_id: u64) -> Self {
        self.subject_id = Some(subject_id);
        self
    }

    /// Only invoices created since the given instant.
    #[must_use]
    pub fn since(mut self, since: DateTime<Utc>) -> Self {
        self.since = Some(since);
        self
    }

    /// Only invoices updated since the given instant.
    #[must_use]
    pub fn updated_since(mut self, updated_since: DateTime<Utc>) -> Self {
        self.updated_since = Some(updated_since);
        self
    }

    /// Only the invoice with the given number.
    #[must_use]
    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    /// Only invoices with the given caller-side identifier.
    #[must_use]
    pub fn custom_id(mut self, custom_id: impl Into<String>) -> Self {
        self.custom_id = Some(custom_id.into());
        self
    }

    /// Only invoices in the given lifecycle status.
    #[must_use]
    pub fn status(mut self, status: InvoiceStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restrict to proforma (`true`) or regular (`false`) invoices.
    #[must_use]
    pub fn proforma(mut self, proforma: bool) -> Self {
        self.proforma = Some(proforma);
        self
    }

    pub(crate) fn endpoint(&self) -> &'static str {
        match self.proforma {
            None => "invoices",
            Some(true) => "invoices/proforma",
            Some(false) => "invoices/regular",
        }
    }

    pub(crate) fn query(&self) -> StringMap {
        let mut query = StringMap::new();
        if let Some(subject_id) = self.subject_id {
            query.insert("subject_id".to_string(), subject_id.to_string());
        }
        if let Some(since) = &self.since {
            query.insert("since".to_string(), since.to_rfc3339());
        }
        if let Some(updated_since) = &self.updated_since {
            query.insert("updated_since".to_string(), updated_since.to_rfc3339());
        }
        if let Some(number) = &self.number {
            query.insert("number".to_string(), number.clone());
        }
        if let Some(custom_id) = &self.custom_id {
            query.insert("custom_id".to_string(), custom_id.clone());
        }
        if let Some(status) = self.status {
            query.insert("status".to_string(), status.as_str().to_string());
        }
        query
    }
}

/// Filter for generator listings.
#[derive(Debug, Clone, Default)]
pub struct GeneratorFilter {
    subject_id: Option<u64>,
    since: Option<DateTime<Utc>>,
    updated_since: Option<DateTime<Utc>>,
    recurring: Option<bool>,
}

impl GeneratorFilter {
    /// An empty filter matching every generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only generators addressed to the given subject.
    #[must_use]
    pub fn subject_id(mut self, subject_id: u64) -> Self {
        self.subject_id = Some(subject_id);
        self
    }

    /// Only generators created since the given instant.
    #[must_use]
    pub fn since(mut self, since: DateTime<Utc>) -> Self {
        self.since = Some(since);
        self
    }

    /// Only generators updated since the given instant.
    #[must_use]
    pub fn updated_since(mut self, updated_since: DateTime<Utc>) -> Self {
        self.updated_since = Some(updated_since);
        self
    }

    /// Restrict to recurring (`true`) or one-off template (`false`)
    /// generators.
    #[must_use]
    pub fn recurring(mut self, recurring: bool) -> Self {
        self.recurring = Some(recurring);
        self
    }

    pub(crate) fn endpoint(&self) -> &'static str {
        match self.recurring {
            None => "generators",
            Some(true) => "generators/recurring",
            Some(false) => "generators/template",
        }
    }

    pub(crate) fn query(&self) -> StringMap {
        let mut query = StringMap::new();
        if let Some(subject_id) = self.subject_id {
            query.insert("subject_id".to_string(), subject_id.to_string());
        }
        if let Some(since) = &self.since {
            query.insert("since".to_string(), since.to_rfc3339());
        }
        if let Some(updated_since) = &self.updated_since {
            query.insert("updated_since".to_string(), updated_since.to_rfc3339());
        }
        query
    }
}

// ============================================================================
// Resource endpoints
// ============================================================================

impl Fakturoid {
    /// Load the account the credentials belong to.
    pub async fn account(&self) -> Result<Account> {
        self.get_json("account", &StringMap::new()).await
    }

    /// List the account's bank accounts.
    pub async fn bank_accounts(&self) -> Result<Vec<BankAccount>> {
        self.get_json("bank_accounts", &StringMap::new()).await
    }

    /// Load a single subject by id.
    pub async fn subject(&self, id: u64) -> Result<Subject> {
        self.get_json(&format!("subjects/{id}"), &StringMap::new())
            .await
    }

    /// Find subjects matching the filter.
    pub async fn subjects(&self, filter: SubjectFilter) -> Result<Vec<Subject>> {
        self.get_json("subjects", &filter.query()).await
    }

    /// Load a single invoice by id.
    pub async fn invoice(&self, id: u64) -> Result<Invoice> {
        self.get_json(&format!("invoices/{id}"), &StringMap::new())
            .await
    }

    /// Invoices matching the filter, as a lazily-loaded paged list.
    pub fn invoices(&self, filter: InvoiceFilter) -> PagedList<Invoice> {
        PagedList::new(Arc::new(self.clone()), filter.endpoint(), filter.query())
    }

    /// Load a single generator by id.
    pub async fn generator(&self, id: u64) -> Result<Generator> {
        self.get_json(&format!("generators/{id}"), &StringMap::new())
            .await
    }

    /// Generators matching the filter, as a lazily-loaded paged list.
    pub fn generators(&self, filter: GeneratorFilter) -> PagedList<Generator> {
        PagedList::new(Arc::new(self.clone()), filter.endpoint(), filter.query())
    }

    /// Fire a lifecycle event against an invoice.
    pub async fn fire_invoice_event(&self, invoice_id: u64, event: InvoiceEvent) -> Result<()> {
        self.fire_invoice_event_with(invoice_id, event, &StringMap::new())
            .await
    }

    /// Fire a lifecycle event with extra arguments, e.g. `paid_at` for the
    /// pay events.
    pub async fn fire_invoice_event_with(
        &self,
        invoice_id: u64,
        event: InvoiceEvent,
        args: &StringMap,
    ) -> Result<()> {
        let mut query = args.clone();
        query.insert("event".to_string(), event.as_str().to_string());
        self.post(&format!("invoices/{invoice_id}/fire"), &query, json!({}))
            .await?;
        Ok(())
    }

    /// Send an e-mail message for an invoice. The saved message (with
    /// server-assigned fields) replaces `message` on success.
    pub async fn create_message(&self, invoice_id: u64, message: &mut Message) -> Result<()> {
        let body = serde_json::to_value(&*message)?;
        let response = self
            .post(
                &format!("invoices/{invoice_id}/message"),
                &StringMap::new(),
                body,
            )
            .await?;
        *message = response.json().await?;
        Ok(())
    }

    /// Create or update an entity: POST to the collection when it has no id
    /// yet, PUT to the member endpoint otherwise. The server's canonical
    /// version (ids, computed fields) replaces `entity` on success.
    pub async fn save<M: Entity>(&self, entity: &mut M) -> Result<()> {
        let body = serde_json::to_value(&*entity)?;
        let response = match entity.id() {
            Some(id) => self.put(&format!("{}/{id}", M::ENDPOINT), body).await?,
            None => self.post(M::ENDPOINT, &StringMap::new(), body).await?,
        };
        *entity = response.json().await?;
        Ok(())
    }

    /// Delete a persisted entity.
    pub async fn delete<M: Entity>(&self, entity: &M) -> Result<()> {
        let id = entity
            .id()
            .ok_or_else(|| Error::invalid_argument("cannot delete an entity without an id"))?;
        self.delete_request(&format!("{}/{id}", M::ENDPOINT)).await?;
        Ok(())
    }
}
