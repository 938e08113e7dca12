//! Domain models for the Fakturoid API
//!
//! Serde-typed counterparts of the JSON payloads. Server-assigned fields
//! (ids, computed totals, URLs, timestamps) deserialize normally but are
//! skipped on serialization so they never travel back in create/update
//! bodies.

use serde::de::DeserializeOwned;
use serde::Serialize;

mod account;
mod generator;
mod invoice;
mod message;
mod subject;

pub use account::{Account, BankAccount};
pub use generator::Generator;
pub use invoice::{Invoice, InvoiceLine};
pub use message::Message;
pub use subject::Subject;

/// A persistable API resource living under a collection endpoint.
///
/// Implementations drive the generic save/delete routing: a missing id means
/// the entity is new and is created with POST, a present id routes to
/// PUT/DELETE on the member endpoint.
pub trait Entity: Serialize + DeserializeOwned + Send + Sync {
    /// Collection endpoint path, e.g. `subjects`.
    const ENDPOINT: &'static str;

    /// Server-assigned id, if the entity has been persisted.
    fn id(&self) -> Option<u64>;
}

#[cfg(test)]
mod tests;
