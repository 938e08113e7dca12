//! HTTP client and typed API endpoints
//!
//! The [`Fakturoid`] handle owns the connection pool and credentials for one
//! account. Low-level request plumbing (basic auth, status mapping, the Link
//! header page hint) lives in this module; typed resource access and filter
//! builders sit on top.

mod api;
mod http;

pub use api::{GeneratorFilter, InvoiceFilter, SubjectFilter};
pub use http::{Fakturoid, FakturoidBuilder, DEFAULT_BASE_URL};

#[cfg(test)]
mod tests;
