//! Tests for client plumbing

use super::http::{last_page_hint, parse_link_header};
use super::*;
use crate::types::InvoiceStatus;
use pretty_assertions::assert_eq;
use reqwest::header::{HeaderMap, HeaderValue};

// ============================================================================
// URL construction
// ============================================================================

#[test]
fn test_endpoint_url() {
    let fa = Fakturoid::new("myslug", "me@example.com", "9ACA7").unwrap();
    assert_eq!(
        fa.endpoint_url("subjects/28"),
        "https://app.fakturoid.cz/api/v2/accounts/myslug/subjects/28.json"
    );
    assert_eq!(
        fa.endpoint_url("invoices/9/fire"),
        "https://app.fakturoid.cz/api/v2/accounts/myslug/invoices/9/fire.json"
    );
}

#[test]
fn test_builder_base_url_trailing_slash() {
    let fa = Fakturoid::builder("myslug", "me@example.com", "9ACA7")
        .base_url("http://localhost:8080/")
        .build()
        .unwrap();
    assert_eq!(
        fa.endpoint_url("account"),
        "http://localhost:8080/accounts/myslug/account.json"
    );
}

#[test]
fn test_builder_rejects_missing_credentials() {
    assert!(Fakturoid::new("", "me@example.com", "9ACA7").is_err());
    assert!(Fakturoid::new("myslug", "", "9ACA7").is_err());
    assert!(Fakturoid::new("myslug", "me@example.com", "").is_err());
}

// ============================================================================
// Link header
// ============================================================================

#[test]
fn test_parse_link_header() {
    let header = "<https://app.fakturoid.cz/api/v2/accounts/myslug/invoices.json?page=2>; rel=\"next\", \
                  <https://app.fakturoid.cz/api/v2/accounts/myslug/invoices.json?page=3>; rel=\"last\"";
    assert_eq!(
        parse_link_header(header, "last").as_deref(),
        Some("https://app.fakturoid.cz/api/v2/accounts/myslug/invoices.json?page=3")
    );
    assert_eq!(
        parse_link_header(header, "next").as_deref(),
        Some("https://app.fakturoid.cz/api/v2/accounts/myslug/invoices.json?page=2")
    );
    assert_eq!(parse_link_header(header, "prev"), None);
}

#[test]
fn test_last_page_hint() {
    let mut headers = HeaderMap::new();
    headers.insert(
        "link",
        HeaderValue::from_static(
            "<https://app.fakturoid.cz/api/v2/accounts/myslug/invoices.json?page=7&status=paid>; rel=\"last\"",
        ),
    );
    assert_eq!(last_page_hint(&headers), Some(7));
}

#[test]
fn test_last_page_hint_absent() {
    assert_eq!(last_page_hint(&HeaderMap::new()), None);

    let mut headers = HeaderMap::new();
    headers.insert(
        "link",
        HeaderValue::from_static("<https://example.com/?page=2>; rel=\"next\""),
    );
    assert_eq!(last_page_hint(&headers), None);
}

// ============================================================================
// Filters
// ============================================================================

#[test]
fn test_invoice_filter_endpoint_and_query() {
    let filter = InvoiceFilter::new();
    assert_eq!(filter.endpoint(), "invoices");
    assert!(filter.query().is_empty());

    let filter = InvoiceFilter::new()
        .proforma(true)
        .status(InvoiceStatus::Paid)
        .subject_id(28);
    assert_eq!(filter.endpoint(), "invoices/proforma");
    let query = filter.query();
    assert_eq!(query.get("status").map(String::as_str), Some("paid"));
    assert_eq!(query.get("subject_id").map(String::as_str), Some("28"));

    let filter = InvoiceFilter::new().proforma(false);
    assert_eq!(filter.endpoint(), "invoices/regular");
}

#[test]
fn test_generator_filter_endpoint() {
    assert_eq!(GeneratorFilter::new().endpoint(), "generators");
    assert_eq!(
        GeneratorFilter::new().recurring(true).endpoint(),
        "generators/recurring"
    );
    assert_eq!(
        GeneratorFilter::new().recurring(false).endpoint(),
        "generators/template"
    );
}

#[test]
fn test_subject_filter_query() {
    let since = chrono::DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .unwrap()
        .with_timezone(&chrono::Utc);
    let query = SubjectFilter::new()
        .since(since)
        .custom_id("acme-7")
        .query();
    assert_eq!(
        query.get("since").map(String::as_str),
        Some("2024-01-01T00:00:00+00:00")
    );
    assert_eq!(query.get("custom_id").map(String::as_str), Some("acme-7"));
}
