//! Audit view of an inbound request.
//!
//! # Responsibilities
//! - Capture method, path and host URL of a request
//! - Carry the POST body for `action` classification
//! - Carry the raw service catalog header and parse it on demand
//!
//! # Design Decisions
//! - Host URL is `scheme://host[:port]`, scheme defaulting to `http`
//! - The `Host` header wins over the URI authority
//! - A header value that is not visible ASCII counts as absent

use axum::body::Bytes;
use axum::http::{header, request::Parts, Method};

use crate::audit::catalog::{Catalog, CatalogError, SERVICE_CATALOG_HEADER};

/// Request data consulted by the audit classifier and resolver.
#[derive(Debug, Clone)]
pub struct AuditRequest {
    method: Method,
    path: String,
    host_url: String,
    body: Option<Bytes>,
    service_catalog: Option<String>,
}

impl AuditRequest {
    pub fn new(method: Method, path: impl Into<String>, host_url: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            host_url: host_url.into(),
            body: None,
            service_catalog: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Attach the raw service catalog header value.
    pub fn with_service_catalog(mut self, catalog: impl Into<String>) -> Self {
        self.service_catalog = Some(catalog.into());
        self
    }

    /// Build from HTTP request parts and an already buffered body.
    pub fn from_parts(parts: &Parts, body: Option<Bytes>) -> Self {
        let scheme = parts.uri.scheme_str().unwrap_or("http");
        let host = parts
            .headers
            .get(header::HOST)
            .and_then(|h| h.to_str().ok())
            .map(str::to_string)
            .or_else(|| parts.uri.authority().map(|a| a.to_string()));
        let host_url = match host {
            Some(host) => format!("{}://{}", scheme, host),
            None => String::new(),
        };

        let service_catalog = parts
            .headers
            .get(SERVICE_CATALOG_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::to_string);

        Self {
            method: parts.method.clone(),
            path: parts.uri.path().to_string(),
            host_url,
            body,
            service_catalog,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn host_url(&self) -> &str {
        &self.host_url
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    pub fn service_catalog(&self) -> Option<&str> {
        self.service_catalog.as_deref()
    }

    /// Parse the service catalog header. `Ok(None)` when it is absent.
    pub fn catalog(&self) -> Result<Option<Catalog>, CatalogError> {
        self.service_catalog
            .as_deref()
            .map(Catalog::parse)
            .transpose()
    }
}
