//! Service catalog model.
//!
//! The catalog arrives as an untrusted header value: a literal list of
//! service entries, in JSON or in single-quoted literal form. Every field is
//! optional on read so that a sparse entry never fails access.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::audit::taxonomy::UNKNOWN;

/// Header carrying the service catalog of the authenticated token.
pub const SERVICE_CATALOG_HEADER: &str = "x-service-catalog";

/// Errors raised while reading a service catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Malformed service catalog: {0}")]
    Malformed(#[from] json5::Error),
}

/// Ordered list of catalog entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Parse a catalog from its header representation.
    ///
    /// JSON parses as-is; the single-quoted literal form is read as JSON5.
    pub fn parse(raw: &str) -> Result<Self, CatalogError> {
        Ok(json5::from_str(raw)?)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One service in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogEntry {
    #[serde(rename = "type", default = "unknown")]
    service_type: String,

    #[serde(default = "unknown")]
    name: String,

    #[serde(default)]
    endpoints: Vec<EndpointUrls>,
}

fn unknown() -> String {
    UNKNOWN.to_string()
}

impl CatalogEntry {
    pub fn new(
        service_type: impl Into<String>,
        name: impl Into<String>,
        endpoints: Vec<EndpointUrls>,
    ) -> Self {
        Self {
            service_type: service_type.into(),
            name: name.into(),
            endpoints,
        }
    }

    pub fn service_type(&self) -> &str {
        &self.service_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The only endpoint record consulted for an entry.
    ///
    /// An entry without endpoints reads as a record with every field absent.
    pub fn first_endpoint(&self) -> EndpointUrls {
        self.endpoints.first().cloned().unwrap_or_default()
    }
}

/// URLs published for one region of a service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EndpointUrls {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "adminURL", default, skip_serializing_if = "Option::is_none")]
    pub admin_url: Option<String>,

    #[serde(rename = "internalURL", default, skip_serializing_if = "Option::is_none")]
    pub internal_url: Option<String>,

    #[serde(rename = "publicURL", default, skip_serializing_if = "Option::is_none")]
    pub public_url: Option<String>,
}
