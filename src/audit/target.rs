//! Target resource resolution.
//!
//! # Responsibilities
//! - Pick the catalog entry the request addresses
//! - Derive service information from that entry
//! - Compose the target type URI from the service type and request path
//!
//! # Design Decisions
//! - Host match is decided on network location (`[userinfo@]host[:port]`)
//! - First host match wins and stops the scan
//! - The first entry of the default endpoint type is the fallback
//! - Missing catalog degrades to an all-unknown target, never an error

use serde::Serialize;
use tracing::{debug, warn};

use crate::audit::catalog::{Catalog, CatalogEntry};
use crate::audit::classifier::strip_json_suffix;
use crate::audit::taxonomy::UNKNOWN;
use crate::config::AuditMap;

pub(crate) const MISSING_CATALOG_WARNING: &str = "Unable to discover target information because \
    service catalog is missing. Either the incoming request does not contain an auth \
    token or auth token does not contain a service catalog. For the latter, please make \
    sure the \"include_service_catalog\" property in auth_token middleware is set to \"True\"";

/// A named address of a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub name: String,
    pub url: String,
}

impl Endpoint {
    fn new(name: &str, url: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            url: url.unwrap_or(UNKNOWN).to_string(),
        }
    }
}

/// Service the request addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    pub id: String,
    pub name: String,
    pub service_type: String,
    pub admin_endpoint: Option<Endpoint>,
    pub private_endpoint: Option<Endpoint>,
    pub public_endpoint: Option<Endpoint>,
}

impl ServiceInfo {
    /// Service info when nothing could be discovered.
    pub fn unknown() -> Self {
        Self {
            id: UNKNOWN.to_string(),
            name: UNKNOWN.to_string(),
            service_type: UNKNOWN.to_string(),
            admin_endpoint: None,
            private_endpoint: None,
            public_endpoint: None,
        }
    }

    /// Derive service info from a catalog entry.
    pub fn from_entry(entry: &CatalogEntry, map: &AuditMap) -> Self {
        let urls = entry.first_endpoint();
        Self {
            id: urls.id.clone().unwrap_or_else(|| entry.name().to_string()),
            name: entry.name().to_string(),
            service_type: map
                .service_type(entry.service_type())
                .unwrap_or(UNKNOWN)
                .to_string(),
            admin_endpoint: Some(Endpoint::new("admin", urls.admin_url.as_deref())),
            private_endpoint: Some(Endpoint::new("private", urls.internal_url.as_deref())),
            public_endpoint: Some(Endpoint::new("public", urls.public_url.as_deref())),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.service_type == UNKNOWN
    }
}

/// Resource an audited request acts upon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
    #[serde(rename = "typeURI")]
    type_uri: String,
    id: String,
    name: String,
    addresses: Vec<Endpoint>,
}

impl Target {
    pub fn type_uri(&self) -> &str {
        &self.type_uri
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn addresses(&self) -> &[Endpoint] {
        &self.addresses
    }
}

/// Network location (`[userinfo@]host[:port]`) of a URL, exactly as written.
///
/// The authority is the text after `scheme://` up to the first `/`, `?` or
/// `#`. It is not normalized: case and ports are compared verbatim. Returns
/// `None` when the URL has no authority.
pub fn netloc(raw: &str) -> Option<&str> {
    let rest = match raw.split_once(':') {
        Some((scheme, rest)) if is_scheme(scheme) => rest,
        _ => raw,
    };
    let authority = rest.strip_prefix("//")?;
    let end = authority
        .find(|c| matches!(c, '/' | '?' | '#'))
        .unwrap_or(authority.len());

    Some(&authority[..end]).filter(|location| !location.is_empty())
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Resolves request targets against a service catalog.
#[derive(Debug, Clone, Copy)]
pub struct TargetResolver<'a> {
    map: &'a AuditMap,
}

impl<'a> TargetResolver<'a> {
    pub fn new(map: &'a AuditMap) -> Self {
        Self { map }
    }

    /// Resolve the target of a request.
    pub fn resolve(&self, path: &str, host_url: &str, catalog: Option<&Catalog>) -> Target {
        let service = match catalog {
            Some(catalog) => self.select_service(host_url, catalog),
            None => {
                warn!("{}", MISSING_CATALOG_WARNING);
                ServiceInfo::unknown()
            }
        };
        self.build_target(path, service)
    }

    /// Pick the service the request host belongs to.
    pub fn select_service(&self, host_url: &str, catalog: &Catalog) -> ServiceInfo {
        let request_location = netloc(host_url);
        let default_type = self.map.default_target_endpoint_type();
        let mut fallback: Option<&CatalogEntry> = None;

        for entry in catalog.entries() {
            let urls = entry.first_endpoint();
            let matches_host = request_location.is_some()
                && [urls.admin_url.as_deref(), urls.public_url.as_deref()]
                    .into_iter()
                    .flatten()
                    .any(|url| netloc(url) == request_location);

            if matches_host {
                debug!(service = entry.name(), "Target matched by request host");
                return ServiceInfo::from_entry(entry, self.map);
            }

            if fallback.is_none() && default_type == Some(entry.service_type()) {
                fallback = Some(entry);
            }
        }

        match fallback {
            Some(entry) => {
                debug!(service = entry.name(), "Target matched by default endpoint type");
                ServiceInfo::from_entry(entry, self.map)
            }
            None => ServiceInfo::unknown(),
        }
    }

    /// Compose the target type URI.
    ///
    /// Keyword segments are appended as-is; a segment following a keyword is
    /// an instance of it and is replaced by the keyword value.
    pub fn build_type_uri(&self, path: &str, service_type: &str) -> String {
        let mut type_uri = service_type.to_string();
        let mut prev: Option<&str> = None;

        for segment in path.split('/') {
            let segment = strip_json_suffix(segment);
            if self.map.is_path_keyword(segment) {
                type_uri.push('/');
                type_uri.push_str(segment);
            } else if let Some(keyword) = prev.and_then(|p| self.map.path_keyword(p)) {
                type_uri.push('/');
                type_uri.push_str(keyword);
            }
            prev = Some(segment);
        }

        type_uri
    }

    fn build_target(&self, path: &str, service: ServiceInfo) -> Target {
        let type_uri = if service.is_unknown() {
            service.service_type.clone()
        } else {
            self.build_type_uri(path, &service.service_type)
        };

        let addresses = [
            service.admin_endpoint,
            service.private_endpoint,
            service.public_endpoint,
        ]
        .into_iter()
        .flatten()
        .collect();

        Target {
            type_uri,
            id: service.id,
            name: service.name,
            addresses,
        }
    }
}
