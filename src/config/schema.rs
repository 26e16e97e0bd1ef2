//! Audit map schema.
//!
//! The audit map holds the four lookup tables that steer action
//! classification and target resolution. Option names are stored lowercased,
//! matching how ini option names are read.

use std::collections::BTreeMap;

use serde::Serialize;

/// Lookup tables loaded from the audit map file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditMap {
    /// Path segment → resource keyword (e.g. `servers` → `server`).
    path_keywords: BTreeMap<String, String>,

    /// Path segment, optionally suffixed with `/<method>`, → explicit action.
    custom_actions: BTreeMap<String, String>,

    /// Catalog service type → taxonomy service type.
    service_endpoints: BTreeMap<String, String>,

    /// Catalog service type used when no endpoint matches the request host.
    default_target_endpoint_type: Option<String>,
}

impl AuditMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a path keyword.
    pub fn with_path_keyword(mut self, segment: impl AsRef<str>, keyword: impl Into<String>) -> Self {
        self.path_keywords
            .insert(segment.as_ref().to_lowercase(), keyword.into());
        self
    }

    /// Add a custom action. The key is a path segment or `segment/method`.
    pub fn with_custom_action(mut self, key: impl AsRef<str>, action: impl Into<String>) -> Self {
        self.custom_actions
            .insert(key.as_ref().to_lowercase(), action.into());
        self
    }

    /// Map a catalog service type to a taxonomy service type.
    pub fn with_service_endpoint(
        mut self,
        catalog_type: impl AsRef<str>,
        taxonomy_type: impl Into<String>,
    ) -> Self {
        self.service_endpoints
            .insert(catalog_type.as_ref().to_lowercase(), taxonomy_type.into());
        self
    }

    /// Set the fallback catalog service type.
    pub fn with_default_target_endpoint_type(mut self, endpoint_type: impl Into<String>) -> Self {
        self.default_target_endpoint_type = Some(endpoint_type.into());
        self
    }

    /// Keyword for a path segment, if the segment is a known keyword.
    pub fn path_keyword(&self, segment: &str) -> Option<&str> {
        self.path_keywords.get(segment).map(String::as_str)
    }

    pub fn is_path_keyword(&self, segment: &str) -> bool {
        self.path_keywords.contains_key(segment)
    }

    /// Configured action for a custom action key.
    pub fn custom_action(&self, key: &str) -> Option<&str> {
        self.custom_actions.get(key).map(String::as_str)
    }

    /// Taxonomy service type for a catalog service type.
    pub fn service_type(&self, catalog_type: &str) -> Option<&str> {
        self.service_endpoints.get(catalog_type).map(String::as_str)
    }

    pub fn default_target_endpoint_type(&self) -> Option<&str> {
        self.default_target_endpoint_type.as_deref()
    }

    pub fn path_keywords(&self) -> &BTreeMap<String, String> {
        &self.path_keywords
    }

    pub fn custom_actions(&self) -> &BTreeMap<String, String> {
        &self.custom_actions
    }

    pub fn service_endpoints(&self) -> &BTreeMap<String, String> {
        &self.service_endpoints
    }

    /// True when no table carries an entry and no fallback type is set.
    pub fn is_empty(&self) -> bool {
        self.path_keywords.is_empty()
            && self.custom_actions.is_empty()
            && self.service_endpoints.is_empty()
            && self.default_target_endpoint_type.is_none()
    }
}
