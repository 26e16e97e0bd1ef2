//! Audit map validation.
//!
//! # Responsibilities
//! - Flag entries that can never take effect
//! - Flag fallback settings that resolve to an unknown service type
//!
//! # Design Decisions
//! - Returns all warnings, not just the first
//! - Validation is a pure function: &AuditMap → Vec<ValidationWarning>
//! - Warnings never reject a map; the loader only logs them

use thiserror::Error;

use crate::config::schema::AuditMap;

/// Methods a `segment/method` custom action key can name.
const CLASSIFIED_METHODS: &[&str] = &["get", "post", "put", "patch", "delete", "head"];

/// A semantic oddity in an otherwise well-formed audit map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationWarning {
    #[error("path keyword '{0}' maps to an empty keyword")]
    EmptyPathKeyword(String),

    #[error("custom action '{key}' names method '{method}', which is never classified")]
    UnknownCustomActionMethod { key: String, method: String },

    #[error("default target endpoint type '{0}' has no service_endpoints mapping")]
    UnmappedDefaultEndpointType(String),
}

/// Check an audit map for entries that cannot behave as intended.
pub fn validate_audit_map(map: &AuditMap) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for (segment, keyword) in map.path_keywords() {
        if keyword.trim().is_empty() {
            warnings.push(ValidationWarning::EmptyPathKeyword(segment.clone()));
        }
    }

    for key in map.custom_actions().keys() {
        if let Some((_, method)) = key.rsplit_once('/') {
            if !CLASSIFIED_METHODS.contains(&method) {
                warnings.push(ValidationWarning::UnknownCustomActionMethod {
                    key: key.clone(),
                    method: method.to_string(),
                });
            }
        }
    }

    if let Some(endpoint_type) = map.default_target_endpoint_type() {
        if map.service_type(endpoint_type).is_none() {
            warnings.push(ValidationWarning::UnmappedDefaultEndpointType(
                endpoint_type.to_string(),
            ));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_map_has_no_warnings() {
        let map = AuditMap::new()
            .with_path_keyword("servers", "server")
            .with_custom_action("servers/post", "boot")
            .with_service_endpoint("compute", "service/compute")
            .with_default_target_endpoint_type("compute");

        assert!(validate_audit_map(&map).is_empty());
    }

    #[test]
    fn test_collects_every_warning() {
        let map = AuditMap::new()
            .with_path_keyword("limits", "")
            .with_custom_action("servers/trace", "trace")
            .with_default_target_endpoint_type("volume");

        let warnings = validate_audit_map(&map);
        assert_eq!(warnings.len(), 3);
        assert!(warnings.contains(&ValidationWarning::EmptyPathKeyword("limits".into())));
        assert!(warnings.contains(&ValidationWarning::UnknownCustomActionMethod {
            key: "servers/trace".into(),
            method: "trace".into(),
        }));
        assert!(warnings.contains(&ValidationWarning::UnmappedDefaultEndpointType(
            "volume".into()
        )));
    }

    #[test]
    fn test_warning_display() {
        let warning = ValidationWarning::UnmappedDefaultEndpointType("volume".into());
        assert_eq!(
            warning.to_string(),
            "default target endpoint type 'volume' has no service_endpoints mapping"
        );
    }
}
