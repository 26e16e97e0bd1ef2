//! Audit API facade.

use std::path::Path;

use tracing::warn;

use crate::audit::classifier::ActionClassifier;
use crate::audit::target::{Target, TargetResolver};
use crate::audit::taxonomy::Action;
use crate::config::{load_audit_map, AuditMap, ConfigError};
use crate::http::AuditRequest;

/// Owns the audit map and answers both halves of an audit event.
#[derive(Debug, Clone, Default)]
pub struct AuditApi {
    map: AuditMap,
}

impl AuditApi {
    pub fn new(map: AuditMap) -> Self {
        Self { map }
    }

    /// Load the audit map from `path`. See [`load_audit_map`].
    pub fn from_config_file(path: Option<&Path>) -> Result<Self, ConfigError> {
        Ok(Self::new(load_audit_map(path)?))
    }

    pub fn map(&self) -> &AuditMap {
        &self.map
    }

    pub fn classifier(&self) -> ActionClassifier<'_> {
        ActionClassifier::new(&self.map)
    }

    pub fn resolver(&self) -> TargetResolver<'_> {
        TargetResolver::new(&self.map)
    }

    /// Action for a request.
    pub fn get_action(&self, req: &AuditRequest) -> Action {
        self.classifier()
            .classify(req.method(), req.path(), req.body())
    }

    /// Target resource for a request.
    ///
    /// A malformed catalog header is logged and treated as absent.
    pub fn get_target_resource(&self, req: &AuditRequest) -> Target {
        let catalog = match req.catalog() {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!(error = %e, "Ignoring malformed service catalog");
                None
            }
        };
        self.resolver()
            .resolve(req.path(), req.host_url(), catalog.as_ref())
    }
}
