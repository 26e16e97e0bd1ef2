//! Audit map loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use ini::{Ini, ParseOption};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::schema::AuditMap;
use crate::config::validation::validate_audit_map;

/// Section carrying the single-valued options.
pub const DEFAULT_SECTION: &str = "default";
pub const CUSTOM_ACTIONS_SECTION: &str = "custom_actions";
pub const PATH_KEYWORDS_SECTION: &str = "path_keywords";
pub const SERVICE_ENDPOINTS_SECTION: &str = "service_endpoints";
pub const TARGET_ENDPOINT_TYPE_OPTION: &str = "target_endpoint_type";

/// Error type for audit map loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("IO error reading audit map file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a well-formed audit map.
    #[error("Error parsing audit map file: {0}")]
    Parse(#[from] ini::ParseError),

    /// An option appears before the first section header.
    #[error("Error parsing audit map file: option '{0}' is outside of any section")]
    MissingSectionHeader(String),
}

/// Load the audit map from an ini file.
///
/// `None` and a path that does not exist both yield an empty map.
pub fn load_audit_map(path: Option<&Path>) -> Result<AuditMap, ConfigError> {
    let Some(path) = path else {
        return Ok(AuditMap::default());
    };

    if !path.exists() {
        debug!(path = %path.display(), "Audit map file not found, using empty map");
        return Ok(AuditMap::default());
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let map = parse_audit_map(&content)?;

    info!(
        path = %path.display(),
        path_keywords = map.path_keywords().len(),
        custom_actions = map.custom_actions().len(),
        service_endpoints = map.service_endpoints().len(),
        default_target_endpoint_type = ?map.default_target_endpoint_type(),
        "Audit map loaded"
    );

    Ok(map)
}

/// Parse audit map ini content.
///
/// Values are kept verbatim apart from surrounding whitespace: quotes and
/// backslashes are not interpreted. Unknown sections and options are
/// ignored. Semantic oddities are logged as warnings and do not fail the
/// parse.
pub fn parse_audit_map(content: &str) -> Result<AuditMap, ConfigError> {
    let ini = Ini::load_from_str_opt(
        content,
        ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            ..ParseOption::default()
        },
    )?;

    let mut map = AuditMap::new();
    for (section, options) in ini.iter() {
        let Some(section) = section else {
            if let Some((key, _)) = options.iter().next() {
                return Err(ConfigError::MissingSectionHeader(key.to_string()));
            }
            continue;
        };

        match section.to_lowercase().as_str() {
            DEFAULT_SECTION => {
                let endpoint_type = options
                    .iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(TARGET_ENDPOINT_TYPE_OPTION))
                    .map(|(_, value)| value);
                if let Some(endpoint_type) = endpoint_type {
                    map = map.with_default_target_endpoint_type(endpoint_type);
                }
            }
            CUSTOM_ACTIONS_SECTION => {
                for (key, action) in options.iter() {
                    map = map.with_custom_action(key, action);
                }
            }
            PATH_KEYWORDS_SECTION => {
                for (segment, keyword) in options.iter() {
                    map = map.with_path_keyword(segment, keyword);
                }
            }
            SERVICE_ENDPOINTS_SECTION => {
                for (catalog_type, taxonomy_type) in options.iter() {
                    map = map.with_service_endpoint(catalog_type, taxonomy_type);
                }
            }
            other => {
                debug!(section = other, "Ignoring unknown audit map section");
            }
        }
    }

    for warning in validate_audit_map(&map) {
        warn!(%warning, "Audit map validation warning");
    }

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
[DEFAULT]
target_endpoint_type = compute

[custom_actions]
reboot = start/reboot
os-migrations/get = read

[path_keywords]
servers = server
flavors = flavor

[service_endpoints]
compute = service/compute

[unrelated]
ignored = yes
";

    #[test]
    fn test_parse_all_sections() {
        let map = parse_audit_map(SAMPLE).unwrap();

        assert_eq!(map.default_target_endpoint_type(), Some("compute"));
        assert_eq!(map.custom_action("reboot"), Some("start/reboot"));
        assert_eq!(map.custom_action("os-migrations/get"), Some("read"));
        assert_eq!(map.path_keyword("servers"), Some("server"));
        assert_eq!(map.path_keyword("flavors"), Some("flavor"));
        assert_eq!(map.service_type("compute"), Some("service/compute"));
        assert_eq!(map.path_keywords().len(), 2);
    }

    #[test]
    fn test_missing_sections_yield_empty_tables() {
        let map = parse_audit_map("[path_keywords]\nservers = server\n").unwrap();

        assert!(map.custom_actions().is_empty());
        assert!(map.service_endpoints().is_empty());
        assert!(map.default_target_endpoint_type().is_none());
        assert_eq!(map.path_keyword("servers"), Some("server"));
    }

    #[test]
    fn test_empty_content_is_empty_map() {
        let map = parse_audit_map("").unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_unterminated_section_is_parse_error() {
        let err = parse_audit_map("[custom_actions\nreboot = start/reboot\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Error parsing audit map file"));
    }

    #[test]
    fn test_option_outside_section_is_parse_error() {
        let err = parse_audit_map("orphan = value\n[path_keywords]\nservers = server\n").unwrap_err();
        assert!(matches!(err, ConfigError::MissingSectionHeader(ref key) if key == "orphan"));
        assert!(err.to_string().starts_with("Error parsing audit map file"));
    }

    #[test]
    fn test_values_kept_verbatim() {
        let map = parse_audit_map(
            "[path_keywords]\nservers = a\\b\n\n[custom_actions]\nreboot = \"quoted\"\n",
        )
        .unwrap();

        assert_eq!(map.path_keyword("servers"), Some("a\\b"));
        assert_eq!(map.custom_action("reboot"), Some("\"quoted\""));
    }

    #[test]
    fn test_no_path_is_empty_map() {
        assert_eq!(load_audit_map(None).unwrap(), AuditMap::default());
    }

    #[test]
    fn test_missing_file_equals_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.conf");
        let empty = dir.path().join("empty.conf");
        std::fs::File::create(&empty).unwrap();

        let from_missing = load_audit_map(Some(&missing)).unwrap();
        let from_empty = load_audit_map(Some(&empty)).unwrap();
        assert_eq!(from_missing, from_empty);
        assert!(from_missing.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let map = load_audit_map(Some(file.path())).unwrap();
        assert_eq!(map, parse_audit_map(SAMPLE).unwrap());
    }
}
