//! Shared fixtures for integration tests.

use std::io::Write;

use tempfile::NamedTempFile;

/// Audit map in the layout deployments ship.
pub const AUDIT_MAP: &str = "\
[DEFAULT]
# default target endpoint type
# should match the endpoint type defined in service catalog
target_endpoint_type = compute

[custom_actions]
enable = enable
disable = disable
startup = start/startup
shutdown = stop/shutdown
reboot = start/reboot
os-migrations/get = read
os-server-password/post = update

[path_keywords]
action = None
detail = None
flavors = flavor
images = image
metadata = key
os-server-password = None
servers = server

[service_endpoints]
identity = service/security
image = service/storage/image
compute = service/compute
";

/// Catalog in the single-quoted literal form the token middleware emits.
#[allow(dead_code)]
pub const CATALOG: &str = "[\
{'endpoints': [{'adminURL': 'http://admin_host:8774', 'region': 'RegionOne', \
'publicURL': 'http://public_host:8774', 'internalURL': 'http://internal_host:8774', \
'id': 'resource_id'}], 'type': 'compute', 'name': 'nova'}, \
{'endpoints': [{'adminURL': 'http://admin_host:9292', \
'publicURL': 'http://public_host:9292', 'internalURL': 'http://internal_host:9292'}], \
'type': 'image', 'name': 'glance'}]";

/// Write `content` to a temporary audit map file.
pub fn write_audit_map(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}
