//! Action classification against a loaded audit map.

use audit_mapper::{Action, AuditApi, AuditRequest};
use axum::http::Method;

mod common;

fn api() -> AuditApi {
    let file = common::write_audit_map(common::AUDIT_MAP);
    AuditApi::from_config_file(Some(file.path())).unwrap()
}

fn action(api: &AuditApi, method: Method, path: &str) -> String {
    let req = AuditRequest::new(method, path, "http://admin_host:8774");
    api.get_action(&req).to_string()
}

#[test]
fn test_collection_and_instance_reads() {
    let api = api();
    assert_eq!(action(&api, Method::GET, "/v2/tenant/servers"), "list");
    assert_eq!(action(&api, Method::GET, "/v2/tenant/servers/"), "list");
    assert_eq!(action(&api, Method::GET, "/v2/tenant/servers.json"), "list");
    assert_eq!(action(&api, Method::GET, "/v2/tenant/servers/123"), "read");
    assert_eq!(action(&api, Method::HEAD, "/v2/tenant/servers/123"), "read");
}

#[test]
fn test_writes() {
    let api = api();
    assert_eq!(action(&api, Method::POST, "/v2/tenant/servers"), "create");
    assert_eq!(action(&api, Method::POST, "/v2/tenant/servers/123"), "update");
    assert_eq!(action(&api, Method::PUT, "/v2/tenant/servers/123"), "update");
    assert_eq!(action(&api, Method::PATCH, "/v2/tenant/servers/123"), "update");
    assert_eq!(action(&api, Method::DELETE, "/v2/tenant/servers/123"), "delete");
}

#[test]
fn test_custom_actions_from_file() {
    let api = api();
    assert_eq!(action(&api, Method::POST, "/v2/tenant/servers/1/reboot"), "start/reboot");
    assert_eq!(action(&api, Method::GET, "/v2/tenant/os-migrations"), "read");
    assert_eq!(
        action(&api, Method::POST, "/v2/tenant/servers/1/os-server-password"),
        "update"
    );
    // Method-qualified entry does not apply to other methods.
    assert_eq!(
        action(&api, Method::GET, "/v2/tenant/servers/1/os-server-password"),
        "list"
    );
}

#[test]
fn test_action_body_verbs() {
    let api = api();
    let path = "/v2/tenant/servers/1/action";

    let req = AuditRequest::new(Method::POST, path, "http://admin_host:8774")
        .with_body(r#"{"createImage": {"name": "snap"}}"#);
    assert_eq!(api.get_action(&req), Action::UpdateWith("createImage".into()));

    let req = AuditRequest::new(Method::POST, path, "http://admin_host:8774")
        .with_body("reboot please");
    assert_eq!(api.get_action(&req), Action::Create);
}

#[test]
fn test_unknown_method() {
    let api = api();
    let method = Method::from_bytes(b"PROPFIND").unwrap();
    assert_eq!(action(&api, method, "/v2/tenant/servers"), "unknown");
}
