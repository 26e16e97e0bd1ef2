//! Request → action classification.
//!
//! # Precedence
//! ```text
//! 1. custom_actions["<segment>/<method>"]
//! 2. custom_actions["<segment>"]
//! 3. method rules:
//!      POST   .../action → update/<first body key>, or create
//!      POST   keyword    → create, otherwise update
//!      GET    keyword    → list, otherwise read
//!      PUT | PATCH       → update
//!      DELETE            → delete
//!      HEAD              → read
//!      other             → unknown
//! ```
//!
//! `<segment>` is the last path segment after dropping one trailing `/`
//! and a `.json` suffix.

use axum::http::Method;
use serde_json::Value;
use tracing::debug;

use crate::audit::taxonomy::Action;
use crate::config::AuditMap;

/// Path segment whose POST body names the update verb.
pub const ACTION_SEGMENT: &str = "action";

const JSON_SUFFIX: &str = ".json";

/// Strip a `.json` suffix from a path segment.
pub fn strip_json_suffix(segment: &str) -> &str {
    segment.strip_suffix(JSON_SUFFIX).unwrap_or(segment)
}

/// Last path segment used for classification.
pub fn last_segment(path: &str) -> &str {
    let path = path.strip_suffix('/').unwrap_or(path);
    let segment = match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    };
    strip_json_suffix(segment)
}

/// Classifies requests using an audit map.
#[derive(Debug, Clone, Copy)]
pub struct ActionClassifier<'a> {
    map: &'a AuditMap,
}

impl<'a> ActionClassifier<'a> {
    pub fn new(map: &'a AuditMap) -> Self {
        Self { map }
    }

    /// Classify a request. `body` is only consulted for `POST .../action`.
    pub fn classify(&self, method: &Method, path: &str, body: Option<&[u8]>) -> Action {
        let segment = last_segment(path);

        let method_key = format!("{}/{}", segment, method.as_str().to_lowercase());
        if let Some(action) = self.map.custom_action(&method_key) {
            return Action::Custom(action.to_string());
        }
        if let Some(action) = self.map.custom_action(segment) {
            return Action::Custom(action.to_string());
        }

        match *method {
            Method::POST => {
                if segment == ACTION_SEGMENT {
                    body_action(body)
                } else if !self.map.is_path_keyword(segment) {
                    Action::Update
                } else {
                    Action::Create
                }
            }
            Method::GET => {
                if self.map.is_path_keyword(segment) {
                    Action::List
                } else {
                    Action::Read
                }
            }
            Method::PUT | Method::PATCH => Action::Update,
            Method::DELETE => Action::Delete,
            Method::HEAD => Action::Read,
            _ => Action::Unknown,
        }
    }
}

/// Action for a POST to an `action` resource.
///
/// The verb is the first key of the JSON body in document order. Anything
/// else (no body, invalid JSON, a non-object, an empty object) is a create.
fn body_action(body: Option<&[u8]>) -> Action {
    let Some(body) = body.filter(|b| !b.is_empty()) else {
        return Action::Create;
    };

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(object)) => match object.keys().next() {
            Some(verb) => Action::UpdateWith(verb.clone()),
            None => Action::Create,
        },
        Ok(_) => Action::Create,
        Err(e) => {
            debug!(error = %e, "Action body is not valid JSON, classifying as create");
            Action::Create
        }
    }
}
