//! Audit Middleware.
//! Attaches the action and target of every request.

use axum::{
    body::Body,
    extract::State,
    http::{Method, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use http_body_util::LengthLimitError;
use std::sync::Arc;
use tracing::{info, warn};

use crate::audit::{Action, AuditApi, Target};
use crate::http::request::AuditRequest;

/// Largest POST body buffered for classification.
pub const MAX_AUDIT_BODY_BYTES: usize = 1024 * 1024;

/// Audit data attached to request extensions.
#[derive(Clone, Debug)]
pub struct AuditContext {
    pub action: Action,
    pub target: Target,
}

/// Classify the request, attach an [`AuditContext`] and forward it.
///
/// ```ignore
/// let app = Router::new()
///     .route("/{*path}", any(handler))
///     .layer(axum::middleware::from_fn_with_state(api, audit_middleware));
/// ```
pub async fn audit_middleware(
    State(api): State<Arc<AuditApi>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let (parts, body) = req.into_parts();

    // 1. Buffer POST bodies; an action body names the update verb.
    let (body, buffered) = if parts.method == Method::POST {
        match axum::body::to_bytes(body, MAX_AUDIT_BODY_BYTES).await {
            Ok(bytes) => (Body::from(bytes.clone()), Some(bytes)),
            Err(e) => {
                warn!(error = %e, path = %parts.uri.path(), "Unable to buffer request body");
                return body_error_response(&e);
            }
        }
    } else {
        (body, None)
    };

    // 2. Classify and resolve
    let audit_req = AuditRequest::from_parts(&parts, buffered);
    let action = api.get_action(&audit_req);
    let target = api.get_target_resource(&audit_req);

    info!(
        target: "audit",
        method = %parts.method,
        path = %audit_req.path(),
        action = %action,
        target_type_uri = %target.type_uri(),
        target_id = %target.id(),
        "audit_request"
    );

    // 3. Attach context
    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(AuditContext { action, target });
    next.run(req).await
}

/// Rejection for a POST body that could not be buffered.
///
/// Only an exceeded limit is a 413; any other read failure is a 400.
fn body_error_response(err: &axum::Error) -> Response {
    let too_large = std::error::Error::source(err)
        .is_some_and(|source| source.is::<LengthLimitError>());

    if too_large {
        (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large").into_response()
    } else {
        (StatusCode::BAD_REQUEST, "Unable to read request body").into_response()
    }
}
