//! HTTP integration subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request (enclosing service)
//!     → middleware/audit.rs (buffer POST body)
//!     → request.rs (method, path, host URL, catalog header)
//!     → audit::AuditApi (action + target)
//!     → AuditContext in request extensions
//!     → inner service
//! ```

pub mod middleware;
pub mod request;

pub use middleware::{audit_middleware, AuditContext};
pub use request::AuditRequest;
