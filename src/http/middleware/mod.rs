//! Request middleware.

pub mod audit;

pub use audit::{audit_middleware, AuditContext, MAX_AUDIT_BODY_BYTES};
