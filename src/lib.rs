//! Request audit mapping library.
//!
//! Classifies HTTP requests into audit actions and resolves the cloud
//! service they target from the token's service catalog.

pub mod audit;
pub mod config;
pub mod http;
pub mod observability;

pub use crate::audit::{Action, AuditApi, Target};
pub use crate::config::AuditMap;
pub use crate::http::{audit_middleware, AuditContext, AuditRequest};
