//! Audit map configuration subsystem.
//!
//! # Data Flow
//! ```text
//! audit map file (ini)
//!     → loader.rs (read & parse sections)
//!     → schema.rs (AuditMap lookup tables)
//!     → validation.rs (semantic warnings)
//!     → AuditMap (immutable)
//!     → shared via Arc with every request
//! ```
//!
//! # Design Decisions
//! - The map is immutable once loaded; a new map means a new process
//! - A missing file or missing section yields empty tables, never an error
//! - Only a syntactically broken file is fatal
//! - Validation warns but never rejects

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_audit_map, parse_audit_map, ConfigError};
pub use schema::AuditMap;
