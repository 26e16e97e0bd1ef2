//! Audit classification subsystem.
//!
//! # Data Flow
//! ```text
//! AuditRequest (method, path, host URL, body, catalog header)
//!     → classifier.rs (action from method + last path segment)
//!     → catalog.rs    (parse catalog header)
//!     → target.rs     (catalog entry → service info → Target)
//!     → (Action, Target) for the audit event
//! ```
//!
//! # Design Decisions
//! - Pure functions of (request, catalog, audit map); nothing is cached
//! - Unparseable input degrades to `create` / `unknown`, never an error
//! - `api.rs` bundles both halves behind one owner of the audit map

pub mod api;
pub mod catalog;
pub mod classifier;
pub mod target;
pub mod taxonomy;

pub use api::AuditApi;
pub use catalog::{Catalog, CatalogEntry, CatalogError, EndpointUrls, SERVICE_CATALOG_HEADER};
pub use classifier::ActionClassifier;
pub use target::{Endpoint, ServiceInfo, Target, TargetResolver};
pub use taxonomy::{Action, UNKNOWN};
