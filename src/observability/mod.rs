//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config loader, classifier, resolver, middleware
//!     → tracing events (structured fields)
//!     → logging.rs subscriber (stderr, text or JSON)
//! ```
//!
//! # Design Decisions
//! - Audit decisions are logged under the `audit` target
//! - A missing service catalog is a warning, never an error

pub mod logging;
