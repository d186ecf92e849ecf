//! Annofuse Server Library
//!
//! HTTP service for combining gene annotations from external services.
//!
//! # Overview
//!
//! The annofuse server exposes a small pipeline over HTTP:
//!
//! - **Upload**: accept a delimited gene-list file, parse it, and store the
//!   identifiers under a fresh session token
//! - **Query**: for each identifier in a session, call the annotation
//!   service and the supplement service and merge both records per gene
//! - **Configuration**: environment-based configuration management
//! - **Middleware**: CORS and request logging
//!
//! # Architecture
//!
//! Features are organized as vertical slices: each operation lives next to
//! its request/response types and its error enum, and routes translate slice
//! errors into HTTP responses. Outbound calls go through a single
//! [`annotation::AnnotationClient`] with an explicit timeout; uploaded gene
//! lists are held in a TTL-bounded [`session::SessionStore`] keyed by UUID,
//! so concurrent callers never observe each other's uploads.
//!
//! ## Framework Stack
//!
//! - **Axum**: web framework (multipart upload, JSON responses)
//! - **Reqwest**: outbound HTTP client
//! - **Tower**: middleware and service abstractions
//!
//! # Example
//!
//! ```no_run
//! use annofuse_server::{api, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     api::serve(config).await?;
//!     Ok(())
//! }
//! ```

pub mod annotation;
pub mod api;
pub mod config;
pub mod features;
pub mod middleware;
pub mod session;

// Re-export commonly used types
pub use annotation::{AnnotationClient, ClientError};
pub use session::SessionStore;
