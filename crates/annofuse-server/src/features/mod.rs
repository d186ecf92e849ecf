//! Feature modules implementing the annofuse API
//!
//! Each feature is organized as a vertical slice with its own commands,
//! queries, and routes:
//!
//! - **genes**: gene-list upload and combined-annotation queries
//!
//! Commands and queries are plain structs with a `handle` function next to
//! them; routes translate slice errors into HTTP responses.

pub mod genes;

use axum::Router;

use crate::annotation::AnnotationClient;
use crate::session::SessionStore;

/// Shared state for all feature routes
#[derive(Clone)]
pub struct FeatureState {
    /// Upload sessions keyed by token
    pub sessions: SessionStore,
    /// Client for both external annotation services
    pub annotations: AnnotationClient,
}

/// Creates the API router with all feature routes mounted
///
/// The upload/query surface is mounted at the root: `POST /upload` and
/// `GET /query` are the service's fixed public paths.
pub fn router(state: FeatureState) -> Router<()> {
    Router::new().merge(genes::genes_routes().with_state(state))
}
