//! Outbound annotation service clients
//!
//! Two external services contribute to each gene's combined record: the
//! annotation service resolves an identifier to an annotation, and the
//! supplement service adds supplementary detail. Both are plain
//! `GET {base}/{gene_id}` JSON endpoints reached through a single
//! [`AnnotationClient`].

pub mod client;
pub mod models;

pub use client::{AnnotationClient, ClientError};
pub use models::{GeneAnnotation, GeneSupplement};
