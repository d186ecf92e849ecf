//! Common types used across annofuse

use serde::{Deserialize, Serialize};

/// One gene's merged annotation record, as returned to API clients.
///
/// `gene_id` and `annotation` come from the annotation service;
/// `additional_info` comes from the supplement service. The wire field names
/// are fixed by the public API contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedAnnotation {
    #[serde(rename = "GeneID")]
    pub gene_id: String,
    #[serde(rename = "Annotation")]
    pub annotation: String,
    #[serde(rename = "AdditionalInfo")]
    pub additional_info: String,
}

impl CombinedAnnotation {
    pub fn new(
        gene_id: impl Into<String>,
        annotation: impl Into<String>,
        additional_info: impl Into<String>,
    ) -> Self {
        Self {
            gene_id: gene_id.into(),
            annotation: annotation.into(),
            additional_info: additional_info.into(),
        }
    }
}
