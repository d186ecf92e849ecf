use annofuse_common::types::CombinedAnnotation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::annotation::{AnnotationClient, ClientError};
use crate::session::SessionStore;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombineAnnotationsQuery {
    pub session: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombineAnnotationsResponse {
    pub results: Vec<CombinedAnnotation>,
}

#[derive(Debug, thiserror::Error)]
pub enum CombineAnnotationsError {
    #[error("No gene list found for session {0}")]
    SessionNotFound(Uuid),

    #[error("Annotation service failure: {0}")]
    Annotation(#[source] ClientError),

    #[error("Supplement service failure: {0}")]
    Supplement(#[source] ClientError),
}

/// Combine both services' records for every gene in the session.
///
/// Genes are processed strictly in upload order, one at a time; both calls
/// for a gene complete before the next gene begins. The first failure from
/// either service aborts the whole query and discards everything combined
/// so far. The supplement lookup keys off the identifier the annotation
/// service returned, which need not match the uploaded one.
#[tracing::instrument(skip(sessions, client), fields(session = %query.session))]
pub async fn handle(
    sessions: &SessionStore,
    client: &AnnotationClient,
    query: CombineAnnotationsQuery,
) -> Result<CombineAnnotationsResponse, CombineAnnotationsError> {
    let genes = sessions
        .genes(&query.session)
        .ok_or(CombineAnnotationsError::SessionNotFound(query.session))?;

    let mut results = Vec::with_capacity(genes.len());

    for gene in &genes {
        let annotation = client
            .fetch_annotation(gene)
            .await
            .map_err(CombineAnnotationsError::Annotation)?;

        let supplement = client
            .fetch_supplement(&annotation.gene_id)
            .await
            .map_err(CombineAnnotationsError::Supplement)?;

        tracing::debug!(
            uploaded = %gene,
            resolved = %annotation.gene_id,
            "Gene combined"
        );

        results.push(CombinedAnnotation {
            gene_id: annotation.gene_id,
            annotation: annotation.annotation,
            additional_info: supplement.additional_info,
        });
    }

    tracing::info!(genes = results.len(), "Combined annotation query complete");

    Ok(CombineAnnotationsResponse { results })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_not_found_display() {
        let token = Uuid::nil();
        let err = CombineAnnotationsError::SessionNotFound(token);
        assert!(err.to_string().contains("No gene list found"));
    }

    #[tokio::test]
    async fn test_unknown_session_fails_before_any_call() {
        let sessions = SessionStore::new(60);
        let client = AnnotationClient::new(&crate::config::AnnotationConfig {
            annotation_base_url: "http://127.0.0.1:9".to_string(),
            supplement_base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 1,
        })
        .unwrap();

        let result = handle(
            &sessions,
            &client,
            CombineAnnotationsQuery {
                session: Uuid::new_v4(),
            },
        )
        .await;

        assert!(matches!(
            result,
            Err(CombineAnnotationsError::SessionNotFound(_))
        ));
    }
}
