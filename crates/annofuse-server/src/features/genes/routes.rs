use crate::api::response::ErrorResponse;
use crate::features::FeatureState;
use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use super::{
    commands::{UploadGenesCommand, UploadGenesError},
    queries::{CombineAnnotationsError, CombineAnnotationsQuery},
};

pub fn genes_routes() -> Router<FeatureState> {
    Router::new()
        .route("/upload", post(upload_genes))
        .route("/query", get(query_annotations))
}

#[tracing::instrument(skip(state, multipart))]
async fn upload_genes(
    State(state): State<FeatureState>,
    mut multipart: Multipart,
) -> Result<Response, GeneApiError> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| GeneApiError::InvalidUpload(e.to_string()))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("upload.csv").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| GeneApiError::InvalidUpload(e.to_string()))?;
            upload = Some((filename, data.to_vec()));
        }
    }

    let (filename, content) = upload.ok_or(GeneApiError::FileRequired)?;

    let command = UploadGenesCommand { filename, content };

    let response = super::commands::upload::handle(&state.sessions, command)?;

    tracing::info!(
        session = %response.session,
        genes = response.genes.len(),
        "Gene list uploaded via API"
    );

    Ok((StatusCode::OK, Json(response)).into_response())
}

#[derive(Debug, Deserialize)]
struct QueryParams {
    session: Option<Uuid>,
}

#[tracing::instrument(skip(state, params))]
async fn query_annotations(
    State(state): State<FeatureState>,
    Query(params): Query<QueryParams>,
) -> Result<Response, GeneApiError> {
    let session = params.session.ok_or(GeneApiError::SessionRequired)?;

    let query = CombineAnnotationsQuery { session };

    let response =
        super::queries::combine::handle(&state.sessions, &state.annotations, query).await?;

    Ok((StatusCode::OK, Json(response.results)).into_response())
}

#[derive(Debug)]
enum GeneApiError {
    FileRequired,
    InvalidUpload(String),
    SessionRequired,
    UploadError(UploadGenesError),
    CombineError(CombineAnnotationsError),
}

impl From<UploadGenesError> for GeneApiError {
    fn from(err: UploadGenesError) -> Self {
        Self::UploadError(err)
    }
}

impl From<CombineAnnotationsError> for GeneApiError {
    fn from(err: CombineAnnotationsError) -> Self {
        Self::CombineError(err)
    }
}

impl IntoResponse for GeneApiError {
    fn into_response(self) -> Response {
        match self {
            GeneApiError::FileRequired => {
                let error = ErrorResponse::new(
                    "VALIDATION_ERROR",
                    "A gene list is required under the multipart field `file`",
                );
                (StatusCode::BAD_REQUEST, Json(error)).into_response()
            },
            GeneApiError::InvalidUpload(ref message) => {
                let error = ErrorResponse::new("VALIDATION_ERROR", message.clone());
                (StatusCode::BAD_REQUEST, Json(error)).into_response()
            },
            GeneApiError::SessionRequired => {
                let error = ErrorResponse::new(
                    "SESSION_REQUIRED",
                    "A session token from a prior upload is required",
                );
                (StatusCode::BAD_REQUEST, Json(error)).into_response()
            },
            GeneApiError::UploadError(UploadGenesError::Parse(_)) => {
                tracing::error!("Gene list parse failure: {}", self);
                let error = ErrorResponse::new("PARSE_ERROR", self.to_string());
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            },
            GeneApiError::CombineError(CombineAnnotationsError::SessionNotFound(_)) => {
                let error = ErrorResponse::new("SESSION_NOT_FOUND", self.to_string());
                (StatusCode::BAD_REQUEST, Json(error)).into_response()
            },
            GeneApiError::CombineError(CombineAnnotationsError::Annotation(_)) => {
                tracing::error!("Annotation service failure during query: {}", self);
                let error =
                    ErrorResponse::new("UPSTREAM_ERROR", "Failed to query the annotation service");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            },
            GeneApiError::CombineError(CombineAnnotationsError::Supplement(_)) => {
                tracing::error!("Supplement service failure during query: {}", self);
                let error =
                    ErrorResponse::new("UPSTREAM_ERROR", "Failed to query the supplement service");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(error)).into_response()
            },
        }
    }
}

impl std::fmt::Display for GeneApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileRequired => write!(f, "Missing multipart field `file`"),
            Self::InvalidUpload(message) => write!(f, "{}", message),
            Self::SessionRequired => write!(f, "Missing session token"),
            Self::UploadError(e) => write!(f, "{}", e),
            Self::CombineError(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use annofuse_common::AnnofuseError;

    #[test]
    fn test_error_display() {
        let err = GeneApiError::UploadError(UploadGenesError::Parse(AnnofuseError::EmptyTable));
        assert!(err.to_string().contains("Failed to parse gene list"));
    }

    #[test]
    fn test_file_required_display() {
        let err = GeneApiError::FileRequired;
        assert!(err.to_string().contains("file"));
    }

    #[test]
    fn test_routes_structure() {
        let router = genes_routes();
        assert!(format!("{:?}", router).contains("Router"));
    }
}
