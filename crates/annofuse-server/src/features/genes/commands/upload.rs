use annofuse_common::{tabular, AnnofuseError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::session::SessionStore;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadGenesCommand {
    pub filename: String,
    #[serde(skip)]
    pub content: Vec<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadGenesResponse {
    pub message: String,
    pub session: Uuid,
    pub genes: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum UploadGenesError {
    #[error("Failed to parse gene list: {0}")]
    Parse(#[from] AnnofuseError),
}

#[tracing::instrument(skip(sessions, command), fields(filename = %command.filename))]
pub fn handle(
    sessions: &SessionStore,
    command: UploadGenesCommand,
) -> Result<UploadGenesResponse, UploadGenesError> {
    let genes = tabular::parse_gene_list(&command.content)?;

    let session = sessions.create(genes.clone());

    tracing::info!(
        session = %session,
        genes = genes.len(),
        "Gene list stored"
    );

    Ok(UploadGenesResponse {
        message: "File uploaded successfully".to_string(),
        session,
        genes,
    })
}
