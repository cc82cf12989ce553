//! Axum route handlers for the AI narrative endpoints.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ai::cover_letter;
use crate::ai::document::{self, DocumentAnalysis};
use crate::analysis::handlers::{file_extension, spool_and_extract};
use crate::errors::AppError;
use crate::extract::{decode_plain_text, decode_strict_utf8};
use crate::state::AppState;
use crate::utc_timestamp;

#[derive(Debug, Serialize)]
pub struct DocumentAnalysisResponse {
    pub status: &'static str,
    pub filename: String,
    #[serde(flatten)]
    pub analysis: DocumentAnalysis,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub struct CoverLetterRequest {
    pub resume_summary: String,
    pub job_description: String,
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct CoverLetterResponse {
    pub status: &'static str,
    pub cover_letter: String,
    pub role: String,
    pub timestamp: String,
}

/// POST /api/analyze-document
///
/// Accepts any upload: PDF and Word documents go through extraction,
/// `.txt`/`.md` decode as UTF-8 with a Latin-1 fallback, anything else must
/// be valid UTF-8 or is rejected naming the extension.
pub async fn handle_analyze_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<DocumentAnalysisResponse>, AppError> {
    let mut filename = None;
    let mut content = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            filename = field.file_name().map(str::to_string);
            content = Some(field.bytes().await.map_err(|e| {
                AppError::BadRequest(format!("Failed to read uploaded file: {e}"))
            })?);
        }
    }

    let filename = filename.ok_or_else(|| AppError::BadRequest("No file provided".to_string()))?;
    let content = content.ok_or_else(|| AppError::BadRequest("No file provided".to_string()))?;
    let ext = file_extension(&filename);

    let text = match ext.as_str() {
        "pdf" | "docx" | "doc" => spool_and_extract(&content, &ext)?,
        "txt" | "md" => decode_plain_text(&content),
        _ => decode_strict_utf8(&content).ok_or_else(|| {
            AppError::BadRequest(format!("Unsupported file type: .{ext}"))
        })?,
    };

    if text.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Could not extract readable text from the file.".to_string(),
        ));
    }

    info!(filename = %filename, chars = text.len(), "analyzing document");

    let analysis = document::analyze(state.generator(), &text).await;

    Ok(Json(DocumentAnalysisResponse {
        status: "ok",
        filename,
        analysis,
        timestamp: utc_timestamp(),
    }))
}

/// POST /api/generate-cover-letter
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    let letter = cover_letter::generate(
        state.generator(),
        &request.resume_summary,
        &request.job_description,
        &request.role,
    )
    .await;

    Ok(Json(CoverLetterResponse {
        status: "ok",
        cover_letter: letter,
        role: request.role,
        timestamp: utc_timestamp(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RoleCatalog;
    use crate::config::Config;
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState {
            catalog: Arc::new(RoleCatalog::builtin()),
            generator: None,
            config: Config {
                gemini_api_key: None,
                port: 8000,
                rust_log: "info".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_cover_letter_endpoint_fallback_path() {
        let request = CoverLetterRequest {
            resume_summary: "Five years of backend work".to_string(),
            job_description: "Build services".to_string(),
            role: "Software Engineer".to_string(),
        };
        let Json(response) = handle_generate_cover_letter(State(test_state()), Json(request))
            .await
            .unwrap();
        assert_eq!(response.status, "ok");
        assert!(response.cover_letter.starts_with("Dear Hiring Manager,"));
        assert_eq!(response.role, "Software Engineer");
    }

    #[test]
    fn test_document_response_flattens_analysis() {
        let response = DocumentAnalysisResponse {
            status: "ok",
            filename: "notes.txt".to_string(),
            analysis: DocumentAnalysis {
                document_type: "General Document".to_string(),
                summary: "s".to_string(),
                key_points: vec![],
                sentiment: document::Sentiment::Neutral,
                readability_score: 75.0,
                word_count: 4,
                improvement_suggestions: vec![],
            },
            timestamp: utc_timestamp(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["word_count"], 4);
        assert_eq!(json["sentiment"], "neutral");
        assert_eq!(json["filename"], "notes.txt");
    }
}
