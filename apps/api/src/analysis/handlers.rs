//! Axum route handlers for resume scoring, interview questions, and salary.

use std::io::Write;

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ai::resume::ResumeAnalysis;
use crate::analysis::ats::{self, AtsMetrics};
use crate::analysis::{interview, salary};
use crate::errors::AppError;
use crate::extract::extract_document_text;
use crate::state::AppState;
use crate::utc_timestamp;

/// Extensions accepted for resume uploads.
const RESUME_EXTENSIONS: &[&str] = &["pdf", "docx", "doc"];

#[derive(Debug, Serialize)]
pub struct ResumeAnalysisResponse {
    pub status: &'static str,
    pub metrics: AtsMetrics,
    #[serde(flatten)]
    pub analysis: ResumeAnalysis,
    pub keywords_matched: Vec<String>,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub struct InterviewRequest {
    pub job_role: String,
    pub skills: Vec<String>,
    #[serde(default = "default_experience_level")]
    pub experience_level: String,
}

#[derive(Debug, Serialize)]
pub struct InterviewResponse {
    pub status: &'static str,
    pub questions: Vec<String>,
    pub role: String,
    pub experience_level: String,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
pub struct SalaryRequest {
    pub job_role: String,
    pub experience_level: String,
    /// Accepted for parity with the request contract; salary math is driven
    /// by role, level, and location only.
    #[serde(default)]
    #[allow(dead_code)]
    pub skills: Vec<String>,
    #[serde(default = "default_location")]
    pub location: String,
}

#[derive(Debug, Serialize)]
pub struct SalaryResponse {
    pub status: &'static str,
    #[serde(flatten)]
    pub estimate: salary::SalaryEstimate,
    pub role: String,
    pub experience_level: String,
    pub location: String,
    pub timestamp: String,
}

fn default_experience_level() -> String {
    "Mid-level".to_string()
}

fn default_location() -> String {
    "United States".to_string()
}

/// POST /api/analyze-resume
///
/// Multipart upload: `file` (.pdf/.docx/.doc), `job_role`, optional
/// `job_description`. Scores the resume and attaches the AI narrative
/// (or its deterministic fallback).
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ResumeAnalysisResponse>, AppError> {
    let upload = read_resume_upload(multipart).await?;

    let ext = file_extension(&upload.filename);
    if !RESUME_EXTENSIONS.contains(&ext.as_str()) {
        return Err(AppError::BadRequest(
            "Only PDF and DOCX files are supported for resume analysis.".to_string(),
        ));
    }

    let text = spool_and_extract(&upload.content, &ext)?;
    if text.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Could not extract text from the file. Please ensure the file contains readable text."
                .to_string(),
        ));
    }

    info!(
        role = %upload.job_role,
        chars = text.len(),
        "analyzing resume"
    );

    let metrics = ats::score(
        &state.catalog,
        &text,
        &upload.job_role,
        upload.job_description.as_deref(),
    );
    let analysis = crate::ai::resume::analyze(
        state.generator(),
        &state.catalog,
        &text,
        &upload.job_role,
        upload.job_description.as_deref(),
    )
    .await;

    let keywords_matched = metrics.keywords_matched.clone();
    Ok(Json(ResumeAnalysisResponse {
        status: "ok",
        metrics,
        analysis,
        keywords_matched,
        timestamp: utc_timestamp(),
    }))
}

/// POST /api/generate-interview-questions
pub async fn handle_interview_questions(
    State(state): State<AppState>,
    Json(request): Json<InterviewRequest>,
) -> Result<Json<InterviewResponse>, AppError> {
    let questions = interview::generate(
        &state.catalog,
        &request.job_role,
        &request.skills,
        &request.experience_level,
    );

    Ok(Json(InterviewResponse {
        status: "ok",
        questions,
        role: request.job_role,
        experience_level: request.experience_level,
        timestamp: utc_timestamp(),
    }))
}

/// POST /api/analyze-salary
pub async fn handle_analyze_salary(
    State(state): State<AppState>,
    Json(request): Json<SalaryRequest>,
) -> Result<Json<SalaryResponse>, AppError> {
    let estimate = salary::estimate(
        &state.catalog,
        &request.job_role,
        &request.experience_level,
        &request.location,
    );

    Ok(Json(SalaryResponse {
        status: "ok",
        estimate,
        role: request.job_role,
        experience_level: request.experience_level,
        location: request.location,
        timestamp: utc_timestamp(),
    }))
}

pub struct ResumeUpload {
    pub filename: String,
    pub content: Bytes,
    pub job_role: String,
    pub job_description: Option<String>,
}

async fn read_resume_upload(mut multipart: Multipart) -> Result<ResumeUpload, AppError> {
    let mut filename = None;
    let mut content = None;
    let mut job_role = None;
    let mut job_description = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                filename = field.file_name().map(str::to_string);
                content = Some(field.bytes().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read uploaded file: {e}"))
                })?);
            }
            Some("job_role") => {
                job_role = Some(field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read job_role: {e}"))
                })?);
            }
            Some("job_description") => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read job_description: {e}"))
                })?;
                if !text.trim().is_empty() {
                    job_description = Some(text);
                }
            }
            _ => {}
        }
    }

    let filename =
        filename.ok_or_else(|| AppError::BadRequest("No file provided".to_string()))?;
    let content =
        content.ok_or_else(|| AppError::BadRequest("No file provided".to_string()))?;
    let job_role =
        job_role.ok_or_else(|| AppError::BadRequest("job_role is required".to_string()))?;

    Ok(ResumeUpload {
        filename,
        content,
        job_role,
        job_description,
    })
}

/// Spools upload bytes to a scoped temp file and extracts plaintext.
/// The temp file is removed on every exit path when the guard drops.
pub fn spool_and_extract(content: &[u8], ext: &str) -> Result<String, AppError> {
    let mut tmp = tempfile::Builder::new()
        .suffix(&format!(".{ext}"))
        .tempfile()
        .map_err(|e| AppError::Internal(e.into()))?;
    tmp.write_all(content)
        .map_err(|e| AppError::Internal(e.into()))?;
    Ok(extract_document_text(tmp.path(), ext))
}

/// Lowercased extension without the dot; empty when the filename has none.
pub fn file_extension(filename: &str) -> String {
    std::path::Path::new(filename)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}
