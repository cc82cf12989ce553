//! Prompt builders for the three analysis flavors.
//!
//! Input text is clipped before interpolation: analysis bodies to 4000
//! characters, job descriptions to 1000.

use super::truncate_chars;

const RESUME_BODY_CAP: usize = 4000;
const DOCUMENT_BODY_CAP: usize = 4000;
const JOB_DESCRIPTION_CAP: usize = 1000;

/// Prompt for resume analysis. The model must answer with a bare JSON
/// object matching `resume::ResumeAnalysis`.
pub fn resume_analysis(resume_text: &str, role: &str, job_description: Option<&str>) -> String {
    let requirements = match job_description {
        Some(jd) => truncate_chars(jd, JOB_DESCRIPTION_CAP).to_string(),
        None => format!("General {role} role requirements"),
    };

    format!(
        r#"Analyze this resume for a {role} position and return ONLY a valid JSON object with this exact structure:

{{
  "summary": "2-line professional summary based on the resume content",
  "strengths": ["specific strength from resume", "another strength", "third strength"],
  "weaknesses": ["area needing improvement", "another weakness"],
  "missing_skills": ["skill1 from job requirements", "skill2", "skill3"],
  "suggestions": [
    {{"type": "quick", "text": "specific actionable suggestion"}},
    {{"type": "quantify", "text": "add specific metrics suggestion"}},
    {{"type": "structure", "text": "formatting or structure improvement"}}
  ],
  "skill_distribution": {{"skill1": 30, "skill2": 25, "skill3": 25, "skill4": 20}}
}}

Resume text:
{body}

Job requirements (if provided):
{requirements}

Return ONLY the JSON object, no other text or markdown formatting."#,
        role = role,
        body = truncate_chars(resume_text, RESUME_BODY_CAP),
        requirements = requirements,
    )
}

/// Prompt for general document analysis, `document::DocumentAnalysis` shaped.
pub fn document_analysis(text: &str, word_count: usize) -> String {
    format!(
        r#"Analyze the following document and return ONLY a valid JSON object with this exact structure:

{{
  "document_type": "Document Type (e.g., Business Report, Legal Contract, Academic Paper, etc.)",
  "summary": "A comprehensive 2-3 sentence summary of the document content and purpose.",
  "key_points": ["Key point 1", "Key point 2", "Key point 3", "Key point 4", "Key point 5"],
  "sentiment": "positive/negative/neutral",
  "readability_score": 75,
  "word_count": {word_count},
  "improvement_suggestions": ["suggestion 1", "suggestion 2", "suggestion 3", "suggestion 4"]
}}

Document text (first 4000 characters):
{body}

Analyze the content type, extract key insights, determine sentiment, and provide improvement suggestions.
Return ONLY the JSON object with no additional text or formatting."#,
        word_count = word_count,
        body = truncate_chars(text, DOCUMENT_BODY_CAP),
    )
}

/// Prompt for cover letter generation. Plain text response, no JSON.
pub fn cover_letter(resume_summary: &str, job_description: &str, role: &str) -> String {
    format!(
        r#"Write a professional cover letter for a {role} position. The cover letter should be:
- 3-4 paragraphs long
- Professional but engaging tone
- Highlight relevant skills and experience
- Show enthusiasm for the role
- Include a call to action

Resume Summary: {resume_summary}
Job Description: {job_description}
Target Role: {role}

Start with "Dear Hiring Manager," and provide only the cover letter text, no additional formatting."#,
    )
}
