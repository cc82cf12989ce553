//! Cover letter generation flavor. Plain-text output, no JSON contract.

use tracing::{debug, warn};

use crate::ai::prompts;
use crate::llm_client::TextGenerator;

/// Generates a cover letter, falling back to a fixed professional template
/// when no model is configured and to a short notice when the call fails.
pub async fn generate(
    generator: Option<&dyn TextGenerator>,
    resume_summary: &str,
    job_description: &str,
    role: &str,
) -> String {
    let generator = match generator {
        Some(g) => g,
        None => {
            debug!("no model configured, using template cover letter");
            return template_letter(role);
        }
    };

    let prompt = prompts::cover_letter(resume_summary, job_description, role);
    match generator.generate(&prompt).await {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            warn!("cover letter model call failed: {e}");
            "Failed to generate cover letter. Please try again or check API configuration."
                .to_string()
        }
    }
}

fn template_letter(role: &str) -> String {
    format!(
        "Dear Hiring Manager,\n\n\
         I am writing to express my strong interest in the {role} position at your company. \
         Based on my background and experience outlined in my resume, I believe I would be a \
         valuable addition to your team.\n\n\
         My experience aligns well with the requirements you've outlined. I bring a combination \
         of technical skills and practical experience that would enable me to contribute \
         effectively to your projects and objectives.\n\n\
         I am particularly excited about the opportunity to work in an environment that values \
         innovation and professional growth. I would welcome the chance to discuss how my \
         skills and enthusiasm can benefit your organization.\n\n\
         Thank you for considering my application. I look forward to hearing from you soon.\n\n\
         Sincerely,\n\
         [Your Name]"
    )
}
