//! Resume analysis flavor: model call with deterministic fallback tiers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::ai::{parse_json_object, prompts, strip_json_fences};
use crate::catalog::RoleCatalog;
use crate::llm_client::TextGenerator;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

/// Narrative resume analysis. Same schema whether the model, the no-model
/// fallback, or the error substitute produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub summary: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub missing_skills: Vec<String>,
    pub suggestions: Vec<Suggestion>,
    pub skill_distribution: BTreeMap<String, f64>,
}

/// Analyzes a resume for a role, degrading gracefully through the tiers.
pub async fn analyze(
    generator: Option<&dyn TextGenerator>,
    catalog: &RoleCatalog,
    resume_text: &str,
    role: &str,
    job_description: Option<&str>,
) -> ResumeAnalysis {
    let generator = match generator {
        Some(g) => g,
        None => {
            debug!("no model configured, using catalog fallback for resume analysis");
            return catalog_fallback(catalog, role);
        }
    };

    let prompt = prompts::resume_analysis(resume_text, role, job_description);
    let raw = match generator.generate(&prompt).await {
        Ok(text) => text,
        Err(e) => {
            warn!("resume analysis model call failed: {e}");
            return call_failure_fallback(role);
        }
    };

    match parse_json_object(strip_json_fences(&raw)) {
        Some(analysis) => analysis,
        None => {
            error!("failed to parse model resume analysis as JSON");
            parse_failure_fallback(role)
        }
    }
}

/// Tier 2: synthesized from catalog data alone. Missing skills are the
/// tail of the role's skill list, the distribution covers its head.
fn catalog_fallback(catalog: &RoleCatalog, role: &str) -> ResumeAnalysis {
    let profile = catalog.lookup(role);
    let skills = &profile.skills;

    let missing_skills = skills
        .iter()
        .rev()
        .take(3)
        .rev()
        .map(|s| s.to_string())
        .collect();

    let mut skill_distribution = BTreeMap::new();
    for (skill, pct) in skills.iter().zip([30.0, 25.0, 25.0, 20.0]) {
        skill_distribution.insert(skill.to_string(), pct);
    }

    ResumeAnalysis {
        summary: format!(
            "Experienced {role} with technical background and relevant skills for the position."
        ),
        strengths: vec![
            "Technical experience".to_string(),
            "Relevant background".to_string(),
            "Professional presentation".to_string(),
        ],
        weaknesses: vec![
            "Limited quantified achievements".to_string(),
            "Could benefit from more specific examples".to_string(),
        ],
        missing_skills,
        suggestions: vec![
            Suggestion {
                kind: "quick".to_string(),
                text: format!("Add more {role}-specific keywords"),
            },
            Suggestion {
                kind: "quantify".to_string(),
                text: "Include metrics and measurable achievements".to_string(),
            },
            Suggestion {
                kind: "structure".to_string(),
                text: "Optimize resume format for ATS systems".to_string(),
            },
        ],
        skill_distribution,
    }
}

/// Tier 2b: the model was configured but the call failed.
fn call_failure_fallback(role: &str) -> ResumeAnalysis {
    ResumeAnalysis {
        summary: format!("Resume analysis for {role} position completed with basic evaluation."),
        strengths: vec!["Resume submitted successfully".to_string()],
        weaknesses: vec!["Advanced analysis unavailable".to_string()],
        missing_skills: vec!["API configuration needed".to_string()],
        suggestions: vec![Suggestion {
            kind: "quick".to_string(),
            text: "Verify API configuration for detailed analysis".to_string(),
        }],
        skill_distribution: BTreeMap::from([
            ("frontend".to_string(), 25.0),
            ("backend".to_string(), 25.0),
            ("tools".to_string(), 25.0),
            ("soft skills".to_string(), 25.0),
        ]),
    }
}

/// Tier 3: the model answered but the answer was unparseable.
fn parse_failure_fallback(role: &str) -> ResumeAnalysis {
    ResumeAnalysis {
        summary: format!("Unable to generate detailed AI analysis for {role} position."),
        strengths: vec!["Resume content processed".to_string()],
        weaknesses: vec!["Detailed analysis unavailable".to_string()],
        missing_skills: vec!["Check API configuration".to_string()],
        suggestions: vec![Suggestion {
            kind: "quick".to_string(),
            text: "Verify system configuration".to_string(),
        }],
        skill_distribution: BTreeMap::from([
            ("technical".to_string(), 40.0),
            ("experience".to_string(), 30.0),
            ("soft skills".to_string(), 30.0),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;

    struct FixedGenerator(String);

    #[async_trait]
    impl TextGenerator for FixedGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok(self.0.clone())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    fn catalog() -> RoleCatalog {
        RoleCatalog::builtin()
    }

    #[tokio::test]
    async fn test_no_generator_uses_catalog_fallback() {
        let analysis = analyze(None, &catalog(), "resume", "Software Engineer", None).await;
        // Software Engineer skills tail: Git, AWS, Docker
        assert_eq!(analysis.missing_skills, vec!["Git", "AWS", "Docker"]);
        assert_eq!(analysis.skill_distribution.len(), 4);
        assert_eq!(analysis.skill_distribution["JavaScript"], 30.0);
        assert_eq!(analysis.suggestions.len(), 3);
        assert_eq!(analysis.suggestions[0].kind, "quick");
    }

    #[tokio::test]
    async fn test_fallback_for_unknown_role_uses_default_profile() {
        let analysis = analyze(None, &catalog(), "resume", "Quant Sorcerer", None).await;
        assert_eq!(analysis.missing_skills, vec!["Git", "AWS", "Docker"]);
        assert!(analysis.summary.contains("Quant Sorcerer"));
    }

    #[tokio::test]
    async fn test_well_formed_model_response_is_parsed() {
        let response = r#"```json
{
  "summary": "Solid candidate.",
  "strengths": ["Rust"],
  "weaknesses": ["Brevity"],
  "missing_skills": ["Go"],
  "suggestions": [{"type": "quick", "text": "Add Go"}],
  "skill_distribution": {"Rust": 60, "Go": 40}
}
```"#;
        let generator = FixedGenerator(response.to_string());
        let analysis = analyze(
            Some(&generator),
            &catalog(),
            "resume",
            "Software Engineer",
            None,
        )
        .await;
        assert_eq!(analysis.summary, "Solid candidate.");
        assert_eq!(analysis.suggestions[0].kind, "quick");
        assert_eq!(analysis.skill_distribution["Rust"], 60.0);
    }

    #[tokio::test]
    async fn test_unparseable_response_keeps_schema() {
        let generator = FixedGenerator("I'd be happy to help! The resume looks fine.".to_string());
        let analysis = analyze(
            Some(&generator),
            &catalog(),
            "resume",
            "Software Engineer",
            None,
        )
        .await;
        // Tier 3 preserves every field of the schema with generic content
        assert!(!analysis.summary.is_empty());
        assert!(!analysis.strengths.is_empty());
        assert!(!analysis.weaknesses.is_empty());
        assert!(!analysis.missing_skills.is_empty());
        assert!(!analysis.suggestions.is_empty());
        assert!(!analysis.skill_distribution.is_empty());
    }

    #[tokio::test]
    async fn test_failed_call_keeps_schema() {
        let analysis = analyze(
            Some(&FailingGenerator),
            &catalog(),
            "resume",
            "Data Scientist",
            None,
        )
        .await;
        assert!(analysis.summary.contains("Data Scientist"));
        assert_eq!(analysis.skill_distribution.values().sum::<f64>(), 100.0);
    }

    #[tokio::test]
    async fn test_response_with_surrounding_prose_is_recovered() {
        let response = r#"Sure! Here's the analysis:
{"summary": "ok", "strengths": [], "weaknesses": [], "missing_skills": [],
 "suggestions": [], "skill_distribution": {}}
Let me know if you need more."#;
        let generator = FixedGenerator(response.to_string());
        let analysis = analyze(
            Some(&generator),
            &catalog(),
            "resume",
            "Software Engineer",
            None,
        )
        .await;
        assert_eq!(analysis.summary, "ok");
    }
}
