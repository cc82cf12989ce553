//! ATS scoring: deterministic, explainable resume metrics.
//!
//! Combines TF-IDF keyword similarity (against an optional job description),
//! catalog skill coverage, and a sentence-length readability heuristic into a
//! composite 0–100 score. Pure computation: this engine never errors past
//! the request boundary; degenerate vectorization falls back to a fixed
//! baseline and everything else is plain arithmetic.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::tfidf::cosine_similarity_pct;
use crate::catalog::RoleCatalog;

/// Keyword match percentage used when no job description is supplied or the
/// vectorization is degenerate. An explicit fallback value, not an error.
pub const KEYWORD_BASELINE: f64 = 65.0;

/// Inferred seniority of a resume. Default when no indicator matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Senior,
    #[default]
    #[serde(rename = "Mid-level")]
    MidLevel,
    Junior,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndustryFit {
    Excellent,
    Good,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TechnicalDepth {
    Basic,
    Moderate,
    Strong,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleSpecificAnalysis {
    pub experience_level: ExperienceLevel,
    pub industry_fit: IndustryFit,
    pub technical_depth: TechnicalDepth,
}

/// Full metric set for one scored resume. Computed fresh per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsMetrics {
    pub ats_score: i64,
    pub keyword_match_pct: f64,
    pub skill_coverage_pct: f64,
    pub readability_score: f64,
    pub estimated_improvement_points: i64,
    /// Subset of the role's catalog skills found in the resume, catalog order.
    pub keywords_matched: Vec<String>,
    pub role_specific_analysis: RoleSpecificAnalysis,
}

/// Indicator terms checked in priority order: the first bucket with any hit
/// wins, senior terms shadowing mid terms shadowing junior terms.
const SENIOR_INDICATORS: &[&str] = &["senior", "lead", "manager", "architect", "principal", "director"];
const MID_INDICATORS: &[&str] = &["mid", "intermediate", "experienced", "specialist"];
const JUNIOR_INDICATORS: &[&str] = &["junior", "entry", "associate", "intern", "trainee"];

/// Scores a resume against a catalog role and optional job description.
pub fn score(
    catalog: &RoleCatalog,
    resume_text: &str,
    job_role: &str,
    job_description: Option<&str>,
) -> AtsMetrics {
    let role = catalog.lookup(job_role);
    let resume_lower = resume_text.to_lowercase();

    let keyword_match_pct = match job_description {
        Some(jd) => {
            cosine_similarity_pct(&resume_lower, &jd.to_lowercase()).unwrap_or_else(|| {
                debug!("degenerate vocabulary, using keyword baseline");
                KEYWORD_BASELINE
            })
        }
        None => KEYWORD_BASELINE,
    };

    let matched: Vec<String> = role
        .skills
        .iter()
        .filter(|skill| resume_lower.contains(&skill.to_lowercase()))
        .map(|s| s.to_string())
        .collect();
    let skill_coverage_pct = matched.len() as f64 / role.skills.len().max(1) as f64 * 100.0;

    let readability_score = readability(resume_text);

    let ats_score =
        (keyword_match_pct * 0.4 + skill_coverage_pct * 0.3 + readability_score * 0.3) as i64;

    let analysis = RoleSpecificAnalysis {
        experience_level: infer_experience_level(&resume_lower),
        industry_fit: if skill_coverage_pct > 70.0 {
            IndustryFit::Excellent
        } else if skill_coverage_pct > 50.0 {
            IndustryFit::Good
        } else {
            IndustryFit::NeedsImprovement
        },
        technical_depth: if matched.len() > 5 {
            TechnicalDepth::Strong
        } else if matched.len() > 3 {
            TechnicalDepth::Moderate
        } else {
            TechnicalDepth::Basic
        },
    };

    AtsMetrics {
        ats_score,
        keyword_match_pct: round1(keyword_match_pct),
        skill_coverage_pct: round1(skill_coverage_pct),
        readability_score: round1(readability_score),
        estimated_improvement_points: (85 - ats_score).max(0),
        keywords_matched: matched,
        role_specific_analysis: analysis,
    }
}

/// Mean tokens per sentence mapped onto 0–100: 15 words per sentence is the
/// sweet spot, every word above it costs two points.
fn readability(text: &str) -> f64 {
    let lengths: Vec<f64> = text
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.split_whitespace().count() as f64)
        .collect();

    let avg = if lengths.is_empty() {
        15.0
    } else {
        lengths.iter().sum::<f64>() / lengths.len() as f64
    };

    (100.0 - (avg - 15.0) * 2.0).clamp(0.0, 100.0)
}

fn infer_experience_level(resume_lower: &str) -> ExperienceLevel {
    let hit = |indicators: &[&str]| indicators.iter().any(|i| resume_lower.contains(i));
    if hit(SENIOR_INDICATORS) {
        ExperienceLevel::Senior
    } else if hit(MID_INDICATORS) {
        ExperienceLevel::MidLevel
    } else if hit(JUNIOR_INDICATORS) {
        ExperienceLevel::Junior
    } else {
        ExperienceLevel::default()
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> RoleCatalog {
        RoleCatalog::builtin()
    }

    #[test]
    fn test_three_of_eight_skills_without_jd() {
        let resume = "Built dashboards in Python and React. Deployed services to AWS.";
        let metrics = score(&catalog(), resume, "Software Engineer", None);

        assert_eq!(metrics.skill_coverage_pct, 37.5);
        assert_eq!(metrics.keyword_match_pct, KEYWORD_BASELINE);
        assert_eq!(
            metrics.keywords_matched,
            vec!["Python", "React", "AWS"],
            "matched skills must preserve catalog order"
        );
    }

    #[test]
    fn test_empty_resume_degenerate_metrics() {
        let metrics = score(&catalog(), "", "Software Engineer", None);
        assert_eq!(metrics.skill_coverage_pct, 0.0);
        assert!(metrics.keywords_matched.is_empty());
        assert_eq!(metrics.readability_score, 100.0);
        // 65*0.4 + 0*0.3 + 100*0.3 = 56
        assert_eq!(metrics.ats_score, 56);
    }

    #[test]
    fn test_improvement_points_identity() {
        for text in ["", "short resume", "Python React AWS SQL Git Docker Node.js JavaScript"] {
            let metrics = score(&catalog(), text, "Software Engineer", None);
            assert_eq!(
                metrics.estimated_improvement_points,
                (85 - metrics.ats_score).max(0)
            );
            assert!(metrics.ats_score >= 0 && metrics.ats_score <= 100);
        }
    }

    #[test]
    fn test_skill_coverage_monotonic_in_injected_skills() {
        let mut text = String::from("A resume.");
        let mut last = -1.0;
        for skill in ["Python", "React", "AWS", "SQL", "Git"] {
            text.push_str(&format!(" {skill}"));
            let metrics = score(&catalog(), &text, "Software Engineer", None);
            assert!(
                metrics.skill_coverage_pct > last,
                "coverage did not grow after adding {skill}"
            );
            last = metrics.skill_coverage_pct;
        }
    }

    #[test]
    fn test_skill_match_is_case_insensitive() {
        let metrics = score(&catalog(), "python PYTHON react", "Software Engineer", None);
        assert_eq!(metrics.keywords_matched, vec!["Python", "React"]);
    }

    #[test]
    fn test_jd_path_uses_similarity_not_baseline() {
        let resume = "Python engineer building React frontends";
        let jd = "We need a Python engineer with React experience";
        let metrics = score(&catalog(), resume, "Software Engineer", Some(jd));
        assert_ne!(metrics.keyword_match_pct, KEYWORD_BASELINE);
        assert!(metrics.keyword_match_pct > 0.0);
    }

    #[test]
    fn test_degenerate_jd_falls_back_to_baseline() {
        let metrics = score(&catalog(), "", "Software Engineer", Some("the and of"));
        assert_eq!(metrics.keyword_match_pct, KEYWORD_BASELINE);
    }

    #[test]
    fn test_experience_level_priority_order() {
        // "senior" outranks "junior" even when both appear
        assert_eq!(
            infer_experience_level("senior engineer, previously junior dev"),
            ExperienceLevel::Senior
        );
        assert_eq!(
            infer_experience_level("experienced specialist"),
            ExperienceLevel::MidLevel
        );
        assert_eq!(infer_experience_level("intern at a startup"), ExperienceLevel::Junior);
        assert_eq!(infer_experience_level("plain resume text"), ExperienceLevel::MidLevel);
    }

    #[test]
    fn test_industry_fit_thresholds() {
        // 6 of 8 = 75% → Excellent; also >5 matched → Strong
        let text = "JavaScript Python React Node.js SQL Git";
        let metrics = score(&catalog(), text, "Software Engineer", None);
        assert_eq!(metrics.role_specific_analysis.industry_fit, IndustryFit::Excellent);
        assert_eq!(
            metrics.role_specific_analysis.technical_depth,
            TechnicalDepth::Strong
        );

        // 0 of 8 → Needs Improvement / Basic
        let metrics = score(&catalog(), "nothing relevant here", "Software Engineer", None);
        assert_eq!(
            metrics.role_specific_analysis.industry_fit,
            IndustryFit::NeedsImprovement
        );
        assert_eq!(metrics.role_specific_analysis.technical_depth, TechnicalDepth::Basic);
    }

    #[test]
    fn test_readability_long_sentences_penalized() {
        let short = "I write code. I ship it.";
        let long = format!("word {} end.", "filler ".repeat(60));
        assert!(readability(short) > readability(&long));
        assert_eq!(readability(""), 100.0);
    }

    #[test]
    fn test_enum_wire_strings() {
        assert_eq!(
            serde_json::to_string(&ExperienceLevel::MidLevel).unwrap(),
            "\"Mid-level\""
        );
        assert_eq!(
            serde_json::to_string(&IndustryFit::NeedsImprovement).unwrap(),
            "\"Needs Improvement\""
        );
        assert_eq!(serde_json::to_string(&TechnicalDepth::Strong).unwrap(), "\"Strong\"");
    }
}
