//! Role catalog: static role profiles used by every analysis engine.
//!
//! Built once at startup and shared read-only through `AppState`.
//! Unknown role names never fail a lookup: they degrade to the generic
//! Software Engineer profile.

/// A single job role with its market baseline and canonical skill set.
///
/// `skills` ordering matters: the AI fallback tier indexes into it
/// (first four for the skill distribution, last three as missing skills).
#[derive(Debug, Clone)]
pub struct RoleProfile {
    pub name: &'static str,
    pub base_salary: i64,
    pub skills: Vec<&'static str>,
    pub interview_topics: Vec<&'static str>,
}

/// Fixed catalog of ten common tech/business roles.
#[derive(Debug)]
pub struct RoleCatalog {
    roles: Vec<RoleProfile>,
}

/// Fallback profile served for any role name not in the catalog.
pub const DEFAULT_ROLE: &str = "Software Engineer";

impl RoleCatalog {
    pub fn builtin() -> Self {
        let roles = vec![
            RoleProfile {
                name: "Software Engineer",
                base_salary: 95_000,
                skills: vec![
                    "JavaScript", "Python", "React", "Node.js", "SQL", "Git", "AWS", "Docker",
                ],
                interview_topics: vec![
                    "algorithms",
                    "system design",
                    "coding practices",
                    "debugging",
                ],
            },
            RoleProfile {
                name: "Data Scientist",
                base_salary: 110_000,
                skills: vec![
                    "Python",
                    "R",
                    "Machine Learning",
                    "SQL",
                    "Pandas",
                    "TensorFlow",
                    "Statistics",
                    "Jupyter",
                ],
                interview_topics: vec![
                    "machine learning",
                    "statistics",
                    "data analysis",
                    "model evaluation",
                ],
            },
            RoleProfile {
                name: "DevOps Engineer",
                base_salary: 105_000,
                skills: vec![
                    "Docker",
                    "Kubernetes",
                    "AWS",
                    "Jenkins",
                    "Terraform",
                    "Linux",
                    "CI/CD",
                    "Monitoring",
                ],
                interview_topics: vec![
                    "infrastructure",
                    "automation",
                    "monitoring",
                    "cloud platforms",
                ],
            },
            RoleProfile {
                name: "Product Manager",
                base_salary: 120_000,
                skills: vec![
                    "Product Strategy",
                    "Agile",
                    "Analytics",
                    "Roadmapping",
                    "Stakeholder Management",
                    "User Research",
                ],
                interview_topics: vec![
                    "product strategy",
                    "user research",
                    "analytics",
                    "prioritization",
                ],
            },
            RoleProfile {
                name: "Full Stack Developer",
                base_salary: 90_000,
                skills: vec![
                    "JavaScript", "React", "Node.js", "MongoDB", "Express", "HTML", "CSS",
                    "REST APIs",
                ],
                interview_topics: vec!["frontend", "backend", "databases", "API design"],
            },
            RoleProfile {
                name: "Machine Learning Engineer",
                base_salary: 125_000,
                skills: vec![
                    "Python",
                    "TensorFlow",
                    "PyTorch",
                    "MLOps",
                    "Kubernetes",
                    "Docker",
                    "Scikit-learn",
                    "Deep Learning",
                ],
                interview_topics: vec![
                    "ML algorithms",
                    "model deployment",
                    "MLOps",
                    "deep learning",
                ],
            },
            RoleProfile {
                name: "UI/UX Designer",
                base_salary: 85_000,
                skills: vec![
                    "Figma",
                    "Sketch",
                    "Adobe Creative Suite",
                    "Prototyping",
                    "User Research",
                    "Design Systems",
                ],
                interview_topics: vec![
                    "design process",
                    "user research",
                    "prototyping",
                    "design systems",
                ],
            },
            RoleProfile {
                name: "Cybersecurity Analyst",
                base_salary: 100_000,
                skills: vec![
                    "Network Security",
                    "Penetration Testing",
                    "SIEM",
                    "Incident Response",
                    "Risk Assessment",
                    "Compliance",
                ],
                interview_topics: vec![
                    "security frameworks",
                    "threat analysis",
                    "incident response",
                    "compliance",
                ],
            },
            RoleProfile {
                name: "Mobile Developer",
                base_salary: 95_000,
                skills: vec![
                    "React Native",
                    "Flutter",
                    "Swift",
                    "Kotlin",
                    "iOS",
                    "Android",
                    "Mobile UI/UX",
                    "App Store",
                ],
                interview_topics: vec![
                    "mobile development",
                    "app architecture",
                    "platform differences",
                    "performance",
                ],
            },
            RoleProfile {
                name: "Game Developer",
                base_salary: 80_000,
                skills: vec![
                    "Unity",
                    "Unreal Engine",
                    "C#",
                    "C++",
                    "Game Design",
                    "3D Modeling",
                    "Animation",
                    "Physics",
                ],
                interview_topics: vec![
                    "game engines",
                    "game design",
                    "optimization",
                    "graphics programming",
                ],
            },
        ];
        Self { roles }
    }

    /// Looks up a role by exact name, falling back to the Software Engineer
    /// profile for anything unknown. Never errors.
    pub fn lookup(&self, role_name: &str) -> &RoleProfile {
        self.roles
            .iter()
            .find(|r| r.name == role_name)
            .unwrap_or_else(|| {
                self.roles
                    .iter()
                    .find(|r| r.name == DEFAULT_ROLE)
                    .expect("catalog always contains the default role")
            })
    }

    pub fn roles(&self) -> &[RoleProfile] {
        &self.roles
    }
}
