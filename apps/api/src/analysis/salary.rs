//! Salary estimation: fixed multiplier tables over the role catalog.
//!
//! Two-stage computation, truncating to whole currency units after each
//! stage (base × experience → int, × location → int). The comparison table
//! is recomputed from the base salary and location only, so it is a
//! cross-level reference independent of the requested experience level.

use serde::{Deserialize, Serialize};

use crate::catalog::RoleCatalog;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: i64,
    pub max: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelComparison {
    pub level: String,
    pub salary: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryEstimate {
    pub estimated_salary: i64,
    pub salary_range: SalaryRange,
    pub factors: Vec<String>,
    pub comparison: Vec<LevelComparison>,
}

/// Multiplier for a self-reported experience label. Unrecognized labels get
/// a neutral 1.0 rather than an error.
fn experience_multiplier(experience_level: &str) -> f64 {
    match experience_level {
        "Junior" | "Entry" => 0.8,
        "Mid-level" | "Intermediate" => 1.2,
        "Senior" => 1.4,
        "Lead" => 1.6,
        "Principal" => 1.8,
        _ => 1.0,
    }
}

/// Cost-of-market adjustment for a handful of named locations.
fn location_multiplier(location: &str) -> f64 {
    match location {
        "San Francisco" => 1.6,
        "New York" => 1.4,
        "Seattle" => 1.3,
        "Los Angeles" => 1.2,
        "United States" => 1.0,
        "Remote" => 1.1,
        _ => 1.0,
    }
}

/// Estimates compensation for a role at a given experience level and location.
pub fn estimate(
    catalog: &RoleCatalog,
    job_role: &str,
    experience_level: &str,
    location: &str,
) -> SalaryEstimate {
    let base = catalog.lookup(job_role).base_salary;
    let loc_mult = location_multiplier(location);

    // Truncate after each stage; the order is part of the contract.
    let after_experience = (base as f64 * experience_multiplier(experience_level)) as i64;
    let estimated_salary = (after_experience as f64 * loc_mult) as i64;

    let comparison = [("Entry", 0.8), ("Mid", 1.2), ("Senior", 1.4)]
        .iter()
        .map(|(level, mult)| LevelComparison {
            level: level.to_string(),
            salary: (base as f64 * mult * loc_mult) as i64,
        })
        .collect();

    SalaryEstimate {
        estimated_salary,
        salary_range: SalaryRange {
            min: (estimated_salary as f64 * 0.8) as i64,
            max: (estimated_salary as f64 * 1.3) as i64,
        },
        factors: vec![
            "Experience level".to_string(),
            "Technical skills".to_string(),
            "Industry demand".to_string(),
            "Geographic location".to_string(),
            "Company size and type".to_string(),
        ],
        comparison,
    }
}
