//! Heuristic analysis engines: ATS scoring, salary estimation, and
//! interview question generation. All pure computation over the role
//! catalog. Deterministic, explainable, and independent of any model call.

pub mod ats;
pub mod handlers;
pub mod interview;
pub mod salary;
pub mod tfidf;
