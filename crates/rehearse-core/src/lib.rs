//! rehearse-core — Answer evaluation engine, scoring criteria, and question banks.
//!
//! The engine compares a free-text candidate answer against a reference answer
//! using key point coverage, structural completeness, and a clarity heuristic.
//! Everything else in this crate (question banks, batch reports) feeds it
//! inputs or consumes its results.

pub mod bank;
pub mod clarity;
pub mod completeness;
pub mod coverage;
pub mod criteria;
pub mod engine;
pub mod error;
pub mod feedback;
pub mod grade;
pub mod keypoints;
pub mod locale;
pub mod model;
pub mod report;
pub mod statistics;

pub use criteria::ScoringCriteria;
pub use engine::{evaluate_answer, AnswerEvaluator};
pub use model::{Aspect, AspectScore, EvaluationResult, Grade};
