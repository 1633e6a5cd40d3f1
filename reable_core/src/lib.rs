#![forbid(unsafe_code)]

//! Core domain model and business logic for the ReAble guided
//! physiotherapy system.
//!
//! This crate provides:
//! - Domain types (conditions, exercises, constraints, plans, feedback)
//! - The built-in exercise catalog
//! - The plan generation engine
//! - Feedback-driven constraint adjustment and session state
//! - Simulated progress dashboard data

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod engine;
pub mod feedback;
pub mod session;
pub mod dashboard;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog, Catalog, BREATHING_EXERCISE_ID};
pub use config::Config;
pub use engine::generate_plan;
pub use feedback::apply_feedback;
pub use session::PlanSession;
pub use dashboard::{recovery_pathway, ProgressSummary, RecoveryStage};
