//! Feedback-driven constraint adjustment.
//!
//! Each user feedback action maps to a deterministic constraint mutation:
//! - "Helping Me" keeps the constraints and marks the session satisfied
//! - "Too Difficult" lowers exactly one ceiling by a single step
//! - "Not Working" excludes everything currently in the plan
//!
//! The caller regenerates the plan after any adjustment.

use crate::types::{
    FeedbackAction, FeedbackState, GeneratedPlan, IntensityLevel, MobilityLevel, PlanConstraints,
};

/// Apply a feedback action, producing the updated constraints and the new
/// feedback state.
///
/// The function is pure: the current constraints are never mutated in place.
pub fn apply_feedback(
    action: FeedbackAction,
    constraints: &PlanConstraints,
    plan: &GeneratedPlan,
) -> (PlanConstraints, FeedbackState) {
    match action {
        FeedbackAction::MarkSatisfied => (constraints.clone(), FeedbackState::Satisfied),
        FeedbackAction::RequestEasier => (request_easier(constraints), FeedbackState::Adjusted),
        FeedbackAction::RequestDifferent => {
            (request_different(constraints, plan), FeedbackState::Adjusted)
        }
    }
}

/// Step down exactly one ceiling: intensity first if it has room, otherwise
/// mobility. A no-op once both sit at their floor.
fn request_easier(constraints: &PlanConstraints) -> PlanConstraints {
    let mut updated = constraints.clone();

    if updated.intensity > IntensityLevel::Low {
        updated.intensity = updated.intensity.stepped_down();
        tracing::info!("Lowered intensity ceiling to {}", updated.intensity.label());
    } else if updated.mobility > MobilityLevel::Low {
        updated.mobility = updated.mobility.stepped_down();
        tracing::info!("Lowered mobility ceiling to {}", updated.mobility.label());
    } else {
        tracing::debug!("Both ceilings already at floor, easier request is a no-op");
    }

    updated
}

/// Exclude every exercise in the current plan. Exclusions accumulate across
/// calls and are never released, so repeated requests can exhaust the pool.
fn request_different(constraints: &PlanConstraints, plan: &GeneratedPlan) -> PlanConstraints {
    let mut updated = constraints.clone();
    updated
        .excluded_ids
        .extend(plan.exercises.iter().map(|e| e.id.clone()));

    tracing::info!(
        "Excluded current plan from future selection ({} ids total)",
        updated.excluded_ids.len()
    );

    updated
}
