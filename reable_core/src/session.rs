//! Screen-local session state for the plan flow.
//!
//! `PlanSession` gathers the mutable state the presentation layer owns for
//! one pass through the flow: the constraints collected from the form, the
//! current plan, and where the feedback loop stands. The engine itself stays
//! stateless; all mutation happens here, one action at a time.

use crate::catalog::Catalog;
use crate::engine::generate_plan;
use crate::feedback::apply_feedback;
use crate::types::{
    Condition, DailyTime, FeedbackAction, FeedbackState, GeneratedPlan, IntensityLevel,
    MobilityLevel, PlanConstraints,
};

/// One user's pass through the plan screen
#[derive(Clone, Debug)]
pub struct PlanSession<'a> {
    catalog: &'a Catalog,
    constraints: PlanConstraints,
    plan: GeneratedPlan,
    feedback: FeedbackState,
}

impl<'a> PlanSession<'a> {
    /// Start a session from the personalization form values and generate
    /// the initial plan
    pub fn new(
        catalog: &'a Catalog,
        condition: Condition,
        intensity: IntensityLevel,
        mobility: MobilityLevel,
        daily_time: DailyTime,
    ) -> Self {
        let constraints = PlanConstraints::new(condition, intensity, mobility, daily_time);
        let plan = generate_plan(catalog, &constraints);
        Self {
            catalog,
            constraints,
            plan,
            feedback: FeedbackState::None,
        }
    }

    pub fn constraints(&self) -> &PlanConstraints {
        &self.constraints
    }

    pub fn plan(&self) -> &GeneratedPlan {
        &self.plan
    }

    pub fn feedback(&self) -> FeedbackState {
        self.feedback
    }

    /// "Helping Me" - record satisfaction, keep the plan
    pub fn mark_satisfied(&mut self) {
        let (constraints, state) = apply_feedback(
            FeedbackAction::MarkSatisfied,
            &self.constraints,
            &self.plan,
        );
        self.constraints = constraints;
        self.feedback = state;
    }

    /// "Too Difficult" - lower one ceiling and regenerate
    pub fn request_easier(&mut self) {
        self.adjust(FeedbackAction::RequestEasier);
    }

    /// "Not Working" - exclude the current plan and regenerate
    pub fn request_different(&mut self) {
        self.adjust(FeedbackAction::RequestDifferent);
    }

    fn adjust(&mut self, action: FeedbackAction) {
        let (constraints, state) = apply_feedback(action, &self.constraints, &self.plan);
        self.constraints = constraints;
        self.feedback = state;
        self.plan = generate_plan(self.catalog, &self.constraints);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_default_catalog;

    fn session(catalog: &Catalog) -> PlanSession<'_> {
        PlanSession::new(
            catalog,
            Condition::MuscleSoreness,
            IntensityLevel::Intense,
            MobilityLevel::Good,
            DailyTime::Twenty,
        )
    }

    #[test]
    fn test_new_session_generates_plan() {
        let catalog = build_default_catalog();
        let session = session(&catalog);
        assert!(!session.plan().is_empty());
        assert_eq!(session.feedback(), FeedbackState::None);
    }

    #[test]
    fn test_mark_satisfied_keeps_plan() {
        let catalog = build_default_catalog();
        let mut session = session(&catalog);
        let before = session.plan().exercise_ids();

        session.mark_satisfied();

        assert_eq!(session.feedback(), FeedbackState::Satisfied);
        assert_eq!(session.plan().exercise_ids(), before);
    }

    #[test]
    fn test_request_easier_regenerates_with_lower_ceiling() {
        let catalog = build_default_catalog();
        let mut session = session(&catalog);

        session.request_easier();

        assert_eq!(session.feedback(), FeedbackState::Adjusted);
        assert_eq!(session.constraints().intensity, IntensityLevel::Medium);
        for exercise in &session.plan().exercises {
            assert!(exercise.difficulty <= IntensityLevel::Medium);
        }
    }

    #[test]
    fn test_request_different_swaps_plan() {
        let catalog = build_default_catalog();
        let mut session = session(&catalog);
        let before: std::collections::HashSet<_> =
            session.plan().exercise_ids().into_iter().collect();

        session.request_different();

        assert_eq!(session.feedback(), FeedbackState::Adjusted);
        for exercise in &session.plan().exercises {
            if exercise.id != crate::catalog::BREATHING_EXERCISE_ID {
                assert!(!before.contains(&exercise.id));
            }
        }
    }

    #[test]
    fn test_repeated_different_can_exhaust_pool() {
        let catalog = build_default_catalog();
        let mut session = PlanSession::new(
            &catalog,
            Condition::VisualAid,
            IntensityLevel::Intense,
            MobilityLevel::Good,
            DailyTime::Ten,
        );

        // Burn through the candidate pool; exclusions never reset
        for _ in 0..6 {
            session.request_different();
        }

        // Only the unconditionally-injected breathing record can remain
        for exercise in &session.plan().exercises {
            assert_eq!(exercise.id, crate::catalog::BREATHING_EXERCISE_ID);
        }
    }
}
