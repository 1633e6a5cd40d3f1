//! Plan generation engine.
//!
//! Selects an ordered subset of the exercise catalog to fit a time budget,
//! a difficulty ceiling, and a mobility constraint. The function is
//! deterministic and total: degenerate outputs (an empty plan, a plan under
//! budget) are valid results, never errors.

use crate::catalog::{Catalog, BREATHING_EXERCISE_ID};
use crate::types::{Exercise, GeneratedPlan, IntensityLevel, MobilityLevel, PlanConstraints};

/// Selection stops once the accumulated time is within this many minutes of
/// the budget, even mid-list.
const CLOSE_ENOUGH_MINUTES: u32 = 2;

/// Generate an ordered exercise plan for the given constraints.
///
/// Selection works in three passes over the catalog:
/// 1. Filter by condition membership, exclusion list, mobility floor, and
///    intensity ceiling.
/// 2. Stable-sort by difficulty (easiest first; ties keep catalog order)
///    and greedily fill the time budget, stopping early once within
///    [`CLOSE_ENOUGH_MINUTES`] of the target.
/// 3. Append the designated breathing exercise when it still fits. The
///    injection deliberately skips the condition and exclusion filters so
///    that every plan can offer a relaxation exercise.
pub fn generate_plan(catalog: &Catalog, constraints: &PlanConstraints) -> GeneratedPlan {
    let target_minutes = constraints.daily_time.minutes();

    // Candidates: matching condition, not excluded
    let mut candidates: Vec<&Exercise> = catalog
        .all_exercises()
        .iter()
        .filter(|e| {
            e.target_conditions
                .iter()
                .any(|t| t == constraints.condition.title())
                && !constraints.excluded_ids.contains(&e.id)
        })
        .collect();

    // Low mobility narrows to low-difficulty records before the intensity
    // ceiling is applied
    if constraints.mobility == MobilityLevel::Low {
        candidates.retain(|e| e.difficulty == IntensityLevel::Low);
    }

    // Intensity ceiling; a no-op subset check when mobility already
    // narrowed to Low, but applied regardless
    candidates.retain(|e| match constraints.intensity {
        IntensityLevel::Low => e.difficulty == IntensityLevel::Low,
        IntensityLevel::Medium => e.difficulty <= IntensityLevel::Medium,
        IntensityLevel::Intense => true,
    });

    // Easiest first; sort_by_key is stable, ties keep catalog order
    candidates.sort_by_key(|e| e.difficulty);

    tracing::debug!(
        "Filtered to {} candidates for {} ({} min budget)",
        candidates.len(),
        constraints.condition.title(),
        target_minutes
    );

    // Greedy fill with the close-enough early exit
    let mut selected: Vec<Exercise> = Vec::new();
    let mut accumulated = 0u32;

    for exercise in candidates {
        if accumulated + exercise.duration_minutes <= target_minutes {
            accumulated += exercise.duration_minutes;
            selected.push(exercise.clone());
        }
        if accumulated >= target_minutes.saturating_sub(CLOSE_ENOUGH_MINUTES) {
            break;
        }
    }

    // Always offer the relaxation exercise when it fits. Looked up against
    // the full catalog: condition tags and excluded ids do not apply here.
    if let Some(breathing) = catalog.get(BREATHING_EXERCISE_ID) {
        let already_selected = selected.iter().any(|e| e.id == breathing.id);
        if !already_selected && accumulated + breathing.duration_minutes <= target_minutes {
            accumulated += breathing.duration_minutes;
            selected.push(breathing.clone());
        }
    }

    tracing::info!(
        "Generated plan for {}: {} exercises, {}/{} min",
        constraints.condition.title(),
        selected.len(),
        accumulated,
        target_minutes
    );

    GeneratedPlan {
        exercises: selected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_default_catalog;
    use crate::types::{Condition, DailyTime};

    fn constraints(
        condition: Condition,
        intensity: IntensityLevel,
        mobility: MobilityLevel,
        daily_time: DailyTime,
    ) -> PlanConstraints {
        PlanConstraints::new(condition, intensity, mobility, daily_time)
    }

    #[test]
    fn test_plan_members_match_condition_or_are_breathing() {
        let catalog = build_default_catalog();
        for condition in Condition::ALL {
            for daily_time in [
                DailyTime::Ten,
                DailyTime::Fifteen,
                DailyTime::Twenty,
                DailyTime::Thirty,
            ] {
                let plan = generate_plan(
                    &catalog,
                    &constraints(
                        condition,
                        IntensityLevel::Intense,
                        MobilityLevel::Good,
                        daily_time,
                    ),
                );
                for exercise in &plan.exercises {
                    let matches_condition = exercise
                        .target_conditions
                        .iter()
                        .any(|t| t == condition.title());
                    assert!(
                        matches_condition || exercise.id == BREATHING_EXERCISE_ID,
                        "{} in plan for {} without matching tag",
                        exercise.id,
                        condition.title()
                    );
                }
            }
        }
    }

    #[test]
    fn test_total_duration_never_exceeds_budget() {
        let catalog = build_default_catalog();
        for condition in Condition::ALL {
            for daily_time in [
                DailyTime::Ten,
                DailyTime::Fifteen,
                DailyTime::Twenty,
                DailyTime::Thirty,
            ] {
                let plan = generate_plan(
                    &catalog,
                    &constraints(
                        condition,
                        IntensityLevel::Intense,
                        MobilityLevel::Good,
                        daily_time,
                    ),
                );
                assert!(
                    plan.total_minutes() <= daily_time.minutes(),
                    "{} plan overflows {} min budget",
                    condition.title(),
                    daily_time.minutes()
                );
            }
        }
    }

    #[test]
    fn test_difficulty_never_exceeds_intensity_ceiling() {
        let catalog = build_default_catalog();
        let plan = generate_plan(
            &catalog,
            &constraints(
                Condition::ShoulderPain,
                IntensityLevel::Medium,
                MobilityLevel::Good,
                DailyTime::Thirty,
            ),
        );
        assert!(!plan.is_empty());
        for exercise in &plan.exercises {
            assert!(exercise.difficulty <= IntensityLevel::Medium);
        }
    }

    #[test]
    fn test_low_mobility_narrows_to_low_difficulty() {
        let catalog = build_default_catalog();
        // Intense intensity would normally allow everything; low mobility
        // dominates.
        let plan = generate_plan(
            &catalog,
            &constraints(
                Condition::ShoulderPain,
                IntensityLevel::Intense,
                MobilityLevel::Low,
                DailyTime::Thirty,
            ),
        );
        assert!(!plan.is_empty());
        for exercise in &plan.exercises {
            assert_eq!(exercise.difficulty, IntensityLevel::Low);
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let catalog = build_default_catalog();
        let c = constraints(
            Condition::JointPain,
            IntensityLevel::Medium,
            MobilityLevel::Medium,
            DailyTime::Twenty,
        );
        let first = generate_plan(&catalog, &c);
        let second = generate_plan(&catalog, &c);
        assert_eq!(first.exercise_ids(), second.exercise_ids());
    }

    #[test]
    fn test_plan_sorted_easiest_first() {
        let catalog = build_default_catalog();
        let plan = generate_plan(
            &catalog,
            &constraints(
                Condition::ShoulderPain,
                IntensityLevel::Intense,
                MobilityLevel::Good,
                DailyTime::Thirty,
            ),
        );
        // Acceptance order follows the difficulty sort; the trailing
        // breathing record is low difficulty and can break the run.
        let core = &plan.exercises[..plan.len().saturating_sub(1)];
        for pair in core.windows(2) {
            assert!(pair[0].difficulty <= pair[1].difficulty);
        }
    }

    #[test]
    fn test_joint_pain_low_fifteen_scenario() {
        let catalog = build_default_catalog();
        let plan = generate_plan(
            &catalog,
            &constraints(
                Condition::JointPain,
                IntensityLevel::Low,
                MobilityLevel::Medium,
                DailyTime::Fifteen,
            ),
        );
        // Only low-difficulty joint-pain records are eligible
        for exercise in &plan.exercises {
            assert_eq!(exercise.difficulty, IntensityLevel::Low);
        }
        // Greedy fill in catalog order: Child's Pose (4) + Seated Knee
        // Extensions (5) + Ankle Circles (4) = 13, which trips the
        // close-enough exit; breathing (4) no longer fits.
        assert_eq!(
            plan.exercise_ids(),
            vec![
                "childs_pose_recovery",
                "seated_knee_extensions",
                "ankle_circles",
            ]
        );
        assert_eq!(plan.total_minutes(), 13);
    }

    #[test]
    fn test_shoulder_pain_intense_ten_scenario() {
        let catalog = build_default_catalog();
        let plan = generate_plan(
            &catalog,
            &constraints(
                Condition::ShoulderPain,
                IntensityLevel::Intense,
                MobilityLevel::Good,
                DailyTime::Ten,
            ),
        );
        // Low-difficulty records first: Pendulum (5) + Scapular (4) = 9,
        // which is >= 8 and stops the fill; breathing would overflow.
        assert_eq!(
            plan.exercise_ids(),
            vec!["pendulum_shoulder_swings", "scapular_squeezes"]
        );
        assert_eq!(plan.total_minutes(), 9);
    }

    #[test]
    fn test_breathing_appended_when_room_remains() {
        let catalog = build_default_catalog();
        let plan = generate_plan(
            &catalog,
            &constraints(
                Condition::JointPain,
                IntensityLevel::Low,
                MobilityLevel::Medium,
                DailyTime::Thirty,
            ),
        );
        // Low joint-pain records: 4 + 5 + 4 + 5 = 18 plus breathing as a
        // regular candidate at 22, past the 28-minute exit line only after
        // the full list; breathing is already in as a normal candidate.
        assert!(plan
            .exercise_ids()
            .contains(&BREATHING_EXERCISE_ID.to_string()));
        // Never duplicated by the injection step
        let count = plan
            .exercises
            .iter()
            .filter(|e| e.id == BREATHING_EXERCISE_ID)
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_excluded_ids_suppress_selection() {
        let catalog = build_default_catalog();
        let mut c = constraints(
            Condition::JointPain,
            IntensityLevel::Low,
            MobilityLevel::Medium,
            DailyTime::Fifteen,
        );
        c.excluded_ids.insert("childs_pose_recovery".into());
        let plan = generate_plan(&catalog, &c);
        assert!(!plan
            .exercise_ids()
            .contains(&"childs_pose_recovery".to_string()));
    }

    #[test]
    fn test_breathing_injection_bypasses_exclusion() {
        let catalog = build_default_catalog();
        let mut c = constraints(
            Condition::JointPain,
            IntensityLevel::Low,
            MobilityLevel::Medium,
            DailyTime::Fifteen,
        );
        // Exclude every joint-pain candidate including the breathing record
        for exercise in catalog.all_exercises() {
            c.excluded_ids.insert(exercise.id.clone());
        }
        let plan = generate_plan(&catalog, &c);
        // The normal selection is empty, but the injection still offers the
        // relaxation exercise
        assert_eq!(plan.exercise_ids(), vec![BREATHING_EXERCISE_ID]);
        assert_eq!(plan.total_minutes(), 4);
    }

    #[test]
    fn test_empty_candidate_pool_yields_breathing_only() {
        // A catalog without the breathing record and no matching condition
        // produces a genuinely empty plan
        let mut catalog = build_default_catalog();
        catalog.exercises.retain(|e| e.id != BREATHING_EXERCISE_ID);
        let mut c = constraints(
            Condition::VisualAid,
            IntensityLevel::Intense,
            MobilityLevel::Good,
            DailyTime::Ten,
        );
        for exercise in catalog.all_exercises() {
            c.excluded_ids.insert(exercise.id.clone());
        }
        let plan = generate_plan(&catalog, &c);
        assert!(plan.is_empty());
        assert_eq!(plan.total_minutes(), 0);
    }

    #[test]
    fn test_early_exit_stops_mid_list() {
        let catalog = build_default_catalog();
        // Visual Aid, low records in catalog order: Guided Walking (8),
        // Seated Balance (5), Spatial Reach (5), breathing (4).
        // Budget 10: accept 8, 8 >= 8 exits before Seated Balance.
        let plan = generate_plan(
            &catalog,
            &constraints(
                Condition::VisualAid,
                IntensityLevel::Low,
                MobilityLevel::Good,
                DailyTime::Ten,
            ),
        );
        assert_eq!(plan.exercise_ids(), vec!["guided_walking_with_tactile_cues"]);
        assert_eq!(plan.total_minutes(), 8);
    }
}
