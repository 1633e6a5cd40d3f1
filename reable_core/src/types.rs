//! Core domain types for the ReAble exercise planning system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Conditions (focus areas) and their display metadata
//! - Intensity, mobility, and time-budget levels
//! - Exercise records and generated plans
//! - Plan constraints and feedback state

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ============================================================================
// Level Types
// ============================================================================

/// Exercise difficulty tier, doubling as the pain/difficulty ceiling.
///
/// Totally ordered: `Low < Medium < Intense`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IntensityLevel {
    Low,
    Medium,
    Intense,
}

impl IntensityLevel {
    /// Display label as shown on the personalization form
    pub fn label(&self) -> &'static str {
        match self {
            IntensityLevel::Low => "Low",
            IntensityLevel::Medium => "Medium",
            IntensityLevel::Intense => "Intense",
        }
    }

    /// Step down one tier, saturating at `Low`
    pub fn stepped_down(self) -> IntensityLevel {
        match self {
            IntensityLevel::Intense => IntensityLevel::Medium,
            IntensityLevel::Medium | IntensityLevel::Low => IntensityLevel::Low,
        }
    }
}

/// User's current mobility tier. Totally ordered: `Low < Medium < Good`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MobilityLevel {
    Low,
    Medium,
    Good,
}

impl MobilityLevel {
    pub fn label(&self) -> &'static str {
        match self {
            MobilityLevel::Low => "Low",
            MobilityLevel::Medium => "Medium",
            MobilityLevel::Good => "Good",
        }
    }

    /// Step down one tier, saturating at `Low`
    pub fn stepped_down(self) -> MobilityLevel {
        match self {
            MobilityLevel::Good => MobilityLevel::Medium,
            MobilityLevel::Medium | MobilityLevel::Low => MobilityLevel::Low,
        }
    }
}

/// Daily time budget, drawn from the fixed set of form options
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DailyTime {
    Ten,
    Fifteen,
    Twenty,
    Thirty,
}

impl DailyTime {
    /// Resolve the budget to whole minutes
    pub fn minutes(&self) -> u32 {
        match self {
            DailyTime::Ten => 10,
            DailyTime::Fifteen => 15,
            DailyTime::Twenty => 20,
            DailyTime::Thirty => 30,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DailyTime::Ten => "10 min",
            DailyTime::Fifteen => "15 min",
            DailyTime::Twenty => "20 min",
            DailyTime::Thirty => "30 min",
        }
    }
}

// ============================================================================
// Condition Registry
// ============================================================================

/// A selectable focus area.
///
/// The six instances are fixed for the lifetime of the process. The display
/// title is also the join key against `Exercise::target_conditions`
/// (string equality, case-sensitive).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    MuscleSoreness,
    ShoulderPain,
    JointPain,
    MobilityIssues,
    VisualAid,
    HearingAid,
}

impl Condition {
    /// All conditions in selection-grid order
    pub const ALL: [Condition; 6] = [
        Condition::MuscleSoreness,
        Condition::ShoulderPain,
        Condition::JointPain,
        Condition::MobilityIssues,
        Condition::VisualAid,
        Condition::HearingAid,
    ];

    /// Display title; also the catalog join key
    pub fn title(&self) -> &'static str {
        match self {
            Condition::MuscleSoreness => "Muscle Soreness",
            Condition::ShoulderPain => "Shoulder Pain",
            Condition::JointPain => "Joint Pain",
            Condition::MobilityIssues => "Mobility Issues",
            Condition::VisualAid => "Visual Aid",
            Condition::HearingAid => "Hearing Aid",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Condition::MuscleSoreness => "Relief & recovery",
            Condition::ShoulderPain => "Tension & mobility",
            Condition::JointPain => "Knees, hips & elbows",
            Condition::MobilityIssues => "Walking & balance",
            Condition::VisualAid => "Spatial awareness",
            Condition::HearingAid => "Balance exercises",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Condition::MuscleSoreness => "💪",
            Condition::ShoulderPain => "🩹",
            Condition::JointPain => "🦴",
            Condition::MobilityIssues => "🦵",
            Condition::VisualAid => "👁️",
            Condition::HearingAid => "👂",
        }
    }

    /// Symbolic image reference used by graphical front-ends
    pub fn image_name(&self) -> &'static str {
        match self {
            Condition::MuscleSoreness => "figure.strengthtraining.traditional",
            Condition::ShoulderPain => "figure.mind.and.body",
            Condition::JointPain => "figure.flexibility",
            Condition::MobilityIssues => "figure.walk",
            Condition::VisualAid => "eye.fill",
            Condition::HearingAid => "ear.fill",
        }
    }

    /// Accent color as an RGB hex string
    pub fn accent_color(&self) -> &'static str {
        match self {
            Condition::MuscleSoreness => "#EB6B61",
            Condition::ShoulderPain => "#6BD1B8",
            Condition::JointPain => "#D952C7",
            Condition::MobilityIssues => "#8552EB",
            Condition::VisualAid => "#52B8EB",
            Condition::HearingAid => "#EB9E52",
        }
    }
}

// ============================================================================
// Exercise Record
// ============================================================================

/// An immutable catalog entry describing one exercise
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Exercise {
    /// Stable unique id (slug)
    pub id: String,
    pub name: String,
    /// Condition titles this record addresses (joined by string equality)
    pub target_conditions: Vec<String>,
    pub difficulty: IntensityLevel,
    pub duration_minutes: u32,
    /// Ordered instruction steps
    pub steps: Vec<String>,
    /// Safety warnings, unordered
    pub precautions: Vec<String>,
    pub benefits: String,
    pub equipment: String,
    pub reference_url: Option<String>,
}

// ============================================================================
// Constraints and Plan Types
// ============================================================================

/// The mutable input to plan generation, owned by the session layer
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlanConstraints {
    pub condition: Condition,
    /// Pain/difficulty ceiling
    pub intensity: IntensityLevel,
    /// Mobility ceiling; `Low` narrows selection to low-difficulty records
    pub mobility: MobilityLevel,
    pub daily_time: DailyTime,
    /// Exercise ids suppressed from future selection (grows, never shrinks)
    pub excluded_ids: HashSet<String>,
}

impl PlanConstraints {
    pub fn new(
        condition: Condition,
        intensity: IntensityLevel,
        mobility: MobilityLevel,
        daily_time: DailyTime,
    ) -> Self {
        Self {
            condition,
            intensity,
            mobility,
            daily_time,
            excluded_ids: HashSet::new(),
        }
    }
}

/// An ordered sequence of selected exercises (insertion order = selection order)
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GeneratedPlan {
    pub exercises: Vec<Exercise>,
}

impl GeneratedPlan {
    /// Sum of member durations in minutes
    pub fn total_minutes(&self) -> u32 {
        self.exercises.iter().map(|e| e.duration_minutes).sum()
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Ids of all plan members, in plan order
    pub fn exercise_ids(&self) -> Vec<String> {
        self.exercises.iter().map(|e| e.id.clone()).collect()
    }
}

// ============================================================================
// Feedback Types
// ============================================================================

/// Where the feedback flow currently stands for a session
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackState {
    #[default]
    None,
    Satisfied,
    Adjusted,
}

/// A user-triggered feedback action on the current plan
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackAction {
    /// "Helping Me" - plan stays as is
    MarkSatisfied,
    /// "Too Difficult" - lower one ceiling by a single step
    RequestEasier,
    /// "Not Working" - exclude everything currently in the plan
    RequestDifferent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_ordering() {
        assert!(IntensityLevel::Low < IntensityLevel::Medium);
        assert!(IntensityLevel::Medium < IntensityLevel::Intense);
    }

    #[test]
    fn test_intensity_steps_down_to_floor() {
        assert_eq!(IntensityLevel::Intense.stepped_down(), IntensityLevel::Medium);
        assert_eq!(IntensityLevel::Medium.stepped_down(), IntensityLevel::Low);
        assert_eq!(IntensityLevel::Low.stepped_down(), IntensityLevel::Low);
    }

    #[test]
    fn test_mobility_steps_down_to_floor() {
        assert_eq!(MobilityLevel::Good.stepped_down(), MobilityLevel::Medium);
        assert_eq!(MobilityLevel::Medium.stepped_down(), MobilityLevel::Low);
        assert_eq!(MobilityLevel::Low.stepped_down(), MobilityLevel::Low);
    }

    #[test]
    fn test_daily_time_minutes() {
        assert_eq!(DailyTime::Ten.minutes(), 10);
        assert_eq!(DailyTime::Fifteen.minutes(), 15);
        assert_eq!(DailyTime::Twenty.minutes(), 20);
        assert_eq!(DailyTime::Thirty.minutes(), 30);
    }

    #[test]
    fn test_condition_titles_are_unique() {
        let titles: HashSet<_> = Condition::ALL.iter().map(|c| c.title()).collect();
        assert_eq!(titles.len(), Condition::ALL.len());
    }

    #[test]
    fn test_empty_plan_totals_zero() {
        let plan = GeneratedPlan::default();
        assert_eq!(plan.total_minutes(), 0);
        assert!(plan.is_empty());
    }
}
