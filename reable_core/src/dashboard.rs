//! Simulated progress dashboard data.
//!
//! The dashboard presents fixed adherence figures rather than measured
//! history; there is no persistence to measure against. Rendering is left
//! to the presentation layer.

use crate::config::DashboardConfig;
use crate::types::Condition;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Summary metrics backing the dashboard screen
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub condition: Condition,
    /// Number of exercises in the prescribed plan
    pub exercise_count: usize,
    /// Sessions per day
    pub daily_frequency: u32,
    /// Length of the prescribed program in days
    pub duration_days: u32,
    /// Fraction of planned sessions completed, 0.0..=1.0
    pub completion_rate: f64,
    /// Fraction of sessions reported as providing relief, 0.0..=1.0
    pub effectiveness_rate: f64,
}

impl ProgressSummary {
    /// Default simulated figures for a plan
    pub fn simulated(condition: Condition, exercise_count: usize) -> Self {
        Self::from_config(condition, exercise_count, &DashboardConfig::default())
    }

    /// Simulated figures taken from configuration
    pub fn from_config(
        condition: Condition,
        exercise_count: usize,
        config: &DashboardConfig,
    ) -> Self {
        Self {
            condition,
            exercise_count,
            daily_frequency: config.daily_frequency,
            duration_days: config.duration_days,
            completion_rate: config.completion_rate,
            effectiveness_rate: config.effectiveness_rate,
        }
    }

    /// Date the program ends when started on `start`
    pub fn projected_end(&self, start: NaiveDate) -> NaiveDate {
        start + Duration::days(i64::from(self.duration_days))
    }

    pub fn completion_percent(&self) -> u32 {
        (self.completion_rate * 100.0).round() as u32
    }

    pub fn effectiveness_percent(&self) -> u32 {
        (self.effectiveness_rate * 100.0).round() as u32
    }
}

/// One step of the recovery pathway timeline
#[derive(Clone, Debug, Serialize)]
pub struct RecoveryStage {
    pub title: &'static str,
    pub detail: &'static str,
    /// Symbolic image reference used by graphical front-ends
    pub image_name: &'static str,
    pub completed: bool,
}

/// The fixed five-stage recovery pathway shown on the dashboard
pub fn recovery_pathway() -> [RecoveryStage; 5] {
    [
        RecoveryStage {
            title: "Assessment",
            detail: "Condition identified",
            image_name: "checkmark.circle.fill",
            completed: true,
        },
        RecoveryStage {
            title: "Prescription",
            detail: "Personalized plan generated",
            image_name: "doc.text.fill",
            completed: true,
        },
        RecoveryStage {
            title: "Execution",
            detail: "Active exercise phase",
            image_name: "figure.walk",
            completed: true,
        },
        RecoveryStage {
            title: "Adjustment",
            detail: "Plan refinement",
            image_name: "sparkles",
            completed: false,
        },
        RecoveryStage {
            title: "Recovery",
            detail: "Full functionality target",
            image_name: "star.fill",
            completed: false,
        },
    ]
}
