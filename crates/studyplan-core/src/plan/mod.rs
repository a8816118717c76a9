//! Learning plan model and generation pipeline.
//!
//! A plan is built once per [`PlanGenerator`] call:
//! - [`phases::allocate_phases`] splits the timeline into foundation,
//!   strengthening and sprint phases
//! - [`weekly::WeeklyTemplateBuilder`] lays out each week
//! - [`daily::DailyTaskBuilder`] fills in the time-boxed sessions of one day
//!
//! Returned plans are never mutated; regenerating produces a new plan id.

pub mod daily;
pub mod generator;
pub mod phases;
pub mod weekly;

pub use daily::DailyTaskBuilder;
pub use generator::{generate_plan, GeneratorSettings, PlanGenerator};
pub use phases::allocate_phases;
pub use weekly::WeeklyTemplateBuilder;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::learning::{LearningConfig, Priority};

/// Kind of activity a session represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    Study,
    Review,
    Exercise,
    Break,
}

impl SessionType {
    /// Whether the session counts toward study hours and export.
    pub fn is_learning(&self) -> bool {
        matches!(self, SessionType::Study | SessionType::Review)
    }
}

/// One timed activity block within a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSession {
    pub subject: String,
    pub subject_emoji: String,
    pub duration_minutes: u32,
    pub session_type: SessionType,
    pub task: String,
    pub priority: Priority,
}

/// The schedule for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTask {
    /// 0-6, offset from the first day of the week
    pub day_of_week: u8,
    /// Local calendar date, `YYYY-MM-DD`
    pub date: String,
    pub day_theme: String,
    /// Preferred clock time to begin the day's sessions (HH:mm)
    pub start_time: String,
    /// Study and review time in hours
    pub total_hours: f64,
    pub sessions: Vec<TaskSession>,
}

/// Layout of one plan week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTemplate {
    /// 1-based
    pub week_number: u32,
    pub theme: String,
    pub focus_subjects: Vec<String>,
    pub daily_tasks: Vec<DailyTask>,
    pub goals: Vec<String>,
    pub tips: Vec<String>,
}

/// A contiguous multi-week segment of the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanPhase {
    pub name: String,
    /// Inclusive, 1-based
    pub start_week: u32,
    /// Inclusive, 1-based
    pub end_week: u32,
    pub duration: u32,
    pub focus: Vec<String>,
    pub goals: Vec<String>,
    pub weekly_hours: f64,
    /// Exported task ids; empty at generation time
    #[serde(default)]
    pub tasks: Vec<String>,
}

impl PlanPhase {
    pub fn contains_week(&self, week: u32) -> bool {
        week >= self.start_week && week <= self.end_week
    }
}

/// A generated learning plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPlan {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub config: LearningConfig,
    pub phases: Vec<PlanPhase>,
    pub weekly_templates: Vec<WeeklyTemplate>,
    pub total_days: i64,
    /// `daily_hours * total_days`, a planning estimate
    pub total_hours: f64,
    pub subjects: Vec<String>,
}

/// Minute totals per session type across a plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Weeks with a template
    pub weeks: u32,
    /// Weeks the timeline spans, past the template limit included
    pub timeline_weeks: u32,
    pub days: u32,
    pub study_minutes: u64,
    pub review_minutes: u64,
    pub exercise_minutes: u64,
    pub break_minutes: u64,
}

impl LearningPlan {
    /// Total weeks the timeline spans, including weeks past the template limit.
    pub fn total_weeks(&self) -> u32 {
        self.phases.last().map(|p| p.end_week).unwrap_or(0)
    }

    pub fn summary(&self) -> PlanSummary {
        let mut summary = PlanSummary {
            weeks: u32::try_from(self.weekly_templates.len()).unwrap_or(u32::MAX),
            timeline_weeks: self.total_weeks(),
            ..PlanSummary::default()
        };
        for day in self.weekly_templates.iter().flat_map(|w| &w.daily_tasks) {
            summary.days += 1;
            for session in &day.sessions {
                let minutes = u64::from(session.duration_minutes);
                match session.session_type {
                    SessionType::Study => summary.study_minutes += minutes,
                    SessionType::Review => summary.review_minutes += minutes,
                    SessionType::Exercise => summary.exercise_minutes += minutes,
                    SessionType::Break => summary.break_minutes += minutes,
                }
            }
        }
        summary
    }
}
