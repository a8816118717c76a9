//! Learning configuration supplied by the caller for one generation run.
//!
//! Dates are carried as the user typed them and resolved through
//! [`LearningConfig::resolve_dates`], which is the single place where bad
//! input is rejected.

mod presets;

pub use presets::{PlanPreset, PresetSubject};

use chrono::{DateTime, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

/// Priority shared by subjects, sessions and exported tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

/// Pedagogical phase of a study plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    #[default]
    Foundation,
    Strengthening,
    Sprint,
}

impl PhaseKind {
    /// Phase name as shown on a plan phase.
    pub fn display_name(&self) -> &'static str {
        match self {
            PhaseKind::Foundation => "基础阶段",
            PhaseKind::Strengthening => "强化阶段",
            PhaseKind::Sprint => "冲刺阶段",
        }
    }

    /// Short prefix used in plan names.
    pub fn short_name(&self) -> &'static str {
        match self {
            PhaseKind::Foundation => "基础",
            PhaseKind::Strengthening => "强化",
            PhaseKind::Sprint => "冲刺",
        }
    }

    /// Parse a phase from its identifier (`foundation`, `strengthening`, `sprint`).
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "foundation" => Some(PhaseKind::Foundation),
            "strengthening" => Some(PhaseKind::Strengthening),
            "sprint" => Some(PhaseKind::Sprint),
            _ => None,
        }
    }

    pub fn all() -> [PhaseKind; 3] {
        [PhaseKind::Foundation, PhaseKind::Strengthening, PhaseKind::Sprint]
    }
}

/// Time of day the user prefers to start studying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
}

impl TimeSlot {
    /// Clock time (HH:mm) the slot starts at.
    pub fn start_time(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "08:00",
            TimeSlot::Afternoon => "14:00",
            TimeSlot::Evening => "19:00",
        }
    }
}

/// Per-subject settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub emoji: String,
    /// Relative weight (1-10)
    #[serde(default = "default_weight")]
    pub weight: u8,
    #[serde(default)]
    pub hours_per_week: f64,
    #[serde(default)]
    pub priority: Priority,
}

impl SubjectConfig {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            emoji: String::new(),
            weight: default_weight(),
            hours_per_week: 0.0,
            priority: Priority::Medium,
        }
    }
}

/// Input for one plan generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningConfig {
    /// Exam date, `YYYY-MM-DD`
    #[serde(default)]
    pub exam_date: String,
    /// Start date, `YYYY-MM-DD`; today when absent
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default = "default_daily_hours")]
    pub daily_hours: f64,
    #[serde(default)]
    pub target_score: Option<String>,
    #[serde(default)]
    pub target_school: Option<String>,
    /// Phase the user considers themselves in
    #[serde(default)]
    pub phase: PhaseKind,
    #[serde(default)]
    pub strong_subjects: Vec<String>,
    #[serde(default)]
    pub weak_subjects: Vec<String>,
    #[serde(default = "default_true")]
    pub prefer_morning: bool,
    #[serde(default)]
    pub prefer_afternoon: bool,
    #[serde(default)]
    pub prefer_evening: bool,
    /// Minutes between breaks
    #[serde(default = "default_break_interval")]
    pub break_interval: u32,
    #[serde(default)]
    pub subjects: Vec<SubjectConfig>,
}

fn default_true() -> bool {
    true
}
fn default_weight() -> u8 {
    5
}
fn default_daily_hours() -> f64 {
    6.0
}
fn default_break_interval() -> u32 {
    90
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            exam_date: String::new(),
            start_date: None,
            daily_hours: default_daily_hours(),
            target_score: None,
            target_school: None,
            phase: PhaseKind::default(),
            strong_subjects: Vec::new(),
            weak_subjects: Vec::new(),
            prefer_morning: true,
            prefer_afternoon: false,
            prefer_evening: false,
            break_interval: default_break_interval(),
            subjects: Vec::new(),
        }
    }
}

/// Calendar dates resolved from a [`LearningConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDates {
    pub start: NaiveDate,
    pub exam: NaiveDate,
}

impl ResolvedDates {
    /// Days from start to exam. Zero or negative when the exam is not after the start.
    pub fn total_days(&self) -> i64 {
        (self.exam - self.start).num_days()
    }

    /// Weeks needed to cover [`total_days`](Self::total_days), never less than one.
    pub fn total_weeks(&self) -> u32 {
        let days = self.total_days();
        if days <= 0 {
            return 1;
        }
        u32::try_from((days + 6) / 7).unwrap_or(u32::MAX)
    }
}

impl LearningConfig {
    /// Build a config from one of the built-in presets.
    pub fn from_preset(kind: PhaseKind, exam_date: impl Into<String>) -> Self {
        let preset = PlanPreset::get(kind);
        Self {
            exam_date: exam_date.into(),
            daily_hours: (preset.weekly_hours / 7.0 * 10.0).round() / 10.0,
            phase: kind,
            subjects: preset.subject_configs(),
            ..Self::default()
        }
    }

    /// Resolve exam and start dates against `today`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidValue`] when no exam date is set and
    /// [`ValidationError::InvalidDate`] when either date does not parse. A
    /// timeline whose last week runs past the calendar's range is rejected
    /// as an invalid `start_date`.
    pub fn resolve_dates(&self, today: NaiveDate) -> Result<ResolvedDates> {
        if self.exam_date.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "exam_date".to_string(),
                message: "exam date is required".to_string(),
            }
            .into());
        }
        let exam = parse_date("exam_date", &self.exam_date)?;
        let start = match self.start_date.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => parse_date("start_date", s)?,
            _ => today,
        };

        let dates = ResolvedDates { start, exam };
        let span = Days::new(u64::from(dates.total_weeks()) * 7);
        if start.checked_add_days(span).is_none() {
            return Err(ValidationError::InvalidValue {
                field: "start_date".to_string(),
                message: format!("plan starting {start} runs past the last supported date"),
            }
            .into());
        }
        Ok(dates)
    }

    /// Preferred daily start slot. Morning wins over afternoon, which wins over evening.
    pub fn preferred_slot(&self) -> TimeSlot {
        if self.prefer_morning {
            TimeSlot::Morning
        } else if self.prefer_afternoon {
            TimeSlot::Afternoon
        } else {
            TimeSlot::Evening
        }
    }

    pub fn subject_names(&self) -> Vec<String> {
        self.subjects.iter().map(|s| s.name.clone()).collect()
    }
}

/// Parse a `YYYY-MM-DD` date, also accepting a full RFC 3339 timestamp.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .map_err(|_| {
            ValidationError::InvalidDate {
                field: field.to_string(),
                value: value.to_string(),
            }
            .into()
        })
}
