//! # Studyplan Core Library
//!
//! This library provides the business logic for the Studyplan exam
//! preparation assistant. All operations are available through the
//! standalone CLI binary; a host UI consumes the same types.
//!
//! ## Architecture
//!
//! - **Plan generation**: phases, weekly templates and day-by-day sessions
//!   built from a [`LearningConfig`]
//! - **Advisor**: rule-based suggestions from the config and remaining time
//! - **Export**: flat, deduplicated task records for an external task list
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`PlanGenerator`]: Builds a [`LearningPlan`]
//! - [`advisor::suggestions`]: Produces [`SmartSuggestion`]s
//! - [`PlanExporter`]: Converts plans into [`TaskRecord`]s
//! - [`Config`]: Application configuration management

pub mod advisor;
pub mod catalog;
pub mod error;
pub mod export;
pub mod learning;
pub mod plan;
pub mod storage;

pub use advisor::{SmartSuggestion, SuggestionCategory, SuggestionType};
pub use error::{ConfigError, CoreError, ValidationError};
pub use export::{export_plan_to_tasks, link_phase_tasks, PlanExporter, TaskRecord};
pub use learning::{LearningConfig, PhaseKind, PlanPreset, Priority, SubjectConfig, TimeSlot};
pub use plan::{
    DailyTask, GeneratorSettings, LearningPlan, PlanGenerator, PlanPhase, PlanSummary, SessionType,
    TaskSession, WeeklyTemplate,
};
pub use storage::Config;
