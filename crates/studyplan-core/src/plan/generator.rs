//! Plan generation entry point.
//!
//! Dates are validated before anything else happens. After that the only
//! suspension point is the simulated thinking delay; everything past it is
//! synchronous and builds fresh output from the caller's config.

use std::time::Duration;

use chrono::{Local, NaiveDate, Utc};
use rand::{Rng, SeedableRng};
use rand_pcg::Mcg128Xsl64;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::learning::LearningConfig;

use super::phases::allocate_phases;
use super::weekly::WeeklyTemplateBuilder;
use super::LearningPlan;

/// Generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSettings {
    /// Artificial delay before generation, in milliseconds
    #[serde(default = "default_simulated_latency_ms")]
    pub simulated_latency_ms: u64,

    /// Random seed for task wording (None = random)
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_simulated_latency_ms() -> u64 {
    1500
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            simulated_latency_ms: default_simulated_latency_ms(),
            seed: None,
        }
    }
}

/// Generates learning plans.
#[derive(Debug, Clone, Default)]
pub struct PlanGenerator {
    settings: GeneratorSettings,
}

impl PlanGenerator {
    /// Create a generator with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom settings
    pub fn with_settings(settings: GeneratorSettings) -> Self {
        Self { settings }
    }

    /// Generator with no simulated delay and a fixed seed.
    pub fn deterministic(seed: u64) -> Self {
        Self::with_settings(GeneratorSettings {
            simulated_latency_ms: 0,
            seed: Some(seed),
        })
    }

    /// Generate a plan starting from the local calendar date.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the exam or start date is missing or
    /// unparsable. No delay is incurred in that case.
    pub async fn generate(&self, config: &LearningConfig) -> Result<LearningPlan> {
        let today = Local::now().date_naive();
        config.resolve_dates(today)?;

        if self.settings.simulated_latency_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.settings.simulated_latency_ms)).await;
        }

        let mut rng = self.rng();
        generate_plan(config, today, &mut rng)
    }

    /// Synchronous variant with an explicit `today`.
    pub fn generate_at(&self, config: &LearningConfig, today: NaiveDate) -> Result<LearningPlan> {
        let mut rng = self.rng();
        generate_plan(config, today, &mut rng)
    }

    fn rng(&self) -> Mcg128Xsl64 {
        match self.settings.seed {
            Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
            None => Mcg128Xsl64::from_entropy(),
        }
    }
}

/// Build a plan with a caller-supplied random source.
///
/// The random source only affects the wording of study sessions.
///
/// # Errors
///
/// Returns a validation error when the exam or start date is missing or
/// unparsable.
pub fn generate_plan<R: Rng + ?Sized>(
    config: &LearningConfig,
    today: NaiveDate,
    rng: &mut R,
) -> Result<LearningPlan> {
    let dates = config.resolve_dates(today)?;
    let total_days = dates.total_days();
    let total_weeks = dates.total_weeks();

    if total_days <= 0 {
        tracing::warn!(
            exam_date = %dates.exam,
            start_date = %dates.start,
            "exam date is not after start date, planning a single week"
        );
    }

    let phases = allocate_phases(config, total_weeks);
    let weekly_templates =
        WeeklyTemplateBuilder::new(config, total_weeks, dates.start).build_all(rng);

    let plan = LearningPlan {
        id: format!("plan_{}", uuid::Uuid::new_v4().simple()),
        name: format!("{}学习计划", config.phase.short_name()),
        created_at: Utc::now(),
        config: config.clone(),
        phases,
        weekly_templates,
        total_days,
        total_hours: config.daily_hours * total_days as f64,
        subjects: config.subject_names(),
    };

    tracing::info!(
        plan_id = %plan.id,
        total_days,
        total_weeks,
        templates = plan.weekly_templates.len(),
        phases = plan.phases.len(),
        "generated learning plan"
    );

    Ok(plan)
}
