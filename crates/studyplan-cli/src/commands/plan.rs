//! Learning plan commands for CLI.

use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::{Local, Utc};
use clap::Subcommand;
use studyplan_core::advisor;
use studyplan_core::learning::parse_date;
use studyplan_core::{Config, LearningPlan, PlanExporter, PlanGenerator, TaskRecord};

#[derive(Subcommand)]
pub enum PlanAction {
    /// Generate a plan from the configured learning settings
    Generate {
        /// Exam date override (YYYY-MM-DD)
        #[arg(long)]
        exam_date: Option<String>,
        /// Start date override (YYYY-MM-DD), defaults to today
        #[arg(long)]
        start_date: Option<String>,
        /// Daily study hours override
        #[arg(long)]
        daily_hours: Option<f64>,
        /// Seed for task wording
        #[arg(long)]
        seed: Option<u64>,
        /// Skip the simulated thinking delay
        #[arg(long)]
        no_delay: bool,
        /// Print minute totals instead of the full plan
        #[arg(long)]
        summary: bool,
    },
    /// Convert a saved plan (JSON) into task records
    Export {
        /// Plan file, or "-" for stdin
        plan: PathBuf,
        /// Existing task records (JSON array) to merge into
        #[arg(long)]
        existing: Option<PathBuf>,
    },
    /// Show suggestions for the configured learning settings
    Advise {
        /// Evaluate as of this date (YYYY-MM-DD) instead of today
        #[arg(long)]
        today: Option<String>,
    },
}

pub async fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PlanAction::Generate {
            exam_date,
            start_date,
            daily_hours,
            seed,
            no_delay,
            summary,
        } => {
            let config = Config::load_or_default();
            let mut learning = config.learning;
            if let Some(exam_date) = exam_date {
                learning.exam_date = exam_date;
            }
            if start_date.is_some() {
                learning.start_date = start_date;
            }
            if let Some(hours) = daily_hours {
                learning.daily_hours = hours;
            }

            let mut settings = config.generator;
            if seed.is_some() {
                settings.seed = seed;
            }
            if no_delay {
                settings.simulated_latency_ms = 0;
            }

            tracing::debug!(
                exam_date = %learning.exam_date,
                seed = ?settings.seed,
                "generating plan"
            );
            let plan = PlanGenerator::with_settings(settings).generate(&learning).await?;
            if summary {
                println!("{}", serde_json::to_string_pretty(&plan.summary())?);
            } else {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            }
        }
        PlanAction::Export { plan, existing } => {
            let plan: LearningPlan = serde_json::from_str(&read_input(&plan)?)?;
            let mut exporter = match existing {
                Some(path) => {
                    let records: Vec<TaskRecord> = serde_json::from_str(&read_input(&path)?)?;
                    PlanExporter::with_existing(records)
                }
                None => PlanExporter::new(),
            };
            let added = exporter.push_plan(&plan, Utc::now());
            eprintln!("Exported {added} tasks from {}", plan.id);
            println!("{}", serde_json::to_string_pretty(exporter.records())?);
        }
        PlanAction::Advise { today } => {
            let config = Config::load_or_default();
            let today = match today {
                Some(s) => parse_date("today", &s)?,
                None => Local::now().date_naive(),
            };
            let suggestions = advisor::suggestions(&config.learning, today)?;
            println!("{}", serde_json::to_string_pretty(&suggestions)?);
        }
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}
