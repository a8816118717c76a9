//! Plan preset commands for CLI.

use clap::Subcommand;
use studyplan_core::{Config, LearningConfig, PhaseKind, PlanPreset};

#[derive(Subcommand)]
pub enum PresetAction {
    /// List built-in presets
    List,
    /// Replace the configured learning settings with a preset
    Apply {
        /// Preset id: foundation, strengthening or sprint
        kind: String,
        /// Exam date (YYYY-MM-DD)
        #[arg(long)]
        exam_date: String,
    },
}

pub fn run(action: PresetAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PresetAction::List => {
            println!("{}", serde_json::to_string_pretty(&PlanPreset::all())?);
        }
        PresetAction::Apply { kind, exam_date } => {
            let phase = PhaseKind::from_id(&kind).ok_or_else(|| format!("unknown preset: {kind}"))?;
            let learning = LearningConfig::from_preset(phase, exam_date);
            // Reject a bad exam date before it is written
            studyplan_core::learning::parse_date("exam_date", &learning.exam_date)?;

            let mut config = Config::load()?;
            config.learning = learning;
            config.save()?;
            eprintln!("Preset applied: {}", PlanPreset::get(phase).name);
        }
    }
    Ok(())
}
