//! Built-in plan presets, one per phase.
//!
//! Each preset carries the four default exam subjects with weights tuned to
//! the phase.

use serde::Serialize;

use super::{PhaseKind, Priority, SubjectConfig};
use crate::catalog;

/// A default subject inside a preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PresetSubject {
    pub id: &'static str,
    pub weight: u8,
    pub priority: Priority,
}

const fn subject(id: &'static str, weight: u8, priority: Priority) -> PresetSubject {
    PresetSubject {
        id,
        weight,
        priority,
    }
}

/// Preset template for a phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanPreset {
    pub kind: PhaseKind,
    pub name: &'static str,
    pub description: &'static str,
    /// Nominal duration in weeks
    pub duration_weeks: u32,
    pub focus: &'static [&'static str],
    pub weekly_hours: f64,
    pub subjects: &'static [PresetSubject],
}

const FOUNDATION: PlanPreset = PlanPreset {
    kind: PhaseKind::Foundation,
    name: "基础阶段",
    description: "夯实基础，全面复习",
    duration_weeks: 12,
    focus: &["英语", "政治", "数学/专业课"],
    weekly_hours: 40.0,
    subjects: &[
        subject("english", 8, Priority::High),
        subject("politics", 6, Priority::Medium),
        subject("math", 10, Priority::High),
        subject("major", 9, Priority::High),
    ],
};

const STRENGTHENING: PlanPreset = PlanPreset {
    kind: PhaseKind::Strengthening,
    name: "强化阶段",
    description: "深化理解，专项训练",
    duration_weeks: 10,
    focus: &["专业课", "英语真题", "政治背诵"],
    weekly_hours: 50.0,
    subjects: &[
        subject("english", 7, Priority::High),
        subject("politics", 8, Priority::High),
        subject("math", 9, Priority::High),
        subject("major", 10, Priority::High),
    ],
};

const SPRINT: PlanPreset = PlanPreset {
    kind: PhaseKind::Sprint,
    name: "冲刺阶段",
    description: "查漏补缺，模拟考试",
    duration_weeks: 8,
    focus: &["真题演练", "错题复习", "知识点巩固"],
    weekly_hours: 55.0,
    subjects: &[
        subject("english", 6, Priority::High),
        subject("politics", 10, Priority::High),
        subject("math", 8, Priority::High),
        subject("major", 10, Priority::High),
    ],
};

impl PlanPreset {
    pub fn get(kind: PhaseKind) -> &'static PlanPreset {
        match kind {
            PhaseKind::Foundation => &FOUNDATION,
            PhaseKind::Strengthening => &STRENGTHENING,
            PhaseKind::Sprint => &SPRINT,
        }
    }

    pub fn all() -> [&'static PlanPreset; 3] {
        [&FOUNDATION, &STRENGTHENING, &SPRINT]
    }

    /// Expand the preset's subjects into full subject configs.
    ///
    /// Weekly hours are split across subjects in proportion to their weight.
    pub fn subject_configs(&self) -> Vec<SubjectConfig> {
        let total_weight: u32 = self.subjects.iter().map(|s| u32::from(s.weight)).sum();
        self.subjects
            .iter()
            .map(|s| {
                let info = catalog::lookup(s.id);
                let share = if total_weight == 0 {
                    0.0
                } else {
                    self.weekly_hours * f64::from(s.weight) / f64::from(total_weight)
                };
                SubjectConfig {
                    id: s.id.to_string(),
                    name: info.map(|i| i.full_name).unwrap_or(s.id).to_string(),
                    emoji: info.map(|i| i.emoji).unwrap_or_default().to_string(),
                    weight: s.weight,
                    hours_per_week: (share * 10.0).round() / 10.0,
                    priority: s.priority,
                }
            })
            .collect()
    }
}
