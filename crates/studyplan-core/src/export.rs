//! Flatten a plan into task-list records.
//!
//! Every study and review session becomes one record keyed
//! `{plan_id}_w{week}_d{day}_s{index}`, where `day` is 1-based and `index`
//! counts exported sessions within that day. A key that was already emitted
//! is skipped, so exporting the same plan again adds nothing and earlier
//! records are never overwritten.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::learning::Priority;
use crate::plan::{LearningPlan, PlanPhase};

/// A task consumed by an external task list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub category: String,
    pub priority: Priority,
    /// `YYYY-MM-DD`
    pub due_date: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    /// Id of the plan the task came from
    pub from_plan: String,
    pub week_number: u32,
    /// 0-6
    pub day_of_week: u8,
}

/// Composite key of an exported session.
pub fn task_key(plan_id: &str, week: u32, day: u8, index: usize) -> String {
    format!("{plan_id}_w{week}_d{}_s{index}", u32::from(day) + 1)
}

/// Accumulates exported records, dropping repeated keys.
#[derive(Debug, Default)]
pub struct PlanExporter {
    seen: HashSet<String>,
    records: Vec<TaskRecord>,
}

impl PlanExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from records already in the task list.
    pub fn with_existing(records: Vec<TaskRecord>) -> Self {
        let mut exporter = Self::new();
        for record in records {
            if exporter.seen.insert(record.id.clone()) {
                exporter.records.push(record);
            }
        }
        exporter
    }

    /// Export `plan`, returning how many new records were added.
    pub fn push_plan(&mut self, plan: &LearningPlan, now: DateTime<Utc>) -> usize {
        let before = self.records.len();
        let mut skipped = 0usize;

        for week in &plan.weekly_templates {
            for day in &week.daily_tasks {
                let learning = day.sessions.iter().filter(|s| s.session_type.is_learning());
                for (index, session) in learning.enumerate() {
                    let id = task_key(&plan.id, week.week_number, day.day_of_week, index);
                    if !self.seen.insert(id.clone()) {
                        skipped += 1;
                        continue;
                    }
                    self.records.push(TaskRecord {
                        id,
                        text: format!("[第{}周] {} - {}", week.week_number, day.date, session.task),
                        completed: false,
                        category: catalog::category_for_name(&session.subject).to_string(),
                        priority: session.priority,
                        due_date: day.date.clone(),
                        notes: format!(
                            "{} | {}分钟 | {}",
                            session.subject, session.duration_minutes, week.theme
                        ),
                        created_at: now,
                        from_plan: plan.id.clone(),
                        week_number: week.week_number,
                        day_of_week: day.day_of_week,
                    });
                }
            }
        }

        let added = self.records.len() - before;
        tracing::debug!(plan_id = %plan.id, added, skipped, "exported plan tasks");
        added
    }

    pub fn records(&self) -> &[TaskRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<TaskRecord> {
        self.records
    }
}

/// Export a plan into a fresh, deduplicated record list.
pub fn export_plan_to_tasks(plan: &LearningPlan) -> Vec<TaskRecord> {
    let mut exporter = PlanExporter::new();
    exporter.push_plan(plan, Utc::now());
    exporter.into_records()
}

/// Copies of the plan's phases with `tasks` holding the ids of exported
/// records that fall in each phase's weeks.
pub fn link_phase_tasks(plan: &LearningPlan, records: &[TaskRecord]) -> Vec<PlanPhase> {
    plan.phases
        .iter()
        .map(|phase| PlanPhase {
            tasks: records
                .iter()
                .filter(|r| r.from_plan == plan.id && phase.contains_week(r.week_number))
                .map(|r| r.id.clone())
                .collect(),
            ..phase.clone()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::learning::{LearningConfig, SubjectConfig};
    use crate::plan::PlanGenerator;
    use chrono::NaiveDate;

    fn plan(subjects: &[(&str, &str)], exam: &str) -> LearningPlan {
        let cfg = LearningConfig {
            exam_date: exam.to_string(),
            start_date: Some("2025-01-06".to_string()),
            subjects: subjects
                .iter()
                .map(|(id, name)| SubjectConfig::new(*id, *name))
                .collect(),
            ..LearningConfig::default()
        };
        PlanGenerator::deterministic(9)
            .generate_at(&cfg, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
            .unwrap()
    }

    #[test]
    fn exports_study_and_review_only() {
        let plan = plan(
            &[("english", "英语"), ("math", "数学"), ("major", "专业课")],
            "2025-01-20",
        );
        let records = export_plan_to_tasks(&plan);
        // 2 weeks * 7 days * (3 study + 1 review)
        assert_eq!(records.len(), 2 * 7 * 4);
        assert!(records.iter().all(|r| !r.completed));
        assert!(records
            .iter()
            .all(|r| !r.notes.starts_with("休息") && !r.notes.starts_with("运动")));
    }

    #[test]
    fn record_fields() {
        let plan = plan(&[("english", "英语"), ("history", "历史")], "2025-01-20");
        let records = export_plan_to_tasks(&plan);

        let first = &records[0];
        assert_eq!(first.id, format!("{}_w1_d1_s0", plan.id));
        assert_eq!(first.category, "english");
        assert_eq!(first.due_date, "2025-01-06");
        assert!(first.text.starts_with("[第1周] 2025-01-06 - 英语 - "));
        assert_eq!(first.notes, "英语 | 90分钟 | 适应期 - 建立学习节奏");
        assert_eq!(first.from_plan, plan.id);
        assert_eq!((first.week_number, first.day_of_week), (1, 0));

        let second = &records[1];
        assert_eq!(second.category, "study");
        assert_eq!(second.id, format!("{}_w1_d1_s1", plan.id));

        // review of subject 0 is the third exported session of the day
        let review = &records[2];
        assert_eq!(review.id, format!("{}_w1_d1_s2", plan.id));
        assert!(review.text.ends_with("当日知识点回顾与总结"));
    }

    #[test]
    fn repeated_export_adds_nothing() {
        let plan = plan(&[("english", "英语"), ("math", "数学")], "2025-02-20");
        let mut exporter = PlanExporter::new();
        let now = Utc::now();
        let first = exporter.push_plan(&plan, now);
        let snapshot = exporter.records().to_vec();
        let second = exporter.push_plan(&plan, now);

        assert!(first > 0);
        assert_eq!(second, 0);
        assert_eq!(exporter.records(), snapshot.as_slice());

        let ids: HashSet<_> = exporter.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), exporter.records().len());
    }

    #[test]
    fn duplicate_key_keeps_first_occurrence() {
        let plan = plan(&[("english", "英语")], "2025-01-10");
        let mut altered = plan.clone();
        altered.weekly_templates[0].daily_tasks[0].sessions[0].task = "英语 - 改写".to_string();

        let mut exporter = PlanExporter::new();
        exporter.push_plan(&plan, Utc::now());
        let original_text = exporter.records()[0].text.clone();
        exporter.push_plan(&altered, Utc::now());

        assert_eq!(exporter.records()[0].text, original_text);
        assert_eq!(exporter.records().len(), export_plan_to_tasks(&plan).len());
    }

    #[test]
    fn existing_records_seed_dedup() {
        let plan = plan(&[("math", "数学")], "2025-01-10");
        let existing = export_plan_to_tasks(&plan);
        let mut exporter = PlanExporter::with_existing(existing.clone());
        assert_eq!(exporter.push_plan(&plan, Utc::now()), 0);
        assert_eq!(exporter.into_records(), existing);
    }

    #[test]
    fn phases_get_linked_task_ids() {
        let plan = plan(&[("math", "数学")], "2025-05-01");
        assert!(plan.phases.iter().all(|p| p.tasks.is_empty()));
        let records = export_plan_to_tasks(&plan);
        let phases = link_phase_tasks(&plan, &records);

        assert_eq!(phases.len(), plan.phases.len());
        let linked: usize = phases.iter().map(|p| p.tasks.len()).sum();
        assert_eq!(linked, records.len());
        assert!(phases[1].tasks.iter().all(|id| !id.contains("_w1_")));
    }
}
