//! Integration tests for plan generation, advice and export.
//!
//! These tests drive the public API end to end: build a config, generate a
//! plan, and check the structural guarantees callers rely on.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate, Utc};
use proptest::prelude::*;
use studyplan_core::advisor::suggestions;
use studyplan_core::plan::generate_plan;
use studyplan_core::{
    LearningConfig, PhaseKind, PlanExporter, PlanGenerator, SessionType, SubjectConfig,
    SuggestionCategory,
};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn subjects(n: usize) -> Vec<SubjectConfig> {
    let known = [("english", "英语"), ("politics", "政治"), ("math", "数学"), ("major", "专业课")];
    (0..n)
        .map(|i| match known.get(i) {
            Some((id, name)) => SubjectConfig::new(*id, *name),
            None => SubjectConfig::new(format!("extra{i}"), format!("科目{i}")),
        })
        .collect()
}

fn config(start: NaiveDate, days: i64, subject_count: usize) -> LearningConfig {
    LearningConfig {
        exam_date: (start + Duration::days(days)).format("%Y-%m-%d").to_string(),
        start_date: Some(start.format("%Y-%m-%d").to_string()),
        daily_hours: 6.0,
        subjects: subjects(subject_count),
        ..LearningConfig::default()
    }
}

#[test]
fn test_full_year_plan_workflow() {
    let cfg = LearningConfig {
        exam_date: "2025-06-01".to_string(),
        start_date: Some("2024-06-01".to_string()),
        daily_hours: 6.0,
        weak_subjects: vec!["math".to_string()],
        subjects: subjects(4),
        ..LearningConfig::default()
    };

    let plan = PlanGenerator::deterministic(2024)
        .generate_at(&cfg, date("2024-06-01"))
        .unwrap();

    assert_eq!(plan.total_days, 365);
    assert_eq!(plan.weekly_templates.len(), 52);
    assert_eq!(plan.phases.len(), 3);
    assert_eq!(plan.phases[0].duration, 21);
    assert_eq!(plan.phases.iter().map(|p| p.duration).sum::<u32>(), 53);

    // Last template day is start + 51 weeks + 6 days
    let last_day = plan.weekly_templates[51].daily_tasks.last().unwrap();
    assert_eq!(last_day.date, "2025-05-30");

    // Advice is independent of the plan
    let advice = suggestions(&cfg, date("2024-06-01")).unwrap();
    assert_eq!(advice.len(), 3);
    assert_eq!(advice[0].title, "黄金复习期");
    assert_eq!(advice[1].category, SuggestionCategory::Subject);

    // Export and re-export
    let mut exporter = PlanExporter::new();
    let added = exporter.push_plan(&plan, Utc::now());
    // 52 weeks * 7 days * (4 study + 1 review)
    assert_eq!(added, 52 * 7 * 5);
    assert_eq!(exporter.push_plan(&plan, Utc::now()), 0);
}

#[test]
fn test_plan_serializes_to_json() {
    let cfg = LearningConfig::from_preset(PhaseKind::Strengthening, "2025-03-01");
    let plan = PlanGenerator::deterministic(5)
        .generate_at(&cfg, date("2025-01-01"))
        .unwrap();

    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["name"], "强化学习计划");
    let sessions = &json["weekly_templates"][0]["daily_tasks"][0]["sessions"];
    assert_eq!(sessions[2]["session_type"], "break");
    assert_eq!(sessions[0]["priority"], "medium");

    let decoded: studyplan_core::LearningPlan = serde_json::from_value(json).unwrap();
    assert_eq!(decoded.id, plan.id);
    assert_eq!(decoded.weekly_templates.len(), plan.weekly_templates.len());
    assert_eq!(decoded.config.subjects, plan.config.subjects);
}

#[test]
fn test_deterministic_source_controls_text_only() {
    let cfg = config(date("2025-01-01"), 60, 4);
    let a = PlanGenerator::deterministic(1).generate_at(&cfg, date("2025-01-01")).unwrap();
    let b = PlanGenerator::deterministic(2).generate_at(&cfg, date("2025-01-01")).unwrap();

    for (wa, wb) in a.weekly_templates.iter().zip(&b.weekly_templates) {
        for (da, db) in wa.daily_tasks.iter().zip(&wb.daily_tasks) {
            assert_eq!(da.date, db.date);
            assert_eq!(da.total_hours, db.total_hours);
            for (sa, sb) in da.sessions.iter().zip(&db.sessions) {
                assert_eq!(sa.session_type, sb.session_type);
                assert_eq!(sa.duration_minutes, sb.duration_minutes);
                assert_eq!(sa.subject, sb.subject);
            }
        }
    }
}

proptest! {
    #[test]
    fn prop_phases_partition_timeline(days in -30i64..800, subject_count in 0usize..6) {
        let start = date("2024-03-10");
        let cfg = config(start, days, subject_count);
        let mut rng = rand::rngs::mock::StepRng::new(0, 1);
        let plan = generate_plan(&cfg, start, &mut rng).unwrap();

        let total_weeks = if days <= 0 { 1 } else { ((days + 6) / 7) as u32 };
        prop_assert_eq!(plan.phases.iter().map(|p| p.duration).sum::<u32>(), total_weeks);
        prop_assert!(!plan.phases.is_empty() && plan.phases.len() <= 3);

        let mut next = 1;
        for phase in &plan.phases {
            prop_assert_eq!(phase.start_week, next);
            prop_assert_eq!(phase.end_week + 1 - phase.start_week, phase.duration);
            next = phase.end_week + 1;
        }

        prop_assert_eq!(plan.weekly_templates.len() as u32, total_weeks.min(52));
    }

    #[test]
    fn prop_days_are_consecutive_and_hours_match(days in 1i64..400, subject_count in 0usize..6) {
        let start = date("2023-10-28");
        let cfg = config(start, days, subject_count);
        let mut rng = rand::rngs::mock::StepRng::new(7, 3);
        let plan = generate_plan(&cfg, start, &mut rng).unwrap();

        let mut expected = start;
        for week in &plan.weekly_templates {
            prop_assert_eq!(week.daily_tasks.len(), 7);
            for day in &week.daily_tasks {
                prop_assert_eq!(&day.date, &expected.format("%Y-%m-%d").to_string());
                expected += Duration::days(1);

                let minutes: u32 = day
                    .sessions
                    .iter()
                    .filter(|s| matches!(s.session_type, SessionType::Study | SessionType::Review))
                    .map(|s| s.duration_minutes)
                    .sum();
                prop_assert!((day.total_hours - f64::from(minutes) / 60.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn prop_export_twice_has_unique_keys(days in 1i64..120, subject_count in 0usize..5) {
        let start = date("2025-01-01");
        let cfg = config(start, days, subject_count);
        let plan = PlanGenerator::deterministic(3).generate_at(&cfg, start).unwrap();

        let mut once = PlanExporter::new();
        once.push_plan(&plan, Utc::now());

        let mut twice = PlanExporter::new();
        twice.push_plan(&plan, Utc::now());
        twice.push_plan(&plan, Utc::now());

        let ids: HashSet<_> = twice.records().iter().map(|r| r.id.clone()).collect();
        prop_assert_eq!(ids.len(), twice.records().len());
        prop_assert_eq!(twice.records().len(), once.records().len());
    }
}
