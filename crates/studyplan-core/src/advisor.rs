//! Rule-based study advice.
//!
//! Produces, in order: one schedule suggestion chosen by days remaining until
//! the exam, one subject suggestion when weak subjects are configured, and one
//! health reminder.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::learning::{parse_date, LearningConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionType {
    Warning,
    Tip,
    Encouragement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionCategory {
    Schedule,
    Subject,
    Health,
    Motivation,
}

/// A single piece of advice for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmartSuggestion {
    #[serde(rename = "type")]
    pub suggestion_type: SuggestionType,
    pub category: SuggestionCategory,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub actionable: bool,
    /// Label of the suggested action, present when actionable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl SmartSuggestion {
    fn new(
        suggestion_type: SuggestionType,
        category: SuggestionCategory,
        title: &str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            suggestion_type,
            category,
            title: title.to_string(),
            message: message.into(),
            actionable: false,
            action: None,
        }
    }

    fn with_action(mut self, action: &str) -> Self {
        self.actionable = true;
        self.action = Some(action.to_string());
        self
    }
}

/// Build suggestions for `config` as of `today`.
///
/// # Errors
///
/// Returns a validation error when the exam date does not parse.
pub fn suggestions(config: &LearningConfig, today: NaiveDate) -> Result<Vec<SmartSuggestion>> {
    let exam = parse_date("exam_date", &config.exam_date)?;
    let days_remaining = (exam - today).num_days();

    let mut out = Vec::with_capacity(3);
    out.push(schedule_suggestion(days_remaining));

    if !config.weak_subjects.is_empty() {
        out.push(
            SmartSuggestion::new(
                SuggestionType::Tip,
                SuggestionCategory::Subject,
                "弱项强化",
                format!(
                    "你的弱项是 {}，建议每天多分配1-2小时专项练习。",
                    config.weak_subjects.join("、")
                ),
            )
            .with_action("调整时间分配"),
        );
    }

    out.push(SmartSuggestion::new(
        SuggestionType::Warning,
        SuggestionCategory::Health,
        "劳逸结合",
        "建议每1-2小时休息15分钟，每天保证7-8小时睡眠。",
    ));

    tracing::debug!(days_remaining, count = out.len(), "built suggestions");
    Ok(out)
}

fn schedule_suggestion(days_remaining: i64) -> SmartSuggestion {
    use SuggestionCategory::Schedule;
    match days_remaining {
        d if d > 365 => SmartSuggestion::new(
            SuggestionType::Tip,
            Schedule,
            "时间充裕",
            "你有超过一年的时间，充分打好基础，建议每天学习6-8小时。",
        )
        .with_action("设置基础阶段模板"),
        d if d > 180 => SmartSuggestion::new(
            SuggestionType::Tip,
            Schedule,
            "黄金复习期",
            "还有半年时间，正是强化提升的好时机！",
        ),
        d if d > 90 => SmartSuggestion::new(
            SuggestionType::Warning,
            Schedule,
            "时间紧张",
            "不到三个月就要考试了，建议加大马力冲刺！",
        )
        .with_action("切换到冲刺模式"),
        _ => SmartSuggestion::new(
            SuggestionType::Encouragement,
            Schedule,
            "最后冲刺",
            "黎明前的黑暗，坚持就是胜利！",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn config(exam: &str, weak: &[&str]) -> LearningConfig {
        LearningConfig {
            exam_date: exam.to_string(),
            weak_subjects: weak.iter().map(|s| s.to_string()).collect(),
            ..LearningConfig::default()
        }
    }

    fn titles(list: &[SmartSuggestion]) -> Vec<&str> {
        list.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn remaining_day_bands() {
        let today = date("2025-01-01");
        let cases = [
            (366, "时间充裕", SuggestionType::Tip, true),
            (365, "黄金复习期", SuggestionType::Tip, false),
            (181, "黄金复习期", SuggestionType::Tip, false),
            (180, "时间紧张", SuggestionType::Warning, true),
            (91, "时间紧张", SuggestionType::Warning, true),
            (90, "最后冲刺", SuggestionType::Encouragement, false),
            (0, "最后冲刺", SuggestionType::Encouragement, false),
            (-5, "最后冲刺", SuggestionType::Encouragement, false),
        ];
        for (days, title, kind, actionable) in cases {
            let exam = today + chrono::Duration::days(days);
            let cfg = config(&exam.format("%Y-%m-%d").to_string(), &[]);
            let list = suggestions(&cfg, today).unwrap();
            assert_eq!(list[0].title, title, "days = {days}");
            assert_eq!(list[0].suggestion_type, kind);
            assert_eq!(list[0].category, SuggestionCategory::Schedule);
            assert_eq!(list[0].actionable, actionable);
            assert_eq!(list[0].action.is_some(), actionable);
        }
    }

    #[test]
    fn weak_subjects_add_one_subject_entry() {
        let today = date("2025-01-01");
        let with = suggestions(&config("2025-06-01", &["math"]), today).unwrap();
        let without = suggestions(&config("2025-06-01", &[]), today).unwrap();

        let subject: Vec<_> = with
            .iter()
            .filter(|s| s.category == SuggestionCategory::Subject)
            .collect();
        assert_eq!(subject.len(), 1);
        assert!(subject[0].message.contains("math"));
        assert_eq!(subject[0].action.as_deref(), Some("调整时间分配"));

        assert!(without.iter().all(|s| s.category != SuggestionCategory::Subject));
        assert_eq!(without.len() + 1, with.len());
    }

    #[test]
    fn order_is_schedule_subject_health() {
        let list =
            suggestions(&config("2025-06-01", &["数学", "英语"]), date("2025-01-01")).unwrap();
        let categories: Vec<_> = list.iter().map(|s| s.category).collect();
        assert_eq!(
            categories,
            vec![
                SuggestionCategory::Schedule,
                SuggestionCategory::Subject,
                SuggestionCategory::Health
            ]
        );
        assert!(list[1].message.contains("数学、英语"));
        assert_eq!(titles(&list)[2], "劳逸结合");
    }

    #[test]
    fn unparsable_exam_date_is_an_error() {
        assert!(suggestions(&config("someday", &[]), date("2025-01-01")).is_err());
    }

    #[test]
    fn serializes_type_field() {
        let list = suggestions(&config("2025-06-01", &[]), date("2025-01-01")).unwrap();
        let json = serde_json::to_value(&list[1]).unwrap();
        assert_eq!(json["type"], "warning");
        assert_eq!(json["category"], "health");
        assert!(json.get("action").is_none());
    }
}
