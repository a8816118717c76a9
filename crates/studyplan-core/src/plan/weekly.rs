//! Week-level template builder.

use chrono::NaiveDate;
use rand::Rng;

use crate::learning::LearningConfig;

use super::daily::DailyTaskBuilder;
use super::WeeklyTemplate;

/// Weeks past this limit get no template.
pub const MAX_TEMPLATE_WEEKS: u32 = 52;
pub const DAYS_PER_WEEK: u8 = 7;

const WEEK_THEMES: [&str; 8] = [
    "适应期 - 建立学习节奏",
    "基础巩固 - 夯实根基",
    "稳步提升 - 循序渐进",
    "专项突破 - 薄弱环节",
    "综合训练 - 融会贯通",
    "查漏补缺 - 巩固强化",
    "模拟演练 - 检验成果",
    "最后冲刺 - 全力拼搏",
];

const WEEK_TIPS: [[&str; 2]; 8] = [
    ["保持积极心态", "规律作息很重要"],
    ["做好笔记整理", "发现问题及时解决"],
    ["适当增加难度", "保持学习节奏"],
    ["查漏补缺", "重点难点突破"],
    ["多做真题", "模拟真实考试环境"],
    ["回顾错题本", "巩固薄弱环节"],
    ["全真模拟", "调整考试心态"],
    ["保持状态", "相信自己！"],
];

/// Theme for 1-based `week`, cycling through the rotation.
pub fn week_theme(week: u32) -> &'static str {
    let idx = week.saturating_sub(1) as usize % WEEK_THEMES.len();
    WEEK_THEMES[idx]
}

/// Tips for 1-based `week`. Weeks past the rotation keep the last entry.
pub fn week_tips(week: u32) -> [&'static str; 2] {
    let idx = (week.saturating_sub(1) as usize).min(WEEK_TIPS.len() - 1);
    WEEK_TIPS[idx]
}

/// Builds weekly templates for a plan timeline.
pub struct WeeklyTemplateBuilder<'a> {
    config: &'a LearningConfig,
    total_weeks: u32,
    days: DailyTaskBuilder<'a>,
}

impl<'a> WeeklyTemplateBuilder<'a> {
    pub fn new(config: &'a LearningConfig, total_weeks: u32, start_date: NaiveDate) -> Self {
        Self {
            config,
            total_weeks: total_weeks.max(1),
            days: DailyTaskBuilder::new(config, start_date),
        }
    }

    /// Number of templates [`build_all`](Self::build_all) produces.
    pub fn template_count(&self) -> u32 {
        self.total_weeks.min(MAX_TEMPLATE_WEEKS)
    }

    /// Templates for weeks `1..=min(total_weeks, 52)`.
    pub fn build_all<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<WeeklyTemplate> {
        (1..=self.template_count())
            .map(|week| self.build_week(week, rng))
            .collect()
    }

    pub fn build_week<R: Rng + ?Sized>(&self, week: u32, rng: &mut R) -> WeeklyTemplate {
        let focus_subjects = self.focus_subjects(week);
        let daily_tasks = (0..DAYS_PER_WEEK)
            .map(|day| self.days.build(week, day, rng))
            .collect();

        let completion = (100.0 - f64::from(week) / f64::from(self.total_weeks) * 20.0).round();
        let goals = vec![
            format!("完成本周计划的{completion}%"),
            format!("重点复习 {}", focus_subjects.join("、")),
            "保持每天7-8小时专注学习".to_string(),
        ];

        WeeklyTemplate {
            week_number: week,
            theme: week_theme(week).to_string(),
            focus_subjects,
            daily_tasks,
            goals,
            tips: week_tips(week).iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Focus subjects by position in the timeline.
    ///
    /// The first 40% of weeks take subjects 0-1, weeks up to 75% take
    /// subjects 1-2, and the tail takes the last two. Subject weight and
    /// priority play no part.
    pub fn focus_subjects(&self, week: u32) -> Vec<String> {
        let subjects = &self.config.subjects;
        let position = f64::from(week);
        let total = f64::from(self.total_weeks);

        let selected: Vec<_> = if position <= total * 0.4 {
            subjects.iter().take(2).collect()
        } else if position <= total * 0.75 {
            subjects.iter().skip(1).take(2).collect()
        } else {
            subjects.iter().skip(subjects.len().saturating_sub(2)).collect()
        };
        selected.into_iter().map(|s| s.name.clone()).collect()
    }
}
