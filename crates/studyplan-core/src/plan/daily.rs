//! Day-level session builder.
//!
//! Every day gets the same skeleton: the first two subjects in the morning, a
//! short break, the remaining subjects in the afternoon, an evening review of
//! the first subject, and a short workout. Only the wording of study sessions
//! is drawn from the random source; durations, types and order are fixed.

use chrono::{Days, NaiveDate};
use rand::Rng;

use crate::catalog;
use crate::learning::{LearningConfig, Priority, SubjectConfig};

use super::{DailyTask, SessionType, TaskSession};

pub const STUDY_MINUTES: u32 = 90;
pub const BREAK_MINUTES: u32 = 15;
pub const REVIEW_MINUTES: u32 = 60;
pub const EXERCISE_MINUTES: u32 = 30;

/// Number of leading subjects studied in the morning block.
const MORNING_SUBJECTS: usize = 2;
/// Weeks after which study sessions are marked high priority.
const HIGH_PRIORITY_AFTER_WEEK: u32 = 8;

const DAY_THEMES: [&str; 7] = [
    "新的一周开始了！",
    "继续努力！",
    "周三半程！",
    "坚持就是胜利！",
    "周末前的冲刺！",
    "周末复习巩固",
    "休息调整心态",
];

/// Vocabulary for study session descriptions.
pub const TASK_KINDS: [&str; 5] = ["知识点学习", "专项练习", "章节复习", "真题训练", "错题重做"];

const REVIEW_PLACEHOLDER: &str = "复习";

/// Theme for a day index. Indexes past the week wrap.
///
/// The theme depends only on the offset inside the plan week, not on the
/// calendar weekday of the date.
pub fn day_theme(day: u8) -> &'static str {
    DAY_THEMES[usize::from(day) % DAY_THEMES.len()]
}

/// Builds the [`DailyTask`] for one day of a plan.
pub struct DailyTaskBuilder<'a> {
    config: &'a LearningConfig,
    start_date: NaiveDate,
}

impl<'a> DailyTaskBuilder<'a> {
    pub fn new(config: &'a LearningConfig, start_date: NaiveDate) -> Self {
        Self { config, start_date }
    }

    /// Calendar date of `day` in 1-based `week`.
    ///
    /// # Panics
    ///
    /// Panics if the date falls outside chrono's range. Timelines from
    /// [`LearningConfig::resolve_dates`] never do.
    pub fn date_for(&self, week: u32, day: u8) -> NaiveDate {
        let offset = u64::from(week.saturating_sub(1)) * 7 + u64::from(day);
        self.start_date + Days::new(offset)
    }

    /// Build the sessions for `day` (0-6) of `week` (1-based).
    pub fn build<R: Rng + ?Sized>(&self, week: u32, day: u8, rng: &mut R) -> DailyTask {
        let subjects = &self.config.subjects;
        let split = subjects.len().min(MORNING_SUBJECTS);
        let (morning, afternoon) = subjects.split_at(split);

        let mut sessions = Vec::with_capacity(subjects.len() + 3);
        sessions.extend(morning.iter().map(|s| study_session(s, week, rng)));
        sessions.push(break_session());
        sessions.extend(afternoon.iter().map(|s| study_session(s, week, rng)));
        sessions.push(review_session(subjects.first()));
        sessions.push(exercise_session());

        DailyTask {
            day_of_week: day,
            date: self.date_for(week, day).format("%Y-%m-%d").to_string(),
            day_theme: day_theme(day).to_string(),
            start_time: self.config.preferred_slot().start_time().to_string(),
            total_hours: study_hours(&sessions),
            sessions,
        }
    }
}

/// Hours spent on study and review sessions.
pub fn study_hours(sessions: &[TaskSession]) -> f64 {
    let minutes: u32 = sessions
        .iter()
        .filter(|s| s.session_type.is_learning())
        .map(|s| s.duration_minutes)
        .sum();
    f64::from(minutes) / 60.0
}

fn study_session<R: Rng + ?Sized>(subject: &SubjectConfig, week: u32, rng: &mut R) -> TaskSession {
    let kind = TASK_KINDS[rng.gen_range(0..TASK_KINDS.len())];
    TaskSession {
        subject: subject.name.clone(),
        subject_emoji: catalog::emoji_or(Some(subject.id.as_str()), catalog::DEFAULT_STUDY_EMOJI)
            .to_string(),
        duration_minutes: STUDY_MINUTES,
        session_type: SessionType::Study,
        task: format!("{} - {}", subject.name, kind),
        priority: if week > HIGH_PRIORITY_AFTER_WEEK {
            Priority::High
        } else {
            Priority::Medium
        },
    }
}

fn break_session() -> TaskSession {
    TaskSession {
        subject: "休息".to_string(),
        subject_emoji: catalog::BREAK_EMOJI.to_string(),
        duration_minutes: BREAK_MINUTES,
        session_type: SessionType::Break,
        task: "适当休息，活动一下".to_string(),
        priority: Priority::Low,
    }
}

fn review_session(subject: Option<&SubjectConfig>) -> TaskSession {
    TaskSession {
        subject: subject
            .map(|s| s.name.clone())
            .unwrap_or_else(|| REVIEW_PLACEHOLDER.to_string()),
        subject_emoji: catalog::emoji_or(
            subject.map(|s| s.id.as_str()),
            catalog::DEFAULT_REVIEW_EMOJI,
        )
        .to_string(),
        duration_minutes: REVIEW_MINUTES,
        session_type: SessionType::Review,
        task: "当日知识点回顾与总结".to_string(),
        priority: Priority::Medium,
    }
}

fn exercise_session() -> TaskSession {
    TaskSession {
        subject: "运动".to_string(),
        subject_emoji: catalog::EXERCISE_EMOJI.to_string(),
        duration_minutes: EXERCISE_MINUTES,
        session_type: SessionType::Exercise,
        task: "适量运动，保持健康".to_string(),
        priority: Priority::Low,
    }
}
