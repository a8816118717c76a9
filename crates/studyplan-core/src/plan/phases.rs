//! Phase allocation.
//!
//! Splits `[1, total_weeks]` into one to three contiguous phases. Short
//! timelines are all sprint; medium ones get strengthening then sprint; long
//! ones get the full foundation, strengthening, sprint progression. The last
//! phase always takes the remainder so durations sum to `total_weeks`.

use crate::learning::{LearningConfig, PhaseKind};

use super::PlanPhase;

/// Longest timeline still planned as a single sprint.
pub const SPRINT_ONLY_MAX_WEEKS: u32 = 12;
/// Longest timeline planned as strengthening plus sprint.
pub const TWO_PHASE_MAX_WEEKS: u32 = 20;

struct PhaseSlot {
    kind: PhaseKind,
    weeks: u32,
    focus: &'static [&'static str],
}

/// Partition the timeline into phases.
pub fn allocate_phases(config: &LearningConfig, total_weeks: u32) -> Vec<PlanPhase> {
    let total_weeks = total_weeks.max(1);
    let first_subject = config.subjects.first().map(|s| s.id.as_str());

    let mut current_week = 0;
    split_weeks(total_weeks)
        .into_iter()
        .map(|slot| {
            let start_week = current_week + 1;
            current_week += slot.weeks;
            PlanPhase {
                name: slot.kind.display_name().to_string(),
                start_week,
                end_week: current_week,
                duration: slot.weeks,
                focus: slot.focus.iter().map(|f| f.to_string()).collect(),
                goals: phase_goals(slot.kind, first_subject)
                    .iter()
                    .map(|g| g.to_string())
                    .collect(),
                weekly_hours: config.daily_hours * 7.0 * f64::from(slot.weeks)
                    / f64::from(total_weeks),
                tasks: Vec::new(),
            }
        })
        .collect()
}

fn split_weeks(total_weeks: u32) -> Vec<PhaseSlot> {
    if total_weeks <= SPRINT_ONLY_MAX_WEEKS {
        vec![PhaseSlot {
            kind: PhaseKind::Sprint,
            weeks: total_weeks,
            focus: &["真题", "重点巩固"],
        }]
    } else if total_weeks <= TWO_PHASE_MAX_WEEKS {
        let strengthening = total_weeks * 6 / 10;
        vec![
            PhaseSlot {
                kind: PhaseKind::Strengthening,
                weeks: strengthening,
                focus: &["专项训练", "真题"],
            },
            PhaseSlot {
                kind: PhaseKind::Sprint,
                weeks: total_weeks - strengthening,
                focus: &["查漏补缺", "模拟"],
            },
        ]
    } else {
        let foundation = total_weeks * 4 / 10;
        let strengthening = total_weeks * 35 / 100;
        vec![
            PhaseSlot {
                kind: PhaseKind::Foundation,
                weeks: foundation,
                focus: &["基础知识", "教材通读"],
            },
            PhaseSlot {
                kind: PhaseKind::Strengthening,
                weeks: strengthening,
                focus: &["专项训练", "真题精练"],
            },
            PhaseSlot {
                kind: PhaseKind::Sprint,
                weeks: total_weeks - foundation - strengthening,
                focus: &["模拟考试", "最后冲刺"],
            },
        ]
    }
}

/// Goals for a phase, specialised by subject id where one is known.
pub fn phase_goals(kind: PhaseKind, subject_id: Option<&str>) -> &'static [&'static str] {
    use PhaseKind::*;
    match (kind, subject_id) {
        (Foundation, Some("english")) => &["掌握3500核心词汇", "熟悉语法基础", "阅读理解入门"],
        (Foundation, Some("politics")) => &["完成马原学习", "理解基本概念", "建立知识框架"],
        (Foundation, Some("math")) => &["夯实计算基础", "掌握核心公式", "完成基础题训练"],
        (Foundation, Some("major")) => &["通读教材一遍", "整理核心笔记", "标记重点难点"],
        (Foundation, _) => &["完成基础知识体系构建", "建立错题本并整理", "形成自己的知识框架"],

        (Strengthening, Some("english")) => &["词汇量达到6000", "真题阅读精练", "作文模板积累"],
        (Strengthening, Some("politics")) => &["完成选择题刷题", "开始分析题学习", "时政热点关注"],
        (Strengthening, Some("math")) => &["强化题型训练", "真题难点攻关", "提高解题速度"],
        (Strengthening, Some("major")) => &["真题研究透彻", "形成答题套路", "重点难点突破"],
        (Strengthening, _) => &["专项训练突破", "真题第一轮", "查漏补缺"],

        (Sprint, Some("english")) => &["作文专项突破", "保持做题手感", "错题最后复习"],
        (Sprint, Some("politics")) => &["时政最后押题", "分析题疯狂背诵", "选择题保持手感"],
        (Sprint, Some("math")) => &["真题最后两遍", "错题清零", "保持状态"],
        (Sprint, Some("major")) => &["真题答案背诵", "模拟考试演练", "知识点最后巩固"],
        (Sprint, _) => &["全真模拟考试", "重点回顾巩固", "调整心态迎接考试"],
    }
}
