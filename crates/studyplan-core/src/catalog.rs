//! Static subject metadata.
//!
//! Maps subject identifiers to their display glyph and full name, and maps
//! subject display names to the category used by exported tasks. All tables
//! are read-only statics.

/// Display metadata for a known subject id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectInfo {
    pub id: &'static str,
    pub emoji: &'static str,
    pub full_name: &'static str,
}

const fn entry(id: &'static str, emoji: &'static str, full_name: &'static str) -> SubjectInfo {
    SubjectInfo {
        id,
        emoji,
        full_name,
    }
}

const SUBJECTS: &[SubjectInfo] = &[
    entry("english", "🔤", "英语"),
    entry("politics", "📰", "政治"),
    entry("math", "🔢", "数学"),
    entry("major", "🎓", "专业课"),
    entry("study", "📚", "学习"),
    entry("exercise", "🏃", "运动"),
    entry("rest", "😴", "休息"),
];

/// Fallback glyph for study sessions whose subject id is unknown.
pub const DEFAULT_STUDY_EMOJI: &str = "📚";
/// Fallback glyph for review sessions.
pub const DEFAULT_REVIEW_EMOJI: &str = "📝";
/// Glyph for break sessions.
pub const BREAK_EMOJI: &str = "☕";
/// Glyph for exercise sessions.
pub const EXERCISE_EMOJI: &str = "🏃";

/// Category assigned to exported tasks whose subject is not recognized.
pub const FALLBACK_CATEGORY: &str = "study";

/// Look up a subject by id.
pub fn lookup(id: &str) -> Option<&'static SubjectInfo> {
    SUBJECTS.iter().find(|s| s.id == id)
}

/// Emoji for a subject id, or `fallback` when the id is unknown.
pub fn emoji_or(id: Option<&str>, fallback: &'static str) -> &'static str {
    id.and_then(lookup).map(|s| s.emoji).unwrap_or(fallback)
}

/// Export category for a subject display name.
///
/// Only the four exam subjects have a dedicated category; anything else maps
/// to [`FALLBACK_CATEGORY`].
pub fn category_for_name(name: &str) -> &'static str {
    match name {
        "英语" => "english",
        "政治" => "politics",
        "数学" => "math",
        "专业课" => "major",
        _ => FALLBACK_CATEGORY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_and_unknown_ids() {
        assert_eq!(lookup("math").map(|s| s.full_name), Some("数学"));
        assert_eq!(lookup("english").map(|s| s.emoji), Some("🔤"));
        assert!(lookup("chemistry").is_none());
    }

    #[test]
    fn emoji_falls_back_per_type() {
        assert_eq!(emoji_or(Some("major"), DEFAULT_STUDY_EMOJI), "🎓");
        assert_eq!(emoji_or(Some("history"), DEFAULT_STUDY_EMOJI), "📚");
        assert_eq!(emoji_or(None, DEFAULT_REVIEW_EMOJI), "📝");
    }

    #[test]
    fn categories_by_display_name() {
        assert_eq!(category_for_name("英语"), "english");
        assert_eq!(category_for_name("专业课"), "major");
        assert_eq!(category_for_name("math"), "study");
        assert_eq!(category_for_name("复习"), "study");
    }

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<_> = SUBJECTS.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SUBJECTS.len());
    }
}
