//! Journal entry data model: the sole persisted entity.
//!
//! One list, append-order == chronological order. A check-in is a single
//! complete record (mood score derived synchronously from its label). A
//! journal round-trip produces two records: the user's text, then exactly one
//! AI-authored response (reflection + score on success, reflection only on
//! failure).

use crate::error::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed activity vocabulary offered at check-in time.
pub const ACTIVITY_OPTIONS: [&str; 6] = ["Work", "Exercise", "Social", "Family", "Relaxing", "Hobby"];

/// Stress is self-rated on a 1 (low) to 5 (high) scale.
pub const STRESS_MIN: u8 = 1;
pub const STRESS_MAX: u8 = 5;

/// Mood scores are normalized to 1 (very negative) .. 10 (very positive).
pub const MOOD_SCORE_MIN: u8 = 1;
pub const MOOD_SCORE_MAX: u8 = 10;

/// Entry kind. Always present; untyped legacy records are not tolerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    /// Free-text reflection, paired with an AI response.
    Journal,
    /// Structured mood/stress/activity record, complete at creation.
    CheckIn,
}

/// The fixed mood vocabulary offered at check-in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoodLabel {
    Happy,
    Okay,
    Meh,
    Worried,
    Sad,
}

impl MoodLabel {
    /// The single label -> score lookup. Never duplicated at call sites.
    pub fn score(&self) -> u8 {
        match self {
            Self::Happy => 9,
            Self::Okay => 7,
            Self::Meh => 5,
            Self::Worried => 3,
            Self::Sad => 2,
        }
    }

    /// All labels in display order.
    pub fn all() -> [Self; 5] {
        [Self::Happy, Self::Okay, Self::Meh, Self::Worried, Self::Sad]
    }
}

/// A single journal/check-in record. Field names match the stored JSON slot
/// (`isUser`, `moodScore`, ...) so histories round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// Opaque unique identifier, assigned at creation.
    pub id: String,
    /// Creation timestamp; serialized as ISO-8601 / RFC 3339.
    pub date: DateTime<Utc>,
    /// True when authored by the human, false for the AI companion.
    pub is_user: bool,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Free-form text; user journal entries only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// The companion's supportive response; AI-authored entries only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflection: Option<String>,
    /// Check-ins only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood_label: Option<MoodLabel>,
    /// Check-ins only; 1..=5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress_level: Option<u8>,
    /// Check-ins only; may be empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<String>>,
    /// 1..=10 where present. Check-ins carry it from creation; AI responses
    /// carry it on success; plain user journal text has none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood_score: Option<u8>,
}

impl JournalEntry {
    fn base(is_user: bool, kind: EntryKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date: Utc::now(),
            is_user,
            kind,
            text: None,
            reflection: None,
            mood_label: None,
            stress_level: None,
            activities: None,
            mood_score: None,
        }
    }

    /// A complete check-in record. The mood score is derived from the label
    /// here and now; a check-in is never pending.
    pub fn check_in(
        mood: MoodLabel,
        stress_level: u8,
        activities: Vec<String>,
    ) -> Result<Self, ValidationError> {
        if !(STRESS_MIN..=STRESS_MAX).contains(&stress_level) {
            return Err(ValidationError::StressOutOfRange(stress_level));
        }
        let mut entry = Self::base(true, EntryKind::CheckIn);
        entry.mood_label = Some(mood);
        entry.stress_level = Some(stress_level);
        entry.activities = Some(activities);
        entry.mood_score = Some(mood.score());
        Ok(entry)
    }

    /// The user half of a journal round-trip. No mood score yet; the AI
    /// response carries one.
    pub fn user_text(text: impl Into<String>) -> Self {
        let mut entry = Self::base(true, EntryKind::Journal);
        entry.text = Some(text.into());
        entry
    }

    /// The AI half of a journal round-trip on success.
    pub fn reflection(reflection: impl Into<String>, mood_score: u8) -> Self {
        let mut entry = Self::base(false, EntryKind::Journal);
        entry.reflection = Some(reflection.into());
        entry.mood_score = Some(mood_score);
        entry
    }

    /// The AI half when analysis failed: a generic reflection and no score,
    /// so the conversation thread is never left dangling.
    pub fn fallback_reflection() -> Self {
        let mut entry = Self::base(false, EntryKind::Journal);
        entry.reflection =
            Some("Sorry, I was unable to process that. Please try again later.".to_string());
        entry
    }

    /// True for check-ins tagged with the given activity.
    pub fn tags_activity(&self, activity: &str) -> bool {
        self.kind == EntryKind::CheckIn
            && self
                .activities
                .as_deref()
                .is_some_and(|tags| tags.iter().any(|a| a == activity))
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        serde_json::to_vec(self).unwrap_or_default()
    }

    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        serde_json::from_slice(bytes).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_scores_stay_in_range() {
        for label in MoodLabel::all() {
            assert!((MOOD_SCORE_MIN..=MOOD_SCORE_MAX).contains(&label.score()));
        }
    }

    #[test]
    fn check_in_is_complete_at_creation() {
        let entry = JournalEntry::check_in(MoodLabel::Happy, 2, vec!["Exercise".into()])
            .expect("valid check-in");
        assert_eq!(entry.kind, EntryKind::CheckIn);
        assert_eq!(entry.mood_score, Some(9));
        assert!(entry.is_user);
    }

    #[test]
    fn check_in_rejects_out_of_range_stress() {
        assert_eq!(
            JournalEntry::check_in(MoodLabel::Meh, 0, vec![]),
            Err(ValidationError::StressOutOfRange(0))
        );
        assert_eq!(
            JournalEntry::check_in(MoodLabel::Meh, 6, vec![]),
            Err(ValidationError::StressOutOfRange(6))
        );
    }

    #[test]
    fn kind_serializes_kebab_case() {
        let entry = JournalEntry::user_text("hello");
        let json = serde_json::to_value(&entry).expect("serialize");
        assert_eq!(json["type"], "journal");
        assert_eq!(json["isUser"], true);
        assert!(json.get("moodScore").is_none());
    }

    #[test]
    fn entry_round_trips_by_value() {
        let entry = JournalEntry::check_in(MoodLabel::Sad, 5, vec!["Work".into()])
            .expect("valid check-in");
        let restored = JournalEntry::from_bytes(&entry.to_bytes()).expect("parse");
        assert_eq!(entry, restored);
    }
}
