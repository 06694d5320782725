//! Companion wiring: the check-in and journal submission flows, plus the
//! one-call snapshots the dashboard and trends views render.
//!
//! Dependencies are explicit — construct the store once at startup and hand
//! it in; there is no hidden global state. Mutation happens only here and in
//! direct store calls, so the event sequence stays serialized.

use crate::analytics::{
    self, ActivityAverage, MoodPoint, MoodTrend, DASHBOARD_WINDOW, TOP_ACTIVITY_LIMIT,
    TOP_ACTIVITY_MIN_AVG, TREND_WINDOW,
};
use crate::entry::{JournalEntry, MoodLabel};
use crate::error::ValidationError;
use crate::quotes::{daily_quote_today, Quote};
use crate::reflection::Analyst;
use crate::store::EntryStore;
use std::sync::Arc;

/// Inline notice shown when analysis fails and the fallback entry is used.
pub const ANALYSIS_FAILED_NOTICE: &str = "Kai is resting. Could not get a reflection.";

/// One structured mood/stress/activity record, captured in a single action.
#[derive(Debug, Clone)]
pub struct CheckIn {
    pub mood: MoodLabel,
    pub stress_level: u8,
    pub activities: Vec<String>,
}

/// Result of a journal submission. Either way exactly one AI-authored entry
/// was appended after the user's.
#[derive(Debug, Clone)]
pub enum JournalOutcome {
    /// The analysis succeeded; the AI entry carries reflection + mood score.
    Reflected {
        user_entry: JournalEntry,
        ai_entry: JournalEntry,
    },
    /// The analysis failed; a generic scoreless reflection was appended and
    /// the caller should surface [`ANALYSIS_FAILED_NOTICE`].
    Fallback {
        user_entry: JournalEntry,
        ai_entry: JournalEntry,
    },
}

/// Everything the dashboard renders, recomputed from the current list.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    pub mood: MoodTrend,
    /// Descriptor for the latest score, when one exists.
    pub descriptor: Option<&'static str>,
    /// Kai's most recent reflection.
    pub insight: Option<JournalEntry>,
    pub series: Vec<MoodPoint>,
    pub top_activities: Vec<ActivityAverage>,
    pub quote: &'static Quote,
}

/// The emotional-trend view: filter chips plus the filtered series.
#[derive(Debug, Clone)]
pub struct TrendsSnapshot {
    pub activities: Vec<String>,
    pub series: Vec<MoodPoint>,
}

/// The companion core a UI shell drives: owns the store handle and the
/// reflection analyst.
pub struct Companion {
    store: Arc<EntryStore>,
    analyst: Box<dyn Analyst>,
}

impl Companion {
    pub fn new(store: Arc<EntryStore>, analyst: impl Analyst + 'static) -> Self {
        Self {
            store,
            analyst: Box::new(analyst),
        }
    }

    pub fn store(&self) -> &Arc<EntryStore> {
        &self.store
    }

    /// Records a check-in: one complete entry, appended synchronously.
    pub fn check_in(&self, check_in: CheckIn) -> Result<JournalEntry, ValidationError> {
        let entry =
            JournalEntry::check_in(check_in.mood, check_in.stress_level, check_in.activities)?;
        self.store.add_entry(entry.clone());
        Ok(entry)
    }

    /// The journal round-trip: append the user's text, analyze it, and append
    /// exactly one AI response — the reflection on success, the fallback on
    /// failure. An in-flight analysis runs to completion; its result is
    /// always appended.
    pub async fn submit_journal(&self, text: &str) -> Result<JournalOutcome, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyEntry);
        }

        let user_entry = JournalEntry::user_text(text);
        self.store.add_entry(user_entry.clone());

        match self.analyst.analyze(text).await {
            Ok(analysis) => {
                let ai_entry = JournalEntry::reflection(analysis.reflection, analysis.mood_score);
                self.store.add_entry(ai_entry.clone());
                Ok(JournalOutcome::Reflected {
                    user_entry,
                    ai_entry,
                })
            }
            Err(e) => {
                tracing::warn!(target: "kai::journal", "journal analysis failed: {e}");
                let ai_entry = JournalEntry::fallback_reflection();
                self.store.add_entry(ai_entry.clone());
                Ok(JournalOutcome::Fallback {
                    user_entry,
                    ai_entry,
                })
            }
        }
    }

    /// Recomputes the dashboard over a snapshot of the list.
    pub fn dashboard(&self) -> DashboardSnapshot {
        let entries = self.store.entries();
        let mood = analytics::mood_trend(&entries);
        DashboardSnapshot {
            mood,
            descriptor: mood.latest.map(analytics::mood_descriptor),
            insight: analytics::latest_reflection(&entries).cloned(),
            series: analytics::mood_series(&entries, DASHBOARD_WINDOW),
            top_activities: analytics::top_activities(
                &entries,
                TOP_ACTIVITY_MIN_AVG,
                TOP_ACTIVITY_LIMIT,
            ),
            quote: daily_quote_today(),
        }
    }

    /// Recomputes the emotional-trend view, optionally filtered by activity.
    pub fn trends(&self, activity: Option<&str>) -> TrendsSnapshot {
        let entries = self.store.entries();
        TrendsSnapshot {
            activities: analytics::all_activities(&entries),
            series: analytics::filtered_mood_series(&entries, activity, TREND_WINDOW),
        }
    }
}
