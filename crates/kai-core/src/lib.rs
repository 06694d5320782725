//! kai-core: the headless core of a mood-journaling companion app.
//!
//! Users check in with mood/stress/activity data and write free-text journal
//! entries that receive a reflective response from "Kai", the AI companion.
//! This crate owns the three pieces a UI shell drives: the durable entry
//! store, the pure analytics derivations (trend, chart series, activity
//! ranking), and the reflection bridge to the generative AI service (with a
//! local mock when no credential is configured).
//!
//! Data flows one direction: user action -> store mutation -> analytics
//! recompute -> render. The bridge is invoked only from the journal
//! submission path and writes its result back as a new entry.

mod analytics;
mod config;
mod entry;
mod error;
mod journal;
mod quotes;
mod reflection;
mod store;

pub use analytics::{
    all_activities, filtered_mood_series, latest_reflection, mood_descriptor, mood_series,
    mood_trend, top_activities, ActivityAverage, MoodPoint, MoodTrend, Trend, DASHBOARD_WINDOW,
    TOP_ACTIVITY_LIMIT, TOP_ACTIVITY_MIN_AVG, TREND_WINDOW,
};
pub use config::CompanionConfig;
pub use entry::{
    EntryKind, JournalEntry, MoodLabel, ACTIVITY_OPTIONS, MOOD_SCORE_MAX, MOOD_SCORE_MIN,
    STRESS_MAX, STRESS_MIN,
};
pub use error::{AnalysisError, StoreError, ValidationError};
pub use journal::{
    CheckIn, Companion, DashboardSnapshot, JournalOutcome, TrendsSnapshot, ANALYSIS_FAILED_NOTICE,
};
pub use quotes::{daily_quote, daily_quote_today, Quote, DAILY_QUOTES};
pub use reflection::{mock_analysis, parse_analysis, Analyst, JournalAnalysis, ReflectionBridge};
pub use store::EntryStore;
