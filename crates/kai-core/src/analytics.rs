//! Derived analytics over the entry list: trend direction, chart series,
//! per-activity mood ranking, and the filtered trend view. All functions are
//! pure and synchronous; they take an explicit window size and never perform
//! I/O.

use crate::entry::{EntryKind, JournalEntry};

/// Dashboard chart: last 7 mood-bearing entries.
pub const DASHBOARD_WINDOW: usize = 7;

/// Emotional-trend view: last 30 qualifying entries.
pub const TREND_WINDOW: usize = 30;

/// Only activities averaging at least this mood score are "lifting you up".
pub const TOP_ACTIVITY_MIN_AVG: f64 = 7.0;

/// At most this many ranked activities are shown.
pub const TOP_ACTIVITY_LIMIT: usize = 3;

/// Direction between the two most recent mood scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Same,
}

/// Latest/previous mood scores and their comparison. `trend` is `None` until
/// two mood-bearing entries exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoodTrend {
    pub latest: Option<u8>,
    pub previous: Option<u8>,
    pub trend: Option<Trend>,
}

/// One chart point: a formatted date label and the score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodPoint {
    pub label: String,
    pub score: u8,
}

/// An activity tag ranked by its average check-in mood.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityAverage {
    pub name: String,
    pub avg_score: f64,
    pub samples: usize,
}

fn mood_bearing(entries: &[JournalEntry]) -> impl Iterator<Item = &JournalEntry> {
    entries.iter().filter(|e| e.mood_score.is_some())
}

/// Compares the last two mood-bearing entries in list order.
pub fn mood_trend(entries: &[JournalEntry]) -> MoodTrend {
    let mut previous = None;
    let mut latest = None;
    for entry in mood_bearing(entries) {
        previous = latest;
        latest = entry.mood_score;
    }
    let trend = match (latest, previous) {
        (Some(l), Some(p)) if l > p => Some(Trend::Up),
        (Some(l), Some(p)) if l < p => Some(Trend::Down),
        (Some(_), Some(_)) => Some(Trend::Same),
        _ => None,
    };
    MoodTrend {
        latest,
        previous,
        trend,
    }
}

fn to_point(entry: &JournalEntry) -> Option<MoodPoint> {
    entry.mood_score.map(|score| MoodPoint {
        label: entry.date.format("%b %-d").to_string(),
        score,
    })
}

fn last_window<T>(mut items: Vec<T>, window: usize) -> Vec<T> {
    if items.len() > window {
        items.drain(..items.len() - window);
    }
    items
}

/// The last `window` mood-bearing entries, in chronological order, projected
/// to chart points.
pub fn mood_series(entries: &[JournalEntry], window: usize) -> Vec<MoodPoint> {
    last_window(mood_bearing(entries).filter_map(to_point).collect(), window)
}

/// Like [`mood_series`], but with an optional activity filter: when a filter
/// is selected only check-ins tagging that activity qualify.
pub fn filtered_mood_series(
    entries: &[JournalEntry],
    activity: Option<&str>,
    window: usize,
) -> Vec<MoodPoint> {
    let points = entries
        .iter()
        .filter(|e| e.mood_score.is_some())
        .filter(|e| match activity {
            None => true,
            Some(tag) => e.tags_activity(tag),
        })
        .filter_map(to_point)
        .collect();
    last_window(points, window)
}

/// Ranks activity tags by mean check-in mood: keep means >= `min_avg`, sort
/// descending, take `limit`. Ties keep first-encountered tag order (stable
/// sort over insertion-ordered groups).
pub fn top_activities(
    entries: &[JournalEntry],
    min_avg: f64,
    limit: usize,
) -> Vec<ActivityAverage> {
    let mut groups: Vec<(String, Vec<u8>)> = Vec::new();
    for entry in entries {
        if entry.kind != EntryKind::CheckIn {
            continue;
        }
        let (Some(score), Some(activities)) = (entry.mood_score, entry.activities.as_deref())
        else {
            continue;
        };
        for activity in activities {
            match groups.iter_mut().find(|(name, _)| name == activity) {
                Some((_, scores)) => scores.push(score),
                None => groups.push((activity.clone(), vec![score])),
            }
        }
    }

    let mut ranked: Vec<ActivityAverage> = groups
        .into_iter()
        .map(|(name, scores)| ActivityAverage {
            name,
            avg_score: scores.iter().map(|&s| s as f64).sum::<f64>() / scores.len() as f64,
            samples: scores.len(),
        })
        .filter(|a| a.avg_score >= min_avg)
        .collect();
    ranked.sort_by(|a, b| {
        b.avg_score
            .partial_cmp(&a.avg_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(limit);
    ranked
}

/// Distinct activity tags across all check-ins, sorted, for filter chips.
pub fn all_activities(entries: &[JournalEntry]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for entry in entries {
        if entry.kind != EntryKind::CheckIn {
            continue;
        }
        if let Some(activities) = entry.activities.as_deref() {
            for activity in activities {
                if !tags.contains(activity) {
                    tags.push(activity.clone());
                }
            }
        }
    }
    tags.sort();
    tags
}

/// The most recent AI-authored entry carrying a reflection, if any.
pub fn latest_reflection(entries: &[JournalEntry]) -> Option<&JournalEntry> {
    entries
        .iter()
        .rev()
        .find(|e| !e.is_user && e.reflection.is_some())
}

/// Human descriptor for a mood score.
pub fn mood_descriptor(score: u8) -> &'static str {
    if score >= 8 {
        "Feeling Bright"
    } else if score >= 5 {
        "Feeling Steady"
    } else {
        "Feeling Weighed Down"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::MoodLabel;

    fn check_in(label: MoodLabel, activities: &[&str]) -> JournalEntry {
        JournalEntry::check_in(label, 3, activities.iter().map(|s| s.to_string()).collect())
            .expect("valid check-in")
    }

    #[test]
    fn trend_up_down_same() {
        let up = vec![check_in(MoodLabel::Meh, &[]), check_in(MoodLabel::Okay, &[])];
        let snapshot = mood_trend(&up);
        assert_eq!(snapshot.trend, Some(Trend::Up));
        assert_eq!(snapshot.latest, Some(7));
        assert_eq!(snapshot.previous, Some(5));

        let down = vec![check_in(MoodLabel::Okay, &[]), check_in(MoodLabel::Sad, &[])];
        assert_eq!(mood_trend(&down).trend, Some(Trend::Down));

        let same = vec![check_in(MoodLabel::Okay, &[]), check_in(MoodLabel::Okay, &[])];
        assert_eq!(mood_trend(&same).trend, Some(Trend::Same));
    }

    #[test]
    fn trend_needs_two_mood_entries() {
        let one = vec![check_in(MoodLabel::Okay, &[])];
        let snapshot = mood_trend(&one);
        assert_eq!(snapshot.trend, None);
        assert_eq!(snapshot.latest, Some(7));
        assert_eq!(snapshot.previous, None);
        assert_eq!(mood_trend(&[]), MoodTrend::default());
    }

    #[test]
    fn trend_skips_scoreless_entries() {
        let entries = vec![
            check_in(MoodLabel::Meh, &[]),
            JournalEntry::user_text("no score yet"),
            check_in(MoodLabel::Happy, &[]),
        ];
        let snapshot = mood_trend(&entries);
        assert_eq!(snapshot.trend, Some(Trend::Up));
        assert_eq!(snapshot.previous, Some(5));
    }

    #[test]
    fn series_respects_window_and_order() {
        let entries: Vec<JournalEntry> =
            (0..10).map(|_| check_in(MoodLabel::Okay, &[])).collect();
        let series = mood_series(&entries, DASHBOARD_WINDOW);
        assert_eq!(series.len(), 7);
        assert!(series.iter().all(|p| p.score == 7));

        let three: Vec<JournalEntry> = entries.into_iter().take(3).collect();
        assert_eq!(mood_series(&three, DASHBOARD_WINDOW).len(), 3);
    }

    #[test]
    fn top_activities_ranks_and_excludes() {
        let entries = vec![
            check_in(MoodLabel::Worried, &["Work"]),   // 3
            check_in(MoodLabel::Happy, &["Exercise"]), // 9
            check_in(MoodLabel::Okay, &["Social"]),    // 7
            check_in(MoodLabel::Okay, &["Exercise"]),  // 7 -> Exercise avg 8.0
            check_in(MoodLabel::Worried, &["Work"]),   // 3 -> Work avg 3.0, excluded
        ];
        let ranked = top_activities(&entries, TOP_ACTIVITY_MIN_AVG, TOP_ACTIVITY_LIMIT);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].name, "Exercise");
        assert_eq!(ranked[0].avg_score, 8.0);
        assert_eq!(ranked[1].name, "Social");
        assert_eq!(ranked[1].avg_score, 7.0);
    }

    #[test]
    fn top_activities_ties_keep_insertion_order() {
        let entries = vec![
            check_in(MoodLabel::Happy, &["Relaxing"]),
            check_in(MoodLabel::Happy, &["Hobby"]),
        ];
        let ranked = top_activities(&entries, TOP_ACTIVITY_MIN_AVG, TOP_ACTIVITY_LIMIT);
        assert_eq!(ranked[0].name, "Relaxing");
        assert_eq!(ranked[1].name, "Hobby");
    }

    #[test]
    fn filtered_series_honors_activity_tag() {
        let entries = vec![
            check_in(MoodLabel::Happy, &["Exercise"]),
            check_in(MoodLabel::Sad, &["Work"]),
            JournalEntry::reflection("nice work", 6),
        ];
        let all = filtered_mood_series(&entries, None, TREND_WINDOW);
        assert_eq!(all.len(), 3);

        let exercise = filtered_mood_series(&entries, Some("Exercise"), TREND_WINDOW);
        assert_eq!(exercise.len(), 1);
        assert_eq!(exercise[0].score, 9);

        // Reflections carry scores but never activity tags.
        assert!(filtered_mood_series(&entries, Some("Hobby"), TREND_WINDOW).is_empty());
    }

    #[test]
    fn all_activities_sorted_distinct() {
        let entries = vec![
            check_in(MoodLabel::Okay, &["Work", "Social"]),
            check_in(MoodLabel::Okay, &["Exercise", "Work"]),
        ];
        assert_eq!(all_activities(&entries), vec!["Exercise", "Social", "Work"]);
    }

    #[test]
    fn latest_reflection_is_most_recent_ai_entry() {
        let entries = vec![
            JournalEntry::user_text("first"),
            JournalEntry::reflection("one", 5),
            JournalEntry::user_text("second"),
            JournalEntry::fallback_reflection(),
        ];
        let found = latest_reflection(&entries).expect("reflection present");
        assert!(!found.is_user);
        assert_eq!(found.id, entries[3].id);
    }

    #[test]
    fn descriptor_bands() {
        assert_eq!(mood_descriptor(9), "Feeling Bright");
        assert_eq!(mood_descriptor(5), "Feeling Steady");
        assert_eq!(mood_descriptor(2), "Feeling Weighed Down");
    }
}
