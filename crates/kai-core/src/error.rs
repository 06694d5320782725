//! Error taxonomy. Nothing here is fatal: storage read corruption collapses
//! to an empty history, storage writes are best-effort, and a failed analysis
//! degrades to a fallback reflection with the history preserved.

use thiserror::Error;

/// Opening the durable store failed. Read corruption and write failures are
/// handled inside the store (logged, never propagated).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open entry store: {0}")]
    Open(#[from] sled::Error),
}

/// The reflection adapter could not produce a usable analysis. No retry is
/// performed; the caller appends the fallback entry.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("reflection request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("AI service returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("AI response was not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("AI response shape invalid: {0}")]
    Shape(String),
}

/// Caller-side guard failures. The operation is simply not initiated: no
/// entry is created and nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("journal entry text is empty")]
    EmptyEntry,

    #[error("stress level {0} is outside 1-5")]
    StressOutOfRange(u8),
}
