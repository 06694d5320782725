//! Daily insight quote: a fixed ordered list indexed by day-of-year, so the
//! pick is deterministic per calendar day and nothing is stored.

use chrono::{Datelike, NaiveDate, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub quote: &'static str,
    pub author: &'static str,
}

pub const DAILY_QUOTES: [Quote; 7] = [
    Quote {
        quote: "The best way to get started is to quit talking and begin doing.",
        author: "Walt Disney",
    },
    Quote {
        quote: "The secret of getting ahead is getting started.",
        author: "Mark Twain",
    },
    Quote {
        quote: "It's not whether you get knocked down, it's whether you get up.",
        author: "Vince Lombardi",
    },
    Quote {
        quote: "The journey of a thousand miles begins with a single step.",
        author: "Lao Tzu",
    },
    Quote {
        quote: "Believe you can and you're halfway there.",
        author: "Theodore Roosevelt",
    },
    Quote {
        quote: "The only way to do great work is to love what you do.",
        author: "Steve Jobs",
    },
    Quote {
        quote: "Act as if what you do makes a difference. It does.",
        author: "William James",
    },
];

/// Quote for the given calendar day: `day-of-year mod list length`.
pub fn daily_quote(date: NaiveDate) -> &'static Quote {
    &DAILY_QUOTES[date.ordinal() as usize % DAILY_QUOTES.len()]
}

/// Quote for today (UTC).
pub fn daily_quote_today() -> &'static Quote {
    daily_quote(Utc::now().date_naive())
}
