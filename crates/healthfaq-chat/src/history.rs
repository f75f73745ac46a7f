//! Per-user chat history, bounded per user and held in memory.
//!
//! Each user keeps at most `limit` entries; older ones are dropped from the
//! front. There is no eviction across users, so the number of users grows
//! with the process lifetime.

use std::collections::{HashMap, VecDeque};

use chrono::{DateTime, FixedOffset, Offset, Utc};
use healthfaq_core::Language;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Indian Standard Time, UTC+05:30.
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

fn ist() -> FixedOffset {
    FixedOffset::east_opt(IST_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// One recorded turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// RFC 3339 timestamp in IST.
    pub timestamp: String,
    pub user_message: String,
    pub bot_response: String,
    pub language: Language,
    /// `YYYY-MM-DD HH:MM:SS IST`.
    pub display_time: String,
}

impl HistoryEntry {
    /// Entry stamped with the current time.
    pub fn now(user_message: impl Into<String>, bot_response: impl Into<String>, language: Language) -> Self {
        Self::at(Utc::now().with_timezone(&ist()), user_message, bot_response, language)
    }

    pub fn at(
        time: DateTime<FixedOffset>,
        user_message: impl Into<String>,
        bot_response: impl Into<String>,
        language: Language,
    ) -> Self {
        Self {
            timestamp: time.to_rfc3339(),
            user_message: user_message.into(),
            bot_response: bot_response.into(),
            language,
            display_time: time.format("%Y-%m-%d %H:%M:%S IST").to_string(),
        }
    }
}

/// Process-wide history keyed by user id.
pub struct HistoryStore {
    limit: usize,
    users: RwLock<HashMap<String, VecDeque<HistoryEntry>>>,
}

impl HistoryStore {
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
            users: RwLock::new(HashMap::new()),
        }
    }

    /// Append an entry, dropping the oldest ones beyond the limit.
    pub fn append(&self, user_id: &str, entry: HistoryEntry) {
        let mut users = self.users.write();
        let history = users.entry(user_id.to_string()).or_default();
        history.push_back(entry);
        while history.len() > self.limit {
            history.pop_front();
        }
    }

    /// History of `user_id`, oldest first. Unknown users have none.
    pub fn get(&self, user_id: &str) -> Vec<HistoryEntry> {
        self.users
            .read()
            .get(user_id)
            .map(|h| h.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self, user_id: &str) -> usize {
        self.users.read().get(user_id).map_or(0, VecDeque::len)
    }

    /// Empty the history of `user_id`, keeping the user known.
    pub fn clear(&self, user_id: &str) {
        self.users.write().entry(user_id.to_string()).or_default().clear();
    }

    /// Number of users with a history slot.
    pub fn user_count(&self) -> usize {
        self.users.read().len()
    }
}
